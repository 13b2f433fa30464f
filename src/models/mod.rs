// Modelos de dados (documentos do MongoDB e formas de resposta da API)
pub mod chat;
pub mod user;

pub use chat::{phone_from_jid, ChatDocument, ChatSummary};
pub use user::{AuthenticatedUser, UserDocument};
