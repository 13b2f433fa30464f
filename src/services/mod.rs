// Serviços de acesso ao MongoDB
pub mod chats;
pub mod users;

pub use chats::ChatService;
pub use users::UserService;
