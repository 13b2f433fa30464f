// Handlers HTTP do backend
pub mod auth;
pub mod evolution_check;
pub mod health;
pub mod index;
pub mod whatsapp;

pub use auth::*;
pub use evolution_check::*;
pub use health::*;
pub use index::*;
pub use whatsapp::*;
