// Biblioteca do backend CRM previdenciário
// Expõe módulos para uso em testes e binários

pub mod auth;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub db: mongodb::Database,
    pub chats: services::ChatService,
    pub users: services::UserService,
    pub evolution: Option<evolution::EvolutionClient>,
}
