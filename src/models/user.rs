//! Usuários do CRM (advogados e equipe do escritório)

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Papel padrão quando o documento não informa um
const DEFAULT_ROLE: &str = "advogado";

/// Documento persistido na coleção `users`
#[derive(Debug, Clone, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub nome: String,
    pub email: String,
    /// Hash bcrypt, nunca exposto nas respostas
    pub senha: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub ativo: Option<bool>,
}

/// Identidade devolvida por `GET /api/auth/me` e embutida no token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl From<&UserDocument> for AuthenticatedUser {
    fn from(user: &UserDocument) -> Self {
        Self {
            id: user.id.to_hex(),
            nome: user.nome.clone(),
            email: user.email.clone(),
            role: user.role.clone().unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        }
    }
}
