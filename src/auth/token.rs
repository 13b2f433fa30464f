//! Geração e verificação do JWT de sessão

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::AuthenticatedUser;

/// Validade do token: 7 dias
const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Claims do token de sessão
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Id do usuário (ObjectId em hex)
    pub sub: String,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    /// Expiração (Unix timestamp)
    pub exp: u64,
    /// Emissão (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Identidade exposta nas respostas da API
    pub fn user(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.sub.clone(),
            nome: self.nome.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Cria um token de sessão para o usuário
pub fn create_token(
    user: &AuthenticatedUser,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp() as u64;

    let claims = Claims {
        sub: user.id.clone(),
        nome: user.nome.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifica e decodifica um token de sessão
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario() -> AuthenticatedUser {
        AuthenticatedUser {
            id: "65f0c0ffee65f0c0ffee65f0".to_string(),
            nome: "Dra. Ana Souza".to_string(),
            email: "ana@escritorio.adv.br".to_string(),
            role: "advogado".to_string(),
        }
    }

    #[test]
    fn test_create_e_verify_token() {
        let token = create_token(&usuario(), "segredo-de-teste").unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, "segredo-de-teste").unwrap();
        assert_eq!(claims.sub, "65f0c0ffee65f0c0ffee65f0");
        assert_eq!(claims.email, "ana@escritorio.adv.br");
        assert_eq!(claims.role, "advogado");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_invalido() {
        assert!(verify_token("token.invalido.aqui", "segredo-de-teste").is_err());
    }

    #[test]
    fn test_segredo_errado_rejeita() {
        let token = create_token(&usuario(), "segredo-correto").unwrap();
        assert!(verify_token(&token, "segredo-errado").is_err());
    }

    #[test]
    fn test_claims_para_usuario() {
        let token = create_token(&usuario(), "segredo-de-teste").unwrap();
        let claims = verify_token(&token, "segredo-de-teste").unwrap();

        let user = claims.user();
        assert_eq!(user.nome, "Dra. Ana Souza");
        assert_eq!(user.id, "65f0c0ffee65f0c0ffee65f0");
    }
}
