//! Autenticação por cookie de sessão
//!
//! O login emite um JWT guardado no cookie `auth-token` (HttpOnly,
//! SameSite=Lax, Secure em produção). Cada requisição autenticada
//! verifica o token do cookie; o logout apenas limpa o cookie no
//! cliente — não há invalidação de sessão no servidor.

pub mod cookies;
pub mod token;

pub use cookies::{clear_cookie, extract_token, session_cookie, AUTH_COOKIE};
pub use token::{create_token, verify_token, Claims};

use axum::http::HeaderMap;

/// Resolve o usuário autenticado a partir do cookie da requisição
///
/// Retorna `None` quando o cookie está ausente, expirado ou inválido —
/// sem distinguir o motivo para o chamador.
pub fn authenticate(headers: &HeaderMap, jwt_secret: &str) -> Option<Claims> {
    let token = cookies::extract_token(headers)?;
    token::verify_token(&token, jwt_secret).ok()
}
