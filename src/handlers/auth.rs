//! Rotas de autenticação: login, sessão atual e logout

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use inss_crm_backend::auth;
use inss_crm_backend::auth::cookies::SESSION_MAX_AGE_SECS;
use inss_crm_backend::models::AuthenticatedUser;
use inss_crm_backend::utils::logging::*;
use inss_crm_backend::utils::AppError;
use inss_crm_backend::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// POST /api/auth/login
///
/// Verifica email e senha contra a coleção de usuários e emite o cookie
/// de sessão. A mensagem de recusa é única, sem dizer qual campo errou.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError> {
    log_request_received("/api/auth/login", "POST");

    let email = body.email.trim();
    if email.is_empty() || body.senha.is_empty() {
        return Err(AppError::ValidationError(
            "Email e senha são obrigatórios".to_string(),
        ));
    }

    let user = state
        .users
        .find_by_email(email)
        .await
        .map_err(|e| {
            log_db_error("find_by_email", &e.to_string());
            AppError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| AppError::Unauthorized("Credenciais inválidas".to_string()))?;

    if !user.ativo.unwrap_or(true) {
        log_auth_denied("/api/auth/login");
        return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
    }

    let senha_confere = bcrypt::verify(&body.senha, &user.senha)
        .map_err(|e| AppError::InternalError(format!("bcrypt: {}", e)))?;

    if !senha_confere {
        log_auth_denied("/api/auth/login");
        return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
    }

    let auth_user = AuthenticatedUser::from(&user);
    let token = auth::create_token(&auth_user, &state.settings.auth.jwt_secret)
        .map_err(|e| AppError::InternalError(format!("Falha ao gerar token: {}", e)))?;

    let cookie = auth::session_cookie(&token, SESSION_MAX_AGE_SECS, state.settings.cookie_secure());

    log_info(&format!("✅ Login de {}", auth_user.email));

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(json!({
            "success": true,
            "data": auth_user
        })),
    )
        .into_response())
}

/// GET /api/auth/me
///
/// Devolve a identidade da sessão atual ou 401.
pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    log_request_received("/api/auth/me", "GET");

    let claims = auth::authenticate(&headers, &state.settings.auth.jwt_secret).ok_or_else(|| {
        log_auth_denied("/api/auth/me");
        AppError::Unauthorized("Não autorizado".to_string())
    })?;

    Ok(Json(json!({
        "success": true,
        "data": claims.user()
    })))
}

/// POST /api/auth/logout
///
/// Sempre responde sucesso e manda o cliente descartar o cookie
/// (Max-Age=0). Não há invalidação de sessão no servidor.
pub async fn logout(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    log_request_received("/api/auth/logout", "POST");

    let cookie = auth::clear_cookie(state.settings.cookie_secure());

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(json!({
            "success": true,
            "message": "Logout realizado com sucesso"
        })),
    )
        .into_response())
}
