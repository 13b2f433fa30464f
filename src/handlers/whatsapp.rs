//! Rotas do WhatsApp: listagem de chats e envio de mensagem

use axum::{
    extract::State,
    http::HeaderMap,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::time::Instant;

use evolution::EvolutionError;
use inss_crm_backend::auth;
use inss_crm_backend::models::ChatSummary;
use inss_crm_backend::utils::logging::*;
use inss_crm_backend::utils::AppError;
use inss_crm_backend::AppState;

/// Quantidade de chats devolvida pela listagem
const CHAT_LIST_LIMIT: i64 = 50;

/// GET /api/whatsapp/chats
///
/// Lista os 50 chats com atividade mais recente, achatados para o
/// frontend. A consulta é global (sem filtro por cliente): implantação
/// de escritório único.
pub async fn list_chats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let start_time = Instant::now();
    log_request_received("/api/whatsapp/chats", "GET");

    if auth::authenticate(&headers, &state.settings.auth.jwt_secret).is_none() {
        log_auth_denied("/api/whatsapp/chats");
        return Err(AppError::Unauthorized("Não autorizado".to_string()));
    }

    let chats = state.chats.list_recent(CHAT_LIST_LIMIT).await.map_err(|e| {
        log_db_error("list_recent", &e.to_string());
        AppError::DatabaseError(e.to_string())
    })?;

    let data: Vec<ChatSummary> = chats.into_iter().map(ChatSummary::from).collect();

    let processing_time = start_time.elapsed().as_millis() as u64;
    log_request_processed("/api/whatsapp/chats", 200, processing_time);
    log_info(&format!("✅ Listados {} chats", data.len()));

    Ok(Json(json!({
        "success": true,
        "data": data
    })))
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub number: String,
    pub text: String,
}

/// POST /api/whatsapp/send
///
/// Envia uma mensagem de texto pela instância configurada no gateway.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<Value>, AppError> {
    log_request_received("/api/whatsapp/send", "POST");

    if auth::authenticate(&headers, &state.settings.auth.jwt_secret).is_none() {
        log_auth_denied("/api/whatsapp/send");
        return Err(AppError::Unauthorized("Não autorizado".to_string()));
    }

    let number = body.number.trim();
    let text = body.text.trim();
    if number.is_empty() || text.is_empty() {
        return Err(AppError::ValidationError(
            "Campos 'number' e 'text' são obrigatórios".to_string(),
        ));
    }

    let client = state.evolution.as_ref().ok_or_else(|| {
        AppError::ConfigError("Evolution API não configurada (EVOLUTION_API_URL/EVOLUTION_API_KEY)".to_string())
    })?;
    let instance = state.settings.evolution.instance().ok_or_else(|| {
        AppError::ConfigError("EVOLUTION_INSTANCE não configurada".to_string())
    })?;

    match client.send_text(instance, number, text).await {
        Ok(resposta) => {
            log_info(&format!("✅ Mensagem enviada para {}", number));
            Ok(Json(json!({
                "success": true,
                "data": resposta
            })))
        }
        Err(EvolutionError::HttpError(e)) => Err(AppError::ServiceUnavailable(e.to_string())),
        Err(e) => {
            log_evolution_api_error("/message/sendText", None, &e.to_string());
            Err(AppError::EvolutionApi(e.to_string()))
        }
    }
}
