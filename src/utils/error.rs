use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Unauthorized(String),
    ValidationError(String),
    DatabaseError(String),
    EvolutionApi(String),
    ServiceUnavailable(String),
    ConfigError(String),
    JsonError(serde_json::Error),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::EvolutionApi(msg) => write!(f, "Evolution API error: {}", msg),
            AppError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::JsonError(err) => write!(f, "JSON error: {}", err),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for AppError {
    /// Contrato de erro do backend: status não-2xx somente para falha da
    /// própria requisição; detalhe bruto vai para o log do servidor, nunca
    /// para o cliente.
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ServiceUnavailable(detail) => {
                tracing::error!("Serviço indisponível: {}", detail);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Serviço temporariamente indisponível".to_string(),
                )
            }
            AppError::EvolutionApi(detail) => {
                tracing::error!("Evolution API: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    "Falha na comunicação com a Evolution API".to_string(),
                )
            }
            AppError::DatabaseError(detail) => {
                tracing::error!("Banco de dados: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
            AppError::ConfigError(detail) => {
                tracing::error!("Configuração: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
            AppError::JsonError(err) => {
                tracing::error!("JSON: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
            AppError::InternalError(detail) => {
                tracing::error!("Erro interno: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "message": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
