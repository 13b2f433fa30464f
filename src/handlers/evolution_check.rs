//! Diagnóstico de conectividade com a Evolution API
//!
//! Endpoint manual de verificação, não é health check automatizado.
//! Configuração ausente e erro do gateway voltam como HTTP 200 com
//! `success:false` — o diagnóstico em si funcionou; somente falha da
//! própria rota vira status de erro.

use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use evolution::{EvolutionClient, EvolutionError};
use inss_crm_backend::utils::logging::*;
use inss_crm_backend::utils::AppError;
use inss_crm_backend::AppState;

/// GET /api/test-evolution
pub async fn test_evolution(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    log_request_received("/api/test-evolution", "GET");

    let evo = &state.settings.evolution;
    let (url, key) = match (evo.api_url(), evo.api_key()) {
        (Some(url), Some(key)) => (url, key),
        _ => {
            log_warning("⚠️  Evolution API sem credenciais (EVOLUTION_API_URL/EVOLUTION_API_KEY)");
            return Ok(Json(missing_config_payload(
                evo.api_url().is_some(),
                evo.api_key().is_some(),
            )));
        }
    };

    let client = match &state.evolution {
        Some(client) => client.clone(),
        None => EvolutionClient::new(url, key).map_err(|e| AppError::ConfigError(e.to_string()))?,
    };

    match client.fetch_status().await {
        Ok(body) => {
            log_info("✅ Evolution API respondeu ao diagnóstico");
            Ok(Json(json!({
                "success": true,
                "message": "Evolution API está funcionando",
                "evolutionApi": body,
                "variables": {
                    "url": url,
                    "key": mask_api_key(key)
                }
            })))
        }
        Err(EvolutionError::ApiError { status, message }) => {
            log_evolution_api_error("/", Some(status), &message);
            Ok(Json(json!({
                "success": false,
                "message": format!("Evolution API retornou erro {}", status),
                "status": status
            })))
        }
        Err(EvolutionError::HttpError(e)) => Err(AppError::ServiceUnavailable(e.to_string())),
        Err(e) => Err(AppError::InternalError(e.to_string())),
    }
}

fn missing_config_payload(url_set: bool, key_set: bool) -> Value {
    json!({
        "success": false,
        "message": "Variáveis de ambiente não encontradas",
        "variables": {
            "EVOLUTION_API_URL": url_set,
            "EVOLUTION_API_KEY": key_set
        }
    })
}

/// Mascara a chave para exibição (8 primeiros caracteres)
fn mask_api_key(key: &str) -> String {
    format!("{}...", key.chars().take(8).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_payload() {
        let payload = missing_config_payload(false, true);
        assert_eq!(payload["success"], false);
        assert_eq!(payload["variables"]["EVOLUTION_API_URL"], false);
        assert_eq!(payload["variables"]["EVOLUTION_API_KEY"], true);
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("B6D711FCDE4D4FD5936544120E713976"), "B6D711FC...");
        // Chave curta não estoura
        assert_eq!(mask_api_key("abc"), "abc...");
    }
}
