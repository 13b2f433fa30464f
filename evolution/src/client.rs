//! Cliente HTTP para a Evolution API

use crate::error::{EvolutionError, Result};
use reqwest::{Client as HttpClient, Response};
use serde_json::Value;
use std::time::Duration;

const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 100;

/// Cliente para interagir com a Evolution API
///
/// A autenticação é feita pelo header `apikey` em todas as requisições.
#[derive(Clone)]
pub struct EvolutionClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl EvolutionClient {
    /// Cria um novo cliente Evolution
    ///
    /// # Argumentos
    ///
    /// * `base_url` - URL base do gateway (ex.: `https://evolution.exemplo.com.br`)
    /// * `api_key` - Chave global de API do gateway
    ///
    /// # Timeouts
    ///
    /// - Total: 10s
    /// - Connect: 5s
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeouts(base_url, api_key, 10, 5)
    }

    /// Cria um novo cliente com timeouts customizados
    pub fn with_timeouts(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| EvolutionError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        let base_url: String = base_url.into();

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Consulta o endpoint raiz do gateway (status e versão)
    ///
    /// Leitura idempotente: falhas de transporte são repetidas com backoff
    /// exponencial até [`MAX_RETRIES`] tentativas. Erros da API (status
    /// não-2xx) não são repetidos.
    pub async fn fetch_status(&self) -> Result<Value> {
        for attempt in 1..=MAX_RETRIES {
            match self.get_json("/").await {
                Ok(value) => return Ok(value),
                Err(EvolutionError::HttpError(e)) if attempt < MAX_RETRIES => {
                    let backoff_ms = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                    tracing::warn!(
                        "Tentativa {}/{} falhou ({}). Retry em {}ms...",
                        attempt, MAX_RETRIES, e, backoff_ms
                    );
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                }
                Err(e) => return Err(e),
            }
        }

        unreachable!()
    }

    /// Envia uma mensagem de texto pela instância informada
    ///
    /// # Argumentos
    ///
    /// * `instance` - Nome da instância conectada no gateway
    /// * `number` - Número do destinatário (somente dígitos, com DDI)
    /// * `text` - Conteúdo da mensagem
    pub async fn send_text(&self, instance: &str, number: &str, text: &str) -> Result<Value> {
        let url = format!("{}/message/sendText/{}", self.base_url, instance);

        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "number": number, "text": text }))
            .send()
            .await?;

        let response = self.handle_response(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Executa uma requisição GET e parseia o corpo como JSON
    pub(crate) async fn get_json(&self, endpoint: &str) -> Result<Value> {
        let url = if endpoint == "/" {
            format!("{}/", self.base_url)
        } else {
            format!("{}{}", self.base_url, endpoint)
        };

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.api_key)
            .send()
            .await?;

        let response = self.handle_response(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let status_code = status.as_u16();
            let error_body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Evolution API error ({}): {}", status_code, error_body);

            // Tentar extrair mensagem de erro do JSON
            let message = if let Ok(json) = serde_json::from_str::<Value>(&error_body) {
                json.get("message")
                    .or_else(|| json.get("error"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(&error_body)
                    .to_string()
            } else {
                error_body
            };

            Err(EvolutionError::ApiError {
                status: status_code,
                message,
            })
        }
    }

    /// Obtém a URL base configurada
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = EvolutionClient::new("https://evolution.exemplo.com.br/", "chave-teste").unwrap();
        assert_eq!(client.base_url(), "https://evolution.exemplo.com.br");
    }

    #[tokio::test]
    async fn test_fetch_status_ok() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/").header("apikey", "chave-teste");
            then.status(200)
                .json_body(json!({ "status": 200, "message": "Welcome to the Evolution API" }));
        });

        let client = EvolutionClient::new(server.base_url(), "chave-teste").unwrap();
        let status = client.fetch_status().await.unwrap();

        mock.assert();
        assert_eq!(status["status"], 200);
    }

    #[tokio::test]
    async fn test_fetch_status_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(401).json_body(json!({ "message": "Unauthorized" }));
        });

        let client = EvolutionClient::new(server.base_url(), "chave-errada").unwrap();

        match client.fetch_status().await {
            Err(EvolutionError::ApiError { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("esperava ApiError, obteve {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_api_error_nao_faz_retry() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(500).body("internal error");
        });

        let client = EvolutionClient::new(server.base_url(), "chave-teste").unwrap();
        let result = client.fetch_status().await;

        assert!(result.is_err());
        // Erro da API não é transitório: uma única tentativa
        assert_eq!(mock.hits(), 1);
    }

    #[tokio::test]
    async fn test_send_text() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/message/sendText/principal")
                .header("apikey", "chave-teste")
                .json_body(json!({ "number": "5511999990000", "text": "Olá" }));
            then.status(201).json_body(json!({ "key": { "id": "ABC123" } }));
        });

        let client = EvolutionClient::new(server.base_url(), "chave-teste").unwrap();
        let resposta = client
            .send_text("principal", "5511999990000", "Olá")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(resposta["key"]["id"], "ABC123");
    }
}
