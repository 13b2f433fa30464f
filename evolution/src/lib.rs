//! Cliente da Evolution API
//!
//! Este crate fornece uma interface mínima e tipo-segura para o gateway de
//! WhatsApp (Evolution API) usado pelo CRM:
//!
//! - Consulta de status do gateway (endpoint raiz, usado pelo diagnóstico)
//! - Envio de mensagens de texto (`/message/sendText/{instance}`)
//!
//! Toda requisição envia a chave no header `apikey`. O cliente aplica
//! timeouts explícitos e, para leituras idempotentes, retry com backoff
//! exponencial em falhas de transporte.
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use evolution::EvolutionClient;
//!
//! #[tokio::main]
//! async fn main() -> evolution::Result<()> {
//!     // IMPORTANTE: Ler de variáveis de ambiente (NUNCA hardcode!)
//!     let api_url = std::env::var("EVOLUTION_API_URL")
//!         .expect("EVOLUTION_API_URL não configurada");
//!     let api_key = std::env::var("EVOLUTION_API_KEY")
//!         .expect("EVOLUTION_API_KEY não configurada");
//!
//!     let client = EvolutionClient::new(api_url, api_key)?;
//!     let status = client.fetch_status().await?;
//!     println!("{}", status);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

// Re-exports principais
pub use client::EvolutionClient;
pub use error::{EvolutionError, Result};
