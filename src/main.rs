/// Backend do CRM previdenciário (INSS)
///
/// Arquitetura:
/// - Rotas de autenticação por cookie de sessão (JWT)
/// - Listagem de chats do WhatsApp lidos do MongoDB
/// - Diagnóstico de conectividade com a Evolution API
/// - Página raiz que verifica a sessão e redireciona
///
/// Cada handler é um ciclo requisição/resposta independente, sem estado
/// compartilhado além do AppState (configuração imutável + clientes).

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Importar módulos da biblioteca
use inss_crm_backend::{config, services, utils, AppState};

mod handlers;

use config::Settings;
use handlers::{
    health_check, status_check,
    index_page,
    login, logout, me,
    list_chats, send_message,
    test_evolution,
};
use utils::{logging::*, AppError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Carregar variáveis de ambiente do arquivo .env (se existir)
    if let Err(_) = dotenvy::dotenv() {
        // Em produção não existe .env - variáveis vêm do ambiente
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // Inicializar tracing
    tracing_subscriber::fmt::init();

    // Carregar configurações uma única vez (imutável, injetada nos handlers)
    let settings = Settings::new()
        .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))?;

    log_config_loaded(&settings.environment);

    // Conectar ao MongoDB (o driver mantém o pool; ping só reporta estado)
    let mut client_options = mongodb::options::ClientOptions::parse(&settings.mongodb.uri).await?;
    client_options.app_name = Some("inss-crm-backend".to_string());
    client_options.server_selection_timeout = Some(Duration::from_secs(5));

    let mongo_client = mongodb::Client::with_options(client_options)?;
    let db = mongo_client.database(&settings.mongodb.database);

    match db.run_command(mongodb::bson::doc! { "ping": 1 }, None).await {
        Ok(_) => log_info(&format!("✅ MongoDB conectado ({})", settings.mongodb.database)),
        Err(e) => log_warning(&format!(
            "⚠️  MongoDB indisponível no startup: {}. As rotas reportarão o erro por requisição.",
            e
        )),
    }

    let chats = services::ChatService::new(&db);
    let users = services::UserService::new(&db);

    // Cliente Evolution criado uma única vez quando há credenciais;
    // sem credenciais o diagnóstico reporta a ausência (exceção intencional
    // ao fail-fast de configuração)
    let evolution = match (settings.evolution.api_url(), settings.evolution.api_key()) {
        (Some(url), Some(key)) => {
            let client = evolution::EvolutionClient::new(url, key)
                .map_err(|e| AppError::ConfigError(format!("Failed to create Evolution client: {}", e)))?;
            log_info("✅ Evolution API client configurado");
            Some(client)
        }
        _ => {
            log_warning("⚠️  Evolution API sem credenciais - integração WhatsApp desabilitada");
            None
        }
    };

    // Inicializar estado da aplicação
    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        db,
        chats,
        users,
        evolution,
    });

    // Configurar rotas
    let app = Router::new()
        // Página raiz (bootstrap de sessão)
        .route("/", get(index_page))

        // Health checks (públicos)
        .route("/health", get(health_check))
        .route("/status", get(status_check))

        // Autenticação
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/logout", post(logout))

        // Diagnóstico da Evolution API (público - endpoint manual)
        .route("/api/test-evolution", get(test_evolution))

        // WhatsApp (autenticado via cookie)
        .route("/api/whatsapp/chats", get(list_chats))
        .route("/api/whatsapp/send", post(send_message))

        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Iniciar servidor (PORT do ambiente tem precedência, como no Cloud Run)
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(settings.server.port);
    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, port)).await?;

    log_server_startup(port);
    log_server_ready(port);

    // Graceful shutdown com signal handling
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
