use tracing::{debug, error, info, warn};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_request_processed(endpoint: &str, status: u16, duration_ms: u64) {
    info!("Request processed: {} - Status: {} - Duration: {}ms",
          endpoint, status, duration_ms);
}

pub fn log_auth_denied(endpoint: &str) {
    warn!("Acesso negado (sessão ausente ou inválida): {}", endpoint);
}

pub fn log_evolution_api_error(endpoint: &str, status: Option<u16>, error: &str) {
    error!("Evolution API error: {} - Status: {:?} - Error: {}", endpoint, status, error);
}

pub fn log_db_error(operation: &str, error: &str) {
    error!("MongoDB error: {} - {}", operation, error);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 CRM previdenciário backend starting on port {}", port);
}

pub fn log_server_ready(port: u16) {
    info!("✅ Server ready and listening on http://0.0.0.0:{}", port);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
