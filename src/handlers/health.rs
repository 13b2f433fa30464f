use axum::{extract::State, response::Json};
use mongodb::bson::doc;
use serde_json::{json, Value};
use std::sync::Arc;

use inss_crm_backend::utils::logging::*;
use inss_crm_backend::AppState;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "inss-crm-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn status_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    // Ping direto no banco; falha aqui não derruba a rota
    let mongodb_connected = state.db.run_command(doc! { "ping": 1 }, None).await.is_ok();

    Json(json!({
        "service": "inss-crm-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": state.settings.environment,
        "integrations": {
            "mongodb": {
                "connected": mongodb_connected,
                "database": state.settings.mongodb.database
            },
            "evolution": {
                "configured": state.settings.evolution.is_configured(),
                "instance": state.settings.evolution.instance()
            }
        }
    }))
}
