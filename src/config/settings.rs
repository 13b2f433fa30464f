use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub environment: String,
    pub server: ServerSettings,
    pub mongodb: MongoDbSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub evolution: EvolutionSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MongoDbSettings {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EvolutionSettings {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub instance: Option<String>,
}

impl EvolutionSettings {
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref().filter(|v| !v.is_empty())
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|v| !v.is_empty())
    }

    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref().filter(|v| !v.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.api_url().is_some() && self.api_key().is_some()
    }
}

impl Settings {
    /// Carrega a configuração uma única vez no startup.
    ///
    /// Ordem de precedência: defaults < config/default < config/{RUN_MODE}
    /// < variáveis de ambiente. `auth.jwt_secret` é obrigatório; as
    /// credenciais da Evolution API são opcionais (o endpoint de
    /// diagnóstico reporta a ausência em vez de falhar o startup).
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("environment", "development")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("mongodb.uri", "mongodb://localhost:27017")?
            .set_default("mongodb.database", "crm-advocacia")?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Variáveis de ambiente específicas
        if let Ok(env) = std::env::var("RUST_ENV") {
            builder = builder.set_override("environment", env)?;
        }
        if let Ok(uri) = std::env::var("MONGODB_URI") {
            builder = builder.set_override("mongodb.uri", uri)?;
        }
        if let Ok(database) = std::env::var("MONGODB_DATABASE") {
            builder = builder.set_override("mongodb.database", database)?;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            builder = builder.set_override("auth.jwt_secret", secret)?;
        }
        if let Ok(url) = std::env::var("EVOLUTION_API_URL") {
            builder = builder.set_override("evolution.api_url", url)?;
        }
        if let Ok(key) = std::env::var("EVOLUTION_API_KEY") {
            builder = builder.set_override("evolution.api_key", key)?;
        }
        if let Ok(instance) = std::env::var("EVOLUTION_INSTANCE") {
            builder = builder.set_override("evolution.instance", instance)?;
        }

        // Também suportar o prefixo do projeto (CRM_SERVER__PORT etc.)
        builder = builder.add_source(Environment::with_prefix("CRM").separator("__"));

        let s = builder.build()?;

        s.try_deserialize()
    }

    /// Cookie `Secure` somente em produção
    pub fn cookie_secure(&self) -> bool {
        self.environment == "production"
    }
}
