//! Configuration for the catalog API

use core_config::{app_info, auth::AuthConfig, server::ServerConfig, AppInfo, FromEnv};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration, composed once at startup and passed by
/// reference into the stages that need it.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub environment: Environment,
    /// Base prefix all business routes are nested under
    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?; // Required - fails if not set
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=8080
        let auth = AuthConfig::from_env()?; // Required - fails if not set
        let api_prefix = core_config::env_or_default("API_PREFIX", "/api");

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            auth,
            environment,
            api_prefix,
        })
    }
}
