use core_config::{ConfigError, FromEnv};

/// MongoDB connection settings.
///
/// Construct manually or load from environment variables:
///
/// ```ignore
/// use database::mongodb::MongoConfig;
/// use core_config::FromEnv;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog");
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection URL: mongodb://[username:password@]host[:port][/?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name reported in server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Set the application name reported in server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "default".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

impl FromEnv for MongoConfig {
    /// Environment variables:
    /// - `MONGODB_URL` (required) - connection string
    /// - `MONGODB_DATABASE` (required) - database name
    /// - `MONGODB_APP_NAME` (optional)
    /// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100)
    /// - `MONGODB_MIN_POOL_SIZE` (optional, default: 5)
    /// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
    /// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: core_config::env_required("MONGODB_URL")?,
            database: core_config::env_required("MONGODB_DATABASE")?,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parsed("MONGODB_MAX_POOL_SIZE", "100")?,
            min_pool_size: env_parsed("MONGODB_MIN_POOL_SIZE", "5")?,
            connect_timeout_secs: env_parsed("MONGODB_CONNECT_TIMEOUT_SECS", "10")?,
            server_selection_timeout_secs: env_parsed(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                "30",
            )?,
        })
    }
}
