use crate::{env_required, ConfigError, FromEnv};

/// API-key authentication configuration.
///
/// Loaded once at startup and passed by reference into the authentication
/// middleware; business logic never reads the secret from ambient process
/// state.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Shared secret compared against the request's API-key header
    pub api_key: String,
}

impl AuthConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl FromEnv for AuthConfig {
    /// Requires API_KEY to be set (no default)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env_required("API_KEY")?,
        })
    }
}
