pub mod api_key;
pub mod security;

pub use api_key::{require_api_key, ApiKeyAuth, API_KEY_HEADER};
pub use security::security_headers;
