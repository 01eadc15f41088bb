//! Helpers shared by database connectors.

mod retry;

pub use retry::{retry, retry_with_backoff, RetryConfig};
