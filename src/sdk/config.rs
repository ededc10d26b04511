use std::env;

use super::directions::url::DEFAULT_BASE_URL;

/// Where directions requests go. Overridable for self-hosted proxies via
/// the `DIRECTIONS_BASE_URL` environment variable.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    pub base_url: String,
}

impl DirectionsConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("DIRECTIONS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
