// config.rs - Client configuration
//
// The backend base URL is the only setting. In the browser there is no
// process environment, so the value is baked in at compile time via
// `BACKEND_URL`; native builds (tests, tooling) may override it at runtime.

use serde::{Deserialize, Serialize};

/// Used when neither the runtime nor the compile-time variable is set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Name of the environment variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash
    pub backend_url: String,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        Self {
            backend_url: backend_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the configuration from the environment.
    ///
    /// Order: runtime `BACKEND_URL` (native only), compile-time
    /// `BACKEND_URL`, then [`DEFAULT_BACKEND_URL`].
    pub fn from_env() -> Self {
        let runtime = runtime_backend_url();
        let compiled = option_env!("BACKEND_URL").map(str::to_string);
        Self::resolve(runtime, compiled)
    }

    fn resolve(runtime: Option<String>, compiled: Option<String>) -> Self {
        let url = runtime
            .into_iter()
            .chain(compiled)
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        tracing::debug!("Using backend at {}", url);
        Self::new(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_backend_url() -> Option<String> {
    std::env::var(BACKEND_URL_VAR).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_backend_url() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ClientConfig::new("https://api.example.com//");
        assert_eq!(config.backend_url, "https://api.example.com");
    }

    #[test]
    fn test_runtime_value_wins() {
        let config = ClientConfig::resolve(
            Some("http://runtime:1".to_string()),
            Some("http://compiled:2".to_string()),
        );
        assert_eq!(config.backend_url, "http://runtime:1");
    }

    #[test]
    fn test_blank_values_fall_through() {
        let config = ClientConfig::resolve(Some("  ".to_string()), Some("http://compiled:2/".to_string()));
        assert_eq!(config.backend_url, "http://compiled:2");

        let config = ClientConfig::resolve(None, None);
        assert_eq!(config, ClientConfig::default());
    }
}
