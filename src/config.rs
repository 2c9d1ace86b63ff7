use serde::Deserialize;

use crate::{Result, StressCheckError};

/// Application configuration, read once at startup and injected explicitly.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Origin of the inference backend the app talks to directly.
    #[serde(default = "default_api_origin")]
    pub api_origin: String,

    /// Predict endpoint the proxy forwards to.
    #[serde(default = "default_proxy_backend_url")]
    pub proxy_backend_url: String,

    #[serde(default = "default_proxy_host")]
    pub proxy_host: String,

    #[serde(default = "default_proxy_port")]
    pub proxy_port: u16,

    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_mb: u64,
}

fn default_api_origin() -> String {
    "http://localhost:8080".to_string()
}

fn default_proxy_backend_url() -> String {
    "http://localhost:8001/predict".to_string()
}

fn default_proxy_host() -> String {
    "0.0.0.0".to_string()
}

fn default_proxy_port() -> u16 {
    8000
}

fn default_max_upload_size() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_origin: default_api_origin(),
            proxy_backend_url: default_proxy_backend_url(),
            proxy_host: default_proxy_host(),
            proxy_port: default_proxy_port(),
            max_upload_size_mb: default_max_upload_size(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        envy::from_iter(vars).map_err(|e| StressCheckError::Config(e.to_string()))
    }

    /// Full URL of the backend predict endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_origin.trim_end_matches('/'))
    }

    pub fn proxy_bind_addr(&self) -> String {
        format!("{}:{}", self.proxy_host, self.proxy_port)
    }

    pub fn max_request_body_bytes(&self) -> usize {
        // Allow some overhead for multipart boundaries/headers.
        ((self.max_upload_size_mb + 10) * 1024 * 1024) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let config = Config::from_vars(std::iter::empty::<(String, String)>())
            .expect("defaults should satisfy every field");
        assert_eq!(config.api_origin, "http://localhost:8080");
        assert_eq!(config.proxy_backend_url, "http://localhost:8001/predict");
        assert_eq!(config.proxy_port, 8000);
    }

    #[test]
    fn predict_url_strips_trailing_slash() {
        let config = Config {
            api_origin: "http://inference.internal:9000/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.predict_url(), "http://inference.internal:9000/predict");
    }

    #[test]
    fn env_overrides_are_applied() {
        let vars = [
            ("API_ORIGIN".to_string(), "https://api.example.com".to_string()),
            ("PROXY_PORT".to_string(), "3100".to_string()),
        ];
        let config = Config::from_vars(vars).expect("valid overrides");
        assert_eq!(config.predict_url(), "https://api.example.com/predict");
        assert_eq!(config.proxy_port, 3100);
    }

    #[test]
    fn malformed_values_surface_as_config_errors() {
        let vars = [("PROXY_PORT".to_string(), "not-a-port".to_string())];
        let err = Config::from_vars(vars).unwrap_err();
        assert!(matches!(err, StressCheckError::Config(_)));
    }
}
