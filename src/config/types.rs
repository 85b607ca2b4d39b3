use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Connection settings for the gallery backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Default settings for list fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Page size for list fetches and post-mutation refreshes (default: 20).
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> u64 {
    20
}
