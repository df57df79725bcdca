//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream registration service the reverse proxy should route `/api` to
    /// Example: https://accounts.internal:8443
    pub api_base_url: Option<String>,

    /// Origin this site is served under, for logs and absolute links
    /// Example: https://shop.example.com
    pub public_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL").ok(),
            public_origin: std::env::var("PUBLIC_ORIGIN").ok(),
        }
    }

    /// Check if the upstream registration service is configured
    pub fn has_api_base_url(&self) -> bool {
        self.api_base_url.is_some()
    }

    /// Check if the public origin is configured
    pub fn has_public_origin(&self) -> bool {
        self.public_origin.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
