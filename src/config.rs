//! Backend address resolution for the Portfolio client.
//!
//! The base URL comes from the environment so the same build works against
//! local and deployed backends: `PORTFOLIO_API_URL` > `VITE_API_URL` >
//! localhost default. `VITE_API_URL` is honored because embedding webview
//! hosts share their `.env` with this crate.

/// Default backend address when no environment override is set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        let base_url = std::env::var("PORTFOLIO_API_URL")
            .or_else(|_| std::env::var("VITE_API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load `.env` from the working directory (if present), then resolve
    /// configuration from the environment.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        let config = Self::from_env();
        log::info!("Portfolio API base URL: {}", config.base_url);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults_to_localhost() {
        // Only assert the default when the variables are genuinely unset;
        // other tests in the process never set them.
        if std::env::var("PORTFOLIO_API_URL").is_err() && std::env::var("VITE_API_URL").is_err() {
            let config = Config::from_env();
            assert_eq!(config.base_url, DEFAULT_API_URL);
        }
    }
}
