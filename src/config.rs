//! Server configuration loaded from environment
//!
//! Environment variables:
//! - `PIPECHECK_HOST`: host to bind to (default: 127.0.0.1)
//! - `PIPECHECK_PORT`: port to bind to (default: 8000)
//! - `PIPECHECK_CORS_ORIGINS`: comma-separated allowed origins
//!   (default: http://localhost:3000, the frontend dev server)

use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Server configuration; CLI flags override environment values
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_string("PIPECHECK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env_string("PIPECHECK_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_origins: env_string("PIPECHECK_CORS_ORIGINS")
                .map(|o| parse_origins(&o))
                .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]),
        }
    }

    /// Bind address as host:port
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated origin list, dropping empty entries
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_frontend_dev_setup() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn origins_split_on_commas_and_trim() {
        assert_eq!(
            parse_origins("http://localhost:3000, https://studio.example.com"),
            vec!["http://localhost:3000", "https://studio.example.com"]
        );
    }

    #[test]
    fn empty_origin_entries_are_dropped() {
        assert_eq!(parse_origins("a,,b,"), vec!["a", "b"]);
        assert!(parse_origins("").is_empty());
    }
}
