//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | `sqlite:budget.db` |
//! | `BIND_ADDR` | `127.0.0.1:3000` |
//! | `CORS_ORIGIN` | `http://localhost:8080` |
//! | `STATIC_DIR` | unset (no static fallback) |

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:budget.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load from the process environment, after any `.env` file
    pub fn from_env() -> Result<Self> {
        let _dotenv = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDR '{}'", bind_addr))?;

        let cors_origin = get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = HeaderValue::from_str(cors_origin.trim())
            .with_context(|| format!("Invalid CORS_ORIGIN '{}'", cors_origin))?;

        let static_dir = get("STATIC_DIR").map(PathBuf::from);

        Ok(Self {
            database_url,
            bind_addr,
            cors_origin,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite:/tmp/test.db"),
            ("BIND_ADDR", "0.0.0.0:8000"),
            ("CORS_ORIGIN", "https://budget.example.com"),
            ("STATIC_DIR", "dist"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite:/tmp/test.db");
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.cors_origin, "https://budget.example.com");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("DATABASE_URL", "  "), ("STATIC_DIR", "")]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }

    #[test]
    fn test_invalid_cors_origin() {
        assert!(config_from(&[("CORS_ORIGIN", "http://bad\norigin")]).is_err());
    }
}
