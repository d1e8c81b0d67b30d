// Configuration management from environment variables

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::db::ConnectionParams;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SITE_FQDN: &str = "localhost";

/// Configuration settings for the smoke-test page server
#[derive(Debug, Clone)]
pub struct PageConfig {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Hostname shown in the welcome banner
    pub site_fqdn: String,

    // Database configuration
    pub database: ConnectionParams,
}

impl PageConfig {
    /// Creates configuration instance from environment variables with defaults
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ConnectionParams::default();

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let site_fqdn = lookup("SITE_FQDN").unwrap_or_else(|| DEFAULT_SITE_FQDN.to_string());

        let database = ConnectionParams {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port: lookup("DB_PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            username: lookup("DB_USER").unwrap_or(defaults.username),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            socket: lookup("DB_SOCKET")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        };

        Self {
            host,
            port,
            site_fqdn,
            database,
        }
    }

    /// Returns formatted server address string (host:port)
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
