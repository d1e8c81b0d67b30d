// Connector abstraction and the MySQL implementation used in production

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::ConnectOptions;

use crate::db::error::DbError;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "webuser";
pub const DEFAULT_DB_PASSWORD: &str = "password";

/// Fixed credentials of the low-privilege web account
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Local socket path; takes precedence over host/port when set
    pub socket: Option<PathBuf>,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            username: DEFAULT_DB_USER.to_string(),
            password: DEFAULT_DB_PASSWORD.to_string(),
            socket: None,
        }
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("socket", &self.socket)
            .finish()
    }
}

/// An open database connection; dropping it closes the connection
pub struct ConnectionHandle {
    _conn: Box<dyn Send>,
}

impl ConnectionHandle {
    pub fn new<C: Send + 'static>(conn: C) -> Self {
        Self {
            _conn: Box::new(conn),
        }
    }
}

impl fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConnectionHandle")
    }
}

/// Opens a single connection to the database endpoint
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, params: &ConnectionParams) -> Result<ConnectionHandle, DbError>;
}

/// Connector backed by a single, un-pooled sqlx MySQL connection
#[derive(Debug, Default, Clone)]
pub struct MySqlConnector;

impl MySqlConnector {
    pub fn new() -> Self {
        Self
    }

    fn connect_options(params: &ConnectionParams) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&params.host)
            .port(params.port)
            .username(&params.username)
            .password(&params.password);

        match &params.socket {
            Some(path) => options.socket(path),
            None => options,
        }
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    async fn connect(&self, params: &ConnectionParams) -> Result<ConnectionHandle, DbError> {
        let conn = Self::connect_options(params).connect().await?;
        Ok(ConnectionHandle::new(conn))
    }
}
