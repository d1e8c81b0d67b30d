// Error types for database operations

use thiserror::Error;

/// Error types for the database connection attempt
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    /// Connection could not be established; carries the driver's own diagnostic
    #[error("{0}")]
    ConnectionFailed(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        // Server-side rejections carry the server's message; everything else
        // (DNS, refused socket, TLS) is reported with the driver's wording.
        let message = match err.as_database_error() {
            Some(db_err) => db_err.message().to_string(),
            None => err.to_string(),
        };
        DbError::ConnectionFailed(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_diagnostic() {
        let err = DbError::ConnectionFailed("Unknown MySQL server host 'localhost'".into());
        assert_eq!(err.to_string(), "Unknown MySQL server host 'localhost'");
    }

    #[test]
    fn io_failures_keep_driver_wording() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let DbError::ConnectionFailed(message) = DbError::from(sqlx::Error::Io(io));
        assert!(message.contains("connection refused"));
    }
}
