use thiserror::Error;

/// Failures that stop the page server itself. A refused database connection
/// is not one of them: it is rendered into the page.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid server address {0}: {1}")]
    InvalidAddress(String, std::net::AddrParseError),
    #[error("Failed to bind to {0}: {1}")]
    Bind(String, std::io::Error),
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
