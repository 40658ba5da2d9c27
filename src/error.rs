use thiserror::Error;

/// Errors surfaced by the facade and its adapters.
///
/// Driver failures are carried as text so the error surface stays
/// driver-agnostic; the underlying message is always preserved.
#[derive(Debug, Error)]
pub enum SqlFacadeError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Parameter error: {0}")]
    ParameterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
