use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandresError {
    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be understood.
    #[error("config error: {0}")]
    Config(String),

    /// JSON serialization failure while rendering output.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failure while rendering output.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid combination of command line options.
    #[error("usage error: {0}")]
    Usage(String),
}
