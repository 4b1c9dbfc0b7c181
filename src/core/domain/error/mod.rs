use thiserror::Error;

/// The main error type for cluster reporting operations.
///
/// Covers configuration lookup, connection/API failures, authentication,
/// input validation, and spreadsheet export.
#[derive(Error, Debug)]
pub enum ProxmoxError {
    /// Cluster credential lookup failed: missing file, section, or key.
    #[error("Config error: {0}")]
    Config(String),

    /// Errors during connection attempts, HTTP exchanges, or response
    /// parsing.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Authentication failures.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Validation failures with detailed context.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Spreadsheet writing failures.
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}

/// Specialized error type for validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A validation failure tied to a specific field.
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Format/syntax violations.
    #[error("Format error: {0}")]
    Format(String),
}

/// Type alias for Results that may fail with a ProxmoxError
pub type ProxmoxResult<T> = Result<T, ProxmoxError>;
