//! Error types and exit codes for tfidf-viewer
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (network, malformed responses, IO)
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data error (unknown path, missing index, degenerate document)

use thiserror::Error;

use crate::similarity::VectorError;

/// Exit codes for the tfidf-viewer binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - path or index not found, degenerate vector (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while comparing documents
#[derive(Error, Debug)]
pub enum TfidfError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("File [{path}] not found")]
    PathNotFound { path: String },

    #[error("Index {index} does not exist")]
    IndexNotFound { index: String },

    #[error("degenerate term vector for {document}: {source}")]
    DegenerateVector {
        document: String,
        #[source]
        source: VectorError,
    },

    // Generic failures (exit code 1)
    #[error("failed to {operation}: HTTP {status}: {reason}")]
    Http {
        operation: String,
        status: u16,
        reason: String,
    },

    #[error("failed to {operation}: {reason}")]
    Transport { operation: String, reason: String },

    #[error("malformed response to {operation}: {reason}")]
    MalformedResponse { operation: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TfidfError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TfidfError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a request that never got an HTTP response
    pub fn transport(operation: &str, error: impl std::fmt::Display) -> Self {
        TfidfError::Transport {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a response body that could not be interpreted
    pub fn malformed(operation: &str, reason: impl std::fmt::Display) -> Self {
        TfidfError::MalformedResponse {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Wrap a numeric failure with the document it was computed for
    pub fn degenerate(document: impl Into<String>, source: VectorError) -> Self {
        TfidfError::DegenerateVector {
            document: document.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TfidfError::UnknownFormat(_)
            | TfidfError::UsageError(_)
            | TfidfError::InvalidValue { .. } => ExitCode::Usage,

            TfidfError::PathNotFound { .. }
            | TfidfError::IndexNotFound { .. }
            | TfidfError::DegenerateVector { .. } => ExitCode::Data,

            TfidfError::Http { .. }
            | TfidfError::Transport { .. }
            | TfidfError::MalformedResponse { .. }
            | TfidfError::Io(_)
            | TfidfError::Json(_)
            | TfidfError::Toml(_)
            | TfidfError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TfidfError::UnknownFormat(_) => "unknown_format",
            TfidfError::UsageError(_) => "usage_error",
            TfidfError::InvalidValue { .. } => "invalid_value",
            TfidfError::PathNotFound { .. } => "path_not_found",
            TfidfError::IndexNotFound { .. } => "index_not_found",
            TfidfError::DegenerateVector { .. } => "degenerate_vector",
            TfidfError::Http { .. } => "http_error",
            TfidfError::Transport { .. } => "transport_error",
            TfidfError::MalformedResponse { .. } => "malformed_response",
            TfidfError::Io(_) => "io_error",
            TfidfError::Json(_) => "json_error",
            TfidfError::Toml(_) => "toml_error",
            TfidfError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for tfidf-viewer operations
pub type Result<T> = std::result::Result<T, TfidfError>;
