//! Error types and exit codes for trains
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid query values)
//! - 3: Data error (malformed routes, unreachable destination)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed routes, no such route (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading or querying a route graph
#[derive(Error, Debug)]
pub enum TrainsError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("malformed route token '{token}': {reason}")]
    MalformedRouteToken { token: String, reason: String },

    /// Message is surfaced verbatim in place of a numeric result
    #[error("NO SUCH ROUTE")]
    NoSuchRoute,

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TrainsError {
    /// Create an error for a route token that cannot be parsed
    pub fn malformed_token(token: &str, reason: impl std::fmt::Display) -> Self {
        TrainsError::MalformedRouteToken {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TrainsError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        TrainsError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        TrainsError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrainsError::UsageError(_) | TrainsError::InvalidValue { .. } => ExitCode::Usage,

            TrainsError::MalformedRouteToken { .. }
            | TrainsError::NoSuchRoute
            | TrainsError::NotFound { .. } => ExitCode::Data,

            TrainsError::Io(_)
            | TrainsError::Json(_)
            | TrainsError::Toml(_)
            | TrainsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TrainsError::UsageError(_) => "usage_error",
            TrainsError::InvalidValue { .. } => "invalid_value",
            TrainsError::MalformedRouteToken { .. } => "malformed_route_token",
            TrainsError::NoSuchRoute => "no_such_route",
            TrainsError::NotFound { .. } => "not_found",
            TrainsError::Io(_) => "io_error",
            TrainsError::Json(_) => "json_error",
            TrainsError::Toml(_) => "toml_error",
            TrainsError::Other(_) => "other",
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

/// Result type alias for trains operations
pub type Result<T> = std::result::Result<T, TrainsError>;
