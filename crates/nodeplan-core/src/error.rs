//! Error types and exit codes for nodeplan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, same node given twice)
//! - 3: Data/configuration error (unknown node, invalid network or owned file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the nodeplan binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/configuration error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during nodeplan operations
#[derive(Error, Debug)]
pub enum NodeplanError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("both nodes seem to be the same node: {first:?} {second:?}")]
    SameNode { first: String, second: String },

    // Data/configuration errors (exit code 3)
    #[error("could not find node {name:?}")]
    UnknownNode { name: String },

    #[error("could not find node {name:?} referenced on line {line}: {text:?}")]
    UnknownOwnedNode {
        name: String,
        line: usize,
        text: String,
    },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    #[error("network definition not found: {path:?}")]
    NetworkNotFound { path: PathBuf },

    #[error("invalid table: {reason}")]
    InvalidTable { reason: String },

    #[error("could not find column {column:?}")]
    UnknownColumn { column: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl NodeplanError {
    /// Create an error for a node name that does not resolve
    pub fn unknown_node(name: impl Into<String>) -> Self {
        NodeplanError::UnknownNode { name: name.into() }
    }

    /// Create an error for a malformed network definition
    pub fn invalid_network(reason: impl std::fmt::Display) -> Self {
        NodeplanError::InvalidNetwork {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a malformed pipe table
    pub fn invalid_table(reason: impl std::fmt::Display) -> Self {
        NodeplanError::InvalidTable {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NodeplanError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NodeplanError::UsageError(_)
            | NodeplanError::SameNode { .. } => ExitCode::Usage,

            NodeplanError::UnknownNode { .. }
            | NodeplanError::UnknownOwnedNode { .. }
            | NodeplanError::InvalidNetwork { .. }
            | NodeplanError::NetworkNotFound { .. }
            | NodeplanError::InvalidTable { .. }
            | NodeplanError::UnknownColumn { .. } => ExitCode::Data,

            NodeplanError::Io(_)
            | NodeplanError::Json(_)
            | NodeplanError::Csv(_)
            | NodeplanError::FailedOperationWithTarget { .. }
            | NodeplanError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NodeplanError::UsageError(_) => "usage_error",
            NodeplanError::SameNode { .. } => "same_node",
            NodeplanError::UnknownNode { .. } => "unknown_node",
            NodeplanError::UnknownOwnedNode { .. } => "unknown_owned_node",
            NodeplanError::InvalidNetwork { .. } => "invalid_network",
            NodeplanError::NetworkNotFound { .. } => "network_not_found",
            NodeplanError::InvalidTable { .. } => "invalid_table",
            NodeplanError::UnknownColumn { .. } => "unknown_column",
            NodeplanError::Io(_) => "io_error",
            NodeplanError::Json(_) => "json_error",
            NodeplanError::Csv(_) => "csv_error",
            NodeplanError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NodeplanError::Other(_) => "other",
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

/// Result type alias for nodeplan operations
pub type Result<T> = std::result::Result<T, NodeplanError>;
