//! Error types for searchlab
//!
//! Exit codes:
//! - 0: Success
//! - 1: Failure
//!
//! The demonstration graph is static, validated-by-construction data, so
//! a failed node lookup is a programming error rather than bad input. It
//! still propagates as a value so the binary can report it and exit 1.

use thiserror::Error;

/// Errors that can occur during searchlab operations
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("node not found in graph: {id}")]
    NodeNotFound { id: String },

    #[error("invalid graph: node {id} lists unknown neighbor {neighbor}")]
    InvalidGraph { id: String, neighbor: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SearchError::NodeNotFound { .. } => "node_not_found",
            SearchError::InvalidGraph { .. } => "invalid_graph",
            SearchError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for searchlab operations
pub type Result<T> = std::result::Result<T, SearchError>;
