// ABOUTME: Unified error handling with standard error codes for the recipe transform
// ABOUTME: Provides AppError, ErrorCode, AppResult, and the structural GraphError type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace reports an [`AppError`] carrying
//! a stable [`ErrorCode`]. Structural problems found in a recipe graph are
//! described in detail by [`GraphError`] and folded into an `AppError` when a
//! whole recipe is rejected.

/// Structural recipe-graph errors
pub mod graph;

pub use graph::{GraphError, GraphWarning};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::error::Error as StdError;
use std::{fmt, io, slice};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// The recipe dependency graph is structurally broken
    #[serde(rename = "INVALID_RECIPE_GRAPH")]
    InvalidRecipeGraph = 3100,

    // Resource Management (4000-4999)
    /// The requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Internal Errors (9000-9999)
    /// Reading or writing a file failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON encoding or decoding failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidRecipeGraph => "The recipe step graph is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Process exit code used by the command-line front end
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidRecipeGraph => 2,
            Self::InvalidInput => 3,
            Self::ResourceNotFound | Self::StorageError => 4,
            Self::SerializationError => 1,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (offending step ids, tokens, ...)
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Storage (file I/O) error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Reject a whole recipe because its step graph is broken
    #[must_use]
    pub fn invalid_graph(errors: &[GraphError]) -> Self {
        let listed: Vec<Value> = errors.iter().map(GraphError::to_json).collect();
        Self::new(
            ErrorCode::InvalidRecipeGraph,
            format!("{} structural error(s) in recipe graph", errors.len()),
        )
        .with_details(json!({ "errors": listed }))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<GraphError> for AppError {
    fn from(error: GraphError) -> Self {
        Self::invalid_graph(slice::from_ref(&error))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_graph_lists_every_error() {
        let error = AppError::invalid_graph(&[
            GraphError::UnresolvedReference {
                step_id: "step_1".to_owned(),
                token: "ghost".to_owned(),
            },
            GraphError::UnproducedFinalState {
                state: "done".to_owned(),
            },
        ]);

        assert_eq!(error.code, ErrorCode::InvalidRecipeGraph);
        assert_eq!(error.details["errors"].as_array().map(Vec::len), Some(2));
        assert_eq!(error.details["errors"][0]["kind"], "unresolved_reference");
        assert_eq!(error.details["errors"][0]["step_id"], "step_1");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidRecipeGraph).unwrap();
        assert_eq!(json, "\"INVALID_RECIPE_GRAPH\"");
        assert_eq!(ErrorCode::InvalidRecipeGraph.exit_code(), 2);
    }

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(AppError::invalid_input("servings").code.exit_code(), 3);
        assert_eq!(AppError::storage("disk").code.exit_code(), 4);
        assert_eq!(AppError::serialization("json").code.exit_code(), 1);
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::not_found("recipe file");
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: recipe file not found"
        );
    }
}
