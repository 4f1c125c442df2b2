/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for building evaluation environments.
//!
//! Compiling and evaluating templates cannot fail; these errors only arise
//! when converting external data into an [`Environment`](crate::Environment).

use thiserror::Error;

/// Errors that can occur while building an environment.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// The JSON document is not an object at the top level.
    #[error("Environment must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A binding's value is an array or object.
    #[error("Value for '{key}' must be a string, number, boolean or null")]
    NonScalarValue { key: String },

    /// The JSON text could not be parsed.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for environment operations.
pub type EnvironmentResult<T> = Result<T, EnvironmentError>;
