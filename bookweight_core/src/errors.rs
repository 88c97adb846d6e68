//! # Error Types
//!
//! Structured error types for bookweight_core. There are two layers:
//!
//! - [`PromptRejection`] - why a single line of input was refused. These are
//!   recovered inside the prompt loop by warning and asking again; they only
//!   reach the caller wrapped in [`PromptError::RetriesExhausted`].
//! - [`PromptError`] - why a prompt could not produce a value at all
//!   (input closed, retry limit reached, I/O failure).
//!
//! [`CalcError`] covers everything outside the prompt loop (settings and
//! JSON handling).
//!
//! ## Example
//!
//! ```rust
//! use bookweight_core::errors::{CalcError, CalcResult};
//!
//! fn validate_pages(page_count: i64) -> CalcResult<()> {
//!     if page_count < 0 {
//!         return Err(CalcError::invalid_input(
//!             "page_count",
//!             page_count.to_string(),
//!             "Page count cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_pages(-3).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::Bounds;

/// Result type alias for bookweight_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for settings and calculation plumbing.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Why one line of input was refused by the prompt loop.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum PromptRejection {
    /// Nothing was entered, or the prompt was canceled
    #[error("No input entered")]
    EmptyInput,

    /// The text has no leading integer
    #[error("Not a number: '{input}'")]
    NotANumber { input: String },

    /// The integer falls outside the configured bounds
    #[error("Value {value} is outside {bounds}")]
    OutOfBounds { value: i64, bounds: Bounds },
}

impl PromptRejection {
    /// The line shown to the user before asking again.
    pub fn warning(&self) -> String {
        match self {
            PromptRejection::EmptyInput => "Enter a number".to_string(),
            PromptRejection::NotANumber { .. } => "Number please".to_string(),
            PromptRejection::OutOfBounds { value, bounds } => match (bounds.min, bounds.max) {
                (Some(min), _) if *value < min => format!("Number greater than {} please", min),
                (_, Some(max)) => format!("Number less than {} please", max),
                // Unreachable for rejections built by `Bounds::check`
                (_, None) => "Number out of range please".to_string(),
            },
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PromptRejection::EmptyInput => "EMPTY_INPUT",
            PromptRejection::NotANumber { .. } => "NOT_A_NUMBER",
            PromptRejection::OutOfBounds { .. } => "OUT_OF_BOUNDS",
        }
    }
}

/// Why a prompt gave up without producing a value.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The input stream ended before a valid number was entered
    #[error("Input closed before a valid number was entered")]
    InputClosed,

    /// The bounds are empty, so no reply could ever be accepted
    #[error("No value can satisfy bounds {bounds}")]
    InvalidBounds { bounds: Bounds },

    /// A limited retry policy ran out of attempts
    #[error("Gave up after {attempts} attempt(s); last problem: {last}")]
    RetriesExhausted { attempts: u32, last: PromptRejection },

    /// Reading the reply or writing the prompt failed
    #[error("I/O error while prompting: {0}")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PromptError::InputClosed => "INPUT_CLOSED",
            PromptError::InvalidBounds { .. } => "INVALID_BOUNDS",
            PromptError::RetriesExhausted { .. } => "RETRIES_EXHAUSTED",
            PromptError::Io(_) => "IO_ERROR",
        }
    }
}
