//! Error types for the Timesheet Pay Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading policy configuration
//! or validating report inputs. Malformed timestamp and numeric fields inside
//! individual timesheet entries are deliberately NOT represented here: those
//! degrade to zero contributions inside the calculation layer (see
//! [`crate::calculation::ParseIssue`]) so that one bad record never aborts a
//! whole report.

use thiserror::Error;

/// The main error type for the Timesheet Pay Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::PolicyNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    PolicyParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy value was out of range or inconsistent.
    #[error("Invalid policy value '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A report request was invalid or contained inconsistent data.
    #[error("Invalid report request: {message}")]
    InvalidRequest {
        /// A description of what made the request invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
