//! Error types for data parsing in farmsight-types.

use thiserror::Error;

/// Errors that can occur when parsing farmsight data.
///
/// This error type is platform-agnostic and does not include
/// transport errors (those belong in farmsight-core).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// A command name did not match any known device toggle.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A command state could not be interpreted as on/off.
    #[error("Invalid state '{0}', expected on/off or true/false")]
    InvalidState(String),
}

/// Result type alias using farmsight-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
