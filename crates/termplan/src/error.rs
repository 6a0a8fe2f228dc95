//! Error types for strict time validation.

use thiserror::Error;

/// Errors from the strict "HH:MM" parser.
///
/// The conflict predicates themselves never return errors; malformed input
/// degrades to conservative "no conflict" results there. This type exists so
/// upstream layers can validate meeting times loudly before handing them to
/// the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input does not match the "HH:MM" shape
    #[error("Malformed time string: {input:?}")]
    Malformed { input: String },

    /// Input parsed but names a time outside 00:00..=23:59
    #[error("Time out of range: {input:?}")]
    OutOfRange { input: String },
}

impl TimeParseError {
    /// The offending input string.
    pub fn input(&self) -> &str {
        match self {
            TimeParseError::Malformed { input } => input,
            TimeParseError::OutOfRange { input } => input,
        }
    }
}
