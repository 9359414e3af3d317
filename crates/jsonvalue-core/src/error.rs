//! Error types for JSON reading.
//!
//! Writing never fails, so every error here originates in the reader. Each
//! variant records the byte offset in the input where the problem was found.

use thiserror::Error;

/// Errors that can occur while reading JSON text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// Input ended where a value, delimiter or closing quote was required.
    #[error("Unexpected end of JSON data at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// A character that cannot start or continue the expected construct,
    /// including mismatched `true`/`false` literals and malformed numbers.
    #[error("Unexpected character in JSON data at offset {offset}: {found:?}")]
    UnexpectedCharacter { offset: usize, found: char },

    /// A `\u` escape not followed by four hexadecimal digits.
    #[error("Invalid unicode escape at offset {offset}")]
    InvalidUnicodeEscape { offset: usize },

    /// Arrays/objects nested deeper than the configured reader limit.
    #[error("Nesting too deep at offset {offset} (limit {limit})")]
    NestingTooDeep { offset: usize, limit: usize },
}

/// Broad category of a [`JsonError`], independent of where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedEnd,
    UnexpectedCharacter,
    InvalidUnicodeEscape,
    NestingTooDeep,
}

impl JsonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JsonError::UnexpectedEnd { .. } => ErrorKind::UnexpectedEnd,
            JsonError::UnexpectedCharacter { .. } => ErrorKind::UnexpectedCharacter,
            JsonError::InvalidUnicodeEscape { .. } => ErrorKind::InvalidUnicodeEscape,
            JsonError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            JsonError::UnexpectedEnd { offset }
            | JsonError::UnexpectedCharacter { offset, .. }
            | JsonError::InvalidUnicodeEscape { offset }
            | JsonError::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

/// Convenience alias used throughout jsonvalue-core.
pub type Result<T> = std::result::Result<T, JsonError>;
