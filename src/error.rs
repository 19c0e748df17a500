//! Error types for unquoting and scheme selection.
//!
//! Every scheme reports malformed input through the same [`SyntaxError`]:
//! a human-readable description of the violated rule plus the byte offset
//! at which the scanner gave up.
//!
//! ## Error Categories
//!
//! - **Outside of quotes**: a character appeared where only a delimiter may
//! - **Unsupported character**: a character is not allowed in the current quoted region
//! - **Unescaped special character**: a character that must be escaped appeared bare
//! - **Unterminated**: input ended inside a quoted region or an escape sequence
//! - **Invalid escape sequence**: an escape is malformed or its value is out of range
//!
//! ## Examples
//!
//! ```rust
//! use argquote::{Quoting, SingleQuote};
//!
//! let err = SingleQuote.unquote("'a").unwrap_err();
//! assert_eq!(err.message(), "unterminated quoted string");
//! assert_eq!(err.offset(), 2);
//! assert_eq!(err.to_string(), "syntax error: unterminated quoted string");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents an error during unquoting of a string.
///
/// `offset` counts the input bytes consumed up to and including the
/// malformed construct. For input that ends too early it equals the input length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error: {msg}")]
pub struct SyntaxError {
    msg: String,
    offset: usize,
}

impl SyntaxError {
    /// Creates a syntax error with a description and a byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argquote::SyntaxError;
    ///
    /// let err = SyntaxError::new("unterminated quoted string", 4);
    /// assert_eq!(err.offset(), 4);
    /// ```
    pub fn new<T: fmt::Display>(msg: T, offset: usize) -> Self {
        SyntaxError {
            msg: msg.to_string(),
            offset,
        }
    }

    /// Description of the violated grammar rule, without the `syntax error:` prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Number of input bytes consumed when the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// Returned when a [`Scheme`](crate::Scheme) name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quoting scheme: {0:?}")]
pub struct UnknownSchemeError(pub String);

/// Result of unquoting, failing with a [`SyntaxError`].
pub type Result<T> = std::result::Result<T, SyntaxError>;
