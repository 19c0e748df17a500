//! # argquote
//!
//! Quoting and unquoting of command-line arguments and variable values for
//! Unix shells, Windows command processors and PowerShell.
//!
//! ## What does it do?
//!
//! Each scheme turns an arbitrary string into a form that the target
//! interpreter reads back as exactly one argument with exactly the
//! original content, and parses such a form back strictly: anything that is
//! not a single well-formed quoted value is rejected with the byte offset of
//! the first malformed construct.
//!
//! | Scheme | Interpreter | Form |
//! |--------|-------------|------|
//! | [`SingleQuote`] | POSIX shells | `'…'` |
//! | [`DoubleQuote`] | POSIX shells | `"…"` |
//! | [`AnsiC`] | Bash, Zsh | `$'…'` (also binary) |
//! | [`Argv`] | `CommandLineToArgvW`, MSVC runtime | `"…"` |
//! | [`Cmd`] | `cmd.exe` | `^`-escaped |
//! | [`Msiexec`] | `msiexec.exe` | `"…"` |
//! | [`PsSingleQuote`] | PowerShell | `'…'` |
//! | [`PsDoubleQuote`] | Windows PowerShell | `"…"` |
//! | [`PwshDoubleQuote`] | PowerShell 7+ | `"…"` |
//!
//! Globbing, expansion and command substitution are never interpreted: the
//! characters that trigger them are either escaped by `quote` or rejected
//! by `unquote`.
//!
//! ## Quick Start
//!
//! ```rust
//! use argquote::{Quoting, SingleQuote};
//!
//! let filename = r#"Long File With 'Single' & "Double" Quotes.txt"#;
//! assert!(SingleQuote.must_quote(filename));
//!
//! let quoted = SingleQuote.quote(filename);
//! assert_eq!(
//!     quoted,
//!     r#"'Long File With '"'"'Single'"'"' & "Double" Quotes.txt'"#
//! );
//! assert_eq!(SingleQuote.unquote(&quoted).unwrap(), filename);
//! ```
//!
//! ### Nesting interpreters
//!
//! A value passed through `cmd.exe` to a program parsing its command line
//! with the C runtime is quoted for both, innermost first:
//!
//! ```rust
//! use argquote::{Argv, Cmd, Quoting};
//!
//! let filename = r#"Long File With 'Single' & "Double" Quotes.txt"#;
//! let command = format!("callme.exe {}", Cmd.quote(&Argv.quote(filename)));
//! assert_eq!(
//!     command,
//!     r#"callme.exe ^"Long^ File^ With^ ^'Single^'^ ^&^ \^"Double\^"^ Quotes.txt^""#
//! );
//! ```
//!
//! ### Choosing a scheme at runtime
//!
//! ```rust
//! use argquote::{Quoting, Scheme};
//!
//! let scheme: Scheme = "ps-single".parse().unwrap();
//! assert_eq!(scheme.quote_if_needed("plain"), "plain");
//! assert_eq!(scheme.quote_if_needed("it's"), "'it''s'");
//! ```
//!
//! ## Guarantees
//!
//! - `unquote(quote(v)) == v` for every scheme and every string, and
//!   `unquote_binary(quote_binary(b)) == b` for every byte sequence
//! - `quote` never fails and never panics
//! - All operations are pure and can be called from any number of threads
//! - No `unsafe` code

pub mod ansi_c;
pub mod argv;
mod chars;
pub mod cmd;
pub mod error;
pub mod msiexec;
pub mod posix;
pub mod powershell;
mod scanner;
pub mod scheme;

pub use ansi_c::AnsiC;
pub use argv::Argv;
pub use cmd::Cmd;
pub use error::{Result, SyntaxError, UnknownSchemeError};
pub use msiexec::Msiexec;
pub use posix::{DoubleQuote, SingleQuote};
pub use powershell::{PsDoubleQuote, PsSingleQuote, PwshDoubleQuote};
pub use scheme::Scheme;

use std::borrow::Cow;

/// Quotes and unquotes textual command-line arguments and variables.
pub trait Quoting {
    /// Reports whether `s` must be quoted in order to appear correctly as a
    /// single command-line argument or variable.
    ///
    /// A `false` result means `s` can be used verbatim. Quoting such a value
    /// is still allowed and round-trips.
    fn must_quote(&self, s: &str) -> bool;

    /// Returns `s` quoted such that it appears correctly as a single
    /// command-line argument or variable.
    fn quote(&self, s: &str) -> String;

    /// Interprets `s` as a quoted string, returning the string value that `s` quotes.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if `s` is not exactly one well-formed quoted value.
    fn unquote(&self, s: &str) -> Result<String>;

    /// Returns `s` unchanged if it is safe to use verbatim, or quoted otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argquote::{Argv, Quoting};
    /// use std::borrow::Cow;
    ///
    /// assert!(matches!(Argv.quote_if_needed(r"C:\Windows"), Cow::Borrowed(_)));
    /// assert_eq!(Argv.quote_if_needed(r"C:\Program Files"), r#""C:\Program Files""#);
    /// ```
    fn quote_if_needed<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.must_quote(s) {
            Cow::Owned(self.quote(s))
        } else {
            Cow::Borrowed(s)
        }
    }
}

/// Quotes and unquotes binary command-line arguments and variables.
///
/// Multi-byte characters are escaped byte by byte rather than as whole code points.
pub trait BinaryQuoting: Quoting {
    /// Returns `b` quoted such that it appears correctly as a single
    /// command-line argument or variable.
    fn quote_binary(&self, b: &[u8]) -> String;

    /// Interprets `s` as a quoted string, returning the bytes that `s` quotes.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if `s` is not exactly one well-formed quoted value.
    fn unquote_binary(&self, s: &str) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_if_needed_borrows_safe_values() {
        for scheme in Scheme::ALL {
            assert!(matches!(scheme.quote_if_needed("abc"), Cow::Borrowed("abc")));
        }
    }

    #[test]
    fn test_quote_if_needed_quotes_unsafe_values() {
        assert_eq!(SingleQuote.quote_if_needed("a b"), "'a b'");
        assert_eq!(Cmd.quote_if_needed("a b"), "a^ b");
        assert_eq!(PsSingleQuote.quote_if_needed("$x"), "'$x'");
    }

    #[test]
    fn test_trait_objects() {
        let schemes: Vec<&dyn Quoting> = vec![&SingleQuote, &Argv, &PwshDoubleQuote];
        for scheme in schemes {
            assert_eq!(scheme.unquote(&scheme.quote("x y")).unwrap(), "x y");
        }
        let binary: &dyn BinaryQuoting = &AnsiC;
        assert_eq!(binary.unquote_binary(&binary.quote_binary(b"\0\xFF")).unwrap(), b"\0\xFF");
    }
}
