//! Quoting for Windows Installer (`msiexec.exe`) property values.

use crate::scanner::Scanner;
use crate::{argv, Quoting, Result};

/// Quotes and unquotes strings surrounded by double quotes (`"…"`)
/// as understood by the Windows Installer (`msiexec.exe`).
///
/// A literal double quote is written twice.
///
/// # Examples
///
/// ```rust
/// use argquote::{Msiexec, Quoting};
///
/// let quoted = Msiexec.quote(r#"a b:"c d" 'e''f'  "g\"""#);
/// assert_eq!(quoted, r#""a b:""c d"" 'e''f'  ""g\""""""#);
/// assert_eq!(Msiexec.unquote(&quoted).unwrap(), r#"a b:"c d" 'e''f'  "g\"""#);
/// ```
///
/// See <https://docs.microsoft.com/en-us/windows/win32/msi/command-line-options>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Msiexec;

impl Quoting for Msiexec {
    fn must_quote(&self, s: &str) -> bool {
        s.contains(argv::UNSAFE_CHARS)
    }

    fn quote(&self, s: &str) -> String {
        format!("\"{}\"", s.replace('"', "\"\""))
    }

    fn unquote(&self, s: &str) -> Result<String> {
        unquote_doubled(s, '"')
    }
}

/// Unquotes a string delimited by `quote` where a doubled `quote` inside
/// the quoted region stands for one literal `quote`.
pub(crate) fn unquote_doubled(s: &str, quote: char) -> Result<String> {
    let mut scanner = Scanner::new(s);
    let mut result = String::with_capacity(s.len());
    let mut in_quote = false;

    while let Some(ch) = scanner.next_char() {
        if ch == quote {
            if !in_quote {
                in_quote = true;
            } else if scanner.eat(quote) {
                result.push(quote);
            } else {
                in_quote = false;
            }
            continue;
        }
        if !in_quote {
            return Err(scanner.outside_of_quotes(ch));
        }
        result.push(ch);
    }
    if in_quote {
        return Err(scanner.unterminated_quote());
    }
    Ok(result)
}
