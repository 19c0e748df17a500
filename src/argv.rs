//! Quoting for the Microsoft C runtime command-line parser (`CommandLineToArgvW`).
//!
//! Backslashes are literal unless they precede a double quote. A run of N
//! backslashes followed by `"` yields N/2 backslashes, and the quote is
//! itself literal when N is odd.

use crate::scanner::Scanner;
use crate::{Quoting, Result};

pub(crate) const UNSAFE_CHARS: &[char] = &['\t', ' ', '"'];

/// Quotes and unquotes strings surrounded by double quotes (`"…"`) as
/// parsed by `CommandLineToArgvW` and the Microsoft C runtime.
///
/// # Examples
///
/// ```rust
/// use argquote::{Argv, Quoting};
///
/// let quoted = Argv.quote(r#"a b:"c d" 'e''f'  "g\"""#);
/// assert_eq!(quoted, r#""a b:\"c d\" 'e''f'  \"g\\\"\"""#);
/// assert_eq!(Argv.quote(r"C:\Program Files\"), r#""C:\Program Files\\""#);
/// ```
///
/// See <https://docs.microsoft.com/en-us/cpp/c-language/parsing-c-command-line-arguments>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Argv;

fn push_backslashes(output: &mut String, count: usize) {
    output.extend(std::iter::repeat('\\').take(count));
}

impl Quoting for Argv {
    fn must_quote(&self, s: &str) -> bool {
        s.contains(UNSAFE_CHARS)
    }

    fn quote(&self, s: &str) -> String {
        let mut output = String::with_capacity(s.len() + 2);
        let mut backslashes = 0;
        output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => {
                    // The run is already written once: double it and escape the quote.
                    push_backslashes(&mut output, backslashes + 1);
                    backslashes = 0;
                }
                '\\' => backslashes += 1,
                _ => backslashes = 0,
            }
            output.push(ch);
        }
        push_backslashes(&mut output, backslashes);
        output.push('"');
        output
    }

    fn unquote(&self, s: &str) -> Result<String> {
        let mut scanner = Scanner::new(s);
        let mut result = String::with_capacity(s.len());
        let mut in_quote = false;
        let mut backslashes = 0;

        while let Some(ch) = scanner.next_char() {
            match ch {
                '"' if backslashes % 2 == 1 => {
                    push_backslashes(&mut result, backslashes / 2);
                    result.push('"');
                    backslashes = 0;
                }
                '"' => {
                    push_backslashes(&mut result, backslashes / 2);
                    backslashes = 0;
                    in_quote = !in_quote;
                }
                _ if !in_quote => return Err(scanner.outside_of_quotes(ch)),
                '\\' => backslashes += 1,
                _ => {
                    push_backslashes(&mut result, backslashes);
                    backslashes = 0;
                    result.push(ch);
                }
            }
        }
        if in_quote {
            return Err(scanner.unterminated_quote());
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslash_runs_before_quote() {
        assert_eq!(Argv.unquote(r#""a\\\"b""#).unwrap(), r#"a\"b"#);
        assert_eq!(Argv.unquote(r#""a\\""#).unwrap(), r"a\");
        assert_eq!(Argv.unquote(r#""\\\\""#).unwrap(), r"\\");
    }

    #[test]
    fn test_must_quote() {
        assert!(!Argv.must_quote(r"C:\path\to\file.txt"));
        assert!(Argv.must_quote("a b"));
        assert!(Argv.must_quote("a\tb"));
        assert!(Argv.must_quote("a\"b"));
    }
}
