//! Caret escaping for the Windows command interpreter (`cmd.exe`).

use crate::{Quoting, Result};

const UNSAFE_CHARS: &[char] = &[
    '\t', ' ', '!', '"', '&', '\'', '+', ',', ';', '<', '=', '>', '[', ']', '^', '`', '{', '}',
    '~',
];

/// Quotes and unquotes strings containing characters special to the Windows
/// command interpreter (`cmd.exe`).
///
/// There are no delimiters: every special character is prefixed with a
/// caret (`^`). Unquoting never fails, a caret before any other character
/// is kept, just like `cmd.exe` ignores it.
///
/// # Examples
///
/// ```rust
/// use argquote::{Cmd, Quoting};
///
/// let quoted = Cmd.quote(r#"a b:"c d" 'e''f'  "g\"""#);
/// assert_eq!(quoted, r#"a^ b:^"c^ d^"^ ^'e^'^'f^'^ ^ ^"g\^"^""#);
/// ```
///
/// See <https://docs.microsoft.com/en-us/archive/blogs/twistylittlepassagesallalike/everyone-quotes-command-line-arguments-the-wrong-way>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cmd;

impl Quoting for Cmd {
    fn must_quote(&self, s: &str) -> bool {
        s.contains(UNSAFE_CHARS)
    }

    fn quote(&self, s: &str) -> String {
        let mut output = String::with_capacity(s.len());
        for ch in s.chars() {
            if UNSAFE_CHARS.contains(&ch) {
                output.push('^');
            }
            output.push(ch);
        }
        output
    }

    fn unquote(&self, s: &str) -> Result<String> {
        let mut result = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '^' {
                if let Some(escaped) = chars.next_if(|c| UNSAFE_CHARS.contains(c)) {
                    result.push(escaped);
                    continue;
                }
            }
            result.push(ch);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlisted_caret_passes_through() {
        assert_eq!(Cmd.unquote("^a^").unwrap(), "^a^");
        assert_eq!(Cmd.unquote("^^^^").unwrap(), "^^");
        assert_eq!(Cmd.unquote("^^a").unwrap(), "^a");
    }

    #[test]
    fn test_backslash_is_not_special() {
        assert!(!Cmd.must_quote(r"C:\Windows"));
        assert_eq!(Cmd.quote(r"C:\Windows"), r"C:\Windows");
    }
}
