//! POSIX shell quoting: single quotes (`'…'`) and double quotes (`"…"`).
//!
//! Both schemes, as well as [`AnsiC`](crate::AnsiC), share the same notion of
//! which characters are unsafe to leave unquoted in a shell word.

use crate::chars::Describe;
use crate::scanner::Scanner;
use crate::{Quoting, Result};
use regex::Regex;
use std::sync::LazyLock;

// Controls, space, `!"#$`, shell metacharacters, `{|}~`, DEL and no-break space.
static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x24&'()*;<=>?\[\]\^`\x7B-\x7F\x{00A0}]").expect("unsafe pattern is valid")
});

pub(crate) fn must_quote(s: &str) -> bool {
    UNSAFE_CHARS.is_match(s)
}

/// Quotes and unquotes strings surrounded by single quotes (`'`), as specified by POSIX.
///
/// An embedded single quote closes the quoted run, is emitted inside double
/// quotes and then the run is reopened: `'` becomes `'"'"'`.
///
/// # Examples
///
/// ```rust
/// use argquote::{Quoting, SingleQuote};
///
/// let quoted = SingleQuote.quote(r#"a b:"c d" 'e''f'  "g\"""#);
/// assert_eq!(quoted, r#"'a b:"c d" '"'"'e'"'"''"'"'f'"'"'  "g\""'"#);
/// ```
///
/// See <https://pubs.opengroup.org/onlinepubs/9699919799/utilities/V3_chap02.html#tag_18_02_02>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SingleQuote;

impl Quoting for SingleQuote {
    fn must_quote(&self, s: &str) -> bool {
        must_quote(s)
    }

    fn quote(&self, s: &str) -> String {
        let mut output = String::with_capacity(s.len() + 2);
        output.push('\'');
        for ch in s.chars() {
            if ch == '\'' {
                output.push_str(r#"'"'"'"#);
            } else {
                output.push(ch);
            }
        }
        output.push('\'');
        output
    }

    /// Only the `"'"` form produced by [`quote`](Quoting::quote) is accepted
    /// between double quotes; anything else there is rejected.
    fn unquote(&self, s: &str) -> Result<String> {
        let mut scanner = Scanner::new(s);
        let mut result = String::with_capacity(s.len());
        let (mut in_single, mut in_double) = (false, false);

        while let Some(ch) = scanner.next_char() {
            match ch {
                '\'' if in_double => result.push(ch),
                '\'' => in_single = !in_single,
                '"' if in_single => result.push(ch),
                '"' => in_double = !in_double,
                _ if in_double => {
                    return Err(scanner.error(format_args!(
                        "unsupported character {} in double quoted string",
                        Describe(ch)
                    )))
                }
                _ if !in_single => return Err(scanner.outside_of_quotes(ch)),
                _ => result.push(ch),
            }
        }
        if in_single || in_double {
            return Err(scanner.unterminated_quote());
        }
        Ok(result)
    }
}

/// Quotes and unquotes strings surrounded by double quotes (`"`), as specified by POSIX.
///
/// `!`, `"`, `$`, `\` and `` ` `` are escaped with a backslash. Escaping `!`
/// keeps interactive Bash from performing history expansion.
///
/// # Examples
///
/// ```rust
/// use argquote::{DoubleQuote, Quoting};
///
/// let quoted = DoubleQuote.quote(r#"a b:"c d" 'e''f'  "g\"""#);
/// assert_eq!(quoted, r#""a b:\"c d\" 'e''f'  \"g\\\"\"""#);
/// ```
///
/// See <https://pubs.opengroup.org/onlinepubs/9699919799/utilities/V3_chap02.html#tag_18_02_03>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DoubleQuote;

#[inline]
fn is_double_quote_special(ch: char) -> bool {
    matches!(ch, '!' | '"' | '$' | '\\' | '`')
}

impl Quoting for DoubleQuote {
    fn must_quote(&self, s: &str) -> bool {
        must_quote(s)
    }

    fn quote(&self, s: &str) -> String {
        let mut output = String::with_capacity(s.len() + 2);
        output.push('"');
        for ch in s.chars() {
            if is_double_quote_special(ch) {
                output.push('\\');
            }
            output.push(ch);
        }
        output.push('"');
        output
    }

    /// A backslash before any other character is kept as is, so `"\p"` unquotes to `\p`.
    fn unquote(&self, s: &str) -> Result<String> {
        let mut scanner = Scanner::new(s);
        let mut result = String::with_capacity(s.len());
        let mut in_quote = false;

        while let Some(ch) = scanner.next_char() {
            if ch == '"' {
                in_quote = !in_quote;
                continue;
            }
            if !in_quote {
                return Err(scanner.outside_of_quotes(ch));
            }
            if ch != '\\' {
                if is_double_quote_special(ch) {
                    return Err(scanner.unescaped(ch));
                }
                result.push(ch);
                continue;
            }
            match scanner.next_char() {
                Some(escaped) if is_double_quote_special(escaped) => result.push(escaped),
                Some(escaped) => {
                    result.push('\\');
                    result.push(escaped);
                }
                None => return Err(scanner.unterminated("unterminated escape sequence")),
            }
        }
        if in_quote {
            return Err(scanner.unterminated_quote());
        }
        Ok(result)
    }
}
