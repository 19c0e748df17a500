//! PowerShell quoting: single-quoted verbatim strings and double-quoted
//! expandable strings for both Windows PowerShell (`powershell.exe`) and
//! PowerShell 7+ (`pwsh`).
//!
//! The two double-quoted dialects share one unquoting grammar. They only
//! differ when quoting: `pwsh` understands `` `e `` and `` `u{…} `` and so
//! gets every non-printable character escaped, while Windows PowerShell
//! receives such characters verbatim.

use crate::chars::{is_print, Describe, MAX_CODE_POINT};
use crate::msiexec::unquote_doubled;
use crate::scanner::Scanner;
use crate::{Quoting, Result};

const UNSAFE_CHARS: &[char] = &['\t', ' ', '"', '$', '\'', '`'];

fn must_quote(s: &str) -> bool {
    s.contains(UNSAFE_CHARS)
}

/// Quotes and unquotes strings surrounded by single quotes (`'…'`) for
/// Windows PowerShell and PowerShell 7+.
///
/// A literal single quote is written twice.
///
/// # Examples
///
/// ```rust
/// use argquote::{PsSingleQuote, Quoting};
///
/// let quoted = PsSingleQuote.quote(r#"a b:"c d" 'e''f'  "g\"""#);
/// assert_eq!(quoted, r#"'a b:"c d" ''e''''f''  "g\""'"#);
/// ```
///
/// See <https://docs.microsoft.com/en-us/powershell/module/microsoft.powershell.core/about/about_quoting_rules>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PsSingleQuote;

impl Quoting for PsSingleQuote {
    fn must_quote(&self, s: &str) -> bool {
        must_quote(s)
    }

    fn quote(&self, s: &str) -> String {
        format!("'{}'", s.replace('\'', "''"))
    }

    fn unquote(&self, s: &str) -> Result<String> {
        unquote_doubled(s, '\'')
    }
}

/// Quotes and unquotes strings surrounded by double quotes (`"…"`) for
/// Windows PowerShell (`powershell.exe`).
///
/// # Examples
///
/// ```rust
/// use argquote::{PsDoubleQuote, Quoting};
///
/// let quoted = PsDoubleQuote.quote(r#"a b:"c d" 'e''f'  "g\"""#);
/// assert_eq!(quoted, r#""a b:`"c d`" 'e''f'  `"g\`"`"""#);
/// assert_eq!(PsDoubleQuote.quote("\x1B[0m"), "\"\x1B[0m\"");
/// ```
///
/// See <https://docs.microsoft.com/en-us/powershell/module/microsoft.powershell.core/about/about_special_characters>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PsDoubleQuote;

impl Quoting for PsDoubleQuote {
    fn must_quote(&self, s: &str) -> bool {
        must_quote(s)
    }

    fn quote(&self, s: &str) -> String {
        quote_double(s, Dialect::WindowsPowerShell)
    }

    fn unquote(&self, s: &str) -> Result<String> {
        unquote_double(s)
    }
}

/// Quotes and unquotes strings surrounded by double quotes (`"…"`) for
/// PowerShell 7+ (`pwsh`).
///
/// # Examples
///
/// ```rust
/// use argquote::{PwshDoubleQuote, Quoting};
///
/// assert_eq!(PwshDoubleQuote.quote("\x1B[0m\u{1}"), "\"`e[0m`u{01}\"");
/// assert_eq!(PwshDoubleQuote.unquote("\"`u{1F607}\"").unwrap(), "😇");
/// ```
///
/// See <https://docs.microsoft.com/en-us/powershell/module/microsoft.powershell.core/about/about_special_characters>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PwshDoubleQuote;

impl Quoting for PwshDoubleQuote {
    fn must_quote(&self, s: &str) -> bool {
        must_quote(s)
    }

    fn quote(&self, s: &str) -> String {
        quote_double(s, Dialect::Pwsh)
    }

    fn unquote(&self, s: &str) -> Result<String> {
        unquote_double(s)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Dialect {
    WindowsPowerShell,
    Pwsh,
}

fn quote_double(s: &str, dialect: Dialect) -> String {
    let pwsh = dialect == Dialect::Pwsh;
    let mut output = String::with_capacity(s.len() + 2);
    output.push('"');
    for ch in s.chars() {
        match ch {
            '\0' => output.push_str("`0"),
            '\x07' => output.push_str("`a"),
            '\x08' => output.push_str("`b"),
            '\x1B' if pwsh => output.push_str("`e"),
            '\x0C' => output.push_str("`f"),
            '\n' => output.push_str("`n"),
            '\r' => output.push_str("`r"),
            '\t' => output.push_str("`t"),
            '\x0B' => output.push_str("`v"),
            '"' | '$' | '`' => {
                output.push('`');
                output.push(ch);
            }
            _ if pwsh && !is_print(ch) => {
                let code = u32::from(ch);
                let escaped = match code {
                    0..=0x7E => format!("`u{{{code:02X}}}"),
                    0x7F..=0xFFFF => format!("`u{{{code:04X}}}"),
                    _ => format!("`u{{{code:06X}}}"),
                };
                output.push_str(&escaped);
            }
            _ => output.push(ch),
        }
    }
    output.push('"');
    output
}

fn unquote_double(s: &str) -> Result<String> {
    let mut scanner = Scanner::new(s);
    let mut result = String::with_capacity(s.len());
    let mut in_quote = false;

    while let Some(ch) = scanner.next_char() {
        match ch {
            '"' => in_quote = !in_quote,
            _ if !in_quote => return Err(scanner.outside_of_quotes(ch)),
            '$' => return Err(scanner.unescaped(ch)),
            '`' => unescape(&mut scanner, &mut result)?,
            _ => result.push(ch),
        }
    }
    if in_quote {
        return Err(scanner.unterminated_quote());
    }
    Ok(result)
}

/// Decodes the escape sequence following a backtick.
fn unescape(scanner: &mut Scanner<'_>, result: &mut String) -> Result<()> {
    let ch = scanner
        .next_char()
        .ok_or_else(|| scanner.unterminated("unterminated escape sequence"))?;
    let decoded = match ch {
        '0' => '\0',
        'a' => '\x07',
        'b' => '\x08',
        'e' => '\x1B',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        'u' => unescape_code_point(scanner)?,
        // Any other escaped character, including `"`, `$` and the backtick, stands for itself.
        _ => ch,
    };
    result.push(decoded);
    Ok(())
}

const UNTERMINATED_U: &str = "unterminated escape sequence `u";

fn expect_char(scanner: &mut Scanner<'_>, expected: char) -> Result<()> {
    match scanner.next_char() {
        Some(ch) if ch == expected => Ok(()),
        Some(ch) => Err(scanner.error(format_args!(
            "invalid character {} in escape sequence '`u'",
            Describe(ch)
        ))),
        None => Err(scanner.unterminated(UNTERMINATED_U)),
    }
}

/// Decodes the `{H…}` part of a `` `u{H…} `` escape.
fn unescape_code_point(scanner: &mut Scanner<'_>) -> Result<char> {
    expect_char(scanner, '{')?;
    let mut digits = String::with_capacity(6);
    if scanner.take_while_max(&mut digits, 6, |c| c.is_ascii_hexdigit()) == 0 {
        return Err(scanner.error("invalid escape sequence '`u'"));
    }
    expect_char(scanner, '}')?;
    u32::from_str_radix(&digits, 16)
        .ok()
        .filter(|&v| v <= MAX_CODE_POINT)
        .and_then(char::from_u32)
        .ok_or_else(|| scanner.error(format_args!("invalid escape sequence '`u{{{digits}}}'")))
}
