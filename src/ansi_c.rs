//! ANSI-C quoting (`$'…'`) as implemented by Bash and Zsh.
//!
//! This is the only scheme that can carry arbitrary bytes: [`AnsiC`]
//! implements [`BinaryQuoting`] in addition to [`Quoting`].
//!
//! ## Escape Sequences
//!
//! | Sequence | Value |
//! |----------|-------|
//! | `\a` `\b` `\e` `\E` `\f` `\n` `\r` `\t` `\v` | Bell, backspace, escape, form feed, newline, return, tabs |
//! | `\"` `\'` `\?` `\\` | The character itself |
//! | `\cX` | Control character `X - '@'`, `\c?` is DEL |
//! | `\xH` `\xHH` | Byte |
//! | `\uHHHH` `\UHHHHHHHH` | Code point (1 to 4 or 8 digits) |
//! | `\O` `\OO` `\OOO` | Octal byte, consecutive ones must form UTF-8 in text |
//!
//! A backslash before any other character is kept along with that character.

use crate::chars::{is_print, Describe, MAX_CODE_POINT};
use crate::scanner::Scanner;
use crate::{posix, BinaryQuoting, Quoting, Result, SyntaxError};
use std::ops::Range;

/// Quotes and unquotes strings surrounded by single quotes with a dollar sign prefix (`$'…'`).
///
/// # Examples
///
/// ```rust
/// use argquote::{AnsiC, BinaryQuoting, Quoting};
///
/// let quoted = AnsiC.quote(r#"a b:"c d" 'e''f'  "g\"""#);
/// assert_eq!(quoted, r#"$'a b:\"c d\" \'e\'\'f\'  \"g\\\"\"'"#);
///
/// assert_eq!(AnsiC.quote_binary(b"\xFF\n"), r"$'\xFF\n'");
/// assert_eq!(AnsiC.unquote_binary(r"$'\xFF'$'\n'").unwrap(), b"\xFF\n");
/// ```
///
/// See <https://www.gnu.org/software/bash/manual/html_node/ANSI_002dC-Quoting.html>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnsiC;

/// Returns the single-letter escape for `byte`, if it has one.
fn named_escape(byte: u8) -> Option<&'static str> {
    let escaped = match byte {
        0x07 => r"\a",
        0x08 => r"\b",
        0x1B => r"\e",
        0x0C => r"\f",
        b'\n' => r"\n",
        b'\r' => r"\r",
        b'\t' => r"\t",
        0x0B => r"\v",
        b'"' => r#"\""#,
        b'\'' => r"\'",
        b'?' => r"\?",
        b'\\' => r"\\",
        _ => return None,
    };
    Some(escaped)
}

impl Quoting for AnsiC {
    fn must_quote(&self, s: &str) -> bool {
        posix::must_quote(s)
    }

    fn quote(&self, s: &str) -> String {
        let mut output = String::with_capacity(s.len() + 3);
        output.push_str("$'");
        for ch in s.chars() {
            let code = u32::from(ch);
            if let Some(escaped) = u8::try_from(code).ok().and_then(named_escape) {
                output.push_str(escaped);
            } else if code < 0x20 {
                output.push_str(&format!("\\x{code:02X}"));
            } else if is_print(ch) {
                output.push(ch);
            } else if code < 0x10000 {
                output.push_str(&format!("\\u{code:04X}"));
            } else {
                output.push_str(&format!("\\U{code:08X}"));
            }
        }
        output.push('\'');
        output
    }

    fn unquote(&self, s: &str) -> Result<String> {
        let mut output = TextSink::new(s);
        unquote_into(s, &mut output)?;
        Ok(output.text)
    }
}

impl BinaryQuoting for AnsiC {
    /// Every byte outside printable ASCII is written as `\xHH`, including
    /// the bytes of multi-byte UTF-8 sequences.
    fn quote_binary(&self, b: &[u8]) -> String {
        let mut output = String::with_capacity(b.len() + 3);
        output.push_str("$'");
        for &byte in b {
            if let Some(escaped) = named_escape(byte) {
                output.push_str(escaped);
            } else if (0x20..0x7F).contains(&byte) {
                output.push(char::from(byte));
            } else {
                output.push_str(&format!("\\x{byte:02X}"));
            }
        }
        output.push('\'');
        output
    }

    fn unquote_binary(&self, s: &str) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(s.len());
        unquote_into(s, &mut output)?;
        Ok(output)
    }
}

/// Destination of unquoted content.
///
/// Literal characters and `\u`/`\U` escapes arrive as code points, named,
/// `\c` and `\x` escapes as byte values and octal escapes as raw bytes.
trait Sink {
    fn push_char(&mut self, ch: char);
    fn push_byte(&mut self, byte: u8);
    /// Pushes the byte of an octal escape spanning `span` of the input.
    fn push_octal(&mut self, byte: u8, span: Range<usize>);
    /// Ends the current run of octal escapes.
    fn flush(&mut self) -> Result<()>;
}

/// Text output: byte values are code points of the same number, while a
/// run of consecutive octal escapes must spell out UTF-8.
struct TextSink<'a> {
    input: &'a str,
    text: String,
    pending: Vec<u8>,
    run: Range<usize>,
}

impl<'a> TextSink<'a> {
    fn new(input: &'a str) -> Self {
        TextSink {
            input,
            text: String::with_capacity(input.len()),
            pending: Vec::new(),
            run: 0..0,
        }
    }
}

impl Sink for TextSink<'_> {
    fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    fn push_byte(&mut self, byte: u8) {
        self.text.push(char::from(byte));
    }

    fn push_octal(&mut self, byte: u8, span: Range<usize>) {
        if self.pending.is_empty() {
            self.run.start = span.start;
        }
        self.run.end = span.end;
        self.pending.push(byte);
    }

    fn flush(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let bytes = std::mem::take(&mut self.pending);
        let decoded = String::from_utf8(bytes).map_err(|_| {
            SyntaxError::new(
                format_args!("invalid UTF-8 escape sequence `{}`", &self.input[self.run.clone()]),
                self.run.start + 1,
            )
        })?;
        self.text.push_str(&decoded);
        Ok(())
    }
}

impl Sink for Vec<u8> {
    fn push_char(&mut self, ch: char) {
        let mut buf = [0; 4];
        self.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }

    fn push_byte(&mut self, byte: u8) {
        self.push(byte);
    }

    fn push_octal(&mut self, byte: u8, _span: Range<usize>) {
        self.push(byte);
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

fn unquote_into<S: Sink>(s: &str, output: &mut S) -> Result<()> {
    let mut scanner = Scanner::new(s);
    let mut in_quote = false;

    while let Some(ch) = scanner.peek_char() {
        if !in_quote {
            if scanner.eat_str("$'") {
                in_quote = true;
                continue;
            }
            scanner.next_char();
            return Err(scanner.outside_of_quotes(ch));
        }
        let start = scanner.position();
        scanner.next_char();
        match ch {
            '\'' => in_quote = false,
            '\\' => unescape(&mut scanner, output, start)?,
            _ => {
                output.flush()?;
                output.push_char(ch);
            }
        }
    }
    if in_quote {
        return Err(scanner.unterminated_quote());
    }
    output.flush()
}

/// Decodes the escape sequence whose backslash starts at `start`.
fn unescape<S: Sink>(scanner: &mut Scanner<'_>, output: &mut S, start: usize) -> Result<()> {
    let ch = scanner
        .next_char()
        .ok_or_else(|| scanner.unterminated("unterminated escape sequence"))?;
    if !matches!(ch, '0'..='7') {
        output.flush()?;
    }
    match ch {
        'a' => output.push_byte(0x07),
        'b' => output.push_byte(0x08),
        'e' | 'E' => output.push_byte(0x1B),
        'f' => output.push_byte(0x0C),
        'n' => output.push_byte(b'\n'),
        'r' => output.push_byte(b'\r'),
        't' => output.push_byte(b'\t'),
        'v' => output.push_byte(0x0B),
        '"' | '\'' | '?' | '\\' => output.push_char(ch),
        'c' => {
            let control = scanner
                .next_char()
                .ok_or_else(|| scanner.unterminated("unterminated escape sequence `\\c`"))?;
            let byte = match control.to_ascii_uppercase() {
                '?' => 0x7F,
                upper @ '@'..='_' => upper as u8 - b'@',
                _ => {
                    return Err(scanner.error(format_args!(
                        "invalid character {} in escape sequence `\\c`",
                        Describe(control)
                    )))
                }
            };
            output.push_byte(byte);
        }
        'x' | 'u' | 'U' => {
            let max_digits = match ch {
                'x' => 2,
                'u' => 4,
                _ => 8,
            };
            let mut digits = String::with_capacity(max_digits);
            if scanner.take_while_max(&mut digits, max_digits, |c| c.is_ascii_hexdigit()) == 0 {
                return Err(scanner.error(format_args!("unterminated escape sequence `\\{ch}`")));
            }
            let invalid = || format!("invalid escape sequence `\\{ch}{digits}`");
            let value = u32::from_str_radix(&digits, 16)
                .ok()
                .filter(|&v| v <= MAX_CODE_POINT)
                .ok_or_else(|| scanner.error(invalid()))?;
            if ch == 'x' {
                // At most two digits, so the value is a byte.
                output.push_byte(value as u8);
            } else {
                let decoded = char::from_u32(value).ok_or_else(|| scanner.error(invalid()))?;
                output.push_char(decoded);
            }
        }
        '0'..='7' => {
            let mut digits = String::from(ch);
            scanner.take_while_max(&mut digits, 2, |c| matches!(c, '0'..='7'));
            let byte = u8::from_str_radix(&digits, 8)
                .map_err(|_| scanner.error(format_args!("invalid escape sequence `\\{digits}`")))?;
            output.push_octal(byte, start..scanner.position());
        }
        _ => {
            output.push_char('\\');
            output.push_char(ch);
        }
    }
    Ok(())
}
