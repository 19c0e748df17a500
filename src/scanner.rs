//! Forward-only cursor shared by the unquoting state machines.
//!
//! The scanner walks a quoted value one character at a time and remembers
//! where the most recently consumed character started, so that errors can
//! report the offset of the offending character.

use crate::chars::Describe;
use crate::error::SyntaxError;

pub(crate) struct Scanner<'a> {
    input: &'a str,
    position: usize,
    mark: usize, // Start of the last character returned by `next_char`
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Scanner {
            input,
            position: 0,
            mark: 0,
        }
    }

    pub(crate) fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    pub(crate) fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.mark = self.position;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Byte offset of the next character.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Consumes the next character if it equals `expected`.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.next_char();
            true
        } else {
            false
        }
    }

    /// Consumes `prefix` if the remaining input starts with it.
    pub(crate) fn eat_str(&mut self, prefix: &str) -> bool {
        if self.input[self.position..].starts_with(prefix) {
            self.mark = self.position;
            self.position += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consumes up to `max` characters accepted by `accept`, appending them to `buf`.
    pub(crate) fn take_while_max(
        &mut self,
        buf: &mut String,
        max: usize,
        accept: impl Fn(char) -> bool,
    ) -> usize {
        let mut taken = 0;
        while taken < max {
            match self.peek_char() {
                Some(ch) if accept(ch) => {
                    self.next_char();
                    buf.push(ch);
                    taken += 1;
                }
                _ => break,
            }
        }
        taken
    }

    /// Error located at the last consumed character.
    pub(crate) fn error(&self, msg: impl std::fmt::Display) -> SyntaxError {
        SyntaxError::new(msg, self.mark + 1)
    }

    /// Error for input that ended while more was expected.
    pub(crate) fn unterminated(&self, msg: &str) -> SyntaxError {
        SyntaxError::new(msg, self.input.len())
    }

    pub(crate) fn outside_of_quotes(&self, ch: char) -> SyntaxError {
        self.error(format_args!(
            "character {} outside of quoted string",
            Describe(ch)
        ))
    }

    pub(crate) fn unescaped(&self, ch: char) -> SyntaxError {
        self.error(format_args!("unescaped special character {}", Describe(ch)))
    }

    pub(crate) fn unterminated_quote(&self) -> SyntaxError {
        self.unterminated("unterminated quoted string")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_offsets_point_at_last_char() {
        let mut scanner = Scanner::new("aé!");
        assert_eq!(scanner.next_char(), Some('a'));
        assert_eq!(scanner.next_char(), Some('é'));
        assert_eq!(scanner.error("x").offset(), 2);
        assert_eq!(scanner.next_char(), Some('!'));
        assert_eq!(scanner.error("x").offset(), 4);
        assert_eq!(scanner.next_char(), None);
        assert_eq!(scanner.unterminated_quote().offset(), 4);
    }

    #[test]
    fn test_take_while_max_stops_at_limit() {
        let mut scanner = Scanner::new("abcdef");
        let mut buf = String::new();
        assert_eq!(scanner.take_while_max(&mut buf, 4, |c| c.is_ascii_hexdigit()), 4);
        assert_eq!(buf, "abcd");
        assert_eq!(scanner.peek_char(), Some('e'));
    }

    #[test]
    fn test_eat_str() {
        let mut scanner = Scanner::new("$'x");
        assert!(!scanner.eat_str("'"));
        assert!(scanner.eat_str("$'"));
        assert!(scanner.eat('x'));
        assert!(!scanner.eat('x'));
    }
}
