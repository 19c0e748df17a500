//! Character classification shared by the schemes.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub(crate) const MAX_CODE_POINT: u32 = char::MAX as u32;

// Letters, marks, numbers, punctuation and symbols. ASCII space is handled separately.
static PRINTABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{M}\p{N}\p{P}\p{S}]$").expect("printable pattern is valid")
});

/// Reports whether `ch` renders as a visible glyph or is the ASCII space.
///
/// Other whitespace (tabs, non-breaking space, line separators), control,
/// format, private use and unassigned characters are not printable.
pub(crate) fn is_print(ch: char) -> bool {
    match ch {
        '\0'..='\x7F' => return matches!(ch, ' '..='~'),
        // Latin-1 is all graphic except the no-break space and the soft hyphen.
        '\u{80}'..='\u{9F}' | '\u{A0}' | '\u{AD}' => return false,
        '\u{A1}'..='\u{FF}' => return true,
        _ => {}
    }
    // A regex match per character, so quoting non-Latin text is comparatively slow.
    let mut buf = [0; 4];
    PRINTABLE.is_match(ch.encode_utf8(&mut buf))
}

/// Displays a character as `U+0061 'a'`, omitting the glyph when it is not printable.
pub(crate) struct Describe(pub char);

impl fmt::Display for Describe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", u32::from(self.0))?;
        if is_print(self.0) {
            write!(f, " '{}'", self.0)?;
        }
        Ok(())
    }
}
