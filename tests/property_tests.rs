//! Property-based tests for the round-trip guarantees every scheme makes.
//!
//! The fixed tables in `integration_tests.rs` pin exact output; these check
//! that quoting stays reversible across generated inputs, including inputs
//! dense in the characters each interpreter treats specially.

use argquote::{AnsiC, BinaryQuoting, Quoting, Scheme};
use proptest::prelude::*;
use std::borrow::Cow;

fn scheme() -> impl Strategy<Value = Scheme> {
    proptest::sample::select(Scheme::ALL.to_vec())
}

/// Short strings built mostly from quote, escape and whitespace characters.
fn special_heavy() -> impl Strategy<Value = String> {
    r#"[ \t\n\r\x00\x1B\x7F\u00A0"'$`\\^!&{}u0-9a-fxé😇]{0,24}"#
}

proptest! {
    #[test]
    fn prop_round_trip(scheme in scheme(), s in any::<String>()) {
        let quoted = scheme.quote(&s);
        prop_assert_eq!(scheme.unquote(&quoted), Ok(s));
    }

    #[test]
    fn prop_round_trip_special_chars(scheme in scheme(), s in special_heavy()) {
        let quoted = scheme.quote(&s);
        prop_assert_eq!(scheme.unquote(&quoted), Ok(s));
    }

    #[test]
    fn prop_binary_round_trip(b in prop::collection::vec(any::<u8>(), 0..64)) {
        let quoted = AnsiC.quote_binary(&b);
        prop_assert_eq!(AnsiC.unquote_binary(&quoted), Ok(b));
    }

    #[test]
    fn prop_binary_agrees_with_text_on_ascii(s in "[ -~\t\n]{0,32}") {
        prop_assert_eq!(AnsiC.quote_binary(s.as_bytes()), AnsiC.quote(&s));
    }

    #[test]
    fn prop_quote_if_needed(scheme in scheme(), s in special_heavy()) {
        match scheme.quote_if_needed(&s) {
            Cow::Borrowed(verbatim) => {
                prop_assert!(!scheme.must_quote(&s));
                prop_assert_eq!(verbatim, s.as_str());
            }
            Cow::Owned(quoted) => {
                prop_assert!(scheme.must_quote(&s));
                prop_assert_eq!(quoted, scheme.quote(&s));
            }
        }
    }

    #[test]
    fn prop_unquote_offsets_in_bounds(scheme in scheme(), s in special_heavy()) {
        if let Err(err) = scheme.unquote(&s) {
            prop_assert!(err.offset() <= s.len(), "{} > {}", err.offset(), s.len());
        }
    }

    #[test]
    fn prop_double_quoting_is_reversible(outer in scheme(), inner in scheme(), s in special_heavy()) {
        let quoted = outer.quote(&inner.quote(&s));
        let once = outer.unquote(&quoted);
        prop_assert!(once.is_ok());
        prop_assert_eq!(inner.unquote(&once.unwrap_or_default()), Ok(s));
    }
}
