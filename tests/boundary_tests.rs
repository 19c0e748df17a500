//! Round trips over edge-case inputs: runs of each scheme's delimiter and
//! unsafe characters at the beginning, middle and end of a string.

use argquote::{
    AnsiC, Argv, BinaryQuoting, Cmd, DoubleQuote, Msiexec, PsDoubleQuote, PsSingleQuote,
    PwshDoubleQuote, Quoting, SingleQuote,
};
use pretty_assertions::assert_eq;

struct InputTest {
    name: String,
    input: String,
}

impl InputTest {
    fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        InputTest {
            name: name.into(),
            input: input.into(),
        }
    }
}

/// Pushes `run` placed at the beginning, in the middle and at the end of a word.
fn push_positions(tests: &mut Vec<InputTest>, label: &str, run: &str) {
    tests.push(InputTest::new(format!("{label};beginning"), format!("{run}bar")));
    tests.push(InputTest::new(format!("{label};middle"), format!("foo{run}bar")));
    tests.push(InputTest::new(format!("{label};end"), format!("foo{run}")));
}

fn input_tests(delim: char, unsafe_chars: &[char]) -> Vec<InputTest> {
    let mut tests = vec![
        InputTest::new("ascii: symbols", "$%'()*+,-./<>:;="),
        InputTest::new("unicode: emoji", "😇🤖💁🙇🏿\u{200D}♂️"),
        InputTest::new("unicode: text", "Testing «ταБЬℓσ»: 1<2 & 4+1>3, now 20% off!"),
        InputTest::new("chars: 1-255", (1..=255u8).map(char::from).collect::<String>()),
    ];
    for i in 1..=8 {
        let run = delim.to_string().repeat(i);
        push_positions(&mut tests, &format!("delim={delim:?};i={i}"), &run);
    }
    let common = ['\t', '\n', ' ', '"', '\'', '\\'];
    for &c in common.iter().chain(unsafe_chars) {
        for i in 1..=4 {
            let cs = c.to_string().repeat(i);
            push_positions(&mut tests, &format!("cs={cs:?}"), &cs);
            for ds in [delim.to_string(), delim.to_string().repeat(2)] {
                push_positions(&mut tests, &format!("cs={cs:?};ds={ds:?}"), &format!("{cs}{ds}"));
            }
        }
    }
    tests
}

fn assert_round_trips(scheme: &dyn Quoting, delim: char, unsafe_chars: &[char]) {
    for test in input_tests(delim, unsafe_chars) {
        let quoted = scheme.quote(&test.input);
        let unquoted = scheme
            .unquote(&quoted)
            .unwrap_or_else(|err| panic!("{}: unquote({quoted:?}) failed: {err}", test.name));
        assert_eq!(unquoted, test.input, "{}", test.name);
    }
}

#[test]
fn test_single_quote_boundaries() {
    assert_round_trips(&SingleQuote, '\'', &['\t', '\n', ' ', '"']);
}

#[test]
fn test_double_quote_boundaries() {
    assert_round_trips(&DoubleQuote, '"', &['\t', '\n', ' ', '$', '\'']);
}

#[test]
fn test_ansi_c_boundaries() {
    assert_round_trips(&AnsiC, '\'', &['\t', '\n', ' ', '$', '"']);
}

#[test]
fn test_ansi_c_binary_boundaries() {
    for test in input_tests('\'', &['\t', '\n', ' ', '$', '"']) {
        let quoted = AnsiC.quote_binary(test.input.as_bytes());
        assert_eq!(AnsiC.unquote_binary(&quoted).unwrap(), test.input.as_bytes(), "{}", test.name);
    }
    let bytes: Vec<u8> = (1..=255).collect();
    assert_eq!(AnsiC.unquote_binary(&AnsiC.quote_binary(&bytes)).unwrap(), bytes);
}

#[test]
fn test_argv_boundaries() {
    assert_round_trips(&Argv, '"', &[]);
}

#[test]
fn test_argv_backslash_runs() {
    for n in 1..=8 {
        let run = "\\".repeat(n);
        for input in [
            format!("{run}\""),
            format!("a{run}\"b"),
            format!("a{run}"),
            format!("{run}\"{run}"),
        ] {
            assert_eq!(Argv.unquote(&Argv.quote(&input)).unwrap(), input);
        }
    }
}

#[test]
fn test_cmd_boundaries() {
    assert_round_trips(&Cmd, '"', &['^']);
}

#[test]
fn test_msiexec_boundaries() {
    assert_round_trips(&Msiexec, '"', &[]);
}

#[test]
fn test_ps_single_quote_boundaries() {
    assert_round_trips(&PsSingleQuote, '\'', &['$', '`']);
}

#[test]
fn test_ps_double_quote_boundaries() {
    assert_round_trips(&PsDoubleQuote, '\'', &['$', '`']);
    assert_round_trips(&PsDoubleQuote, '"', &['$', '`']);
}

#[test]
fn test_pwsh_double_quote_boundaries() {
    assert_round_trips(&PwshDoubleQuote, '\'', &['$', '`']);
    assert_round_trips(&PwshDoubleQuote, '"', &['$', '`']);
}
