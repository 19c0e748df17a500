//! Selecting a quoting scheme at runtime.
//!
//! [`Scheme`] names every scheme this crate implements. It can be parsed
//! from and serialized to its kebab-case name, which makes it suitable for
//! configuration files and command-line flags.
//!
//! ## Examples
//!
//! ```rust
//! use argquote::{Quoting, Scheme};
//!
//! let scheme: Scheme = "posix-single".parse().unwrap();
//! assert_eq!(scheme, Scheme::PosixSingle);
//! assert_eq!(scheme.quote("it's"), r#"'it'"'"'s'"#);
//!
//! // Only ANSI-C quoting can carry arbitrary bytes
//! assert!(Scheme::AnsiC.binary().is_some());
//! assert!(Scheme::Cmd.binary().is_none());
//! ```

use crate::error::UnknownSchemeError;
use crate::{
    AnsiC, Argv, BinaryQuoting, Cmd, DoubleQuote, Msiexec, PsDoubleQuote, PsSingleQuote,
    PwshDoubleQuote, Quoting, Result, SingleQuote,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Identifies one quoting scheme.
///
/// `Scheme` implements [`Quoting`] by delegating to the scheme it names.
///
/// # Examples
///
/// ```rust
/// use argquote::Scheme;
///
/// assert_eq!(Scheme::PwshDouble.as_str(), "pwsh-double");
/// assert_eq!(Scheme::ALL.len(), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// POSIX shell single quotes, see [`SingleQuote`].
    PosixSingle,
    /// POSIX shell double quotes, see [`DoubleQuote`].
    PosixDouble,
    /// Bash and Zsh `$'…'` strings, see [`AnsiC`].
    AnsiC,
    /// `CommandLineToArgvW` arguments, see [`Argv`].
    Argv,
    /// `cmd.exe` caret escaping, see [`Cmd`].
    Cmd,
    /// Windows Installer property values, see [`Msiexec`].
    Msiexec,
    /// PowerShell single quotes, see [`PsSingleQuote`].
    PsSingle,
    /// Windows PowerShell double quotes, see [`PsDoubleQuote`].
    PsDouble,
    /// PowerShell 7+ double quotes, see [`PwshDoubleQuote`].
    PwshDouble,
}

impl Scheme {
    pub const ALL: [Scheme; 9] = [
        Scheme::PosixSingle,
        Scheme::PosixDouble,
        Scheme::AnsiC,
        Scheme::Argv,
        Scheme::Cmd,
        Scheme::Msiexec,
        Scheme::PsSingle,
        Scheme::PsDouble,
        Scheme::PwshDouble,
    ];

    /// Returns the name of this scheme.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Scheme::PosixSingle => "posix-single",
            Scheme::PosixDouble => "posix-double",
            Scheme::AnsiC => "ansi-c",
            Scheme::Argv => "argv",
            Scheme::Cmd => "cmd",
            Scheme::Msiexec => "msiexec",
            Scheme::PsSingle => "ps-single",
            Scheme::PsDouble => "ps-double",
            Scheme::PwshDouble => "pwsh-double",
        }
    }

    /// Returns the implementation of this scheme.
    #[must_use]
    pub fn quoting(self) -> &'static dyn Quoting {
        match self {
            Scheme::PosixSingle => &SingleQuote,
            Scheme::PosixDouble => &DoubleQuote,
            Scheme::AnsiC => &AnsiC,
            Scheme::Argv => &Argv,
            Scheme::Cmd => &Cmd,
            Scheme::Msiexec => &Msiexec,
            Scheme::PsSingle => &PsSingleQuote,
            Scheme::PsDouble => &PsDoubleQuote,
            Scheme::PwshDouble => &PwshDoubleQuote,
        }
    }

    /// Returns the byte-level implementation, for schemes that have one.
    #[must_use]
    pub fn binary(self) -> Option<&'static dyn BinaryQuoting> {
        match self {
            Scheme::AnsiC => Some(&AnsiC),
            _ => None,
        }
    }

    /// Reports whether this scheme can quote arbitrary bytes.
    #[must_use]
    pub fn is_binary(self) -> bool {
        self.binary().is_some()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = UnknownSchemeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSchemeError(s.to_string()))
    }
}

impl Quoting for Scheme {
    fn must_quote(&self, s: &str) -> bool {
        self.quoting().must_quote(s)
    }

    fn quote(&self, s: &str) -> String {
        self.quoting().quote(s)
    }

    fn unquote(&self, s: &str) -> Result<String> {
        self.quoting().unquote(s).inspect_err(|err| {
            debug!(
                scheme = self.as_str(),
                offset = err.offset(),
                "rejected quoted value: {}",
                err.message()
            );
        })
    }

    fn quote_if_needed<'a>(&self, s: &'a str) -> Cow<'a, str> {
        let quoted = self.quoting().quote_if_needed(s);
        trace!(
            scheme = self.as_str(),
            quoted = matches!(quoted, Cow::Owned(_)),
            "quoting decision"
        );
        quoted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.as_str().parse::<Scheme>().unwrap(), scheme);
            assert_eq!(scheme.to_string(), scheme.as_str());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ANSI-C".parse::<Scheme>().unwrap(), Scheme::AnsiC);
        assert_eq!("Pwsh-Double".parse::<Scheme>().unwrap(), Scheme::PwshDouble);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "fish".parse::<Scheme>().unwrap_err();
        assert_eq!(err, UnknownSchemeError("fish".to_string()));
    }

    #[test]
    fn test_only_ansi_c_is_binary() {
        let binary: Vec<_> = Scheme::ALL.into_iter().filter(|s| s.is_binary()).collect();
        assert_eq!(binary, vec![Scheme::AnsiC]);
    }

    #[test]
    fn test_delegation() {
        assert_eq!(Scheme::Msiexec.quote("a\"b"), Msiexec.quote("a\"b"));
        assert_eq!(
            Scheme::Argv.unquote("a").unwrap_err(),
            Argv.unquote("a").unwrap_err()
        );
    }
}
