//! Diagnostic codes for categorizing errors and warnings.

use crate::error::CodeError;
use std::fmt;
use std::str::FromStr;

/// A unique code identifying a diagnostic message.
///
/// Codes follow the format `{prefix}{number}` where the prefix is `E` for
/// errors or `W` for warnings and the number is zero-padded to four digits.
///
/// # Examples
///
/// ```
/// use rillc_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::E_LEX_UNEXPECTED_CHAR;
/// assert_eq!(code.as_str(), "E1001");
///
/// let parsed: DiagnosticCode = "E1001".parse().unwrap();
/// assert_eq!(parsed, code);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (`E` for error, `W` for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// The full code string, e.g. `E1001`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: scanner met a character outside every recognized class.
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiagnosticCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, digits) = match s.as_bytes().first() {
            Some(b'E') => ("E", &s[1..]),
            Some(b'W') => ("W", &s[1..]),
            _ => return Err(CodeError::UnknownPrefix(s.to_string())),
        };
        let number = digits
            .parse::<u32>()
            .map_err(|_| CodeError::MissingNumber(s.to_string()))?;
        Ok(Self { prefix, number })
    }
}
