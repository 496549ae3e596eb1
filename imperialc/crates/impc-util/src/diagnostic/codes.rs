//! Diagnostic codes for categorizing toolchain errors and warnings.
//!
//! # Examples
//!
//! ```
//! use impc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors or "W" for warnings and `number` is zero-padded to four
/// digits. Lexical diagnostics live in the 1000 range.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the code prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric part of the code
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the formatted code, e.g. `E1001`
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Character that starts no token
    pub const E_LEXER_INVALID_CHAR: Self = Self::new("E", 1001);
    /// String literal without a closing quote
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// Number literal that is cut short or out of range
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 1003);
    /// Block comment without a closing `*/`
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1004);
    /// Unknown or malformed escape sequence
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1005);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("E", 1001);
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.number(), 1001);
    }

    #[test]
    fn test_as_str_pads_to_four_digits() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 12).as_str(), "W0012");
        assert_eq!(DiagnosticCode::new("E", 1001).as_str(), "E1001");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_LEXER_INVALID_ESCAPE;
        assert_eq!(format!("{}", code), "E1005");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1005)");
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_INVALID_CHAR,
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            DiagnosticCode::E_LEXER_INVALID_ESCAPE,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
