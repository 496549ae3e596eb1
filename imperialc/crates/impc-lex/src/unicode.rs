//! Character classification for the ImperialCode lexer.
//!
//! Identifier rules accept Unicode letters, so classification goes through
//! `char` methods rather than byte tests.

/// Checks if a character is valid as the start of an identifier.
///
/// Letters (any Unicode alphabetic character) and underscore.
///
/// # Example
///
/// ```
/// use impc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('ñ'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// # Example
///
/// ```
/// use impc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('+'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Whitespace skipped between tokens: space, tab, newline, carriage return.
///
/// Other Unicode spacing characters are not whitespace in ImperialCode
/// and are reported as invalid characters.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Parses the hex digits of a `\u{...}` escape into a character.
///
/// Accepts 1 to 6 hex digits naming a Unicode scalar value.
///
/// # Example
///
/// ```
/// use impc_lex::unicode::char_from_hex;
///
/// assert_eq!(char_from_hex("41"), Some('A'));
/// assert_eq!(char_from_hex("1F600"), Some('😀'));
/// assert_eq!(char_from_hex("D800"), None);     // surrogate
/// assert_eq!(char_from_hex("110000"), None);   // past U+10FFFF
/// assert_eq!(char_from_hex(""), None);
/// ```
pub fn char_from_hex(hex: &str) -> Option<char> {
    if hex.is_empty() || hex.len() > 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
