//! Identifier character rules.

/// Prefix given to identifiers that would otherwise start with a digit.
pub const DIGIT_PREFIX: char = 'N';

/// Check if a character may appear in an identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check if a name is a valid identifier: non-empty, starting with a letter
/// or underscore, and containing only identifier characters.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(is_identifier_char),
        _ => false,
    }
}

/// Prefix a digit-leading name with [`DIGIT_PREFIX`] (e.g., "2fa" -> "N2fa").
pub fn ensure_letter_leading(s: String) -> String {
    match s.chars().next() {
        Some(c) if c.is_numeric() => format!("{DIGIT_PREFIX}{s}"),
        _ => s,
    }
}
