//! ASCII character classification for the scanner.
//!
//! Classification is deliberately limited to single characters in the ASCII
//! range; anything outside it falls through the scanner's default case. The
//! case boundaries here are the scanner's dispatch contract, so widening any
//! of these sets changes what the scanner accepts.

/// Whitespace skipped between tokens: space, tab, carriage return, newline.
///
/// Note this is narrower than `char::is_whitespace`; vertical tabs, form
/// feeds, and Unicode spaces are not skipped and lex as `Unexpected`.
pub const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters that start an identifier: ASCII letters only.
///
/// An underscore does not start an identifier; it only continues one.
pub const fn is_ident_start(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z')
}

/// Characters that continue an identifier: letters, digits, underscore.
pub const fn is_ident_continue(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
}

/// Characters that continue a real-number literal: digits and the dot.
///
/// The dot is accepted unconditionally, so `1.2.3` scans as one literal;
/// numeric well-formedness is not this layer's concern.
pub const fn is_number_continue(c: char) -> bool {
    matches!(c, '0'..='9' | '.')
}
