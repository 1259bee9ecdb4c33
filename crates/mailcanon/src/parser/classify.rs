//! Character classes of the address grammar.

pub const AT: char = '@';
pub const DOT: char = '.';
pub const HYPHEN: char = '-';
pub const QUOTE: char = '"';
pub const ESCAPE: char = '\\';
pub const OPEN_BRACKET: char = '[';
pub const CLOSE_BRACKET: char = ']';
pub const OPEN_COMMENT: char = '(';
pub const CLOSE_COMMENT: char = ')';
pub const OPEN_ANGLE: char = '<';
pub const CLOSE_ANGLE: char = '>';

/// Non-ASCII characters admitted by every class below.
///
/// Whitespace and control characters are excluded so that input trimming
/// never changes an already normalized address.
#[inline]
pub fn is_extended(c: char) -> bool {
    !c.is_ascii() && !c.is_whitespace() && !c.is_control()
}

/// Characters allowed in an unquoted local part.
///
/// ```text
/// ALPHA / DIGIT / "_" / "." / "-" / non-ASCII /
/// "{" / "}" / "|" / "/" / "%" / "$" / "&" / "#" / "~" /
/// "!" / "?" / "*" / "`" / "'" / "^" / "=" / "+"
/// ```
#[inline]
pub fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || is_extended(c)
        || matches!(
            c,
            '_' | '.'
                | '-'
                | '{'
                | '}'
                | '|'
                | '/'
                | '%'
                | '$'
                | '&'
                | '#'
                | '~'
                | '!'
                | '?'
                | '*'
                | '`'
                | '\''
                | '^'
                | '='
                | '+'
        )
}

/// Characters allowed inside a domain label, besides `.` and `-`.
#[inline]
pub fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || is_extended(c)
}

/// Characters allowed in the top-level label.
#[inline]
pub fn is_top_level_char(c: char) -> bool {
    c.is_ascii_alphabetic() || is_extended(c)
}
