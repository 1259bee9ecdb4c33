//! Error types for address parsing.

/// Result type alias for address parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an input was rejected.
///
/// [`crate::parse`] folds all of these into `None`; [`crate::normalize`]
/// reports the first one encountered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input was empty or whitespace only.
    #[error("Address is empty")]
    Empty,

    /// A trailing `>` has no opening `<`.
    #[error("Missing '<' for trailing '>'")]
    UnmatchedAngleBracket,

    /// A comment is nested, unterminated, or unopened.
    #[error("Malformed comment")]
    MalformedComment,

    /// A quoted local part never closes, or closes past the length limit.
    #[error("Unterminated quoted local part")]
    UnterminatedQuote,

    /// No `@` follows the local part.
    #[error("Missing '@' separator")]
    MissingAt,

    /// Nothing precedes the `@`.
    #[error("Local part is empty")]
    EmptyLocalPart,

    /// Local part longer than [`crate::MAX_LOCAL_PART_LENGTH`].
    #[error("Local part exceeds {} characters", crate::MAX_LOCAL_PART_LENGTH)]
    LocalPartTooLong,

    /// Leading, trailing, or doubled `.`.
    #[error("Misplaced '.'")]
    MisplacedDot,

    /// `-` at the start or end of a domain label.
    #[error("Misplaced '-'")]
    MisplacedHyphen,

    /// Character not allowed at this position.
    #[error("Illegal character {0:?}")]
    IllegalCharacter(char),

    /// Domain label longer than [`crate::MAX_LABEL_LENGTH`].
    #[error("Domain label exceeds {} characters", crate::MAX_LABEL_LENGTH)]
    LabelTooLong,

    /// Domain is neither a host name nor an IP address.
    #[error("Invalid domain")]
    InvalidDomain,

    /// `[` without a closing `]`.
    #[error("Unclosed address literal")]
    UnclosedLiteral,

    /// Address literal did not hold an acceptable IP address.
    #[error("Invalid address literal: {0}")]
    InvalidIpLiteral(String),

    /// Address longer than [`crate::MAX_ADDRESS_LENGTH`].
    #[error("Address exceeds {} characters", crate::MAX_ADDRESS_LENGTH)]
    TooLong,
}

impl Error {
    /// Returns true if the input carried no address at all.
    ///
    /// Value types map this to "no value" rather than to a parse failure.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
