//! # mailcanon
//!
//! Email address validation and normalization.
//!
//! A hand-written, single-pass scanner decides whether a string denotes an
//! email address and produces its canonical form at the same time. It
//! performs no I/O, holds no shared state, and does linear work in the
//! length of its input.
//!
//! ## Grammar
//!
//! ```text
//! address  = [ display-name "<" ] [ "mailto:" ] local "@" domain [ ">" ]
//!          / [ "mailto:" ] local "@" domain [ "(" comment ")" ]
//! local    = dot-atom / quoted-string          ; at most 64 characters
//! domain   = label *( "." label )              ; labels at most 63 characters
//!          / "[" IPv4 "]" / "[" "IPv6:" IPv6 "]"
//! ```
//!
//! Comments may also appear inline within the local part and domain; they are
//! dropped from the output.
//!
//! ## Normalization
//!
//! - domain lower-cased, local part case preserved
//! - display name, comments and `mailto:` removed
//! - IP literals rendered canonically as `[192.0.2.1]` or `[IPv6:2001:db8::1]`
//!
//! ## Quick Start
//!
//! ```
//! assert_eq!(
//!     mailcanon::parse("John Doe <John@Example.COM>").as_deref(),
//!     Some("John@example.com")
//! );
//! assert_eq!(mailcanon::parse("a..b@example.com"), None);
//!
//! let err = mailcanon::normalize("user@example.123").unwrap_err();
//! assert_eq!(err, mailcanon::Error::InvalidDomain);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`EmailAddress`] as a string.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod error;
mod limits;
mod parser;

use tracing::debug;

pub use address::EmailAddress;
pub use error::{Error, Result};
pub use limits::{MAX_ADDRESS_LENGTH, MAX_LABEL_LENGTH, MAX_LOCAL_PART_LENGTH};

/// Validates and normalizes `input`.
///
/// Returns `None` for any malformed input; use [`normalize`] to learn why.
#[must_use]
pub fn parse(input: &str) -> Option<String> {
    normalize(input).ok()
}

/// Validates and normalizes `input`, reporting the first violation found.
///
/// # Errors
///
/// Returns [`Error::Empty`] for blank input, or the [`Error`] describing the
/// grammar violation that stopped the scan.
pub fn normalize(input: &str) -> Result<String> {
    let normalized = parser::run(input)?;
    debug!(%normalized, "address accepted");
    Ok(normalized)
}
