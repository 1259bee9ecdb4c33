//! Inline `(comment)` skipping.

use super::ScanBuffer;
use super::classify::{CLOSE_COMMENT, OPEN_COMMENT};
use crate::error::{Error, Result};

/// Consumes the next character that is not part of a comment.
///
/// Any number of back-to-back comments are discarded iteratively. Returns
/// `Ok(None)` once the input is exhausted.
///
/// # Errors
///
/// [`Error::MalformedComment`] if a comment is nested or never closed.
pub fn next_char(input: &mut ScanBuffer) -> Result<Option<char>> {
    loop {
        match input.pop_front() {
            Some(OPEN_COMMENT) => skip_comment(input)?,
            other => return Ok(other),
        }
    }
}

/// Discards up to and including the `)` closing an already-opened comment.
fn skip_comment(input: &mut ScanBuffer) -> Result<()> {
    while let Some(c) = input.pop_front() {
        match c {
            CLOSE_COMMENT => return Ok(()),
            OPEN_COMMENT => return Err(Error::MalformedComment),
            _ => {}
        }
    }
    Err(Error::MalformedComment)
}
