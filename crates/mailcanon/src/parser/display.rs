//! Display names and trailing comments.
//!
//! `Jane Doe <jane@example.com>` and `jane@example.com (Jane Doe)` both
//! leave `jane@example.com` in the input.

use super::{ParseState, ScanBuffer};
use super::classify::{CLOSE_ANGLE, CLOSE_COMMENT, OPEN_ANGLE, OPEN_COMMENT};
use crate::error::{Error, Result};

pub fn strip(state: &mut ParseState) -> Result<()> {
    let input = &mut state.input;
    match input.last() {
        None => Err(Error::Empty),
        Some(CLOSE_ANGLE) => {
            let open = input
                .rposition(|c| c == OPEN_ANGLE)
                .ok_or(Error::UnmatchedAngleBracket)?;
            input.pop_back();
            input.trim_start(open + 1);
            Ok(())
        }
        Some(CLOSE_COMMENT) => strip_trailing_comment(input),
        Some(_) => Ok(()),
    }
}

/// Drops everything from the `(` that opens the trailing comment.
fn strip_trailing_comment(input: &mut ScanBuffer) -> Result<()> {
    for i in (0..input.len() - 1).rev() {
        match input.get(i) {
            Some(CLOSE_COMMENT) => return Err(Error::MalformedComment),
            Some(OPEN_COMMENT) => {
                input.truncate(i);
                input.trim_end_whitespace();
                return Ok(());
            }
            _ => {}
        }
    }
    Err(Error::MalformedComment)
}
