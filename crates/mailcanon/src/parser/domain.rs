//! Host-name domain after `@`.

use super::classify::{DOT, HYPHEN, is_domain_char, is_top_level_char};
use super::{Deferral, ParseState, comment};
use crate::error::{Error, Result};
use crate::limits::{MAX_ADDRESS_LENGTH, MAX_LABEL_LENGTH};

/// Scans the domain into `scratch`, lower-casing as it goes.
///
/// A well-formed host name is appended to the result. Anything else is left
/// in `scratch` with [`ParseState::literal`] set, for the IP-literal stage.
pub fn scan(state: &mut ParseState) -> Result<()> {
    state.scratch.clear();
    // Index of the first character of the current label.
    let mut label_start = 0;
    let mut seen_dot = false;

    while let Some(c) = comment::next_char(&mut state.input)? {
        // Checked after comments are skipped, so only output counts.
        if state.scratch.len() + state.result.len() >= MAX_ADDRESS_LENGTH {
            return Err(Error::TooLong);
        }
        match c {
            DOT => {
                if state.scratch.is_empty()
                    || state.input.is_empty()
                    || matches!(state.scratch.last(), Some(DOT | HYPHEN))
                {
                    return Err(Error::MisplacedDot);
                }
                if state.scratch.len() - label_start > MAX_LABEL_LENGTH {
                    return Err(Error::LabelTooLong);
                }
                state.scratch.push(DOT);
                label_start = state.scratch.len();
                seen_dot = true;
            }
            HYPHEN => {
                if state.scratch.is_empty()
                    || state.input.is_empty()
                    || state.scratch.last() == Some(DOT)
                {
                    return Err(Error::MisplacedHyphen);
                }
                state.scratch.push(HYPHEN);
            }
            _ if is_domain_char(c) => state.scratch.push_lowercase(c),
            _ => {
                state.scratch.push_lowercase(c);
                state.literal = Some(Deferral::Switched);
                return Ok(());
            }
        }
    }

    if state.scratch.len() - label_start > MAX_LABEL_LENGTH {
        return Err(Error::LabelTooLong);
    }

    if is_host_name(state, label_start, seen_dot) {
        state.result.append(&state.scratch);
        state.scratch.clear();
    } else {
        state.literal = Some(Deferral::FellThrough);
    }
    Ok(())
}

/// Longer than one character, and a top-level label made of letters when
/// there is more than one label.
fn is_host_name(state: &ParseState, label_start: usize, seen_dot: bool) -> bool {
    state.scratch.len() > 1
        && !matches!(state.scratch.last(), Some(DOT | HYPHEN))
        && (!seen_dot || state.scratch.iter().skip(label_start).all(is_top_level_char))
}
