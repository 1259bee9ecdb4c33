//! Local part: quoted string or dot-atom, terminated by `@`.

use super::classify::{AT, DOT, ESCAPE, QUOTE, is_local_char};
use super::{ParseState, ScanBuffer, comment};
use crate::error::{Error, Result};
use crate::limits::MAX_LOCAL_PART_LENGTH;

/// Scans the local part and appends it, followed by `@`, to the result.
pub fn scan(state: &mut ParseState) -> Result<()> {
    state.scratch.clear();
    match state.input.first() {
        None => Err(Error::EmptyLocalPart),
        Some(QUOTE) => scan_quoted(state),
        Some(_) => scan_dot_atom(state),
    }
}

fn scan_quoted(state: &mut ParseState) -> Result<()> {
    scan_quoted_string(&mut state.input, &mut state.scratch)?;
    match state.input.pop_front() {
        Some(AT) => {
            commit(state);
            Ok(())
        }
        Some(c) => Err(Error::IllegalCharacter(c)),
        None => Err(Error::MissingAt),
    }
}

/// Moves a quoted string, quotes included, from `input` to `scratch`.
///
/// A backslash escapes exactly the next character. The closing quote must
/// fall within the local part length limit.
fn scan_quoted_string(input: &mut ScanBuffer, scratch: &mut ScanBuffer) -> Result<()> {
    let mut escaped = false;
    while scratch.len() < MAX_LOCAL_PART_LENGTH {
        let c = input.pop_front().ok_or(Error::UnterminatedQuote)?;
        scratch.push(c);
        if escaped {
            escaped = false;
        } else if c == ESCAPE {
            escaped = true;
        } else if c == QUOTE && scratch.len() > 1 {
            return Ok(());
        }
    }
    if input.is_empty() {
        Err(Error::UnterminatedQuote)
    } else {
        Err(Error::LocalPartTooLong)
    }
}

fn scan_dot_atom(state: &mut ParseState) -> Result<()> {
    loop {
        let c = comment::next_char(&mut state.input)?.ok_or(Error::MissingAt)?;
        match c {
            AT => {
                return match state.scratch.last() {
                    None => Err(Error::EmptyLocalPart),
                    Some(DOT) => Err(Error::MisplacedDot),
                    Some(_) => {
                        commit(state);
                        Ok(())
                    }
                };
            }
            _ if state.scratch.len() >= MAX_LOCAL_PART_LENGTH => {
                return Err(Error::LocalPartTooLong);
            }
            DOT => {
                if matches!(state.scratch.last(), None | Some(DOT)) {
                    return Err(Error::MisplacedDot);
                }
                state.scratch.push(DOT);
            }
            _ if is_local_char(c) => state.scratch.push(c),
            _ => return Err(Error::IllegalCharacter(c)),
        }
    }
}

fn commit(state: &mut ParseState) {
    state.result.append(&state.scratch);
    state.result.push(AT);
    state.scratch.clear();
}
