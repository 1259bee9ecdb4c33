//! IP address literals: `[192.0.2.1]`, `[IPv6:2001:db8::1]`, or a bare address.

use std::net::IpAddr;

use super::classify::{CLOSE_BRACKET, DOT, OPEN_BRACKET};
use super::{Deferral, ParseState};
use crate::error::{Error, Result};
use crate::limits::MAX_ADDRESS_LENGTH;

/// Tag that marks an IPv6 literal.
pub const IPV6_TAG: &str = "IPv6:";

/// Parses the literal held in `scratch` plus the rest of the input and
/// appends its canonical bracketed form to the result.
pub fn scan(state: &mut ParseState, deferral: Deferral) -> Result<()> {
    let bracketed = state.scratch.first() == Some(OPEN_BRACKET);
    if bracketed {
        if state.input.last() != Some(CLOSE_BRACKET) {
            return Err(Error::UnclosedLiteral);
        }
        state.scratch.trim_start(1);
        state.input.pop_back();
    }

    let tagged = state.input.starts_with_ignore_ascii_case(IPV6_TAG);
    if tagged {
        state.input.trim_start(IPV6_TAG.len());
    }

    if state.result.len() + state.scratch.len() + state.input.len() > MAX_ADDRESS_LENGTH {
        return Err(Error::TooLong);
    }
    state.scratch.append(&state.input);
    state.input.clear();
    let text = state.scratch.to_string();

    let Some(addr) = accept(&text, tagged) else {
        return Err(
            if deferral == Deferral::FellThrough && !bracketed && !tagged {
                Error::InvalidDomain
            } else {
                Error::InvalidIpLiteral(text)
            },
        );
    };

    state.result.push(OPEN_BRACKET);
    if addr.is_ipv6() {
        state.result.push_str(IPV6_TAG);
    }
    state.result.push_str(&addr.to_string());
    state.result.push(CLOSE_BRACKET);
    state.scratch.clear();
    Ok(())
}

/// Any IPv6 address, or an untagged dotted-quad IPv4 address.
fn accept(text: &str, tagged: bool) -> Option<IpAddr> {
    let addr: IpAddr = text.parse().ok()?;
    match addr {
        IpAddr::V6(_) => Some(addr),
        IpAddr::V4(_) if !tagged && text.matches(DOT).count() == 3 => Some(addr),
        IpAddr::V4(_) => None,
    }
}
