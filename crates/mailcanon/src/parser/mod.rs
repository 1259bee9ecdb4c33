//! Single-pass address scanner.
//!
//! One [`ParseState`] is threaded through a fixed pipeline of stages:
//!
//! ```text
//! DisplayName → MailTo → Local → Domain → IpLiteral
//! ```
//!
//! Each stage consumes from `input`, builds tokens in `scratch` and appends
//! normalized text to `result`. A stage that rejects the input turns the
//! outcome into [`ParseOutcome::Invalid`], which no later stage can leave.

mod buffer;
mod classify;
mod comment;
mod display;
mod domain;
mod literal;
mod local;
mod mailto;

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::limits::MAX_ADDRESS_LENGTH;

pub use buffer::ScanBuffer;
pub use literal::IPV6_TAG;

/// Why the domain stage handed its token to the IP-literal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferral {
    /// A character outside the host-name alphabet was read.
    Switched,
    /// Every character was host-name legal but the whole was not a host name.
    FellThrough,
}

/// Mutable state of one parse call.
#[derive(Debug)]
pub struct ParseState {
    /// Unconsumed input.
    pub input: ScanBuffer,
    /// Token being built.
    pub scratch: ScanBuffer,
    /// Normalized output so far.
    pub result: ScanBuffer,
    /// Set by the domain stage when `scratch` holds an IP literal candidate.
    pub literal: Option<Deferral>,
}

impl ParseState {
    fn new(raw: &str) -> Self {
        Self {
            input: ScanBuffer::from(raw.trim()),
            scratch: ScanBuffer::with_capacity(MAX_ADDRESS_LENGTH),
            result: ScanBuffer::with_capacity(MAX_ADDRESS_LENGTH),
            literal: None,
        }
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Strips `Name <address>` wrappers and trailing comments.
    DisplayName,
    /// Strips a `mailto:` prefix.
    MailTo,
    /// Local part up to and including `@`.
    Local,
    /// Host name after `@`.
    Domain,
    /// Bracketed or bare IP address after `@`.
    IpLiteral,
}

impl Stage {
    const fn name(self) -> &'static str {
        match self {
            Self::DisplayName => "display-name",
            Self::MailTo => "mailto",
            Self::Local => "local",
            Self::Domain => "domain",
            Self::IpLiteral => "ip-literal",
        }
    }

    fn apply(self, state: &mut ParseState) -> Result<()> {
        match self {
            Self::DisplayName => display::strip(state),
            Self::MailTo => {
                mailto::strip(&mut state.input);
                Ok(())
            }
            Self::Local => local::scan(state),
            Self::Domain => domain::scan(state),
            Self::IpLiteral => match state.literal.take() {
                Some(deferral) => literal::scan(state, deferral),
                None => Ok(()),
            },
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of the parse between stages.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Still accepting; the state is handed to the next stage.
    Scanning(ParseState),
    /// Rejected. Absorbing: later stages are skipped.
    Invalid(Error),
}

impl ParseOutcome {
    /// Starts a parse of `raw`.
    #[must_use]
    pub fn start(raw: &str) -> Self {
        Self::Scanning(ParseState::new(raw))
    }

    /// Runs `stage` if still scanning.
    #[must_use]
    pub fn and_then(self, stage: Stage) -> Self {
        match self {
            Self::Scanning(mut state) => match stage.apply(&mut state) {
                Ok(()) => Self::Scanning(state),
                Err(error) => {
                    trace!(%stage, %error, "address rejected");
                    Self::Invalid(error)
                }
            },
            invalid @ Self::Invalid(_) => invalid,
        }
    }

    /// Converts the final state into the normalized address.
    ///
    /// # Errors
    ///
    /// Returns the error that made the outcome invalid, or an error if
    /// scanning produced no output.
    pub fn finish(self) -> Result<String> {
        match self {
            Self::Invalid(error) => Err(error),
            Self::Scanning(state) if state.result.is_empty() => Err(Error::Empty),
            Self::Scanning(state) if state.result.len() > MAX_ADDRESS_LENGTH => Err(Error::TooLong),
            Self::Scanning(state) => Ok(state.result.to_string()),
        }
    }
}

/// Runs the full pipeline over `raw`.
pub fn run(raw: &str) -> Result<String> {
    ParseOutcome::start(raw)
        .and_then(Stage::DisplayName)
        .and_then(Stage::MailTo)
        .and_then(Stage::Local)
        .and_then(Stage::Domain)
        .and_then(Stage::IpLiteral)
        .finish()
}
