//! Per-address check results and their output formats.

use serde::Serialize;

/// Outcome of checking one input line or argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Input as given.
    pub input: String,
    /// Whether the input is a valid address.
    pub valid: bool,
    /// Normalized address, when valid.
    pub normalized: Option<String>,
    /// Reason for rejection, when invalid.
    pub error: Option<String>,
}

impl Report {
    /// Checks `input`.
    #[must_use]
    pub fn check(input: &str) -> Self {
        match mailcanon::normalize(input) {
            Ok(normalized) => Self {
                input: input.to_string(),
                valid: true,
                normalized: Some(normalized),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                valid: false,
                normalized: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Plain text line: the normalized address, or `input: reason`.
    #[must_use]
    pub fn to_text(&self) -> String {
        match (&self.normalized, &self.error) {
            (Some(normalized), _) => normalized.clone(),
            (None, Some(error)) => format!("{}: {error}", self.input),
            (None, None) => self.input.clone(),
        }
    }

    /// Single-line JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
