//! `mailto:` prefix.

use super::ScanBuffer;

const MAILTO: &str = "mailto:";

/// Removes a leading `mailto:` in any letter case. Absence is not an error.
pub fn strip(input: &mut ScanBuffer) {
    if input.starts_with_ignore_ascii_case(MAILTO) {
        input.trim_start(MAILTO.len());
    }
}
