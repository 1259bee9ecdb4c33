//! Length limits shared by every parsing stage.
//!
//! All lengths are counted in `char`s.

/// Maximum length of the local part (before `@`).
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Maximum length of a single dot-separated domain label.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of a complete normalized address.
pub const MAX_ADDRESS_LENGTH: usize = 254;
