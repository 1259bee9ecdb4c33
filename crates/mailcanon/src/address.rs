//! Validated, normalized email address value.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parser::IPV6_TAG;

/// A syntactically valid email address in normalized form.
///
/// The domain is lower-cased, the local part keeps its case (and quotes,
/// if quoted), display names, comments and `mailto:` are removed, and IP
/// literals are rendered as `[addr]` or `[IPv6:addr]`.
///
/// ```
/// use mailcanon::EmailAddress;
///
/// let addr: EmailAddress = "Jane Doe <Jane.Doe@Example.COM>".parse()?;
/// assert_eq!(addr.as_str(), "Jane.Doe@example.com");
/// assert_eq!(addr.local_part(), "Jane.Doe");
/// assert_eq!(addr.domain(), "example.com");
/// # Ok::<(), mailcanon::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalizes an address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] for blank input, or the first grammar
    /// violation found.
    pub fn parse(input: &str) -> Result<Self> {
        crate::normalize(input).map(Self)
    }

    /// Parses an address, discarding the failure reason.
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        crate::parse(input).map(Self)
    }

    /// Parses an address that may be absent.
    ///
    /// `None` and blank strings yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-blank input is not a valid address.
    pub fn parse_optional(input: Option<&str>) -> Result<Option<Self>> {
        match input {
            Some(s) if !s.trim().is_empty() => Self::parse(s).map(Some),
            _ => Ok(None),
        }
    }

    /// Returns true if `input` is a valid address.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        crate::parse(input).is_some()
    }

    /// Returns the normalized address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the normalized string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Part before the separating `@`, quotes included when quoted.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.0[..self.at()]
    }

    /// Part after the separating `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.0[self.at() + 1..]
    }

    /// Returns true if the local part is a quoted string.
    #[must_use]
    pub fn is_quoted_local_part(&self) -> bool {
        self.0.starts_with('"')
    }

    /// Returns true if the domain is a bracketed IP address.
    #[must_use]
    pub fn is_ip_literal(&self) -> bool {
        self.domain().starts_with('[')
    }

    /// Address of an IP literal domain.
    #[must_use]
    pub fn ip_addr(&self) -> Option<IpAddr> {
        let inner = self.domain().strip_prefix('[')?.strip_suffix(']')?;
        inner.strip_prefix(IPV6_TAG).unwrap_or(inner).parse().ok()
    }

    /// Byte offset of the `@` separating local part and domain.
    ///
    /// Quoted local parts may contain `@`, but host names and IP literals
    /// never do, so the last one is the separator.
    fn at(&self) -> usize {
        self.0.rfind('@').unwrap_or(self.0.len())
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(addr: EmailAddress) -> Self {
        addr.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EmailAddress {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EmailAddress {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailAddress {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
