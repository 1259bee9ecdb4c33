//! Character buffers consumed and built by the parsing stages.

use std::fmt;

/// Growable character sequence with O(1) trimming from either end.
///
/// Trimming from the front moves a start cursor instead of shifting the
/// backing storage, so consuming input one character at a time never
/// reallocates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanBuffer {
    chars: Vec<char>,
    start: usize,
}

impl ScanBuffer {
    /// Creates an empty buffer able to hold `capacity` characters without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            start: 0,
        }
    }

    /// Number of characters in view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len() - self.start
    }

    /// Returns true if no characters remain in view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `index`, relative to the current start.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(self.start + index).copied()
    }

    /// First character in view.
    #[must_use]
    pub fn first(&self) -> Option<char> {
        self.get(0)
    }

    /// Last character in view.
    #[must_use]
    pub fn last(&self) -> Option<char> {
        if self.is_empty() {
            None
        } else {
            self.chars.last().copied()
        }
    }

    /// Removes and returns the first character.
    pub fn pop_front(&mut self) -> Option<char> {
        let c = self.first()?;
        self.start += 1;
        Some(c)
    }

    /// Removes and returns the last character.
    pub fn pop_back(&mut self) -> Option<char> {
        if self.is_empty() {
            return None;
        }
        self.chars.pop()
    }

    /// Drops `n` characters from the front.
    pub fn trim_start(&mut self, n: usize) {
        self.start = (self.start + n).min(self.chars.len());
    }

    /// Keeps only the first `len` characters.
    pub fn truncate(&mut self, len: usize) {
        self.chars.truncate(self.start + len);
    }

    /// Drops trailing whitespace.
    pub fn trim_end_whitespace(&mut self) {
        while self.last().is_some_and(char::is_whitespace) {
            self.chars.pop();
        }
    }

    /// Empties the buffer, keeping its allocation.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.start = 0;
    }

    /// Appends one character.
    pub fn push(&mut self, c: char) {
        self.chars.push(c);
    }

    /// Appends the lower-case form of `c`, which may be several characters.
    pub fn push_lowercase(&mut self, c: char) {
        self.chars.extend(c.to_lowercase());
    }

    /// Appends every character of `s`.
    pub fn push_str(&mut self, s: &str) {
        self.chars.extend(s.chars());
    }

    /// Appends the contents of another buffer.
    pub fn append(&mut self, other: &Self) {
        self.chars.extend_from_slice(other.as_slice());
    }

    /// Index of the last character matching `pred`.
    pub fn rposition(&self, pred: impl Fn(char) -> bool) -> Option<usize> {
        self.as_slice().iter().rposition(|&c| pred(c))
    }

    /// Returns true if the buffer begins with `prefix`, ignoring ASCII case.
    #[must_use]
    pub fn starts_with_ignore_ascii_case(&self, prefix: &str) -> bool {
        let mut view = self.as_slice().iter();
        prefix
            .chars()
            .all(|p| view.next().is_some_and(|c| c.eq_ignore_ascii_case(&p)))
    }

    /// Iterates over the characters in view.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.as_slice().iter().copied()
    }

    fn as_slice(&self) -> &[char] {
        &self.chars[self.start..]
    }
}

impl From<&str> for ScanBuffer {
    fn from(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            start: 0,
        }
    }
}

impl fmt::Display for ScanBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| fmt::Write::write_char(f, c))
    }
}
