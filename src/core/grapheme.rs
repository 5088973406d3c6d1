// File: src/core/grapheme.rs
//! Grapheme-aware string operations. A grapheme is what a reader sees as one
//! character, e.g. a letter with its niqqud and ta'amim.

use std::fmt;
use std::ops::Add;
use unicode_segmentation::{Graphemes, UnicodeSegmentation};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphemeString {
    string: String,
}

impl GraphemeString {
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn into_string(self) -> String {
        self.string
    }

    pub fn graphemes(&self) -> Graphemes<'_> {
        self.string.graphemes(true)
    }

    /// Number of graphemes, which is at most the number of codepoints.
    pub fn length(&self) -> usize {
        self.graphemes().count()
    }

    /// Like [`length`](Self::length) but stops counting at `until`.
    pub fn get_length(&self, until: usize) -> usize {
        self.graphemes().take(until).count()
    }

    /// Codepoint count of each grapheme.
    pub fn grapheme_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.graphemes().map(|g| g.chars().count())
    }

    /// Substring between grapheme positions `start` and `end`.
    pub fn slice(&self, start: Option<usize>, end: Option<usize>) -> &str {
        let from = start.map_or(0, |i| self.byte_offset(i));
        let to = end.map_or(self.string.len(), |i| self.byte_offset(i));
        if to <= from {
            return "";
        }
        &self.string[from..to]
    }

    /// True when `substring` occurs as a whole sequence of graphemes.
    /// `"🇪🇸🇪🇪"` contains the codepoints of `"🇸🇪"` but not its graphemes.
    pub fn contains(&self, substring: &str) -> bool {
        if !self.string.contains(substring) {
            return false;
        }
        let needle: Vec<&str> = substring.graphemes(true).collect();
        if needle.is_empty() {
            return true;
        }
        let haystack: Vec<&str> = self.graphemes().collect();
        haystack.windows(needle.len()).any(|window| window == needle.as_slice())
    }

    /// The highest byte index up to `max_len` that does not split a grapheme.
    pub fn safe_split_index(&self, max_len: usize) -> usize {
        if max_len >= self.string.len() {
            return self.string.len();
        }
        self.string
            .grapheme_indices(true)
            .map(|(i, _)| i)
            .take_while(|&i| i <= max_len)
            .last()
            .unwrap_or(0)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.string.starts_with(prefix) && self.is_boundary(prefix.len())
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.string.ends_with(suffix) && self.is_boundary(self.string.len() - suffix.len())
    }

    fn is_boundary(&self, byte_index: usize) -> bool {
        byte_index == self.string.len()
            || self
                .string
                .grapheme_indices(true)
                .any(|(i, _)| i == byte_index)
    }

    fn byte_offset(&self, grapheme_index: usize) -> usize {
        self.string
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.string.len(), |(i, _)| i)
    }
}

impl fmt::Display for GraphemeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl AsRef<str> for GraphemeString {
    fn as_ref(&self) -> &str {
        &self.string
    }
}

impl From<&str> for GraphemeString {
    fn from(string: &str) -> Self {
        Self::new(string)
    }
}

impl From<String> for GraphemeString {
    fn from(string: String) -> Self {
        Self::new(string)
    }
}

impl Add for GraphemeString {
    type Output = GraphemeString;

    fn add(mut self, other: GraphemeString) -> GraphemeString {
        self.string.push_str(&other.string);
        self
    }
}
