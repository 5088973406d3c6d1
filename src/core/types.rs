// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The closed set of character kinds found in Hebrew and Yiddish text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharCategory {
    /// Letters of the alphabet, including letter+dagesh ligatures and
    /// presentation forms.
    Letter,
    YiddishLetter,
    /// Vowel points.
    Niqqud,
    /// Cantillation marks ("trup").
    Taamim,
    /// Punctuation and everything else that is neither a letter nor a mark.
    Other,
}

/// Metadata for a single user-perceived Hebrew/Yiddish glyph.
/// A glyph may span up to three codepoints (e.g. shin + dagesh + shin dot).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Character {
    /// The literal codepoint sequence; unique within the registry.
    pub text: &'static str,
    pub category: CharCategory,
    /// Primary English name.
    pub name: &'static str,
    pub name_alts: &'static [&'static str],
    /// Primary Hebrew name. This spelling drives the Mispar Shemi gematria.
    pub hebrew_name: Option<&'static str>,
    pub hebrew_name_alts: &'static [&'static str],
    /// True for the five sofit shapes (and their ligatures; the registry's
    /// `final_letters` keeps only the plain ones).
    pub final_letter: bool,
}

impl Character {
    pub const fn new(text: &'static str, category: CharCategory, name: &'static str) -> Self {
        Self {
            text,
            category,
            name,
            name_alts: &[],
            hebrew_name: None,
            hebrew_name_alts: &[],
            final_letter: false,
        }
    }

    pub const fn hebrew_name(mut self, hebrew_name: &'static str) -> Self {
        self.hebrew_name = Some(hebrew_name);
        self
    }

    pub const fn name_alts(mut self, name_alts: &'static [&'static str]) -> Self {
        self.name_alts = name_alts;
        self
    }

    pub const fn hebrew_name_alts(mut self, hebrew_name_alts: &'static [&'static str]) -> Self {
        self.hebrew_name_alts = hebrew_name_alts;
        self
    }

    pub const fn final_form(mut self) -> Self {
        self.final_letter = true;
        self
    }

    /// All English names: the primary name followed by the alternates.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.name_alts.iter().copied())
    }

    /// All Hebrew names: the primary Hebrew name (when present) followed by the alternates.
    pub fn hebrew_names(&self) -> impl Iterator<Item = &'static str> {
        self.hebrew_name
            .into_iter()
            .chain(self.hebrew_name_alts.iter().copied())
    }

    /// Case-insensitive match against every English name.
    pub fn has_name(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.names().any(|n| n.to_lowercase() == needle)
    }

    pub fn is_letter(&self) -> bool {
        self.category == CharCategory::Letter
    }

    /// Number of codepoints making up this glyph.
    pub fn codepoints(&self) -> usize {
        self.text.chars().count()
    }
}

// Identity is the literal text, like the registry key.
impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Character {}

impl Hash for Character {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSADI_SOFIT: Character = Character::new("ץ", CharCategory::Letter, "Tsadi Sofit")
        .hebrew_name("צַדִי סוֹפִית")
        .hebrew_name_alts(&["צדיק סופית"])
        .final_form();

    #[test]
    fn hebrew_names_include_primary_and_alternates() {
        let names: Vec<_> = TSADI_SOFIT.hebrew_names().collect();
        assert_eq!(names, vec!["צַדִי סוֹפִית", "צדיק סופית"]);
    }

    #[test]
    fn names_without_alternates() {
        let aleph = Character::new("א", CharCategory::Letter, "Aleph").name_alts(&["Alef"]);
        let names: Vec<_> = aleph.names().collect();
        assert_eq!(names, vec!["Aleph", "Alef"]);
        assert!(aleph.has_name("aLEPH"));
        assert!(!aleph.has_name("Bet"));
    }

    #[test]
    fn display_is_the_literal_text() {
        assert_eq!(TSADI_SOFIT.to_string(), "ץ");
        assert!(TSADI_SOFIT.final_letter);
        assert_eq!(TSADI_SOFIT.codepoints(), 1);
    }

    #[test]
    fn equality_is_by_text() {
        let a = Character::new("א", CharCategory::Letter, "Aleph");
        let b = Character::new("א", CharCategory::Letter, "Alef");
        assert_eq!(a, b);
    }
}
