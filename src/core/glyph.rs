// File: src/core/glyph.rs
use crate::core::registry::registry;
use crate::core::types::Character;
use crate::error::{HebrewError, Result};
use std::fmt;
use std::ops::Deref;
use unicode_segmentation::UnicodeSegmentation;

/// Exactly one registered Hebrew/Yiddish glyph, with its catalog metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewGlyph {
    character: &'static Character,
}

impl HebrewGlyph {
    /// Fails with `NotSingleGlyph` unless `text` is one grapheme, and with
    /// `UnknownGlyph` if that grapheme is not in the catalog.
    pub fn new(text: &str) -> Result<Self> {
        let mut graphemes = text.graphemes(true);
        let glyph = match (graphemes.next(), graphemes.next()) {
            (Some(glyph), None) => glyph,
            _ => return Err(HebrewError::NotSingleGlyph(text.to_string())),
        };
        registry()
            .lookup(glyph)
            .map(|character| Self { character })
            .ok_or_else(|| HebrewError::UnknownGlyph(text.to_string()))
    }

    /// Looks a glyph up by any of its English names.
    pub fn search(name: &str) -> Option<Self> {
        registry().search(name).map(|character| Self { character })
    }

    pub fn character(&self) -> &'static Character {
        self.character
    }

    pub fn as_str(&self) -> &'static str {
        self.character.text
    }
}

impl Deref for HebrewGlyph {
    type Target = Character;

    fn deref(&self) -> &Character {
        self.character
    }
}

impl fmt::Display for HebrewGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.character.text)
    }
}

impl TryFrom<&str> for HebrewGlyph {
    type Error = HebrewError;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CharCategory;

    #[test]
    fn accepts_one_registered_glyph() {
        let aleph = HebrewGlyph::new("א").unwrap();
        assert_eq!(aleph.to_string(), "א");
        assert_eq!(aleph.name, "Aleph");
        assert_eq!(aleph.category, CharCategory::Letter);

        let bet = HebrewGlyph::new("ב\u{5BC}").unwrap();
        assert_eq!(bet.name, "Bet");
    }

    #[test]
    fn rejects_more_than_one_glyph() {
        assert!(matches!(HebrewGlyph::new("אא"), Err(HebrewError::NotSingleGlyph(_))));
        assert!(matches!(HebrewGlyph::new(""), Err(HebrewError::NotSingleGlyph(_))));
    }

    #[test]
    fn rejects_unregistered_glyphs() {
        assert!(matches!(HebrewGlyph::new("a"), Err(HebrewError::UnknownGlyph(_))));
        // One grapheme, but letter + niqqud combinations are not catalogued.
        assert!(matches!(HebrewGlyph::new("שָׁ"), Err(HebrewError::UnknownGlyph(_))));
    }

    #[test]
    fn hebrew_names() {
        let fe = HebrewGlyph::new("פ").unwrap();
        assert_eq!(fe.hebrew_name, Some("פֵא"));
        let names: Vec<_> = fe.hebrew_names().collect();
        assert_eq!(names, vec!["פֵא", "פי", "פה"]);

        let aleph = HebrewGlyph::new("א").unwrap();
        assert!(aleph.hebrew_name_alts.is_empty());
        assert_eq!(aleph.hebrew_names().collect::<Vec<_>>(), vec!["אָלֶף"]);
    }

    #[test]
    fn search_by_name() {
        assert_eq!(HebrewGlyph::search("Final Mem").map(|g| g.as_str()), Some("ם"));
        assert!(HebrewGlyph::search("Omega").is_none());
    }
}
