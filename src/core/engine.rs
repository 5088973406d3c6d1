// File: src/core/engine.rs
use crate::config::EngineConfig;
use crate::core::gematria::{compute_gematria, GematriaMethod};
use crate::core::numerals::NumeralEncoder;
use crate::core::registry::registry;
use crate::core::types::Character;
use crate::export::export_characters;
use crate::error::Result;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

// The engine bundles the configured defaults with the catalog, gematria and
// numeral encoder so front ends only deal with one type.
pub struct HebrewEngine {
    config: EngineConfig,
    encoder: NumeralEncoder,
}

impl HebrewEngine {
    pub fn new(config: EngineConfig) -> Self {
        let encoder = NumeralEncoder::new(config.numerals.clone());
        Self { config, encoder }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gematria of `text`, using the configured method when none is given.
    /// Configured alternate spellings apply to the spelled-name methods.
    pub fn gematria(&self, text: &str, method: Option<GematriaMethod>) -> Result<u64> {
        let method = method.unwrap_or(self.config.default_method);
        let spellings = Some(&self.config.alternate_spellings).filter(|s| !s.is_empty());
        compute_gematria(text, method, spellings)
    }

    pub fn number(&self, number: i64) -> Result<String> {
        self.encoder.encode(number)
    }

    pub fn search(&self, name: &str) -> Option<&'static Character> {
        registry().search(name)
    }

    /// Splits `text` into graphemes and pairs each one with its catalog entry.
    pub fn glyphs<'a>(&self, text: &'a str) -> Vec<(&'a str, Option<&'static Character>)> {
        let registry = registry();
        text.graphemes(true)
            .map(|g| (g, registry.lookup(g)))
            .collect()
    }

    pub fn export(&self, path: &Path) -> Result<usize> {
        export_characters(path)
    }
}

impl Default for HebrewEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::numerals::{NumeralOptions, SubstitutionSet};
    use crate::error::HebrewError;

    #[test]
    fn gematria_uses_the_configured_method() {
        let engine = HebrewEngine::default();
        assert_eq!(engine.gematria("שלום", None).unwrap(), 376);

        let gadol = HebrewEngine::new(EngineConfig {
            default_method: GematriaMethod::MisparGadol,
            ..EngineConfig::default()
        });
        assert_eq!(gadol.gematria("שלום", None).unwrap(), 936);
        assert_eq!(gadol.gematria("שלום", Some(GematriaMethod::MisparHechrachi)).unwrap(), 376);
    }

    #[test]
    fn gematria_uses_configured_spellings() {
        let mut config = EngineConfig::default();
        config.alternate_spellings.insert("ב".into(), "בת".into());
        let engine = HebrewEngine::new(config);
        assert_eq!(engine.gematria("אב", Some(GematriaMethod::MisparShemiMilui)).unwrap(), 513);
        // Plain methods ignore spellings.
        assert_eq!(engine.gematria("אב", None).unwrap(), 3);
    }

    #[test]
    fn number_uses_configured_options() {
        assert_eq!(HebrewEngine::default().number(15).unwrap(), "ט״ו");

        let engine = HebrewEngine::new(EngineConfig {
            numerals: NumeralOptions {
                punctuate: true,
                use_geresh: false,
                substitutions: SubstitutionSet::All,
            },
            ..EngineConfig::default()
        });
        assert_eq!(engine.number(15).unwrap(), "ט\"ו");
        assert_eq!(engine.number(270).unwrap(), "ע\"ר");
        assert!(matches!(engine.number(0), Err(HebrewError::InvalidNumber(0))));
    }

    #[test]
    fn glyphs_pairs_graphemes_with_the_catalog() {
        let engine = HebrewEngine::default();
        let glyphs = engine.glyphs("ב\u{5BC}a");
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].1.map(|c| c.name), Some("Bet"));
        assert_eq!(glyphs[1], ("a", None));
    }

    #[test]
    fn search_finds_alternate_names() {
        let engine = HebrewEngine::default();
        assert_eq!(engine.search("Alef").map(|c| c.text), Some("א"));
        assert!(engine.search("nothing").is_none());
    }
}
