// File: src/core/text.rs
use crate::core::chars::{MAQAF, PASEQ, SOF_PASSUK};
use crate::core::gematria::{compute_gematria, AlternateSpellings, GematriaMethod};
use crate::core::grapheme::GraphemeString;
use crate::core::numerals::{NumeralEncoder, NumeralOptions, SubstitutionSet};
use crate::core::registry::registry;
use crate::core::types::CharCategory;
use crate::error::Result;
use std::fmt;
use std::ops::Deref;

/// A string of Hebrew (or mixed) text with Hebrew-aware operations.
///
/// Every cleaning method returns a new value; the original is never changed.
/// Grapheme operations are reachable through `Deref<Target = GraphemeString>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hebrew {
    text: GraphemeString,
}

impl Hebrew {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: GraphemeString::new(text),
        }
    }

    /// Replaces every maqaf with a space, so joined words split apart.
    pub fn no_maqaf(&self) -> Hebrew {
        Hebrew::new(self.as_str().replace(MAQAF, " "))
    }

    pub fn no_sof_passuk(&self) -> Hebrew {
        Hebrew::new(self.as_str().replace(SOF_PASSUK, ""))
    }

    /// Drops vowel points, including dagesh and the shin/sin dots.
    pub fn no_niqqud(&self) -> Hebrew {
        Hebrew::new(without_category(self.as_str(), CharCategory::Niqqud))
    }

    /// Drops cantillation marks. Maqaf and sof passuk stay unless requested.
    pub fn no_taamim(&self, remove_maqaf: bool, remove_sof_passuk: bool) -> Hebrew {
        let mut text = self.as_str().to_string();
        if remove_maqaf {
            text = text.replace(MAQAF, " ");
        }
        if remove_sof_passuk {
            text = text.replace(SOF_PASSUK, "");
        }
        Hebrew::new(without_category(&text, CharCategory::Taamim))
    }

    /// Letters, spaces and non-Hebrew characters only. Maqaf and paseq are
    /// kept (maqaf becomes a space with `remove_maqaf`).
    pub fn text_only(&self, remove_maqaf: bool) -> Hebrew {
        Hebrew::new(strip_to_text(self.as_str(), remove_maqaf))
    }

    /// Whitespace-separated words; with `split_maqaf` a maqaf also separates.
    pub fn words(&self, split_maqaf: bool) -> Vec<Hebrew> {
        let text = if split_maqaf {
            self.no_maqaf()
        } else {
            self.clone()
        };
        text.as_str().split_whitespace().map(Hebrew::new).collect()
    }

    /// Replaces presentation forms and letter-like symbols with the plain
    /// letters and marks they stand for (ﭏ → אל, ℵ → א). Yiddish ligatures
    /// (װ ױ ײ) are only spelled out when `normalize_yiddish` is set.
    pub fn normalize(&self, normalize_yiddish: bool) -> Hebrew {
        let registry = registry();
        let mut normalized = String::with_capacity(self.as_str().len());
        let mut rest = self.as_str();
        while let Some(first) = rest.chars().next() {
            let one = first.len_utf8();
            let two = rest.char_indices().nth(2).map_or(rest.len(), |(i, _)| i);
            // The only two-codepoint keys are ligature + patah.
            if two > one {
                if let Some(spelled) = registry.normalization_of(&rest[..two], normalize_yiddish) {
                    normalized.push_str(spelled);
                    rest = &rest[two..];
                    continue;
                }
            }
            match registry.normalization_of(&rest[..one], normalize_yiddish) {
                Some(spelled) => normalized.push_str(spelled),
                None => normalized.push(first),
            }
            rest = &rest[one..];
        }
        Hebrew::new(normalized)
    }

    pub fn gematria(
        &self,
        method: GematriaMethod,
        alternate_spellings: Option<&AlternateSpellings>,
    ) -> Result<u64> {
        compute_gematria(self.as_str(), method, alternate_spellings)
    }

    /// The Hebrew numeral for `number`, e.g. 15 → ט״ו.
    pub fn from_number(
        number: i64,
        punctuate: bool,
        use_geresh: bool,
        substitutions: SubstitutionSet,
    ) -> Result<Hebrew> {
        Self::from_number_with(
            number,
            NumeralOptions {
                punctuate,
                use_geresh,
                substitutions,
            },
        )
    }

    pub fn from_number_with(number: i64, options: NumeralOptions) -> Result<Hebrew> {
        NumeralEncoder::new(options).encode(number).map(Hebrew::new)
    }
}

impl Deref for Hebrew {
    type Target = GraphemeString;

    fn deref(&self) -> &GraphemeString {
        &self.text
    }
}

impl fmt::Display for Hebrew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}

impl From<&str> for Hebrew {
    fn from(text: &str) -> Self {
        Hebrew::new(text)
    }
}

impl From<String> for Hebrew {
    fn from(text: String) -> Self {
        Hebrew::new(text)
    }
}

fn category_of(c: char) -> Option<CharCategory> {
    registry().lookup_char(c).map(|ch| ch.category)
}

fn without_category(text: &str, category: CharCategory) -> String {
    text.chars()
        .filter(|&c| category_of(c) != Some(category))
        .collect()
}

/// Removes niqqud, ta'amim and punctuation other than maqaf and paseq.
/// A paseq standing between two spaces goes too, leaving one space.
pub(crate) fn strip_to_text(text: &str, remove_maqaf: bool) -> String {
    let mut text = if remove_maqaf {
        text.replace(MAQAF, " ")
    } else {
        text.to_string()
    };
    text = text.replace(&format!(" {PASEQ} "), " ");
    text.chars()
        .filter(|&c| {
            c == MAQAF
                || c == PASEQ
                || !matches!(
                    category_of(c),
                    Some(CharCategory::Niqqud | CharCategory::Taamim | CharCategory::Other)
                )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS_1_1: &str = "בְּרֵאשִׁ֖ית בָּרָ֣א אֱלֹהִ֑ים אֵ֥ת הַשָּׁמַ֖יִם וְאֵ֥ת הָאָרֶץ׃";
    const GENESIS_1_1_PLAIN: &str = "בראשית ברא אלהים את השמים ואת הארץ";

    fn has_category(text: &Hebrew, category: CharCategory) -> bool {
        text.as_str().chars().any(|c| category_of(c) == Some(category))
    }

    #[test]
    fn text_only_strips_every_mark() {
        assert_eq!(Hebrew::new(GENESIS_1_1).text_only(false).as_str(), GENESIS_1_1_PLAIN);
    }

    #[test]
    fn text_only_keeps_maqaf_unless_asked() {
        let joined = Hebrew::new("עַל־פְּנֵ֥י");
        assert_eq!(joined.text_only(false).as_str(), "על־פני");
        assert_eq!(joined.text_only(true).as_str(), "על פני");
    }

    #[test]
    fn text_only_collapses_a_free_standing_paseq() {
        assert_eq!(Hebrew::new("אֱלֹהִים ׀ אֵת").text_only(false).as_str(), "אלהים את");
        assert_eq!(Hebrew::new("אב׀גד").text_only(false).as_str(), "אב׀גד");
    }

    #[test]
    fn no_niqqud_keeps_taamim() {
        let cleaned = Hebrew::new(GENESIS_1_1).no_niqqud();
        assert!(!has_category(&cleaned, CharCategory::Niqqud));
        assert!(has_category(&cleaned, CharCategory::Taamim));
        assert!(cleaned.as_str().ends_with(SOF_PASSUK));
        assert_eq!(cleaned.text_only(false).as_str(), GENESIS_1_1_PLAIN);
    }

    #[test]
    fn no_taamim_keeps_niqqud_and_punctuation() {
        let pasuk = Hebrew::new(GENESIS_1_1);
        let cleaned = pasuk.no_taamim(false, false);
        assert!(!has_category(&cleaned, CharCategory::Taamim));
        assert!(has_category(&cleaned, CharCategory::Niqqud));
        assert!(cleaned.as_str().ends_with(SOF_PASSUK));
        assert!(!pasuk.no_taamim(false, true).as_str().contains(SOF_PASSUK));

        let joined = Hebrew::new("עַל־פְּנֵ֥י");
        assert_eq!(joined.no_taamim(false, false).as_str(), "עַל־פְּנֵי");
        assert_eq!(joined.no_taamim(true, false).as_str(), "עַל פְּנֵי");
    }

    #[test]
    fn maqaf_and_sof_passuk_helpers() {
        assert_eq!(Hebrew::new("על־פני").no_maqaf().as_str(), "על פני");
        assert_eq!(Hebrew::new("הארץ׃").no_sof_passuk().as_str(), "הארץ");
    }

    #[test]
    fn words_split_on_whitespace_and_optionally_maqaf() {
        let text = Hebrew::new("עַל־פְּנֵי  הַמָּיִם");
        assert_eq!(text.words(false).len(), 2);
        let split: Vec<String> = text.words(true).iter().map(|w| w.to_string()).collect();
        assert_eq!(split, vec!["עַל", "פְּנֵי", "הַמָּיִם"]);
    }

    #[test]
    fn normalize_spells_out_special_characters() {
        assert_eq!(Hebrew::new("\u{FB4F}").normalize(false).as_str(), "אל");
        assert_eq!(Hebrew::new("\u{2135}\u{2136}").normalize(false).as_str(), "אב");
        assert_eq!(Hebrew::new("\u{FB2A}").normalize(false).as_str(), "ש\u{5C1}");
        assert_eq!(Hebrew::new("abc שלום").normalize(true).as_str(), "abc שלום");
    }

    #[test]
    fn normalize_yiddish_only_on_request() {
        let yiddish = Hebrew::new("\u{5F0}\u{5F2}\u{5B7}\u{5F1}");
        assert_eq!(yiddish.normalize(false).as_str(), yiddish.as_str());
        assert_eq!(yiddish.normalize(true).as_str(), "ווי\u{5B7}יוי");
        assert_eq!(Hebrew::new("\u{5F2}").normalize(true).as_str(), "יי");
    }

    #[test]
    fn normalized_text_gains_gematria_value() {
        let ligature = Hebrew::new("\u{FB4F}");
        let method = GematriaMethod::MisparHechrachi;
        assert_eq!(ligature.gematria(method, None).unwrap(), 0);
        assert_eq!(ligature.normalize(false).gematria(method, None).unwrap(), 31);
    }

    #[test]
    fn gematria_of_genesis() {
        let pasuk = Hebrew::new(GENESIS_1_1);
        assert_eq!(pasuk.gematria(GematriaMethod::MisparHechrachi, None).unwrap(), 2701);
    }

    #[test]
    fn from_number_passes_options_through() {
        let default = Hebrew::from_number(15, true, true, SubstitutionSet::Default).unwrap();
        assert_eq!(default.as_str(), "ט״ו");
        let plain = Hebrew::from_number(15, false, true, SubstitutionSet::None).unwrap();
        assert_eq!(plain.as_str(), "יה");
        assert!(Hebrew::from_number(0, true, true, SubstitutionSet::Default).is_err());
    }

    #[test]
    fn grapheme_operations_through_deref() {
        let text = Hebrew::new("שָׁלוֹם");
        assert_eq!(text.length(), 4);
        assert!(text.starts_with("שָׁ"));
        assert!(!text.starts_with("ש"));
    }
}
