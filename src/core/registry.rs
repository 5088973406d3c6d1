// File: src/core/registry.rs
use crate::core::chars::{ALPHABET, CATALOG, FINAL_PAIRS, SPECIAL_NORMALIZATION};
use crate::core::types::{CharCategory, Character};
use crate::error::{HebrewError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

static REGISTRY: LazyLock<CharacterRegistry> = LazyLock::new(|| {
    CharacterRegistry::build(CATALOG).expect("character catalog violates a registry invariant")
});

/// The process-wide registry built from the static catalog.
pub fn registry() -> &'static CharacterRegistry {
    &REGISTRY
}

/// Index over a character catalog: literal lookup, name search and the
/// per-category partitions.
pub struct CharacterRegistry {
    chars: &'static [Character],
    by_text: HashMap<&'static str, &'static Character>,
    letters: Vec<&'static Character>,
    yiddish: Vec<&'static Character>,
    niqqud: Vec<&'static Character>,
    taamim: Vec<&'static Character>,
    other: Vec<&'static Character>,
    final_letters: Vec<&'static Character>,
    normalization: HashMap<&'static str, (&'static str, bool)>,
}

impl CharacterRegistry {
    /// Indexes `chars`, rejecting duplicate literal keys and ligatures whose
    /// first codepoint is not itself a registered letter.
    pub fn build(chars: &'static [Character]) -> Result<Self> {
        let mut by_text = HashMap::with_capacity(chars.len());
        for c in chars {
            if by_text.insert(c.text, c).is_some() {
                return Err(HebrewError::DuplicateCharacter(c.text.to_string()));
            }
        }

        for c in chars.iter().filter(|c| c.is_letter() && c.codepoints() > 1) {
            match by_text.get(first_codepoint(c.text)) {
                Some(base) if base.is_letter() => {}
                _ => return Err(HebrewError::MissingBaseLetter(c.text.to_string())),
            }
        }

        let normalization: HashMap<_, _> = SPECIAL_NORMALIZATION
            .iter()
            .map(|&(from, to, yiddish)| (from, (to, yiddish)))
            .collect();

        let in_category = |category: CharCategory| -> Vec<&'static Character> {
            chars.iter().filter(|c| c.category == category).collect()
        };

        // The 27 plain alphabet letters. Ligatures, presentation forms and
        // letter-like symbols stay searchable but are not enumerated here.
        let letters: Vec<&'static Character> = chars
            .iter()
            .filter(|c| {
                c.is_letter()
                    && c.codepoints() == 1
                    && c.text.chars().next().is_some_and(is_alphabet_letter)
            })
            .collect();
        let final_letters = letters
            .iter()
            .copied()
            .filter(|c| c.final_letter && c.codepoints() == 1)
            .collect();

        let registry = Self {
            chars,
            by_text,
            letters,
            yiddish: in_category(CharCategory::YiddishLetter),
            niqqud: in_category(CharCategory::Niqqud),
            taamim: in_category(CharCategory::Taamim),
            other: in_category(CharCategory::Other),
            final_letters,
            normalization,
        };
        debug!(
            characters = registry.chars.len(),
            letters = registry.letters.len(),
            niqqud = registry.niqqud.len(),
            taamim = registry.taamim.len(),
            "character registry built"
        );
        Ok(registry)
    }

    /// Every registered character in declaration order.
    pub fn all(&self) -> &'static [Character] {
        self.chars
    }

    /// Exact match on the literal codepoint sequence.
    pub fn lookup(&self, text: &str) -> Option<&'static Character> {
        self.by_text.get(text).copied()
    }

    pub fn lookup_char(&self, c: char) -> Option<&'static Character> {
        let mut buf = [0u8; 4];
        self.lookup(c.encode_utf8(&mut buf))
    }

    /// Case-insensitive search over every English name. Earlier-declared
    /// characters win when several share a name.
    pub fn search(&self, name: &str) -> Option<&'static Character> {
        self.chars.iter().find(|c| c.has_name(name))
    }

    /// Like [`search`](Self::search), restricted to one category.
    pub fn search_in(&self, name: &str, category: CharCategory) -> Option<&'static Character> {
        self.chars
            .iter()
            .find(|c| c.category == category && c.has_name(name))
    }

    /// The plain letter a ligature is built on, e.g. `ב` for `בּ`.
    /// Single-codepoint characters are their own base.
    pub fn base_letter(&self, c: &'static Character) -> Result<&'static Character> {
        if !c.is_letter() || c.codepoints() == 1 {
            return Ok(c);
        }
        self.lookup(first_codepoint(c.text))
            .ok_or_else(|| HebrewError::MissingBaseLetter(c.text.to_string()))
    }

    pub fn letters(&self) -> &[&'static Character] {
        &self.letters
    }

    pub fn yiddish(&self) -> &[&'static Character] {
        &self.yiddish
    }

    pub fn niqqud(&self) -> &[&'static Character] {
        &self.niqqud
    }

    pub fn taamim(&self) -> &[&'static Character] {
        &self.taamim
    }

    pub fn other(&self) -> &[&'static Character] {
        &self.other
    }

    /// The five plain sofit letters; their dagesh ligatures are left out.
    pub fn final_letters(&self) -> &[&'static Character] {
        &self.final_letters
    }

    /// Spelled-out replacement for a special character. Yiddish ligatures are
    /// only returned when `include_yiddish` is set.
    pub fn normalization_of(&self, text: &str, include_yiddish: bool) -> Option<&'static str> {
        match self.normalization.get(text) {
            Some(&(to, yiddish)) if include_yiddish || !yiddish => Some(to),
            _ => None,
        }
    }
}

/// True for the 27 letters that carry a gematria value.
pub fn is_alphabet_letter(c: char) -> bool {
    ALPHABET.contains(&c)
}

pub fn is_final_letter(c: char) -> bool {
    FINAL_PAIRS.iter().any(|&(_, sofit)| sofit == c)
}

/// Maps a final letter to its regular form and vice versa.
pub fn final_counterpart(c: char) -> Option<char> {
    FINAL_PAIRS.iter().find_map(|&(regular, sofit)| {
        if c == regular {
            Some(sofit)
        } else if c == sofit {
            Some(regular)
        } else {
            None
        }
    })
}

/// The regular form of `c`; non-final letters are returned unchanged.
pub fn to_regular_form(c: char) -> char {
    if is_final_letter(c) {
        final_counterpart(c).unwrap_or(c)
    } else {
        c
    }
}

fn first_codepoint(text: &str) -> &str {
    let end = text.chars().next().map_or(0, char::len_utf8);
    &text[..end]
}
