// File: src/core/gematria/tables.rs
//! Per-letter value tables for the simple gematria methods.
//!
//! Every table is keyed by the 27 letters of [`ALPHABET`]. Finals share their
//! regular form's value unless the method gives them their own (Gadol, Siduri,
//! Ayak Bachar).

use crate::core::chars::ALPHABET;
use crate::core::gematria::method::GematriaMethod;
use crate::error::{HebrewError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

static TABLES: LazyLock<GematriaTables> = LazyLock::new(|| {
    GematriaTables::build().expect("gematria value tables must cover the whole alphabet")
});

/// The process-wide value tables.
pub fn tables() -> &'static GematriaTables {
    &TABLES
}

pub struct GematriaTables {
    tables: HashMap<GematriaMethod, HashMap<char, u64>>,
}

impl GematriaTables {
    /// Builds every simple method's table, failing if one misses a letter.
    pub fn build() -> Result<Self> {
        Self::from_data(&[
            (GematriaMethod::MisparHechrachi, HECHRACHI),
            (GematriaMethod::MisparGadol, GADOL),
            (GematriaMethod::MisparSiduri, SIDURI),
            (GematriaMethod::MisparKatan, KATAN),
            (GematriaMethod::MisparPerati, PERATI),
            (GematriaMethod::Atbash, ATBASH),
            (GematriaMethod::Albam, ALBAM),
            (GematriaMethod::MisparMeshulash, MESHULASH),
            (GematriaMethod::MisparKidmi, KIDMI),
            (GematriaMethod::MisparMispari, MISPARI),
            (GematriaMethod::AyakBachar, AYAK_BACHAR),
            (GematriaMethod::Ofanim, OFANIM),
            (GematriaMethod::AchasBeta, ACHAS_BETA),
            (GematriaMethod::Avgad, AVGAD),
            (GematriaMethod::ReverseAvgad, REVERSE_AVGAD),
        ])
    }

    fn from_data(data: &[(GematriaMethod, &[(char, u64)])]) -> Result<Self> {
        let mut tables = HashMap::with_capacity(data.len());
        for &(method, entries) in data {
            let table: HashMap<char, u64> = entries.iter().copied().collect();
            if let Some(missing) = ALPHABET.iter().find(|c| !table.contains_key(c)) {
                return Err(HebrewError::IncompleteTable {
                    method: method.to_string(),
                    letter: missing.to_string(),
                });
            }
            tables.insert(method, table);
        }
        debug!(tables = tables.len(), "gematria value tables built");
        Ok(Self { tables })
    }

    /// Value of `letter` under `method`. `None` for composite methods and for
    /// anything outside the 27-letter alphabet.
    pub fn value_of(&self, method: GematriaMethod, letter: char) -> Option<u64> {
        self.tables.get(&method)?.get(&letter).copied()
    }
}

const HECHRACHI: &[(char, u64)] = &[
    ('א', 1), ('ב', 2), ('ג', 3), ('ד', 4), ('ה', 5), ('ו', 6), ('ז', 7),
    ('ח', 8), ('ט', 9), ('י', 10), ('כ', 20), ('ך', 20), ('ל', 30), ('מ', 40),
    ('ם', 40), ('נ', 50), ('ן', 50), ('ס', 60), ('ע', 70), ('פ', 80), ('ף', 80),
    ('צ', 90), ('ץ', 90), ('ק', 100), ('ר', 200), ('ש', 300), ('ת', 400),
];

const GADOL: &[(char, u64)] = &[
    ('א', 1), ('ב', 2), ('ג', 3), ('ד', 4), ('ה', 5), ('ו', 6), ('ז', 7),
    ('ח', 8), ('ט', 9), ('י', 10), ('כ', 20), ('ך', 500), ('ל', 30), ('מ', 40),
    ('ם', 600), ('נ', 50), ('ן', 700), ('ס', 60), ('ע', 70), ('פ', 80), ('ף', 800),
    ('צ', 90), ('ץ', 900), ('ק', 100), ('ר', 200), ('ש', 300), ('ת', 400),
];

const SIDURI: &[(char, u64)] = &[
    ('א', 1), ('ב', 2), ('ג', 3), ('ד', 4), ('ה', 5), ('ו', 6), ('ז', 7),
    ('ח', 8), ('ט', 9), ('י', 10), ('כ', 11), ('ך', 23), ('ל', 12), ('מ', 13),
    ('ם', 24), ('נ', 14), ('ן', 25), ('ס', 15), ('ע', 16), ('פ', 17), ('ף', 26),
    ('צ', 18), ('ץ', 27), ('ק', 19), ('ר', 20), ('ש', 21), ('ת', 22),
];

const KATAN: &[(char, u64)] = &[
    ('א', 1), ('ב', 2), ('ג', 3), ('ד', 4), ('ה', 5), ('ו', 6), ('ז', 7),
    ('ח', 8), ('ט', 9), ('י', 1), ('כ', 2), ('ך', 2), ('ל', 3), ('מ', 4),
    ('ם', 4), ('נ', 5), ('ן', 5), ('ס', 6), ('ע', 7), ('פ', 8), ('ף', 8),
    ('צ', 9), ('ץ', 9), ('ק', 1), ('ר', 2), ('ש', 3), ('ת', 4),
];

const PERATI: &[(char, u64)] = &[
    ('א', 1), ('ב', 4), ('ג', 9), ('ד', 16), ('ה', 25), ('ו', 36), ('ז', 49),
    ('ח', 64), ('ט', 81), ('י', 100), ('כ', 400), ('ך', 400), ('ל', 900), ('מ', 1600),
    ('ם', 1600), ('נ', 2500), ('ן', 2500), ('ס', 3600), ('ע', 4900), ('פ', 6400), ('ף', 6400),
    ('צ', 8100), ('ץ', 8100), ('ק', 10000), ('ר', 40000), ('ש', 90000), ('ת', 160000),
];

const ATBASH: &[(char, u64)] = &[
    ('א', 400), ('ב', 300), ('ג', 200), ('ד', 100), ('ה', 90), ('ו', 80), ('ז', 70),
    ('ח', 60), ('ט', 50), ('י', 40), ('כ', 30), ('ך', 30), ('ל', 20), ('מ', 10),
    ('ם', 10), ('נ', 9), ('ן', 9), ('ס', 8), ('ע', 7), ('פ', 6), ('ף', 6),
    ('צ', 5), ('ץ', 5), ('ק', 4), ('ר', 3), ('ש', 2), ('ת', 1),
];

const ALBAM: &[(char, u64)] = &[
    ('א', 30), ('ב', 40), ('ג', 50), ('ד', 60), ('ה', 70), ('ו', 80), ('ז', 90),
    ('ח', 100), ('ט', 200), ('י', 300), ('כ', 400), ('ך', 400), ('ל', 1), ('מ', 2),
    ('ם', 2), ('נ', 3), ('ן', 3), ('ס', 4), ('ע', 5), ('פ', 6), ('ף', 6),
    ('צ', 7), ('ץ', 7), ('ק', 8), ('ר', 9), ('ש', 10), ('ת', 20),
];

const MESHULASH: &[(char, u64)] = &[
    ('א', 1), ('ב', 8), ('ג', 27), ('ד', 64), ('ה', 125), ('ו', 216), ('ז', 343),
    ('ח', 512), ('ט', 729), ('י', 1000), ('כ', 8000), ('ך', 8000), ('ל', 27000), ('מ', 64000),
    ('ם', 64000), ('נ', 125000), ('ן', 125000), ('ס', 216000), ('ע', 343000), ('פ', 512000), ('ף', 512000),
    ('צ', 729000), ('ץ', 729000), ('ק', 1000000), ('ר', 8000000), ('ש', 27000000), ('ת', 64000000),
];

const KIDMI: &[(char, u64)] = &[
    ('א', 1), ('ב', 3), ('ג', 6), ('ד', 10), ('ה', 15), ('ו', 21), ('ז', 28),
    ('ח', 36), ('ט', 45), ('י', 55), ('כ', 75), ('ך', 75), ('ל', 105), ('מ', 145),
    ('ם', 145), ('נ', 195), ('ן', 195), ('ס', 255), ('ע', 325), ('פ', 405), ('ף', 405),
    ('צ', 495), ('ץ', 495), ('ק', 595), ('ר', 795), ('ש', 1095), ('ת', 1495),
];

const MISPARI: &[(char, u64)] = &[
    ('א', 13), ('ב', 400), ('ג', 635), ('ד', 278), ('ה', 353), ('ו', 605), ('ז', 377),
    ('ח', 401), ('ט', 775), ('י', 575), ('כ', 620), ('ך', 620), ('ל', 680), ('מ', 323),
    ('ם', 323), ('נ', 398), ('ן', 398), ('ס', 650), ('ע', 422), ('פ', 446), ('ף', 446),
    ('צ', 820), ('ץ', 820), ('ק', 46), ('ר', 491), ('ש', 1077), ('ת', 720),
];

const AYAK_BACHAR: &[(char, u64)] = &[
    ('א', 10), ('ב', 20), ('ג', 30), ('ד', 40), ('ה', 50), ('ו', 60), ('ז', 70),
    ('ח', 80), ('ט', 90), ('י', 100), ('כ', 200), ('ך', 5), ('ל', 300), ('מ', 400),
    ('ם', 6), ('נ', 500), ('ן', 7), ('ס', 600), ('ע', 700), ('פ', 800), ('ף', 8),
    ('צ', 900), ('ץ', 9), ('ק', 1), ('ר', 2), ('ש', 3), ('ת', 4),
];

const OFANIM: &[(char, u64)] = &[
    ('א', 80), ('ב', 400), ('ג', 30), ('ד', 400), ('ה', 1), ('ו', 6), ('ז', 50),
    ('ח', 400), ('ט', 400), ('י', 4), ('כ', 80), ('ך', 80), ('ל', 4), ('מ', 40),
    ('ם', 40), ('נ', 50), ('ן', 50), ('ס', 20), ('ע', 50), ('פ', 1), ('ף', 1),
    ('צ', 10), ('ץ', 10), ('ק', 80), ('ר', 300), ('ש', 50), ('ת', 6),
];

const ACHAS_BETA: &[(char, u64)] = &[
    ('א', 8), ('ב', 9), ('ג', 10), ('ד', 20), ('ה', 30), ('ו', 40), ('ז', 50),
    ('ח', 60), ('ט', 70), ('י', 80), ('כ', 90), ('ך', 90), ('ל', 100), ('מ', 200),
    ('ם', 200), ('נ', 300), ('ן', 300), ('ס', 1), ('ע', 2), ('פ', 3), ('ף', 3),
    ('צ', 4), ('ץ', 4), ('ק', 5), ('ר', 6), ('ש', 7), ('ת', 400),
];

const AVGAD: &[(char, u64)] = &[
    ('א', 2), ('ב', 3), ('ג', 4), ('ד', 5), ('ה', 6), ('ו', 7), ('ז', 8),
    ('ח', 9), ('ט', 10), ('י', 20), ('כ', 30), ('ך', 30), ('ל', 40), ('מ', 50),
    ('ם', 50), ('נ', 60), ('ן', 60), ('ס', 70), ('ע', 80), ('פ', 90), ('ף', 90),
    ('צ', 100), ('ץ', 100), ('ק', 200), ('ר', 300), ('ש', 400), ('ת', 1),
];

const REVERSE_AVGAD: &[(char, u64)] = &[
    ('א', 400), ('ב', 1), ('ג', 2), ('ד', 3), ('ה', 4), ('ו', 5), ('ז', 6),
    ('ח', 7), ('ט', 8), ('י', 9), ('כ', 10), ('ך', 10), ('ל', 20), ('מ', 30),
    ('ם', 30), ('נ', 40), ('ן', 40), ('ס', 50), ('ע', 60), ('פ', 70), ('ף', 70),
    ('צ', 80), ('ץ', 80), ('ק', 90), ('ר', 100), ('ש', 200), ('ת', 300),
];
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_simple_method_covers_the_alphabet() {
        let t = tables();
        for method in GematriaMethod::simple() {
            for letter in ALPHABET {
                assert!(t.value_of(method, letter).is_some(), "{method} lacks {letter}");
            }
        }
    }

    #[test]
    fn composite_methods_have_no_table() {
        for method in GematriaMethod::ALL.into_iter().filter(|m| !m.is_simple()) {
            assert_eq!(tables().value_of(method, 'א'), None);
        }
        assert_eq!(tables().value_of(GematriaMethod::MisparHechrachi, 'a'), None);
    }

    #[test]
    fn incomplete_table_is_rejected() {
        let partial: &[(char, u64)] = &[('א', 1), ('ב', 2)];
        let err = GematriaTables::from_data(&[(GematriaMethod::MisparHechrachi, partial)])
            .err()
            .unwrap();
        match err {
            HebrewError::IncompleteTable { method, letter } => {
                assert_eq!(method, "mispar_hechrachi");
                assert_eq!(letter, "ג");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn mispari_is_the_value_of_the_number_word() {
        let hechrachi = |word: &str| -> u64 {
            word.chars()
                .filter_map(|c| tables().value_of(GematriaMethod::MisparHechrachi, c))
                .sum()
        };
        for (letter, word) in [('א', "אחד"), ('ב', "שנים"), ('ג', "שלשה"), ('ק', "מאה"), ('ת', "ארבע מאות")] {
            assert_eq!(
                tables().value_of(GematriaMethod::MisparMispari, letter),
                Some(hechrachi(word)),
                "{letter}"
            );
        }
    }

    #[test]
    fn rotation_and_shift_tables() {
        let t = tables();
        assert_eq!(t.value_of(GematriaMethod::AyakBachar, 'א'), Some(10));
        assert_eq!(t.value_of(GematriaMethod::AyakBachar, 'ק'), Some(1));
        assert_eq!(t.value_of(GematriaMethod::AyakBachar, 'ך'), Some(5));
        assert_eq!(t.value_of(GematriaMethod::AchasBeta, 'ס'), Some(1));
        assert_eq!(t.value_of(GematriaMethod::AchasBeta, 'ת'), Some(400));
        assert_eq!(t.value_of(GematriaMethod::Avgad, 'ת'), Some(1));
        assert_eq!(t.value_of(GematriaMethod::ReverseAvgad, 'א'), Some(400));
        assert_eq!(t.value_of(GematriaMethod::Ofanim, 'א'), Some(80));
        assert_eq!(t.value_of(GematriaMethod::MisparKidmi, 'ת'), Some(1495));
    }
}
