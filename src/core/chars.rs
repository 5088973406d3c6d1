// File: src/core/chars.rs
//! The static catalog of every character documented as used in Hebrew and
//! Yiddish text.
//!
//! Declaration order matters: name searches return the first entry that
//! matches, so plain letters are declared before their rarer variants.

use crate::core::types::{CharCategory, Character};

pub const MAQAF: char = '\u{5BE}';
pub const PASEQ: char = '\u{5C0}';
pub const SOF_PASSUK: char = '\u{5C3}';
pub const GERESH: char = '\u{5F3}';
pub const GERSHAYIM: char = '\u{5F4}';

/// The 27 letters that carry a gematria value: 22 base letters and 5 finals,
/// in alphabetical order with each final after its regular form.
pub const ALPHABET: [char; 27] = [
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ך', 'ל', 'מ', 'ם', 'נ', 'ן', 'ס', 'ע',
    'פ', 'ף', 'צ', 'ץ', 'ק', 'ר', 'ש', 'ת',
];

/// Regular letter and its final (sofit) shape.
pub const FINAL_PAIRS: [(char, char); 5] = [
    ('כ', 'ך'),
    ('מ', 'ם'),
    ('נ', 'ן'),
    ('פ', 'ף'),
    ('צ', 'ץ'),
];

/// Special characters and their plain spelled-out equivalent, e.g. `ﭏ` becomes `אל`.
/// Entries flagged `true` are Yiddish ligatures, only expanded on request.
pub const SPECIAL_NORMALIZATION: &[(&str, &str, bool)] = &[
    ("\u{2135}", "א", false),
    ("\u{2136}", "ב", false),
    ("\u{2137}", "ג", false),
    ("\u{2138}", "ד", false),
    ("\u{FB1D}", "י\u{5B4}", false),
    ("\u{FB20}", "ע", false),
    ("\u{FB21}", "א", false),
    ("\u{FB22}", "ד", false),
    ("\u{FB23}", "ה", false),
    ("\u{FB24}", "כ", false),
    ("\u{FB25}", "ל", false),
    ("\u{FB26}", "ם", false),
    ("\u{FB27}", "ר", false),
    ("\u{FB28}", "ת", false),
    ("\u{FB2A}", "ש\u{5C1}", false),
    ("\u{FB2B}", "ש\u{5C2}", false),
    ("\u{FB2C}", "ש\u{5BC}\u{5C1}", false),
    ("\u{FB2D}", "ש\u{5BC}\u{5C2}", false),
    ("\u{FB2E}", "א\u{5B7}", false),
    ("\u{FB2F}", "א\u{5B8}", false),
    ("\u{FB30}", "א\u{5BC}", false),
    ("\u{FB31}", "ב\u{5BC}", false),
    ("\u{FB32}", "ג\u{5BC}", false),
    ("\u{FB33}", "ד\u{5BC}", false),
    ("\u{FB34}", "ה\u{5BC}", false),
    ("\u{FB35}", "ו\u{5BC}", false),
    ("\u{FB36}", "ז\u{5BC}", false),
    ("\u{FB38}", "ט\u{5BC}", false),
    ("\u{FB39}", "י\u{5BC}", false),
    ("\u{FB3A}", "ך\u{5BC}", false),
    ("\u{FB3B}", "כ\u{5BC}", false),
    ("\u{FB3C}", "ל\u{5BC}", false),
    ("\u{FB3E}", "מ\u{5BC}", false),
    ("\u{FB40}", "נ\u{5BC}", false),
    ("\u{FB41}", "ס\u{5BC}", false),
    ("\u{FB43}", "ף\u{5BC}", false),
    ("\u{FB44}", "פ\u{5BC}", false),
    ("\u{FB46}", "צ\u{5BC}", false),
    ("\u{FB47}", "ק\u{5BC}", false),
    ("\u{FB48}", "ר\u{5BC}", false),
    ("\u{FB49}", "ש\u{5BC}", false),
    ("\u{FB4A}", "ת\u{5BC}", false),
    ("\u{FB4B}", "ו\u{5B9}", false),
    ("\u{FB4C}", "ב\u{5BF}", false),
    ("\u{FB4D}", "כ\u{5BF}", false),
    ("\u{FB4E}", "פ\u{5BF}", false),
    ("\u{FB4F}", "אל", false),
    ("\u{FB1F}", "י\u{5B7}י", true),
    ("\u{5F2}\u{5B7}", "י\u{5B7}י", true),
    ("\u{5F2}", "יי", true),
    ("\u{5F0}", "וו", true),
    ("\u{5F1}", "וי", true),
];

pub static CATALOG: &[Character] = &[
    // Letters
    Character::new("א", CharCategory::Letter, "Aleph")
        .hebrew_name("אָלֶף")
        .name_alts(&["Alef"]),
    Character::new("ב\u{5BC}", CharCategory::Letter, "Bet")
        .hebrew_name("בֵּית")
        .name_alts(&["Bes"])
        .hebrew_name_alts(&["בת"]),
    Character::new("ב", CharCategory::Letter, "Vet")
        .hebrew_name("בֵית")
        .hebrew_name_alts(&["בת"]),
    Character::new("ג", CharCategory::Letter, "Gimel")
        .hebrew_name("גִימֵל")
        .hebrew_name_alts(&["גמל"]),
    Character::new("ד", CharCategory::Letter, "Dalet")
        .hebrew_name("דָלֶת")
        .name_alts(&["Daled"])
        .hebrew_name_alts(&["דלית"]),
    Character::new("ה", CharCategory::Letter, "He")
        .hebrew_name("הֵא")
        .name_alts(&["Hei", "Hey"])
        .hebrew_name_alts(&["הי", "הה"]),
    Character::new("ו", CharCategory::Letter, "Vav")
        .hebrew_name("וָו")
        .name_alts(&["Vuv"])
        .hebrew_name_alts(&["ויו", "ואו"]),
    Character::new("ז", CharCategory::Letter, "Zayin")
        .hebrew_name("זַיִן"),
    Character::new("ח", CharCategory::Letter, "Chet")
        .hebrew_name("חֵית")
        .name_alts(&["Het", "Ches"])
        .hebrew_name_alts(&["חת"]),
    Character::new("ט", CharCategory::Letter, "Tet")
        .hebrew_name("טֵית")
        .name_alts(&["Tes"])
        .hebrew_name_alts(&["טת"]),
    Character::new("י", CharCategory::Letter, "Yod")
        .hebrew_name("יוֹד")
        .name_alts(&["Yud"]),
    Character::new("כ\u{5BC}", CharCategory::Letter, "Kaf")
        .hebrew_name("כַּף"),
    Character::new("ך\u{5BC}", CharCategory::Letter, "Kaf Sofit")
        .hebrew_name("כַּף סוֹפִית")
        .name_alts(&["Final Kaf"])
        .final_form(),
    Character::new("כ", CharCategory::Letter, "Chaf")
        .hebrew_name("כַף"),
    Character::new("ך", CharCategory::Letter, "Chaf Sofit")
        .hebrew_name("כַף סוֹפִית")
        .name_alts(&["Final Chaf"])
        .final_form(),
    Character::new("ל", CharCategory::Letter, "Lamed")
        .hebrew_name("לָמֶד")
        .name_alts(&["Lamid"]),
    Character::new("מ", CharCategory::Letter, "Mem")
        .hebrew_name("מֵם"),
    Character::new("ם", CharCategory::Letter, "Mem Sofit")
        .hebrew_name("מֵם סוֹפִית")
        .name_alts(&["Final Mem"])
        .final_form(),
    Character::new("נ", CharCategory::Letter, "Nun")
        .hebrew_name("נוּן"),
    Character::new("ן", CharCategory::Letter, "Nun Sofit")
        .hebrew_name("נוּן סוֹפִית")
        .name_alts(&["Final Nun"])
        .final_form(),
    Character::new("ס", CharCategory::Letter, "Samekh")
        .hebrew_name("סָמֶך")
        .name_alts(&["Samach"]),
    Character::new("ע", CharCategory::Letter, "Ayin")
        .hebrew_name("עַיִן"),
    Character::new("פ\u{5BC}", CharCategory::Letter, "Pe")
        .hebrew_name("פֵּא")
        .name_alts(&["Peh"])
        .hebrew_name_alts(&["פֵּה", "פי", "פה"]),
    Character::new("פ", CharCategory::Letter, "Fe")
        .hebrew_name("פֵא")
        .hebrew_name_alts(&["פי", "פה"]),
    Character::new("ף\u{5BC}", CharCategory::Letter, "Pe Sofit")
        .hebrew_name("פֵּא סוֹפִית")
        .name_alts(&["Final Pe"])
        .final_form(),
    Character::new("ף", CharCategory::Letter, "Fe Sofit")
        .hebrew_name("פֵא סוֹפִית")
        .name_alts(&["Final Fe"])
        .final_form(),
    Character::new("צ", CharCategory::Letter, "Tsadi")
        .hebrew_name("צַדִי")
        .name_alts(&["Tzadik"])
        .hebrew_name_alts(&["צדיק"]),
    Character::new("ץ", CharCategory::Letter, "Tsadi Sofit")
        .hebrew_name("צַדִי סוֹפִית")
        .name_alts(&["Final Tsadi", "Tzadik Sofit", "Final Tzadik"])
        .hebrew_name_alts(&["צדיק סופית"])
        .final_form(),
    Character::new("ק", CharCategory::Letter, "Qof")
        .hebrew_name("קוֹף")
        .name_alts(&["Kuf"]),
    Character::new("ר", CharCategory::Letter, "Resh")
        .hebrew_name("רֵישׁ")
        .hebrew_name_alts(&["רש"]),
    Character::new("ש\u{5C1}", CharCategory::Letter, "Shin")
        .hebrew_name("שִׁן")
        .hebrew_name_alts(&["שִׁין"]),
    Character::new("ש\u{5C2}", CharCategory::Letter, "Sin")
        .hebrew_name("שִׂן")
        .hebrew_name_alts(&["שִׂין"]),
    Character::new("ש", CharCategory::Letter, "Plain Shin")
        .hebrew_name("שִׂן")
        .name_alts(&["Plain Sin"])
        .hebrew_name_alts(&["שִׂין"]),
    Character::new("ת\u{5BC}", CharCategory::Letter, "Tav")
        .hebrew_name("תּו")
        .name_alts(&["Taf"])
        .hebrew_name_alts(&["תיו", "תאו"]),
    Character::new("ת", CharCategory::Letter, "Sav")
        .hebrew_name("תָו")
        .name_alts(&["Saf"])
        .hebrew_name_alts(&["תיו", "תאו"]),
    // Yiddish ligatures
    Character::new("\u{5F2}", CharCategory::YiddishLetter, "Double Yod")
        .name_alts(&["Double Yud"]),
    Character::new("\u{5F0}", CharCategory::YiddishLetter, "Double Vav")
        .name_alts(&["Double Vuv"]),
    Character::new("\u{5F1}", CharCategory::YiddishLetter, "Vav Yod")
        .name_alts(&["Vav Yud", "Vuv Yod", "Vuv Yud"]),
    // Niqqud
    Character::new("\u{5C2}", CharCategory::Niqqud, "Sin Dot"),
    Character::new("\u{5C1}", CharCategory::Niqqud, "Shin Dot"),
    Character::new("\u{5BC}", CharCategory::Niqqud, "Dagesh"),
    Character::new("\u{5BB}", CharCategory::Niqqud, "Qubuts")
        .name_alts(&["Kubutz"]),
    Character::new("ו\u{5BC}", CharCategory::Niqqud, "Shuruk"),
    Character::new("\u{5B9}", CharCategory::Niqqud, "Holam"),
    Character::new("\u{5B8}", CharCategory::Niqqud, "Qamats")
        .name_alts(&["Kumatz"]),
    Character::new("\u{5B7}", CharCategory::Niqqud, "Patah")
        .name_alts(&["Patach"]),
    Character::new("\u{5B6}", CharCategory::Niqqud, "Segol"),
    Character::new("\u{5B5}", CharCategory::Niqqud, "Tsere"),
    Character::new("\u{5B4}", CharCategory::Niqqud, "Hiriq")
        .name_alts(&["Chirik"]),
    Character::new("\u{5B3}", CharCategory::Niqqud, "Hataf Qamatz")
        .name_alts(&["Hataf Kumatz"]),
    Character::new("\u{5B2}", CharCategory::Niqqud, "Hataf Patah")
        .name_alts(&["Hataf Patach"]),
    Character::new("\u{5B1}", CharCategory::Niqqud, "Hataf Segol"),
    Character::new("\u{5B0}", CharCategory::Niqqud, "Sheva")
        .name_alts(&["Shivah"]),
    Character::new("\u{5C4}", CharCategory::Niqqud, "Upper Dot"),
    // Punctuation
    Character::new("\u{5BE}", CharCategory::Other, "Maqaf"),
    Character::new("\u{5C0}", CharCategory::Other, "Paseq"),
    Character::new("\u{5C3}", CharCategory::Other, "Sof Passuk"),
    // Ta'amim
    Character::new("\u{591}", CharCategory::Taamim, "Etnahta"),
    Character::new("\u{592}", CharCategory::Taamim, "Segol Top"),
    Character::new("\u{593}", CharCategory::Taamim, "Shalshelet"),
    Character::new("\u{594}", CharCategory::Taamim, "Zaqef Qatan"),
    Character::new("\u{595}", CharCategory::Taamim, "Zaqef Gadol"),
    Character::new("\u{596}", CharCategory::Taamim, "Tifcha"),
    Character::new("\u{597}", CharCategory::Taamim, "Revia"),
    Character::new("\u{5AE}", CharCategory::Taamim, "Zinor"),
    Character::new("\u{599}", CharCategory::Taamim, "Pashta"),
    Character::new("\u{5A8}", CharCategory::Taamim, "Pashta 2")
        .name_alts(&["Qadma"]),
    Character::new("\u{59A}", CharCategory::Taamim, "Yetiv"),
    Character::new("\u{59B}", CharCategory::Taamim, "Tevir"),
    Character::new("\u{5A1}", CharCategory::Taamim, "Pazer"),
    Character::new("\u{5A0}", CharCategory::Taamim, "Telisha Gedola"),
    Character::new("\u{5A9}", CharCategory::Taamim, "Telisha Ketannah"),
    Character::new("\u{5F3}", CharCategory::Other, "Geresh"),
    Character::new("\u{59C}", CharCategory::Taamim, "Azla Geresh"),
    Character::new("\u{5F4}", CharCategory::Other, "Gershayim"),
    Character::new("\u{59E}", CharCategory::Taamim, "Gershayim 2"),
    Character::new("\u{5A5}", CharCategory::Taamim, "Mercha"),
    Character::new("\u{5A3}", CharCategory::Taamim, "Munach"),
    Character::new("\u{5A4}", CharCategory::Taamim, "Mahpach"),
    Character::new("\u{5A7}", CharCategory::Taamim, "Darga"),
    Character::new("\u{5A6}", CharCategory::Taamim, "Mercha Kefula"),
    Character::new("\u{5AA}", CharCategory::Taamim, "Yerach Ben Yomo"),
    Character::new("\u{5AF}", CharCategory::Taamim, "Masora"),
    Character::new("\u{5AD}", CharCategory::Taamim, "Dehi"),
    Character::new("\u{598}", CharCategory::Taamim, "Zarqa"),
    Character::new("\u{59D}", CharCategory::Taamim, "Geresh Muqdam"),
    Character::new("\u{59F}", CharCategory::Taamim, "Qarney Para")
        .name_alts(&["Pazer Gadol"]),
    Character::new("\u{5AB}", CharCategory::Taamim, "Ola"),
    Character::new("\u{5AC}", CharCategory::Taamim, "Iluy"),
    Character::new("\u{5BF}", CharCategory::Taamim, "Rafe"),
    Character::new("\u{5BD}", CharCategory::Taamim, "Meteg"),
    Character::new("\u{5A2}", CharCategory::Taamim, "Atnah Hafukh"),
    Character::new("\u{5BA}", CharCategory::Niqqud, "Holam Haser"),
    Character::new("\u{5C5}", CharCategory::Niqqud, "Lower Dot"),
    Character::new("\u{5C6}", CharCategory::Other, "Inverted Nun")
        .hebrew_name("נו\"ן מנוזרת")
        .name_alts(&["Nun Hafukha"]),
    // Rare variants and presentation forms
    Character::new("\u{2135}", CharCategory::Letter, "Aleph Symbol"),
    Character::new("\u{2136}", CharCategory::Letter, "Bet Symbol"),
    Character::new("\u{2137}", CharCategory::Letter, "Gimel Symbol"),
    Character::new("\u{2138}", CharCategory::Letter, "Dalet Symbol"),
    Character::new("\u{FB1D}", CharCategory::Letter, "Yod with Hiriq"),
    Character::new("\u{FB1F}", CharCategory::YiddishLetter, "Yod Yod Patah"),
    Character::new("\u{5F2}\u{5B7}", CharCategory::YiddishLetter, "Yod Yod Patah"),
    Character::new("\u{FB20}", CharCategory::Letter, "Alternative Ayin"),
    Character::new("\u{FB21}", CharCategory::Letter, "Wide Alef"),
    Character::new("\u{FB22}", CharCategory::Letter, "Wide Dalet"),
    Character::new("\u{FB23}", CharCategory::Letter, "Wide He"),
    Character::new("\u{FB24}", CharCategory::Letter, "Wide Kaf"),
    Character::new("\u{FB25}", CharCategory::Letter, "Wide Lamed"),
    Character::new("\u{FB26}", CharCategory::Letter, "Wide Final Mem"),
    Character::new("\u{FB27}", CharCategory::Letter, "Wide Resh"),
    Character::new("\u{FB28}", CharCategory::Letter, "Wide Tav"),
    Character::new("\u{FB2A}", CharCategory::Letter, "Shin with Shin Dot"),
    Character::new("\u{FB2B}", CharCategory::Letter, "Shin with Sin Dot"),
    Character::new("\u{FB2C}", CharCategory::Letter, "Shin with Dagesh and Shin Dot"),
    Character::new("\u{FB2D}", CharCategory::Letter, "Shin with Dagesh and Sin Dot"),
    Character::new("\u{FB2E}", CharCategory::Letter, "Alef with Patah"),
    Character::new("\u{FB2F}", CharCategory::Letter, "Alef with Qamats"),
    Character::new("\u{FB30}", CharCategory::Letter, "Alef with Mapiq"),
    Character::new("\u{FB31}", CharCategory::Letter, "Bet with Dagesh"),
    Character::new("\u{FB32}", CharCategory::Letter, "Gimel with Dagesh"),
    Character::new("\u{FB33}", CharCategory::Letter, "Dalet with Dagesh"),
    Character::new("\u{FB34}", CharCategory::Letter, "He with Mapiq"),
    Character::new("\u{FB35}", CharCategory::Letter, "Vav with Dagesh"),
    Character::new("\u{FB36}", CharCategory::Letter, "Zayin with Dagesh"),
    Character::new("\u{FB38}", CharCategory::Letter, "Tet with Dagesh"),
    Character::new("\u{FB39}", CharCategory::Letter, "Yod with Dagesh"),
    Character::new("\u{FB3A}", CharCategory::Letter, "Final Kaf with Dagesh"),
    Character::new("\u{FB3B}", CharCategory::Letter, "Kaf with Dagesh"),
    Character::new("\u{FB3C}", CharCategory::Letter, "Lamed with Dagesh"),
    Character::new("\u{FB3E}", CharCategory::Letter, "Mem with Dagesh"),
    Character::new("\u{FB40}", CharCategory::Letter, "Nun with Dagesh"),
    Character::new("\u{FB41}", CharCategory::Letter, "Samekh with Dagesh"),
    Character::new("\u{FB43}", CharCategory::Letter, "Final Pe with Dagesh"),
    Character::new("\u{FB44}", CharCategory::Letter, "Pe with Dagesh"),
    Character::new("\u{FB46}", CharCategory::Letter, "Tsadi with Dagesh"),
    Character::new("\u{FB47}", CharCategory::Letter, "Qof with Dagesh"),
    Character::new("\u{FB48}", CharCategory::Letter, "Resh with Dagesh"),
    Character::new("\u{FB49}", CharCategory::Letter, "Shin with Dagesh"),
    Character::new("\u{FB4A}", CharCategory::Letter, "Tav with Dagesh"),
    Character::new("\u{FB4B}", CharCategory::Letter, "Vav with Holam"),
    Character::new("\u{FB4C}", CharCategory::Letter, "Bet with Rafe"),
    Character::new("\u{FB4D}", CharCategory::Letter, "Kaf with Rafe"),
    Character::new("\u{FB4E}", CharCategory::Letter, "Pe with Rafe"),
    Character::new("\u{FB4F}", CharCategory::Letter, "Alef Lamed"),
    Character::new("\u{5C7}", CharCategory::Niqqud, "Qamats Qatan")
        .name_alts(&["Kumatz Katan"]),
    Character::new("\u{5EF}", CharCategory::Letter, "Yod Triangle")
        .name_alts(&["Yud Triangle"]),
    Character::new("\u{FB1E}", CharCategory::Taamim, "Judeo-Spanish Varika"),
    Character::new("\u{FB29}", CharCategory::Other, "Alternative Plus Sign"),
];
