// File: src/core/numerals.rs
use crate::core::chars::{GERESH, GERSHAYIM};
use crate::error::{HebrewError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest number the encoder accepts. Thousands are spelled with repeated
/// ת, so the numeral grows linearly and has to be capped.
pub const MAX_NUMERAL: i64 = 1_000_000;

/// Letter values from largest to smallest, used for the greedy hundreds split.
const DENOMINATIONS: [u64; 22] = [
    400, 300, 200, 100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
];

// Rules are tried in this order against the unpunctuated numeral.
const DEFAULT_RULES: &[(&str, &str, Anchor)] = &[
    ("יה", "טו", Anchor::Final),
    ("יו", "טז", Anchor::Final),
];

const EXTRA_RULES: &[(&str, &str, Anchor)] = &[
    ("רע", "ער", Anchor::Final),
    ("רעב", "ערב", Anchor::Final),
    ("רעה", "ערה", Anchor::Whole),
    ("רצח", "רחצ", Anchor::Final),
    ("שד", "דש", Anchor::Whole),
    ("שמד", "שדמ", Anchor::Final),
];

/// Where a substitution pattern has to sit for the rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// The numeral ends with the pattern.
    Final,
    /// The numeral is exactly the pattern.
    Whole,
}

/// Rewrites a numeral that would otherwise spell an unwanted word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub find: String,
    pub replace: String,
    pub anchor: Anchor,
}

impl SubstitutionRule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            anchor,
        }
    }

    /// The rewritten numeral, or `None` when the rule does not match.
    pub fn apply(&self, numeral: &str) -> Option<String> {
        match self.anchor {
            Anchor::Final => numeral
                .strip_suffix(self.find.as_str())
                .map(|head| format!("{head}{}", self.replace)),
            Anchor::Whole => (numeral == self.find).then(|| self.replace.clone()),
        }
    }
}

/// Which substitution rules the encoder runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionSet {
    None,
    /// 15 and 16 are written טו and טז instead of spelling a divine name.
    #[default]
    Default,
    /// The default rules plus the ones avoiding words such as רע and שד.
    All,
    Custom(Vec<SubstitutionRule>),
}

impl SubstitutionSet {
    pub fn rules(&self) -> Vec<SubstitutionRule> {
        let from_table = |table: &[(&str, &str, Anchor)]| -> Vec<SubstitutionRule> {
            table
                .iter()
                .map(|&(find, replace, anchor)| SubstitutionRule::new(find, replace, anchor))
                .collect()
        };
        match self {
            SubstitutionSet::None => Vec::new(),
            SubstitutionSet::Default => from_table(DEFAULT_RULES),
            SubstitutionSet::All => {
                let mut rules = from_table(DEFAULT_RULES);
                rules.extend(from_table(EXTRA_RULES));
                rules
            }
            SubstitutionSet::Custom(rules) => rules.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumeralOptions {
    /// Add geresh/gershayim marks.
    pub punctuate: bool,
    /// Use the Hebrew ׳ and ״ marks rather than ASCII `'` and `"`.
    pub use_geresh: bool,
    pub substitutions: SubstitutionSet,
}

impl Default for NumeralOptions {
    fn default() -> Self {
        Self {
            punctuate: true,
            use_geresh: true,
            substitutions: SubstitutionSet::Default,
        }
    }
}

/// Converts positive integers to Hebrew letter numerals (15 → ט״ו).
pub struct NumeralEncoder {
    options: NumeralOptions,
}

impl NumeralEncoder {
    pub fn new(options: NumeralOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NumeralOptions {
        &self.options
    }

    /// Encodes `number`, which must be in `1..=MAX_NUMERAL`.
    ///
    /// Thousands are not given a separate marker; they are written as
    /// repeated ת, so the output grows linearly with the number.
    pub fn encode(&self, number: i64) -> Result<String> {
        if !(1..=MAX_NUMERAL).contains(&number) {
            return Err(HebrewError::InvalidNumber(number));
        }
        let value = number.unsigned_abs();

        let mut numeral = self.letters_for(value);
        for rule in self.options.substitutions.rules() {
            if let Some(rewritten) = rule.apply(&numeral) {
                debug!(number, find = %rule.find, replace = %rule.replace, "numeral substitution applied");
                numeral = rewritten;
            }
        }

        if self.options.punctuate {
            numeral = punctuate(&numeral, self.options.use_geresh);
        }
        Ok(numeral)
    }

    /// Plain letters, most significant first, before substitution.
    fn letters_for(&self, number: u64) -> String {
        // Built least significant first, then reversed once.
        let mut reversed = String::new();
        let ones = number % 10;
        let tens = if number < 10 { 0 } else { (number % 100) / 10 * 10 };
        let hundreds = number / 100 * 100;

        if let Some(letter) = self.letter_for(ones) {
            reversed.push(letter);
        }
        if let Some(letter) = self.letter_for(tens) {
            reversed.push(letter);
        }
        if hundreds > 0 {
            reversed.push_str(&self.hundreds_to_letters(hundreds));
        }
        reversed.chars().rev().collect()
    }

    /// Greedy split into the largest letter values, remainder letters first.
    fn hundreds_to_letters(&self, number: u64) -> String {
        if let Some(letter) = self.letter_for(number) {
            return letter.to_string();
        }
        let Some(value) = DENOMINATIONS.into_iter().find(|&v| v <= number) else {
            return String::new();
        };
        let Some(letter) = self.letter_for(value) else {
            return String::new();
        };

        let remainder = number % value;
        let mut letters = if remainder > 0 {
            self.hundreds_to_letters(remainder)
        } else {
            String::new()
        };
        letters.extend(std::iter::repeat(letter).take((number / value) as usize));
        letters
    }

    fn letter_for(&self, value: u64) -> Option<char> {
        match value {
            1 => Some('א'), 2 => Some('ב'), 3 => Some('ג'),
            4 => Some('ד'), 5 => Some('ה'), 6 => Some('ו'),
            7 => Some('ז'), 8 => Some('ח'), 9 => Some('ט'),
            10 => Some('י'), 20 => Some('כ'), 30 => Some('ל'),
            40 => Some('מ'), 50 => Some('נ'), 60 => Some('ס'),
            70 => Some('ע'), 80 => Some('פ'), 90 => Some('צ'),
            100 => Some('ק'), 200 => Some('ר'), 300 => Some('ש'),
            400 => Some('ת'),
            _ => None,
        }
    }
}

impl Default for NumeralEncoder {
    fn default() -> Self {
        Self::new(NumeralOptions::default())
    }
}

fn punctuate(numeral: &str, use_geresh: bool) -> String {
    let mut chars: Vec<char> = numeral.chars().collect();
    match chars.len() {
        0 => {}
        1 => chars.push(if use_geresh { GERESH } else { '\'' }),
        n => chars.insert(n - 1, if use_geresh { GERSHAYIM } else { '"' }),
    }
    chars.into_iter().collect()
}
