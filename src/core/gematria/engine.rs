// File: src/core/gematria/engine.rs
use crate::core::gematria::method::GematriaMethod;
use crate::core::gematria::tables::tables;
use crate::core::registry::{is_alphabet_letter, registry, to_regular_form};
use crate::core::text::strip_to_text;
use crate::core::types::Character;
use crate::error::{HebrewError, Result};
use std::collections::HashMap;
use tracing::{trace, warn};
use unicode_segmentation::UnicodeSegmentation;

/// Caller-chosen spellings of letter names for Mispar Shemi Milui and
/// Mispar Ne'elam, keyed by the letter (e.g. `"ב" => "בת"`).
pub type AlternateSpellings = HashMap<String, String>;

/// Computes the gematria value of `text` under `method`.
///
/// Anything that is not one of the 27 alphabet letters is ignored, so mixed
/// Hebrew and English text is fine. Text without letters is worth 0 under
/// every method. The only failure is an entry in `alternate_spellings` that
/// is not a registered name of its letter.
pub fn compute_gematria(
    text: &str,
    method: GematriaMethod,
    alternate_spellings: Option<&AlternateSpellings>,
) -> Result<u64> {
    let filtered = filter_letters(text);
    let letters: Vec<char> = filtered.iter().copied().filter(|&c| c != ' ').collect();
    if letters.is_empty() {
        return Ok(0);
    }

    let value = match method {
        GematriaMethod::MisparMusafi => standard_sum(&letters) + letters.len() as u64,
        GematriaMethod::MisparKolel => standard_sum(&letters) + word_count(&filtered) as u64,
        GematriaMethod::MisparBoneeh => {
            let mut running = 0u64;
            letters
                .iter()
                .try_fold(0u64, |total, &c| {
                    running = running.checked_add(standard_value(c))?;
                    total.checked_add(running)
                })
                .ok_or(HebrewError::ValueOverflow(method))?
        }
        GematriaMethod::MisparHamerubahHaklali => squared_total(standard_sum(&letters))?,
        GematriaMethod::MisparHaachor => letters
            .iter()
            .zip(1u64..)
            .try_fold(0u64, |total, (&c, position)| {
                total.checked_add(standard_value(c).checked_mul(position)?)
            })
            .ok_or(HebrewError::ValueOverflow(method))?,
        GematriaMethod::MisparKatanMispari => digit_root(standard_sum(&letters)),
        GematriaMethod::MisparShemiMilui => spelled_names_value(&letters, alternate_spellings, false)?,
        GematriaMethod::MisparNeelam => spelled_names_value(&letters, alternate_spellings, true)?,
        simple => table_sum(&letters, simple),
    };

    trace!(%method, letters = letters.len(), value, "gematria computed");
    Ok(value)
}

/// Keeps alphabet letters and turns whitespace into a plain space. Registered
/// letter ligatures resolve to their base letter.
fn filter_letters(text: &str) -> Vec<char> {
    let registry = registry();
    let mut filtered = Vec::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        let base = registry
            .lookup(grapheme)
            .filter(|c| c.is_letter())
            .and_then(|c| registry.base_letter(c).ok())
            .and_then(|b| single_char(b.text))
            .filter(|&c| is_alphabet_letter(c));
        if let Some(letter) = base {
            filtered.push(letter);
            continue;
        }
        // Unregistered clusters, e.g. a letter carrying both niqqud and ta'amim.
        for c in grapheme.chars() {
            if is_alphabet_letter(c) {
                filtered.push(c);
            } else if c.is_whitespace() {
                filtered.push(' ');
            }
        }
    }
    filtered
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn table_sum(letters: &[char], method: GematriaMethod) -> u64 {
    let tables = tables();
    letters
        .iter()
        .filter_map(|&c| tables.value_of(method, c))
        .sum()
}

fn standard_value(letter: char) -> u64 {
    tables()
        .value_of(GematriaMethod::MisparHechrachi, letter)
        .unwrap_or(0)
}

fn standard_sum(letters: &[char]) -> u64 {
    table_sum(letters, GematriaMethod::MisparHechrachi)
}

fn word_count(filtered: &[char]) -> usize {
    filtered
        .split(|&c| c == ' ')
        .filter(|word| !word.is_empty())
        .count()
}

fn squared_total(sum: u64) -> Result<u64> {
    sum.checked_mul(sum)
        .ok_or(HebrewError::ValueOverflow(GematriaMethod::MisparHamerubahHaklali))
}

/// Repeated digit sum down to a single digit.
fn digit_root(mut value: u64) -> u64 {
    while value >= 10 {
        let mut sum = 0;
        while value > 0 {
            sum += value % 10;
            value /= 10;
        }
        value = sum;
    }
    value
}

fn spelled_names_value(
    letters: &[char],
    alternate_spellings: Option<&AlternateSpellings>,
    hide_letter: bool,
) -> Result<u64> {
    let mut total = 0;
    for &letter in letters {
        let name = letter_name(letter, alternate_spellings)?;
        let spelled: Vec<char> = filter_letters(&name)
            .into_iter()
            .filter(|&c| c != ' ')
            .collect();
        let counted = if hide_letter {
            spelled.get(1..).unwrap_or_default()
        } else {
            &spelled[..]
        };
        total += standard_sum(counted);
    }
    Ok(total)
}

/// The spelled-out name of `letter`. Finals are named through their regular
/// form since only regular letters carry a bare name.
fn letter_name(letter: char, alternate_spellings: Option<&AlternateSpellings>) -> Result<String> {
    let regular = to_regular_form(letter);
    let entry = registry()
        .lookup_char(regular)
        .ok_or_else(|| HebrewError::UnknownGlyph(regular.to_string()))?;

    let chosen = alternate_spellings.and_then(|spellings| {
        spellings
            .get(&regular.to_string())
            .or_else(|| spellings.get(&letter.to_string()))
    });

    match chosen {
        Some(spelling) => {
            validate_spelling(entry, spelling)?;
            Ok(spelling.clone())
        }
        None => entry
            .hebrew_name
            .map(str::to_string)
            .ok_or_else(|| HebrewError::MissingHebrewName(entry.text.to_string())),
    }
}

fn validate_spelling(entry: &Character, spelling: &str) -> Result<()> {
    let wanted = strip_to_text(spelling, true);
    let wanted = wanted.trim();
    if entry
        .hebrew_names()
        .any(|name| strip_to_text(name, true).trim() == wanted)
    {
        return Ok(());
    }
    warn!(letter = entry.text, spelling, "rejected alternate letter spelling");
    Err(HebrewError::InvalidSpelling {
        letter: entry.text.to_string(),
        spelling: spelling.to_string(),
    })
}
