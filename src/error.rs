// File: src/error.rs
use crate::core::gematria::GematriaMethod;
use thiserror::Error;

/// Result type alias for hebrew_core operations
pub type Result<T> = std::result::Result<T, HebrewError>;

/// Errors raised by the character catalog, gematria and numeral conversion.
///
/// Lookups that simply miss (unknown characters, unknown names) are not
/// errors; they return `None`.
#[derive(Debug, Error)]
pub enum HebrewError {
    /// An alternate spelling that matches none of the letter's Hebrew names.
    #[error("'{spelling}' is not a known spelling of the letter '{letter}'")]
    InvalidSpelling { letter: String, spelling: String },

    /// Outside the range the numeral encoder accepts.
    #[error("number must be between 1 and {max}, got {0}", max = crate::core::numerals::MAX_NUMERAL)]
    InvalidNumber(i64),

    #[error("'{0}' is not a single glyph")]
    NotSingleGlyph(String),

    #[error("'{0}' is not a Hebrew glyph")]
    UnknownGlyph(String),

    /// A letter ligature whose first codepoint is not itself registered.
    #[error("base letter of '{0}' is not registered")]
    MissingBaseLetter(String),

    #[error("letter '{0}' has no Hebrew name")]
    MissingHebrewName(String),

    #[error("character '{0}' is registered more than once")]
    DuplicateCharacter(String),

    #[error("value table for {method} has no entry for '{letter}'")]
    IncompleteTable { method: String, letter: String },

    /// The value does not fit in a `u64`.
    #[error("{0} value of the text does not fit in 64 bits")]
    ValueOverflow(GematriaMethod),

    #[error("unknown gematria method: {0}")]
    UnknownMethod(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
