// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod export;

pub use crate::config::EngineConfig;
pub use crate::core::engine::HebrewEngine;
pub use crate::core::gematria::{compute_gematria, AlternateSpellings, GematriaMethod};
pub use crate::core::glyph::HebrewGlyph;
pub use crate::core::grapheme::GraphemeString;
pub use crate::core::numerals::{NumeralEncoder, NumeralOptions, SubstitutionSet, MAX_NUMERAL};
pub use crate::core::registry::registry;
pub use crate::core::text::Hebrew;
pub use crate::core::types::{CharCategory, Character};
pub use crate::error::{HebrewError, Result};
