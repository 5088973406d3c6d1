// File: src/core/mod.rs
pub mod chars;
pub mod engine;
pub mod gematria;
pub mod glyph;
pub mod grapheme;
pub mod numerals;
pub mod registry;
pub mod text;
pub mod types;
