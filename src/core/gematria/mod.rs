// File: src/core/gematria/mod.rs
pub mod engine;
pub mod method;
pub mod tables;

pub use engine::{compute_gematria, AlternateSpellings};
pub use method::GematriaMethod;
