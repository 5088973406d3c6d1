// File: src/config.rs
use crate::core::gematria::{AlternateSpellings, GematriaMethod};
use crate::core::numerals::NumeralOptions;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the engine's JSON config file.
pub const CONFIG_ENV_VAR: &str = "HEBREW_ENGINE_CONFIG";

/// Settings for [`HebrewEngine`](crate::HebrewEngine). Every field is
/// optional in the file.
///
/// ```json
/// {
///   "default_method": "mispar_gadol",
///   "alternate_spellings": { "ב": "בת" },
///   "numerals": { "punctuate": true, "use_geresh": false, "substitutions": "all" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_method: GematriaMethod,
    pub alternate_spellings: AlternateSpellings,
    pub numerals: NumeralOptions,
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        debug!(path = %path.display(), "engine config loaded");
        Ok(config)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`]. No variable, or a path
    /// that does not exist, gives the defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!(path = %path.display(), "engine config not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}
