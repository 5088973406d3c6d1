// File: src/export.rs
use crate::core::registry::registry;
use crate::core::types::CharCategory;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// One exported catalog entry, as read back from an export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub text: String,
    pub category: CharCategory,
    pub name: String,
    pub name_alts: Vec<String>,
    pub hebrew_name: Option<String>,
    pub hebrew_name_alts: Vec<String>,
    pub final_letter: bool,
}

/// Writes the whole character catalog to `path` as pretty JSON and returns
/// the number of entries. The file is written next to its destination and
/// renamed into place, so readers never see a partial export.
pub fn export_characters(path: &Path) -> Result<usize> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let characters = registry().all();
    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, characters)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;

    info!(characters = characters.len(), path = %path.display(), "character catalog exported");
    Ok(characters.len())
}

pub fn load_characters(path: &Path) -> Result<Vec<CharacterRecord>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HebrewError;

    #[test]
    fn export_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("characters.json");

        let written = export_characters(&path).unwrap();
        let records = load_characters(&path).unwrap();
        assert_eq!(written, registry().all().len());
        assert_eq!(records.len(), written);

        let aleph = &records[0];
        assert_eq!(aleph.text, "א");
        assert_eq!(aleph.category, CharCategory::Letter);
        assert_eq!(aleph.name_alts, vec!["Alef"]);
        assert!(records
            .iter()
            .any(|r| r.category == CharCategory::Taamim && r.name == "Etnahta"));
    }

    #[test]
    fn export_replaces_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("characters.json");
        fs::write(&path, "stale").unwrap();

        export_characters(&path).unwrap();
        assert!(load_characters(&path).is_ok());
        // Only the export itself is left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn loading_garbage_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_characters(&path), Err(HebrewError::Serialization(_))));
        assert!(matches!(
            load_characters(&dir.path().join("missing.json")),
            Err(HebrewError::Io(_))
        ));
    }
}
