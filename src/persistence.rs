// File: src/persistence.rs
use crate::error::Result;
use crate::lexicon::Lexicon;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Writes the lexicon as a bincode snapshot. The bytes go to a temp file in
/// the target directory first and are renamed into place, so readers never
/// see a half-written snapshot.
pub fn save_snapshot(lexicon: &Lexicon, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, lexicon)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), "lexicon snapshot written");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Lexicon> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lexicon: Lexicon = bincode::deserialize_from(reader)?;
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconBuilder;

    #[test]
    fn snapshot_round_trip_preserves_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lexicon.bin");
        let lexicon = LexiconBuilder::standard().with_root("גדל", "grow", &["גדול"]).build();

        save_snapshot(&lexicon, &path).unwrap();
        let loaded = load_snapshot(&path).unwrap();

        assert_eq!(loaded.root("גדל").unwrap().meaning, "grow");
        assert_eq!(loaded.canonical_pointing("כלב"), lexicon.canonical_pointing("כלב"));
        assert_eq!(loaded.vocabulary().len(), lexicon.vocabulary().len());
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_snapshot(&dir.path().join("absent.bin"));
        assert!(matches!(result, Err(crate::error::EngineError::Io(_))));
    }

    #[test]
    fn garbage_snapshot_is_a_decoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bin");
        fs::write(&path, b"\x01\x02").unwrap();
        assert!(matches!(load_snapshot(&path), Err(crate::error::EngineError::Snapshot(_))));
    }
}
