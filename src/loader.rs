//! Reading JSON documents (decklists and schemas) from disk.

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{DecklistError, Result};

/// Load and parse a JSON file (handles `.gz` transparently).
///
/// A missing file is reported as [`DecklistError::NotFound`] rather than a
/// bare IO error so callers can tell "nothing there" from "unreadable".
pub fn load_json(path: &Path) -> Result<serde_json::Value> {
    let file = fs::File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            DecklistError::NotFound(format!("No such file: {}", path.display()))
        }
        _ => DecklistError::Io(e),
    })?;

    let mut contents = String::new();
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        BufReader::new(GzDecoder::new(BufReader::new(file))).read_to_string(&mut contents)?;
    } else {
        BufReader::new(file).read_to_string(&mut contents)?;
    }

    tracing::debug!(path = %path.display(), bytes = contents.len(), "loaded JSON document");
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn reads_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        fs::write(&path, r#"{"DeckName": "x"}"#).unwrap();

        let value = load_json(&path).unwrap();
        assert_eq!(value["DeckName"], "x");
    }

    #[test]
    fn reads_gzipped_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"DeckName": "zipped"}"#).unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();

        let value = load_json(&path).unwrap();
        assert_eq!(value["DeckName"], "zipped");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DecklistError::NotFound(_)));
    }

    #[test]
    fn directory_is_an_io_error_not_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json(dir.path()).unwrap_err();
        assert!(matches!(err, DecklistError::Io(_)), "got {err:?}");
    }

    #[test]
    fn garbage_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, DecklistError::Json(_)));
    }
}
