//! JSON document helpers on top of plain files.

use super::{write_atomic, StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

/// Reads and decodes one JSON document.
///
/// Returns `Ok(None)` when the file does not exist or holds only whitespace;
/// callers decide whether that means "empty" or "precondition failed".
pub fn read_document<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(StorageError::io(path, err)),
    };
    if content.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|err| StorageError::json(path, err))
}

/// Encodes `value` as pretty JSON and atomically replaces `path` with it.
pub fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> StorageResult<()> {
    let mut content =
        serde_json::to_string_pretty(value).map_err(|err| StorageError::json(path, err))?;
    content.push('\n');
    write_atomic(path, &content)
}

#[cfg(test)]
mod tests {
    use super::{read_document, write_document};
    use crate::storage::StorageError;

    #[test]
    fn missing_and_blank_files_read_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let blank = dir.path().join("blank.json");
        std::fs::write(&blank, "  \n").unwrap();

        assert!(read_document::<Vec<String>>(&missing).unwrap().is_none());
        assert!(read_document::<Vec<String>>(&blank).unwrap().is_none());
    }

    #[test]
    fn document_written_can_be_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("type.json");
        let labels = vec!["Stamps".to_string(), "Coins".to_string()];

        write_document(&path, &labels).unwrap();

        assert_eq!(read_document::<Vec<String>>(&path).unwrap(), Some(labels));
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("type.json");
        std::fs::write(&path, "[\"Stamps\",").unwrap();

        let err = read_document::<Vec<String>>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
    }
}
