//! Whole-file replacement through a sibling temp file.

use super::{StorageError, StorageResult};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces `path` with `content`.
///
/// The temp file lives in the target directory so the final rename stays on
/// one filesystem. Missing parent directories are created first. On any
/// failure the temp file is removed and the old target is left as it was.
pub fn write_atomic(path: &Path, content: &str) -> StorageResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|err| StorageError::io(path, err))?;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|err| StorageError::io(path, err))?;
    temp_file
        .write_all(content.as_bytes())
        .and_then(|()| temp_file.flush())
        .map_err(|err| StorageError::io(path, err))?;
    temp_file
        .persist(path)
        .map_err(|err| StorageError::io(path, err.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_atomic;

    #[test]
    fn creates_missing_parent_and_writes_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("items.json");

        write_atomic(&path, "[]").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn overwrite_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("type.json");
        std::fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn failure_reports_target_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("name.json");

        let err = write_atomic(&path, "\"x\"").unwrap_err();

        assert_eq!(err.path(), path.as_path());
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
    }
}
