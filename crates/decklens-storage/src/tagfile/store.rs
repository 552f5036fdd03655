//! Tag-file persistence: full read, atomic rewrite.
//!
//! The access discipline is full read, full in-memory merge, full atomic
//! rewrite, once per run. The rewrite lands in a temp file in the
//! destination directory and is renamed over the target, so a failed run
//! never leaves a partially written catalog.

use std::io;
use std::path::{Path, PathBuf};

use decklens_core::errors::TagFileError;

/// Read the tag file. A missing file is an empty catalog, not an error.
pub fn read_tag_file(path: &Path) -> Result<String, TagFileError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(TagFileError::ReadFailed {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Atomically replace the tag file with `content`.
pub fn write_tag_file(path: &Path, content: &str) -> Result<(), TagFileError> {
    let wrap = |source: io::Error| TagFileError::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(wrap)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("tagged_cards.txt");
    let tmp_path = dir.join(format!(".{file_name}.tmp"));

    std::fs::write(&tmp_path, content).map_err(wrap)?;
    std::fs::rename(&tmp_path, path).map_err(wrap)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "tag file rewritten");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let content = read_tag_file(&dir.path().join("absent.txt")).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tagged_cards.txt");
        write_tag_file(&path, "1 Sol Ring #1_core\n").unwrap();
        assert_eq!(read_tag_file(&path).unwrap(), "1 Sol Ring #1_core\n");
    }

    #[test]
    fn test_rewrite_replaces_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tagged_cards.txt");
        write_tag_file(&path, "old content that is much longer\n").unwrap();
        write_tag_file(&path, "new\n").unwrap();
        assert_eq!(read_tag_file(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tagged_cards.txt");
        write_tag_file(&path, "1 Sol Ring #1_core\n").unwrap();
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_creates_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tagged_cards.txt");
        write_tag_file(&path, "1 Sol Ring #1_core\n").unwrap();
        assert_eq!(read_tag_file(&path).unwrap(), "1 Sol Ring #1_core\n");
    }
}
