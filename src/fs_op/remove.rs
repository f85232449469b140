use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::fs_op::error::PathOpError;

/// Remove the file or directory at `path`.
///
/// Directories are removed recursively, children before their parent. A
/// non-existent path is a no-op so callers do not need to check for
/// existence first. Fails with [`PathOpError::Write`] when any removal step
/// fails; whatever was already deleted stays deleted (no rollback).
pub fn remove_path<P: AsRef<Path>>(path: P) -> Result<(), PathOpError> {
    let p = path.as_ref();

    if !p.exists() {
        return Ok(());
    }

    if p.is_dir() {
        // contents_first yields children before the directories that hold
        // them, so every remove_dir sees an already-emptied directory.
        for entry in WalkDir::new(p).contents_first(true).follow_links(false) {
            let entry = entry.map_err(|e| PathOpError::write(p, e.into()))?;
            if entry.file_type().is_dir() {
                fs::remove_dir(entry.path())
                    .map_err(|e| PathOpError::write(entry.path(), e))?;
            } else {
                fs::remove_file(entry.path())
                    .map_err(|e| PathOpError::write(entry.path(), e))?;
            }
        }
    } else {
        fs::remove_file(p).map_err(|e| PathOpError::write(p, e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn remove_file_and_nested_dir() {
        let td = tempdir().unwrap();
        let dir = td.path().join("a/b");
        std::fs::create_dir_all(&dir).unwrap();
        let f = dir.join("f.txt");
        std::fs::write(&f, b"x").unwrap();

        remove_path(&f).unwrap();
        assert!(!f.exists());

        std::fs::write(dir.join("g.txt"), b"y").unwrap();
        remove_path(td.path().join("a")).unwrap();
        assert!(!td.path().join("a").exists());
    }

    #[test]
    fn remove_nonexistent_is_noop() {
        let td = tempdir().unwrap();
        let p = td.path().join("missing");
        assert!(remove_path(&p).is_ok());
    }
}
