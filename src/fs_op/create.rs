use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::fs_op::error::PathOpError;
use crate::fs_op::helpers::ensure_parent_exists;

/// Create the directory at `path` together with all missing ancestors.
///
/// Succeeds without touching anything when the directory already exists.
/// Fails with [`PathOpError::AlreadyExists`] when a non-directory occupies
/// the path and with [`PathOpError::Write`] on any other failure.
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<(), PathOpError> {
    let p = path.as_ref();
    if p.exists() && !p.is_dir() {
        return Err(PathOpError::AlreadyExists(p.to_path_buf()));
    }
    fs::create_dir_all(p).map_err(|e| PathOpError::write(p, e))
}

/// Create an empty file at `path`, creating missing parent directories
/// first.
///
/// Fails with [`PathOpError::AlreadyExists`] when anything (file or
/// directory) already occupies the path, and with [`PathOpError::Write`]
/// when parent creation or the file creation itself fails.
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<(), PathOpError> {
    let p = path.as_ref();
    if p.exists() {
        return Err(PathOpError::AlreadyExists(p.to_path_buf()));
    }
    ensure_parent_exists(p)?;
    match OpenOptions::new().write(true).create_new(true).open(p) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            Err(PathOpError::AlreadyExists(p.to_path_buf()))
        }
        Err(e) => Err(PathOpError::write(p, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_file_with_missing_parents() {
        let td = tempdir().unwrap();
        let file = td.path().join("a/b/f.txt");
        create_file(&file).unwrap();
        assert!(file.is_file());
    }

    #[test]
    fn create_file_twice_fails() {
        let td = tempdir().unwrap();
        let file = td.path().join("f.txt");
        create_file(&file).unwrap();
        let err = create_file(&file).unwrap_err();
        assert!(matches!(err, PathOpError::AlreadyExists(p) if p == file));
    }

    #[test]
    fn create_file_over_directory_fails() {
        let td = tempdir().unwrap();
        let dir = td.path().join("d");
        fs::create_dir(&dir).unwrap();
        let err = create_file(&dir).unwrap_err();
        assert!(matches!(err, PathOpError::AlreadyExists(_)));
    }

    #[test]
    fn create_dir_is_idempotent() {
        let td = tempdir().unwrap();
        let dir = td.path().join("x/y");
        create_dir_all(&dir).unwrap();
        create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn create_dir_over_file_fails() {
        let td = tempdir().unwrap();
        let file = td.path().join("f");
        fs::write(&file, b"x").unwrap();
        let err = create_dir_all(&file).unwrap_err();
        assert!(matches!(err, PathOpError::AlreadyExists(p) if p == file));
    }
}
