use std::fs;
use std::path::{Path, PathBuf};

use crate::fs_op::error::PathOpError;

/// List the child paths of `dir`.
///
/// Order follows the platform's native enumeration order and is not
/// guaranteed sorted. Fails with [`PathOpError::NotADirectory`] when `dir`
/// is not a directory and with [`PathOpError::Read`] when the directory
/// cannot be enumerated.
pub fn list_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, PathOpError> {
    list_dir_filtered(dir, |_| true)
}

/// Like [`list_dir`], keeping only entries whose file name passes `filter`.
pub fn list_dir_filtered<P, F>(dir: P, filter: F) -> Result<Vec<PathBuf>, PathOpError>
where
    P: AsRef<Path>,
    F: Fn(&str) -> bool,
{
    let d = dir.as_ref();
    if !d.is_dir() {
        return Err(PathOpError::NotADirectory(d.to_path_buf()));
    }

    let mut children = Vec::new();
    for entry in fs::read_dir(d).map_err(|e| PathOpError::read(d, e))? {
        let entry = entry.map_err(|e| PathOpError::read(d, e))?;
        if filter(&entry.file_name().to_string_lossy()) {
            children.push(entry.path());
        }
    }
    Ok(children)
}
