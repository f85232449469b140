use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs_op::error::PathOpError;

/// Rename a path within its parent directory and return the new location.
pub fn rename_path<P: AsRef<Path>>(path: P, new_name: &str) -> Result<PathBuf, PathOpError> {
    let p = path.as_ref();
    let parent = p
        .parent()
        .ok_or_else(|| PathOpError::write(p, io::Error::other("path has no parent")))?;
    let dest = parent.join(new_name);
    fs::rename(p, &dest).map_err(|e| PathOpError::write(p, e))?;
    Ok(dest)
}

/// Move `src` into the directory `dest_dir`, keeping its base name, then
/// optionally rename it to `new_name`. Returns the final location.
///
/// The move is a single `rename` syscall; there is no copy fallback, so
/// moving across filesystems fails with [`PathOpError::Write`].
pub fn move_path<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dest_dir: Q,
    new_name: Option<&str>,
) -> Result<PathBuf, PathOpError> {
    let s = src.as_ref();
    let name = s
        .file_name()
        .ok_or_else(|| PathOpError::write(s, io::Error::other("path has no file name")))?;
    let target = dest_dir.as_ref().join(name);
    fs::rename(s, &target).map_err(|e| PathOpError::write(s, e))?;

    match new_name {
        Some(n) => rename_path(&target, n),
        None => Ok(target),
    }
}
