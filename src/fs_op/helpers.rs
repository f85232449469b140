use std::fs;
use std::path::Path;

use crate::fs_op::error::PathOpError;

/// Ensure the parent directory of `p` exists, creating missing ancestors.
///
/// A path without a parent component (e.g. `/`) is left alone.
pub fn ensure_parent_exists(p: &Path) -> Result<(), PathOpError> {
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent).map_err(|e| PathOpError::write(parent, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_ancestors() {
        let td = tempdir().unwrap();
        let target = td.path().join("a/b/c/file.txt");
        ensure_parent_exists(&target).unwrap();
        assert!(td.path().join("a/b/c").is_dir());
        assert!(!target.exists(), "only the parent chain should be created");
    }

    #[test]
    fn existing_parent_is_ok() {
        let td = tempdir().unwrap();
        ensure_parent_exists(&td.path().join("file.txt")).unwrap();
    }
}
