//! Path wrapper making file operation names uniform.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::fs_op::error::PathOpError;
use crate::fs_op::{copy, create, list, mv, remove, stat};

/// A filesystem location with uniform operation names.
///
/// `PathEntry` is a plain value: equality and hashing go by path value, and
/// no resource is held between calls. The filesystem itself is the only
/// state; a rename or delete changes what the wrapped path refers to, not
/// the wrapper. Operations report failures through [`PathOpError`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathEntry {
    path: PathBuf,
}

impl PathEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build an entry by joining individual path elements.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut path = PathBuf::new();
        for segment in segments {
            path.push(segment.as_ref());
        }
        Self { path }
    }

    /// Child of this entry named `name`.
    pub fn join(&self, name: impl AsRef<Path>) -> Self {
        Self {
            path: self.path.join(name),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.path.clone()
    }

    /// Final path segment, when it is valid UTF-8.
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    pub fn parent(&self) -> Option<PathEntry> {
        self.path.parent().map(PathEntry::new)
    }

    /// `true` if anything (file or directory) exists at the path.
    pub fn exists(&self) -> bool {
        stat::exists(&self.path)
    }

    /// Logical negation of [`exists`](Self::exists).
    pub fn is_not_exists(&self) -> bool {
        !self.exists()
    }

    pub fn is_file(&self) -> bool {
        stat::is_file(&self.path)
    }

    pub fn is_dir(&self) -> bool {
        stat::is_dir(&self.path)
    }

    /// File size in bytes; 0 when the path does not exist.
    pub fn size(&self) -> u64 {
        fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
    }

    /// Last modification time.
    pub fn modified(&self) -> Result<SystemTime, PathOpError> {
        fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map_err(|e| PathOpError::read(&self.path, e))
    }

    /// Create this directory and all missing ancestors. See
    /// [`create::create_dir_all`].
    pub fn create_directory(&self) -> Result<(), PathOpError> {
        create::create_dir_all(&self.path)
    }

    /// Create an empty file here, creating missing parents first. See
    /// [`create::create_file`].
    pub fn create_file(&self) -> Result<(), PathOpError> {
        create::create_file(&self.path)
    }

    /// Remove this path recursively; no-op when absent. See
    /// [`remove::remove_path`].
    pub fn delete(&self) -> Result<(), PathOpError> {
        remove::remove_path(&self.path)
    }

    /// Copy this path recursively to `dest`. See [`copy::copy_path`].
    pub fn copy_to(&self, dest: impl AsRef<Path>) -> Result<(), PathOpError> {
        copy::copy_path(&self.path, dest)
    }

    /// Move this path into `dest_dir`, optionally renaming it, and return
    /// the entry at the new location. See [`mv::move_path`].
    pub fn move_to(
        &self,
        dest_dir: impl AsRef<Path>,
        new_name: Option<&str>,
    ) -> Result<PathEntry, PathOpError> {
        mv::move_path(&self.path, dest_dir, new_name).map(PathEntry::new)
    }

    /// Rename within the parent directory and return the renamed entry.
    pub fn set_name(&self, new_name: &str) -> Result<PathEntry, PathOpError> {
        mv::rename_path(&self.path, new_name).map(PathEntry::new)
    }

    /// Child paths in native enumeration order. See [`list::list_dir`].
    pub fn list(&self) -> Result<Vec<PathBuf>, PathOpError> {
        list::list_dir(&self.path)
    }

    /// Child paths whose file name passes `filter`.
    pub fn list_filtered<F: Fn(&str) -> bool>(
        &self,
        filter: F,
    ) -> Result<Vec<PathBuf>, PathOpError> {
        list::list_dir_filtered(&self.path, filter)
    }

    /// Open the file for reading. Fails with [`PathOpError::NotFound`] when
    /// the path does not exist.
    pub fn open_read(&self) -> Result<File, PathOpError> {
        File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PathOpError::NotFound(self.path.clone()),
            _ => PathOpError::read(&self.path, e),
        })
    }

    /// Open the file for writing, truncating unless `append` is set.
    ///
    /// A failed open is reported as [`PathOpError::AlreadyExists`]; this
    /// quirk is part of the documented contract.
    pub fn open_write(&self, append: bool) -> Result<File, PathOpError> {
        let mut opts = OpenOptions::new();
        opts.write(true).create(true);
        if append {
            opts.append(true);
        } else {
            opts.truncate(true);
        }
        opts.open(&self.path)
            .map_err(|_| PathOpError::AlreadyExists(self.path.clone()))
    }

    /// Buffered reader over the file contents.
    pub fn reader(&self) -> Result<BufReader<File>, PathOpError> {
        self.open_read().map(BufReader::new)
    }

    /// Buffered writer over the file. A failed open is reported as
    /// [`PathOpError::NotFound`]; this quirk is part of the documented
    /// contract.
    pub fn writer(&self, append: bool) -> Result<BufWriter<File>, PathOpError> {
        let mut opts = OpenOptions::new();
        opts.write(true).create(true);
        if append {
            opts.append(true);
        } else {
            opts.truncate(true);
        }
        opts.open(&self.path)
            .map(BufWriter::new)
            .map_err(|_| PathOpError::NotFound(self.path.clone()))
    }
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for PathEntry {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for PathEntry {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl From<&Path> for PathEntry {
    fn from(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::tempdir;

    #[test]
    fn equality_is_by_path_value() {
        let a = PathEntry::new("/tmp/x");
        let b = PathEntry::new(PathBuf::from("/tmp/x"));
        assert_eq!(a, b);
        assert_ne!(a, PathEntry::new("/tmp/y"));
    }

    #[test]
    fn from_segments_joins_elements() {
        let td = tempdir().unwrap();
        let entry = PathEntry::from_segments([td.path().to_str().unwrap(), "sub", "f.txt"]);
        assert_eq!(entry.as_path(), td.path().join("sub").join("f.txt"));
    }

    #[test]
    fn is_not_exists_is_the_negation_of_exists() {
        let td = tempdir().unwrap();
        let entry = PathEntry::new(td.path().join("f.txt"));
        assert!(!entry.exists());
        assert!(entry.is_not_exists());

        entry.create_file().unwrap();
        assert!(entry.exists());
        assert!(!entry.is_not_exists());
    }

    #[test]
    fn open_read_missing_is_not_found() {
        let td = tempdir().unwrap();
        let entry = PathEntry::new(td.path().join("absent"));
        let err = entry.open_read().unwrap_err();
        assert!(matches!(err, PathOpError::NotFound(p) if p == entry.to_path_buf()));
    }

    #[test]
    fn write_then_read_through_streams() {
        let td = tempdir().unwrap();
        let entry = PathEntry::new(td.path().join("f.txt"));

        entry.open_write(false).unwrap().write_all(b"hello").unwrap();
        entry.open_write(true).unwrap().write_all(b" world").unwrap();

        let mut contents = String::new();
        entry.reader().unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "hello world");
    }

    #[test]
    fn size_and_name() {
        let td = tempdir().unwrap();
        let entry = PathEntry::new(td.path().join("sized.bin"));
        assert_eq!(entry.size(), 0);
        std::fs::write(entry.as_path(), [0u8; 42]).unwrap();
        assert_eq!(entry.size(), 42);
        assert_eq!(entry.name(), Some("sized.bin"));
    }

    #[test]
    fn set_name_renames_in_place() {
        let td = tempdir().unwrap();
        let entry = PathEntry::new(td.path().join("before.txt"));
        entry.create_file().unwrap();

        let renamed = entry.set_name("after.txt").unwrap();
        assert_eq!(renamed.as_path(), td.path().join("after.txt"));
        assert!(renamed.exists());
        assert!(entry.is_not_exists());
    }
}
