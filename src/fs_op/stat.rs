use std::fs;
use std::path::Path;

/// What currently occupies a filesystem path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing exists at the path.
    Missing,
    /// An existing directory.
    Directory,
    /// An existing regular file.
    File,
    /// Exists but is neither a regular file nor a directory (socket, FIFO,
    /// device node, dangling symlink target, ...).
    Other,
}

impl PathType {
    /// Classify `path` with a single metadata call.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let meta = match fs::metadata(path.as_ref()) {
            Ok(m) => m,
            Err(_) => return PathType::Missing,
        };
        if meta.is_dir() {
            PathType::Directory
        } else if meta.is_file() {
            PathType::File
        } else {
            PathType::Other
        }
    }
}

/// `true` if anything exists at `path`.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) != PathType::Missing
}

/// `true` if `path` is an existing directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// `true` if `path` is an existing regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_path() {
        let td = tempdir().unwrap();
        let p = td.path().join("nothing_here");
        assert_eq!(PathType::of(&p), PathType::Missing);
        assert!(!exists(&p));
        assert!(!is_dir(&p));
        assert!(!is_file(&p));
    }

    #[test]
    fn file_and_directory() {
        let td = tempdir().unwrap();
        let f = td.path().join("f.txt");
        fs::write(&f, b"x").unwrap();
        assert_eq!(PathType::of(&f), PathType::File);
        assert!(exists(&f) && is_file(&f) && !is_dir(&f));

        let d = td.path().join("d");
        fs::create_dir(&d).unwrap();
        assert_eq!(PathType::of(&d), PathType::Directory);
        assert!(exists(&d) && is_dir(&d) && !is_file(&d));
    }
}
