use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use walkdir::WalkDir;

use crate::fs_op::error::PathOpError;
use crate::fs_op::helpers::ensure_parent_exists;

const BUFFER_SIZE: usize = 1024;

/// Copy `src` to `dst` recursively.
///
/// When `src` is a directory its tree is mirrored under `dst`: nested
/// directories are created and regular files are streamed over in
/// [`BUFFER_SIZE`]-byte chunks. Destination child paths are built by
/// joining the relative path of each entry onto `dst`. Symlinks and other
/// special file types inside a tree are skipped. Any I/O error surfaces as
/// [`PathOpError::Write`]; file handles are closed on success and error
/// paths alike.
pub fn copy_path<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<(), PathOpError> {
    let s = src.as_ref();
    let d = dst.as_ref();

    if s.is_dir() {
        fs::create_dir_all(d).map_err(|e| PathOpError::write(d, e))?;
        for entry in WalkDir::new(s).min_depth(1).follow_links(false) {
            let entry = entry.map_err(|e| PathOpError::write(s, e.into()))?;
            let rel = entry
                .path()
                .strip_prefix(s)
                .map_err(|e| PathOpError::write(s, io::Error::other(e)))?;
            let target = d.join(rel);
            let ft = entry.file_type();
            if ft.is_dir() {
                fs::create_dir_all(&target).map_err(|e| PathOpError::write(&target, e))?;
            } else if ft.is_file() {
                copy_file(entry.path(), &target)?;
            }
        }
        Ok(())
    } else {
        copy_file(s, d)
    }
}

/// Stream a single regular file from `src` to `dst` in fixed-size chunks,
/// creating the destination's parent directory first.
fn copy_file(src: &Path, dst: &Path) -> Result<(), PathOpError> {
    ensure_parent_exists(dst)?;
    let mut reader = File::open(src).map_err(|e| PathOpError::write(src, e))?;
    let mut writer = File::create(dst).map_err(|e| PathOpError::write(dst, e))?;

    let mut buf = [0u8; BUFFER_SIZE];
    loop {
        let n = reader
            .read(&mut buf)
            .map_err(|e| PathOpError::write(src, e))?;
        if n == 0 {
            break;
        }
        writer
            .write_all(&buf[..n])
            .map_err(|e| PathOpError::write(dst, e))?;
    }
    Ok(())
}
