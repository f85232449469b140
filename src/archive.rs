//! Compress file sets into standard zip archives and extract them back out.
//!
//! Two surfaces are exposed for each direction: a fallible `try_*` function
//! returning [`ArchiveError`], and a boolean wrapper that logs the failure
//! with `tracing::warn!` and returns `false`. The boolean form matches
//! callers that only care about success; the `try_*` form tells them which
//! step failed.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::fs_op::create;
use crate::fs_op::entry::PathEntry;
use crate::fs_op::error::PathOpError;

const BUFFER_SIZE: usize = 1024;

/// Errors from archive operations.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Path(#[from] PathOpError),

    /// A compression source without a final path segment cannot be named
    /// inside the archive.
    #[error("source has no file name: {}", .0.display())]
    NoFileName(PathBuf),
}

/// Compress `sources` into a new zip archive at `dest`, returning whether
/// the whole operation succeeded.
///
/// On failure a warning is logged and a partial archive may be left at
/// `dest`. See [`try_compress`] for the structured-error form.
pub fn compress<P, S>(dest: P, sources: &[S]) -> bool
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    match try_compress(&dest, sources) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("compress into {} failed: {e}", dest.as_ref().display());
            false
        }
    }
}

/// Compress `sources` into a new zip archive at `dest`.
///
/// Entries are added in the given order and named by each source's final
/// path segment only. Entry names are not deduplicated: two sources sharing
/// a base name yield two entries with the same name, and the later one wins
/// on extraction. Content is streamed in [`BUFFER_SIZE`]-byte chunks.
pub fn try_compress<P, S>(dest: P, sources: &[S]) -> Result<(), ArchiveError>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    let out = File::create(dest.as_ref())?;
    let mut zip = ZipWriter::new(BufWriter::new(out));
    let options = FileOptions::default();

    let mut buf = [0u8; BUFFER_SIZE];
    for source in sources {
        let source = source.as_ref();
        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ArchiveError::NoFileName(source.to_path_buf()))?;
        tracing::debug!("adding {}", source.display());

        let mut reader =
            BufReader::with_capacity(BUFFER_SIZE, PathEntry::new(source).open_read()?);
        zip.start_file(name, options)?;
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            zip.write_all(&buf[..n])?;
        }
    }

    zip.finish()?.flush()?;
    Ok(())
}

/// Extract the zip archive at `src` into `dest_dir`, returning whether the
/// whole operation succeeded.
///
/// On failure a warning is logged and already-extracted files remain. See
/// [`try_decompress`] for the structured-error form.
pub fn decompress<P, Q>(src: P, dest_dir: Q) -> bool
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    match try_decompress(&src, &dest_dir) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                "decompress {} into {} failed: {e}",
                src.as_ref().display(),
                dest_dir.as_ref().display()
            );
            false
        }
    }
}

/// Extract every entry of the zip archive at `src` into `dest_dir`,
/// creating the directory (and missing ancestors) first.
///
/// Entries are written in stored order, each streamed in
/// [`BUFFER_SIZE`]-byte chunks to `dest_dir` joined with the stored entry
/// name **verbatim**. Names containing separators or `..` segments are not
/// sanitized, so an archive from an untrusted source can place files
/// outside `dest_dir`. Only extract archives you trust.
pub fn try_decompress<P, Q>(src: P, dest_dir: Q) -> Result<(), ArchiveError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let dest = dest_dir.as_ref();
    create::create_dir_all(dest)?;

    let input = PathEntry::new(src.as_ref()).open_read()?;
    let mut archive = ZipArchive::new(BufReader::new(input))?;

    let mut buf = [0u8; BUFFER_SIZE];
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let target = dest.join(entry.name());
        let mut out = File::create(&target)?;
        loop {
            let n = entry.read(&mut buf)?;
            if n == 0 {
                break;
            }
            out.write_all(&buf[..n])?;
        }
    }
    Ok(())
}
