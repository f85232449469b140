//! Filesystem path operations and zip archive helpers.
//!
//! The crate has two halves:
//!
//! - [`fs_op`]: focused filesystem primitives (create, remove, copy, move,
//!   list) plus [`PathEntry`], a value wrapper around a path that makes the
//!   operation names uniform and reports failures through a small typed
//!   error taxonomy.
//! - [`archive`]: compress a set of files into a standard zip archive and
//!   extract one back out, streaming contents in fixed-size chunks.
//!
//! Everything is synchronous blocking I/O. A `PathEntry` holds no open
//! resources between calls; streams are opened, used and closed inside each
//! operation.

pub mod archive;
pub mod fs_op;

pub use crate::archive::{compress, decompress, try_compress, try_decompress, ArchiveError};
pub use crate::fs_op::entry::PathEntry;
pub use crate::fs_op::error::PathOpError;
