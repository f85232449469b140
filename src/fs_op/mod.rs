//! Filesystem operation helpers.
//!
//! The actual primitives live in focused submodules (`create`, `remove`,
//! `copy`, `mv`, `list`, `stat`) so each can be tested independently.
//! [`entry::PathEntry`] wraps a single path and delegates to them, giving
//! callers one type with uniform operation names.

pub mod copy;
pub mod create;
pub mod entry;
pub mod error;
pub mod helpers;
pub mod list;
pub mod mv;
pub mod remove;
pub mod stat;

pub use entry::PathEntry;
pub use error::PathOpError;
