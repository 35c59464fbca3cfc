//! Quran page locator and recitation mistake notebook.
//!
//! - [`mushaf`]: Madani 604-page layout and verse/page lookups
//! - [`text`]: harakat-aware word segmentation for letter-level marks
//! - [`db`]: SQLite mistake store with per-class occurrence history
//! - [`analysis`]: severity levels, phrase groups and session buckets
//! - [`services`]: the [`Notebook`] facade tying them together

pub mod analysis;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod mushaf;
pub mod paths;
pub mod services;
pub mod text;

#[cfg(test)]
pub mod testing;

pub use domain::{ClassSession, MarkOutcome, Mistake, MistakeMark, MistakeTarget, Portion, PortionKind, VerseRef};
pub use error::{EngineError, Result};
pub use mushaf::{PageIndex, PageRange};
pub use services::Notebook;
