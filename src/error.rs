//! Engine error taxonomy.
//!
//! Every failure is local and recoverable; callers translate these into
//! whatever their surface needs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("Invalid page {page}: expected 1..={page_count}")]
  InvalidPage { page: u32, page_count: u16 },

  #[error("Invalid verse reference {surah}:{ayah}")]
  InvalidVerseRef { surah: u32, ayah: u32 },

  #[error("Mistake {0} not found")]
  NotFound(i64),

  #[error("Duplicate mistake key: {0}")]
  DuplicateKey(String),

  #[error("Invalid page anchor table: {0}")]
  InvalidAnchorTable(String),

  #[error("Database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("Database unavailable")]
  Unavailable,
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
  pub fn invalid_verse(surah: impl Into<u32>, ayah: impl Into<u32>) -> Self {
    EngineError::InvalidVerseRef {
      surah: surah.into(),
      ayah: ayah.into(),
    }
  }

  pub fn anchor_table<S: Into<String>>(msg: S) -> Self {
    EngineError::InvalidAnchorTable(msg.into())
  }
}
