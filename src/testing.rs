//! Test utilities for database setup.
//!
//! Reuses the authoritative schema initialization so tests never carry their
//! own copy of the tables.

use rusqlite::Connection;
use tempfile::TempDir;

/// Migrated mistake database in a temporary directory.
///
/// The directory and the file are removed when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Connection with the full schema (all migrations)
    pub conn: Connection,
}

impl TestEnv {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let conn = Connection::open(temp.path().join("hifz.db"))?;
        crate::db::schema::run_migrations(&conn)?;

        Ok(Self { temp, conn })
    }
}

/// In-memory mistake for the pure analysis tests
pub fn mistake(
  id: i64,
  (surah, ayah): (u8, u16),
  word_index: u32,
  target: crate::domain::MistakeTarget,
  error_count: u32,
) -> crate::domain::Mistake {
  let now = chrono::Utc::now();
  crate::domain::Mistake {
    id,
    student_id: 1,
    verse: crate::domain::VerseRef::new(surah, ayah).expect("valid test verse"),
    word_index,
    word_text: format!("w{}", word_index),
    target,
    error_count,
    occurrences: Vec::new(),
    created_at: now,
    updated_at: now,
  }
}

/// Occurrence in class `class_id` held on `date` (YYYY-MM-DD)
pub fn occurrence(class_id: i64, date: &str) -> crate::domain::Occurrence {
  crate::domain::Occurrence {
    class_id,
    occurred_at: chrono::Utc::now(),
    class_date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"),
    class_day: "Monday".to_string(),
  }
}
