use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Complete schema for new databases; migrations below upgrade older files
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS mistakes (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      student_id INTEGER NOT NULL,
      surah_number INTEGER NOT NULL,
      ayah_number INTEGER NOT NULL,
      word_index INTEGER NOT NULL,
      word_text TEXT NOT NULL,
      -- NULL = whole-word mistake
      char_index INTEGER,
      error_count INTEGER NOT NULL DEFAULT 1,
      created_at TEXT NOT NULL,
      updated_at TEXT
    );

    CREATE TABLE IF NOT EXISTS mistake_occurrences (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      mistake_id INTEGER NOT NULL,
      class_id INTEGER NOT NULL,
      occurred_at TEXT NOT NULL,
      -- Denormalized from the class so history needs no join
      class_date TEXT NOT NULL,
      class_day TEXT NOT NULL,
      FOREIGN KEY (mistake_id) REFERENCES mistakes(id) ON DELETE CASCADE
    );

    -- One row per location; NULL char_index must collide with NULL
    CREATE UNIQUE INDEX IF NOT EXISTS idx_mistakes_location
      ON mistakes(student_id, surah_number, ayah_number, word_index, IFNULL(char_index, -1));
    CREATE INDEX IF NOT EXISTS idx_mistakes_student_surah ON mistakes(student_id, surah_number);
    CREATE INDEX IF NOT EXISTS idx_occurrences_mistake ON mistake_occurrences(mistake_id);
    CREATE INDEX IF NOT EXISTS idx_occurrences_class ON mistake_occurrences(class_id);
    "#,
  )?;

  // ============================================================
  // MIGRATIONS FOR EXISTING DATABASES
  // No-ops for new databases (columns already exist)
  // ============================================================

  // Migration: track last modification for sync/export
  let had_updated_at = column_exists(conn, "mistakes", "updated_at");
  add_column_if_missing(conn, "mistakes", "updated_at", "TEXT")?;

  // Backfill updated_at only if we just added the column
  if !had_updated_at {
    conn.execute(
      "UPDATE mistakes SET updated_at = created_at WHERE updated_at IS NULL",
      [],
    )?;
  }

  Ok(())
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
  conn
    .prepare(&format!("SELECT {} FROM {} LIMIT 1", column, table))
    .is_ok()
}

/// Add a column if it doesn't already exist
fn add_column_if_missing(conn: &Connection, table: &str, column: &str, column_def: &str) -> Result<()> {
  if !column_exists(conn, table, column) {
    tracing::info!("Migrating: adding {}.{}", table, column);
    conn.execute(
      &format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, column_def),
      [],
    )?;
  }
  Ok(())
}
