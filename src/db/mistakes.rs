//! Mistake rows and their per-class occurrence history.
//!
//! A row is keyed by (student, surah, ayah, word, char-or-whole-word). Marks
//! upsert by that key inside one transaction so the read, the increment and
//! the occurrence append cannot interleave with another mark on the same key.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use crate::domain::{
  MarkOutcome, Mistake, MistakeKey, MistakeMark, MistakeTarget, Occurrence, VerseRef,
};
use crate::error::{EngineError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

const MISTAKE_COLUMNS: &str = "id, student_id, surah_number, ayah_number, word_index, word_text, \
                               char_index, error_count, created_at, updated_at";

/// Record a mistake: create it at the location or bump its count.
pub fn mark_mistake(conn: &Connection, mark: &MistakeMark) -> Result<MarkOutcome> {
  let verse = VerseRef::new(mark.surah, mark.ayah)?;
  let key = MistakeKey {
    student_id: mark.student_id,
    verse,
    word_index: mark.word_index,
    target: mark.target,
  };
  let now = Utc::now().to_rfc3339();

  let tx = conn.unchecked_transaction()?;

  let existing: Option<(i64, u32)> = tx
    .query_row(
      r#"
    SELECT id, error_count FROM mistakes
    WHERE student_id = ?1 AND surah_number = ?2 AND ayah_number = ?3
      AND word_index = ?4 AND char_index IS ?5
    "#,
      params![
        key.student_id,
        verse.surah(),
        verse.ayah(),
        key.word_index,
        key.target.char_index(),
      ],
      |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()?;

  let outcome = match existing {
    Some((id, count)) => {
      tx.execute(
        "UPDATE mistakes SET error_count = error_count + 1, updated_at = ?1 WHERE id = ?2",
        params![now, id],
      )?;
      MarkOutcome {
        mistake_id: id,
        error_count: count + 1,
        created: false,
      }
    }
    None => {
      tx.execute(
        r#"
      INSERT INTO mistakes (student_id, surah_number, ayah_number, word_index, word_text,
                            char_index, error_count, created_at, updated_at)
      VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)
      "#,
        params![
          key.student_id,
          verse.surah(),
          verse.ayah(),
          key.word_index,
          mark.word_text,
          key.target.char_index(),
          now,
        ],
      )
      .map_err(|e| duplicate_or(e, &key))?;
      MarkOutcome {
        mistake_id: tx.last_insert_rowid(),
        error_count: 1,
        created: true,
      }
    }
  };

  if let Some(class) = &mark.class {
    tx.execute(
      r#"
    INSERT INTO mistake_occurrences (mistake_id, class_id, occurred_at, class_date, class_day)
    VALUES (?1, ?2, ?3, ?4, ?5)
    "#,
      params![
        outcome.mistake_id,
        class.id,
        now,
        class.date.format(DATE_FORMAT).to_string(),
        class.day,
      ],
    )?;
  }

  tx.commit()?;

  tracing::info!(
    "Marked mistake {} ({}) count={}",
    outcome.mistake_id,
    key,
    outcome.error_count
  );
  Ok(outcome)
}

/// Delete a mistake and its whole history.
pub fn remove_mistake(conn: &Connection, id: i64) -> Result<()> {
  let tx = conn.unchecked_transaction()?;
  tx.execute("DELETE FROM mistake_occurrences WHERE mistake_id = ?1", params![id])?;
  let deleted = tx.execute("DELETE FROM mistakes WHERE id = ?1", params![id])?;
  if deleted == 0 {
    return Err(EngineError::NotFound(id));
  }
  tx.commit()?;

  tracing::info!("Removed mistake {}", id);
  Ok(())
}

/// Take back the most recent occurrence and one count.
///
/// The mistake is deleted when its count reaches zero. Returns the remaining count.
pub fn undo_last_occurrence(conn: &Connection, id: i64) -> Result<u32> {
  let tx = conn.unchecked_transaction()?;

  let count: u32 = tx
    .query_row(
      "SELECT error_count FROM mistakes WHERE id = ?1",
      params![id],
      |row| row.get(0),
    )
    .optional()?
    .ok_or(EngineError::NotFound(id))?;

  tx.execute(
    r#"
    DELETE FROM mistake_occurrences WHERE id = (
      SELECT id FROM mistake_occurrences
      WHERE mistake_id = ?1
      ORDER BY occurred_at DESC, id DESC
      LIMIT 1
    )
    "#,
    params![id],
  )?;

  let remaining = if count <= 1 {
    tx.execute("DELETE FROM mistake_occurrences WHERE mistake_id = ?1", params![id])?;
    tx.execute("DELETE FROM mistakes WHERE id = ?1", params![id])?;
    0
  } else {
    tx.execute(
      "UPDATE mistakes SET error_count = error_count - 1, updated_at = ?1 WHERE id = ?2",
      params![Utc::now().to_rfc3339(), id],
    )?;
    count - 1
  };

  tx.commit()?;

  tracing::info!("Undid last occurrence of mistake {} (remaining {})", id, remaining);
  Ok(remaining)
}

pub fn get_mistake(conn: &Connection, id: i64) -> Result<Option<Mistake>> {
  let mut stmt = conn.prepare(&format!("SELECT {} FROM mistakes WHERE id = ?1", MISTAKE_COLUMNS))?;

  let mut rows = stmt.query(params![id])?;
  match rows.next()? {
    Some(row) => {
      let mut mistake = row_to_mistake(row)?;
      mistake.occurrences = get_occurrences(conn, mistake.id)?;
      Ok(Some(mistake))
    }
    None => Ok(None),
  }
}

/// All of a student's mistakes, in reading order
pub fn list_mistakes(conn: &Connection, student_id: i64) -> Result<Vec<Mistake>> {
  let sql = format!(
    r#"
    SELECT {} FROM mistakes
    WHERE student_id = ?1
    ORDER BY surah_number, ayah_number, word_index, IFNULL(char_index, -1)
    "#,
    MISTAKE_COLUMNS
  );
  query_with_occurrences(conn, &sql, params![student_id])
}

/// A student's mistakes within one surah
pub fn list_surah_mistakes(conn: &Connection, student_id: i64, surah: u8) -> Result<Vec<Mistake>> {
  let sql = format!(
    r#"
    SELECT {} FROM mistakes
    WHERE student_id = ?1 AND surah_number = ?2
    ORDER BY ayah_number, word_index, IFNULL(char_index, -1)
    "#,
    MISTAKE_COLUMNS
  );
  query_with_occurrences(conn, &sql, params![student_id, surah])
}

/// A student's mistakes between two verses, inclusive
pub fn list_span_mistakes(
  conn: &Connection,
  student_id: i64,
  start: VerseRef,
  end: VerseRef,
) -> Result<Vec<Mistake>> {
  let sql = format!(
    r#"
    SELECT {} FROM mistakes
    WHERE student_id = ?1
      AND (surah_number, ayah_number) >= (?2, ?3)
      AND (surah_number, ayah_number) <= (?4, ?5)
    ORDER BY surah_number, ayah_number, word_index, IFNULL(char_index, -1)
    "#,
    MISTAKE_COLUMNS
  );
  query_with_occurrences(
    conn,
    &sql,
    params![student_id, start.surah(), start.ayah(), end.surah(), end.ayah()],
  )
}

/// Occurrences of one mistake, oldest class first
pub fn get_occurrences(conn: &Connection, mistake_id: i64) -> Result<Vec<Occurrence>> {
  let mut stmt = conn.prepare_cached(
    r#"
    SELECT class_id, occurred_at, class_date, class_day
    FROM mistake_occurrences
    WHERE mistake_id = ?1
    ORDER BY class_date ASC, occurred_at ASC, id ASC
    "#,
  )?;

  let occurrences = stmt
    .query_map(params![mistake_id], |row| {
      let occurred_at: String = row.get(1)?;
      let class_date: String = row.get(2)?;
      Ok(Occurrence {
        class_id: row.get(0)?,
        occurred_at: parse_timestamp(&occurred_at),
        class_date: NaiveDate::parse_from_str(&class_date, DATE_FORMAT)
          .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?,
        class_day: row.get(3)?,
      })
    })?
    .collect::<rusqlite::Result<Vec<_>>>()?;

  Ok(occurrences)
}

fn query_with_occurrences(
  conn: &Connection,
  sql: &str,
  params: &[&dyn rusqlite::ToSql],
) -> Result<Vec<Mistake>> {
  let mut stmt = conn.prepare(sql)?;
  let mut mistakes = stmt
    .query_map(params, row_to_mistake)?
    .collect::<rusqlite::Result<Vec<_>>>()?;

  for mistake in &mut mistakes {
    mistake.occurrences = get_occurrences(conn, mistake.id)?;
  }

  tracing::debug!("Loaded {} mistakes", mistakes.len());
  Ok(mistakes)
}

fn row_to_mistake(row: &Row) -> rusqlite::Result<Mistake> {
  let surah: u8 = row.get(2)?;
  let ayah: u16 = row.get(3)?;
  let verse = VerseRef::new(surah, ayah)
    .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(3, i64::from(ayah)))?;
  let char_index: Option<u32> = row.get(6)?;
  let created_at_str: String = row.get(8)?;
  let updated_at_str: Option<String> = row.get(9)?;

  let created_at = parse_timestamp(&created_at_str);
  Ok(Mistake {
    id: row.get(0)?,
    student_id: row.get(1)?,
    verse,
    word_index: row.get(4)?,
    word_text: row.get(5)?,
    target: MistakeTarget::from_char_index(char_index),
    error_count: row.get(7)?,
    occurrences: Vec::new(),
    created_at,
    updated_at: updated_at_str
      .as_deref()
      .map(parse_timestamp)
      .unwrap_or(created_at),
  })
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .unwrap_or_else(|_| Utc::now())
}

fn duplicate_or(err: rusqlite::Error, key: &MistakeKey) -> EngineError {
  match err {
    rusqlite::Error::SqliteFailure(ref e, _) if e.code == ErrorCode::ConstraintViolation => {
      EngineError::DuplicateKey(key.to_string())
    }
    other => other.into(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::ClassSession;
  use crate::testing::TestEnv;

  fn class(id: i64, date: &str, day: &str) -> ClassSession {
    ClassSession::new(id, NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(), day)
  }

  #[test]
  fn test_first_mark_creates_row() {
    let env = TestEnv::new().unwrap();
    let mark = MistakeMark::whole_word(1, 2, 3, 4, "word").in_class(class(10, "2025-01-06", "Monday"));

    let outcome = mark_mistake(&env.conn, &mark).unwrap();
    assert!(outcome.created);
    assert_eq!(outcome.error_count, 1);

    let mistake = get_mistake(&env.conn, outcome.mistake_id).unwrap().unwrap();
    assert_eq!(mistake.verse, VerseRef::new(2, 3).unwrap());
    assert_eq!(mistake.word_index, 4);
    assert_eq!(mistake.word_text, "word");
    assert_eq!(mistake.target, MistakeTarget::WholeWord);
    assert_eq!(mistake.occurrences.len(), 1);
    assert_eq!(mistake.occurrences[0].class_id, 10);
    assert_eq!(mistake.occurrences[0].class_day, "Monday");
  }

  #[test]
  fn test_three_marks_in_three_classes() {
    let env = TestEnv::new().unwrap();
    let classes = [
      class(1, "2025-01-06", "Monday"),
      class(2, "2025-01-08", "Wednesday"),
      class(3, "2025-01-10", "Friday"),
    ];

    let mut last = None;
    for c in classes {
      let mark = MistakeMark::whole_word(5, 1, 2, 0, "w").in_class(c);
      last = Some(mark_mistake(&env.conn, &mark).unwrap());
    }
    let last = last.unwrap();
    assert_eq!(last.error_count, 3);
    assert!(!last.created);

    let mistakes = list_mistakes(&env.conn, 5).unwrap();
    assert_eq!(mistakes.len(), 1);
    assert_eq!(mistakes[0].error_count, 3);
    let class_ids: Vec<i64> = mistakes[0].occurrences.iter().map(|o| o.class_id).collect();
    assert_eq!(class_ids, vec![1, 2, 3]);
  }

  #[test]
  fn test_occurrences_ordered_by_class_date() {
    let env = TestEnv::new().unwrap();
    // Marked late for an earlier class
    mark_mistake(&env.conn, &MistakeMark::whole_word(1, 1, 1, 0, "w").in_class(class(9, "2025-02-01", "Saturday")))
      .unwrap();
    mark_mistake(&env.conn, &MistakeMark::whole_word(1, 1, 1, 0, "w").in_class(class(4, "2025-01-15", "Wednesday")))
      .unwrap();

    let mistake = &list_mistakes(&env.conn, 1).unwrap()[0];
    let class_ids: Vec<i64> = mistake.occurrences.iter().map(|o| o.class_id).collect();
    assert_eq!(class_ids, vec![4, 9]);
  }

  #[test]
  fn test_whole_word_and_char_marks_are_separate_rows() {
    let env = TestEnv::new().unwrap();
    let base = MistakeMark::whole_word(1, 2, 2, 1, "\u{0628}");
    mark_mistake(&env.conn, &base).unwrap();
    mark_mistake(&env.conn, &base.clone().at_char(0)).unwrap();
    mark_mistake(&env.conn, &base.clone().at_char(2)).unwrap();
    mark_mistake(&env.conn, &base.clone().at_char(2)).unwrap();

    let mistakes = list_mistakes(&env.conn, 1).unwrap();
    let summary: Vec<(MistakeTarget, u32)> = mistakes.iter().map(|m| (m.target, m.error_count)).collect();
    assert_eq!(
      summary,
      vec![
        (MistakeTarget::WholeWord, 1),
        (MistakeTarget::AtChar(0), 1),
        (MistakeTarget::AtChar(2), 2),
      ]
    );
  }

  #[test]
  fn test_mark_without_class_counts_without_occurrence() {
    let env = TestEnv::new().unwrap();
    let mark = MistakeMark::whole_word(1, 1, 1, 0, "w");
    mark_mistake(&env.conn, &mark).unwrap();
    let outcome = mark_mistake(&env.conn, &mark).unwrap();

    assert_eq!(outcome.error_count, 2);
    let mistake = get_mistake(&env.conn, outcome.mistake_id).unwrap().unwrap();
    assert!(mistake.occurrences.is_empty());
  }

  #[test]
  fn test_students_do_not_share_rows() {
    let env = TestEnv::new().unwrap();
    mark_mistake(&env.conn, &MistakeMark::whole_word(1, 1, 1, 0, "w")).unwrap();
    let other = mark_mistake(&env.conn, &MistakeMark::whole_word(2, 1, 1, 0, "w")).unwrap();
    assert!(other.created);
    assert_eq!(list_mistakes(&env.conn, 1).unwrap().len(), 1);
    assert_eq!(list_mistakes(&env.conn, 2).unwrap().len(), 1);
  }

  #[test]
  fn test_mark_rejects_invalid_verse() {
    let env = TestEnv::new().unwrap();
    let result = mark_mistake(&env.conn, &MistakeMark::whole_word(1, 1, 8, 0, "w"));
    assert!(matches!(result, Err(EngineError::InvalidVerseRef { surah: 1, ayah: 8 })));
    assert!(list_mistakes(&env.conn, 1).unwrap().is_empty());
  }

  #[test]
  fn test_remove_deletes_full_history() {
    let env = TestEnv::new().unwrap();
    let mark = MistakeMark::whole_word(1, 1, 1, 0, "w");
    mark_mistake(&env.conn, &mark.clone().in_class(class(1, "2025-01-01", "Wednesday"))).unwrap();
    let outcome = mark_mistake(&env.conn, &mark.in_class(class(2, "2025-01-02", "Thursday"))).unwrap();

    remove_mistake(&env.conn, outcome.mistake_id).unwrap();

    assert!(get_mistake(&env.conn, outcome.mistake_id).unwrap().is_none());
    let orphans: i64 = env
      .conn
      .query_row("SELECT COUNT(*) FROM mistake_occurrences", [], |row| row.get(0))
      .unwrap();
    assert_eq!(orphans, 0);
  }

  #[test]
  fn test_remove_unknown_id() {
    let env = TestEnv::new().unwrap();
    assert!(matches!(remove_mistake(&env.conn, 42), Err(EngineError::NotFound(42))));
  }

  #[test]
  fn test_remark_after_remove_starts_fresh() {
    let env = TestEnv::new().unwrap();
    let mark = MistakeMark::whole_word(1, 1, 1, 0, "w");
    mark_mistake(&env.conn, &mark).unwrap();
    let second = mark_mistake(&env.conn, &mark).unwrap();
    remove_mistake(&env.conn, second.mistake_id).unwrap();

    let again = mark_mistake(&env.conn, &mark).unwrap();
    assert!(again.created);
    assert_eq!(again.error_count, 1);
  }

  #[test]
  fn test_undo_last_occurrence_decrements() {
    let env = TestEnv::new().unwrap();
    let mark = MistakeMark::whole_word(1, 1, 1, 0, "w");
    mark_mistake(&env.conn, &mark.clone().in_class(class(1, "2025-01-01", "Wednesday"))).unwrap();
    let outcome = mark_mistake(&env.conn, &mark.in_class(class(2, "2025-01-02", "Thursday"))).unwrap();

    assert_eq!(undo_last_occurrence(&env.conn, outcome.mistake_id).unwrap(), 1);
    let mistake = get_mistake(&env.conn, outcome.mistake_id).unwrap().unwrap();
    assert_eq!(mistake.error_count, 1);
    assert_eq!(mistake.occurrences.len(), 1);
    assert_eq!(mistake.occurrences[0].class_id, 1);

    assert_eq!(undo_last_occurrence(&env.conn, outcome.mistake_id).unwrap(), 0);
    assert!(get_mistake(&env.conn, outcome.mistake_id).unwrap().is_none());
  }

  #[test]
  fn test_undo_unknown_id() {
    let env = TestEnv::new().unwrap();
    assert!(matches!(undo_last_occurrence(&env.conn, 7), Err(EngineError::NotFound(7))));
  }

  #[test]
  fn test_list_surah_and_span() {
    let env = TestEnv::new().unwrap();
    for (surah, ayah) in [(1, 7), (2, 1), (2, 5), (2, 6), (3, 1)] {
      mark_mistake(&env.conn, &MistakeMark::whole_word(1, surah, ayah, 0, "w")).unwrap();
    }

    let baqarah = list_surah_mistakes(&env.conn, 1, 2).unwrap();
    assert_eq!(baqarah.len(), 3);
    assert!(baqarah.iter().all(|m| m.surah() == 2));

    let span = list_span_mistakes(
      &env.conn,
      1,
      VerseRef::new(1, 7).unwrap(),
      VerseRef::new(2, 5).unwrap(),
    )
    .unwrap();
    let verses: Vec<String> = span.iter().map(|m| m.verse.to_string()).collect();
    assert_eq!(verses, vec!["1:7", "2:1", "2:5"]);
  }
}
