//! Per-student mistake statistics

use rusqlite::{params, Connection, Result};
use serde::Serialize;

use crate::config::{STATS_TOP_REPEATED_LIMIT, STATS_TOP_SURAHS_LIMIT};

/// Summed error count for one surah
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurahMistakeCount {
    pub surah: u8,
    pub error_count: i64,
}

/// A frequently repeated mistake, for dashboard display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatedMistake {
    pub id: i64,
    pub surah: u8,
    pub ayah: u16,
    pub word_text: String,
    pub error_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MistakeStats {
    /// Distinct mistake locations
    pub total_unique: i64,
    /// Locations marked more than once
    pub repeated: i64,
    /// Class occurrences across all mistakes
    pub total_occurrences: i64,
    pub by_surah: Vec<SurahMistakeCount>,
    pub top_repeated: Vec<RepeatedMistake>,
}

pub fn get_mistake_stats(conn: &Connection, student_id: i64) -> Result<MistakeStats> {
    let total_unique: i64 = conn.query_row(
        "SELECT COUNT(*) FROM mistakes WHERE student_id = ?1",
        params![student_id],
        |row| row.get(0),
    )?;

    let repeated: i64 = conn.query_row(
        "SELECT COUNT(*) FROM mistakes WHERE student_id = ?1 AND error_count > 1",
        params![student_id],
        |row| row.get(0),
    )?;

    let total_occurrences: i64 = conn.query_row(
        r#"
    SELECT COUNT(*)
    FROM mistake_occurrences mo
    JOIN mistakes m ON mo.mistake_id = m.id
    WHERE m.student_id = ?1
    "#,
        params![student_id],
        |row| row.get(0),
    )?;

    Ok(MistakeStats {
        total_unique,
        repeated,
        total_occurrences,
        by_surah: get_mistakes_by_surah(conn, student_id, STATS_TOP_SURAHS_LIMIT)?,
        top_repeated: get_top_repeated(conn, student_id, STATS_TOP_REPEATED_LIMIT)?,
    })
}

/// Surahs ordered by total error count, heaviest first
pub fn get_mistakes_by_surah(
    conn: &Connection,
    student_id: i64,
    limit: usize,
) -> Result<Vec<SurahMistakeCount>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT surah_number, SUM(error_count) AS total
    FROM mistakes
    WHERE student_id = ?1
    GROUP BY surah_number
    ORDER BY total DESC, surah_number ASC
    LIMIT ?2
    "#,
    )?;

    let counts = stmt
        .query_map(params![student_id, limit as i64], |row| {
            Ok(SurahMistakeCount {
                surah: row.get(0)?,
                error_count: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(counts)
}

/// Mistakes made more than once, most repeated first
pub fn get_top_repeated(
    conn: &Connection,
    student_id: i64,
    limit: usize,
) -> Result<Vec<RepeatedMistake>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, surah_number, ayah_number, word_text, error_count
    FROM mistakes
    WHERE student_id = ?1 AND error_count > 1
    ORDER BY error_count DESC, surah_number, ayah_number, word_index
    LIMIT ?2
    "#,
    )?;

    let mistakes = stmt
        .query_map(params![student_id, limit as i64], |row| {
            Ok(RepeatedMistake {
                id: row.get(0)?,
                surah: row.get(1)?,
                ayah: row.get(2)?,
                word_text: row.get(3)?,
                error_count: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(mistakes)
}
