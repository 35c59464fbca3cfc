//! Notebook service: one entry point over the page index and the mistake store.
//!
//! Callers share a `Notebook` across threads; every store call takes the pool
//! lock for its duration, so marks on the same location are serialized.

use serde::Serialize;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::analysis::{
    group_consecutive, partition_by_session, prior_sessions_by_class, MistakeGroup, MistakeLevels,
    PriorClass, SessionPartition,
};
use crate::db::{self, try_lock, DbPool, MistakeStats};
use crate::domain::{ClassSession, MarkOutcome, Mistake, MistakeMark, Portion};
use crate::error::Result;
use crate::mushaf::{PageIndex, PageRange};

#[derive(Clone)]
pub struct Notebook {
    pool: DbPool,
    index: &'static PageIndex,
}

impl Notebook {
    pub fn new(pool: DbPool, index: &'static PageIndex) -> Self {
        Self { pool, index }
    }

    /// Open the database at `path` against the Madani layout
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(db::init_db(path)?, PageIndex::madani()))
    }

    /// Throwaway notebook, used by tests and dry runs
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(db::init_memory_db()?, PageIndex::madani()))
    }

    pub fn index(&self) -> &'static PageIndex {
        self.index
    }

    // ==================== Page Lookups ====================

    pub fn locate_page(&self, surah: u8, ayah: u16) -> Result<u16> {
        self.index.locate_page(surah, ayah)
    }

    pub fn page_range(&self, page: u16) -> Result<PageRange> {
        self.index.page_range(page)
    }

    pub fn surahs_on_page(&self, page: u16) -> Result<Vec<u8>> {
        self.index.surahs_on_page(page)
    }

    /// Pages a portion is printed on
    pub fn pages_for_portion(&self, portion: &Portion) -> RangeInclusive<u16> {
        self.index.pages_for_span(portion.start, portion.end)
    }

    // ==================== Mistakes ====================

    pub fn mark_mistake(&self, mark: &MistakeMark) -> Result<MarkOutcome> {
        let conn = try_lock(&self.pool)?;
        db::mark_mistake(&conn, mark)
    }

    pub fn remove_mistake(&self, id: i64) -> Result<()> {
        let conn = try_lock(&self.pool)?;
        db::remove_mistake(&conn, id)
    }

    pub fn undo_last_occurrence(&self, id: i64) -> Result<u32> {
        let conn = try_lock(&self.pool)?;
        db::undo_last_occurrence(&conn, id)
    }

    pub fn get_mistake(&self, id: i64) -> Result<Option<Mistake>> {
        let conn = try_lock(&self.pool)?;
        db::get_mistake(&conn, id)
    }

    pub fn list_mistakes(&self, student_id: i64) -> Result<Vec<Mistake>> {
        let conn = try_lock(&self.pool)?;
        db::list_mistakes(&conn, student_id)
    }

    pub fn list_surah_mistakes(&self, student_id: i64, surah: u8) -> Result<Vec<Mistake>> {
        let conn = try_lock(&self.pool)?;
        db::list_surah_mistakes(&conn, student_id, surah)
    }

    pub fn mistakes_on_page(&self, student_id: i64, page: u16) -> Result<Vec<Mistake>> {
        let range = self.index.page_range(page)?;
        let conn = try_lock(&self.pool)?;
        db::list_span_mistakes(&conn, student_id, range.start, range.end)
    }

    pub fn mistakes_in_portion(&self, student_id: i64, portion: &Portion) -> Result<Vec<Mistake>> {
        let conn = try_lock(&self.pool)?;
        db::list_span_mistakes(&conn, student_id, portion.start, portion.end)
    }

    /// Everything the review screen needs for one page
    pub fn page_review(&self, student_id: i64, page: u16) -> Result<PageReview> {
        let range = self.index.page_range(page)?;
        let mistakes = {
            let conn = try_lock(&self.pool)?;
            db::list_span_mistakes(&conn, student_id, range.start, range.end)?
        };
        tracing::debug!(
            "Page {} review for student {}: {} mistakes",
            page,
            student_id,
            mistakes.len()
        );
        Ok(PageReview {
            range,
            surahs: range.surahs().collect(),
            mistakes,
        })
    }

    pub fn stats(&self, student_id: i64) -> Result<MistakeStats> {
        let conn = try_lock(&self.pool)?;
        Ok(db::get_mistake_stats(&conn, student_id)?)
    }
}

/// A page with the student's mistakes on it
#[derive(Debug, Clone, Serialize)]
pub struct PageReview {
    pub range: PageRange,
    /// Surah texts to fetch for rendering
    pub surahs: Vec<u8>,
    pub mistakes: Vec<Mistake>,
}

impl PageReview {
    pub fn levels(&self) -> MistakeLevels<'_> {
        MistakeLevels::new(&self.mistakes)
    }

    pub fn groups(&self) -> Vec<MistakeGroup<'_>> {
        group_consecutive(&self.mistakes)
    }

    pub fn partition(&self, current: &ClassSession) -> SessionPartition<'_> {
        partition_by_session(&self.mistakes, current)
    }

    pub fn prior_classes(&self, current: &ClassSession) -> Vec<PriorClass<'_>> {
        prior_sessions_by_class(&self.mistakes, current)
    }

    /// Serializable snapshot, with session buckets when a class is given
    pub fn summary(&self, current: Option<&ClassSession>) -> PageSummary<'_> {
        PageSummary {
            range: self.range,
            surahs: &self.surahs,
            groups: self.groups(),
            session: current.map(|class| self.partition(class)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageSummary<'a> {
    pub range: PageRange,
    pub surahs: &'a [u8],
    pub groups: Vec<MistakeGroup<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionPartition<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MistakeTarget, PortionKind, VerseRef};
    use crate::error::EngineError;
    use chrono::NaiveDate;

    fn class(id: i64, ymd: (i32, u32, u32)) -> ClassSession {
        ClassSession::new(
            id,
            NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            "Sunday",
        )
    }

    #[test]
    fn test_locate_and_range() {
        let notebook = Notebook::in_memory().unwrap();
        assert_eq!(notebook.locate_page(2, 255).unwrap(), 42);
        assert_eq!(notebook.surahs_on_page(604).unwrap(), vec![112, 113, 114]);
        assert!(matches!(
            notebook.page_range(605),
            Err(EngineError::InvalidPage { page: 605, .. })
        ));
    }

    #[test]
    fn test_three_classes_accumulate() {
        let notebook = Notebook::in_memory().unwrap();
        let mut outcome = None;
        for (i, id) in [1, 2, 3].into_iter().enumerate() {
            let mark = MistakeMark::whole_word(9, 1, 2, 0, "ٱلْحَمْدُ")
                .in_class(class(id, (2025, 1, 5 + i as u32)));
            outcome = Some(notebook.mark_mistake(&mark).unwrap());
        }
        let outcome = outcome.unwrap();
        assert_eq!(outcome.error_count, 3);

        let mistake = notebook.get_mistake(outcome.mistake_id).unwrap().unwrap();
        let class_ids: Vec<i64> = mistake.occurrences.iter().map(|o| o.class_id).collect();
        assert_eq!(class_ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_page_review() {
        let notebook = Notebook::in_memory().unwrap();
        let today = class(20, (2025, 3, 10));
        let last_week = class(19, (2025, 3, 3));

        // Page 1 is al-Fatiha
        for word in [1, 2] {
            let mark = MistakeMark::whole_word(1, 1, 2, word, "w").in_class(today.clone());
            notebook.mark_mistake(&mark).unwrap();
        }
        let mark = MistakeMark::whole_word(1, 1, 5, 0, "w")
            .at_char(2)
            .in_class(last_week.clone());
        notebook.mark_mistake(&mark).unwrap();
        // Off the page
        let mark = MistakeMark::whole_word(1, 2, 1, 0, "w").in_class(today.clone());
        notebook.mark_mistake(&mark).unwrap();

        let review = notebook.page_review(1, 1).unwrap();
        assert_eq!(review.surahs, vec![1]);
        assert_eq!(review.mistakes.len(), 3);

        let groups = review.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].start_word_index, groups[0].end_word_index), (1, 2));

        let partition = review.partition(&today);
        assert_eq!(partition.this_session.len(), 2);
        assert_eq!(partition.prior_sessions.len(), 1);

        let levels = review.levels();
        let verse = VerseRef::new(1, 5).unwrap();
        assert_eq!(levels.char_mistake_level(verse, 0, 2), 1);
        assert_eq!(levels.word_mistake_level(verse, 0), 0);

        let json = serde_json::to_value(review.summary(Some(&today))).unwrap();
        assert_eq!(json["groups"].as_array().unwrap().len(), 2);
        assert!(json["session"]["this_session"].is_array());
        assert!(review.summary(None).session.is_none());
    }

    #[test]
    fn test_portion_lookup() {
        let notebook = Notebook::in_memory().unwrap();
        let portion = Portion::surahs(PortionKind::Hifz, 112, 114).unwrap();
        assert_eq!(notebook.pages_for_portion(&portion), 604..=604);

        let mark = MistakeMark::whole_word(1, 113, 1, 0, "w");
        notebook.mark_mistake(&mark).unwrap();
        let mark = MistakeMark::whole_word(1, 111, 1, 0, "w");
        notebook.mark_mistake(&mark).unwrap();

        let found = notebook.mistakes_in_portion(1, &portion).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].surah(), 113);
        assert_eq!(notebook.list_surah_mistakes(1, 111).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_and_undo() {
        let notebook = Notebook::in_memory().unwrap();
        let mark = MistakeMark::whole_word(1, 1, 1, 0, "w").at_char(1);
        let first = notebook.mark_mistake(&mark.clone().in_class(class(1, (2025, 1, 1)))).unwrap();
        notebook.mark_mistake(&mark.clone().in_class(class(2, (2025, 1, 2)))).unwrap();

        assert_eq!(notebook.undo_last_occurrence(first.mistake_id).unwrap(), 1);
        let mistake = notebook.get_mistake(first.mistake_id).unwrap().unwrap();
        assert_eq!(mistake.target, MistakeTarget::AtChar(1));
        assert_eq!(mistake.occurrences.len(), 1);

        notebook.remove_mistake(first.mistake_id).unwrap();
        assert!(notebook.list_mistakes(1).unwrap().is_empty());
        assert!(matches!(
            notebook.remove_mistake(first.mistake_id),
            Err(EngineError::NotFound(_))
        ));
    }

    #[test]
    fn test_concurrent_marks_on_one_key_are_not_lost() {
        const THREADS: i64 = 8;
        const MARKS_PER_THREAD: i64 = 25;

        let notebook = Notebook::in_memory().unwrap();
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let notebook = notebook.clone();
                std::thread::spawn(move || {
                    for i in 0..MARKS_PER_THREAD {
                        let class_id = t * MARKS_PER_THREAD + i;
                        let mark = MistakeMark::whole_word(3, 2, 255, 1, "w")
                            .in_class(class(class_id, (2025, 4, 1)));
                        notebook.mark_mistake(&mark).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mistakes = notebook.list_mistakes(3).unwrap();
        assert_eq!(mistakes.len(), 1);
        let total = (THREADS * MARKS_PER_THREAD) as usize;
        assert_eq!(mistakes[0].error_count as usize, total);
        assert_eq!(mistakes[0].occurrences.len(), total);
    }

    #[test]
    fn test_stats_through_notebook() {
        let notebook = Notebook::in_memory().unwrap();
        let mark = MistakeMark::whole_word(4, 36, 1, 0, "w");
        notebook.mark_mistake(&mark).unwrap();
        notebook.mark_mistake(&mark).unwrap();

        let stats = notebook.stats(4).unwrap();
        assert_eq!(stats.total_unique, 1);
        assert_eq!(stats.repeated, 1);
        // Marks without a class count but leave no occurrence
        assert_eq!(stats.total_occurrences, 0);
    }
}
