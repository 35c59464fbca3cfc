//! Phrase groups and session buckets for the review screen.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{ClassSession, Mistake, Portion};
use crate::mushaf::PageRange;

/// A run of mistakes on adjacent words of one ayah
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MistakeGroup<'a> {
  pub surah: u8,
  pub ayah: u16,
  pub start_word_index: u32,
  pub end_word_index: u32,
  pub words: Vec<&'a Mistake>,
  pub max_error_count: u32,
}

impl<'a> MistakeGroup<'a> {
  fn start(mistake: &'a Mistake) -> Self {
    Self {
      surah: mistake.surah(),
      ayah: mistake.ayah(),
      start_word_index: mistake.word_index,
      end_word_index: mistake.word_index,
      words: vec![mistake],
      max_error_count: mistake.error_count,
    }
  }

  fn extends_with(&self, mistake: &Mistake) -> bool {
    mistake.surah() == self.surah
      && mistake.ayah() == self.ayah
      && self.end_word_index.checked_add(1) == Some(mistake.word_index)
  }

  fn push(&mut self, mistake: &'a Mistake) {
    self.end_word_index = mistake.word_index;
    self.max_error_count = self.max_error_count.max(mistake.error_count);
    self.words.push(mistake);
  }

  /// Number of words the phrase spans
  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

/// Cluster mistakes into runs of consecutive words.
///
/// A repeated word index (e.g. a whole-word mark and a letter mark on the same
/// word) starts a new group rather than extending the run.
pub fn group_consecutive(mistakes: &[Mistake]) -> Vec<MistakeGroup<'_>> {
  let mut sorted: Vec<&Mistake> = mistakes.iter().collect();
  sorted.sort_by_key(|m| (m.surah(), m.ayah(), m.word_index));

  let mut groups: Vec<MistakeGroup> = Vec::new();
  for mistake in sorted {
    match groups.last_mut() {
      Some(group) if group.extends_with(mistake) => group.push(mistake),
      _ => groups.push(MistakeGroup::start(mistake)),
    }
  }
  groups
}

/// Mistakes split by the class they were made in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionPartition<'a> {
  /// Triggered in the current class
  pub this_session: Vec<&'a Mistake>,
  /// Triggered in another class held on an earlier date
  pub prior_sessions: Vec<&'a Mistake>,
}

/// Bucket mistakes relative to `current`.
///
/// Comparison is by calendar date only: another class on the same day is
/// neither current nor prior. A mistake made both now and earlier lands in
/// both buckets.
pub fn partition_by_session<'a>(mistakes: &'a [Mistake], current: &ClassSession) -> SessionPartition<'a> {
  let mut partition = SessionPartition::default();
  for mistake in mistakes {
    if mistake.was_made_in(current.id) {
      partition.this_session.push(mistake);
    }
    if mistake
      .occurrences
      .iter()
      .any(|o| is_prior(o.class_id, o.class_date, current))
    {
      partition.prior_sessions.push(mistake);
    }
  }
  partition
}

/// Earlier mistakes for one past class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorClass<'a> {
  pub class_id: i64,
  pub class_date: NaiveDate,
  pub class_day: String,
  pub mistakes: Vec<&'a Mistake>,
}

/// The prior-sessions bucket broken down per class, most recent class first
pub fn prior_sessions_by_class<'a>(mistakes: &'a [Mistake], current: &ClassSession) -> Vec<PriorClass<'a>> {
  let mut classes: Vec<PriorClass<'a>> = Vec::new();

  for mistake in mistakes {
    for occurrence in &mistake.occurrences {
      if !is_prior(occurrence.class_id, occurrence.class_date, current) {
        continue;
      }
      match classes.iter_mut().find(|c| c.class_id == occurrence.class_id) {
        Some(class) => {
          // Same mistake repeated within one class is listed once
          if !class.mistakes.iter().any(|m| m.id == mistake.id) {
            class.mistakes.push(mistake);
          }
        }
        None => classes.push(PriorClass {
          class_id: occurrence.class_id,
          class_date: occurrence.class_date,
          class_day: occurrence.class_day.clone(),
          mistakes: vec![mistake],
        }),
      }
    }
  }

  classes.sort_by(|a, b| b.class_date.cmp(&a.class_date).then(b.class_id.cmp(&a.class_id)));
  classes
}

fn is_prior(class_id: i64, class_date: NaiveDate, current: &ClassSession) -> bool {
  class_id != current.id && class_date < current.date
}

/// Mistakes whose verse falls on the page
pub fn within_page<'a>(mistakes: &'a [Mistake], range: &PageRange) -> Vec<&'a Mistake> {
  mistakes.iter().filter(|m| range.contains(m.verse)).collect()
}

/// Mistakes inside an assigned portion
pub fn within_portion<'a>(mistakes: &'a [Mistake], portion: &Portion) -> Vec<&'a Mistake> {
  mistakes.iter().filter(|m| portion.contains(m.verse)).collect()
}
