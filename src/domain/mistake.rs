use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::VerseRef;

/// What part of a word a mistake points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum MistakeTarget {
  /// The whole word was misrecited
  #[default]
  WholeWord,
  /// A single letter or haraka, by character index within the word
  AtChar(u32),
}

impl MistakeTarget {
  /// Nullable column form: `None` for a whole-word mistake
  pub fn char_index(&self) -> Option<u32> {
    match self {
      Self::WholeWord => None,
      Self::AtChar(index) => Some(*index),
    }
  }

  pub fn from_char_index(char_index: Option<u32>) -> Self {
    match char_index {
      Some(index) => Self::AtChar(index),
      None => Self::WholeWord,
    }
  }

  pub fn is_whole_word(&self) -> bool {
    matches!(self, Self::WholeWord)
  }
}

/// The class a mistake was (re)made in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
  pub id: i64,
  pub date: NaiveDate,
  /// Display label for the weekday, kept as given
  pub day: String,
}

impl ClassSession {
  pub fn new(id: i64, date: NaiveDate, day: impl Into<String>) -> Self {
    Self {
      id,
      date,
      day: day.into(),
    }
  }
}

/// One class in which a mistake was triggered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
  pub class_id: i64,
  pub occurred_at: DateTime<Utc>,
  pub class_date: NaiveDate,
  pub class_day: String,
}

/// Unique location of a mistake row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MistakeKey {
  pub student_id: i64,
  pub verse: VerseRef,
  pub word_index: u32,
  pub target: MistakeTarget,
}

impl fmt::Display for MistakeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "student {} at {} word {}", self.student_id, self.verse, self.word_index)?;
    if let MistakeTarget::AtChar(index) = self.target {
      write!(f, " char {}", index)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
  pub id: i64,
  pub student_id: i64,
  pub verse: VerseRef,
  /// 0-based position of the word in the ayah
  pub word_index: u32,
  /// The word, or the marked letter/haraka for char-level mistakes
  pub word_text: String,
  pub target: MistakeTarget,
  pub error_count: u32,
  /// Chronological by class date
  pub occurrences: Vec<Occurrence>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Mistake {
  pub fn key(&self) -> MistakeKey {
    MistakeKey {
      student_id: self.student_id,
      verse: self.verse,
      word_index: self.word_index,
      target: self.target,
    }
  }

  pub fn surah(&self) -> u8 {
    self.verse.surah()
  }

  pub fn ayah(&self) -> u16 {
    self.verse.ayah()
  }

  pub fn was_made_in(&self, class_id: i64) -> bool {
    self.occurrences.iter().any(|o| o.class_id == class_id)
  }

  pub fn is_repeated(&self) -> bool {
    self.error_count > 1
  }
}

/// A teacher's "mark mistake" action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakeMark {
  pub student_id: i64,
  pub surah: u8,
  pub ayah: u16,
  pub word_index: u32,
  pub word_text: String,
  #[serde(default)]
  pub target: MistakeTarget,
  /// `None` for marks made outside a class (free reading); counted but not logged as an occurrence
  #[serde(default)]
  pub class: Option<ClassSession>,
}

impl MistakeMark {
  pub fn whole_word(
    student_id: i64,
    surah: u8,
    ayah: u16,
    word_index: u32,
    word_text: impl Into<String>,
  ) -> Self {
    Self {
      student_id,
      surah,
      ayah,
      word_index,
      word_text: word_text.into(),
      target: MistakeTarget::WholeWord,
      class: None,
    }
  }

  pub fn at_char(mut self, char_index: u32) -> Self {
    self.target = MistakeTarget::AtChar(char_index);
    self
  }

  pub fn in_class(mut self, class: ClassSession) -> Self {
    self.class = Some(class);
    self
  }
}

/// Result of a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkOutcome {
  pub mistake_id: i64,
  pub error_count: u32,
  /// True when this mark created the row
  pub created: bool,
}

/// Memorization category of an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortionKind {
  /// New memorization
  Hifz,
  /// Recently learned
  Sabqi,
  /// Long-term review (manzil)
  Revision,
}

impl PortionKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Hifz => "hifz",
      Self::Sabqi => "sabqi",
      Self::Revision => "revision",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "hifz" => Some(Self::Hifz),
      "sabqi" => Some(Self::Sabqi),
      "revision" | "manzil" => Some(Self::Revision),
      _ => None,
    }
  }
}

/// An assigned recitation span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portion {
  pub kind: PortionKind,
  pub start: VerseRef,
  pub end: VerseRef,
}

impl Portion {
  pub fn new(kind: PortionKind, start: VerseRef, end: VerseRef) -> Self {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    Self { kind, start, end }
  }

  /// Whole surahs from `start_surah` through `end_surah`
  pub fn surahs(kind: PortionKind, start_surah: u8, end_surah: u8) -> crate::Result<Self> {
    Ok(Self::new(
      kind,
      VerseRef::new(start_surah, 1)?,
      VerseRef::last_of_surah(end_surah)?,
    ))
  }

  pub fn contains(&self, verse: VerseRef) -> bool {
    self.start <= verse && verse <= self.end
  }
}
