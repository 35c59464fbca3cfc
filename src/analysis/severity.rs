//! Heat levels for highlighting words and letters by how often they were missed.

use std::collections::{HashMap, HashSet};

use crate::config::MAX_SEVERITY;
use crate::domain::{Mistake, MistakeTarget, VerseRef};

/// Map an error count onto the 1..=5 highlight scale.
///
/// Counts of five or more saturate; zero is treated like one since a stored
/// mistake always has at least one error.
pub fn severity_level(error_count: u32) -> u8 {
  error_count.clamp(1, u32::from(MAX_SEVERITY)) as u8
}

/// Lookup table of severity levels for one student's mistakes.
///
/// Levels are 0 where nothing was marked.
#[derive(Debug, Default)]
pub struct MistakeLevels<'a> {
  by_location: HashMap<(VerseRef, u32, MistakeTarget), &'a Mistake>,
  marked_words: HashSet<(VerseRef, u32)>,
}

impl<'a> MistakeLevels<'a> {
  pub fn new(mistakes: &'a [Mistake]) -> Self {
    let mut by_location: HashMap<_, &Mistake> = HashMap::with_capacity(mistakes.len());
    let mut marked_words = HashSet::with_capacity(mistakes.len());
    for mistake in mistakes {
      marked_words.insert((mistake.verse, mistake.word_index));
      by_location
        .entry((mistake.verse, mistake.word_index, mistake.target))
        .and_modify(|current| {
          if mistake.error_count > current.error_count {
            *current = mistake;
          }
        })
        .or_insert(mistake);
    }
    Self {
      by_location,
      marked_words,
    }
  }

  /// Level of the whole-word mistake on this word; char-level marks don't count
  pub fn word_mistake_level(&self, verse: VerseRef, word_index: u32) -> u8 {
    self.level_at(verse, word_index, MistakeTarget::WholeWord)
  }

  /// Level of the mistake on exactly this character of the word
  pub fn char_mistake_level(&self, verse: VerseRef, word_index: u32, char_index: u32) -> u8 {
    self.level_at(verse, word_index, MistakeTarget::AtChar(char_index))
  }

  /// Whether the word has any mark, whole or on one of its characters
  pub fn has_any_mistake(&self, verse: VerseRef, word_index: u32) -> bool {
    self.marked_words.contains(&(verse, word_index))
  }

  fn level_at(&self, verse: VerseRef, word_index: u32, target: MistakeTarget) -> u8 {
    self
      .by_location
      .get(&(verse, word_index, target))
      .map(|m| severity_level(m.error_count))
      .unwrap_or(0)
  }
}
