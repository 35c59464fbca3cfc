//! Splitting Arabic words into base letters and harakat.
//!
//! All indices are character (code point) positions within the word, which
//! is how char-level mistakes are addressed. The word is never normalized:
//! canonical reordering would move a vowel mark in front of its Shadda and
//! shift every stored index after it.

use serde::Serialize;

pub const SHADDA: char = '\u{0651}';

/// Recognized diacritical marks
static HARAKAT: [char; 21] = [
  '\u{064B}', // Fathatan
  '\u{064C}', // Dammatan
  '\u{064D}', // Kasratan
  '\u{064E}', // Fatha
  '\u{064F}', // Damma
  '\u{0650}', // Kasra
  '\u{0651}', // Shadda
  '\u{0652}', // Sukun
  '\u{0653}', // Maddah
  '\u{0654}', // Hamza above
  '\u{0655}', // Hamza below
  '\u{0656}', // Subscript alef
  '\u{0657}', // Inverted damma
  '\u{0658}', // Mark noon ghunna
  '\u{0659}', // Zwarakay
  '\u{065A}', // Small v above
  '\u{065B}', // Inverted small v above
  '\u{065C}', // Dot below
  '\u{065D}', // Reversed damma
  '\u{065E}', // Fatha with two dots
  '\u{0670}', // Superscript alef
];

pub fn is_haraka(ch: char) -> bool {
  HARAKAT.contains(&ch)
}

/// A base letter and its position in the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterUnit {
  pub ch: char,
  pub index: u32,
}

/// One correction target among the diacritics.
///
/// Shadda followed by a vowel mark is a single unit of two characters,
/// indexed at the Shadda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarakaUnit {
  pub text: String,
  pub index: u32,
}

impl HarakaUnit {
  /// Character positions this unit consumes
  pub fn indices(&self) -> std::ops::Range<u32> {
    let end = if self.is_combined() { self.index + 2 } else { self.index + 1 };
    self.index..end
  }

  pub fn is_combined(&self) -> bool {
    self.text.chars().count() > 1
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentedWord {
  pub letters: Vec<LetterUnit>,
  pub harakat: Vec<HarakaUnit>,
}

/// Split a word into letters and harakat, merging Shadda + vowel.
pub fn segment(word: &str) -> SegmentedWord {
  let mut result = SegmentedWord::default();
  let mut chars = (0u32..).zip(word.chars()).peekable();

  while let Some((index, ch)) = chars.next() {
    if !is_haraka(ch) {
      result.letters.push(LetterUnit { ch, index });
      continue;
    }

    let mut text = ch.to_string();
    if ch == SHADDA {
      if let Some((_, next)) = chars.next_if(|&(_, next)| is_haraka(next)) {
        text.push(next);
      }
    }
    result.harakat.push(HarakaUnit { text, index });
  }

  result
}

/// A single character for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderUnit {
  pub ch: char,
  pub index: u32,
  pub is_haraka: bool,
}

/// One unit per character, no merging.
///
/// Each code point stays independently colorable; harakat stay attached to
/// their letter through layout rather than grouping.
pub fn render_units(word: &str) -> Vec<RenderUnit> {
  (0u32..)
    .zip(word.chars())
    .map(|(index, ch)| RenderUnit {
      ch,
      index,
      is_haraka: is_haraka(ch),
    })
    .collect()
}
