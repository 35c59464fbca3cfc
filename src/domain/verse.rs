use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, Result};
use crate::mushaf::surahs::{ayah_count, SURAH_COUNT};

/// A validated (surah, ayah) address.
///
/// Ordering is reading order: surah first, then ayah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVerseRef")]
pub struct VerseRef {
  surah: u8,
  ayah: u16,
}

/// Unvalidated wire form, checked on deserialize
#[derive(Deserialize)]
struct RawVerseRef {
  surah: u8,
  ayah: u16,
}

impl TryFrom<RawVerseRef> for VerseRef {
  type Error = EngineError;

  fn try_from(raw: RawVerseRef) -> Result<Self> {
    VerseRef::new(raw.surah, raw.ayah)
  }
}

impl VerseRef {
  /// Al-Fatiha 1:1
  pub const FIRST: VerseRef = VerseRef { surah: 1, ayah: 1 };

  /// An-Nas 114:6
  pub const LAST: VerseRef = VerseRef {
    surah: SURAH_COUNT,
    ayah: 6,
  };

  pub fn new(surah: u8, ayah: u16) -> Result<Self> {
    match ayah_count(surah) {
      Some(count) if ayah >= 1 && ayah <= count => Ok(Self { surah, ayah }),
      _ => Err(EngineError::invalid_verse(surah, ayah)),
    }
  }

  /// Caller guarantees `surah`/`ayah` are in range (static tables only)
  pub(crate) const fn new_unchecked(surah: u8, ayah: u16) -> Self {
    Self { surah, ayah }
  }

  /// Final ayah of a surah
  pub fn last_of_surah(surah: u8) -> Result<Self> {
    let count = ayah_count(surah).ok_or_else(|| EngineError::invalid_verse(surah, 0u16))?;
    Ok(Self { surah, ayah: count })
  }

  pub fn surah(&self) -> u8 {
    self.surah
  }

  pub fn ayah(&self) -> u16 {
    self.ayah
  }

  /// The next ayah in reading order, crossing surah boundaries
  pub fn next(&self) -> Option<Self> {
    let count = ayah_count(self.surah)?;
    if self.ayah < count {
      Some(Self {
        surah: self.surah,
        ayah: self.ayah + 1,
      })
    } else if self.surah < SURAH_COUNT {
      Some(Self {
        surah: self.surah + 1,
        ayah: 1,
      })
    } else {
      None
    }
  }

  /// Iterate every ayah of the Quran in reading order
  pub fn all() -> impl Iterator<Item = VerseRef> {
    std::iter::successors(Some(Self::FIRST), |v| v.next())
  }
}

impl fmt::Display for VerseRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.surah, self.ayah)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_valid() {
    let v = VerseRef::new(2, 255).unwrap();
    assert_eq!(v.surah(), 2);
    assert_eq!(v.ayah(), 255);
  }

  #[test]
  fn test_new_rejects_ayah_past_surah_end() {
    assert!(matches!(
      VerseRef::new(1, 8),
      Err(EngineError::InvalidVerseRef { surah: 1, ayah: 8 })
    ));
  }

  #[test]
  fn test_new_rejects_zero_and_out_of_range() {
    assert!(VerseRef::new(0, 1).is_err());
    assert!(VerseRef::new(115, 1).is_err());
    assert!(VerseRef::new(1, 0).is_err());
  }

  #[test]
  fn test_ordering_is_reading_order() {
    let a = VerseRef::new(2, 286).unwrap();
    let b = VerseRef::new(3, 1).unwrap();
    assert!(a < b);
    assert!(VerseRef::new(2, 5).unwrap() < VerseRef::new(2, 10).unwrap());
  }

  #[test]
  fn test_last_of_surah() {
    assert_eq!(VerseRef::last_of_surah(1).unwrap(), VerseRef::new(1, 7).unwrap());
    assert_eq!(VerseRef::last_of_surah(114).unwrap(), VerseRef::LAST);
    assert!(VerseRef::last_of_surah(0).is_err());
  }

  #[test]
  fn test_next_crosses_surah_boundary() {
    let end_of_fatiha = VerseRef::new(1, 7).unwrap();
    assert_eq!(end_of_fatiha.next(), Some(VerseRef::new(2, 1).unwrap()));
    assert_eq!(VerseRef::LAST.next(), None);
  }

  #[test]
  fn test_all_visits_every_ayah() {
    assert_eq!(VerseRef::all().count(), 6236);
  }

  #[test]
  fn test_serde_validates() {
    let v: VerseRef = serde_json::from_str(r#"{"surah":36,"ayah":83}"#).unwrap();
    assert_eq!(v, VerseRef::new(36, 83).unwrap());
    assert!(serde_json::from_str::<VerseRef>(r#"{"surah":36,"ayah":84}"#).is_err());
    assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"surah":36,"ayah":83}"#);
  }

  #[test]
  fn test_display() {
    assert_eq!(VerseRef::new(18, 10).unwrap().to_string(), "18:10");
  }
}
