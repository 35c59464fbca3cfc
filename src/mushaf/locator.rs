//! Conversion between verse addresses and Mushaf pages.
//!
//! Pages do not align with surah boundaries: a page can close one surah and
//! open the next, hold several short surahs, or sit entirely inside a long
//! one. A flat, sorted table of page-start anchors covers all of these with a
//! single predecessor search.

use serde::Serialize;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use super::anchors::MADANI_PAGE_STARTS;
use crate::domain::VerseRef;
use crate::error::{EngineError, Result};

static MADANI: OnceLock<PageIndex> = OnceLock::new();

/// Verse span printed on one page. Both ends are real verses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
  pub page: u16,
  pub start: VerseRef,
  pub end: VerseRef,
}

impl PageRange {
  pub fn contains(&self, verse: VerseRef) -> bool {
    self.start <= verse && verse <= self.end
  }

  /// Surahs with at least one ayah on the page
  pub fn surahs(&self) -> RangeInclusive<u8> {
    self.start.surah()..=self.end.surah()
  }
}

/// Ordered page-start anchors for one Mushaf print.
#[derive(Debug, Clone)]
pub struct PageIndex {
  anchors: Vec<VerseRef>,
}

impl PageIndex {
  /// Build an index from a custom anchor table.
  ///
  /// Anchors must start at 1:1 and be strictly increasing in reading order.
  pub fn new(anchors: Vec<VerseRef>) -> Result<Self> {
    match anchors.first() {
      None => return Err(EngineError::anchor_table("anchor table is empty")),
      Some(first) if *first != VerseRef::FIRST => {
        return Err(EngineError::anchor_table(format!(
          "page 1 must start at 1:1, found {}",
          first
        )));
      }
      Some(_) => {}
    }

    if anchors.len() > usize::from(u16::MAX) {
      return Err(EngineError::anchor_table("too many pages"));
    }

    for (i, pair) in anchors.windows(2).enumerate() {
      if pair[0] >= pair[1] {
        return Err(EngineError::anchor_table(format!(
          "page {} starts at {} which does not follow page {} at {}",
          i + 2,
          pair[1],
          i + 1,
          pair[0]
        )));
      }
    }

    Ok(Self { anchors })
  }

  /// Build an index from raw (surah, ayah) pairs, validating each one
  pub fn from_pairs(pairs: &[(u8, u16)]) -> Result<Self> {
    let anchors = pairs
      .iter()
      .map(|&(surah, ayah)| VerseRef::new(surah, ayah))
      .collect::<Result<Vec<_>>>()?;
    Self::new(anchors)
  }

  /// The 604-page Madani index, built once and shared for the process lifetime
  pub fn madani() -> &'static PageIndex {
    MADANI.get_or_init(|| {
      tracing::debug!("Loading Madani page index ({} pages)", MADANI_PAGE_STARTS.len());
      PageIndex {
        anchors: MADANI_PAGE_STARTS
          .iter()
          .map(|&(surah, ayah)| VerseRef::new_unchecked(surah, ayah))
          .collect(),
      }
    })
  }

  pub fn page_count(&self) -> u16 {
    // Bounded by the check in `new`; the Madani table has 604 entries
    self.anchors.len() as u16
  }

  /// First verse of a page
  pub fn anchor(&self, page: u16) -> Result<VerseRef> {
    self.check_page(page)?;
    Ok(self.anchors[usize::from(page) - 1])
  }

  /// Page for a raw (surah, ayah) pair
  pub fn locate_page(&self, surah: u8, ayah: u16) -> Result<u16> {
    let verse = VerseRef::new(surah, ayah)?;
    Ok(self.page_of(verse))
  }

  /// Largest page whose anchor is at or before `verse`
  pub fn page_of(&self, verse: VerseRef) -> u16 {
    let at_or_before = self.anchors.partition_point(|anchor| *anchor <= verse);
    at_or_before.max(1) as u16
  }

  pub fn page_range(&self, page: u16) -> Result<PageRange> {
    let start = self.anchor(page)?;

    let end = if page == self.page_count() {
      VerseRef::LAST
    } else {
      let next = self.anchors[usize::from(page)];
      if next.ayah() == 1 {
        // Next page opens a surah, so this one runs to the end of the previous surah
        VerseRef::last_of_surah(next.surah() - 1)?
      } else {
        VerseRef::new(next.surah(), next.ayah() - 1)?
      }
    };

    Ok(PageRange { page, start, end })
  }

  /// Surah numbers needed to render a page, ascending and contiguous
  pub fn surahs_on_page(&self, page: u16) -> Result<Vec<u8>> {
    Ok(self.page_range(page)?.surahs().collect())
  }

  /// Pages covering a verse span (order of `start`/`end` does not matter)
  pub fn pages_for_span(&self, start: VerseRef, end: VerseRef) -> RangeInclusive<u16> {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    self.page_of(lo)..=self.page_of(hi)
  }

  fn check_page(&self, page: u16) -> Result<()> {
    if page == 0 || page > self.page_count() {
      return Err(EngineError::InvalidPage {
        page: u32::from(page),
        page_count: self.page_count(),
      });
    }
    Ok(())
  }
}
