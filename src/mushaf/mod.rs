//! Madani Mushaf layout: static page and surah tables plus the page locator.

pub mod anchors;
pub mod locator;
pub mod surahs;

pub use anchors::{MADANI_PAGE_COUNT, MADANI_PAGE_STARTS};
pub use locator::{PageIndex, PageRange};
pub use surahs::{ayah_count, SURAH_COUNT};
