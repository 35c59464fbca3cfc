//! Ayah counts per surah (Hafs numbering, 6236 ayahs in total).

/// Number of surahs in the Quran
pub const SURAH_COUNT: u8 = 114;

/// `AYAH_COUNTS[surah - 1]` is the number of ayahs in that surah
pub static AYAH_COUNTS: [u16; SURAH_COUNT as usize] = [
  7, 286, 200, 176, 120, 165, 206, 75, 129, 109, // 1-10
  123, 111, 43, 52, 99, 128, 111, 110, 98, 135, // 11-20
  112, 78, 118, 64, 77, 227, 93, 88, 69, 60, // 21-30
  34, 30, 73, 54, 45, 83, 182, 88, 75, 85, // 31-40
  54, 53, 89, 59, 37, 35, 38, 29, 18, 45, // 41-50
  60, 49, 62, 55, 78, 96, 29, 22, 24, 13, // 51-60
  14, 11, 11, 18, 12, 12, 30, 52, 52, 44, // 61-70
  28, 28, 20, 56, 40, 31, 50, 40, 46, 42, // 71-80
  29, 19, 36, 25, 22, 17, 19, 26, 30, 20, // 81-90
  15, 21, 11, 8, 8, 19, 5, 8, 8, 11, // 91-100
  11, 8, 3, 9, 5, 4, 7, 3, 6, 3, // 101-110
  5, 4, 5, 6, // 111-114
];

/// Ayah count for a surah, or `None` outside 1..=114
pub fn ayah_count(surah: u8) -> Option<u16> {
  if surah == 0 {
    return None;
  }
  AYAH_COUNTS.get(usize::from(surah) - 1).copied()
}

/// Total number of ayahs across all surahs
pub fn total_ayahs() -> u32 {
  AYAH_COUNTS.iter().map(|&n| u32::from(n)).sum()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_total_ayahs() {
    assert_eq!(total_ayahs(), 6236);
  }

  #[test]
  fn test_ayah_count_bounds() {
    assert_eq!(ayah_count(0), None);
    assert_eq!(ayah_count(1), Some(7));
    assert_eq!(ayah_count(2), Some(286));
    assert_eq!(ayah_count(114), Some(6));
    assert_eq!(ayah_count(115), None);
  }
}
