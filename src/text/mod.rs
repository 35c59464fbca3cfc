pub mod harakat;

pub use harakat::{is_haraka, render_units, segment, HarakaUnit, LetterUnit, RenderUnit, SegmentedWord};
