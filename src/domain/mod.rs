pub mod mistake;
pub mod verse;

pub use mistake::{
  ClassSession, MarkOutcome, Mistake, MistakeKey, MistakeMark, MistakeTarget, Occurrence, Portion,
  PortionKind,
};
pub use verse::VerseRef;
