//! Pure views over a student's mistakes: highlight levels, phrase groups and
//! session buckets. Nothing here touches the database.

pub mod grouping;
pub mod severity;

pub use grouping::{
  group_consecutive, partition_by_session, prior_sessions_by_class, within_page, within_portion,
  MistakeGroup, PriorClass, SessionPartition,
};
pub use severity::{severity_level, MistakeLevels};
