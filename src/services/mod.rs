//! Application services.
//!
//! Services combine the static page index with the mistake store behind a
//! shared connection pool.

pub mod notebook;

pub use notebook::{Notebook, PageReview, PageSummary};
