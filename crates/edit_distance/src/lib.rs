//! Levenshtein distance with the Wagner–Fischer algorithm.
//!
//! [`EditDistance`] keeps the whole prefix distance matrix so that it can be
//! printed or traced back into an edit script after the fact.

pub mod engine;
pub mod operation;
pub mod report;
pub mod sequence;
pub mod trace;

pub use engine::{edit_distance, EditDistance};
pub use operation::Operation;
pub use sequence::Sequence;
pub use trace::Edit;
