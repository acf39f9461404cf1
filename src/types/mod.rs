//! Core data types for stable-match
//!
//! ## Types
//!
//! - [`Side`]: Hospital or Student
//! - [`PreferenceTable`]: one side's preference orders plus rank table
//! - [`Instance`]: both sides' preferences, read-only after construction
//! - [`Matching`]: hospital/student bijection with `0` as the unmatched sentinel
//! - [`MatchReceipt`]: summary of a solve (size, proposals, digest)
//!
//! ## Identifiers
//!
//! Agents are numbered `1..=n` on each side. Every table is indexed directly
//! by id, with slot `0` unused.

mod instance;
mod matching;
mod receipt;

// Re-export all types at module level
pub use instance::{is_permutation, Instance, PreferenceTable, Side};
pub use matching::Matching;
pub use receipt::MatchReceipt;
