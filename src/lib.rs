//! # stable-match
//!
//! Stable matching between `n` hospitals and `n` students.
//!
//! ## Architecture
//!
//! - **Types**: Preference data model (Instance, PreferenceTable, Matching)
//! - **Engine**: Hospital-proposing deferred acceptance
//! - **Verifier**: Validity checks and blocking-pair search
//! - **IO**: Text formats for instances, candidate matchings, and output
//!
//! ## Design Principles
//!
//! 1. **Determinism**: FIFO proposer queue and dense id-indexed arrays, so
//!    identical input always gives identical output
//! 2. **Validated Setup**: Preference rows are full permutations, checked once
//!    when they enter the system
//! 3. **Findings Are Values**: The verifier returns a [`Verdict`] and never fails
//! 4. **Synchronous Execution**: Everything runs in plain loops over memory
//!
//! ## Bounds
//!
//! - Solve: at most `n^2` proposals
//! - Verify: at most `n^2` rank comparisons

// ============================================================================
// Module declarations
// ============================================================================

/// Error types: parse codes and engine setup faults
pub mod error;

/// Core data types: Instance, PreferenceTable, Matching, MatchReceipt
pub mod types;

/// Matching engine: deferred acceptance
pub mod engine;

/// Stability verifier: blocking-pair search
pub mod verifier;

/// Text input/output
pub mod io;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{Assignment, MatchingEngine, Proposal, ProposalOutcome};
pub use error::{ParseError, SetupError};
pub use types::{Instance, MatchReceipt, Matching, PreferenceTable, Side};
pub use verifier::{verify, BlockingPair, InvalidReason, Verdict};
