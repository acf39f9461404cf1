//! Error types for stable-match.
//!
//! Two classes of failure exist:
//!
//! - [`ParseError`]: the preference text is malformed. The `Display` form is
//!   a short machine-readable code (e.g. `TRUNCATED_HOSPITAL_PREFS`) that the
//!   CLI prints after `INVALID: `.
//! - [`SetupError`]: a contract violation on [`MatchingEngine`] setup calls.
//!
//! Verifier findings are not errors; see [`Verdict`].
//!
//! [`MatchingEngine`]: crate::engine::MatchingEngine
//! [`Verdict`]: crate::verifier::Verdict

use thiserror::Error;

use crate::types::Side;

/// Errors raised while building an [`Instance`](crate::types::Instance)
/// from text or from raw rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No leading integer `n`
    #[error("EMPTY_OR_MISSING_N")]
    EmptyOrMissingN,

    /// `n` is negative
    #[error("INVALID_N_NEGATIVE")]
    NegativeN,

    /// The stream ended inside the hospital preference block
    #[error("TRUNCATED_HOSPITAL_PREFS")]
    TruncatedHospitalPrefs,

    /// The stream ended inside the student preference block
    #[error("TRUNCATED_STUDENT_PREFS")]
    TruncatedStudentPrefs,

    /// Hospital row (1-indexed) is not a permutation of `1..=n`
    #[error("INVALID_HOSPITAL_PREF_LINE_{0}")]
    InvalidHospitalLine(usize),

    /// Student row (1-indexed) is not a permutation of `1..=n`
    #[error("INVALID_STUDENT_PREF_LINE_{0}")]
    InvalidStudentLine(usize),

    /// Hospital and student row counts disagree
    #[error("ROW_COUNT_MISMATCH")]
    RowCountMismatch {
        /// Number of hospital rows
        hospitals: usize,
        /// Number of student rows
        students: usize,
    },
}

/// Faults raised synchronously by [`MatchingEngine`](crate::engine::MatchingEngine)
/// setup calls. None of them leaves the engine partially mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Preference list length differs from `n`
    #[error("incorrect number of preferences ({side}): expected {expected}, got {got}")]
    WrongLength {
        /// Side being configured
        side: Side,
        /// Expected length (`n`)
        expected: usize,
        /// Supplied length
        got: usize,
    },

    /// Agent id outside `1..=n`
    #[error("{side} id {id} out of range 1..={n}")]
    IdOutOfRange {
        /// Side being configured
        side: Side,
        /// Offending id
        id: usize,
        /// Number of agents per side
        n: usize,
    },

    /// Preference list is not a permutation of `1..=n`
    #[error("{side} preferences must be a permutation of 1..n")]
    NotPermutation {
        /// Side being configured
        side: Side,
    },

    /// Preferences for this id were already set
    #[error("{side} {id} already has preferences")]
    AlreadySet {
        /// Side being configured
        side: Side,
        /// Offending id
        id: usize,
    },

    /// `solve()` called before every agent was configured
    #[error("{side} {id} has no preferences")]
    MissingPreferences {
        /// Side of the first unconfigured agent
        side: Side,
        /// First unconfigured id
        id: usize,
    },
}
