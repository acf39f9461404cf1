//! Blocking-pair search over an externally supplied matching.
//!
//! Checks run in order and stop at the first failure:
//!
//! 1. Cardinality: exactly `n` pairs
//! 2. Range and uniqueness of every id
//! 3. Totality: every hospital and student appears
//! 4. Stability: no blocking pair
//!
//! The verifier never panics on bad input; everything is reported through
//! [`Verdict`].

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::types::Instance;

/// Why a candidate matching is not a perfect matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// Pair count differs from `n`
    #[error("expected {expected} matching lines, got {got}")]
    WrongCount {
        /// `n`
        expected: usize,
        /// Number of pairs supplied
        got: usize,
    },

    /// A pair contains an id outside `1..=n`
    #[error("out-of-range pair ({hospital},{student})")]
    OutOfRange {
        /// Hospital id as supplied
        hospital: i64,
        /// Student id as supplied
        student: i64,
    },

    /// Hospital id used by two pairs
    #[error("hospital {0} appears more than once")]
    DuplicateHospital(usize),

    /// Student id used by two pairs
    #[error("student {0} appears more than once")]
    DuplicateStudent(usize),

    /// Hospital id absent from every pair
    #[error("hospital {0} is unmatched")]
    UnmatchedHospital(usize),

    /// Student id absent from every pair
    #[error("student {0} is unmatched")]
    UnmatchedStudent(usize),
}

/// A hospital and a student who both prefer each other to their partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockingPair {
    /// Hospital id
    pub hospital: usize,
    /// Student id
    pub student: usize,
}

/// Outcome of [`verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Not a perfect matching
    Invalid(InvalidReason),
    /// Perfect matching with a blocking pair
    Unstable(BlockingPair),
    /// Perfect and stable
    Stable,
}

impl Verdict {
    /// True for [`Verdict::Stable`]
    pub fn is_stable(&self) -> bool {
        matches!(self, Verdict::Stable)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Invalid(reason) => write!(f, "INVALID: {reason}"),
            Verdict::Unstable(pair) => write!(
                f,
                "UNSTABLE: blocking pair (hospital {}, student {})",
                pair.hospital, pair.student
            ),
            Verdict::Stable => f.write_str("VALID STABLE"),
        }
    }
}

/// Check whether `pairs` is a stable perfect matching for `instance`.
///
/// `pairs` need not come from the engine; ids are signed so that
/// negative input can be reported rather than rejected up front.
///
/// ## Example
///
/// ```
/// use stable_match::types::Instance;
/// use stable_match::verifier::{verify, Verdict};
///
/// let instance = Instance::from_rows(
///     vec![vec![1, 2], vec![1, 2]],
///     vec![vec![2, 1], vec![1, 2]],
/// ).unwrap();
///
/// assert_eq!(verify(&instance, &[(1, 2), (2, 1)]), Verdict::Stable);
/// assert!(!verify(&instance, &[(1, 1), (2, 2)]).is_stable());
/// ```
pub fn verify(instance: &Instance, pairs: &[(i64, i64)]) -> Verdict {
    let n = instance.n();
    if pairs.len() != n {
        return Verdict::Invalid(InvalidReason::WrongCount { expected: n, got: pairs.len() });
    }

    let mut student_of = vec![0usize; n + 1];
    let mut hospital_of = vec![0usize; n + 1];

    for &(h, s) in pairs {
        let (Some(h), Some(s)) = (to_id(h, n), to_id(s, n)) else {
            return Verdict::Invalid(InvalidReason::OutOfRange { hospital: h, student: s });
        };
        if student_of[h] != 0 {
            return Verdict::Invalid(InvalidReason::DuplicateHospital(h));
        }
        if hospital_of[s] != 0 {
            return Verdict::Invalid(InvalidReason::DuplicateStudent(s));
        }
        student_of[h] = s;
        hospital_of[s] = h;
    }

    if let Some(h) = (1..=n).find(|&h| student_of[h] == 0) {
        return Verdict::Invalid(InvalidReason::UnmatchedHospital(h));
    }
    if let Some(s) = (1..=n).find(|&s| hospital_of[s] == 0) {
        return Verdict::Invalid(InvalidReason::UnmatchedStudent(s));
    }

    for h in 1..=n {
        let rank_matched = instance.hospital_rank(h, student_of[h]);

        // Only students h ranks above its partner can block
        for k in 1..rank_matched {
            let s = instance.hospital_pref(h, k);
            if instance.students().prefers(s, h, hospital_of[s]) {
                debug!(hospital = h, student = s, "blocking pair found");
                return Verdict::Unstable(BlockingPair { hospital: h, student: s });
            }
        }
    }

    Verdict::Stable
}

fn to_id(raw: i64, n: usize) -> Option<usize> {
    usize::try_from(raw).ok().filter(|&id| id >= 1 && id <= n)
}

// ============================================================================
// Unit Tests
// ============================================================================
