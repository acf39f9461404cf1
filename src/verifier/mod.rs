//! Stability verifier for stable-match.
//!
//! Takes an [`Instance`](crate::types::Instance) and any list of
//! `(hospital, student)` pairs and reports one of:
//!
//! | Verdict | Printed form |
//! |---------|--------------|
//! | [`Verdict::Invalid`] | `INVALID: <reason>` |
//! | [`Verdict::Unstable`] | `UNSTABLE: blocking pair (hospital <h>, student <s>)` |
//! | [`Verdict::Stable`] | `VALID STABLE` |
//!
//! Stability is judged only relative to the given matching. Whether a stable
//! matching is also hospital-optimal is not checked here.

pub mod stability;

pub use stability::{verify, BlockingPair, InvalidReason, Verdict};
