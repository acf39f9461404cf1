//! Matching engine module for stable-match.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Dense Arrays**: Agents are indexed by id, no hashing anywhere
//! 3. **Synchronous Execution**: Plain loops over in-memory tables
//! 4. **Validated Setup**: Malformed preferences are rejected at the setter
//!
//! ## Matching Rules
//!
//! - **Hospitals** propose in preference order, each student at most once
//! - **Students** hold the best proposal so far and drop worse ones
//! - **Rejected** hospitals keep the queue front and propose again
//! - **Displaced** hospitals rejoin at the queue tail
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::MatchingEngine;
//! use stable_match::types::Instance;
//!
//! let instance = Instance::from_rows(
//!     vec![vec![1, 2, 3], vec![1, 2, 3], vec![2, 3, 1]],
//!     vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
//! ).unwrap();
//!
//! let engine = MatchingEngine::from_instance(&instance).unwrap();
//! let result = engine.solve().unwrap();
//!
//! assert_eq!(result.proposals, 5);
//! assert_eq!(result.matching.student_of(1), Some(2));
//! ```

pub mod matcher;

pub use matcher::{Assignment, MatchingEngine, Proposal, ProposalOutcome};
