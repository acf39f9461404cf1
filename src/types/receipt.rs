//! Run receipt for a completed solve.
//!
//! The MatchReceipt summarizes one deferred-acceptance run: instance size,
//! proposal count, and a digest of the resulting matching. Two runs over the
//! same instance must produce identical receipts.

use crate::types::Matching;

/// Summary of one solve.
///
/// ## Example
///
/// ```
/// use stable_match::types::{Matching, MatchReceipt};
///
/// let mut matching = Matching::new(1);
/// matching.bind(1, 1);
///
/// let receipt = MatchReceipt::new(&matching, 1);
/// assert_eq!(receipt.agents, 1);
/// assert_eq!(receipt.proposals, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchReceipt {
    /// Agents per side
    pub agents: u64,

    /// Proposals made during the run
    pub proposals: u64,

    /// SHA-256 of the resulting matching
    pub digest: [u8; 32],
}

impl MatchReceipt {
    /// Create a receipt for `matching` produced with `proposals` proposals
    pub fn new(matching: &Matching, proposals: u64) -> Self {
        Self {
            agents: matching.n() as u64,
            proposals,
            digest: matching.digest(),
        }
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Proposals per agent (1.0 = every hospital got its first choice).
    ///
    /// Returns None for an empty instance.
    pub fn proposals_per_agent(&self) -> Option<f64> {
        if self.agents == 0 {
            None
        } else {
            Some(self.proposals as f64 / self.agents as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
