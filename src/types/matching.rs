//! Bijective hospital/student matching.
//!
//! Stored as two parallel arrays indexed by agent id, with `0` meaning
//! "unmatched":
//!
//! ```text
//! student_of[h]  -> student matched to hospital h (or 0)
//! hospital_of[s] -> hospital matched to student s (or 0)
//! ```

use sha2::{Digest, Sha256};

/// A (possibly partial) one-to-one matching between hospitals and students.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matching {
    student_of: Vec<usize>,
    hospital_of: Vec<usize>,
}

impl Matching {
    /// Create an empty matching for `n` agents per side
    pub fn new(n: usize) -> Self {
        Self {
            student_of: vec![0; n + 1],
            hospital_of: vec![0; n + 1],
        }
    }

    /// Number of agents per side
    #[inline]
    pub fn n(&self) -> usize {
        self.student_of.len() - 1
    }

    /// Student matched to hospital `h`, if any
    #[inline]
    pub fn student_of(&self, h: usize) -> Option<usize> {
        match self.student_of[h] {
            0 => None,
            s => Some(s),
        }
    }

    /// Hospital matched to student `s`, if any
    #[inline]
    pub fn hospital_of(&self, s: usize) -> Option<usize> {
        match self.hospital_of[s] {
            0 => None,
            h => Some(h),
        }
    }

    /// Bind `h` and `s` to each other.
    ///
    /// Any previous partner of either side is left pointing at its old
    /// partner; callers unbind explicitly with [`Matching::unbind_hospital`].
    #[inline]
    pub fn bind(&mut self, h: usize, s: usize) {
        self.student_of[h] = s;
        self.hospital_of[s] = h;
    }

    /// Clear hospital `h`'s side of the binding
    #[inline]
    pub fn unbind_hospital(&mut self, h: usize) {
        self.student_of[h] = 0;
    }

    /// True if every hospital and every student has a partner
    pub fn is_perfect(&self) -> bool {
        self.student_of[1..].iter().all(|&s| s != 0)
            && self.hospital_of[1..].iter().all(|&h| h != 0)
    }

    /// Matched `(hospital, student)` pairs in hospital id order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.student_of
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(_, &s)| s != 0)
            .map(|(h, &s)| (h, s))
    }

    /// Pairs as signed ids, the form the verifier accepts
    pub fn to_raw_pairs(&self) -> Vec<(i64, i64)> {
        self.pairs().map(|(h, s)| (h as i64, s as i64)).collect()
    }

    /// SHA-256 over the hospital-ordered `student_of` array.
    ///
    /// Two matchings have the same digest iff they pair every hospital with
    /// the same student.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.n() as u64).to_le_bytes());
        for &s in &self.student_of[1..] {
            hasher.update((s as u64).to_le_bytes());
        }
        hasher.finalize().into()
    }

    /// Digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
