//! Preference data model for a two-sided matching instance.
//!
//! ## Layout
//!
//! Agents on both sides are identified by `1..=n`. Id `0` is reserved as the
//! "unmatched" sentinel, so every table is sized `(n + 1) x (n + 1)` and
//! stored as one dense row-major `Vec<usize>`. No maps are involved, which
//! keeps every traversal in id order.
//!
//! ## Rank Tables
//!
//! Each [`PreferenceTable`] stores a preference order together with its
//! positional inverse:
//!
//! ```text
//! order[a][k] = b   <=>   rank[a][b] = k        (k in 1..=n)
//! ```
//!
//! Both halves are written by the same call, so they can never drift apart.
//! Lower rank means more preferred.
//!
//! ## Example
//!
//! ```
//! use stable_match::types::Instance;
//!
//! let instance = Instance::from_rows(
//!     vec![vec![1, 2], vec![2, 1]],
//!     vec![vec![2, 1], vec![1, 2]],
//! ).unwrap();
//!
//! assert_eq!(instance.n(), 2);
//! assert_eq!(instance.hospital_pref(2, 1), 2);
//! assert_eq!(instance.student_rank(1, 2), 1);
//! ```

use crate::error::ParseError;

// ============================================================================
// Side enum
// ============================================================================

/// Side of the market an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Proposing side
    Hospital,
    /// Receiving side
    Student,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Hospital => f.write_str("hospital"),
            Side::Student => f.write_str("student"),
        }
    }
}

/// Returns true if `line` is a permutation of `1..=n`.
pub fn is_permutation(line: &[usize], n: usize) -> bool {
    if line.len() != n {
        return false;
    }
    let mut seen = vec![false; n + 1];
    for &v in line {
        if v < 1 || v > n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// PreferenceTable
// ============================================================================

/// Preference orders of one side, plus the rank table derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTable {
    n: usize,
    /// `order[a * (n + 1) + k]`: agent at position `k` in `a`'s list
    order: Vec<usize>,
    /// `rank[a * (n + 1) + b]`: position of `b` in `a`'s list
    rank: Vec<usize>,
}

impl PreferenceTable {
    /// Create an all-zero table for `n` agents
    pub fn new(n: usize) -> Self {
        let cells = (n + 1) * (n + 1);
        Self {
            n,
            order: vec![0; cells],
            rank: vec![0; cells],
        }
    }

    /// Number of agents per side
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    fn stride(&self) -> usize {
        self.n + 1
    }

    /// (Re)write `agent`'s row and its rank row.
    ///
    /// The caller must have checked `agent` is in `1..=n` and that `prefs`
    /// is a permutation of `1..=n`.
    pub(crate) fn write_row(&mut self, agent: usize, prefs: &[usize]) {
        debug_assert!(is_permutation(prefs, self.n));
        let base = agent * self.stride();
        for (i, &other) in prefs.iter().enumerate() {
            let k = i + 1;
            self.order[base + k] = other;
            self.rank[base + other] = k;
        }
    }

    /// Agent at position `k` (1-indexed) in `agent`'s list
    #[inline]
    pub fn preference(&self, agent: usize, k: usize) -> usize {
        self.order[agent * self.stride() + k]
    }

    /// Position of `other` in `agent`'s list (1 = most preferred)
    #[inline]
    pub fn rank(&self, agent: usize, other: usize) -> usize {
        self.rank[agent * self.stride() + other]
    }

    /// `agent`'s full preference list, most preferred first
    pub fn row(&self, agent: usize) -> &[usize] {
        let base = agent * self.stride();
        &self.order[base + 1..base + self.stride()]
    }

    /// True if `agent` strictly prefers `a` over `b`
    #[inline]
    pub fn prefers(&self, agent: usize, a: usize, b: usize) -> bool {
        self.rank(agent, a) < self.rank(agent, b)
    }
}

// ============================================================================
// Instance
// ============================================================================

/// A complete matching instance: `n` hospitals and `n` students, each with a
/// strict total order over the other side.
///
/// Built once from validated input, then read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    hospitals: PreferenceTable,
    students: PreferenceTable,
}

impl Instance {
    /// Assemble an instance from already-validated tables
    pub(crate) fn from_tables(hospitals: PreferenceTable, students: PreferenceTable) -> Self {
        debug_assert_eq!(hospitals.n(), students.n());
        Self { hospitals, students }
    }

    /// Build an instance from raw preference rows.
    ///
    /// Row `i` of `hospital_rows` is hospital `i + 1`'s list. Rows are checked
    /// in order (all hospitals, then all students) and the first bad row is
    /// reported with the same code the text parser uses.
    pub fn from_rows(
        hospital_rows: Vec<Vec<usize>>,
        student_rows: Vec<Vec<usize>>,
    ) -> Result<Self, ParseError> {
        let n = hospital_rows.len();
        if student_rows.len() != n {
            return Err(ParseError::RowCountMismatch {
                hospitals: n,
                students: student_rows.len(),
            });
        }

        let mut hospitals = PreferenceTable::new(n);
        for (i, row) in hospital_rows.iter().enumerate() {
            if !is_permutation(row, n) {
                return Err(ParseError::InvalidHospitalLine(i + 1));
            }
            hospitals.write_row(i + 1, row);
        }

        let mut students = PreferenceTable::new(n);
        for (i, row) in student_rows.iter().enumerate() {
            if !is_permutation(row, n) {
                return Err(ParseError::InvalidStudentLine(i + 1));
            }
            students.write_row(i + 1, row);
        }

        Ok(Self::from_tables(hospitals, students))
    }

    /// Number of agents per side
    #[inline]
    pub fn n(&self) -> usize {
        self.hospitals.n()
    }

    /// Hospital-side preference table
    pub fn hospitals(&self) -> &PreferenceTable {
        &self.hospitals
    }

    /// Student-side preference table
    pub fn students(&self) -> &PreferenceTable {
        &self.students
    }

    /// Student at position `k` in hospital `h`'s list
    #[inline]
    pub fn hospital_pref(&self, h: usize, k: usize) -> usize {
        self.hospitals.preference(h, k)
    }

    /// Position of student `s` in hospital `h`'s list
    #[inline]
    pub fn hospital_rank(&self, h: usize, s: usize) -> usize {
        self.hospitals.rank(h, s)
    }

    /// Position of hospital `h` in student `s`'s list
    #[inline]
    pub fn student_rank(&self, s: usize, h: usize) -> usize {
        self.students.rank(s, h)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
