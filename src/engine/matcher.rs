//! Hospital-proposing deferred acceptance.
//!
//! ## Queue Discipline
//!
//! Unmatched hospitals wait in a FIFO queue. The front hospital proposes to
//! the next student on its list:
//!
//! ```text
//! student free          -> accept, pop front
//! student prefers new   -> rebind, pop front, push displaced hospital to back
//! student prefers old   -> reject, proposer STAYS at front and tries again
//! ```
//!
//! Each hospital's cursor only moves forward, so every (hospital, student)
//! pair is proposed at most once and a run makes at most `n^2` proposals.
//! The result is hospital-optimal and student-pessimal.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::error::SetupError;
use crate::types::{is_permutation, Instance, MatchReceipt, Matching, PreferenceTable, Side};

// ============================================================================
// Proposal trace
// ============================================================================

/// What happened to a single proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalOutcome {
    /// Student was free and accepted
    Accepted,
    /// Student accepted and dropped this previously held hospital
    Displaced(usize),
    /// Student kept its current hospital
    Rejected,
}

/// One proposal made during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    /// Proposing hospital
    pub hospital: usize,
    /// Student proposed to
    pub student: usize,
    /// Result of the proposal
    pub outcome: ProposalOutcome,
}

// ============================================================================
// Assignment
// ============================================================================

/// Result of a solve: the matching and how many proposals it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Final matching
    pub matching: Matching,
    /// Total proposals made
    pub proposals: u64,
}

impl Assignment {
    /// Summarize this assignment as a receipt
    pub fn receipt(&self) -> MatchReceipt {
        MatchReceipt::new(&self.matching, self.proposals)
    }
}

// ============================================================================
// MatchingEngine
// ============================================================================

/// Deferred-acceptance matching engine.
///
/// The engine is sized at construction. Every hospital and every student must
/// be given exactly one preference list before [`MatchingEngine::solve`].
///
/// ## Example
///
/// ```
/// use stable_match::engine::MatchingEngine;
///
/// let mut engine = MatchingEngine::new(2);
/// engine.set_hospital_preferences(1, &[1, 2]).unwrap();
/// engine.set_hospital_preferences(2, &[1, 2]).unwrap();
/// engine.set_student_preferences(1, &[2, 1]).unwrap();
/// engine.set_student_preferences(2, &[1, 2]).unwrap();
///
/// let result = engine.solve().unwrap();
/// assert_eq!(result.matching.student_of(1), Some(2));
/// assert_eq!(result.matching.student_of(2), Some(1));
/// assert_eq!(result.proposals, 3);
/// ```
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    hospitals: PreferenceTable,
    students: PreferenceTable,
    hospital_set: Vec<bool>,
    student_set: Vec<bool>,
}

impl MatchingEngine {
    /// Create an engine for `n` hospitals and `n` students
    pub fn new(n: usize) -> Self {
        Self {
            hospitals: PreferenceTable::new(n),
            students: PreferenceTable::new(n),
            hospital_set: vec![false; n + 1],
            student_set: vec![false; n + 1],
        }
    }

    /// Create an engine and load every row of `instance` through the setters
    pub fn from_instance(instance: &Instance) -> Result<Self, SetupError> {
        let n = instance.n();
        let mut engine = Self::new(n);
        for h in 1..=n {
            engine.set_hospital_preferences(h, instance.hospitals().row(h))?;
        }
        for s in 1..=n {
            engine.set_student_preferences(s, instance.students().row(s))?;
        }
        Ok(engine)
    }

    /// Number of agents per side
    #[inline]
    pub fn n(&self) -> usize {
        self.hospitals.n()
    }

    /// Set hospital `hospital`'s preference order over students.
    ///
    /// # Errors
    ///
    /// Fails without mutating anything if the list length is not `n`, the id
    /// is outside `1..=n`, the list is not a permutation, or the hospital was
    /// already configured.
    pub fn set_hospital_preferences(
        &mut self,
        hospital: usize,
        preferences: &[usize],
    ) -> Result<(), SetupError> {
        self.check(Side::Hospital, hospital, preferences)?;
        self.hospitals.write_row(hospital, preferences);
        self.hospital_set[hospital] = true;
        Ok(())
    }

    /// Set student `student`'s preference order over hospitals.
    ///
    /// Also derives the student's rank row.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MatchingEngine::set_hospital_preferences`].
    pub fn set_student_preferences(
        &mut self,
        student: usize,
        preferences: &[usize],
    ) -> Result<(), SetupError> {
        self.check(Side::Student, student, preferences)?;
        self.students.write_row(student, preferences);
        self.student_set[student] = true;
        Ok(())
    }

    fn check(&self, side: Side, id: usize, preferences: &[usize]) -> Result<(), SetupError> {
        let n = self.n();
        if preferences.len() != n {
            return Err(SetupError::WrongLength { side, expected: n, got: preferences.len() });
        }
        if id < 1 || id > n {
            return Err(SetupError::IdOutOfRange { side, id, n });
        }
        if !is_permutation(preferences, n) {
            return Err(SetupError::NotPermutation { side });
        }
        let already = match side {
            Side::Hospital => self.hospital_set[id],
            Side::Student => self.student_set[id],
        };
        if already {
            return Err(SetupError::AlreadySet { side, id });
        }
        Ok(())
    }

    fn ensure_complete(&self) -> Result<(), SetupError> {
        let n = self.n();
        if let Some(id) = (1..=n).find(|&h| !self.hospital_set[h]) {
            return Err(SetupError::MissingPreferences { side: Side::Hospital, id });
        }
        if let Some(id) = (1..=n).find(|&s| !self.student_set[s]) {
            return Err(SetupError::MissingPreferences { side: Side::Student, id });
        }
        Ok(())
    }

    /// Snapshot the configured preferences as an [`Instance`].
    ///
    /// # Errors
    ///
    /// Fails if some agent has not been configured yet.
    pub fn instance(&self) -> Result<Instance, SetupError> {
        self.ensure_complete()?;
        Ok(Instance::from_tables(self.hospitals.clone(), self.students.clone()))
    }

    /// Run deferred acceptance.
    ///
    /// Deterministic: the same configuration always yields the same matching
    /// and proposal count.
    ///
    /// # Errors
    ///
    /// Only [`SetupError::MissingPreferences`], when some agent was never
    /// configured.
    pub fn solve(&self) -> Result<Assignment, SetupError> {
        self.ensure_complete()?;
        Ok(self.run(|_| {}))
    }

    /// Like [`MatchingEngine::solve`], also returning every proposal in the
    /// order it was made.
    pub fn solve_traced(&self) -> Result<(Assignment, Vec<Proposal>), SetupError> {
        self.ensure_complete()?;
        let mut log = Vec::new();
        let assignment = self.run(|p| log.push(p));
        Ok((assignment, log))
    }

    fn run(&self, mut on_proposal: impl FnMut(Proposal)) -> Assignment {
        let n = self.n();
        let mut queue: VecDeque<usize> = (1..=n).collect();
        let mut next_choice = vec![1usize; n + 1];
        let mut matching = Matching::new(n);
        let mut proposals: u64 = 0;

        while let Some(&hospital) = queue.front() {
            // Unreachable with complete permutations; kept as a guard.
            if next_choice[hospital] > n {
                warn!(hospital, "preference list exhausted, leaving hospital unmatched");
                queue.pop_front();
                continue;
            }

            let student = self.hospitals.preference(hospital, next_choice[hospital]);
            next_choice[hospital] += 1;
            proposals += 1;

            let outcome = match matching.hospital_of(student) {
                None => {
                    matching.bind(hospital, student);
                    queue.pop_front();
                    ProposalOutcome::Accepted
                }
                Some(current) if self.students.prefers(student, hospital, current) => {
                    matching.bind(hospital, student);
                    matching.unbind_hospital(current);
                    queue.pop_front();
                    queue.push_back(current);
                    ProposalOutcome::Displaced(current)
                }
                // Rejected: hospital stays at the front
                Some(_) => ProposalOutcome::Rejected,
            };

            trace!(hospital, student, ?outcome, "proposal");
            on_proposal(Proposal { hospital, student, outcome });
        }

        debug!(n, proposals, "deferred acceptance complete");
        Assignment { matching, proposals }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
