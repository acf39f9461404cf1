//! Behavioral properties of the engine and verifier.
//!
//! Small instances are checked exhaustively: every perfect matching is
//! enumerated, the stable ones are picked out with `verify`, and the solver's
//! result is compared against all of them.

mod common;

use stable_match::{
    verify, BlockingPair, Instance, InvalidReason, MatchingEngine, ProposalOutcome, Verdict,
};

use common::{random_instance, sample_instance};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// All permutations of `1..=n`, as `student_of` arrays (index 0 unused)
fn all_matchings(n: usize) -> Vec<Vec<usize>> {
    fn extend(n: usize, current: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if current.len() == n + 1 {
            out.push(current.clone());
            return;
        }
        for s in 1..=n {
            if !used[s] {
                used[s] = true;
                current.push(s);
                extend(n, current, used, out);
                current.pop();
                used[s] = false;
            }
        }
    }

    let mut out = Vec::new();
    extend(n, &mut vec![0], &mut vec![false; n + 1], &mut out);
    out
}

fn to_pairs(student_of: &[usize]) -> Vec<(i64, i64)> {
    (1..student_of.len()).map(|h| (h as i64, student_of[h] as i64)).collect()
}

fn stable_matchings(instance: &Instance) -> Vec<Vec<usize>> {
    all_matchings(instance.n())
        .into_iter()
        .filter(|m| verify(instance, &to_pairs(m)).is_stable())
        .collect()
}

fn solve(instance: &Instance) -> stable_match::Assignment {
    MatchingEngine::from_instance(instance).unwrap().solve().unwrap()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn sample_solution_and_proposal_count() {
    let instance = sample_instance();
    let assignment = solve(&instance);

    let pairs: Vec<_> = assignment.matching.pairs().collect();
    assert_eq!(pairs, vec![(1, 2), (2, 1), (3, 3)]);
    assert_eq!(assignment.proposals, 5);
    assert_eq!(verify(&instance, &assignment.matching.to_raw_pairs()), Verdict::Stable);
}

#[test]
fn sample_first_choices_are_unstable() {
    let verdict = verify(&sample_instance(), &[(1, 1), (2, 2), (3, 3)]);
    assert_eq!(verdict, Verdict::Unstable(BlockingPair { hospital: 2, student: 1 }));
}

#[test]
fn verifier_rejections() {
    let instance = sample_instance();
    let cases: Vec<(Vec<(i64, i64)>, Verdict)> = vec![
        (
            vec![(1, 2), (2, 1)],
            Verdict::Invalid(InvalidReason::WrongCount { expected: 3, got: 2 }),
        ),
        (
            vec![(1, 2), (2, 1), (3, 9)],
            Verdict::Invalid(InvalidReason::OutOfRange { hospital: 3, student: 9 }),
        ),
        (
            vec![(1, 2), (1, 1), (3, 3)],
            Verdict::Invalid(InvalidReason::DuplicateHospital(1)),
        ),
        (
            vec![(1, 2), (2, 3), (3, 3)],
            Verdict::Invalid(InvalidReason::DuplicateStudent(3)),
        ),
    ];

    for (pairs, expected) in cases {
        assert_eq!(verify(&instance, &pairs), expected, "pairs {pairs:?}");
    }
}

/// Three stable matchings exist; hospitals get their first choices.
#[test]
fn latin_square_is_hospital_optimal() {
    let instance = Instance::from_rows(
        vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]],
        vec![vec![2, 3, 1], vec![3, 1, 2], vec![1, 2, 3]],
    )
    .unwrap();

    assert_eq!(stable_matchings(&instance).len(), 3);

    let (assignment, trace) = MatchingEngine::from_instance(&instance)
        .unwrap()
        .solve_traced()
        .unwrap();
    assert_eq!(assignment.proposals, 3);
    assert!(trace.iter().all(|p| p.outcome == ProposalOutcome::Accepted));
    for h in 1..=3 {
        assert_eq!(assignment.matching.student_of(h), Some(h));
    }

    // Student-optimal matching is also stable but not what the engine picks
    assert!(verify(&instance, &[(2, 1), (3, 2), (1, 3)]).is_stable());
}

// ============================================================================
// EXHAUSTIVE PROPERTIES
// ============================================================================

/// Among all stable matchings, every hospital does best and every student
/// does worst in the solver's result.
#[test]
fn result_is_hospital_optimal_and_student_pessimal() {
    for n in 1..=5 {
        for seed in 0..40 {
            let instance = random_instance(n, 1_000 + seed);
            let result = solve(&instance).matching;
            let stable = stable_matchings(&instance);

            let solver_student_of: Vec<usize> =
                (0..=n).map(|h| result.student_of(h).unwrap_or(0)).collect();
            assert!(stable.contains(&solver_student_of), "n={n} seed={seed}");

            for other in &stable {
                for h in 1..=n {
                    assert!(
                        instance.hospital_rank(h, result.student_of(h).unwrap())
                            <= instance.hospital_rank(h, other[h]),
                        "hospital {h} could do better (n={n} seed={seed})"
                    );
                }
                let mut other_hospital_of = vec![0; n + 1];
                for h in 1..=n {
                    other_hospital_of[other[h]] = h;
                }
                for s in 1..=n {
                    assert!(
                        instance.student_rank(s, result.hospital_of(s).unwrap())
                            >= instance.student_rank(s, other_hospital_of[s]),
                        "student {s} could do worse (n={n} seed={seed})"
                    );
                }
            }
        }
    }
}

/// Every unstable perfect matching is reported with a genuine blocking pair.
#[test]
fn reported_blocking_pairs_are_genuine() {
    for seed in 0..10 {
        let instance = random_instance(4, 2_000 + seed);
        for m in all_matchings(4) {
            let mut hospital_of = vec![0; 5];
            for h in 1..=4 {
                hospital_of[m[h]] = h;
            }

            if let Verdict::Unstable(BlockingPair { hospital, student }) =
                verify(&instance, &to_pairs(&m))
            {
                assert!(instance.hospitals().prefers(hospital, student, m[hospital]));
                assert!(instance.students().prefers(student, hospital, hospital_of[student]));
            }
        }
    }
}

/// The exhausted-cursor guard in the engine cannot fire on validated input:
/// even the adversarial all-identical instance stays within `n^2` proposals
/// and leaves nobody unmatched. The guard is intentionally unexercised.
#[test]
fn exhausted_cursor_guard_is_unreachable() {
    let n = 8;
    let list: Vec<usize> = (1..=n).collect();
    let instance = Instance::from_rows(vec![list.clone(); n], vec![list; n]).unwrap();

    let assignment = solve(&instance);
    assert!(assignment.matching.is_perfect());
    assert!(assignment.proposals <= (n * n) as u64);
}
