//! Shared instance generators for integration tests.

#![allow(dead_code)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_match::Instance;

/// Random complete instance: every row an independent shuffle of `1..=n`.
///
/// Same seed = same instance.
pub fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rows = || -> Vec<Vec<usize>> {
        (0..n)
            .map(|_| {
                let mut row: Vec<usize> = (1..=n).collect();
                row.shuffle(&mut rng);
                row
            })
            .collect()
    };
    let hospitals = rows();
    let students = rows();
    Instance::from_rows(hospitals, students).expect("shuffled rows are permutations")
}

/// Render an instance in the text input format
pub fn instance_text(instance: &Instance) -> String {
    let n = instance.n();
    let mut text = format!("{n}\n");
    for h in 1..=n {
        text.push_str(&join(instance.hospitals().row(h)));
    }
    for s in 1..=n {
        text.push_str(&join(instance.students().row(s)));
    }
    text
}

fn join(row: &[usize]) -> String {
    let mut line = row.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
    line.push('\n');
    line
}

/// Hospitals X,Y,Z = 1,2,3; students a,b,c = 1,2,3
pub fn sample_instance() -> Instance {
    Instance::from_rows(
        vec![vec![1, 2, 3], vec![1, 2, 3], vec![2, 3, 1]],
        vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
    )
    .expect("sample is valid")
}
