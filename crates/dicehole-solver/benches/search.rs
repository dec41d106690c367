//! Benchmarks for the closest-solution search.
//!
//! Measures `find_best` over the full operator set for growing numbers of
//! dice. The search is quadratic in the number of dice, so the larger inputs
//! show how far the exhaustive approach stretches.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dicehole_core::OperatorSet;
use dicehole_solver::find_best;

const DICE_COUNTS: [usize; 4] = [3, 6, 12, 24];

fn dice(count: usize) -> Vec<i64> {
    (0..count).map(|i| i64::try_from(i % 6).unwrap() + 1).collect()
}

fn bench_find_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_best");
    for count in DICE_COUNTS {
        let values = dice(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &values, |b, values| {
            b.iter(|| find_best(OperatorSet::ALL, hint::black_box(values), hint::black_box(15)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_best);
criterion_main!(benches);
