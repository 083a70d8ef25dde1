use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::prelude::SmallRng;

use uknap::baseline;
use uknap::bnb::BnbSolver;
use uknap::entities::Instance;
use uknap::util::{BnbConfig, MemoConfig};
use uknap_bench::config::BenchConfig;
use uknap_bench::generator;

criterion_main!(benches);
criterion_group!(benches, solver_bench, memo_bench);

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn create_instance(size: usize) -> Instance {
    let mut rng = SmallRng::seed_from_u64(0);
    let ext = generator::generate_dataset(size, &BenchConfig::default(), &mut rng)
        .expect("could not generate dataset");
    uknap::io::import(&ext).expect("generated dataset is invalid")
}

/// Branch and bound against dynamic programming on the generated datasets of the harness
fn solver_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("uknap");
    for size in SIZES {
        let instance = create_instance(size);

        group.bench_with_input(BenchmarkId::new("bnb", size), &instance, |b, instance| {
            b.iter(|| BnbSolver::new(black_box(instance), BnbConfig::default()).solve())
        });
        group.bench_with_input(BenchmarkId::new("dp", size), &instance, |b, instance| {
            b.iter(|| baseline::solve_instance(black_box(instance)))
        });
    }
    group.finish();
}

/// Impact of the memoization strategy on the branch-and-bound solver
fn memo_bench(c: &mut Criterion) {
    let instance = create_instance(1_000);
    let strategies = [
        ("disabled", MemoConfig::Disabled),
        ("dense", MemoConfig::Dense),
        ("sparse", MemoConfig::Sparse),
    ];

    let mut group = c.benchmark_group("uknap_memo_1k");
    for (name, memo) in strategies {
        group.bench_function(name, |b| {
            b.iter(|| BnbSolver::new(black_box(&instance), BnbConfig { memo }).solve())
        });
    }
    group.finish();
}
