//! Calculator benchmarks: single evaluations and parameter sweeps.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use margincalc::{FormulaParameters, Inputs, compute};

/// Benchmark: one evaluation of the default listing
fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    group.throughput(Throughput::Elements(1));

    let inputs = Inputs::default();
    let formulas = FormulaParameters::default();

    group.bench_function("default_listing", |b| {
        b.iter(|| black_box(compute(black_box(&inputs), black_box(&formulas))))
    });

    group.finish();
}

/// Benchmark: sweep the price the way an editor recomputes on every keystroke
fn bench_price_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_sweep");
    let formulas = FormulaParameters::default();

    for steps in [100u32, 10_000] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut best = f64::MIN;
                for i in 0..steps {
                    let inputs = Inputs {
                        price: 1_000.0 + f64::from(i),
                        ..Inputs::default()
                    };
                    best = best.max(compute(&inputs, &formulas).total_profit);
                }
                black_box(best)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_price_sweep);
criterion_main!(benches);
