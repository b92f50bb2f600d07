//! Criterion benchmarks for poly-evolve.
//!
//! Measures assertion scoring and whole generational runs on the
//! derivative band problem (`2t - 2 < df(t) < 2t + 2`).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use poly_evolve::assertion::{Assertion, AssertionGroup, Comparison, Mode};
use poly_evolve::evolution::{Evolution, EvolutionConfig};
use poly_evolve::polynomial::Polynomial;

// ===========================================================================
// Problem
// ===========================================================================

fn derivative_band(width: f64) -> AssertionGroup {
    let band = |offset: f64, comparison| {
        Assertion::builder()
            .reference(Polynomial::from_pairs([(2.0, 1.0), (offset, 0.0)]))
            .range(-width / 2.0, width / 2.0)
            .comparison(comparison)
            .modes(Mode::Derivative, Mode::Function)
            .build()
            .unwrap()
    };
    AssertionGroup::new()
        .with(band(2.0, Comparison::Less))
        .with(band(-2.0, Comparison::Greater))
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("assertion_scoring");
    let candidate = Polynomial::from_pairs([(0.5, 0.0), (1.0, 1.0), (1.0, 2.0), (0.01, 3.0), (0.0, 4.0)]);

    for &width in &[1.0, 10.0, 20.0] {
        let assertions = derivative_band(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &assertions, |b, a| {
            b.iter(|| black_box(a.apply_to(black_box(&candidate))))
        });
    }
    group.finish();
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolution_band");
    group.sample_size(10);

    for (pop, gen) in [(50usize, 20usize), (200, 20), (200, 50)] {
        let config = EvolutionConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_perfect_threshold(2.0)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &(derivative_band(20.0), config),
            |b, (a, c)| {
                b.iter(|| {
                    let mut evolution = Evolution::new(a.clone(), c.clone()).unwrap();
                    black_box(evolution.run(|_| true))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_scoring, bench_evolution);
criterion_main!(benches);
