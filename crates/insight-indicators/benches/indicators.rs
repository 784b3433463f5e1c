//! Benchmarks for indicator implementations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use insight_core::traits::Indicator;
use insight_core::types::{Bar, BarSeries};
use insight_indicators::{IndicatorEngine, Rsi, Sma};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn generate_series(size: usize) -> BarSeries {
    generate_test_data(size)
        .into_iter()
        .enumerate()
        .map(|(i, close)| {
            Bar::new(
                i as i64 * 86_400_000,
                close,
                close + 1.0,
                close - 1.0,
                close,
                1000.0,
            )
        })
        .collect()
}

fn benchmark_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("SMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("sliding", size), &data, |b, data| {
            let sma = Sma::new(20);
            b.iter(|| sma.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("sliding", size), &data, |b, data| {
            let rsi = Rsi::new(14);
            b.iter(|| rsi.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_full_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("IndicatorEngine");

    for size in [1000, 10000].iter() {
        let series = generate_series(*size);

        group.bench_with_input(BenchmarkId::new("compute", size), &series, |b, series| {
            let engine = IndicatorEngine::new();
            b.iter(|| engine.compute(black_box(series)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sma, benchmark_rsi, benchmark_full_engine);
criterion_main!(benches);
