//! Benchmarks for pattern scanning and indicator computation.

use candlescan::indicators;
use candlescan::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate deterministic pseudo-random bars.
fn generate_candles(n: usize) -> Vec<Candle> {
    let mut candles = Vec::with_capacity(n);
    let mut price = 100.0;

    for i in 0..n {
        let change = ((i * 7 + 13) % 100) as f64 / 50.0 - 1.0;
        let volatility = 2.0 + ((i * 3) % 10) as f64 / 5.0;

        let open = price;
        let close = price + change;
        let high = open.max(close) + volatility * 0.5;
        let low = open.min(close) - volatility * 0.5;

        candles.push(Candle::new(open, high, low, close));
        price = close;
    }

    candles
}

fn bench_scan_full_catalog(c: &mut Criterion) {
    let candles = generate_candles(1000);

    c.bench_function("scan_full_catalog", |b| {
        b.iter(|| {
            let _ = black_box(scan(black_box(&candles)));
        })
    });
}

fn bench_scan_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_scaling");

    for size in [10, 100, 1000, 10000].iter() {
        let candles = generate_candles(*size);

        group.bench_with_input(BenchmarkId::new("scan", size), size, |b, _| {
            b.iter(|| {
                let _ = black_box(scan(black_box(&candles)));
            })
        });
    }

    group.finish();
}

fn bench_parallel_scan(c: &mut Criterion) {
    let series: Vec<Vec<Candle>> = (0..8).map(|i| generate_candles(1000 + i)).collect();
    let instruments: Vec<(&str, &[Candle])> =
        series.iter().map(|s| ("SYM", s.as_slice())).collect();

    c.bench_function("parallel_scan_8_instruments", |b| {
        b.iter(|| {
            let _ = black_box(scan_parallel(black_box(instruments.clone())));
        })
    });
}

fn bench_indicators(c: &mut Criterion) {
    let closes: Vec<f64> = generate_candles(1000).iter().map(|b| b.close).collect();

    c.bench_function("rsi_1000_closes", |b| {
        b.iter(|| {
            let _ = black_box(indicators::rsi(black_box(&closes), 14));
        })
    });

    c.bench_function("macd_1000_closes", |b| {
        b.iter(|| {
            let _ = black_box(indicators::macd(black_box(&closes)));
        })
    });

    c.bench_function("indicator_request_1000_closes", |b| {
        b.iter(|| {
            let _ = black_box(indicators::compute_named(
                black_box(&closes),
                &["RSI", "MACD", "EMA"],
            ));
        })
    });
}

criterion_group!(
    benches,
    bench_scan_full_catalog,
    bench_scan_scaling,
    bench_parallel_scan,
    bench_indicators,
);

criterion_main!(benches);
