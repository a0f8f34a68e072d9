//! Benchmarks for the AMIN kernel
//!
//! - Sizes: 100, 1000, 10000, 100000 elements
//! - Real (`f32`, `f64`) and complex (`Complex64`) inputs
//! - Contiguous and strided access
//! - Throughput reported in elements/second

use celda::blas::{amin, amin_strided};
use celda::Complex64;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate test data with the minimum near the end
fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| ((size - i) as f64) * if i % 2 == 0 { 0.5 } else { -0.5 })
        .collect()
}

fn bench_amin_real(c: &mut Criterion) {
    let mut group = c.benchmark_group("amin_real");

    for size in [100, 1000, 10000, 100000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("f64", size), size, |bencher, &size| {
            let data = generate_test_data(size);
            bencher.iter(|| black_box(amin(black_box(&data))));
        });

        group.bench_with_input(BenchmarkId::new("f32", size), size, |bencher, &size| {
            let data: Vec<f32> = generate_test_data(size)
                .iter()
                .map(|&x| x as f32)
                .collect();
            bencher.iter(|| black_box(amin(black_box(&data))));
        });
    }

    group.finish();
}

fn bench_amin_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("amin_complex");

    for size in [100, 1000, 10000, 100000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("Complex64", size),
            size,
            |bencher, &size| {
                let data: Vec<Complex64> = generate_test_data(size)
                    .iter()
                    .map(|&x| Complex64::new(x, -0.25 * x))
                    .collect();
                bencher.iter(|| black_box(amin(black_box(&data))));
            },
        );
    }

    group.finish();
}

fn bench_amin_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("amin_strided");
    let n = 10000;

    for incx in [1usize, 2, 8].iter() {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("incx", incx), incx, |bencher, &incx| {
            let data = generate_test_data(n * incx);
            bencher.iter(|| black_box(amin_strided(n, black_box(&data), incx)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_amin_real,
    bench_amin_complex,
    bench_amin_strided
);
criterion_main!(benches);
