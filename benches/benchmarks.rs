//! Benchmarks for statreg
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use statreg::register::SampleRegister;

// ============================================================================
// Sample Register Benchmarks
// ============================================================================

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_register");

    group.throughput(Throughput::Elements(1_000));
    group.bench_function("fill_1000", |b| {
        b.iter(|| {
            let mut reg = SampleRegister::new(1_000);
            for i in 0..1_000u64 {
                reg.insert(black_box(i as f64));
            }
            black_box(reg.len())
        });
    });

    group.throughput(Throughput::Elements(1));
    group.bench_function("insert_saturated", |b| {
        let mut reg = SampleRegister::new(1_000);
        for i in 0..1_000u64 {
            reg.insert(i as f64);
        }
        b.iter(|| {
            reg.insert(black_box(1.0));
        });
    });

    for size in [1_000usize, 100_000] {
        let mut reg = SampleRegister::new(size);
        for i in 0..size {
            reg.insert(i as f64);
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("sum_{}", size), |b| {
            b.iter(|| black_box(reg.sum()));
        });

        group.bench_function(format!("average_{}", size), |b| {
            b.iter(|| black_box(reg.average()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_register);

criterion_main!(benches);
