//! Throughput of the core algebraic operations on multi-variable polynomials
//! of growing width, mirroring the shape of the teacher's own benchmark
//! harness (one `criterion_group` per operation family).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poly::{Monomial, Polynomial};

/// Builds a dense univariate polynomial `1 + x + x^2 + ... + x^(n-1)`.
fn dense(n: i32) -> Polynomial {
    let monos = (0..n)
        .map(|e| Monomial::new(Polynomial::from_coeff(1), e))
        .collect();
    Polynomial::from_monomials(monos)
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for &n in &[8, 64, 256] {
        let p = dense(n);
        let q = dense(n);
        group.bench_function(format!("dense_{n}"), |b| {
            b.iter(|| black_box(&p) + black_box(&q))
        });
    }
    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for &n in &[8, 32, 64] {
        let p = dense(n);
        let q = dense(n);
        group.bench_function(format!("dense_{n}"), |b| {
            b.iter(|| black_box(&p) * black_box(&q))
        });
    }
    group.finish();
}

fn bench_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("at");
    for &n in &[8, 64, 256] {
        let p = dense(n);
        group.bench_function(format!("dense_{n}"), |b| b.iter(|| black_box(&p).at(3)));
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_mul, bench_at);
criterion_main!(benches);
