use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use spdpack::{PackedCholesky, PackedSymmetric};

// ---------------------------------------------------------------------------
// Helpers: deterministic SPD matrices in both layouts
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize, n: usize) -> f64 {
    let off = 1.0 / ((i + j + 1) as f64);
    if i == j {
        off + n as f64
    } else {
        off
    }
}

fn packed_spd(n: usize) -> PackedSymmetric<f64> {
    PackedSymmetric::from_fn(n, |i, j| entry(i, j, n))
}

fn nalgebra_spd(n: usize) -> nalgebra::DMatrix<f64> {
    nalgebra::DMatrix::from_fn(n, n, |i, j| entry(i, j, n))
}

fn factored(n: usize) -> PackedCholesky<f64> {
    let mut chol = PackedCholesky::new(packed_spd(n));
    chol.factorize().unwrap();
    chol
}

const SIZES: [usize; 4] = [8, 32, 128, 256];

// ---------------------------------------------------------------------------
// Factorize
// ---------------------------------------------------------------------------

fn factorize(c: &mut Criterion) {
    let mut g = c.benchmark_group("factorize");
    for n in SIZES {
        g.bench_with_input(BenchmarkId::new("spdpack", n), &n, |b, &n| {
            let a = packed_spd(n);
            b.iter(|| {
                let mut chol = PackedCholesky::new(black_box(a.clone()));
                chol.factorize().unwrap();
                chol
            })
        });
        g.bench_with_input(BenchmarkId::new("nalgebra", n), &n, |b, &n| {
            let a = nalgebra_spd(n);
            b.iter(|| nalgebra::linalg::Cholesky::new(black_box(a.clone())).unwrap())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Solve
// ---------------------------------------------------------------------------

fn solve(c: &mut Criterion) {
    let mut g = c.benchmark_group("solve");
    for n in SIZES {
        g.bench_with_input(BenchmarkId::new("spdpack", n), &n, |b, &n| {
            let chol = factored(n);
            let rhs = vec![1.0; n];
            b.iter(|| {
                let mut x = black_box(rhs.clone());
                chol.solve(&mut x).unwrap();
                x
            })
        });
        g.bench_with_input(BenchmarkId::new("nalgebra", n), &n, |b, &n| {
            let chol = nalgebra::linalg::Cholesky::new(nalgebra_spd(n)).unwrap();
            let rhs = nalgebra::DVector::from_element(n, 1.0);
            b.iter(|| chol.solve(black_box(&rhs)))
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Structural updates vs. refactorizing
// ---------------------------------------------------------------------------

fn update_add(c: &mut Criterion) {
    let mut g = c.benchmark_group("update_add");
    for n in SIZES {
        let chol = factored(n);
        let d: Vec<f64> = (0..=n).map(|j| entry(n, j, n + 1)).collect();
        g.bench_with_input(BenchmarkId::new("border", n), &n, |b, _| {
            b.iter(|| {
                let mut work = chol.clone();
                work.update_add(black_box(&d)).unwrap();
                work
            })
        });
        g.bench_with_input(BenchmarkId::new("refactorize", n), &n, |b, &n| {
            let a = PackedSymmetric::from_fn(n + 1, |i, j| entry(i, j, n + 1));
            b.iter(|| {
                let mut work = PackedCholesky::new(black_box(a.clone()));
                work.factorize().unwrap();
                work
            })
        });
    }
    g.finish();
}

fn update_del(c: &mut Criterion) {
    let mut g = c.benchmark_group("update_del");
    for n in SIZES {
        let chol = factored(n);
        for (label, ix) in [("first", 0), ("middle", n / 2), ("last", n - 1)] {
            g.bench_with_input(BenchmarkId::new(label, n), &ix, |b, &ix| {
                b.iter(|| {
                    let mut work = chol.clone();
                    work.update_del(black_box(ix)).unwrap();
                    work
                })
            });
        }
    }
    g.finish();
}

fn rcond(c: &mut Criterion) {
    let mut g = c.benchmark_group("rcond");
    for n in SIZES {
        let chol = factored(n);
        g.bench_with_input(BenchmarkId::new("spdpack", n), &n, |b, _| {
            b.iter(|| black_box(&chol).rcond())
        });
    }
    g.finish();
}

criterion_group!(benches, factorize, solve, update_add, update_del, rcond);
criterion_main!(benches);
