use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linrus_blas::{level1, level3, Diag, OwningMatrix, Side, Transpose, Uplo};
use linrus_core::SplitMix64;

fn bench_ddot(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddot");
    for &n in &[64, 256, 1024, 4096, 16384] {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.001).collect();
        let y: Vec<f64> = (0..n).map(|i| i as f64 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::ddot(n, &x, 1, &y, 1));
        });
    }
    group.finish();
}

fn bench_daxpy(c: &mut Criterion) {
    let mut group = c.benchmark_group("daxpy");
    for &n in &[64, 256, 1024, 4096, 16384] {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.001).collect();
        let mut y: Vec<f64> = (0..n).map(|i| i as f64 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| {
                y.fill(0.0);
                level1::daxpy(n, 2.0, &x, 1, &mut y, 1);
            });
        });
    }
    group.finish();
}

fn bench_dnrm2(c: &mut Criterion) {
    let mut group = c.benchmark_group("dnrm2");
    for &n in &[256, 4096, 16384] {
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::dnrm2(n, &x, 1));
        });
    }
    group.finish();
}

fn bench_gemm(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemm");
    for &n in &[32, 64, 128, 256] {
        let mut rng = SplitMix64::new(42);
        let mut a = OwningMatrix::<f64>::zeros(n, n);
        let mut b = OwningMatrix::<f64>::zeros(n, n);
        a.fill_uniform(&mut rng, -1.0, 1.0);
        b.fill_uniform(&mut rng, -1.0, 1.0);
        let mut c_mat = OwningMatrix::<f64>::zeros(n, n);
        group.bench_with_input(BenchmarkId::new("views", n), &n, |bench, &_n| {
            bench.iter(|| {
                level3::gemm(
                    Transpose::NoTrans,
                    Transpose::NoTrans,
                    1.0,
                    a.all(),
                    b.all(),
                    0.0,
                    c_mat.all_mut(),
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("strided", n), &n, |bench, &n| {
            bench.iter(|| {
                level3::dgemm(
                    Transpose::NoTrans,
                    Transpose::NoTrans,
                    n,
                    n,
                    n,
                    1.0,
                    a.as_slice(),
                    n,
                    b.as_slice(),
                    n,
                    0.0,
                    c_mat.as_mut_slice(),
                    n,
                )
            });
        });
    }
    group.finish();
}

fn bench_trsm(c: &mut Criterion) {
    let mut group = c.benchmark_group("trsm");
    for &n in &[32, 128] {
        let mut rng = SplitMix64::new(7);
        let mut u = OwningMatrix::<f64>::zeros(n, n);
        u.fill_uniform(&mut rng, -1.0, 1.0);
        u.all_mut().diagonal_mut(0).add(n as f64);
        let mut b = OwningMatrix::<f64>::zeros(n, n);
        b.fill_uniform(&mut rng, -1.0, 1.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &_n| {
            bench.iter(|| {
                let mut x = b.clone();
                level3::trsm(
                    Side::Left,
                    Uplo::Upper,
                    Transpose::NoTrans,
                    Diag::NonUnit,
                    1.0,
                    u.all(),
                    x.all_mut(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ddot, bench_daxpy, bench_dnrm2, bench_gemm, bench_trsm);
criterion_main!(benches);
