use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_poly::__testing::RandTermStream;
use sparse_poly::{ListPoly64, Poly64};

criterion_main!(micro_benches);
criterion_group!(micro_benches, from_terms, mul_map, mul_list, eval);

const MAX_COEFF: i64 = 100;

pub fn from_terms(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_terms");
    for n in [8, 32, 128, 512] {
        let terms = RandTermStream::new(0, MAX_COEFF, 4 * n)
            .take(n as usize)
            .collect::<Vec<_>>();
        group.bench_function(BenchmarkId::new("map", n), |b| {
            b.iter(|| black_box(Poly64::from_terms(black_box(terms.clone()))))
        });
        group.bench_function(BenchmarkId::new("list", n), |b| {
            b.iter(|| black_box(ListPoly64::from_terms(black_box(terms.clone()))))
        });
    }
    group.finish();
}

pub fn mul_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul map");
    for n in [4, 16, 64] {
        let mut s = RandTermStream::new(1, MAX_COEFF, 4 * n);
        let a: Poly64 = s.poly(n as usize);
        let b: Poly64 = s.poly(n as usize);
        group.bench_function(BenchmarkId::from_parameter(n), |bench| {
            bench.iter(|| black_box(black_box(&a) * black_box(&b)))
        });
    }
    group.finish();
}

pub fn mul_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul list");
    for n in [4, 16, 64] {
        let mut s = RandTermStream::new(1, MAX_COEFF, 4 * n);
        let a: ListPoly64 = s.poly(n as usize);
        let b: ListPoly64 = s.poly(n as usize);
        group.bench_function(BenchmarkId::from_parameter(n), |bench| {
            bench.iter(|| black_box(black_box(&a) * black_box(&b)))
        });
    }
    group.finish();
}

pub fn eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");
    for n in [1_u32, 16, 256, 4096] {
        let p = Poly64::from_terms((0..n).step_by(3).map(|e| (1, e))).unwrap();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(p.eval(black_box(0.999))))
        });
    }
    group.finish();
}
