#[macro_use]
extern crate criterion;
use criterion::Criterion;
use num_divisor::{nt_funcs, Either, PrimeBuffer, PrimeBufferExt, SieveBuffer};

pub fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    group.bench_function("1M single segment", |b| {
        b.iter(|| {
            let mut pb = SieveBuffer::new();
            pb.sieve_up_to(1_000_000).unwrap();
            pb.primes().len()
        })
    });
    group.bench_function("1M in 64k segments", |b| {
        b.iter(|| {
            let mut pb = SieveBuffer::new();
            for bound in (1..=16u64).map(|i| i * 65536) {
                pb.sieve_up_to(bound).unwrap();
            }
            pb.primes().len()
        })
    });

    group.finish();
}

pub fn bench_factorization(c: &mut Criterion) {
    const N: u64 = 1_000_000;
    const STEP: usize = 501;
    let mut group = c.benchmark_group("factorize");

    group.bench_function("shared cache", |b| {
        let mut pb = SieveBuffer::new();
        b.iter(|| {
            (1..N)
                .step_by(STEP)
                .map(|n| pb.factorize(n).unwrap().len())
                .sum::<usize>()
        })
    });
    group.bench_function("one-shot", |b| {
        b.iter(|| {
            (1..N)
                .step_by(STEP * 10)
                .map(|n| nt_funcs::factorize(n).unwrap().len())
                .sum::<usize>()
        })
    });

    group.finish();
}

pub fn bench_divisors(c: &mut Criterion) {
    let mut group = c.benchmark_group("divisors");

    group.bench_function("highly composite", |b| {
        let mut pb = SieveBuffer::new();
        b.iter(|| pb.divisors(Either::Left(720720)).unwrap().len())
    });

    group.finish();
}

criterion_group!(benches, bench_sieve, bench_factorization, bench_divisors);
criterion_main!(benches);
