// Benchmarks for prime-field and extension-field arithmetic

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::OsRng;
use relic_algorithms::field::Field;
use relic_algorithms::fp::{Bls381, Fp};
use relic_algorithms::fpx::{Cyclotomic, Fp12, Fp2, Tower};

type F = Fp<Bls381>;

fn random_fp() -> F {
    F::random(&mut OsRng)
}

fn bench_prime_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp-381");

    group.bench_function("add", |b| {
        b.iter_batched(|| (random_fp(), random_fp()), |(x, y)| black_box(x.add(&y)), BatchSize::SmallInput)
    });

    group.bench_function("mul", |b| {
        b.iter_batched(|| (random_fp(), random_fp()), |(x, y)| black_box(x.mul(&y)), BatchSize::SmallInput)
    });

    group.bench_function("mul_basic", |b| {
        b.iter_batched(|| (random_fp(), random_fp()), |(x, y)| black_box(x.mul_basic(&y)), BatchSize::SmallInput)
    });

    group.bench_function("sqr", |b| {
        b.iter_batched(random_fp, |x| black_box(x.sqr()), BatchSize::SmallInput)
    });

    group.bench_function("inv_basic", |b| {
        b.iter_batched(random_fp, |x| black_box(x.inv_basic()), BatchSize::SmallInput)
    });

    group.bench_function("inv_binar", |b| {
        b.iter_batched(random_fp, |x| black_box(x.inv_binar()), BatchSize::SmallInput)
    });

    group.bench_function("inv_exgcd", |b| {
        b.iter_batched(random_fp, |x| black_box(x.inv_exgcd()), BatchSize::SmallInput)
    });

    group.bench_function("inv_divst", |b| {
        b.iter_batched(random_fp, |x| black_box(x.inv_divst()), BatchSize::SmallInput)
    });

    group.bench_function("inv_jmpds", |b| {
        b.iter_batched(random_fp, |x| black_box(x.inv_jmpds()), BatchSize::SmallInput)
    });

    group.bench_function("srt", |b| {
        b.iter_batched(|| random_fp().sqr(), |x| black_box(x.srt()), BatchSize::SmallInput)
    });

    group.finish();
}

fn bench_tower(c: &mut Criterion) {
    let mut group = c.benchmark_group("fpx-381");
    let tower = Tower::<Bls381>::new().unwrap();

    group.bench_function("fp2_mul", |b| {
        b.iter_batched(
            || (Fp2::<Bls381>::rand(&mut OsRng), Fp2::rand(&mut OsRng)),
            |(x, y)| black_box(x.mul(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("fp12_mul", |b| {
        b.iter_batched(
            || (Fp12::<Bls381>::rand(&mut OsRng), Fp12::rand(&mut OsRng)),
            |(x, y)| black_box(x.mul(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("fp12_mul_lazy", |b| {
        b.iter_batched(
            || (Fp12::<Bls381>::rand(&mut OsRng), Fp12::rand(&mut OsRng)),
            |(x, y)| black_box(x.mul_lazy(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("fp12_frb", |b| {
        b.iter_batched(|| Fp12::<Bls381>::rand(&mut OsRng), |x| black_box(x.frb(&tower, 1)), BatchSize::SmallInput)
    });

    group.bench_function("fp12_sqr_cyc", |b| {
        b.iter_batched(
            || Fp12::<Bls381>::rand(&mut OsRng).conv_cyc(&tower).unwrap(),
            |x| black_box(x.sqr_cyc()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("fp12_sqr_pck", |b| {
        b.iter_batched(
            || Fp12::<Bls381>::rand(&mut OsRng).conv_cyc(&tower).unwrap().pck(),
            |x| black_box(x.sqr_pck()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_prime_field, bench_tower);
criterion_main!(benches);
