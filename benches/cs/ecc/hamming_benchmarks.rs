use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming16::cs::ecc::hamming::{decode, encode, inject_noise};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_text(len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| char::from(rng.gen_range(b' '..=b'~')))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming16_encode");
    for size in [100, 1_000, 10_000] {
        let text = random_text(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| encode(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming16_decode");
    let mut rng = StdRng::seed_from_u64(7);
    for size in [100, 1_000, 10_000] {
        let stream = encode(&random_text(size)).unwrap();
        let noisy = inject_noise(&stream, size / 4, 0, &mut rng);
        group.bench_with_input(BenchmarkId::new("clean", size), &stream, |b, stream| {
            b.iter(|| decode(black_box(stream)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("noisy", size), &noisy, |b, noisy| {
            b.iter(|| decode(black_box(noisy)).unwrap())
        });
    }
    group.finish();
}

fn bench_noise(c: &mut Criterion) {
    let stream = encode(&random_text(1_000)).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    c.bench_function("hamming16_inject_noise_bursts", |b| {
        b.iter(|| inject_noise(black_box(&stream), 50, 2, &mut rng))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_noise);
criterion_main!(benches);
