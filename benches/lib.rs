use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{hint::black_box, time::Duration};

use striped_sw::{Aligner, Backend, Config, profile::QueryProfile};

fn random_bases(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| b"ACGT"[rng.random_range(0..4)]).collect()
}

/// Reference with a few mutated copies of the read planted at random offsets
fn generate_reference(rng: &mut StdRng, read: &[u8], len: usize) -> Vec<u8> {
    let mut reference = random_bases(rng, len);
    for _ in 0..4 {
        let offset = rng.random_range(0..len - read.len());
        for (i, &base) in read.iter().enumerate() {
            reference[offset + i] = if rng.random_bool(0.05) {
                b"ACGT"[rng.random_range(0..4)]
            } else {
                base
            };
        }
    }
    reference
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("profile");
    for read_len in [50, 100, 250] {
        let read = random_bases(&mut rng, read_len);
        group.bench_with_input(BenchmarkId::from_parameter(read_len), &read, |b, read| {
            b.iter(|| QueryProfile::new(black_box(read), 2, 2, 2).unwrap())
        });
    }
    group.finish();

    for (read_len, reference_len) in [(100, 1_000), (100, 10_000), (250, 10_000)] {
        let read = random_bases(&mut rng, read_len);
        let reference = generate_reference(&mut rng, &read, reference_len);

        let mut group = c.benchmark_group(format!("scan {read_len}bp"));
        group.throughput(Throughput::Elements((read_len * reference_len) as u64));
        for backend in [Backend::Native, Backend::Portable] {
            let config = Config {
                backend,
                ..Config::default()
            };
            let aligner = Aligner::new(&read, &config).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{backend:?} ({})", aligner.engine().name()), reference_len),
                &reference,
                |b, reference| b.iter(|| aligner.align(black_box(reference)).unwrap()),
            );
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(200))
        .measurement_time(Duration::from_secs(2));
    targets = criterion_benchmark
}
criterion_main!(benches);
