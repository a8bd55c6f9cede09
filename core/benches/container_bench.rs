use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dvpl_core::compression::Method;
use dvpl_core::container::{pack, unpack};

fn sample(len: usize) -> Vec<u8> {
    b"lorem ipsum dolor sit amet, consectetur adipiscing elit 0123456789 "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let input = sample(1 << 20);
    let mut group = c.benchmark_group("pack");
    group.throughput(Throughput::Bytes(input.len() as u64));
    for method in [Method::Raw, Method::Lz4, Method::Lz4Hc] {
        group.bench_with_input(BenchmarkId::from_parameter(method), &input, |b, input| {
            b.iter(|| pack(black_box(input), method).unwrap())
        });
    }
    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let input = sample(1 << 20);
    let mut group = c.benchmark_group("unpack");
    group.throughput(Throughput::Bytes(input.len() as u64));
    for method in [Method::Raw, Method::Lz4, Method::Lz4Hc] {
        let packed = pack(&input, method).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(method), &packed, |b, packed| {
            b.iter(|| unpack(black_box(packed)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pack, bench_unpack);
criterion_main!(benches);
