use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffpack::{compress, decompress, HuffmanDecoder, HuffmanEncoder, HuffmanTree};

fn generate_test_data(size: usize, entropy_level: f64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);

    if entropy_level < 1.0 {
        // Low entropy - mostly repeated bytes
        let pattern = (entropy_level * 256.0) as u8;
        for _ in 0..size {
            data.push(pattern);
        }
    } else if entropy_level < 4.0 {
        // Medium entropy - cycling patterns
        let pattern_size = (8.0 / entropy_level) as usize;
        let pattern: Vec<u8> = (0..pattern_size).map(|i| i as u8).collect();
        for i in 0..size {
            data.push(pattern[i % pattern.len()]);
        }
    } else {
        // High entropy - hash-mixed bytes
        for i in 0..size {
            data.push(((i as u64).wrapping_mul(2654435761) >> 24) as u8);
        }
    }

    data
}

fn bench_tree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_construction");
    for size in [1024, 8192, 65536] {
        let data = generate_test_data(size, 4.5);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| HuffmanTree::from_data(black_box(data)).unwrap());
        });
    }
    group.finish();
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_decode");
    for entropy in [0.5, 2.0, 6.0] {
        let data = generate_test_data(16384, entropy);
        let encoder = HuffmanEncoder::new(&data).unwrap();
        let bits = encoder.encode(&data).unwrap();
        let decoder = HuffmanDecoder::new(encoder.tree().clone());

        group.bench_with_input(
            BenchmarkId::new("encode", format!("entropy_{entropy}")),
            &data,
            |b, data| b.iter(|| encoder.encode(black_box(data)).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::new("decode", format!("entropy_{entropy}")),
            &bits,
            |b, bits| b.iter(|| decoder.decode(black_box(bits)).unwrap()),
        );
    }
    group.finish();
}

fn bench_container(c: &mut Criterion) {
    let mut group = c.benchmark_group("container");
    let data = generate_test_data(16384, 2.0);
    let container = compress(&data).unwrap();

    group.bench_function("compress_16k", |b| {
        b.iter(|| compress(black_box(&data)).unwrap())
    });
    group.bench_function("decompress_16k", |b| {
        b.iter(|| decompress(black_box(&container)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_tree_construction,
    bench_encode_decode,
    bench_container
);
criterion_main!(benches);
