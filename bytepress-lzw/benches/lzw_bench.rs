//! Performance benchmarks for bytepress-lzw.
//!
//! Measures compression and decompression throughput across data patterns
//! with very different dictionary behavior, and the effect of code width on
//! output size.

use bytepress_lzw::{LzwConfig, compress, decompress};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// All bytes identical (dictionary saturates on one symbol).
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Reproducible pseudo-random bytes (worst case for the dictionary).
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Repeated text (realistic compressible input).
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk]);
        }
        data
    }
}

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_compress");
    let size = 256 * 1024;
    let config = LzwConfig::default();

    for (name, generator) in PATTERNS {
        let data = generator(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let packed = compress(black_box(data), config);
                black_box(packed);
            });
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_decompress");
    let size = 256 * 1024;
    let config = LzwConfig::default();

    for (name, generator) in PATTERNS {
        let packed = compress(&generator(size), config);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &packed, |b, packed| {
            b.iter(|| {
                let restored = decompress(black_box(packed), config).unwrap();
                black_box(restored);
            });
        });
    }

    group.finish();
}

fn bench_width_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_width");
    let size = 64 * 1024;
    let data = test_data::text_like(size);

    for width in [9, 12, 16, 24] {
        let config = LzwConfig::new(width).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &data, |b, data| {
            b.iter(|| {
                let packed = compress(black_box(data), config);
                black_box(packed);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_width_sweep);
criterion_main!(benches);
