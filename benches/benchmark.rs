//! Benchmarks for TitanWall cipher operations.
//!
//! Measures key schedule time across key lengths, block encrypt/decrypt
//! throughput, and keystream refresh throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use titanwall::{KeySchedule, TitanWallBlockCipher, TitanWallStreamCipher, BLOCK_BYTES, REFRESH_BYTES};

/// Key used consistently across the cipher benchmarks.
const BENCH_KEY: &[u8] = b"BenchmarkKey2024";

/// Benchmarks `KeySchedule::new()` for single-pass and chained keys.
fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");

    for &len in &[16usize, 512, 1536] {
        let key: Vec<u8> = (0..len).map(|i| (i & 0xFF) as u8).collect();
        group.bench_with_input(BenchmarkId::new("key_bytes", len), &key, |b, key| {
            b.iter(|| KeySchedule::new(black_box(key)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks single-block encryption and decryption.
fn bench_block(c: &mut Criterion) {
    let cipher = TitanWallBlockCipher::new(BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("block_single");
    group.throughput(Throughput::Bytes(BLOCK_BYTES as u64));

    group.bench_function("encrypt_block", |b| {
        let mut block = [0x0123_4567u32; 8];
        b.iter(|| cipher.encrypt_block(black_box(&mut block)));
    });

    group.bench_function("decrypt_block", |b| {
        let mut block = [0x89AB_CDEFu32; 8];
        b.iter(|| cipher.decrypt_block(black_box(&mut block)));
    });

    group.finish();
}

/// Benchmarks block encryption of byte buffers at several sizes.
fn bench_block_throughput(c: &mut Criterion) {
    let cipher = TitanWallBlockCipher::new(BENCH_KEY).unwrap();
    let mut group = c.benchmark_group("block_throughput");

    for &blocks in &[1usize, 32, 256] {
        let data = vec![0xA5u8; blocks * BLOCK_BYTES];
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("encrypt_bytes", blocks), &data, |b, data| {
            b.iter(|| cipher.encrypt_bytes(black_box(data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks one full keystream refresh.
///
/// State advances between iterations, as it does for a real stream.
fn bench_keystream(c: &mut Criterion) {
    let mut cipher = TitanWallStreamCipher::new(BENCH_KEY).unwrap();
    let mut buffer = [0u8; REFRESH_BYTES];

    let mut group = c.benchmark_group("keystream");
    group.sample_size(10);
    group.throughput(Throughput::Bytes(REFRESH_BYTES as u64));
    group.bench_function("refresh", |b| {
        b.iter(|| cipher.generate_pseudo_random_bytes(black_box(&mut buffer)).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_key_schedule,
    bench_block,
    bench_block_throughput,
    bench_keystream
);
criterion_main!(benches);
