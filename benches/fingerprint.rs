//! Benchmarks for the protocol registry lookups.
//!
//! Run with: cargo bench --bench fingerprint

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weft::protocol::{
    is_unsourced, protocol_fingerprint, replica_for, requires_verification, version_for,
    FingerprintService, PacketKind,
};

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");

    // Full compute: fresh service per iteration
    group.bench_function("first_access", |b| {
        b.iter(|| {
            let service = FingerprintService::new();
            *black_box(&service).raw()
        })
    });

    // Cached read path, the one the handshake actually hits
    protocol_fingerprint();
    group.bench_function("cached_access", |b| {
        b.iter(|| black_box(protocol_fingerprint()))
    });

    group.finish();
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_lookups");

    group.bench_function("version_for_all_kinds", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for kind in PacketKind::all() {
                sum += version_for(black_box(kind)) as u32;
            }
            sum
        })
    });

    group.bench_function("classification_all_kinds", |b| {
        b.iter(|| {
            let mut verified = 0usize;
            for kind in PacketKind::all() {
                if requires_verification(black_box(kind)) {
                    verified += 1;
                }
                if is_unsourced(kind) {
                    verified += 1;
                }
                if replica_for(kind).is_some() {
                    verified += 1;
                }
            }
            verified
        })
    });

    group.bench_function("from_code", |b| {
        b.iter(|| PacketKind::from_code(black_box(26)))
    });

    group.finish();
}

criterion_group!(benches, bench_fingerprint, bench_lookups);
criterion_main!(benches);
