//! Benchmarks for salted digests, dispatch overhead and salt generation

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use saltpass::{PasswordHasher, SaltPass, algorithms};

/// Digest throughput per algorithm across password sizes
fn benchmark_algorithms(c: &mut Criterion) {
    let passwords = SaltPass::default();
    let salt = passwords.salt(0).expect("salt generation should succeed");
    let mut group = c.benchmark_group("salted_digest");

    let sizes = [16, 256, 4096];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));
        let password = vec![0x61u8; *size];

        for name in algorithms::builtin_names() {
            group.bench_with_input(BenchmarkId::new(name, size), &password, |b, password| {
                b.iter(|| {
                    let digest = passwords
                        .hash(name, password, &salt)
                        .expect("hash should succeed");
                    std::hint::black_box(digest);
                });
            });
        }
    }
    group.finish();
}

/// Registry lookup cost compared with calling the factory directly
fn benchmark_dispatch(c: &mut Criterion) {
    let passwords = SaltPass::default();
    let factory = algorithms::sha256();
    let mut group = c.benchmark_group("dispatch_overhead");

    group.bench_function("registry_lookup", |b| {
        b.iter(|| {
            let digest = passwords
                .hash("sha256", b"password", b"saltsaltsaltsalt")
                .expect("hash should succeed");
            std::hint::black_box(digest);
        });
    });

    group.bench_function("direct_factory", |b| {
        b.iter(|| {
            let digest = factory
                .hash(b"password", b"saltsaltsaltsalt")
                .expect("hash should succeed");
            std::hint::black_box(digest);
        });
    });

    group.bench_function("string_round_trip", |b| {
        b.iter(|| {
            let digest = passwords.just_hash_string("sha256", "cGFzc3dvcmQ=", "c2FsdHNhbHRzYWx0c2FsdA==");
            std::hint::black_box(digest);
        });
    });

    group.finish();
}

/// Salt generation from the OS source
fn benchmark_salt(c: &mut Criterion) {
    let passwords = SaltPass::default();
    let mut group = c.benchmark_group("salt_generation");

    for len in [16usize, 24, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| std::hint::black_box(passwords.just_salt(len)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_algorithms,
    benchmark_dispatch,
    benchmark_salt
);
criterion_main!(benches);
