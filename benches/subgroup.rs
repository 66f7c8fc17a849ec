// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Naive vs batch subgroup-membership benchmarks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bls12_subgroup_batch::bls12_377;
use bls12_subgroup_batch::bls12_381;
use num_bigint::BigUint;

fn bls12_381_points(n: u64) -> Vec<bls12_381::G1Affine> {
    let g = bls12_381::G1Affine::generator();
    (1..=n).map(|i| g.scalar_mul(&[i]).to_affine()).collect()
}

fn bls12_377_points(n: u64) -> Vec<bls12_377::G1Affine> {
    let g = bls12_377::G1Affine::generator();
    (1..=n).map(|i| g.scalar_mul(&[i]).to_affine()).collect()
}

fn bench_bls12_381(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12-381");
    for n in [10u64, 100, 1000] {
        let points = bls12_381_points(n);
        group.bench_with_input(BenchmarkId::new("naive", n), &points, |b, points| {
            b.iter(|| bls12_381::is_in_subgroup_batch_naive(points))
        });
        group.bench_with_input(BenchmarkId::new("batch", n), &points, |b, points| {
            b.iter(|| bls12_381::is_in_subgroup_batch(points, 5))
        });
        group.bench_with_input(BenchmarkId::new("batch-parallel", n), &points, |b, points| {
            b.iter(|| bls12_381::is_in_subgroup_batch_parallel(points, 5))
        });
    }
    group.finish();
}

fn bench_bls12_377(c: &mut Criterion) {
    let bound = BigUint::from(2u32);
    let mut group = c.benchmark_group("bls12-377");
    for n in [10u64, 100, 1000] {
        let points = bls12_377_points(n);
        group.bench_with_input(BenchmarkId::new("naive", n), &points, |b, points| {
            b.iter(|| bls12_377::is_in_subgroup_batch_naive(points))
        });
        group.bench_with_input(BenchmarkId::new("batch", n), &points, |b, points| {
            b.iter(|| bls12_377::is_in_subgroup_batch(points, &bound, 64))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bls12_381, bench_bls12_377);
criterion_main!(benches);
