// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! End-to-end batch membership properties for BLS12-381.
//!
//! The batches mirror the reference scenarios: one hundred multiples
//! `[i·mixer]G` of the generator for the positive cases, with h-torsion
//! points spliced in for the negative ones.

use bls12_subgroup_batch::bls12_381::{
    is_in_subgroup_batch, is_in_subgroup_batch_naive, is_in_subgroup_batch_naive_parallel,
    is_in_subgroup_batch_parallel, Bls12_381, Fp, Fr, G1Affine,
};
use bls12_subgroup_batch::curve::{batch_scalar_mul, fuzz_cofactor};
use proptest::prelude::*;

const NB_SAMPLES: u64 = 100;

// With the residual cofactor bound 10177 ≈ 2^13.3, five rounds give a
// false-positive tail below 2^-64.
const ROUNDS: usize = 5;

fn sample_points(mixer: u64) -> Vec<G1Affine> {
    let mixer = Fr::from_u64(mixer);
    let scalars: Vec<[u64; 4]> = (1..=NB_SAMPLES)
        .map(|i| Fr::from_u64(i).mul(&mixer).to_repr())
        .collect();
    batch_scalar_mul(&G1Affine::generator(), &scalars)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn naive_accepts_subgroup_batches(mixer in 1u64..) {
        let points = sample_points(mixer);
        prop_assert!(is_in_subgroup_batch_naive(&points));
        prop_assert!(is_in_subgroup_batch_naive_parallel(&points));
    }

    #[test]
    fn naive_rejects_corrupted_batches(mixer in 1u64.., a in 1u64..) {
        let mut points = sample_points(mixer);
        let bad = fuzz_cofactor::<Bls12_381>(&Fp::from_u64(a));
        points[0] = bad;
        points[NB_SAMPLES as usize - 1] = fuzz_cofactor::<Bls12_381>(&Fp::from_u64(a ^ 0xff));
        prop_assert!(!is_in_subgroup_batch_naive(&points));
        prop_assert!(!is_in_subgroup_batch_naive_parallel(&points));
    }

    #[test]
    fn batch_accepts_subgroup_batches(mixer in 1u64..) {
        let points = sample_points(mixer);
        prop_assert!(is_in_subgroup_batch(&points, ROUNDS));
    }

    #[test]
    fn batch_rejects_corrupted_batches(mixer in 1u64.., a in 1u64..) {
        let mut points = sample_points(mixer);
        points[0] = fuzz_cofactor::<Bls12_381>(&Fp::from_u64(a));
        points[NB_SAMPLES as usize - 1] = fuzz_cofactor::<Bls12_381>(&Fp::from_u64(a ^ 0xff));
        prop_assert!(!is_in_subgroup_batch(&points, ROUNDS));
        prop_assert!(!is_in_subgroup_batch_parallel(&points, ROUNDS));
    }
}

#[test]
fn parallel_and_serial_agree_on_positive_batches() {
    let points = sample_points(0xdeadbeef);
    assert!(is_in_subgroup_batch_parallel(&points, ROUNDS));
}

#[test]
fn order_three_point_is_rejected_deterministically() {
    // replacing the last point with the order-3 point (0, 2) must fail in
    // the Tate pass, before any randomness is consumed: zero rounds are
    // enough to observe the rejection
    let mut points = sample_points(3);
    let t = G1Affine::new(Fp::ZERO, Fp::from_u64(2)).expect("(0,2) is on the curve");
    points[NB_SAMPLES as usize - 1] = t;
    assert!(!is_in_subgroup_batch(&points, 0));
    assert!(!is_in_subgroup_batch(&points, ROUNDS));
}

#[test]
fn rounds_argument_is_honoured() {
    // [363] clears the 3- and 11-torsion of an h-torsion point, so the
    // result survives both Tate filters and only the randomized rounds can
    // catch it; with zero rounds the batch must (vacuously) pass, with
    // rounds it must fail
    let q = fuzz_cofactor::<Bls12_381>(&Fp::from_u64(5));
    let q363 = q.scalar_mul(&[363]).to_affine();
    assert!(!q363.is_in_subgroup());
    assert!(is_in_subgroup_batch(&[q363], 0));
    assert!(!is_in_subgroup_batch(&[q363], 8));
}
