// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! End-to-end batch membership properties for BLS12-377.
//!
//! The cofactor is highly 2-adic, so the reference configuration draws
//! scalars below `bound = 2` and runs `rounds = 64` combination rounds for
//! a failure probability of 2^-64.

use bls12_subgroup_batch::bls12_377::{
    is_in_subgroup_batch, is_in_subgroup_batch_naive, is_in_subgroup_batch_naive_parallel,
    is_in_subgroup_batch_parallel, Bls12_377, Fp, Fr, G1Affine,
};
use bls12_subgroup_batch::curve::fuzz_cofactor;
use num_bigint::BigUint;
use proptest::prelude::*;

const NB_SAMPLES: u64 = 100;
const ROUNDS: usize = 64;

fn bound() -> BigUint {
    BigUint::from(2u32)
}

fn sample_points(mixer: u64) -> Vec<G1Affine> {
    let g = G1Affine::generator();
    let mixer = Fr::from_u64(mixer);
    (1..=NB_SAMPLES)
        .map(|i| {
            let s = Fr::from_u64(i).mul(&mixer);
            g.scalar_mul(&s.to_repr()).to_affine()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn naive_accepts_subgroup_batches(mixer in 1u64..) {
        let points = sample_points(mixer);
        prop_assert!(is_in_subgroup_batch_naive(&points));
        prop_assert!(is_in_subgroup_batch_naive_parallel(&points));
    }

    #[test]
    fn naive_rejects_corrupted_batches(mixer in 1u64.., a in 1u64..) {
        let mut points = sample_points(mixer);
        points[0] = fuzz_cofactor::<Bls12_377>(&Fp::from_u64(a));
        points[NB_SAMPLES as usize - 1] = fuzz_cofactor::<Bls12_377>(&Fp::from_u64(a.rotate_left(17)));
        prop_assert!(!is_in_subgroup_batch_naive(&points));
        prop_assert!(!is_in_subgroup_batch_naive_parallel(&points));
    }

    #[test]
    fn batch_accepts_subgroup_batches(mixer in 1u64..) {
        let points = sample_points(mixer);
        prop_assert!(is_in_subgroup_batch(&points, &bound(), ROUNDS));
    }

    #[test]
    fn batch_rejects_corrupted_batches(mixer in 1u64.., a in 1u64..) {
        let mut points = sample_points(mixer);
        points[0] = fuzz_cofactor::<Bls12_377>(&Fp::from_u64(a));
        points[NB_SAMPLES as usize - 1] = fuzz_cofactor::<Bls12_377>(&Fp::from_u64(a.rotate_left(17)));
        prop_assert!(!is_in_subgroup_batch(&points, &bound(), ROUNDS));
        prop_assert!(!is_in_subgroup_batch_parallel(&points, &bound(), ROUNDS));
    }
}

#[test]
fn hundred_generator_multiples_pass_with_sixty_four_rounds() {
    // seed scenario: points [i]G for i = 1..=100
    let g = G1Affine::generator();
    let points: Vec<G1Affine> = (1..=NB_SAMPLES).map(|i| g.scalar_mul(&[i]).to_affine()).collect();
    assert!(is_in_subgroup_batch(&points, &bound(), ROUNDS));
}

#[test]
fn fuzzed_leading_point_fails_with_sixty_four_rounds() {
    // seed scenario: the first point replaced by the h-torsion image of 7
    let g = G1Affine::generator();
    let mut points: Vec<G1Affine> =
        (1..=NB_SAMPLES).map(|i| g.scalar_mul(&[i]).to_affine()).collect();
    points[0] = fuzz_cofactor::<Bls12_377>(&Fp::from_u64(7));
    assert!(!is_in_subgroup_batch(&points, &bound(), ROUNDS));
}

#[test]
fn parallel_and_serial_agree_on_positive_batches() {
    let points = sample_points(0x5eed);
    assert!(is_in_subgroup_batch_parallel(&points, &bound(), ROUNDS));
}
