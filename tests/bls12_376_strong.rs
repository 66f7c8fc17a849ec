// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! End-to-end batch membership properties for BLS12-376-strong.
//!
//! The curve was searched so that the batch side is as cheap as possible:
//! one Tate filter and a single wide-bound combination round per 60 bits
//! of soundness.

use bls12_subgroup_batch::bls12_376_strong::{
    is_in_subgroup_batch, is_in_subgroup_batch_naive, is_in_subgroup_batch_parallel,
    Bls12_376Strong, Fp, Fr, G1Affine,
};
use bls12_subgroup_batch::curve::fuzz_cofactor;
use proptest::prelude::*;

const NB_SAMPLES: u64 = 100;
const ROUNDS: usize = 2;

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
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn naive_accepts_subgroup_batches(mixer in 1u64..) {
        let points = sample_points(mixer);
        prop_assert!(is_in_subgroup_batch_naive(&points));
    }

    #[test]
    fn naive_rejects_corrupted_batches(mixer in 1u64.., a in 1u64..) {
        let mut points = sample_points(mixer);
        points[0] = fuzz_cofactor::<Bls12_376Strong>(&Fp::from_u64(a));
        prop_assert!(!is_in_subgroup_batch_naive(&points));
    }

    #[test]
    fn batch_accepts_subgroup_batches(mixer in 1u64..) {
        let points = sample_points(mixer);
        prop_assert!(is_in_subgroup_batch(&points, ROUNDS));
    }

    #[test]
    fn batch_rejects_corrupted_batches(mixer in 1u64.., a in 1u64..) {
        // every h-torsion point here carries a component of the 61-bit
        // cofactor prime, so a single round already catches what the Tate
        // filter lets through
        let mut points = sample_points(mixer);
        points[0] = fuzz_cofactor::<Bls12_376Strong>(&Fp::from_u64(a));
        prop_assert!(!is_in_subgroup_batch(&points, ROUNDS));
        prop_assert!(!is_in_subgroup_batch_parallel(&points, ROUNDS));
    }
}

#[test]
fn parallel_and_serial_agree_on_positive_batches() {
    let points = sample_points(0xabcdef);
    assert!(is_in_subgroup_batch_parallel(&points, ROUNDS));
}
