// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Batch subgroup membership for BLS12-377 \\(\mathbb{G}\_1\\).
//!
//! Curve parameters:
//!
//! * seed \\(x_0 = \mathtt{0x8508c00000000001}\\)
//! * \\(E/\mathbb{F}\_p : Y^2 = X^3 + 1\\)
//! * \\(r = x_0^4 - x_0^2 + 1\\) (253 bits),
//!   \\(p = (x_0 - 1)^2 r / 3 + x_0\\) (377 bits)
//! * cofactor \\(h = (x_0 - 1)^2 / 3\\), divisible by \\(2^{92}\\), 3, 7
//!   and 13
//!
//! The batch path runs four deterministic Tate filters per point, at
//! \\(\ell = 16, 3, 7, 13\\) in that order, and then `rounds` reference
//! combination rounds: one scalar drawn below the caller's `bound` per
//! round, every point weighted by it through the reference Pippenger
//! multi-exponentiation, and the combined point Scott-tested. The
//! remaining cofactor is highly 2-adic, so the reference configuration is
//! `bound = 2` with `rounds = 64` for a \\(2^{-64}\\) false-positive tail.

mod chains;
mod field;
mod tate;

pub use field::{Fp, Fr};

use std::sync::atomic::{AtomicUsize, Ordering};

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rayon::prelude::*;

use crate::bigint::rand_below;
use crate::curve::{AffinePoint, Curve, JacobianPoint};
use crate::msm;

/// Marker type selecting the BLS12-377 parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bls12_377;

/// An affine \\(\mathbb{G}\_1\\) candidate point.
pub type G1Affine = AffinePoint<Bls12_377>;
/// A Jacobian \\(\mathbb{G}\_1\\) point.
pub type G1Jacobian = JacobianPoint<Bls12_377>;

impl Curve for Bls12_377 {
    type Base = Fp;

    const B: Fp = Fp::from_raw([
        0x02cd_ffff_ffff_ff68,
        0x5140_9f83_7fff_ffb1,
        0x9f7d_b3a9_8a7d_3ff2,
        0x7b4e_97b7_6e7c_6305,
        0x4cf4_95bf_803c_84e8,
        0x008d_6661_e2fd_f49a,
    ]);

    const SEED: u64 = 0x8508_c000_0000_0001;

    const OMEGA: Fp = Fp::from_raw([
        0xdacd_106d_a584_7973,
        0xd8fe_2454_bac2_a79a,
        0x1ada_4fd6_fd83_2edc,
        0xfb98_6844_9d15_0908,
        0xd63e_b8ae_ea32_285e,
        0x0167_d6a3_6f87_3fd0,
    ]);

    const GENERATOR_X: Fp = Fp::from_raw([
        0x260f_33b9_7724_51f4,
        0xc54d_d773_169d_5658,
        0x5c15_51c4_69a5_10dd,
        0x7616_62e4_425e_1698,
        0xc97d_78cc_6f06_5272,
        0x00a4_1206_b361_fd4d,
    ]);

    const GENERATOR_Y: Fp = Fp::from_raw([
        0x8193_961f_b8cb_81f3,
        0x0063_8d4c_5f44_adb8,
        0xfafa_f3da_d4da_f54a,
        0xc278_49e2_d655_cd18,
        0x2ec3_ddb4_01d5_2814,
        0x007d_a933_2630_3c71,
    ]);
}

/// Checks a batch of points for \\(\mathbb{G}\_1\\) membership one by one
/// with the Scott test ([Scott21]).
///
/// [Scott21]: https://eprint.iacr.org/2021/1130.pdf
pub fn is_in_subgroup_batch_naive(points: &[G1Affine]) -> bool {
    points.iter().all(G1Affine::is_in_subgroup)
}

/// Parallel variant of [`is_in_subgroup_batch_naive`].
pub fn is_in_subgroup_batch_naive_parallel(points: &[G1Affine]) -> bool {
    let failures = AtomicUsize::new(0);
    points.par_iter().for_each(|point| {
        if failures.load(Ordering::Relaxed) != 0 {
            return;
        }
        if !point.is_in_subgroup() {
            failures.fetch_add(1, Ordering::Relaxed);
        }
    });
    failures.load(Ordering::Relaxed) == 0
}

/// Checks a batch of points for \\(\mathbb{G}\_1\\) membership.
///
/// First rejects any point outside the larger torsion \\(E[r e']\\) with
/// the four per-point Tate filters ([Koshelev22]); then, `rounds` times,
/// draws a scalar below `bound`, forms the weighted sum of all points with
/// the reference multi-exponentiation and Scott-tests it ([Scott21]).
/// Returns at the first failing point or round.
///
/// Inputs must be on the curve; that precondition is the caller's.
///
/// [Koshelev22]: https://eprint.iacr.org/2022/037.pdf
/// [Scott21]: https://eprint.iacr.org/2021/1130.pdf
pub fn is_in_subgroup_batch(points: &[G1Affine], bound: &BigUint, rounds: usize) -> bool {
    for point in points {
        // Tate_{2^4,P16}(Q) == 1
        if !tate::tate16_is_one(point) {
            return false;
        }
        // Tate_{3,P3}(Q) == 1
        if !tate::tate3_is_one(point) {
            return false;
        }
        // Tate_{7,P7}(Q) == 1
        if !tate::tate7_is_one(point) {
            return false;
        }
        // Tate_{13,P13}(Q) == 1
        if !tate::tate13_is_one(point) {
            return false;
        }
    }

    for _ in 0..rounds {
        if !reference_round(points, bound) {
            return false;
        }
    }
    true
}

/// Parallel variant of [`is_in_subgroup_batch`].
pub fn is_in_subgroup_batch_parallel(points: &[G1Affine], bound: &BigUint, rounds: usize) -> bool {
    let failures = AtomicUsize::new(0);
    points.par_iter().for_each(|point| {
        if failures.load(Ordering::Relaxed) != 0 {
            return;
        }
        let pass = tate::tate16_is_one(point)
            && tate::tate3_is_one(point)
            && tate::tate7_is_one(point)
            && tate::tate13_is_one(point);
        if !pass {
            failures.fetch_add(1, Ordering::Relaxed);
        }
    });
    if failures.load(Ordering::Relaxed) != 0 {
        return false;
    }

    (0..rounds).into_par_iter().for_each(|_| {
        if failures.load(Ordering::Relaxed) != 0 {
            return;
        }
        if !reference_round(points, bound) {
            failures.fetch_add(1, Ordering::Relaxed);
        }
    });
    failures.load(Ordering::Relaxed) == 0
}

/// One reference combination round: a single scalar below `bound` weights
/// every point, and the multi-exponentiated sum takes the Scott test.
fn reference_round(points: &[G1Affine], bound: &BigUint) -> bool {
    let b = rand_below(&mut OsRng, bound);
    let scalar = Fr::from_biguint(&b).to_repr();
    let scalars = vec![scalar; points.len()];
    let sum = msm::multi_exp(points, &scalars);
    sum.is_in_subgroup()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::fuzz_cofactor;

    #[test]
    fn generator_is_in_subgroup() {
        assert!(G1Affine::generator().is_on_curve());
        assert!(G1Affine::generator().is_in_subgroup());
    }

    #[test]
    fn fuzzed_cofactor_points_are_not() {
        for u in [7u64, 42] {
            let q = fuzz_cofactor::<Bls12_377>(&Fp::from_u64(u));
            assert!(q.is_on_curve());
            assert!(!q.is_in_subgroup());
        }
    }

    #[test]
    fn small_positive_batch() {
        let g = G1Affine::generator();
        let points: Vec<G1Affine> = (1..=8u64).map(|i| g.scalar_mul(&[i]).to_affine()).collect();
        let bound = BigUint::from(2u32);
        assert!(is_in_subgroup_batch_naive(&points));
        assert!(is_in_subgroup_batch(&points, &bound, 8));
    }

    #[test]
    fn order_three_point_dies_in_the_filter_pass() {
        let t = G1Affine::new(Fp::ZERO, Fp::ONE).expect("(0,1) is on the curve");
        assert!(!is_in_subgroup_batch(&[t], &BigUint::from(2u32), 0));
    }
}
