// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Batch subgroup membership for BLS12-381 \\(\mathbb{G}\_1\\).
//!
//! Curve parameters:
//!
//! * seed \\(x_0 = -\mathtt{0xd201000000010000}\\)
//! * \\(E/\mathbb{F}\_p : Y^2 = X^3 + 4\\)
//! * \\(r = x_0^4 - x_0^2 + 1\\) (255 bits),
//!   \\(p = (x_0 - 1)^2 r / 3 + x_0\\) (381 bits)
//! * cofactor \\(h = (x_0 - 1)^2 / 3\\), divisible by 3 and \\(11^2\\)
//!
//! The batch path first runs two deterministic Tate filters per point,
//! \\(\ell = 3\\) against \\(P_3 = (0, 2)\\) and \\(\ell = 11\\) against two
//! auxiliary points of order 11, and then `rounds` rounds of the
//! randomized extended-Jacobian combination of [`crate::msm`]. With the
//! residual cofactor having no prime factor below 10177, five rounds push
//! the false-positive probability under \\(2^{-64}\\).

mod chains;
mod cubic;
mod field;
mod tate;

pub use cubic::{cubic_symbol, is_cubic_residue};
pub use field::{Fp, Fr};

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::curve::{AffinePoint, Curve, JacobianPoint};
use crate::msm;

/// Marker type selecting the BLS12-381 parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bls12_381;

/// An affine \\(\mathbb{G}\_1\\) candidate point.
pub type G1Affine = AffinePoint<Bls12_381>;
/// A Jacobian \\(\mathbb{G}\_1\\) point.
pub type G1Jacobian = JacobianPoint<Bls12_381>;

impl Curve for Bls12_381 {
    type Base = Fp;

    const B: Fp = Fp::from_raw([
        0xaa27_0000_000c_fff3,
        0x53cc_0032_fc34_000a,
        0x478f_e97a_6b0a_807f,
        0xb1d3_7ebe_e6ba_24d7,
        0x8ec9_733b_bf78_ab2f,
        0x09d6_4551_3d83_de7e,
    ]);

    const SEED: u64 = 0xd201_0000_0001_0000;

    const OMEGA: Fp = Fp::from_raw([
        0xcd03_c9e4_8671_f071,
        0x5dab_2246_1fcd_a5d2,
        0x5870_42af_d385_1b95,
        0x8eb6_0ebe_01ba_cb9e,
        0x03f9_7d6e_83d0_50d2,
        0x18f0_2065_5463_8741,
    ]);

    const GENERATOR_X: Fp = Fp::from_raw([
        0x5cb3_8790_fd53_0c16,
        0x7817_fc67_9976_fff5,
        0x154f_95c7_143b_a1c1,
        0xf0ae_6acd_f3d0_e747,
        0xedce_6ecc_21db_f440,
        0x1201_7741_9e0b_fb75,
    ]);

    const GENERATOR_Y: Fp = Fp::from_raw([
        0xbaac_93d5_0ce7_2271,
        0x8c22_631a_7918_fd8e,
        0xdd59_5f13_5707_25ce,
        0x51ac_5829_5040_5194,
        0x0e1c_8c3f_ad00_59c0,
        0x0bbc_3efc_5008_a26a,
    ]);
}

/// Checks a batch of points for \\(\mathbb{G}\_1\\) membership one by one
/// with the Scott test ([Scott21]).
///
/// [Scott21]: https://eprint.iacr.org/2021/1130.pdf
pub fn is_in_subgroup_batch_naive(points: &[G1Affine]) -> bool {
    points.iter().all(G1Affine::is_in_subgroup)
}

/// Parallel variant of [`is_in_subgroup_batch_naive`]: points fan out over
/// the worker pool, failures accumulate in a shared counter and stop the
/// remaining workers early.
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
/// the two per-point Tate filters ([Koshelev22]); then runs `rounds`
/// randomized multi-scalar combinations, Scott-testing each combined point
/// ([Scott21]). Returns at the first failing point or round.
///
/// Inputs must be on the curve; that precondition is the caller's.
///
/// [Koshelev22]: https://eprint.iacr.org/2022/037.pdf
/// [Scott21]: https://eprint.iacr.org/2021/1130.pdf
pub fn is_in_subgroup_batch(points: &[G1Affine], rounds: usize) -> bool {
    for point in points {
        // Tate_{3,P3}(Q) = (y-2)^((p-1)/3) == 1, with P3 = (0,2)
        if !tate::tate3_is_one(point) {
            return false;
        }
        // Tate_{11,P11}(Q) == Tate_{11,P'11}(Q) == 1
        if !tate::tate11_is_one(point) {
            return false;
        }
    }

    for _ in 0..rounds {
        if !msm::msm_check(points) {
            return false;
        }
    }

    true
}

/// Parallel variant of [`is_in_subgroup_batch`]: the per-point filter pass
/// and the independent rounds both fan out, joined by a shared monotone
/// failure counter.
pub fn is_in_subgroup_batch_parallel(points: &[G1Affine], rounds: usize) -> bool {
    let failures = AtomicUsize::new(0);
    points.par_iter().for_each(|point| {
        if failures.load(Ordering::Relaxed) != 0 {
            return;
        }
        if !tate::tate3_is_one(point) || !tate::tate11_is_one(point) {
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
        if !msm::msm_check(points) {
            failures.fetch_add(1, Ordering::Relaxed);
        }
    });
    failures.load(Ordering::Relaxed) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::fuzz_cofactor;

    #[test]
    fn generator_is_in_subgroup() {
        assert!(G1Affine::generator().is_on_curve());
        assert!(G1Affine::generator().is_in_subgroup());
        assert!(G1Affine::identity().is_in_subgroup());
    }

    #[test]
    fn fuzzed_cofactor_points_are_not() {
        for u in [7u64, 1_234_567] {
            let q = fuzz_cofactor::<Bls12_381>(&Fp::from_u64(u));
            assert!(q.is_on_curve());
            assert!(!q.is_in_subgroup());
        }
    }

    #[test]
    fn order_three_rejection_consumes_no_randomness() {
        // the order-3 point must die in the deterministic Tate pass, so a
        // batch of them is rejected even with zero rounds
        let t = G1Affine::new(Fp::ZERO, Fp::from_u64(2)).expect("(0,2) is on the curve");
        assert!(!is_in_subgroup_batch(&[t], 0));
    }

    #[test]
    fn empty_batch_is_vacuously_accepted() {
        assert!(is_in_subgroup_batch_naive(&[]));
        assert!(is_in_subgroup_batch(&[], 5));
        assert!(is_in_subgroup_batch_parallel(&[], 5));
    }
}
