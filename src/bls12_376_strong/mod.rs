// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Batch subgroup membership for BLS12-376-strong \\(\mathbb{G}\_1\\).
//!
//! A batch-friendly research curve with embedding degree 12:
//!
//! * seed \\(x_0 = -\mathtt{0x78383f2600000001}\\)
//! * \\(E/\mathbb{F}\_p : Y^2 = X^3 + 1\\)
//! * \\(r = x_0^4 - x_0^2 + 1\\) (252 bits),
//!   \\(p = (x_0 - 1)^2 r / 3 + x_0\\) (376 bits)
//! * cofactor \\(h = 3 (2c)^2\\) with the 61-bit prime
//!   \\(c = 1443790552614742699\\)
//!
//! The cofactor was chosen so that the batch check is nearly free: a
//! single Tate filter at \\(\ell = 3\\) removes the factor of three, and
//! the remaining torsion has no prime factor below \\(c > 2^{60}\\), so
//! scalars are drawn below the hard-coded bound \\(2^{60}\\) and one round
//! per 60 bits of target soundness suffices.

mod field;
mod tate;

pub use field::{Fp, Fr};

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::OsRng;
use rand_core::RngCore;
use rayon::prelude::*;

use crate::curve::{AffinePoint, Curve, JacobianPoint};
use crate::msm;

/// Marker type selecting the BLS12-376-strong parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bls12_376Strong;

/// An affine \\(\mathbb{G}\_1\\) candidate point.
pub type G1Affine = AffinePoint<Bls12_376Strong>;
/// A Jacobian \\(\mathbb{G}\_1\\) point.
pub type G1Jacobian = JacobianPoint<Bls12_376Strong>;

/// Scalars of the combination rounds are drawn below \\(2^{60}\\), the
/// largest power of two under the cofactor prime \\(c\\).
const BOUND_BITS: u32 = 60;

impl Curve for Bls12_376Strong {
    type Base = Fp;

    const B: Fp = Fp::from_raw([
        0xf019_88c1_ffff_ffa3,
        0xccca_905c_0f11_3db2,
        0xa660_84ee_96be_62eb,
        0x1633_caa5_ea4f_a33f,
        0x1760_4c8c_1aa9_ebf0,
        0x00a6_30b7_4e72_0231,
    ]);

    const SEED: u64 = 0x7838_3f26_0000_0001;

    const OMEGA: Fp = Fp::from_raw([
        0x5bdb_1178_4cc5_49d7,
        0xd78b_9757_ea65_47a5,
        0x414b_1457_d02e_9473,
        0x3686_b947_ca6b_21a3,
        0x2328_0c99_bf77_dc39,
        0x004c_a6cc_8db1_36ce,
    ]);

    const GENERATOR_X: Fp = Fp::from_raw([
        0x525d_4942_57a3_5367,
        0xf25e_fb2b_e5ac_5e29,
        0x292b_789c_9187_bf47,
        0x25cb_c94a_53a9_d8a3,
        0xc10a_f5b4_c035_035d,
        0x004d_97bd_eeb9_0a1a,
    ]);

    const GENERATOR_Y: Fp = Fp::from_raw([
        0x9527_dbf6_68f0_3301,
        0x2ca1_bb39_763c_38e6,
        0xc127_8a7e_8bdd_e10a,
        0xf7c6_0fd1_9f4d_b4fc,
        0x40a4_7a13_0f7e_1833,
        0x0095_c332_14d0_8c4a,
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
/// Rejects 3-torsion with the per-point Tate filter, then runs `rounds`
/// combination rounds with a shared scalar below \\(2^{60}\\); the bound
/// is fixed by the curve, so unlike BLS12-377 there is no `bound`
/// argument. One round already gives a \\(2^{-60}\\) false-positive tail
/// against generic cofactor points.
///
/// Inputs must be on the curve; that precondition is the caller's.
pub fn is_in_subgroup_batch(points: &[G1Affine], rounds: usize) -> bool {
    for point in points {
        // Tate_{3,P3}(Q) = (y-1)^((p-1)/3) == 1, with P3 = (0,1)
        if !tate::tate3_is_one(point) {
            return false;
        }
    }

    for _ in 0..rounds {
        if !combination_round(points) {
            return false;
        }
    }
    true
}

/// Parallel variant of [`is_in_subgroup_batch`].
pub fn is_in_subgroup_batch_parallel(points: &[G1Affine], rounds: usize) -> bool {
    let failures = AtomicUsize::new(0);
    points.par_iter().for_each(|point| {
        if failures.load(Ordering::Relaxed) != 0 {
            return;
        }
        if !tate::tate3_is_one(point) {
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
        if !combination_round(points) {
            failures.fetch_add(1, Ordering::Relaxed);
        }
    });
    failures.load(Ordering::Relaxed) == 0
}

/// One combination round with the curve's fixed scalar bound.
fn combination_round(points: &[G1Affine]) -> bool {
    let b = OsRng.next_u64() & ((1u64 << BOUND_BITS) - 1);
    let scalar = Fr::from_u64(b).to_repr();
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
        let q = fuzz_cofactor::<Bls12_376Strong>(&Fp::from_u64(11));
        assert!(q.is_on_curve());
        assert!(!q.is_in_subgroup());
    }

    #[test]
    fn small_positive_batch() {
        let g = G1Affine::generator();
        let points: Vec<G1Affine> = (1..=8u64).map(|i| g.scalar_mul(&[i]).to_affine()).collect();
        assert!(is_in_subgroup_batch(&points, 2));
        assert!(is_in_subgroup_batch_parallel(&points, 2));
    }

    #[test]
    fn order_three_point_dies_in_the_filter_pass() {
        let t = G1Affine::new(Fp::ZERO, Fp::ONE).expect("(0,1) is on the curve");
        assert!(!is_in_subgroup_batch(&[t], 0));
    }
}
