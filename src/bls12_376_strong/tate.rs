// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! The \\(\ell = 3\\) Tate-residue filter for BLS12-376-strong.
//!
//! The cofactor is \\(3 \cdot (2c)^2\\) with a 61-bit prime \\(c\\); the
//! only small torsion worth a dedicated filter is the factor of three, and
//! with `P3 = (0, 1)` the Miller loop again collapses to
//! \\((y - 1)^{(p-1)/3}\\). No dedicated addition chain was generated for
//! this curve; the generic ladder over the fixed exponent computes the
//! identical power.

use super::field::Fp;
use super::G1Affine;

/// `(p - 1) / 3` as little-endian limbs.
const P3_EXP: [u64; 6] = [
    0x5bc6_7809_8e38_e38e,
    0xfcb2_607a_3b51_562d,
    0x74f1_8270_e18a_5312,
    0x16e9_9c5a_f243_315a,
    0xe1b1_47c8_c762_9681,
    0x004e_19a2_3089_7f89,
];

/// `Tate_{3,P3}(Q) = (y - 1)^((p-1)/3)` with `P3 = (0, 1)`.
pub(crate) fn tate3_is_one(point: &G1Affine) -> bool {
    (&point.y - &Fp::ONE).pow(&P3_EXP).is_one()
}
