// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Multi-scalar machinery for the batch checks.
//!
//! Two routines live here:
//!
//! * `msm_check`: the randomized bucketed combination at the heart of
//!   the batch path. It is a specialised Pippenger pass whose scalars are
//!   drawn *internally* from the OS randomness source rather than passed
//!   in: each of the three 6-bit chunks sorts every point into one of 32
//!   extended-Jacobian buckets keyed by fresh random digits, the buckets
//!   reduce by the running-sum trick, the chunks combine by Horner, and
//!   the single resulting point is Scott-tested.
//! * `multi_exp`: a plain variable-time Pippenger multi-exponentiation
//!   over Jacobian points, used as the reference combination by the curves
//!   whose batch path takes a caller-supplied scalar bound.

use rand::rngs::OsRng;
use rand_core::RngCore;
use rayon::prelude::*;

use crate::curve::{AffinePoint, Curve, ExtendedPoint, JacobianPoint};

/// Window width of the randomized check, in bits per chunk.
const WINDOW_BITS: usize = 6;
/// Number of random digit chunks; `3·(WINDOW_BITS-1) = 15` significant
/// scalar bits per point per round.
const NB_CHUNKS: usize = 3;
/// Points processed per 2 KiB randomness refill.
const RAND_WINDOW: usize = 1024;

/// One round of the randomized subgroup combination.
///
/// Returns `true` iff \\(\sum_i [s_i] P_i\\) passes the Scott test for one
/// batch of internally drawn random digits \\(s_i\\). Repeating the round
/// drives the false-positive probability of a non-\\(\mathbb{G}\_1\\) input
/// down geometrically.
///
/// Reading the OS randomness source is treated as infallible; a failing
/// source aborts.
pub(crate) fn msm_check<C: Curve>(points: &[AffinePoint<C>]) -> bool {
    // each chunk draws independent digits, so the chunks are independent
    // tasks; buckets stay local to their chunk
    let totals: Vec<ExtendedPoint<C>> = (0..NB_CHUNKS)
        .into_par_iter()
        .map(|_| process_chunk(points))
        .collect();

    // Horner combination, highest chunk first
    let mut acc = totals[NB_CHUNKS - 1];
    for total in totals[..NB_CHUNKS - 1].iter().rev() {
        for _ in 0..WINDOW_BITS {
            acc.double_in_place();
        }
        acc.add_assign(total);
    }

    acc.to_jacobian().is_in_subgroup()
}

/// Sorts every point into one of `2^(WINDOW_BITS-1)` buckets keyed by a
/// fresh random digit and reduces the buckets to a single point.
fn process_chunk<C: Curve>(points: &[AffinePoint<C>]) -> ExtendedPoint<C> {
    // 2 KiB of randomness covers RAND_WINDOW points, two bytes each
    let mut br = [0u8; RAND_WINDOW * 2];
    let mask = (1u16 << (WINDOW_BITS - 1)) - 1;

    let mut buckets = [ExtendedPoint::<C>::identity(); 1 << (WINDOW_BITS - 1)];

    for (i, point) in points.iter().enumerate() {
        if i % RAND_WINDOW == 0 {
            OsRng.fill_bytes(&mut br);
        }
        let off = (i % RAND_WINDOW) * 2;
        let digit = u16::from_le_bytes([br[off], br[off + 1]]) & mask;
        if digit == 0 {
            continue;
        }
        buckets[(digit - 1) as usize].add_assign_mixed(point);
    }

    // total = 1*bucket[0] + 2*bucket[1] + ... + n*bucket[n-1], computed as
    // a running sum of suffix sums
    let mut running_sum = ExtendedPoint::identity();
    let mut total = ExtendedPoint::identity();
    for bucket in buckets.iter().rev() {
        if !bucket.is_identity() {
            running_sum.add_assign(bucket);
        }
        total.add_assign(&running_sum);
    }

    total
}

/// Variable-time Pippenger multi-exponentiation
/// \\(\sum_i [s_i] P_i\\) with canonical little-endian limb scalars.
///
/// Scalars are cut into unsigned `w`-bit digits; each digit column sorts
/// points into `2^w - 1` buckets which reduce by the running-sum trick,
/// and the columns fold together with `w` doublings per step. The window
/// width grows slowly with the input size, balancing the `n` bucket
/// insertions per column against the `2^w` bucket additions.
pub(crate) fn multi_exp<C: Curve, const N: usize>(
    points: &[AffinePoint<C>],
    scalars: &[[u64; N]],
) -> JacobianPoint<C> {
    assert_eq!(points.len(), scalars.len(), "length mismatch");

    let w: usize = if points.len() < 500 {
        6
    } else if points.len() < 800 {
        7
    } else {
        8
    };
    let digits_count = (N * 64 + w - 1) / w;
    let buckets_count = (1usize << w) - 1;

    let mut total = JacobianPoint::identity();
    let mut buckets = vec![JacobianPoint::<C>::identity(); buckets_count];

    for digit_index in (0..digits_count).rev() {
        for bucket in buckets.iter_mut() {
            *bucket = JacobianPoint::identity();
        }
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            let digit = extract_digit(scalar, digit_index, w);
            if digit != 0 {
                buckets[(digit - 1) as usize].add_assign_mixed(point);
            }
        }

        let mut running_sum = JacobianPoint::identity();
        let mut column = JacobianPoint::identity();
        for bucket in buckets.iter().rev() {
            running_sum.add_assign(bucket);
            column.add_assign(&running_sum);
        }

        for _ in 0..w {
            total.double_in_place();
        }
        total.add_assign(&column);
    }

    total
}

/// The `index`-th little-endian `w`-bit digit of a limb array.
fn extract_digit<const N: usize>(scalar: &[u64; N], index: usize, w: usize) -> u64 {
    let bit = index * w;
    let limb = bit / 64;
    if limb >= N {
        return 0;
    }
    let off = bit % 64;
    let mut digit = scalar[limb] >> off;
    if off + w > 64 && limb + 1 < N {
        digit |= scalar[limb + 1] << (64 - off);
    }
    digit & ((1u64 << w) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::{Bls12_381, Fr};

    type G1Affine = AffinePoint<Bls12_381>;

    #[test]
    fn multi_exp_matches_naive_sum() {
        let g = G1Affine::generator();
        let points: Vec<G1Affine> = (1..=20u64)
            .map(|i| g.scalar_mul(&[i]).to_affine())
            .collect();
        let scalars: Vec<[u64; 4]> = (1..=20u64).map(|i| Fr::from_u64(3 * i + 1).to_repr()).collect();

        let got = multi_exp(&points, &scalars);

        let mut want = JacobianPoint::identity();
        for (p, s) in points.iter().zip(scalars.iter()) {
            want.add_assign(&p.scalar_mul(s));
        }
        assert_eq!(got, want);
    }

    #[test]
    fn multi_exp_of_empty_input_is_identity() {
        let points: Vec<G1Affine> = Vec::new();
        let scalars: Vec<[u64; 4]> = Vec::new();
        assert!(multi_exp(&points, &scalars).is_identity());
    }

    #[test]
    fn extract_digit_crosses_limb_boundaries() {
        let s = [u64::MAX, 0, 0, 1];
        assert_eq!(extract_digit(&s, 0, 6), 63);
        assert_eq!(extract_digit(&s, 10, 6), 0b1111); // bits 60..64
        assert_eq!(extract_digit(&s, 32, 6), 1); // bit 192
        assert_eq!(extract_digit(&s, 50, 6), 0);
    }

    #[test]
    fn msm_check_accepts_subgroup_points() {
        let g = G1Affine::generator();
        let points: Vec<G1Affine> = (1..=50u64)
            .map(|i| g.scalar_mul(&[i]).to_affine())
            .collect();
        for _ in 0..3 {
            assert!(msm_check(&points));
        }
    }
}
