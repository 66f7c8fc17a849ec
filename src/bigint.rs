// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Small helpers on arbitrary-precision integers.
//!
//! The cubic-residue symbol needs fast residues modulo 3 and 9 of signed
//! multi-limb magnitudes. Both are computed limb-wise: `2^64 ≡ 1 (mod 3)`,
//! so every limb contributes its own value mod 3 with multiplier one, and
//! `2^64 ≡ 7 (mod 9)`, so the limb multipliers mod 9 cycle through powers
//! of 7.

use num_bigint::{BigInt, BigUint, Sign};
use rand_core::RngCore;

/// `z mod 3` as a non-negative residue, correct for negative `z`.
pub fn mod3(z: &BigInt) -> u64 {
    let mut sum = 0u64;
    for limb in z.magnitude().iter_u64_digits() {
        sum = (sum + limb % 3) % 3;
    }
    if z.sign() == Sign::Minus && sum != 0 {
        3 - sum
    } else {
        sum
    }
}

/// `z mod 9` as a non-negative residue, correct for negative `z`.
pub fn mod9(z: &BigInt) -> u64 {
    let mut sum = 0u64;
    let mut multiplier = 1u64;
    for limb in z.magnitude().iter_u64_digits() {
        sum = (sum + (limb % 9) * multiplier) % 9;
        multiplier = multiplier * 7 % 9;
    }
    if z.sign() == Sign::Minus && sum != 0 {
        9 - sum
    } else {
        sum
    }
}

/// Adds one to `z` in place.
pub fn increment(z: &mut BigInt) {
    *z += 1u32;
}

/// Samples a uniform integer in `[0, bound)` by rejection.
///
/// Randomness failure is unrecoverable: the RNG is expected to abort rather
/// than return bad bytes.
///
/// # Panics
///
/// Panics when `bound` is zero.
pub(crate) fn rand_below<R: RngCore + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    assert!(bound > &BigUint::from(0u32), "empty sampling range");
    let bits = bound.bits();
    let nbytes = ((bits + 7) / 8) as usize;
    let top_mask = if bits % 8 == 0 {
        0xff
    } else {
        (1u8 << (bits % 8)) - 1
    };
    let mut buf = vec![0u8; nbytes];
    loop {
        rng.fill_bytes(&mut buf);
        buf[nbytes - 1] &= top_mask;
        let v = BigUint::from_bytes_le(&buf);
        if &v < bound {
            return v;
        }
    }
}
