// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Cubic residuosity in \\(\mathbb{F}\_p\\) via Eisenstein cubic
//! reciprocity.
//!
//! \\(p \equiv 1 \pmod 3\\) splits in \\(\mathbb{Z}[\omega]\\); with a
//! fixed primary prime \\(\beta\\) of norm \\(p\\), the symbol
//! \\((\alpha/\beta)\_3 \in \\{0, 1, \omega, \omega^2\\}\\) computes by a
//! Euclidean ladder instead of a 381-bit exponentiation, the way Jacobi
//! symbols replace Euler's criterion. The result must agree with the
//! \\(\ell = 3\\) Tate filter: `x` is a cube iff the symbol is one.

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::bigint::{increment, mod3, mod9};
use crate::eisenstein::EisensteinInteger;

use super::field::Fp;

/// β = a + bω, primary (a ≢ 0, b ≡ 0 mod 3), with N(β) = p.
fn beta() -> EisensteinInteger {
    EisensteinInteger::new(
        BigInt::from_slice(
            Sign::Minus,
            &[
                1431677610, 2606104576, 2091660971, 851632470, 3523281307, 790316100,
            ],
        ),
        BigInt::from_slice(
            Sign::Plus,
            &[
                1431612075, 3377790976, 2091660970, 851632470, 3523281307, 790316100,
            ],
        ),
    )
}

/// Whether `x` is a cube in \\(\mathbb{F}\_p\\).
///
/// Produces the identical boolean to the \\(\ell = 3\\) Tate filter
/// `(·)^((p-1)/3) == 1`.
pub fn is_cubic_residue(x: &Fp) -> bool {
    cubic_symbol(x) == EisensteinInteger::one()
}

/// The cubic-residue symbol \\((x/\beta)\_3 \in \\{0, 1, \omega, \omega^2\\}\\).
pub fn cubic_symbol(x: &Fp) -> EisensteinInteger {
    let alpha = EisensteinInteger::new(
        BigInt::from_bytes_le(Sign::Plus, &x.to_le_bytes()),
        BigInt::zero(),
    );
    cubic_symbol_inner(alpha, beta())
}

fn cubic_symbol_inner(
    mut alpha: EisensteinInteger,
    mut beta: EisensteinInteger,
) -> EisensteinInteger {
    let mut result = EisensteinInteger::one();

    loop {
        if alpha.is_rational_unit() || beta.is_rational_unit() {
            return result;
        }

        // γ = α − ⌊α/β⌉·β
        let q = alpha.quo(&beta);
        let mut gamma = alpha.sub(&q.mul(&beta));
        if gamma.is_zero() {
            return EisensteinInteger::zero();
        }

        // Strip ramified factors: divide by (1−ω) while the quotient is
        // integral, i.e. while γ₀+γ₁ ≡ 0 (mod 3), using
        //     (γ/(1−ω))₀ = (2γ₀ − γ₁)/3
        //     (γ/(1−ω))₁ = (γ₀ + γ₁)/3
        let mut m = 0u64;
        loop {
            let s = &gamma.a0 + &gamma.a1;
            if mod3(&s) != 0 {
                break;
            }
            let a0 = ((&gamma.a0) << 1) - &gamma.a1;
            gamma = EisensteinInteger::new(a0 / 3, s / 3);
            m += 1;
        }

        // Rotate by a unit so γ becomes primary. Division by ω is a
        // multiplication by ω², so the candidates are
        //     γ,  (γ₁−γ₀) − γ₀ω,  −γ₁ + (γ₀−γ₁)ω
        let mut n = 0u64;
        if mod3(&gamma.a0) == 0 {
            n = 1;
            gamma = EisensteinInteger::new(&gamma.a1 - &gamma.a0, -&gamma.a0);
        } else if mod3(&(&gamma.a0 - &gamma.a1)) == 0 {
            n = 2;
            gamma = EisensteinInteger::new(-&gamma.a1, &gamma.a0 - &gamma.a1);
        }
        debug_assert!(
            mod3(&gamma.a0) != 0 && mod3(&gamma.a1) == 0,
            "rotated remainder is not primary"
        );

        // exp = n·(β₀² − β₀β₁ − 1) + m·(1 − β₀²); the reciprocity step
        // multiplies the result by ω^(exp/3). Switching on exp mod 9
        // avoids the division.
        let b0_sq = &beta.a0 * &beta.a0;
        let mut exp = match m {
            0 => BigInt::zero(),
            1 => BigInt::from(1) - &b0_sq,
            2 => (BigInt::from(1) - &b0_sq) * 2,
            _ => (BigInt::from(1) - &b0_sq) * m,
        };
        if n != 0 {
            let mut t = &beta.a0 * &beta.a1;
            increment(&mut t);
            t = &b0_sq - t;
            if n == 2 {
                t = t * 2;
            }
            exp += t;
        }
        match mod9(&exp) {
            0 => {}
            3 => {
                // result *= ω: (a₀ + a₁ω)ω = −a₁ + (a₀−a₁)ω
                result = EisensteinInteger::new(-&result.a1, &result.a0 - &result.a1);
            }
            6 => {
                // result *= ω²: (a₀ + a₁ω)ω² = (a₁−a₀) − a₀ω
                result = EisensteinInteger::new(&result.a1 - &result.a0, -&result.a0);
            }
            _ => panic!("cubic reciprocity invariant violated: exp mod 9 outside {{0, 3, 6}}"),
        }

        // Swap for the next iteration
        alpha = beta;
        beta = gamma;
    }
}
