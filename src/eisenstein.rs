// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Arbitrary-precision Eisenstein integers \\(\mathbb{Z}[\omega]\\),
//! \\(\omega^2 + \omega + 1 = 0\\).
//!
//! The ring is Euclidean for the norm
//! \\(N(a_0 + a_1\omega) = a_0^2 - a_0 a_1 + a_1^2\\), which is what makes
//! the Euclidean-algorithm cubic-residue symbol terminate: [`quo`] rounds
//! each coordinate of \\(x\bar{y}/N(y)\\) to the nearest integer, so the
//! remainder norm strictly contracts. Truncating division would break that
//! invariant.
//!
//! [`quo`]: EisensteinInteger::quo

use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

/// An Eisenstein integer \\(a_0 + a_1\omega\\) with arbitrary-precision
/// coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EisensteinInteger {
    /// Rational coordinate.
    pub a0: BigInt,
    /// \\(\omega\\) coordinate.
    pub a1: BigInt,
}

impl EisensteinInteger {
    /// The additive identity.
    pub fn zero() -> EisensteinInteger {
        EisensteinInteger {
            a0: BigInt::zero(),
            a1: BigInt::zero(),
        }
    }

    /// The multiplicative identity.
    pub fn one() -> EisensteinInteger {
        EisensteinInteger {
            a0: BigInt::one(),
            a1: BigInt::zero(),
        }
    }

    /// Builds \\(a_0 + a_1\omega\\).
    pub fn new(a0: BigInt, a1: BigInt) -> EisensteinInteger {
        EisensteinInteger { a0, a1 }
    }

    /// Whether both coordinates are zero.
    pub fn is_zero(&self) -> bool {
        self.a0.is_zero() && self.a1.is_zero()
    }

    /// Whether this is a rational unit \\(\pm 1\\).
    ///
    /// The Euclidean loop of the cubic symbol only ever terminates on these
    /// two of the six units.
    pub fn is_rational_unit(&self) -> bool {
        self.a1.is_zero() && self.a0.magnitude().is_one()
    }

    /// `-self`.
    pub fn neg(&self) -> EisensteinInteger {
        EisensteinInteger {
            a0: -&self.a0,
            a1: -&self.a1,
        }
    }

    /// The conjugate \\(\overline{a_0 + a_1\omega} = (a_0 - a_1) - a_1\omega\\).
    pub fn conj(&self) -> EisensteinInteger {
        EisensteinInteger {
            a0: &self.a0 - &self.a1,
            a1: -&self.a1,
        }
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &EisensteinInteger) -> EisensteinInteger {
        EisensteinInteger {
            a0: &self.a0 + &rhs.a0,
            a1: &self.a1 + &rhs.a1,
        }
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &EisensteinInteger) -> EisensteinInteger {
        EisensteinInteger {
            a0: &self.a0 - &rhs.a0,
            a1: &self.a1 - &rhs.a1,
        }
    }

    /// `self * rhs`.
    ///
    /// With \\(\omega^2 = -\omega - 1\\),
    /// \\((x_0 + x_1\omega)(y_0 + y_1\omega)
    ///   = (x_0 y_0 - x_1 y_1) + (x_0 y_1 + x_1 y_0 - x_1 y_1)\omega\\);
    /// one Karatsuba step saves the fourth full-width product.
    pub fn mul(&self, rhs: &EisensteinInteger) -> EisensteinInteger {
        let t0 = &self.a0 * &rhs.a0;
        let t1 = &self.a1 * &rhs.a1;
        let t2 = (&self.a0 + &self.a1) * (&rhs.a0 + &rhs.a1);
        EisensteinInteger {
            a0: &t0 - &t1,
            a1: t2 - t0 - (&t1 << 1),
        }
    }

    /// `self * conj(rhs)`, without materialising the conjugate.
    ///
    /// \\(x\bar{y} = (x_0 y_0 + x_1 y_1 - x_0 y_1) + (x_1 y_0 - x_0 y_1)\omega\\).
    pub fn mul_by_conj(&self, rhs: &EisensteinInteger) -> EisensteinInteger {
        let t0 = &self.a1 * &rhs.a0;
        let t1 = &self.a0 * &rhs.a1;
        let t2 = (&self.a0 + &self.a1) * (&rhs.a0 + &rhs.a1);
        EisensteinInteger {
            a0: t2 - &t0 - (&t1 << 1),
            a1: t0 - t1,
        }
    }

    /// The norm \\(N(a_0 + a_1\omega) = (a_0 - a_1)^2 + a_0 a_1\\).
    pub fn norm(&self) -> BigInt {
        let d = &self.a0 - &self.a1;
        &d * &d + &self.a0 * &self.a1
    }

    /// Euclidean quotient: the `q` minimising \\(N(\text{self} - q\cdot rhs)\\)
    /// coordinate-wise, guaranteeing \\(N(r) < N(rhs)\\) for the remainder.
    ///
    /// Computes \\(x\bar{y}\\) and rounds each coordinate of the rational
    /// quotient to the nearest integer (ties away from zero).
    pub fn quo(&self, rhs: &EisensteinInteger) -> EisensteinInteger {
        let d = rhs.norm();
        let num = self.mul_by_conj(rhs);
        EisensteinInteger {
            a0: round_div(&num.a0, &d),
            a1: round_div(&num.a1, &d),
        }
    }
}

/// Nearest-integer division, ties rounded away from zero.
fn round_div(n: &BigInt, d: &BigInt) -> BigInt {
    // BigInt division truncates toward zero; bump the quotient when the
    // remainder magnitude reaches half the divisor magnitude.
    let q = n / d;
    let r = n % d;
    if r.magnitude() * 2u32 >= *d.magnitude() {
        if (n.sign() == Sign::Minus) == (d.sign() == Sign::Minus) {
            q + 1
        } else {
            q - 1
        }
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_int(rng: &mut StdRng, bytes: usize) -> BigInt {
        let mut buf = vec![0u8; bytes];
        rng.fill(&mut buf[..]);
        let sign = if rng.gen::<bool>() { Sign::Plus } else { Sign::Minus };
        BigInt::from_bytes_le(sign, &buf)
    }

    #[test]
    fn mul_matches_schoolbook() {
        let mut rng = StdRng::seed_from_u64(0xe15e);
        for _ in 0..100 {
            let x = EisensteinInteger::new(random_int(&mut rng, 20), random_int(&mut rng, 20));
            let y = EisensteinInteger::new(random_int(&mut rng, 20), random_int(&mut rng, 20));
            let z = x.mul(&y);
            // (x0 + x1 w)(y0 + y1 w) with w^2 = -w - 1
            let a0 = &x.a0 * &y.a0 - &x.a1 * &y.a1;
            let a1 = &x.a0 * &y.a1 + &x.a1 * &y.a0 - &x.a1 * &y.a1;
            assert_eq!(z.a0, a0);
            assert_eq!(z.a1, a1);
            assert_eq!(x.mul_by_conj(&y), x.mul(&y.conj()));
        }
    }

    #[test]
    fn norm_is_multiplicative() {
        let mut rng = StdRng::seed_from_u64(0x4e4f);
        for _ in 0..50 {
            let x = EisensteinInteger::new(random_int(&mut rng, 16), random_int(&mut rng, 16));
            let y = EisensteinInteger::new(random_int(&mut rng, 16), random_int(&mut rng, 16));
            assert_eq!(x.mul(&y).norm(), x.norm() * y.norm());
        }
    }

    #[test]
    fn quo_remainder_norm_contracts() {
        // the Euclidean property backing termination of the cubic symbol
        let mut rng = StdRng::seed_from_u64(0x510);
        for _ in 0..300 {
            let x = EisensteinInteger::new(random_int(&mut rng, 40), random_int(&mut rng, 40));
            let y = EisensteinInteger::new(random_int(&mut rng, 18), random_int(&mut rng, 18));
            if y.is_zero() {
                continue;
            }
            let q = x.quo(&y);
            let r = x.sub(&q.mul(&y));
            assert!(r.norm() < y.norm(), "norm did not contract: {:?} {:?}", x, y);
        }
    }

    #[test]
    fn quo_of_exact_multiple() {
        let y = EisensteinInteger::new(BigInt::from(17), BigInt::from(-5));
        let q = EisensteinInteger::new(BigInt::from(-3), BigInt::from(11));
        let x = q.mul(&y);
        assert_eq!(x.quo(&y), q);
        assert!(x.sub(&x.quo(&y).mul(&y)).is_zero());
    }

    #[test]
    fn conjugate_fixes_norm() {
        let x = EisensteinInteger::new(BigInt::from(123456789), BigInt::from(-987654321));
        assert_eq!(x.conj().norm(), x.norm());
        assert_eq!(x.conj().conj(), x);
        assert!(x.add(&x.neg()).is_zero());
        assert_eq!(x.neg().norm(), x.norm());
    }
}
