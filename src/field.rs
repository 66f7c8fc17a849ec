// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Fixed-width prime fields in Montgomery form.
//!
//! Every field in this crate is an instance of the `montgomery_field!`
//! macro: a little-endian array of 64-bit limbs holding `a·R mod p` with
//! `R = 2^(64·LIMBS)`. Multiplication is CIOS Montgomery multiplication;
//! inversion is Fermat; square roots are Tonelli–Shanks driven by the
//! embedded two-adicity constants.
//!
//! The representation is kept reduced below the modulus at all times, so the
//! limbs of an element are canonical and equality is plain limb equality
//! (routed through `subtle` for hygiene).
//!
//! Field operations defined in terms of other field operations (the hard
//! exponentiations `x^((p-1)/ℓ)` of the Tate filters) live with their curve
//! modules; this module only provides the primitive layer they build on.

/// Operations the generic curve machinery needs from a base or scalar field.
///
/// Concrete field types implement this by delegating to their inherent
/// methods, so monomorphised curve code compiles down to direct limb
/// arithmetic.
pub trait FieldElement:
    Copy + Clone + core::fmt::Debug + PartialEq + Eq + Send + Sync + 'static
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;

    /// `self + rhs`.
    fn add(&self, rhs: &Self) -> Self;
    /// `self - rhs`.
    fn sub(&self, rhs: &Self) -> Self;
    /// `self * rhs`.
    fn mul(&self, rhs: &Self) -> Self;
    /// `self^2`.
    fn square(&self) -> Self;
    /// `2 * self`.
    fn double(&self) -> Self;
    /// `-self`.
    fn neg(&self) -> Self;
    /// `self^(p-2)`; zero maps to zero.
    fn invert(&self) -> Self;
    /// Tonelli–Shanks square root; `None` for non-residues.
    fn sqrt(&self) -> Option<Self>;
    /// Whether this is the additive identity.
    fn is_zero(&self) -> bool;
    /// Whether this is the multiplicative identity.
    fn is_one(&self) -> bool;
}

macro_rules! montgomery_field {
    (
        $(#[$attr:meta])*
        $name:ident,
        $n:expr, {
            modulus: $modulus:expr,
            one: $one:expr,
            r2: $r2:expr,
            inv: $inv:expr,
            modulus_bits: $bits:expr,
            two_adicity: $two_adicity:expr,
            trace_minus_one_div_two: $trace:expr,
            root_of_unity: $rou:expr $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone)]
        pub struct $name(pub(crate) [u64; $n]);

        impl $name {
            /// The additive identity.
            pub const ZERO: $name = $name([0u64; $n]);
            /// The multiplicative identity (`R mod p` in limbs).
            pub const ONE: $name = $name($one);

            pub(crate) const MODULUS: [u64; $n] = $modulus;
            pub(crate) const R2: [u64; $n] = $r2;
            pub(crate) const INV: u64 = $inv;
            pub(crate) const MODULUS_BITS: u32 = $bits;
            const TWO_ADICITY: u32 = $two_adicity;
            const TRACE_MINUS_ONE_DIV_TWO: [u64; $n] = $trace;
            const ROOT_OF_UNITY: $name = $name($rou);

            /// Builds an element directly from Montgomery-form limbs.
            ///
            /// Used for the tabulated curve constants; the limbs must already
            /// be reduced below the modulus.
            pub(crate) const fn from_raw(limbs: [u64; $n]) -> $name {
                $name(limbs)
            }

            /// Converts a small integer into the field.
            pub fn from_u64(v: u64) -> $name {
                let mut limbs = [0u64; $n];
                limbs[0] = v;
                $name(Self::montgomery_mul(&limbs, &Self::R2))
            }

            /// Parses canonical little-endian limbs; `None` if not below the
            /// modulus.
            pub fn from_repr(limbs: [u64; $n]) -> Option<$name> {
                if Self::gte_modulus(&limbs) {
                    return None;
                }
                Some($name(Self::montgomery_mul(&limbs, &Self::R2)))
            }

            /// Canonical little-endian limbs of the represented integer.
            pub fn to_repr(&self) -> [u64; $n] {
                let mut one = [0u64; $n];
                one[0] = 1;
                Self::montgomery_mul(&self.0, &one)
            }

            /// Canonical little-endian byte encoding.
            pub fn to_le_bytes(&self) -> [u8; $n * 8] {
                let limbs = self.to_repr();
                let mut out = [0u8; $n * 8];
                for (i, limb) in limbs.iter().enumerate() {
                    out[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
                }
                out
            }

            /// Reduces an arbitrary-precision non-negative integer into the
            /// field.
            pub fn from_biguint(v: &num_bigint::BigUint) -> $name {
                let modulus = num_bigint::BigUint::from_bytes_le(&{
                    let mut b = [0u8; $n * 8];
                    for (i, limb) in Self::MODULUS.iter().enumerate() {
                        b[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
                    }
                    b
                });
                let mut limbs = [0u64; $n];
                for (i, digit) in (v % modulus).iter_u64_digits().enumerate() {
                    limbs[i] = digit;
                }
                $name(Self::montgomery_mul(&limbs, &Self::R2))
            }

            /// Samples a uniform field element from `rng` by rejection.
            pub fn random<R: rand_core::RngCore + ?Sized>(rng: &mut R) -> $name {
                let top_mask = if Self::MODULUS_BITS % 64 == 0 {
                    u64::MAX
                } else {
                    (1u64 << (Self::MODULUS_BITS % 64)) - 1
                };
                loop {
                    let mut limbs = [0u64; $n];
                    for limb in limbs.iter_mut() {
                        *limb = rng.next_u64();
                    }
                    limbs[$n - 1] &= top_mask;
                    if !Self::gte_modulus(&limbs) {
                        return $name(Self::montgomery_mul(&limbs, &Self::R2));
                    }
                }
            }

            fn gte_modulus(limbs: &[u64; $n]) -> bool {
                for i in (0..$n).rev() {
                    if limbs[i] < Self::MODULUS[i] {
                        return false;
                    }
                    if limbs[i] > Self::MODULUS[i] {
                        return true;
                    }
                }
                true
            }

            // CIOS Montgomery multiplication; both inputs reduced, output
            // reduced.
            fn montgomery_mul(a: &[u64; $n], b: &[u64; $n]) -> [u64; $n] {
                let mut t = [0u64; $n + 2];
                for i in 0..$n {
                    let mut carry = 0u64;
                    for j in 0..$n {
                        let full = t[j] as u128 + a[j] as u128 * b[i] as u128 + carry as u128;
                        t[j] = full as u64;
                        carry = (full >> 64) as u64;
                    }
                    let full = t[$n] as u128 + carry as u128;
                    t[$n] = full as u64;
                    t[$n + 1] = (full >> 64) as u64;

                    let m = t[0].wrapping_mul(Self::INV);
                    let full = t[0] as u128 + m as u128 * Self::MODULUS[0] as u128;
                    let mut carry = (full >> 64) as u64;
                    for j in 1..$n {
                        let full =
                            t[j] as u128 + m as u128 * Self::MODULUS[j] as u128 + carry as u128;
                        t[j - 1] = full as u64;
                        carry = (full >> 64) as u64;
                    }
                    let full = t[$n] as u128 + carry as u128;
                    t[$n - 1] = full as u64;
                    t[$n] = t[$n + 1] + ((full >> 64) as u64);
                    t[$n + 1] = 0;
                }
                let mut out = [0u64; $n];
                out.copy_from_slice(&t[..$n]);
                if t[$n] != 0 || Self::gte_modulus(&out) {
                    let mut borrow = 0u64;
                    for i in 0..$n {
                        let (d, b1) = out[i].overflowing_sub(Self::MODULUS[i]);
                        let (d, b2) = d.overflowing_sub(borrow);
                        out[i] = d;
                        borrow = (b1 | b2) as u64;
                    }
                }
                out
            }

            /// `self + rhs`.
            pub fn add(&self, rhs: &$name) -> $name {
                let mut t = [0u64; $n];
                let mut carry = 0u64;
                for i in 0..$n {
                    let full = self.0[i] as u128 + rhs.0[i] as u128 + carry as u128;
                    t[i] = full as u64;
                    carry = (full >> 64) as u64;
                }
                if Self::gte_modulus(&t) {
                    let mut borrow = 0u64;
                    for i in 0..$n {
                        let (d, b1) = t[i].overflowing_sub(Self::MODULUS[i]);
                        let (d, b2) = d.overflowing_sub(borrow);
                        t[i] = d;
                        borrow = (b1 | b2) as u64;
                    }
                }
                $name(t)
            }

            /// `self - rhs`.
            pub fn sub(&self, rhs: &$name) -> $name {
                let mut t = [0u64; $n];
                let mut borrow = 0u64;
                for i in 0..$n {
                    let (d, b1) = self.0[i].overflowing_sub(rhs.0[i]);
                    let (d, b2) = d.overflowing_sub(borrow);
                    t[i] = d;
                    borrow = (b1 | b2) as u64;
                }
                if borrow != 0 {
                    let mut carry = 0u64;
                    for i in 0..$n {
                        let full = t[i] as u128 + Self::MODULUS[i] as u128 + carry as u128;
                        t[i] = full as u64;
                        carry = (full >> 64) as u64;
                    }
                }
                $name(t)
            }

            /// `-self`.
            pub fn neg(&self) -> $name {
                if self.is_zero() {
                    return *self;
                }
                let mut t = [0u64; $n];
                let mut borrow = 0u64;
                for i in 0..$n {
                    let (d, b1) = Self::MODULUS[i].overflowing_sub(self.0[i]);
                    let (d, b2) = d.overflowing_sub(borrow);
                    t[i] = d;
                    borrow = (b1 | b2) as u64;
                }
                $name(t)
            }

            /// `2 * self`.
            pub fn double(&self) -> $name {
                self.add(self)
            }

            /// `self * rhs`.
            pub fn mul(&self, rhs: &$name) -> $name {
                $name(Self::montgomery_mul(&self.0, &rhs.0))
            }

            /// `self^2`.
            pub fn square(&self) -> $name {
                $name(Self::montgomery_mul(&self.0, &self.0))
            }

            /// `self^(2^k)`: `k` successive squarings.
            pub fn pow2k(&self, k: u32) -> $name {
                let mut r = *self;
                for _ in 0..k {
                    r = r.square();
                }
                r
            }

            /// Variable-time exponentiation by little-endian limbs.
            pub fn pow(&self, exp: &[u64]) -> $name {
                let mut res = $name::ONE;
                let mut started = false;
                for &limb in exp.iter().rev() {
                    for i in (0..64).rev() {
                        if started {
                            res = res.square();
                        }
                        if (limb >> i) & 1 == 1 {
                            if started {
                                res = res.mul(self);
                            } else {
                                res = *self;
                                started = true;
                            }
                        }
                    }
                }
                if started {
                    res
                } else {
                    $name::ONE
                }
            }

            /// Fermat inversion `self^(p-2)`; zero maps to zero.
            pub fn invert(&self) -> $name {
                let mut exp = Self::MODULUS;
                // p is odd and > 2, so p - 2 never borrows past the low limb
                exp[0] -= 2;
                self.pow(&exp)
            }

            /// Tonelli–Shanks square root; `None` for quadratic non-residues.
            pub fn sqrt(&self) -> Option<$name> {
                if self.is_zero() {
                    return Some(*self);
                }
                let w = self.pow(&Self::TRACE_MINUS_ONE_DIV_TWO);
                let mut v = Self::TWO_ADICITY;
                let mut x = self.mul(&w);
                let mut b = x.mul(&w);
                let mut z = Self::ROOT_OF_UNITY;
                while !b.is_one() {
                    let mut k = 0u32;
                    let mut b2k = b;
                    while !b2k.is_one() {
                        b2k = b2k.square();
                        k += 1;
                        if k == v {
                            return None;
                        }
                    }
                    let w2 = z.pow2k(v - k - 1);
                    z = w2.square();
                    b = b.mul(&z);
                    x = x.mul(&w2);
                    v = k;
                }
                if x.square() == *self {
                    Some(x)
                } else {
                    None
                }
            }

            /// Whether this is the additive identity.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|&l| l == 0)
            }

            /// Whether this is the multiplicative identity.
            pub fn is_one(&self) -> bool {
                *self == $name::ONE
            }
        }

        impl subtle::ConstantTimeEq for $name {
            fn ct_eq(&self, other: &$name) -> subtle::Choice {
                subtle::ConstantTimeEq::ct_eq(&self.0[..], &other.0[..])
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &$name) -> bool {
                use subtle::ConstantTimeEq;
                self.ct_eq(other).into()
            }
        }

        impl Eq for $name {}

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), "(0x"))?;
                for limb in self.to_repr().iter().rev() {
                    write!(f, "{:016x}", limb)?;
                }
                write!(f, ")")
            }
        }

        impl $crate::field::FieldElement for $name {
            const ZERO: $name = $name::ZERO;
            const ONE: $name = $name::ONE;

            fn add(&self, rhs: &$name) -> $name {
                $name::add(self, rhs)
            }
            fn sub(&self, rhs: &$name) -> $name {
                $name::sub(self, rhs)
            }
            fn mul(&self, rhs: &$name) -> $name {
                $name::mul(self, rhs)
            }
            fn square(&self) -> $name {
                $name::square(self)
            }
            fn double(&self) -> $name {
                $name::double(self)
            }
            fn neg(&self) -> $name {
                $name::neg(self)
            }
            fn invert(&self) -> $name {
                $name::invert(self)
            }
            fn sqrt(&self) -> Option<$name> {
                $name::sqrt(self)
            }
            fn is_zero(&self) -> bool {
                $name::is_zero(self)
            }
            fn is_one(&self) -> bool {
                $name::is_one(self)
            }
        }

        impl<'a, 'b> core::ops::Add<&'b $name> for &'a $name {
            type Output = $name;
            fn add(self, rhs: &'b $name) -> $name {
                $name::add(self, rhs)
            }
        }

        impl<'a, 'b> core::ops::Sub<&'b $name> for &'a $name {
            type Output = $name;
            fn sub(self, rhs: &'b $name) -> $name {
                $name::sub(self, rhs)
            }
        }

        impl<'a, 'b> core::ops::Mul<&'b $name> for &'a $name {
            type Output = $name;
            fn mul(self, rhs: &'b $name) -> $name {
                $name::mul(self, rhs)
            }
        }

        impl<'a> core::ops::Neg for &'a $name {
            type Output = $name;
            fn neg(self) -> $name {
                $name::neg(self)
            }
        }

        $crate::macros::define_add_variants!($name);
        $crate::macros::define_sub_variants!($name);
        $crate::macros::define_mul_variants!($name);
        $crate::macros::define_neg_variant!($name);
    };
}

pub(crate) use montgomery_field;
