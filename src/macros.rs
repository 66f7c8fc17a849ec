// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Macros for implementing repetitive pass-by-value operator variants.
//!
//! Arithmetic is defined once on references; these macros forward the
//! owned/borrowed combinations to the reference implementation.

macro_rules! define_add_variants {
    ($t:ty) => {
        impl core::ops::Add<$t> for $t {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                &self + &rhs
            }
        }

        impl<'b> core::ops::Add<&'b $t> for $t {
            type Output = $t;
            fn add(self, rhs: &'b $t) -> $t {
                &self + rhs
            }
        }

        impl<'a> core::ops::Add<$t> for &'a $t {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                self + &rhs
            }
        }
    };
}

macro_rules! define_sub_variants {
    ($t:ty) => {
        impl core::ops::Sub<$t> for $t {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                &self - &rhs
            }
        }

        impl<'b> core::ops::Sub<&'b $t> for $t {
            type Output = $t;
            fn sub(self, rhs: &'b $t) -> $t {
                &self - rhs
            }
        }

        impl<'a> core::ops::Sub<$t> for &'a $t {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                self - &rhs
            }
        }
    };
}

macro_rules! define_mul_variants {
    ($t:ty) => {
        impl core::ops::Mul<$t> for $t {
            type Output = $t;
            fn mul(self, rhs: $t) -> $t {
                &self * &rhs
            }
        }

        impl<'b> core::ops::Mul<&'b $t> for $t {
            type Output = $t;
            fn mul(self, rhs: &'b $t) -> $t {
                &self * rhs
            }
        }

        impl<'a> core::ops::Mul<$t> for &'a $t {
            type Output = $t;
            fn mul(self, rhs: $t) -> $t {
                self * &rhs
            }
        }
    };
}

macro_rules! define_neg_variant {
    ($t:ty) => {
        impl core::ops::Neg for $t {
            type Output = $t;
            fn neg(self) -> $t {
                -&self
            }
        }
    };
}

pub(crate) use define_add_variants;
pub(crate) use define_mul_variants;
pub(crate) use define_neg_variant;
pub(crate) use define_sub_variants;
