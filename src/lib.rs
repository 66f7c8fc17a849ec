// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

#![deny(missing_docs)]

//! # bls12-subgroup-batch
//!
//! Batch \\(\mathbb{G}\_1\\) subgroup-membership checks for BLS12 pairing
//! curves.
//!
//! Given a slice of affine points on \\(E/\mathbb{F}\_p : Y^2 = X^3 + b\\),
//! this crate decides whether every point lies in the prime-order subgroup
//! \\(\mathbb{G}\_1 \subset E(\mathbb{F}\_p)\\). Two algorithm families are
//! provided per curve:
//!
//! * **naive**: the Scott endomorphism test, point by point;
//! * **batch**: cheap per-point Tate-residue filters that kill the small
//!   prime torsion of the cofactor, followed by a few rounds of random
//!   linear combination whose single output point is Scott-tested. The
//!   randomized tail drives the false-positive probability below
//!   \\(2^{-64}\\) for the reference configurations.
//!
//! The batch entry points return a plain `bool`: `false` is the normal
//! negative result, not an error. Inputs are assumed to be on the curve;
//! that check is the caller's obligation.
//!
//! # Organisation
//!
//! Shared machinery lives at the crate root:
//!
//! * [`field`]: fixed-width Montgomery prime fields;
//! * [`curve`]: short Weierstrass points (affine, Jacobian and extended
//!   Jacobian coordinates) and the Scott single-point subgroup test;
//! * [`msm`]: the randomized bucketed multi-scalar check and the reference
//!   Pippenger multi-exponentiation;
//! * [`eisenstein`]: arbitrary-precision arithmetic in \\(\mathbb{Z}[\omega]\\);
//! * [`bigint`]: small residue helpers on big integers.
//!
//! Each supported curve has its own module carrying the curve constants, the
//! tabulated Tate line functions, the hard exponentiation chains and the two
//! batch entry points:
//!
//! * [`bls12_381`]: Tate filters at \\(\ell = 3, 11\\), the cubic-residue
//!   symbol, and the extended-Jacobian random-combination check;
//! * [`bls12_377`]: Tate filters at \\(\ell = 16, 3, 7, 13\\) and a
//!   caller-bounded random-combination check (the cofactor is highly 2-adic,
//!   so the reference configuration is `bound = 2`, `rounds = 64`);
//! * [`bls12_376_strong`]: a batch-friendly research curve; Tate filter at
//!   \\(\ell = 3\\) and a hard-coded bound of \\(2^{60}\\).
//!
//! # Warning
//!
//! This is correctness-oriented research code. It is variable-time by
//! construction and has not been audited.

pub(crate) mod macros;

pub mod bigint;
pub mod curve;
pub mod eisenstein;
pub mod field;
pub mod msm;

pub mod bls12_376_strong;
pub mod bls12_377;
pub mod bls12_381;

pub use curve::{AffinePoint, Curve, ExtendedPoint, JacobianPoint};
pub use eisenstein::EisensteinInteger;
pub use field::FieldElement;
