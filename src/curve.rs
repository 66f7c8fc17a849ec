// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Group operations on short Weierstrass curves \\(Y^2 = X^3 + b\\).
//!
//! Three point representations are used:
//!
//! * [`AffinePoint`]: the input format of the batch checkers;
//! * [`JacobianPoint`]: \\((X : Y : Z)\\) with affine image
//!   \\((X/Z^2, Y/Z^3)\\), used for scalar multiplication and the Scott
//!   test;
//! * [`ExtendedPoint`]: \\((X : Y : ZZ : ZZZ)\\) with \\(ZZ^3 = ZZZ^2\\)
//!   and affine image \\((X/ZZ, Y/ZZZ)\\); mixed additions are cheaper than
//!   in Jacobian coordinates at the cost of one extra field element, which
//!   is what the bucket accumulators of the randomized multi-scalar check
//!   want.
//!
//! All arithmetic is variable-time.

use crate::field::FieldElement;

/// Compile-time description of one BLS12 curve.
///
/// The marker types implementing this trait carry no data; they select the
/// base field and the tabulated curve constants.
pub trait Curve: Copy + Clone + core::fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    /// The base field \\(\mathbb{F}\_p\\).
    type Base: FieldElement;

    /// Constant term of the curve equation \\(Y^2 = X^3 + B\\).
    const B: Self::Base;

    /// Absolute value of the BLS family seed \\(x_0\\).
    ///
    /// Only \\(x_0^2\\) enters the subgroup condition, so the sign of the
    /// seed never matters here.
    const SEED: u64;

    /// Cube root of unity \\(\omega\\) such that
    /// \\(\phi(x, y) = (\omega x, y)\\) acts as multiplication by
    /// \\(x_0^2 - 1\\) on \\(\mathbb{G}\_1\\).
    const OMEGA: Self::Base;

    /// Affine x-coordinate of the \\(\mathbb{G}\_1\\) generator.
    const GENERATOR_X: Self::Base;
    /// Affine y-coordinate of the \\(\mathbb{G}\_1\\) generator.
    const GENERATOR_Y: Self::Base;
}

// ------------------------------------------------------------------------
// Affine points
// ------------------------------------------------------------------------

/// An affine point, or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint<C: Curve> {
    /// Affine x-coordinate; meaningless when `infinity` is set.
    pub x: C::Base,
    /// Affine y-coordinate; meaningless when `infinity` is set.
    pub y: C::Base,
    /// Marker for the point at infinity.
    pub infinity: bool,
}

impl<C: Curve> AffinePoint<C> {
    /// The point at infinity.
    pub fn identity() -> AffinePoint<C> {
        AffinePoint {
            x: C::Base::ZERO,
            y: C::Base::ZERO,
            infinity: true,
        }
    }

    /// The tabulated \\(\mathbb{G}\_1\\) generator.
    pub fn generator() -> AffinePoint<C> {
        AffinePoint {
            x: C::GENERATOR_X,
            y: C::GENERATOR_Y,
            infinity: false,
        }
    }

    /// Builds a point from coordinates after checking the curve equation.
    pub fn new(x: C::Base, y: C::Base) -> Option<AffinePoint<C>> {
        let p = AffinePoint {
            x,
            y,
            infinity: false,
        };
        if p.is_on_curve() {
            Some(p)
        } else {
            None
        }
    }

    /// Builds a point from coordinates without any validation.
    ///
    /// The batch checkers are only specified for on-curve inputs; feeding
    /// them off-curve points through this constructor is the caller's
    /// responsibility.
    pub fn from_coordinates_unchecked(x: C::Base, y: C::Base) -> AffinePoint<C> {
        AffinePoint {
            x,
            y,
            infinity: false,
        }
    }

    /// Whether the coordinates satisfy \\(y^2 = x^3 + B\\).
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let lhs = self.y.square();
        let rhs = self.x.square().mul(&self.x).add(&C::B);
        lhs == rhs
    }

    /// `-self`.
    pub fn neg(&self) -> AffinePoint<C> {
        AffinePoint {
            x: self.x,
            y: self.y.neg(),
            infinity: self.infinity,
        }
    }

    /// Lifts into Jacobian coordinates.
    pub fn to_jacobian(&self) -> JacobianPoint<C> {
        if self.infinity {
            return JacobianPoint::identity();
        }
        JacobianPoint {
            x: self.x,
            y: self.y,
            z: C::Base::ONE,
        }
    }

    /// Variable-time scalar multiplication by canonical little-endian limbs.
    pub fn scalar_mul(&self, scalar: &[u64]) -> JacobianPoint<C> {
        self.to_jacobian().scalar_mul(scalar)
    }

    /// Scott single-point subgroup test.
    pub fn is_in_subgroup(&self) -> bool {
        self.to_jacobian().is_in_subgroup()
    }
}

/// Multiplies one base point by every scalar, returning affine results.
///
/// Plain per-scalar double-and-add; this is a test-vector generator, not an
/// optimised batch routine.
pub fn batch_scalar_mul<C: Curve, S: AsRef<[u64]>>(
    base: &AffinePoint<C>,
    scalars: &[S],
) -> Vec<AffinePoint<C>> {
    scalars
        .iter()
        .map(|s| base.scalar_mul(s.as_ref()).to_affine())
        .collect()
}

// ------------------------------------------------------------------------
// Jacobian points
// ------------------------------------------------------------------------

/// A point in Jacobian coordinates: \\(x = X/Z^2\\), \\(y = Y/Z^3\\),
/// \\(Z = 0\\) at infinity.
#[derive(Copy, Clone, Debug)]
pub struct JacobianPoint<C: Curve> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) z: C::Base,
}

impl<C: Curve> JacobianPoint<C> {
    /// The point at infinity, `(1 : 1 : 0)`.
    pub fn identity() -> JacobianPoint<C> {
        JacobianPoint {
            x: C::Base::ONE,
            y: C::Base::ONE,
            z: C::Base::ZERO,
        }
    }

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Projects back to affine coordinates (one field inversion).
    pub fn to_affine(&self) -> AffinePoint<C> {
        if self.is_identity() {
            return AffinePoint::identity();
        }
        let zinv = self.z.invert();
        let zinv2 = zinv.square();
        AffinePoint {
            x: self.x.mul(&zinv2),
            y: self.y.mul(&zinv2).mul(&zinv),
            infinity: false,
        }
    }

    /// `self += rhs`, full Jacobian addition (add-2007-bl).
    pub fn add_assign(&mut self, rhs: &JacobianPoint<C>) {
        if rhs.is_identity() {
            return;
        }
        if self.is_identity() {
            *self = *rhs;
            return;
        }

        let z1z1 = rhs.z.square();
        let z2z2 = self.z.square();
        let u1 = rhs.x.mul(&z2z2);
        let u2 = self.x.mul(&z1z1);
        let s1 = rhs.y.mul(&self.z).mul(&z2z2);
        let s2 = self.y.mul(&rhs.z).mul(&z1z1);

        if u1 == u2 && s1 == s2 {
            self.double_in_place();
            return;
        }

        let h = u2.sub(&u1);
        let i = h.double().square();
        let j = h.mul(&i);
        let r = s2.sub(&s1).double();
        let v = u1.mul(&i);

        let x3 = r.square().sub(&j).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&j).double());
        let z3 = self.z.add(&rhs.z).square().sub(&z2z2).sub(&z1z1).mul(&h);

        self.x = x3;
        self.y = y3;
        self.z = z3;
    }

    /// `self += rhs` with an affine addend (madd-2007-bl).
    pub fn add_assign_mixed(&mut self, rhs: &AffinePoint<C>) {
        if rhs.infinity {
            return;
        }
        if self.is_identity() {
            *self = rhs.to_jacobian();
            return;
        }

        let z1z1 = self.z.square();
        let u2 = rhs.x.mul(&z1z1);
        let s2 = rhs.y.mul(&self.z).mul(&z1z1);

        if u2 == self.x && s2 == self.y {
            self.double_in_place();
            return;
        }

        let h = u2.sub(&self.x);
        let hh = h.square();
        let i = hh.double().double();
        let j = h.mul(&i);
        let r = s2.sub(&self.y).double();
        let v = self.x.mul(&i);

        let x3 = r.square().sub(&j).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&self.y.mul(&j).double());
        let z3 = self.z.add(&h).square().sub(&z1z1).sub(&hh);

        self.x = x3;
        self.y = y3;
        self.z = z3;
    }

    /// `self = [2]self` (dbl-2009-l, valid for \\(a = 0\\) curves).
    pub fn double_in_place(&mut self) {
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = self.x.add(&b).square().sub(&a).sub(&c).double();
        let e = a.double().add(&a);
        let f = e.square();

        let x3 = f.sub(&d.double());
        let y3 = e.mul(&d.sub(&x3)).sub(&c.double().double().double());
        let z3 = self.y.mul(&self.z).double();

        self.x = x3;
        self.y = y3;
        self.z = z3;
    }

    /// `-self`.
    pub fn neg(&self) -> JacobianPoint<C> {
        JacobianPoint {
            x: self.x,
            y: self.y.neg(),
            z: self.z,
        }
    }

    /// Variable-time multiplication by a 64-bit scalar.
    pub fn mul_u64(&self, scalar: u64) -> JacobianPoint<C> {
        let mut res = JacobianPoint::identity();
        for i in (0..64).rev() {
            res.double_in_place();
            if (scalar >> i) & 1 == 1 {
                res.add_assign(self);
            }
        }
        res
    }

    /// Variable-time multiplication by canonical little-endian limbs.
    pub fn scalar_mul(&self, scalar: &[u64]) -> JacobianPoint<C> {
        let mut res = JacobianPoint::identity();
        for &limb in scalar.iter().rev() {
            for i in (0..64).rev() {
                res.double_in_place();
                if (limb >> i) & 1 == 1 {
                    res.add_assign(self);
                }
            }
        }
        res
    }

    /// The GLV endomorphism \\(\phi(x, y) = (\omega x, y)\\).
    ///
    /// Scaling the Jacobian X coordinate scales the affine x coordinate.
    pub fn endomorphism(&self) -> JacobianPoint<C> {
        JacobianPoint {
            x: self.x.mul(&C::OMEGA),
            y: self.y,
            z: self.z,
        }
    }

    /// Scott single-point subgroup test:
    /// \\([x_0^2]\phi(P) + P = \mathcal{O}\\).
    ///
    /// \\(1 + x_0^2(x_0^2 - 1) = r(x_0)\\), so \\(1 + x_0^2\phi\\) is an
    /// endomorphism of degree \\(r\\) whose kernel is exactly
    /// \\(\mathbb{G}\_1\\); the test is valid on every on-curve point.
    pub fn is_in_subgroup(&self) -> bool {
        let mut res = self.endomorphism();
        res = res.mul_u64(C::SEED);
        res = res.mul_u64(C::SEED);
        res.add_assign(self);
        res.is_identity()
    }
}

impl<C: Curve> PartialEq for JacobianPoint<C> {
    fn eq(&self, other: &JacobianPoint<C>) -> bool {
        // compare affine images without inverting
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            _ => {}
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        if self.x.mul(&z2z2) != other.x.mul(&z1z1) {
            return false;
        }
        self.y.mul(&z2z2).mul(&other.z) == other.y.mul(&z1z1).mul(&self.z)
    }
}

impl<C: Curve> Eq for JacobianPoint<C> {}

// ------------------------------------------------------------------------
// Extended Jacobian (XYZZ) points
// ------------------------------------------------------------------------

/// A point in extended Jacobian coordinates: \\(x = X/ZZ\\),
/// \\(y = Y/ZZZ\\), \\(ZZ^3 = ZZZ^2\\), \\(ZZ = 0\\) at infinity.
#[derive(Copy, Clone, Debug)]
pub struct ExtendedPoint<C: Curve> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) zz: C::Base,
    pub(crate) zzz: C::Base,
}

impl<C: Curve> ExtendedPoint<C> {
    /// The point at infinity, `(1, 1, 0, 0)`.
    pub fn identity() -> ExtendedPoint<C> {
        ExtendedPoint {
            x: C::Base::ONE,
            y: C::Base::ONE,
            zz: C::Base::ZERO,
            zzz: C::Base::ZERO,
        }
    }

    /// Whether this is the point at infinity, i.e. \\(ZZ = 0\\).
    pub fn is_identity(&self) -> bool {
        self.zz.is_zero()
    }

    /// `self += rhs` (add-2008-s).
    pub fn add_assign(&mut self, rhs: &ExtendedPoint<C>) {
        if rhs.is_identity() {
            return;
        }
        if self.is_identity() {
            *self = *rhs;
            return;
        }

        let u2 = rhs.x.mul(&self.zz);
        let u1 = self.x.mul(&rhs.zz);
        let s2 = rhs.y.mul(&self.zzz);
        let s1 = self.y.mul(&rhs.zzz);
        let p = u2.sub(&u1);
        let r = s2.sub(&s1);

        if p.is_zero() {
            if r.is_zero() {
                let rhs = *rhs;
                self.double_assign_from(&rhs);
                return;
            }
            self.zz = C::Base::ZERO;
            self.zzz = C::Base::ZERO;
            return;
        }

        let pp = p.square();
        let ppp = p.mul(&pp);
        let q = u1.mul(&pp);
        let v = s1.mul(&ppp);

        self.x = r.square().sub(&ppp).sub(&q).sub(&q);
        self.y = q.sub(&self.x).mul(&r).sub(&v);
        self.zz = self.zz.mul(&rhs.zz).mul(&pp);
        self.zzz = self.zzz.mul(&rhs.zzz).mul(&ppp);
    }

    /// `self = [2]rhs` (dbl-2008-s-1).
    ///
    /// Any point with \\(ZZ = 0\\) is treated as infinity, so the formula
    /// is total.
    pub fn double_assign_from(&mut self, rhs: &ExtendedPoint<C>) {
        let u = rhs.y.double();
        let v = u.square();
        let w = u.mul(&v);
        let s = rhs.x.mul(&v);
        let xx = rhs.x.square();
        let m = xx.double().add(&xx);
        let l = w.mul(&rhs.y);

        self.x = m.square().sub(&s).sub(&s);
        self.y = s.sub(&self.x).mul(&m).sub(&l);
        self.zz = v.mul(&rhs.zz);
        self.zzz = w.mul(&rhs.zzz);
    }

    /// `self = [2]self`.
    pub fn double_in_place(&mut self) {
        let rhs = *self;
        self.double_assign_from(&rhs);
    }

    /// `self += rhs` with an affine addend, i.e. \\(ZZ = ZZZ = 1\\)
    /// (madd-2008-s).
    pub fn add_assign_mixed(&mut self, rhs: &AffinePoint<C>) {
        if rhs.infinity {
            return;
        }
        if self.is_identity() {
            self.x = rhs.x;
            self.y = rhs.y;
            self.zz = C::Base::ONE;
            self.zzz = C::Base::ONE;
            return;
        }

        let p = rhs.x.mul(&self.zz).sub(&self.x);
        let r = rhs.y.mul(&self.zzz).sub(&self.y);

        if p.is_zero() {
            if r.is_zero() {
                self.double_assign_mixed(rhs);
                return;
            }
            self.zz = C::Base::ZERO;
            self.zzz = C::Base::ZERO;
            return;
        }

        let pp = p.square();
        let ppp = p.mul(&pp);
        let q = self.x.mul(&pp);
        let rr = r.square();
        let x3 = rr.sub(&ppp);
        let q2 = q.double();

        self.x = x3.sub(&q2);
        let y3 = q.sub(&self.x).mul(&r);
        let t = self.y.mul(&ppp);
        self.y = y3.sub(&t);
        self.zz = self.zz.mul(&pp);
        self.zzz = self.zzz.mul(&ppp);
    }

    /// `self = [2]rhs` with an affine operand (dbl-2008-s-1).
    pub fn double_assign_mixed(&mut self, rhs: &AffinePoint<C>) {
        let u = rhs.y.double();
        let v = u.square();
        let w = u.mul(&v);
        let s = rhs.x.mul(&v);
        let xx = rhs.x.square();
        let m = xx.double().add(&xx);
        let s2 = s.double();
        let l = w.mul(&rhs.y);

        self.x = m.square().sub(&s2);
        self.y = s.sub(&self.x).mul(&m).sub(&l);
        self.zz = v;
        self.zzz = w;
    }

    /// Converts to Jacobian coordinates.
    ///
    /// The fast path `(ZZ²·X : ZZZ²·Y : ZZZ)` is only valid away from
    /// infinity; the accumulator of a reduced multi-scalar sum is at
    /// infinity with negligible probability, but the conversion still
    /// checks and degrades to the identity rather than produce garbage.
    pub fn to_jacobian(&self) -> JacobianPoint<C> {
        if self.is_identity() {
            return JacobianPoint::identity();
        }
        JacobianPoint {
            x: self.zz.square().mul(&self.x),
            y: self.zzz.square().mul(&self.y),
            z: self.zzz,
        }
    }
}

// ------------------------------------------------------------------------
// Cofactor fuzzing
// ------------------------------------------------------------------------

/// Maps a field element to a curve point by incrementing the candidate
/// x-coordinate until \\(x^3 + B\\) is a square.
///
/// This is a plain point construction, not a uniform hash-to-curve; it is
/// exactly what the h-torsion fuzzer needs and nothing more.
pub fn map_to_curve<C: Curve>(u: &C::Base) -> AffinePoint<C> {
    let mut x = *u;
    loop {
        let y2 = x.square().mul(&x).add(&C::B);
        if let Some(y) = y2.sqrt() {
            return AffinePoint::from_coordinates_unchecked(x, y);
        }
        x = x.add(&C::Base::ONE);
    }
}

/// Produces a point of h-torsion from an arbitrary field element.
///
/// Maps `u` to a curve point \\(P\\) and returns
/// \\([x_0^2]\phi(P) + P\\), which equals \\([r]P'\\) for some \\(P'\\) and
/// therefore lies outside \\(\mathbb{G}\_1\\) with overwhelming
/// probability. This is the canonical counter-example generator for the
/// negative batch tests.
pub fn fuzz_cofactor<C: Curve>(u: &C::Base) -> AffinePoint<C> {
    let p = map_to_curve::<C>(u).to_jacobian();
    let mut res = p.endomorphism();
    res = res.mul_u64(C::SEED);
    res = res.mul_u64(C::SEED);
    res.add_assign(&p);
    res.to_affine()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::{Bls12_381, Fp, Fr};

    type A = AffinePoint<Bls12_381>;
    type J = JacobianPoint<Bls12_381>;
    type E = ExtendedPoint<Bls12_381>;

    fn multiple(i: u64) -> A {
        A::generator().scalar_mul(&[i]).to_affine()
    }

    #[test]
    fn group_law_consistency() {
        let g = A::generator().to_jacobian();
        let mut two_g = g;
        two_g.double_in_place();
        let mut three_g = two_g;
        three_g.add_assign(&g);
        assert_eq!(three_g, g.mul_u64(3));

        let mut mixed = two_g;
        mixed.add_assign_mixed(&A::generator());
        assert_eq!(mixed, three_g);

        let mut zero = g;
        zero.add_assign(&g.neg());
        assert!(zero.is_identity());

        // adding the identity from either side is a no-op
        let mut sum = J::identity();
        sum.add_assign(&g);
        assert_eq!(sum, g);
        sum.add_assign(&J::identity());
        assert_eq!(sum, g);
    }

    #[test]
    fn to_affine_roundtrip() {
        let p = A::generator().scalar_mul(&[87]);
        let a = p.to_affine();
        assert!(a.is_on_curve());
        assert_eq!(a.to_jacobian(), p);
        assert!(J::identity().to_affine().infinity);
    }

    #[test]
    fn scalar_mul_decomposes() {
        let g = A::generator().to_jacobian();
        // [2^64 + 5]G == [2^64]G + [5]G
        let hi = g.scalar_mul(&[0, 1]);
        let mut check = g.mul_u64(5);
        check.add_assign(&hi);
        assert_eq!(g.scalar_mul(&[5, 1]), check);
    }

    #[test]
    fn extended_accumulation_matches_jacobian() {
        let mut ext = E::identity();
        let mut jac = J::identity();
        for i in 1..=12u64 {
            let p = multiple(i);
            ext.add_assign_mixed(&p);
            jac.add_assign_mixed(&p);
        }
        assert_eq!(ext.to_jacobian(), jac);

        ext.double_in_place();
        jac.double_in_place();
        assert_eq!(ext.to_jacobian(), jac);

        let mut other = E::identity();
        other.add_assign_mixed(&multiple(99));
        ext.add_assign(&other);
        jac.add_assign_mixed(&multiple(99));
        assert_eq!(ext.to_jacobian(), jac);
    }

    #[test]
    fn extended_addition_degenerate_cases() {
        // P + (-P) must land on infinity
        let p = multiple(21);
        let mut acc = E::identity();
        acc.add_assign_mixed(&p);
        acc.add_assign_mixed(&p.neg());
        assert!(acc.is_identity());
        assert!(acc.to_jacobian().is_identity());

        // P + P must fall through to the doubling formula
        let mut acc = E::identity();
        acc.add_assign_mixed(&p);
        acc.add_assign_mixed(&p);
        assert_eq!(acc.to_jacobian(), p.to_jacobian().mul_u64(2));
    }

    #[test]
    fn endomorphism_acts_as_its_eigenvalue_on_g1() {
        // phi = [x0^2 - 1] on G1
        let g = A::generator().to_jacobian();
        let lambda = Fr::from_u64(Bls12_381::SEED).square().sub(&Fr::ONE);
        assert_eq!(g.endomorphism(), g.scalar_mul(&lambda.to_repr()));
    }

    #[test]
    fn mapped_points_are_on_curve_and_fuzzed_points_are_not_in_g1() {
        for u in [0u64, 1, 99] {
            let p = map_to_curve::<Bls12_381>(&Fp::from_u64(u));
            assert!(p.is_on_curve());
            let q = fuzz_cofactor::<Bls12_381>(&Fp::from_u64(u));
            assert!(q.is_on_curve());
            assert!(!q.is_in_subgroup());
        }
    }
}
