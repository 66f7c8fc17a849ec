// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Hard exponentiations \\(x \mapsto x^{(p-1)/\ell}\\) for the four
//! Tate filters of BLS12-377, as straight-line addition chains.
//!
//! The chains must compute the exact power bit-for-bit, since acceptance is
//! an `is_one` on the result; the tests check them differentially against
//! the generic ladder.

use super::field::Fp;

/// Computes `x^((p-1)/3)` with a fixed addition chain:
/// 370 squarings and 62 multiplications, generated with
/// `github.com/mmcloughlin/addchain`.
pub(crate) fn exp_by_p3(x: &Fp) -> Fp {
    let t15 = x.square();
    let t11 = x * &t15;
    let t2 = x * &t11;
    let t8 = x * &t2;
    let t3 = x * &t8;
    let t12 = &t11 * &t3;
    let z = &t15 * &t12;
    let t0 = x * &z;
    let t1 = x * &t0;
    let t5 = &t15 * &t1;
    let t0 = &t0 * &t5;
    let t13 = &t15 * &t0;
    let t16 = &t3 * &t13;
    let t7 = &t15 * &t16;
    let t6 = &t2 * &t7;
    let t14 = &t3 * &t6;
    let t4 = &t15 * &t14;
    let t9 = &t2 * &t4;
    let t2 = &t2 * &t9;
    let t10 = &t15 * &t2;
    let t3 = &t15 * &t10;
    let t17 = &t12 * &t3;
    let t17 = t17.pow2k(4);
    let t17 = &t0 * &t17;
    let t17 = t17.pow2k(7);
    let t16 = &t16 * &t17;
    let t16 = t16.pow2k(5);
    let t16 = x * &t16;
    let t16 = t16.pow2k(12);
    let t15 = &t15 * &t16;
    let t15 = &t3 * &t15;
    let t15 = t15.pow2k(7);
    let t15 = &t4 * &t15;
    let t15 = t15.pow2k(7);
    let t15 = &t9 * &t15;
    let t15 = t15.pow2k(4);
    let t15 = &t5 * &t15;
    let t15 = t15.pow2k(9);
    let t15 = &t10 * &t15;
    let t15 = t15.pow2k(8);
    let t14 = &t14 * &t15;
    let t14 = t14.pow2k(6);
    let t14 = &t7 * &t14;
    let t14 = t14.pow2k(6);
    let t13 = &t13 * &t14;
    let t13 = t13.pow2k(12);
    let t12 = &t12 * &t13;
    let t12 = t12.pow2k(10);
    let t12 = &t9 * &t12;
    let t12 = t12.pow2k(2);
    let t11 = &t11 * &t12;
    let t11 = t11.pow2k(10);
    let t11 = &t4 * &t11;
    let t11 = t11.pow2k(8);
    let t10 = &t10 * &t11;
    let t10 = t10.pow2k(7);
    let t10 = &t0 * &t10;
    let t10 = t10.pow2k(9);
    let t10 = &t5 * &t10;
    let t10 = t10.pow2k(8);
    let t9 = &t9 * &t10;
    let t9 = t9.pow2k(4);
    let t9 = x * &t9;
    let t9 = t9.pow2k(12);
    let t8 = &t8 * &t9;
    let t8 = t8.pow2k(8);
    let t8 = &t0 * &t8;
    let t8 = t8.pow2k(9);
    let t7 = &t7 * &t8;
    let t7 = t7.pow2k(6);
    let t7 = &t3 * &t7;
    let t7 = t7.pow2k(6);
    let t7 = &t6 * &t7;
    let t7 = t7.pow2k(6);
    let t7 = &t3 * &t7;
    let t7 = t7.pow2k(6);
    let t7 = &t2 * &t7;
    let t7 = t7.pow2k(6);
    let t7 = &t0 * &t7;
    let t7 = t7.pow2k(8);
    let t6 = &t6 * &t7;
    let t6 = t6.pow2k(4);
    let t5 = &t5 * &t6;
    let t5 = t5.pow2k(13);
    let t4 = &t4 * &t5;
    let t4 = t4.square();
    let t4 = x * &t4;
    let t4 = t4.pow2k(22);
    let t3 = &t3 * &t4;
    let t3 = t3.pow2k(7);
    let t2 = &t2 * &t3;
    let t2 = t2.pow2k(4);
    let t1 = &t1 * &t2;
    let t1 = t1.pow2k(8);
    let t0 = &t0 * &t1;
    let t0 = t0.pow2k(6);
    let t0 = x * &t0;
    let t0 = t0.pow2k(34);
    let t0 = &z * &t0;
    let t0 = t0.pow2k(7);
    let z = &z * &t0;
    let z = z.pow2k(5);
    let z = x * &z;
    let z = z.pow2k(46);
    z
}

/// Computes `x^((p-1)/16)` with a fixed addition chain:
/// 368 squarings and 62 multiplications, generated with
/// `github.com/mmcloughlin/addchain`.
pub(crate) fn exp_by_p16(x: &Fp) -> Fp {
    let t6 = x.square();
    let t1 = x * &t6;
    let t5 = x * &t1;
    let t0 = x * &t5;
    let t9 = &t6 * &t0;
    let t4 = &t6 * &t9;
    let t3 = &t6 * &t4;
    let t8 = &t5 * &t3;
    let z = &t6 * &t8;
    let t10 = &t6 * &z;
    let t2 = &t5 * &t10;
    let t7 = &t5 * &t2;
    let t5 = &t6 * &t7;
    let t6 = &t6 * &t5;
    let t11 = &t2 * &t5;
    let t11 = t11.pow2k(2);
    let t11 = &t9 * &t11;
    let t11 = t11.pow2k(8);
    let t11 = &t5 * &t11;
    let t11 = t11.pow2k(7);
    let t11 = &z * &t11;
    let t11 = t11.square();
    let t11 = x * &t11;
    let t11 = t11.pow2k(9);
    let t11 = &t2 * &t11;
    let t11 = t11.pow2k(2);
    let t11 = &t1 * &t11;
    let t11 = t11.pow2k(6);
    let t11 = &t0 * &t11;
    let t11 = t11.pow2k(4);
    let t11 = x * &t11;
    let t11 = t11.pow2k(9);
    let t11 = &t5 * &t11;
    let t11 = t11.pow2k(5);
    let t11 = &t3 * &t11;
    let t11 = t11.pow2k(5);
    let t11 = &t1 * &t11;
    let t11 = t11.pow2k(8);
    let t11 = &t5 * &t11;
    let t11 = t11.square();
    let t11 = x * &t11;
    let t11 = t11.pow2k(10);
    let t11 = &t2 * &t11;
    let t11 = t11.pow2k(12);
    let t11 = &t7 * &t11;
    let t11 = t11.pow2k(5);
    let t11 = &t0 * &t11;
    let t11 = t11.pow2k(7);
    let t11 = &t0 * &t11;
    let t11 = t11.pow2k(6);
    let t11 = &t4 * &t11;
    let t11 = t11.pow2k(7);
    let t11 = &t5 * &t11;
    let t11 = t11.pow2k(5);
    let t11 = &z * &t11;
    let t11 = t11.pow2k(3);
    let t11 = &t0 * &t11;
    let t11 = t11.pow2k(8);
    let t11 = &z * &t11;
    let t11 = t11.pow2k(6);
    let t11 = &t7 * &t11;
    let t11 = t11.pow2k(7);
    let t11 = &t6 * &t11;
    let t11 = t11.pow2k(4);
    let t11 = &t1 * &t11;
    let t11 = t11.pow2k(12);
    let t11 = &t8 * &t11;
    let t11 = t11.pow2k(4);
    let t11 = &t0 * &t11;
    let t11 = t11.pow2k(8);
    let t10 = &t10 * &t11;
    let t10 = t10.pow2k(5);
    let t10 = &z * &t10;
    let t10 = t10.pow2k(3);
    let t9 = &t9 * &t10;
    let t9 = t9.pow2k(7);
    let t9 = &t8 * &t9;
    let t9 = t9.pow2k(5);
    let t8 = &t8 * &t9;
    let t8 = t8.pow2k(7);
    let t7 = &t7 * &t8;
    let t7 = t7.pow2k(8);
    let t7 = &z * &t7;
    let t7 = t7.pow2k(6);
    let t6 = &t6 * &t7;
    let t6 = t6.pow2k(6);
    let t5 = &t5 * &t6;
    let t5 = t5.pow2k(9);
    let t5 = &t4 * &t5;
    let t5 = t5.pow2k(5);
    let t4 = &t4 * &t5;
    let t4 = t4.pow2k(19);
    let t4 = &t2 * &t4;
    let t4 = t4.pow2k(8);
    let t3 = &t3 * &t4;
    let t3 = t3.pow2k(6);
    let t2 = &t2 * &t3;
    let t2 = t2.pow2k(4);
    let t2 = &t0 * &t2;
    let t2 = t2.pow2k(4);
    let t2 = x * &t2;
    let t2 = t2.pow2k(6);
    let t1 = &t1 * &t2;
    let t1 = t1.pow2k(29);
    let t1 = x * &t1;
    let t1 = t1.pow2k(7);
    let t0 = &t0 * &t1;
    let t0 = t0.pow2k(9);
    let z = &z * &t0;
    let z = z.square();
    let z = x * &z;
    let z = z.pow2k(42);
    z
}

/// Computes `x^((p-1)/7)` with a fixed addition chain:
/// 370 squarings and 58 multiplications, generated with
/// `github.com/mmcloughlin/addchain`.
pub(crate) fn exp_by_p7(x: &Fp) -> Fp {
    let t11 = x.square();
    let t5 = x * &t11;
    let t0 = x * &t5;
    let z = x * &t0;
    let t12 = &t11 * &z;
    let t6 = &t11 * &t12;
    let t4 = &t0 * &t6;
    let t8 = &t11 * &t4;
    let t2 = &t11 * &t8;
    let t0 = &t11 * &t2;
    let t3 = &t11 * &t0;
    let t1 = &t11 * &t3;
    let t9 = &t11 * &t1;
    let t10 = &t11 * &t9;
    let t7 = &t11 * &t10;
    let t13 = x * &t7;
    let t13 = t13.pow2k(5);
    let t13 = &t1 * &t13;
    let t13 = t13.pow2k(3);
    let t13 = &t5 * &t13;
    let t13 = t13.pow2k(8);
    let t13 = &z * &t13;
    let t13 = t13.pow2k(12);
    let t13 = &t10 * &t13;
    let t13 = t13.pow2k(7);
    let t13 = &t3 * &t13;
    let t13 = t13.pow2k(7);
    let t13 = &t1 * &t13;
    let t13 = t13.pow2k(7);
    let t13 = &t8 * &t13;
    let t13 = t13.pow2k(2);
    let t13 = x * &t13;
    let t13 = t13.pow2k(9);
    let t13 = &t12 * &t13;
    let t13 = t13.pow2k(7);
    let t13 = &t8 * &t13;
    let t13 = t13.pow2k(4);
    let t12 = &t12 * &t13;
    let t12 = t12.pow2k(4);
    let t12 = x * &t12;
    let t12 = t12.pow2k(15);
    let t12 = &t7 * &t12;
    let t11 = &t11 * &t12;
    let t11 = t11.pow2k(9);
    let t11 = &t0 * &t11;
    let t11 = t11.pow2k(10);
    let t11 = &t3 * &t11;
    let t11 = t11.pow2k(8);
    let t11 = &t9 * &t11;
    let t11 = t11.pow2k(3);
    let t11 = &t5 * &t11;
    let t11 = t11.pow2k(11);
    let t11 = &t0 * &t11;
    let t11 = t11.pow2k(5);
    let t11 = &t7 * &t11;
    let t11 = t11.pow2k(5);
    let t11 = &t6 * &t11;
    let t11 = t11.pow2k(10);
    let t10 = &t10 * &t11;
    let t10 = t10.pow2k(6);
    let t10 = &t7 * &t10;
    let t10 = t10.pow2k(5);
    let t10 = &t0 * &t10;
    let t10 = t10.pow2k(5);
    let t10 = &t1 * &t10;
    let t10 = t10.pow2k(5);
    let t10 = &t2 * &t10;
    let t10 = t10.pow2k(5);
    let t9 = &t9 * &t10;
    let t9 = t9.pow2k(10);
    let t9 = &t2 * &t9;
    let t9 = t9.pow2k(5);
    let t9 = &t3 * &t9;
    let t9 = t9.pow2k(4);
    let t8 = &t8 * &t9;
    let t8 = t8.pow2k(5);
    let t8 = &t6 * &t8;
    let t8 = t8.pow2k(6);
    let t7 = &t7 * &t8;
    let t7 = t7.pow2k(7);
    let t7 = &t2 * &t7;
    let t7 = t7.pow2k(8);
    let t6 = &t6 * &t7;
    let t6 = t6.pow2k(6);
    let t6 = &t0 * &t6;
    let t6 = t6.pow2k(2);
    let t5 = &t5 * &t6;
    let t5 = t5.pow2k(21);
    let t4 = &t4 * &t5;
    let t4 = t4.pow2k(7);
    let t3 = &t3 * &t4;
    let t3 = t3.pow2k(5);
    let t2 = &t2 * &t3;
    let t2 = t2.pow2k(9);
    let t1 = &t1 * &t2;
    let t1 = t1.pow2k(5);
    let t1 = &z * &t1;
    let t1 = t1.pow2k(36);
    let t0 = &t0 * &t1;
    let t0 = t0.pow2k(10);
    let z = &z * &t0;
    let z = z.pow2k(46);
    z
}

/// Computes `x^((p-1)/13)` with a fixed addition chain:
/// 369 squarings and 62 multiplications, generated with
/// `github.com/mmcloughlin/addchain`.
pub(crate) fn exp_by_p13(x: &Fp) -> Fp {
    let t0 = x.square();
    let t3 = x * &t0;
    let t1 = &t0 * &t3;
    let z = &t0 * &t1;
    let t7 = &t0 * &z;
    let t12 = &t0 * &t7;
    let t5 = &t0 * &t12;
    let t2 = &t0 * &t5;
    let t6 = &t0 * &t2;
    let t10 = &t0 * &t6;
    let t9 = &t0 * &t10;
    let t4 = &t0 * &t9;
    let t8 = &t0 * &t4;
    let t11 = &t0 * &t8;
    let t0 = &t0 * &t11;
    let t13 = &t3 * &t0;
    let t13 = t13.pow2k(4);
    let t13 = &t6 * &t13;
    let t13 = t13.square();
    let t13 = x * &t13;
    let t13 = t13.pow2k(9);
    let t12 = &t12 * &t13;
    let t12 = t12.pow2k(4);
    let t12 = &t3 * &t12;
    let t12 = t12.pow2k(8);
    let t12 = &t11 * &t12;
    let t12 = t12.pow2k(9);
    let t12 = &t3 * &t12;
    let t12 = t12.pow2k(7);
    let t12 = &t2 * &t12;
    let t12 = t12.pow2k(8);
    let t12 = &t5 * &t12;
    let t12 = t12.pow2k(5);
    let t12 = &t1 * &t12;
    let t12 = t12.pow2k(5);
    let t12 = &t1 * &t12;
    let t12 = t12.pow2k(6);
    let t12 = &t5 * &t12;
    let t12 = t12.pow2k(6);
    let t12 = &t2 * &t12;
    let t12 = t12.pow2k(7);
    let t12 = &t11 * &t12;
    let t12 = t12.pow2k(8);
    let t12 = &t4 * &t12;
    let t12 = t12.pow2k(5);
    let t12 = &t11 * &t12;
    let t12 = t12.pow2k(5);
    let t12 = &t11 * &t12;
    let t12 = t12.pow2k(6);
    let t12 = &t6 * &t12;
    let t12 = t12.pow2k(4);
    let t12 = &t7 * &t12;
    let t12 = t12.pow2k(6);
    let t12 = &t4 * &t12;
    let t12 = t12.pow2k(5);
    let t11 = &t11 * &t12;
    let t11 = t11.pow2k(4);
    let t11 = &t7 * &t11;
    let t11 = t11.pow2k(6);
    let t11 = &t6 * &t11;
    let t11 = t11.pow2k(4);
    let t11 = &z * &t11;
    let t11 = t11.pow2k(7);
    let t11 = &t8 * &t11;
    let t11 = t11.pow2k(4);
    let t11 = &t5 * &t11;
    let t11 = t11.pow2k(9);
    let t10 = &t10 * &t11;
    let t10 = t10.pow2k(2);
    let t10 = &t3 * &t10;
    let t10 = t10.pow2k(4);
    let t10 = x * &t10;
    let t10 = t10.pow2k(10);
    let t9 = &t9 * &t10;
    let t9 = t9.pow2k(7);
    let t9 = &t8 * &t9;
    let t9 = t9.pow2k(7);
    let t8 = &t8 * &t9;
    let t8 = t8.pow2k(6);
    let t8 = &t5 * &t8;
    let t8 = t8.pow2k(5);
    let t8 = &t2 * &t8;
    let t8 = t8.pow2k(5);
    let t7 = &t7 * &t8;
    let t7 = t7.pow2k(6);
    let t6 = &t6 * &t7;
    let t6 = t6.pow2k(6);
    let t6 = &t0 * &t6;
    let t6 = t6.pow2k(6);
    let t6 = &t0 * &t6;
    let t6 = t6.pow2k(6);
    let t6 = &t1 * &t6;
    let t6 = t6.pow2k(7);
    let t5 = &t5 * &t6;
    let t5 = t5.pow2k(21);
    let t5 = &z * &t5;
    let t5 = t5.pow2k(8);
    let t4 = &t4 * &t5;
    let t4 = t4.pow2k(4);
    let t4 = &t3 * &t4;
    let t4 = t4.pow2k(7);
    let t3 = &t3 * &t4;
    let t3 = t3.pow2k(7);
    let t2 = &t2 * &t3;
    let t2 = t2.pow2k(35);
    let t1 = &t1 * &t2;
    let t1 = t1.pow2k(8);
    let t0 = &t0 * &t1;
    let t0 = t0.pow2k(3);
    let z = &z * &t0;
    let z = z.pow2k(46);
    z
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference_exponent(ell: u32) -> Vec<u64> {
        let mut bytes = [0u8; 48];
        for (i, limb) in Fp::MODULUS.iter().enumerate() {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
        }
        let p = BigUint::from_bytes_le(&bytes);
        ((&p - 1u32) / ell).to_u64_digits()
    }

    #[test]
    fn chains_match_generic_pow() {
        let mut rng = StdRng::seed_from_u64(0x377c);
        let e3 = reference_exponent(3);
        let e16 = reference_exponent(16);
        let e7 = reference_exponent(7);
        let e13 = reference_exponent(13);
        for _ in 0..1000 {
            let x = Fp::random(&mut rng);
            assert_eq!(exp_by_p3(&x), x.pow(&e3));
            assert_eq!(exp_by_p16(&x), x.pow(&e16));
            assert_eq!(exp_by_p7(&x), x.pow(&e7));
            assert_eq!(exp_by_p13(&x), x.pow(&e13));
        }
    }

    #[test]
    fn chains_fix_one() {
        assert!(exp_by_p3(&Fp::ONE).is_one());
        assert!(exp_by_p16(&Fp::ONE).is_one());
        assert!(exp_by_p7(&Fp::ONE).is_one());
        assert!(exp_by_p13(&Fp::ONE).is_one());
    }
}
