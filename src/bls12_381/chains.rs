// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Hard exponentiations \\(x \mapsto x^{(p-1)/\ell}\\) for the Tate
//! filters, as straight-line addition chains.
//!
//! Temporaries shadow one another instead of mutating a scratch array;
//! squaring runs are collapsed into `pow2k`. The chains must compute the
//! exact power bit-for-bit, since acceptance is an `is_one` on the result;
//! the tests check them differentially against the generic ladder.

use super::field::Fp;

/// Computes `x^((p-1)/3)` with a fixed addition chain:
/// 375 squarings and 79 multiplications, generated with
/// `github.com/mmcloughlin/addchain`.
pub(crate) fn exp_by_p3(x: &Fp) -> Fp {
    let t0 = x.square();
    let t6 = x * &t0;
    let t3 = &t0 * &t6;
    let z = &t0 * &t3;
    let t13 = &t0 * &z;
    let t10 = &t0 * &t13;
    let t4 = &t0 * &t10;
    let t7 = &t0 * &t4;
    let t8 = &t0 * &t7;
    let t2 = &t0 * &t8;
    let t1 = &t0 * &t2;
    let t5 = &t0 * &t1;
    let t14 = &t0 * &t5;
    let t15 = &t0 * &t14;
    let t11 = &t0 * &t15;
    let t9 = &t0 * &t11;
    let t0 = t9.square();
    let t12 = x * &t0;
    let t0 = t12.square();
    let t0 = t0.pow2k(1);
    let t0 = &t6 * &t0;
    let t16 = &t8 * &t0;
    let t16 = t16.pow2k(2);
    let t16 = &t1 * &t16;
    let t16 = t16.square();
    let t16 = x * &t16;
    let t16 = t16.pow2k(6);
    let t16 = x * &t16;
    let t16 = t16.pow2k(7);
    let t16 = &t12 * &t16;
    let t16 = t16.pow2k(8);
    let t16 = &t5 * &t16;
    let t16 = t16.pow2k(5);
    let t16 = &t5 * &t16;
    let t16 = t16.pow2k(6);
    let t16 = &t1 * &t16;
    let t16 = t16.pow2k(6);
    let t16 = &t2 * &t16;
    let t16 = t16.pow2k(7);
    let t15 = &t15 * &t16;
    let t15 = t15.pow2k(2);
    let t15 = &t6 * &t15;
    let t15 = t15.pow2k(9);
    let t14 = &t14 * &t15;
    let t14 = t14.pow2k(8);
    let t13 = &t13 * &t14;
    let t13 = t13.pow2k(4);
    let t13 = &t6 * &t13;
    let t13 = t13.pow2k(7);
    let t12 = &t12 * &t13;
    let t12 = t12.pow2k(7);
    let t11 = &t11 * &t12;
    let t11 = t11.pow2k(5);
    let t11 = &t1 * &t11;
    let t11 = t11.pow2k(3);
    let t11 = &z * &t11;
    let t11 = t11.pow2k(9);
    let t11 = &t9 * &t11;
    let t11 = t11.pow2k(7);
    let t11 = &t8 * &t11;
    let t11 = t11.pow2k(8);
    let t11 = &t9 * &t11;
    let t11 = t11.pow2k(4);
    let t11 = &t6 * &t11;
    let t11 = t11.pow2k(9);
    let t11 = &t2 * &t11;
    let t11 = t11.pow2k(3);
    let t11 = &z * &t11;
    let t11 = t11.pow2k(8);
    let t11 = &t7 * &t11;
    let t11 = t11.pow2k(5);
    let t10 = &t10 * &t11;
    let t10 = t10.pow2k(6);
    let t9 = &t9 * &t10;
    let t9 = t9.pow2k(5);
    let t9 = &t7 * &t9;
    let t9 = t9.pow2k(6);
    let t9 = &t5 * &t9;
    let t9 = t9.pow2k(7);
    let t9 = &t6 * &t9;
    let t9 = t9.pow2k(11);
    let t9 = &t0 * &t9;
    let t9 = t9.pow2k(6);
    let t9 = &t4 * &t9;
    let t9 = t9.pow2k(4);
    let t9 = x * &t9;
    let t9 = t9.pow2k(10);
    let t9 = &t8 * &t9;
    let t9 = t9.pow2k(5);
    let t8 = &t8 * &t9;
    let t8 = t8.pow2k(5);
    let t8 = &t1 * &t8;
    let t8 = t8.pow2k(3);
    let t8 = &t3 * &t8;
    let t8 = t8.pow2k(6);
    let t7 = &t7 * &t8;
    let t7 = t7.pow2k(3);
    let t7 = x * &t7;
    let t7 = t7.pow2k(8);
    let t7 = &t3 * &t7;
    let t7 = t7.pow2k(3);
    let t7 = x * &t7;
    let t7 = t7.pow2k(7);
    let t6 = &t6 * &t7;
    let t6 = t6.pow2k(9);
    let t6 = &t3 * &t6;
    let t6 = t6.pow2k(6);
    let t6 = &z * &t6;
    let t6 = t6.pow2k(7);
    let t6 = &t1 * &t6;
    let t6 = t6.pow2k(6);
    let t6 = &t1 * &t6;
    let t6 = t6.pow2k(4);
    let t6 = &t3 * &t6;
    let t6 = t6.pow2k(5);
    let t6 = &z * &t6;
    let t6 = t6.pow2k(7);
    let t5 = &t5 * &t6;
    let t5 = t5.pow2k(7);
    let t4 = &t4 * &t5;
    let t4 = t4.pow2k(6);
    let t4 = &t1 * &t4;
    let t4 = t4.pow2k(6);
    let t4 = &t1 * &t4;
    let t4 = t4.pow2k(4);
    let t3 = &t3 * &t4;
    let t3 = t3.pow2k(7);
    let t2 = &t2 * &t3;
    let t2 = t2.pow2k(6);
    let t1 = &t1 * &t2;
    let t1 = t1.pow2k(10);
    let t1 = &t0 * &t1;
    let t1 = t1.pow2k(8);
    let t1 = &t0 * &t1;
    let t1 = t1.pow2k(8);
    let t1 = &t0 * &t1;
    let t1 = t1.pow2k(8);
    let t0 = &t0 * &t1;
    let t0 = t0.pow2k(3);
    let t0 = &z * &t0;
    let t0 = t0.pow2k(6);
    let t0 = &z * &t0;
    let t0 = t0.pow2k(6);
    let z = &z * &t0;
    let z = z.square();
    z
}

/// Computes `x^((p-1)/11)` with a fixed addition chain:
/// 372 squarings and 77 multiplications, generated with
/// `github.com/mmcloughlin/addchain`.
pub(crate) fn exp_by_p11(x: &Fp) -> Fp {
    let t0 = x.square();
    let t9 = t0.square();
    let t1 = t9.square();
    let t16 = &t9 * &t1;
    let t15 = &t0 * &t16;
    let t5 = &t9 * &t15;
    let t29 = x * &t5;
    let t2 = &t9 * &t29;
    let t11 = &t1 * &t5;
    let t8 = x * &t11;
    let t6 = &t0 * &t8;
    let t18 = x * &t6;
    let z = x * &t18;
    let t24 = &t1 * &z;
    let t12 = &t0 * &t24;
    let t28 = &t11 * &t12;
    let t21 = &t16 * &t28;
    let t14 = &t0 * &t21;
    let t4 = &t9 * &t14;
    let t7 = &t9 * &t4;
    let t27 = &t0 * &t7;
    let t3 = &t0 * &t27;
    let t10 = &t1 * &t3;
    let t23 = &t9 * &t10;
    let t17 = &t0 * &t23;
    let t5 = &t5 * &t17;
    let t26 = &t9 * &t5;
    let t25 = &t0 * &t26;
    let t9 = &t1 * &t26;
    let t19 = &t1 * &t9;
    let t1 = &t15 * &t9;
    let t20 = &t18 * &t25;
    let t22 = &t18 * &t9;
    let t13 = &t11 * &t1;
    let t11 = &t18 * &t22;
    let t15 = &t15 * &t11;
    let t18 = &t18 * &t15;
    let t16 = &t16 * &t18;
    let t0 = &t0 * &t16;
    let t30 = &t27 * &t15;
    let t30 = t30.pow2k(5);
    let t29 = &t29 * &t30;
    let t29 = t29.pow2k(13);
    let t29 = &t7 * &t29;
    let t29 = t29.pow2k(9);
    let t28 = &t28 * &t29;
    let t28 = t28.pow2k(6);
    let t28 = &t6 * &t28;
    let t28 = t28.pow2k(11);
    let t28 = &t22 * &t28;
    let t28 = t28.pow2k(7);
    let t27 = &t27 * &t28;
    let t27 = t27.pow2k(13);
    let t26 = &t26 * &t27;
    let t26 = t26.pow2k(9);
    let t25 = &t25 * &t26;
    let t25 = t25.pow2k(6);
    let t24 = &t24 * &t25;
    let t24 = t24.pow2k(11);
    let t23 = &t23 * &t24;
    let t23 = t23.pow2k(9);
    let t22 = &t22 * &t23;
    let t22 = t22.pow2k(9);
    let t21 = &t21 * &t22;
    let t21 = t21.pow2k(10);
    let t20 = &t20 * &t21;
    let t20 = t20.pow2k(10);
    let t19 = &t19 * &t20;
    let t19 = t19.pow2k(12);
    let t18 = &t18 * &t19;
    let t18 = t18.pow2k(10);
    let t17 = &t17 * &t18;
    let t17 = t17.pow2k(9);
    let t16 = &t16 * &t17;
    let t16 = t16.pow2k(10);
    let t15 = &t15 * &t16;
    let t15 = t15.pow2k(9);
    let t14 = &t14 * &t15;
    let t14 = t14.pow2k(9);
    let t13 = &t13 * &t14;
    let t13 = t13.pow2k(8);
    let t12 = &t12 * &t13;
    let t12 = t12.pow2k(10);
    let t12 = &t8 * &t12;
    let t12 = t12.pow2k(11);
    let t11 = &t11 * &t12;
    let t11 = t11.pow2k(8);
    let t10 = &t10 * &t11;
    let t10 = t10.pow2k(10);
    let t9 = &t9 * &t10;
    let t9 = t9.pow2k(5);
    let t8 = &t8 * &t9;
    let t8 = t8.pow2k(15);
    let t7 = &t7 * &t8;
    let t7 = t7.pow2k(7);
    let t6 = &t6 * &t7;
    let t6 = t6.pow2k(10);
    let t6 = &t3 * &t6;
    let t6 = t6.pow2k(11);
    let t5 = &t5 * &t6;
    let t5 = t5.pow2k(8);
    let t4 = &t4 * &t5;
    let t4 = t4.pow2k(10);
    let t3 = &t3 * &t4;
    let t3 = t3.pow2k(8);
    let t2 = &t2 * &t3;
    let t2 = t2.pow2k(11);
    let t1 = &t1 * &t2;
    let t1 = t1.pow2k(10);
    let t1 = &t0 * &t1;
    let t1 = t1.pow2k(8);
    let t1 = &t0 * &t1;
    let t1 = t1.pow2k(8);
    let t1 = &t0 * &t1;
    let t1 = t1.pow2k(8);
    let t0 = &t0 * &t1;
    let t0 = t0.pow2k(5);
    let t0 = &z * &t0;
    let t0 = t0.pow2k(10);
    let z = &z * &t0;
    let z = z.square();
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
        let mut rng = StdRng::seed_from_u64(0xc4a1);
        let e3 = reference_exponent(3);
        let e11 = reference_exponent(11);
        for _ in 0..1000 {
            let x = Fp::random(&mut rng);
            assert_eq!(exp_by_p3(&x), x.pow(&e3));
            assert_eq!(exp_by_p11(&x), x.pow(&e11));
        }
    }

    #[test]
    fn chains_fix_one() {
        assert!(exp_by_p3(&Fp::ONE).is_one());
        assert!(exp_by_p11(&Fp::ONE).is_one());
    }
}
