// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Montgomery field instances for BLS12-377.

use crate::field::montgomery_field;

montgomery_field!(
    /// The 377-bit base field \\(\mathbb{F}_p\\) of BLS12-377.
    Fp,
    6, {
        modulus: [
            0x8508_c000_0000_0001,
            0x170b_5d44_3000_0000,
            0x1ef3_622f_ba09_4800,
            0x1a22_d9f3_00f5_138f,
            0xc63b_05c0_6ca1_493b,
            0x01ae_3a46_17c5_10ea,
        ],
        one: [
            0x02cd_ffff_ffff_ff68,
            0x5140_9f83_7fff_ffb1,
            0x9f7d_b3a9_8a7d_3ff2,
            0x7b4e_97b7_6e7c_6305,
            0x4cf4_95bf_803c_84e8,
            0x008d_6661_e2fd_f49a,
        ],
        r2: [
            0xb786_686c_9400_cd22,
            0x0329_fcaa_b004_31b1,
            0x22a5_f111_62d6_b46d,
            0xbfdf_7d03_827d_c3ac,
            0x837e_92f0_4179_0bf9,
            0x006d_fccb_1e91_4b88,
        ],
        inv: 0x8508bfffffffffff,
        modulus_bits: 377,
        two_adicity: 46,
        trace_minus_one_div_two: [
            0xba88_6000_0001_0a11,
            0xc45f_7412_9000_2e16,
            0xb3e6_01ea_271e_3de6,
            0x0b80_d942_9276_3445,
            0x748c_2f8a_21d5_8c76,
            0x0000_0000_0000_035c,
        ],
        root_of_unity: [
            0x68f8_76aa_8bb1_91f2,
            0x254e_4780_a672_2e51,
            0xa818_ea19_1f8a_0eaf,
            0x2c1a_6dd3_1d8d_5057,
            0xcce5_a0cb_a0df_931b,
            0x00ba_7904_c8cf_8495,
        ],
    }
);

montgomery_field!(
    /// The 253-bit scalar field \\(\mathbb{F}_r\\) of BLS12-377.
    Fr,
    4, {
        modulus: [
            0x0a11_8000_0000_0001,
            0x59aa_76fe_d000_0001,
            0x60b4_4d1e_5c37_b001,
            0x12ab_655e_9a2c_a556,
        ],
        one: [
            0x7d1c_7fff_ffff_fff3,
            0x7257_f50f_6fff_fff2,
            0x16d8_1575_512c_0fee,
            0x0d4b_da32_2bbb_9a9d,
        ],
        r2: [
            0x25d5_77ba_b861_857b,
            0xcc2c_27b5_8860_591f,
            0xa7cc_008f_e5dc_8593,
            0x011f_dae7_eff1_c939,
        ],
        inv: 0x0a117fffffffffff,
        modulus_bits: 253,
        two_adicity: 47,
        trace_minus_one_div_two: [
            0x76fe_d000_0001_0a11,
            0x4d1e_5c37_b001_59aa,
            0x655e_9a2c_a556_60b4,
            0x0000_0000_0000_12ab,
        ],
        root_of_unity: [
            0x3c3d_3ca7_3938_1fb2,
            0x9a14_cda3_ec99_772b,
            0xd7aa_cc7c_5972_4826,
            0x0d1b_a211_c5cc_349c,
        ],
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // the 2-adicity of p - 1 is 46, which exercises the full
    // Tonelli-Shanks loop rather than the p = 3 mod 4 shortcut
    #[test]
    fn deep_two_adicity_sqrt() {
        let mut rng = StdRng::seed_from_u64(0x377);
        let mut nonresidues = 0;
        for _ in 0..40 {
            let a = Fp::random(&mut rng);
            match a.sqrt() {
                Some(r) => assert_eq!(r.square(), a),
                None => nonresidues += 1,
            }
        }
        // about half of all elements are non-residues
        assert!(nonresidues > 5 && nonresidues < 35);
    }

    #[test]
    fn invert_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let a = Fp::random(&mut rng);
            if !a.is_zero() {
                assert!(a.mul(&a.invert()).is_one());
            }
            let b = Fr::random(&mut rng);
            if !b.is_zero() {
                assert!(b.mul(&b.invert()).is_one());
            }
        }
    }

    #[test]
    fn pow2k_is_repeated_squaring() {
        let a = Fp::from_u64(3);
        assert_eq!(a.pow2k(5), a.pow(&[32]));
        assert_eq!(a.pow2k(0), a);
    }

    #[test]
    fn from_biguint_reduces() {
        use num_bigint::BigUint;
        let modulus = BigUint::from_bytes_le(&{
            let mut b = [0u8; 48];
            for (i, limb) in Fp::MODULUS.iter().enumerate() {
                b[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
            }
            b
        });
        let big = BigUint::from_bytes_le(&[0xff; 96]);
        let a = Fp::from_biguint(&big);
        let mut want = [0u64; 6];
        for (i, digit) in (&big % &modulus).iter_u64_digits().enumerate() {
            want[i] = digit;
        }
        assert_eq!(a.to_repr(), want);
    }
}
