// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Montgomery field instances for BLS12-381.

use crate::field::montgomery_field;

montgomery_field!(
    /// The 381-bit base field \\(\mathbb{F}_p\\) of BLS12-381.
    Fp,
    6, {
        modulus: [
            0xb9fe_ffff_ffff_aaab,
            0x1eab_fffe_b153_ffff,
            0x6730_d2a0_f6b0_f624,
            0x6477_4b84_f385_12bf,
            0x4b1b_a7b6_434b_acd7,
            0x1a01_11ea_397f_e69a,
        ],
        one: [
            0x7609_0000_0002_fffd,
            0xebf4_000b_c40c_0002,
            0x5f48_9857_53c7_58ba,
            0x77ce_5853_7052_5745,
            0x5c07_1a97_a256_ec6d,
            0x15f6_5ec3_fa80_e493,
        ],
        r2: [
            0xf4df_1f34_1c34_1746,
            0x0a76_e6a6_09d1_04f1,
            0x8de5_476c_4c95_b6d5,
            0x67eb_88a9_939d_83c0,
            0x9a79_3e85_b519_952d,
            0x1198_8fe5_92ca_e3aa,
        ],
        inv: 0x89f3fffcfffcfffd,
        modulus_bits: 381,
        two_adicity: 1,
        trace_minus_one_div_two: [
            0xee7f_bfff_ffff_eaaa,
            0x07aa_ffff_ac54_ffff,
            0xd9cc_34a8_3dac_3d89,
            0xd91d_d2e1_3ce1_44af,
            0x92c6_e9ed_90d2_eb35,
            0x0680_447a_8e5f_f9a6,
        ],
        root_of_unity: [
            0x43f5_ffff_fffc_aaae,
            0x32b7_fff2_ed47_fffd,
            0x07e8_3a49_a2e9_9d69,
            0xeca8_f331_8332_bb7a,
            0xef14_8d1e_a0f4_c069,
            0x040a_b326_3eff_0206,
        ],
    }
);

montgomery_field!(
    /// The 255-bit scalar field \\(\mathbb{F}_r\\) of BLS12-381.
    Fr,
    4, {
        modulus: [
            0xffff_ffff_0000_0001,
            0x53bd_a402_fffe_5bfe,
            0x3339_d808_09a1_d805,
            0x73ed_a753_299d_7d48,
        ],
        one: [
            0x0000_0001_ffff_fffe,
            0x5884_b7fa_0003_4802,
            0x998c_4fef_ecbc_4ff5,
            0x1824_b159_acc5_056f,
        ],
        r2: [
            0xc999_e990_f3f2_9c6d,
            0x2b6c_edcb_8792_5c23,
            0x05d3_1496_7254_398f,
            0x0748_d9d9_9f59_ff11,
        ],
        inv: 0xfffffffeffffffff,
        modulus_bits: 255,
        two_adicity: 32,
        trace_minus_one_div_two: [
            0x7fff_2dff_7fff_ffff,
            0x04d0_ec02_a9de_d201,
            0x94ce_bea4_199c_ec04,
            0x0000_0000_39f6_d3a9,
        ],
        root_of_unity: [
            0x9cab_6d5c_0c17_f47c,
            0x1ce1_e93d_fd4b_71e5,
            0x0d6d_b230_471d_d505,
            0x3f0e_e990_743a_3b6a,
        ],
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn invert_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0x381);
        for _ in 0..50 {
            let a = Fp::random(&mut rng);
            if a.is_zero() {
                continue;
            }
            assert!(a.mul(&a.invert()).is_one());
        }
        assert!(Fp::ZERO.invert().is_zero());
    }

    #[test]
    fn sqrt_of_squares() {
        let mut rng = StdRng::seed_from_u64(0x5172);
        for _ in 0..30 {
            let a = Fp::random(&mut rng);
            let sq = a.square();
            let root = sq.sqrt().expect("square must have a root");
            assert!(root == a || root == a.neg());
        }
    }

    #[test]
    fn repr_roundtrip_and_canonical_rejection() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..30 {
            let a = Fp::random(&mut rng);
            assert_eq!(Fp::from_repr(a.to_repr()), Some(a));
        }
        assert!(Fp::from_repr(Fp::MODULUS).is_none());
    }

    #[test]
    fn small_integer_arithmetic() {
        let two = Fp::from_u64(2);
        let three = Fp::from_u64(3);
        assert_eq!(&two + &three, Fp::from_u64(5));
        assert_eq!(&three * &three, Fp::from_u64(9));
        assert_eq!(&two - &three, Fp::from_u64(1).neg());
        assert_eq!(two.double(), Fp::from_u64(4));
        assert!(Fp::from_u64(1).is_one());
    }

    #[test]
    fn scalar_field_pow_and_repr() {
        let a = Fr::from_u64(7);
        // 7^2 = 49 via the generic ladder
        assert_eq!(a.pow(&[2]), Fr::from_u64(49));
        assert_eq!(Fr::from_u64(1).to_repr(), [1, 0, 0, 0]);
    }
}
