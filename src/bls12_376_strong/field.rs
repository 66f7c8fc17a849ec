// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Montgomery field instances for BLS12-376-strong.

use crate::field::montgomery_field;

montgomery_field!(
    /// The 376-bit base field \\(\mathbb{F}_p\\) of BLS12-376-strong.
    Fp,
    6, {
        modulus: [
            0x1353_681c_aaaa_aaab,
            0xf617_216e_b1f4_0288,
            0x5ed4_8752_a49e_f938,
            0x44bc_d510_d6c9_940f,
            0xa513_d75a_5627_c383,
            0x00ea_4ce6_919c_7e9d,
        ],
        one: [
            0xf019_88c1_ffff_ffa3,
            0xccca_905c_0f11_3db2,
            0xa660_84ee_96be_62eb,
            0x1633_caa5_ea4f_a33f,
            0x1760_4c8c_1aa9_ebf0,
            0x00a6_30b7_4e72_0231,
        ],
        r2: [
            0x38db_b88e_ae5c_272e,
            0xc744_8e58_3e9b_c262,
            0x3553_a33e_b0de_a69f,
            0x5e16_05fd_6b56_ce48,
            0x2a09_760a_9043_ba19,
            0x00c4_c95d_ef0d_991a,
        ],
        inv: 0xadeea901fffffffd,
        modulus_bits: 376,
        two_adicity: 1,
        trace_minus_one_div_two: [
            0x04d4_da07_2aaa_aaaa,
            0x3d85_c85b_ac7d_00a2,
            0xd7b5_21d4_a927_be4e,
            0xd12f_3544_35b2_6503,
            0x6944_f5d6_9589_f0e0,
            0x003a_9339_a467_1fa7,
        ],
        root_of_unity: [
            0x2339_df5a_aaaa_ab08,
            0x294c_9112_a2e2_c4d5,
            0xb874_0264_0de0_964d,
            0x2e89_0a6a_ec79_f0cf,
            0x8db3_8ace_3b7d_d793,
            0x0044_1c2f_432a_7c6c,
        ],
    }
);

montgomery_field!(
    /// The 252-bit scalar field \\(\mathbb{F}_r\\) of BLS12-376-strong.
    Fr,
    4, {
        modulus: [
            0xf070_7e4c_0000_0001,
            0x933b_8f2c_9102_a034,
            0x8433_4fc1_cb85_2a71,
            0x0c73_4c94_2887_6f03,
        ],
        one: [
            0x3736_220f_ffff_ffec,
            0x7f58_d084_abcb_7bdd,
            0xabfd_c4dc_1998_af20,
            0x06fe_046c_d56b_53b9,
        ],
        r2: [
            0xb16f_7155_425d_e572,
            0x3dca_98ba_3d49_6dd3,
            0x72bf_4fa5_203f_68f6,
            0x0805_f07b_eed5_9873,
        ],
        inv: 0xf0707e4bffffffff,
        modulus_bits: 252,
        two_adicity: 34,
        trace_minus_one_div_two: [
            0x9220_5406_9e0e_0fc9,
            0x3970_a54e_3267_71e5,
            0x8510_ede0_7086_69f8,
            0x0000_0000_018e_6992,
        ],
        root_of_unity: [
            0x444d_4a8b_9151_ee73,
            0x022d_63f7_92c1_ad9f,
            0x76ff_229f_2854_3e9d,
            0x050e_2202_87dc_6acf,
        ],
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn arithmetic_identities() {
        let mut rng = StdRng::seed_from_u64(0x376);
        for _ in 0..40 {
            let a = Fp::random(&mut rng);
            let b = Fp::random(&mut rng);
            assert_eq!(&a + &b, &b + &a);
            assert_eq!((&a + &b) - &b, a);
            assert_eq!(a.square(), &a * &a);
            assert_eq!(a.neg().neg(), a);
            assert_eq!(&a * &(&b + &b), (&a * &b).double());
        }
    }

    #[test]
    fn invert_and_sqrt() {
        let mut rng = StdRng::seed_from_u64(44);
        for _ in 0..30 {
            let a = Fp::random(&mut rng);
            if a.is_zero() {
                continue;
            }
            assert!((&a * &a.invert()).is_one());
            let r = a.square().sqrt().expect("squares have roots");
            assert!(r == a || r == a.neg());
        }
    }

    #[test]
    fn scalar_field_smoke() {
        let a = Fr::from_u64(1 << 60);
        assert_eq!(a.to_repr(), [1u64 << 60, 0, 0, 0]);
        assert!(Fr::from_u64(0).is_zero());
    }
}
