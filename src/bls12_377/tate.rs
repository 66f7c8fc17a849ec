// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Tate-residue filters for BLS12-377 at \\(\ell = 16, 3, 7, 13\\).
//!
//! The cofactor of BLS12-377 is divisible by \\(2^{92}\\), 3, 7 and 13;
//! the four filters below kill the corresponding small torsion before the
//! randomized combination rounds run. The evaluation order (16, 3, 7, 13)
//! is part of the observable behaviour: a point of composite small order
//! is rejected by the first filter that sees it.

use super::chains::{exp_by_p13, exp_by_p16, exp_by_p3, exp_by_p7};
use super::field::Fp;
use super::G1Affine;

/// A line `y + a*x + b = 0`; verticals keep `a = 0` and `b = -x0`.
pub(crate) struct Line {
    pub(crate) a: Fp,
    pub(crate) b: Fp,
}

fn eval_line(line: &Line, point: &G1Affine) -> Fp {
    &point.x * &line.a + &point.y + &line.b
}

fn eval_vertical(line: &Line, point: &G1Affine) -> Fp {
    &point.x + &line.b
}

/// `Tate_{16,P16}(Q)` against the tabulated point of order 16.
pub(crate) fn tate16_is_one(point: &G1Affine) -> bool {
    // f_{16,P} = (l_{P,P}^8 * l_{2P,2P}^4 * l_{4P,4P}^2) /
    //            (v_{2P}^8 * v_{4P}^4 * v_{8P})

    // l_{P,P}^8
    let num = eval_line(&LINES_P16[0], point).square().square().square();
    // l_{2P,2P}^4
    let f1 = eval_line(&LINES_P16[1], point).square().square();
    let num = num * f1;
    // l_{4P,4P}^2
    let f1 = eval_line(&LINES_P16[2], point).square();
    let num = num * f1;

    // v_{2P}^8
    let denom = eval_vertical(&LINES_P16[3], point).square().square().square();
    // v_{4P}^4
    let f1 = eval_vertical(&LINES_P16[4], point).square().square();
    let denom = denom * f1;
    // v_{8P}
    let denom = denom * eval_vertical(&LINES_P16[5], point);

    // denom^{-1} = denom^{15} inside the 16-th power-residue class
    let f1 = denom.square();
    let f2 = f1.square();
    let f3 = f2.square();
    let denom_inv = &(&f3 * &f2) * &f1;
    let denom = denom * denom_inv;

    exp_by_p16(&(num * denom)).is_one()
}

/// `Tate_{3,P3}(Q) = (y - 1)^((p-1)/3)` with `P3 = (0, 1)`.
pub(crate) fn tate3_is_one(point: &G1Affine) -> bool {
    exp_by_p3(&(&point.y - &Fp::ONE)).is_one()
}

/// `Tate_{7,P7}(Q)` against the tabulated point of order 7.
pub(crate) fn tate7_is_one(point: &G1Affine) -> bool {
    // f_{7,P} = ((l_{P,P} * l_{2P,P})^2 * l_{3P,3P}) / (v_{2P} * v_{3P})^2

    let f1 = eval_line(&LINES_P7[0], point);
    let f2 = eval_line(&LINES_P7[1], point);
    let num = (&f1 * &f2).square();
    let num = num * eval_line(&LINES_P7[2], point);

    let f1 = eval_vertical(&LINES_P7[3], point);
    let f2 = eval_vertical(&LINES_P7[4], point);
    let denom = (&f1 * &f2).square();

    // denom^{-1} = denom^{6} inside the 7-th power-residue class
    let f1 = denom.square();
    let f2 = f1.square();
    let denom_inv = &f2 * &f1;

    exp_by_p7(&(num * denom_inv)).is_one()
}

/// `Tate_{13,P13}(Q)` against the tabulated point of order 13.
pub(crate) fn tate13_is_one(point: &G1Affine) -> bool {
    // f_{13,P} = ((l_{P,P} * l_{2P,P})^4 * l_{3P,3P}^2 * l_{6P,6P}) /
    //            ((v_{2P} * v_{3P})^4 * v_{6P}^2)

    let f1 = eval_line(&LINES_P13[0], point);
    let f2 = eval_line(&LINES_P13[1], point);
    let num = (&f1 * &f2).square().square();
    let f1 = eval_line(&LINES_P13[2], point).square();
    let num = num * f1;
    let num = num * eval_line(&LINES_P13[3], point);

    let f1 = eval_vertical(&LINES_P13[4], point);
    let f2 = eval_vertical(&LINES_P13[5], point);
    let denom = (&f1 * &f2).square().square();
    let f1 = eval_vertical(&LINES_P13[6], point).square();
    let denom = denom * f1;

    // denom^{-1} = denom^{12} inside the 13-th power-residue class
    let f1 = denom.square().square();
    let f2 = f1.square();
    let denom_inv = &f2 * &f1;

    exp_by_p13(&(num * denom_inv)).is_one()
}

/// Lines of the order-16 auxiliary point.
pub(crate) static LINES_P16: [Line; 6] = [
    Line {
        a: Fp::from_raw([
            0x6150_4fc4_6199_7756,
            0xffba_21e9_791b_bba0,
            0x127a_eef3_a3e2_629e,
            0x46b2_d1ad_7e53_d219,
            0xa35d_24b6_1cb0_0799,
            0x00ad_d404_109f_7d09,
        ]),
        b: Fp::from_raw([
            0xc00d_9c26_a3f3_33da,
            0x28f9_f8a9_16fa_c4a8,
            0x380f_5b3a_760a_040e,
            0xd259_e413_bb08_ff2d,
            0xfab3_2266_8957_ec96,
            0x0198_4038_5fa9_d611,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x8b24_b2a1_a3de_b0af,
            0x523f_e9ad_e60f_37ff,
            0x7b1c_fad7_c2dc_ae59,
            0x375f_abca_741e_fbba,
            0xc453_17f1_5b03_aa78,
            0x003e_23de_4b3a_007a,
        ]),
        b: Fp::from_raw([
            0x77f7_d0a1_8164_99d1,
            0x4a90_2b93_9f3d_4cd5,
            0x6086_156b_04ce_a023,
            0x7e07_bf1a_c71c_e1c9,
            0x3f18_ccf4_05f4_63ed,
            0x00d8_ea8f_294f_6973,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0xaba3_4adc_15c3_0805,
            0x8e0e_ddd0_72e9_6ed0,
            0xc67b_7bc7_9f9f_1130,
            0x5ffe_a8c2_ad14_4b14,
            0xbac0_daea_e826_f0c8,
            0x0134_ed9b_2eab_11a7,
        ]),
        b: Fp::from_raw([
            0xaba3_4adc_15c3_0805,
            0x8e0e_ddd0_72e9_6ed0,
            0xc67b_7bc7_9f9f_1130,
            0x5ffe_a8c2_ad14_4b14,
            0xbac0_daea_e826_f0c8,
            0x0134_ed9b_2eab_11a7,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        b: Fp::from_raw([
            0xc22b_e761_817b_785b,
            0x9e4c_f283_36c3_897c,
            0x7e62_b13b_1903_a254,
            0x6ded_2ec7_6dcb_7f6d,
            0x1c6f_5d56_2104_7a98,
            0x01aa_c049_7a9b_43af,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        b: Fp::from_raw([
            0x482a_e02f_776b_1d85,
            0x9c52_dae9_e3e0_aa07,
            0xecf3_25e7_fe77_abe5,
            0xc1dc_898b_f6da_7406,
            0x5093_0222_e3cb_6608,
            0x00ea_423b_4ac9_301c,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        b: Fp::from_raw([
            0x02cd_ffff_ffff_ff68,
            0x5140_9f83_7fff_ffb1,
            0x9f7d_b3a9_8a7d_3ff2,
            0x7b4e_97b7_6e7c_6305,
            0x4cf4_95bf_803c_84e8,
            0x008d_6661_e2fd_f49a,
        ]),
    },
];

/// Lines of the order-7 auxiliary point.
pub(crate) static LINES_P7: [Line; 5] = [
    Line {
        a: Fp::from_raw([
            0xf8d4_6a80_27a8_d341,
            0x0067_14df_1f8f_e5af,
            0xbbbc_48b9_95fb_bd72,
            0x5f51_dcfe_4a91_1148,
            0x50ca_3196_b3f8_0623,
            0x006e_fb87_9689_e1a8,
        ]),
        b: Fp::from_raw([
            0xcc75_5703_864c_b371,
            0x68c1_86c5_791f_5df1,
            0xd28f_7a10_7f0a_86cb,
            0x61c1_881f_0094_1aea,
            0x3ed1_9921_f00e_2e1e,
            0x006e_a8c1_4a19_c995,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        b: Fp::from_raw([
            0xf5d8_8e64_524b_f2cb,
            0x4363_1ebf_28cb_ca84,
            0xcd59_36a6_1da8_50d5,
            0xbf57_79b0_f21a_a74a,
            0x2db5_65bb_d13a_85c3,
            0x0033_05cb_ba0b_7cd2,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x4e66_1f6a_d595_ff32,
            0x15b2_dff5_57dd_4f7a,
            0xe8e3_5032_42f8_e5e9,
            0x396d_650b_6247_ea50,
            0xfbd3_57cb_c171_f03c,
            0x019a_5907_3d5a_396b,
        ]),
        b: Fp::from_raw([
            0xb893_68fc_79b3_4c90,
            0xae49_d67e_b6e0_a20e,
            0x4c63_e81f_3afe_c134,
            0xb861_51d4_0060_f8a4,
            0x8769_6c9e_7c93_1b1c,
            0x013f_9184_cdab_4755,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        b: Fp::from_raw([
            0x612a_9ec2_84eb_e584,
            0x4856_3d5e_d58a_b7b0,
            0xe139_d356_3db4_420d,
            0x7e4e_41a5_1da0_2676,
            0xf467_66ea_271e_757b,
            0x019e_8742_c399_1b86,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        b: Fp::from_raw([
            0xed94_5fb0_6359_11b1,
            0xe853_8512_3da7_eb6c,
            0xf876_7bfa_f89a_fb74,
            0x9308_00c7_6bf5_10e3,
            0x2942_ae45_4d09_e4fc,
            0x004e_ab92_17c6_6c00,
        ]),
    },
];

/// Lines of the order-13 auxiliary point.
pub(crate) static LINES_P13: [Line; 7] = [
    Line {
        a: Fp::from_raw([
            0x35e4_5fdd_d76f_d466,
            0x37ff_279a_51c4_3778,
            0xae80_8f14_4e23_e158,
            0xa979_7be0_6d3c_4045,
            0x11e8_0899_bb70_8a52,
            0x0099_f2a0_e33b_7125,
        ]),
        b: Fp::from_raw([
            0xfd0b_8ddc_8eba_261f,
            0x7b49_324a_7c53_5b3f,
            0x7702_f40c_fcfd_0adc,
            0xea66_dd4e_20f6_9920,
            0x08d4_d5ec_0f61_4c70,
            0x007a_246d_9287_b0d1,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x53ee_adb3_d139_23d6,
            0xa3de_1eb2_4042_0c2a,
            0x5c05_95f3_5695_546d,
            0x4c19_0087_cc5a_8776,
            0x972f_1b99_9176_b546,
            0x018f_3f67_ca91_f4ae,
        ]),
        b: Fp::from_raw([
            0x170e_c3bd_b549_e261,
            0x80b9_1302_6fc7_909e,
            0x734b_ad56_bc78_e817,
            0xf874_1ec1_4ee8_9cc7,
            0xb258_c555_81ed_0118,
            0x00cf_283f_04a6_e393,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x44ed_f227_bc91_9168,
            0x3248_dd81_8789_b224,
            0x299f_9e1b_f806_5e1d,
            0x3960_dc0e_7a17_7bfc,
            0x3120_9f3a_83aa_5998,
            0x005c_3a83_0e49_71dd,
        ]),
        b: Fp::from_raw([
            0x6474_9c45_58ca_5001,
            0x2e00_e36c_4cd4_4477,
            0x1bcf_451d_ecff_3a7f,
            0x9b32_1879_1e0d_fbec,
            0xa983_a5f5_890a_d086,
            0x0100_f64f_42a8_1f59,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x44d5_64d7_5368_2651,
            0x7fc1_4902_3ed6_2a88,
            0x055e_c9fd_790f_c939,
            0x7efe_6aad_140b_49f4,
            0x882d_1b36_62f4_8f18,
            0x00f7_4492_9d4a_8ec0,
        ]),
        b: Fp::from_raw([
            0x1deb_1318_8075_574b,
            0x0ee9_4a39_20fa_2e72,
            0xca01_ff44_2285_e983,
            0xed15_aec6_27e7_4081,
            0x4de1_a1d7_674a_30f4,
            0x0079_5e09_6f44_5a42,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        b: Fp::from_raw([
            0xcea4_958c_3713_bdb9,
            0xd3dd_55a8_8fd0_b1ca,
            0xff87_af47_b913_e381,
            0x7b9f_ea27_149f_b5cc,
            0x1cf7_bd87_5d49_8f7b,
            0x00c5_ef21_9b52_a51c,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        b: Fp::from_raw([
            0x8b47_f825_3888_260d,
            0xa938_fee1_a3e1_bdd1,
            0x1e3b_01f6_8d43_4134,
            0xa981_e5b7_8e9e_a3db,
            0x0a79_04d3_3ffd_8136,
            0x00fa_3eaf_9579_6323,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        b: Fp::from_raw([
            0x4cf0_e964_139e_8353,
            0xc86a_fd37_5448_dbcb,
            0xcaa5_d069_69f7_0621,
            0x288f_cac4_7af8_4477,
            0x8699_4b2c_9ce8_6e5b,
            0x0173_6e21_4327_aa96,
        ]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_377::Fr;
    use crate::curve::fuzz_cofactor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn filters_accept_subgroup_points() {
        let mut rng = StdRng::seed_from_u64(0x13b);
        for _ in 0..10 {
            let q = G1Affine::generator()
                .scalar_mul(&Fr::random(&mut rng).to_repr())
                .to_affine();
            assert!(tate16_is_one(&q));
            assert!(tate3_is_one(&q));
            assert!(tate7_is_one(&q));
            assert!(tate13_is_one(&q));
        }
    }

    #[test]
    fn order_three_point_fails_the_three_filter() {
        // (0, 1) has order 3 on y^2 = x^3 + 1
        let t = G1Affine::new(Fp::ZERO, Fp::ONE).expect("(0,1) is on the curve");
        assert!(!t.is_in_subgroup());
        assert!(!tate3_is_one(&t));
    }

    #[test]
    fn filters_reject_most_cofactor_points() {
        let mut rejected = 0;
        for u in 1u64..=16 {
            let q = fuzz_cofactor::<crate::bls12_377::Bls12_377>(&Fp::from_u64(u));
            let pass = tate16_is_one(&q) && tate3_is_one(&q) && tate7_is_one(&q) && tate13_is_one(&q);
            if !pass {
                rejected += 1;
            }
        }
        assert!(rejected > 0);
    }
}
