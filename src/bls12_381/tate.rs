// -*- mode: rust; -*-
//
// This file is part of bls12-subgroup-batch.
// See LICENSE for licensing information.

//! Tate-residue filters for BLS12-381 at \\(\ell = 3\\) and
//! \\(\ell = 11\\).
//!
//! Each filter evaluates a closed-form product of precomputed line
//! functions of a fixed auxiliary point of order \\(\ell\\), inverts the
//! vertical denominator inside the \\(\ell\\)-th power-residue class by
//! Fermat (so one small power instead of a field inversion) and applies
//! the hard exponentiation \\(x^{(p-1)/\ell}\\). The output is one exactly
//! when the argument is an \\(\ell\\)-th power, which on-curve translates
//! to "the point has no \\(\ell\\)-torsion component".
//!
//! A `false` is a definite rejection; no randomness is involved.

use super::chains::{exp_by_p11, exp_by_p3};
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

/// `Tate_{3,P3}(Q) = (y - 2)^((p-1)/3)` with `P3 = (0, 2)`.
///
/// The tangent at `P3` is horizontal, so the whole Miller loop collapses
/// to a single line evaluation.
pub(crate) fn tate3_is_one(point: &G1Affine) -> bool {
    exp_by_p3(&(&point.y - &TWO)).is_one()
}

/// `Tate_{11,P}(Q)` evaluated against both tabulated points of order 11.
///
/// Both products must be one: a single order-11 pairing only sees part of
/// the 11-Sylow subgroup of the cofactor.
pub(crate) fn tate11_is_one(point: &G1Affine) -> bool {
    tate_p11(point, &LINES_P11).is_one() && tate_p11(point, &LINES_P11_PRIME).is_one()
}

fn tate_p11(point: &G1Affine, lines: &[Line; 7]) -> Fp {
    // f_{11,P} = (l_{P,P}^4 * (l_{4P,P} * l_{2P,2P})^2 * l_{5P,5P}) /
    //            (v_{2P}^4 * (v_{5P} * v_{4P})^2)

    // l_{P,P}^4
    let num = eval_line(&lines[0], point).square().square();
    // (l_{4P,P} * l_{2P,2P})^2
    let f1 = eval_line(&lines[1], point);
    let f2 = eval_line(&lines[2], point);
    let num = num * (&f1 * &f2).square();
    // l_{5P,5P}
    let num = num * eval_line(&lines[3], point);

    // v_{2P}^4
    let denom = eval_vertical(&lines[4], point).square().square();
    // (v_{5P} * v_{4P})^2
    let f1 = eval_vertical(&lines[5], point);
    let f2 = eval_vertical(&lines[6], point);
    let denom = denom * (&f1 * &f2).square();

    // denom^{-1} = denom^{10} inside the 11-th power-residue class
    let f1 = denom.square();
    let f2 = f1.square().square();
    let denom_inv = &f1 * &f2;

    exp_by_p11(&(num * denom_inv))
}

const TWO: Fp = Fp::from_raw([
    0x3213_0000_0006_554f,
    0xb93c_0018_d6c4_0005,
    0x5760_5e0d_b0dd_bb51,
    0x8b25_6521_ed1f_9bcb,
    0x6cf2_8d79_0162_2c03,
    0x11eb_ab9d_bb81_e28c,
]);

/// Lines of the first order-11 auxiliary point.
pub(crate) static LINES_P11: [Line; 7] = [
    Line {
        a: Fp::from_raw([
            0x1a94_aa00_eb46_1b52,
            0xef0e_42e8_3c65_ab0c,
            0xc071_9230_cda7_f2cf,
            0x0094_2d70_7fb0_3b68,
            0xa91d_79da_a84f_2401,
            0x00fb_e106_baa8_998e,
        ]),
        b: Fp::from_raw([
            0x435e_572e_db60_5d97,
            0xac5b_8de7_c275_26a9,
            0xfb89_d8f1_a765_888b,
            0xc9c6_38ba_ed25_3a3d,
            0x8946_8a68_4768_c58a,
            0x0312_4a01_d3de_4d93,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0xe87f_d33e_f7e8_5ffd,
            0x48fd_9624_6ec1_1f15,
            0x5178_25a2_45b4_2509,
            0xedd5_bfad_8416_1ab1,
            0xcd94_bb79_cb42_fcc1,
            0x0c76_0146_b81b_49d4,
        ]),
        b: Fp::from_raw([
            0xba0a_2b4d_7e25_8ea3,
            0x4dea_b80b_c849_0ba7,
            0x1eab_19b5_1e5b_5e47,
            0x09c7_1f1f_baa0_fdce,
            0xc901_70d5_fb33_f9ea,
            0x0280_eddd_72e8_cac8,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x5ed4_f8bd_2a0c_5d08,
            0x26e7_4c15_2ec4_8aba,
            0x648a_b099_71e3_30c3,
            0x05ab_c0f9_4eed_21cf,
            0x81fd_debf_8aa9_6bea,
            0x1583_86ed_f622_7bd1,
        ]),
        b: Fp::from_raw([
            0x5e79_abeb_d606_828e,
            0x1182_18cf_143d_a451,
            0xa0e3_1032_f2f5_5b85,
            0x6f3c_627e_2d93_4a22,
            0x89af_3d64_a289_96bf,
            0x1192_dde1_e9a1_08a0,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x4f30_4abe_4109_1d52,
            0xc06e_dfca_fd2a_e605,
            0xc672_9cac_627e_af86,
            0x3147_ac9a_7837_df98,
            0x10a2_93c7_f9ad_6900,
            0x0770_a130_9247_1901,
        ]),
        b: Fp::from_raw([
            0x38c1_76e4_08f4_e7c6,
            0x9459_387c_eeaa_2f47,
            0x668b_0d02_4bf4_27e5,
            0xdb12_87d7_48e0_19b1,
            0x5b3b_732f_82b4_8e5e,
            0x0d9c_9767_7662_9fdc,
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
            0xa57f_bbc0_7363_3a48,
            0x397f_805e_95f5_f786,
            0x7dbe_7463_6d36_5d8b,
            0xda55_f72e_77dd_4288,
            0x397a_d1a5_91e2_aa82,
            0x1339_35e6_6ee1_5b08,
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
            0xcc20_ef98_4876_3d46,
            0x06ed_a610_f16d_0cee,
            0x6f5c_bc32_0144_3b63,
            0x29e6_5a2e_10e0_0b8c,
            0xafaf_68a3_733b_9543,
            0x1033_fbed_ad3f_354d,
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
            0x298b_d07e_d14e_4818,
            0xf6c9_55ec_239f_640a,
            0x5f9a_bc0b_6bdf_0019,
            0xe636_e32f_97f4_f010,
            0xd501_dad1_0a27_8726,
            0x0129_a682_fad0_526e,
        ]),
    },
];

/// Lines of the second order-11 auxiliary point.
pub(crate) static LINES_P11_PRIME: [Line; 7] = [
    Line {
        a: Fp::from_raw([
            0x2e15_d41f_7c9b_de43,
            0x34e6_0265_37c1_8ea3,
            0x06be_adfe_55da_251b,
            0x0e96_d493_dadd_f4c7,
            0xd210_7a4d_d812_5c55,
            0x137c_58e3_2318_055c,
        ]),
        b: Fp::from_raw([
            0x76a0_a8d1_249f_4d14,
            0x7250_7216_eede_d956,
            0x6ba6_f9af_4f4b_6d98,
            0x9ab1_12ca_065f_d881,
            0xc1d5_1d4d_fbe2_e74c,
            0x16ee_c7e8_65a1_9906,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0x976b_0377_a1dd_73fa,
            0x180b_7cb7_3ee4_6202,
            0x72e3_c74a_d0da_f4dc,
            0x69be_a78b_0a7b_6710,
            0x02fc_5537_cf52_cf56,
            0x1897_4b37_86a3_2d69,
        ]),
        b: Fp::from_raw([
            0xfff4_d4b2_81da_1c08,
            0xd0c1_47f2_e90a_f457,
            0x4885_b8eb_d855_97dc,
            0x5ab0_2c65_38e4_14f1,
            0x821a_36e0_4817_b2ed,
            0x1780_240c_c697_1bd1,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0xe18d_7b7f_3432_37a6,
            0x1f10_8018_603a_2fad,
            0x6a0d_0aa5_6613_86ae,
            0xbdcf_32fb_7e62_32f7,
            0x97f5_cfc6_2e59_e081,
            0x087c_4e2d_24c3_8f2f,
        ]),
        b: Fp::from_raw([
            0x5b85_5414_29f9_281d,
            0x0d29_e72f_9d16_5bae,
            0xc64d_c26e_03bb_9a9f,
            0xf53a_e906_c5f1_c89c,
            0xc16c_6a51_a0c2_1617,
            0x086e_3408_4fde_ddf9,
        ]),
    },
    Line {
        a: Fp::from_raw([
            0xf131_10cc_2dc6_da48,
            0x83ab_b957_e88b_d00b,
            0xa2b4_f88d_c8ab_2af7,
            0xe7da_999f_efe3_d511,
            0x043c_5096_3cd5_eb98,
            0x12a4_099a_35ba_bc88,
        ]),
        b: Fp::from_raw([
            0x813d_891b_f70a_c2e5,
            0x8a52_c781_c2a9_d0b8,
            0x00a5_c59e_aabc_ce3e,
            0x8964_c3ad_aaa4_f90e,
            0xefe0_3486_c097_1e78,
            0x0c64_7a82_c31d_46bd,
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
            0x17ee_69d1_75a8_237f,
            0x2377_1170_6c4a_7e94,
            0xbeb3_a9ef_1cbd_83e0,
            0x68b5_9f5e_e425_7869,
            0xe8cb_53ab_9613_d64e,
            0x0ff7_7f3b_aa81_9d6b,
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
            0x20e3_abb0_4815_3327,
            0xe2ae_e419_b51d_5e17,
            0x700f_8edd_f2da_19fe,
            0x2acd_fdcd_a752_ff86,
            0x8f5f_bc90_9447_2d76,
            0x0cae_2fe6_5de8_829f,
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
            0x4d04_627d_748f_a47b,
            0x9897_df55_20e8_dd8b,
            0x1184_d29d_c209_ab63,
            0x3860_2305_0978_73af,
            0x4bb6_d533_59ea_2162,
            0x114c_22a3_e721_109d,
        ]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::Fr;
    use crate::curve::fuzz_cofactor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // the first tabulated auxiliary point of order 11
    const P11_X: Fp = Fp::from_raw([
        0x606d_e209_ad3f_a061,
        0x7a2b_3a6d_e969_d876,
        0x15ab_be91_66d2_5e51,
        0x6f2e_071d_0462_43b2,
        0xc648_3667_d92d_2bbe,
        0x0e44_9d24_c353_b653,
    ]);
    const P11_Y: Fp = Fp::from_raw([
        0x766d_863b_e1cc_a93f,
        0xc4f0_661c_6673_9200,
        0x1af8_4bb5_59c9_e0f3,
        0x901b_2158_2916_8171,
        0x652f_113d_f495_99f8,
        0x00f4_bd6e_ba9f_a64c,
    ]);

    #[test]
    fn filters_accept_subgroup_points() {
        let mut rng = StdRng::seed_from_u64(0x7a7e);
        for _ in 0..10 {
            let q = G1Affine::generator()
                .scalar_mul(&Fr::random(&mut rng).to_repr())
                .to_affine();
            assert!(tate3_is_one(&q));
            assert!(tate11_is_one(&q));
        }
    }

    #[test]
    fn order_three_point_fails_the_first_filter() {
        // (0, 2) has order 3; y - 2 vanishes, and 0 is not an is_one
        let t = G1Affine::new(Fp::ZERO, Fp::from_u64(2)).expect("(0,2) is on the curve");
        assert!(!t.is_in_subgroup());
        assert!(!tate3_is_one(&t));
    }

    #[test]
    fn order_eleven_point_fails_the_second_filter() {
        // an auxiliary point of exact order 11 is not in G1, and the
        // order-11 pairing must detect it
        let p11 = G1Affine::new(P11_X, P11_Y).expect("P11 is on the curve");
        assert!(!p11.is_in_subgroup());
        assert!(!tate11_is_one(&p11));
        assert!(tate3_is_one(&p11)); // order 11 carries no 3-torsion
    }

    #[test]
    fn filters_reject_most_cofactor_points() {
        // an h-torsion point survives both filters only if its 3- and
        // 11-components happen to vanish
        let mut rejected = 0;
        for u in 1u64..=16 {
            let q = fuzz_cofactor::<crate::bls12_381::Bls12_381>(&Fp::from_u64(u));
            if !(tate3_is_one(&q) && tate11_is_one(&q)) {
                rejected += 1;
            }
        }
        assert!(rejected > 0);
    }

    #[test]
    fn generator_multiples_pass_both_filters() {
        for s in [5u64, 64, 1023] {
            let q = G1Affine::generator()
                .scalar_mul(&Fr::from_u64(s).to_repr())
                .to_affine();
            assert!(tate3_is_one(&q));
            assert!(tate11_is_one(&q));
        }
    }
}
