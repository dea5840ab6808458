//! BLS48 curve over a 378-bit prime, embedding degree 48, M-type sextic
//! twist over fp8.

/// Base field prime
pub const P: [u64; 6] = [
    0x2a6c_035b_0250_522f,
    0x17de_cba8_85c4_ed08,
    0xb5ff_1223_985d_bd28,
    0x9ed5_c8e8_56fb_0be4,
    0x0b8b_aa7c_18ee_579b,
    0x03f8_8168_a28d_12ea,
];
/// Prime subgroup order
pub const R: [u64; 6] = [
    0x1924_832a_1240_bda1,
    0xc868_1df2_637c_486e,
    0x3162_2f0d_84f3_e167,
    0x51d4_2fff_d662_9b9e,
    0x0194_b58d_d413_b3b5,
    0x0000_0000_0002_a353,
];
/// Cofactor of G1
pub const H: [u64; 6] = [
    0x0000_0181_5582_aaac,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G2 on the twist
pub const H2: [u64; 42] = [
    0x3cbb_b8ab_5c3d_24b1,
    0x0a35_23a5_a0af_4953,
    0x6bb0_aecf_65c2_69b6,
    0xa156_0609_cfdf_74c2,
    0xd20e_9a6b_f2f1_f749,
    0x122b_dbbe_648a_7223,
    0xe7c4_0f2a_dc1f_7a45,
    0x17c1_7251_1be0_d6c7,
    0xa18a_ef53_b01b_a5b1,
    0x92ea_e0c1_28ee_c094,
    0x124b_0487_a5f3_f91c,
    0x2331_d70a_a5ff_15d8,
    0xfa46_16ff_2b15_994c,
    0xac39_ed4d_3649_490c,
    0x8df6_eee2_392d_49cb,
    0xafc1_b0a6_33a4_291b,
    0x71e6_49ea_b389_794f,
    0x837b_5dd8_f57e_896f,
    0x100a_e893_5365_6709,
    0x4981_b7fb_6f33_9a55,
    0xb470_9b61_f6f7_9f7f,
    0xa825_49d8_64d0_0925,
    0x9b95_4ec3_3b90_bf66,
    0xe19c_b1d7_3504_0f6c,
    0x3a8a_acdc_daef_4bdc,
    0x5bac_0d28_76cf_8b25,
    0x9e8b_2ac9_af5c_a45b,
    0xc3bc_0cb1_ccb3_42f1,
    0x8178_8a20_89c3_f03e,
    0x7dbc_d384_7a2b_1573,
    0x690e_fbbb_112a_d7a3,
    0x542e_06e9_b509_9235,
    0x8e51_408a_55ee_0212,
    0x7c9f_1ada_6b51_c41a,
    0xa00e_10f6_ddcf_0268,
    0x90d3_0579_4d80_cb8c,
    0x0892_bb10_f4ba_8961,
    0x8543_e90b_a5e8_c4f5,
    0x3f42_e3fb_1c85_dedc,
    0xcc37_404f_db38_c456,
    0xe41c_7263_2a07_2b5c,
    0x5b81_5544_ab50_e515,
];
/// Absolute value of the trace of Frobenius of the G1 curve
pub const T: [u64; 6] = [
    0x0000_0000_0022_0004,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Trace sign
pub const T_NEG: bool = false;
/// Absolute value of the family seed u
pub const Z_ABS: u64 = 0x220003;
/// Sign of the family seed u
pub const Z_NEG: bool = false;
/// Constant coefficient of the G1 curve
pub const B: i64 = 1;
/// Quadratic non-residue defining fp2
pub const QNR: i64 = -1;
/// Cubic non-residue defining fp3
pub const CNR: i64 = 3;
/// Non-residue xi = XI.0 + XI.1 * u defining fp4 and fp6
pub const XI: (i64, i64) = (4, 1);
/// Twist type: true for M-type, false for D-type
pub const TWIST_M: bool = true;
/// QNR raised to the odd part of p - 1
pub const TS_ROOT: [u64; 6] = [
    0x2a6c_035b_0250_522e,
    0x17de_cba8_85c4_ed08,
    0xb5ff_1223_985d_bd28,
    0x9ed5_c8e8_56fb_0be4,
    0x0b8b_aa7c_18ee_579b,
    0x03f8_8168_a28d_12ea,
];
/// G1 generator x
pub const G1_X: [u64; 6] = [
    0x5f76_67b0_1517_84b8,
    0x4e5a_3391_2b00_fa38,
    0xd850_96ea_0d31_20e1,
    0xfdb8_1919_c047_b556,
    0x532f_6e8a_96ba_aed6,
    0x02d5_f50d_56e1_bc22,
];
/// G1 generator y
pub const G1_Y: [u64; 6] = [
    0xc634_5e2d_ad62_a57a,
    0x3026_5cbd_d93d_a167,
    0x1aca_9260_46cb_7252,
    0x4085_a760_753e_3abc,
    0xd0ae_21bf_e61a_85ef,
    0x022f_a472_0892_df3d,
];
/// G2 generator x on 1, θ, ..., θ^(e-1) over fp2, low coordinate first
pub const G2_X: [[u64; 6]; 8] = [
    [
        0x42e5_0548_6d37_d892,
        0xca6a_76ad_25a4_f82a,
        0x4803_a403_85ba_6e10,
        0x0ee2_31d8_947c_4e9f,
        0x265c_6eb8_5518_7030,
        0x02fd_1a29_9d90_66f7,
    ],
    [
        0xcab3_e0f6_79d9_db8d,
        0xe726_b785_9b56_a5ab,
        0x26a7_70af_8749_3c35,
        0x9478_4ffd_8099_761e,
        0x17d2_b45f_2e6b_5d6a,
        0x024d_0462_58ba_f035,
    ],
    [
        0x8fe7_00aa_4269_3acb,
        0x72d5_cca0_253b_67a8,
        0x7406_a417_f61a_fa5d,
        0xb1f5_73bf_6b33_86ec,
        0xe981_c528_aff5_057b,
        0x00b8_411f_2a45_735c,
    ],
    [
        0xedb7_b056_2922_1d4c,
        0xbba1_9700_fe60_bc5a,
        0x79ad_8544_df98_919b,
        0x6f20_7f23_9c86_7d4d,
        0x7018_6bbb_5886_9d8d,
        0x03f6_fba4_02e3_0379,
    ],
    [
        0xc088_21c3_2d77_2ec7,
        0xc3e8_7ad7_190f_de81,
        0xd1e2_1aa8_497c_a773,
        0x9d62_7e37_a2fe_dba7,
        0x415e_15a3_cb5f_46c5,
        0x03ba_34f3_2a7e_9257,
    ],
    [
        0x2316_5831_ecdb_02e3,
        0xb94d_3b09_8068_2558,
        0xa8dd_1ba5_f012_35ad,
        0xc454_0f3d_b4ff_cc23,
        0xe849_b0dd_50bb_87c9,
        0x02a3_1426_f80b_fc60,
    ],
    [
        0xa1aa_edb2_3489_2f39,
        0x0db3_7a4f_2cb2_82cf,
        0x666f_b674_5f08_4840,
        0x8279_7625_9e3b_170b,
        0x673e_0b89_787d_3e69,
        0x016d_588c_627f_2dd8,
    ],
    [
        0x2547_4e4f_45d0_23df,
        0x3e02_3f1f_3eb1_9b40,
        0x66f3_3774_22ff_5eb2,
        0xd25f_3273_c1c3_bbe2,
        0x3708_a5d0_34bc_de22,
        0x00d3_af09_d883_d113,
    ],
];
/// G2 generator y
pub const G2_Y: [[u64; 6]; 8] = [
    [
        0x557c_fe56_55a7_705d,
        0x44aa_4202_2b54_8d97,
        0x60eb_f0e5_6289_e73e,
        0x9ded_e575_2aab_1eb3,
        0xd42b_3a67_0323_7e1f,
        0x0142_b5f1_5c44_157d,
    ],
    [
        0xfb6e_d7d9_5185_f2f1,
        0x3b38_04db_7f02_f068,
        0x19b3_7fea_df66_48b8,
        0x80cc_dbd9_4353_9dd9,
        0x2cc2_cecd_1695_fd28,
        0x0021_a2a3_84ec_ea10,
    ],
    [
        0x177b_08a6_b281_f923,
        0x631b_acaa_e2fb_ad72,
        0x3a54_52e0_e581_6745,
        0x7b03_1aee_027d_1e12,
        0x008a_027c_926e_1898,
        0x005c_833a_fd14_f612,
    ],
    [
        0x6a2d_1a0b_6e05_6b9a,
        0xa2ae_4a86_e748_da4f,
        0x969f_8d47_8997_b060,
        0x0ad7_0f72_f3ed_93dd,
        0xbb62_8824_e4fa_006e,
        0x02fd_55c4_7fa9_49d1,
    ],
    [
        0x7393_aabc_0268_f1b2,
        0x01e5_95a1_90fc_cb24,
        0xea2b_4d75_97a7_fc4d,
        0x4b72_92d2_f96f_3b77,
        0x035d_cdd0_aee2_2d32,
        0x01ce_f16e_d4ef_cf0b,
    ],
    [
        0x20d5_e39a_2dee_0758,
        0x5a45_4293_4426_3ea5,
        0x8d1f_b288_0f04_7fef,
        0x060a_2307_8615_daa4,
        0x1f95_1517_866e_35a4,
        0x00a0_f16e_7daf_e57a,
    ],
    [
        0x61ec_dde3_f502_a564,
        0xf1d1_19e9_7ac1_b187,
        0x161d_c74a_6bb8_a2e8,
        0xe213_c417_f90d_3b1c,
        0x9373_499e_ce81_51a8,
        0x0086_a8bf_bf3c_c7a2,
    ],
    [
        0x0af8_7a96_5334_a9e1,
        0xfce1_14c0_02d3_b15a,
        0xa7eb_3f35_0a6f_e168,
        0x24ec_90a7_bacf_f1a1,
        0xd656_8345_5394_2b2c,
        0x02a5_de6c_a212_3846,
    ],
];
/// Cube root of unity with (x, y) -> (BETA x, y) equal to [LAMBDA]
pub const BETA: [u64; 6] = [
    0x9f8e_2de1_15bd_87bb,
    0xa0c5_27f4_f872_61ea,
    0x0198_9d35_95e7_6ec2,
    0x88f4_4c86_97a6_c060,
    0x9f42_5bda_47d8_4fe3,
    0x03f8_810e_f186_dd29,
];
pub const LAMBDA: [u64; 6] = [
    0xf27c_7630_fe90_a400,
    0xd8cf_4032_d2db_ee2c,
    0x3162_2d6d_ba31_e0cb,
    0x51d4_2fff_d662_9b9e,
    0x0194_b58d_d413_b3b5,
    0x0000_0000_0002_a353,
];
