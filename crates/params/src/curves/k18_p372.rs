//! KSS18 curve over a 372-bit prime, embedding degree 18, D-type sextic
//! twist over fp3.

/// Base field prime
pub const P: [u64; 6] = [
    0xca24_126a_9d39_1325,
    0x572a_3019_0d40_7997,
    0x9a6e_a2f9_656d_97b0,
    0x7b3a_e7e1_11e9_ab3e,
    0x31bf_2b99_4f70_c747,
    0x000c_2aab_ffe1_7e7d,
];
/// Prime subgroup order
pub const R: [u64; 6] = [
    0x66c1_6fb0_50de_3a01,
    0xbca3_b455_1aac_5f7a,
    0x371f_a47b_8cdd_9e55,
    0x3d31_ffd9_9f4c_eeb4,
    0x0000_0000_0002_fb26,
    0x0000_0000_0000_0000,
];
/// Cofactor of G1
pub const H: [u64; 6] = [
    0x04eb_3048_104a_1ca5,
    0x0000_0004_14d2_aec1,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G2 on the twist
pub const H2: [u64; 14] = [
    0x18ee_4de8_2a9a_211b,
    0xf093_9f6a_e8b1_9216,
    0xe8d0_1844_75d4_af34,
    0x9439_1905_1d28_2caa,
    0xc412_9a47_3d78_4e81,
    0x5729_31be_f7ac_3086,
    0xfb48_987f_f40b_ac46,
    0xb775_bd54_3b2d_c677,
    0xf918_5c6b_0592_e267,
    0x959d_04d4_6112_bca4,
    0x24b0_6451_3543_51cc,
    0xe938_e1f1_17ac_532e,
    0x2757_40ab_fbaa_b066,
    0x0000_0000_0000_025c,
];
/// Absolute value of the trace of Frobenius of the G1 curve
pub const T: [u64; 6] = [
    0x6cef_08c9_5b5b_9481,
    0x6c24_5dcb_a2a9_2b28,
    0x0248_9256_dbff_3943,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Trace sign
pub const T_NEG: bool = false;
/// Absolute value of the family seed u
pub const Z_ABS: u64 = 0x7ff800000ff8;
/// Sign of the family seed u
pub const Z_NEG: bool = false;
/// Constant coefficient of the G1 curve
pub const B: i64 = 2;
/// Quadratic non-residue defining fp2
pub const QNR: i64 = -2;
/// Cubic non-residue defining fp3
pub const CNR: i64 = 2;
/// Non-residue xi = XI.0 + XI.1 * u defining fp4 and fp6
pub const XI: (i64, i64) = (0, 1);
/// Twist type: true for M-type, false for D-type
pub const TWIST_M: bool = false;
/// QNR raised to the odd part of p - 1
pub const TS_ROOT: [u64; 6] = [
    0xf08c_d03a_6229_de5c,
    0x34cf_ace4_e01f_65e8,
    0x7e87_4e89_db58_b90c,
    0x4894_5ca2_87c0_cb19,
    0xbaba_9ff6_344c_7cdc,
    0x0005_674d_6354_3653,
];
/// G1 generator x
pub const G1_X: [u64; 6] = [
    0x47a0_d156_7dcb_e6c3,
    0x8db5_60be_7707_1760,
    0x15df_5f30_4ea3_c6f6,
    0xdc77_1ea6_c0a9_91da,
    0xfa0f_faf3_689c_d2fd,
    0x0003_0b9c_dc13_0bb9,
];
/// G1 generator y
pub const G1_Y: [u64; 6] = [
    0x8d9e_ab11_8432_6867,
    0x2292_444e_6c9f_695a,
    0x4d06_21ae_cced_9189,
    0x5ffa_fb39_fee4_72bf,
    0xe11a_554f_adce_29a0,
    0x0002_cd91_5273_dcc1,
];
/// G2 generator x on 1, θ, ..., θ^(e-1) over fp, low coordinate first
pub const G2_X: [[u64; 6]; 3] = [
    [
        0x1719_3415_1966_2d32,
        0xae5a_4b2c_582f_a9db,
        0xcd52_11ea_07fe_63da,
        0x3a7f_5e49_8219_23f8,
        0x523d_2ab0_f6e5_80c5,
        0x000a_de2b_c254_68aa,
    ],
    [
        0x8ea9_2525_0469_ae7b,
        0x0b7e_e52a_28fa_ae5f,
        0x1b3e_27bb_ee0e_65b8,
        0x4f4c_8cc4_7178_c4a7,
        0xb222_f0e1_2fc4_365a,
        0x0004_b691_f6d9_d21c,
    ],
    [
        0x5817_14a2_3ce4_b84f,
        0xba1d_4149_42b6_a8ee,
        0xea8f_685e_5dc9_a57f,
        0x0fb9_2e06_afe2_4ca3,
        0xaf90_617e_480f_000a,
        0x0006_6473_9c04_d7f6,
    ],
];
/// G2 generator y
pub const G2_Y: [[u64; 6]; 3] = [
    [
        0xacb2_a168_b608_613b,
        0xe90b_3a6c_0d1f_5925,
        0xe328_bbdd_236b_8d0f,
        0x6741_fe10_50e3_7303,
        0xe2ee_674f_0a3f_a516,
        0x000a_d424_03d1_2bbb,
    ],
    [
        0x6bb9_acb3_a994_a004,
        0x82d4_402f_0cfa_e326,
        0x9924_d8ab_b7a0_c1da,
        0x3c00_657f_be18_a4d4,
        0xc119_f554_d207_e62e,
        0x0004_fc8b_d4f4_1f5e,
    ],
    [
        0x9f55_ef8c_d7cf_cacc,
        0x3bf4_dbe0_b098_38eb,
        0x9652_aad4_c80a_f9a5,
        0xdc09_b76c_1052_80f1,
        0x6aa5_290b_b937_9153,
        0x000a_1864_f80c_41c1,
    ],
];
/// Cube root of unity with (x, y) -> (BETA x, y) equal to [LAMBDA]
pub const BETA: [u64; 6] = [
    0x3f88_539a_a2e0_79a8,
    0xf088_dc43_d0a1_8092,
    0x1e27_1144_ab06_0e0c,
    0xc624_b237_65a8_7f8a,
    0x006e_0b02_60c2_9110,
    0x0003_0aaa_fff8_5f8a,
];
pub const LAMBDA: [u64; 6] = [
    0x6877_fa0f_e80b_fe12,
    0x0060_09f8_80cb_fb7e,
    0x0000_0000_0000_1ffa,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
