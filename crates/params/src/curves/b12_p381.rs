//! BLS12-381, embedding degree 12, M-type sextic twist.

/// Base field prime
pub const P: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];
/// Prime subgroup order
pub const R: [u64; 6] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G1
pub const H: [u64; 6] = [
    0x8c00_aaab_0000_aaab,
    0x396c_8c00_5555_e156,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Absolute value of the trace of Frobenius of the G1 curve
pub const T: [u64; 6] = [
    0xd201_0000_0000_ffff,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Trace sign
pub const T_NEG: bool = true;
/// Absolute value of the family seed z
pub const Z_ABS: u64 = 0xd201000000010000;
/// Sign of the family seed z
pub const Z_NEG: bool = true;
/// Constant coefficient of the G1 curve y^2 = x^3 + b
pub const B: i64 = 4;
/// Quadratic non-residue defining fp2
pub const QNR: i64 = -1;
/// Cubic non-residue defining fp3
pub const CNR: i64 = 2;
/// Non-residue xi = XI.0 + XI.1 * u defining fp4 and fp6
pub const XI: (i64, i64) = (1, 1);
/// Twist type: true for M-type, false for D-type
pub const TWIST_M: bool = true;
/// QNR raised to the odd part of p - 1
pub const TS_ROOT: [u64; 6] = [
    0xb9fe_ffff_ffff_aaaa,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];
/// G1 generator x
pub const G1_X: [u64; 6] = [
    0xfb3a_f00a_db22_c6bb,
    0x6c55_e83f_f97a_1aef,
    0xa14e_3a3f_171b_ac58,
    0xc368_8c4f_9774_b905,
    0x2695_638c_4fa9_ac0f,
    0x17f1_d3a7_3197_d794,
];
/// G1 generator y
pub const G1_Y: [u64; 6] = [
    0x0caa_2329_46c5_e7e1,
    0xd03c_c744_a288_8ae4,
    0x00db_18cb_2c04_b3ed,
    0xfcf5_e095_d5d0_0af6,
    0xa09e_30ed_741d_8ae4,
    0x08b3_f481_e3aa_a0f1,
];
pub const G2_X0: [u64; 6] = [
    0xd480_56c8_c121_bdb8,
    0x0bac_0326_a805_bbef,
    0xb451_0b64_7ae3_d177,
    0xc6e4_7ad4_fa40_3b02,
    0x2608_0527_2dc5_1051,
    0x024a_a2b2_f08f_0a91,
];
pub const G2_X1: [u64; 6] = [
    0xe5ac_7d05_5d04_2b7e,
    0x334c_f112_1394_5d57,
    0xb5da_61bb_dc7f_5049,
    0x596b_d0d0_9920_b61a,
    0x7dac_d3a0_8827_4f65,
    0x13e0_2b60_5271_9f60,
];
pub const G2_Y0: [u64; 6] = [
    0xe193_5486_08b8_2801,
    0x923a_c9cc_3bac_a289,
    0x6d42_9a69_5160_d12c,
    0xadfd_9baa_8cbd_d3a7,
    0x8cc9_cdc6_da2e_351a,
    0x0ce5_d527_727d_6e11,
];
pub const G2_Y1: [u64; 6] = [
    0xaaa9_075f_f05f_79be,
    0x3f37_0d27_5cec_1da1,
    0x2674_92ab_572e_99ab,
    0xcb3e_287e_85a7_63af,
    0x32ac_d2b0_2bc2_8b99,
    0x0606_c4a0_2ea7_34cc,
];
/// Cube root of unity with (x, y) -> (BETA x, y) equal to [LAMBDA]
pub const BETA: [u64; 6] = [
    0x8bfd_0000_0000_aaac,
    0x4094_27eb_4f49_fffd,
    0x897d_2965_0fb8_5f9b,
    0xaa0d_857d_8975_9ad4,
    0xec02_4086_63d4_de85,
    0x1a01_11ea_397f_e699,
];
pub const LAMBDA: [u64; 6] = [
    0x0000_0000_ffff_ffff,
    0xac45_a401_0001_a402,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
