//! BLS12-377, embedding degree 12, D-type sextic twist.

/// Base field prime
pub const P: [u64; 6] = [
    0x8508_c000_0000_0001,
    0x170b_5d44_3000_0000,
    0x1ef3_622f_ba09_4800,
    0x1a22_d9f3_00f5_138f,
    0xc63b_05c0_6ca1_493b,
    0x01ae_3a46_17c5_10ea,
];
/// Prime subgroup order
pub const R: [u64; 6] = [
    0x0a11_8000_0000_0001,
    0x59aa_76fe_d000_0001,
    0x60b4_4d1e_5c37_b001,
    0x12ab_655e_9a2c_a556,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G1
pub const H: [u64; 6] = [
    0x0000_0000_0000_0000,
    0x170b_5d44_3000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Absolute value of the trace of Frobenius of the G1 curve
pub const T: [u64; 6] = [
    0x8508_c000_0000_0002,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Trace sign
pub const T_NEG: bool = false;
/// Absolute value of the family seed z
pub const Z_ABS: u64 = 0x8508c00000000001;
/// Sign of the family seed z
pub const Z_NEG: bool = false;
/// Constant coefficient of the G1 curve y^2 = x^3 + b
pub const B: i64 = 1;
/// Quadratic non-residue defining fp2
pub const QNR: i64 = -5;
/// Cubic non-residue defining fp3
pub const CNR: i64 = 5;
/// Non-residue xi = XI.0 + XI.1 * u defining fp4 and fp6
pub const XI: (i64, i64) = (0, 1);
/// Twist type: true for M-type, false for D-type
pub const TWIST_M: bool = false;
/// QNR raised to the odd part of p - 1
pub const TS_ROOT: [u64; 6] = [
    0xca9d_610d_94ff_4419,
    0xf86b_201b_6386_ae79,
    0x5808_bf73_63e6_bd3b,
    0x48d3_0f28_90d3_0280,
    0x3651_26d9_c20f_fe30,
    0x0176_0d08_7df7_548d,
];
/// G1 generator x
pub const G1_X: [u64; 6] = [
    0xeab9_b16e_b21b_e9ef,
    0xd548_1512_ffcd_394e,
    0x1882_82c8_bd37_cb5c,
    0x8595_1e2c_aa9d_41bb,
    0xc8fc_6225_bf87_ff54,
    0x0088_48de_fe74_0a67,
];
/// G1 generator y
pub const G1_Y: [u64; 6] = [
    0xfd82_de55_559c_8ea6,
    0xc2fe_3d36_34a9_591a,
    0x6d18_2ad4_4fb8_2305,
    0xbd7f_b348_ca3e_52d9,
    0x1f67_4f5d_30af_eec4,
    0x0191_4a69_c510_2eff,
];
pub const G2_X0: [u64; 6] = [
    0x74e3_e48f_7c00_5196,
    0x7188_9f52_bb53_5402,
    0x7ea5_01f5_57db_6b9b,
    0xc565_f071_203e_5031,
    0xc896_30a2_a384_1d01,
    0x0184_80be_71c7_85fe,
];
pub const G2_X1: [u64; 6] = [
    0xb26b_fefa_6ea1_6afe,
    0x5cf8_9984_bff7_6fe6,
    0xe722_3ece_0799_c9de,
    0x5327_77ee_6651_cecb,
    0x70dc_5a51_b1b1_40d5,
    0x00ea_6040_e700_4031,
];
pub const G2_Y0: [u64; 6] = [
    0xf094_0944_09fd_4ddf,
    0xf2cf_8888_6d8c_7c2e,
    0xe458_c282_f832_d204,
    0xde03_ed72_74b4_9a58,
    0xd960_736b_cbb2_efb4,
    0x0069_0d66_5d44_6f7b,
];
pub const G2_Y1: [u64; 6] = [
    0xd9a1_cdd1_85eb_8f93,
    0x4279_b83f_5e52_270b,
    0x2463_b01a_cee3_04c2,
    0x61ef_11ac_3d59_1bf1,
    0x9e54_9da3_151a_70aa,
    0x00f8_169f_d283_5518,
];
/// Cube root of unity with (x, y) -> (BETA x, y) equal to [LAMBDA]
pub const BETA: [u64; 6] = [
    0x8508_c000_0000_0001,
    0x4522_17cc_9000_0000,
    0xc5ed_1347_970d_ec00,
    0x619a_af7d_3459_4aab,
    0x09b3_af05_dd14_f6ec,
    0x0000_0000_0000_0000,
];
pub const LAMBDA: [u64; 6] = [
    0x0a11_8000_0000_0000,
    0x4522_17cc_9000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
