//! SECG secp256k1.

/// Base field prime
pub const P: [u64; 6] = [
    0xffff_fffe_ffff_fc2f,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Coefficient b of y^2 = x^3 + b
pub const B: i64 = 7;
pub const G_X: [u64; 6] = [
    0x59f2_815b_16f8_1798,
    0x029b_fcdb_2dce_28d9,
    0x55a0_6295_ce87_0b07,
    0x79be_667e_f9dc_bbac,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const G_Y: [u64; 6] = [
    0x9c47_d08f_fb10_d4b8,
    0xfd17_b448_a685_5419,
    0x5da4_fbfc_0e11_08a8,
    0x483a_da77_26a3_c465,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Group order
pub const N: [u64; 6] = [
    0xbfd2_5e8c_d036_4141,
    0xbaae_dce6_af48_a03b,
    0xffff_ffff_ffff_fffe,
    0xffff_ffff_ffff_ffff,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cube root of unity for the GLV endomorphism
pub const BETA: [u64; 6] = [
    0xc139_6c28_7195_01ee,
    0x9cf0_4975_12f5_8995,
    0x6e64_479e_ac34_34e9,
    0x7ae9_6a2b_657c_0710,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const LAMBDA: [u64; 6] = [
    0xdf02_967c_1b23_bd72,
    0x122e_22ea_2081_6678,
    0xa526_1c02_8812_645a,
    0x5363_ad4c_c05c_30e0,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Quadratic non-residue
pub const QNR: i64 = -1;
pub const TS_ROOT: [u64; 6] = [
    0xffff_fffe_ffff_fc2e,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
