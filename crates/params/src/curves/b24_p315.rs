//! BLS24 curve over a 315-bit prime, embedding degree 24, D-type sextic
//! twist over fp4.

/// Base field prime
pub const P: [u64; 6] = [
    0x6fe8_02ff_4030_0001,
    0x421e_e5da_52bd_e502,
    0xdec1_d01a_a27a_1ae0,
    0xd3f7_498b_e97c_5eaf,
    0x04c2_3a02_b586_d650,
    0x0000_0000_0000_0000,
];
/// Prime subgroup order
pub const R: [u64; 6] = [
    0x19d0_c5fd_00c0_0001,
    0xc8c4_80ec_e644_e364,
    0x25fc_7ec9_cf92_7a98,
    0x196d_eac2_4a9d_a12b,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G1
pub const H: [u64; 6] = [
    0x2fe8_0300_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G2 on the twist
pub const H2: [u64; 16] = [
    0xdf10_1e00_0000_0001,
    0xc6fe_9ac0_018b_940a,
    0x15b5_2c02_797e_31a2,
    0xcd34_eace_3e7e_7012,
    0x83eb_09e6_f58e_9055,
    0x98dd_4b37_3acd_eee1,
    0xfe00_fe2b_41ef_dc36,
    0xbf73_a8d2_cc43_9fff,
    0x469c_774c_b87c_d287,
    0x7a0d_ded7_e599_b628,
    0xb006_9213_2286_1513,
    0x4466_02b3_ec97_c88d,
    0x9f9a_3e8f_2181_1c01,
    0xa3d2_0ecd_4e89_3c62,
    0xcf9c_5e2d_1e97_44e1,
    0x0000_142a_7679_1a4e,
];
/// Absolute value of the trace of Frobenius of the G1 curve
pub const T: [u64; 6] = [
    0x0000_0000_bfcf_fffe,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Trace sign
pub const T_NEG: bool = true;
/// Absolute value of the family seed u
pub const Z_ABS: u64 = 0xbfcfffff;
/// Sign of the family seed u
pub const Z_NEG: bool = true;
/// Constant coefficient of the G1 curve
pub const B: i64 = 1;
/// Quadratic non-residue defining fp2
pub const QNR: i64 = -13;
/// Cubic non-residue defining fp3
pub const CNR: i64 = 13;
/// Non-residue xi = XI.0 + XI.1 * u defining fp4 and fp6
pub const XI: (i64, i64) = (0, 1);
/// Twist type: true for M-type, false for D-type
pub const TWIST_M: bool = false;
/// QNR raised to the odd part of p - 1
pub const TS_ROOT: [u64; 6] = [
    0x47b8_3fad_c531_46d0,
    0xe9d4_ab61_a384_d545,
    0x35d1_9ab2_b230_3d3a,
    0x9746_2305_335d_526d,
    0x0429_11c4_4a89_5076,
    0x0000_0000_0000_0000,
];
/// G1 generator x
pub const G1_X: [u64; 6] = [
    0xbf4b_7217_1086_6097,
    0x9836_03a8_32cb_638d,
    0xf54b_344c_c46d_de3c,
    0xa1b2_b117_076e_f6e4,
    0x041a_0a42_4393_988d,
    0x0000_0000_0000_0000,
];
/// G1 generator y
pub const G1_Y: [u64; 6] = [
    0x6f29_22d5_da4e_4e5f,
    0xd3cc_e905_9e83_dfb9,
    0xb5d7_2c8a_2901_0871,
    0x227e_cdf0_db2b_b2eb,
    0x02e6_f83c_55de_ff20,
    0x0000_0000_0000_0000,
];
/// G2 generator x on 1, θ, ..., θ^(e-1) over fp2, low coordinate first
pub const G2_X: [[u64; 6]; 4] = [
    [
        0x642b_8541_e7dd_947e,
        0x3286_e46a_38ea_b3ff,
        0xd1d3_d169_76d6_25a2,
        0x07bc_53ee_c5fc_1f12,
        0x02cc_78cd_f39e_df00,
        0x0000_0000_0000_0000,
    ],
    [
        0x24a1_f773_de05_ecdb,
        0xcf73_f4fa_d51a_ae6f,
        0xffc3_2aaf_cbab_98b8,
        0x520e_d56f_8f69_d752,
        0x049d_2f91_4c7e_2707,
        0x0000_0000_0000_0000,
    ],
    [
        0xce4e_4c10_1a20_6d7e,
        0xbebe_0421_7549_f144,
        0xf262_b449_efb1_443b,
        0xf07f_7fb9_07b5_954e,
        0x02d0_fd27_dab2_0b1b,
        0x0000_0000_0000_0000,
    ],
    [
        0x08c6_99d3_f21d_e088,
        0x45f4_cea7_20ac_d226,
        0x5b84_c2da_488a_f5d2,
        0x3bf1_8914_d97f_3cd6,
        0x03af_90b7_cd38_f2bb,
        0x0000_0000_0000_0000,
    ],
];
/// G2 generator y
pub const G2_Y: [[u64; 6]; 4] = [
    [
        0xd2d0_b1c3_0812_9dcf,
        0xc314_f2d4_9957_3d9c,
        0x1cea_ea36_a211_17b5,
        0xb037_f6aa_85eb_4bce,
        0x00a0_cec4_56cd_e9e6,
        0x0000_0000_0000_0000,
    ],
    [
        0xb423_ec16_b235_3e54,
        0xd102_9dc5_6cf7_cd4b,
        0x81cb_3564_11b3_ebde,
        0xf324_8252_4b4b_7630,
        0x0298_7a43_d643_094e,
        0x0000_0000_0000_0000,
    ],
    [
        0x6cd4_e10d_d489_d567,
        0x58f5_3461_84cc_a68f,
        0x0830_56e4_5379_25b9,
        0xf48c_b6af_510c_e078,
        0x00aa_d374_5c5f_c8d3,
        0x0000_0000_0000_0000,
    ],
    [
        0x3bc0_5b88_1610_1a13,
        0x78e3_d2c6_603c_eaab,
        0xe348_9352_bd9b_6178,
        0x509a_7c91_0665_f4b3,
        0x0383_47f9_4020_faa4,
        0x0000_0000_0000_0000,
    ],
];
/// Cube root of unity with (x, y) -> (BETA x, y) equal to [LAMBDA]
pub const BETA: [u64; 6] = [
    0x208f_ee00_bfcf_fffe,
    0xf363_3329_5b41_50f8,
    0xf521_70eb_98f1_5488,
    0xe664_10d7_4163_012d,
    0x0000_0000_130d_ab75,
    0x0000_0000_0000_0000,
];
pub const LAMBDA: [u64; 6] = [
    0xfb80_9000_0000_0000,
    0x7815_6293_a4b0_3459,
    0x25fc_7ec9_cf92_7a98,
    0x196d_eac2_4a9d_a12b,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
