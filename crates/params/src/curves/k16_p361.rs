//! KSS16 curve y^2 = x^3 + a x over a 361-bit prime, embedding degree 16,
//! D-type quartic twist over fp4.

/// Base field prime
pub const P: [u64; 6] = [
    0x2448_704d_86bf_9c81,
    0x6a7b_7f1e_a983_4304,
    0x9863_feb2_3246_8917,
    0xa38c_12d1_ebe3_a930,
    0x4e9d_9854_d6e4_151c,
    0x0000_016b_e043_6951,
];
/// Prime subgroup order
pub const R: [u64; 6] = [
    0xbf5d_a8d4_94b1_33b1,
    0x5cf0_48b8_cc4f_711f,
    0x4c6b_093a_4c82_3864,
    0xb1b4_afdd_75e4_393e,
    0x0000_0000_015e_5e6c,
    0x0000_0000_0000_0000,
];
/// Cofactor of G1
pub const H: [u64; 6] = [
    0x7fdf_c600_00fa_00fa,
    0x0000_0000_0001_09de,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G2 on the twist
pub const H2: [u64; 19] = [
    0x6c53_7976_ac58_7102,
    0x0565_f17d_f37d_8338,
    0xd511_cca7_c443_f300,
    0x2bf4_f6db_09ca_ca05,
    0xfd32_d365_fadd_f373,
    0x521b_a6e3_08f7_8c77,
    0x8197_8115_de82_e6b2,
    0x82df_95a6_25e4_ab30,
    0x1182_d54f_d8d4_8eac,
    0x2614_a62f_d616_d73f,
    0x0f9f_77e4_647f_2a18,
    0xef2c_cdad_2894_57c1,
    0x9f97_587f_0673_4fbc,
    0xfa7e_be94_2f7e_18cc,
    0x1e70_2f5d_fce9_ddea,
    0x78e9_5830_f841_8c76,
    0x12eb_800a_670c_88b3,
    0x7fb2_c5b2_bf44_5cb3,
    0x0000_0000_0000_02fb,
];
/// Absolute value of the trace of Frobenius of the G1 curve
pub const T: [u64; 6] = [
    0x7f0e_75a7_d6d9_21a8,
    0x004a_c774_533b_020c,
    0x0022_1f94_2186_6d76,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Trace sign
pub const T_NEG: bool = false;
/// Absolute value of the family seed u
pub const Z_ABS: u64 = 0x20fffffdff;
/// Sign of the family seed u
pub const Z_NEG: bool = false;
/// Linear coefficient of the G1 curve
pub const A: i64 = 10;
/// Constant coefficient of the G1 curve
pub const B: i64 = 0;
/// Quadratic non-residue defining fp2
pub const QNR: i64 = -5;
/// Cubic non-residue defining fp3
pub const CNR: i64 = 10;
/// Non-residue xi = XI.0 + XI.1 * u defining fp4 and fp6
pub const XI: (i64, i64) = (5, 1);
/// Twist type: true for M-type, false for D-type
pub const TWIST_M: bool = false;
/// QNR raised to the odd part of p - 1
pub const TS_ROOT: [u64; 6] = [
    0x2d42_3af2_6032_3e65,
    0x9262_aa99_f7d2_fecd,
    0x6ef3_fc72_d94b_4234,
    0xebf0_b8de_54d8_b523,
    0x4ebd_2a3c_1c02_ae5b,
    0x0000_0064_d504_6450,
];
/// G1 generator x
pub const G1_X: [u64; 6] = [
    0x58b3_facb_ee58_01dc,
    0x7c73_cef7_27cb_bcd7,
    0x2c7f_5002_82ee_3ae4,
    0x396d_c8b8_f36f_9286,
    0xe581_0614_054f_f66a,
    0x0000_00d2_1cbe_638b,
];
/// G1 generator y
pub const G1_Y: [u64; 6] = [
    0x31bd_b000_addf_2995,
    0x7f9f_59fe_9861_5ca7,
    0x8fc3_e2af_b5fc_83c1,
    0x768e_c4df_b432_2f4f,
    0x4f32_ad0d_9d20_a7a6,
    0x0000_010b_39dd_34ef,
];
/// G2 generator x on 1, θ, ..., θ^(e-1) over fp2, low coordinate first
pub const G2_X: [[u64; 6]; 4] = [
    [
        0xe783_31df_8344_ad9b,
        0x532c_94f5_ae67_bddc,
        0xcadb_edb6_6abf_5fdc,
        0x2bb3_d8e7_784a_bb67,
        0x5f2d_ded4_4bd6_ce13,
        0x0000_00fa_2a19_2126,
    ],
    [
        0xc2e7_e758_8a75_c547,
        0x4097_3daf_f206_29c0,
        0xf97c_f5b3_91ba_6226,
        0xb1c8_9825_20f0_1436,
        0xbc20_66ba_6f92_4b3e,
        0x0000_001f_cdb5_e28e,
    ],
    [
        0x1fd6_5e4b_8716_bac9,
        0x27ee_2328_7a90_c861,
        0x8c7f_3f53_e8d1_4a0a,
        0xf6be_6d92_f656_4b12,
        0xd019_bbb0_e059_6e0e,
        0x0000_006c_8d03_e877,
    ],
    [
        0xa98c_efdd_5774_04d2,
        0xba9e_90ca_6a7c_de6f,
        0xf95d_af46_8619_4736,
        0x7408_d95f_8284_d3ca,
        0xb915_76ac_8de2_be42,
        0x0000_00b9_f26d_bda3,
    ],
];
/// G2 generator y
pub const G2_Y: [[u64; 6]; 4] = [
    [
        0x56ad_d996_3975_4e1a,
        0xaa26_3309_53e4_d012,
        0xb3c4_30a6_26c5_4ee6,
        0x38c3_801d_408f_4a91,
        0x74ee_30ff_bdfb_dde1,
        0x0000_0051_452a_9dbb,
    ],
    [
        0x0e6d_5ff6_cb9c_e6ab,
        0x290a_e4fb_b2f1_b907,
        0xd58c_2572_0b2d_e372,
        0xf3a4_1a5e_3507_4ea7,
        0x71a5_0d88_c1e5_8e58,
        0x0000_010c_2ff6_48cf,
    ],
    [
        0xd776_add2_88df_fa38,
        0x19a4_75b4_57bc_b736,
        0x7656_efab_efec_7b3c,
        0xf702_506c_f80f_421b,
        0x440a_a673_333a_038b,
        0x0000_00a5_a495_0065,
    ],
    [
        0x0647_d084_b96b_45a5,
        0x74b3_3ed5_a10e_1fa4,
        0x878f_235b_78fb_894c,
        0xa083_f7b1_1cde_93ef,
        0xa796_58da_eb57_970c,
        0x0000_0150_7a8a_ef89,
    ],
];
