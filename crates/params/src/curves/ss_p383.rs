//! Supersingular curve y^2 = x^3 + x over a 383-bit prime p = 3 mod 4,
//! embedding degree 2. The distortion map (x, y) -> (-x, i y) plays the role
//! of the twist.

/// Base field prime
pub const P: [u64; 6] = [
    0x0000_0000_0002_8a27,
    0x8000_0000_0000_0000,
    0x0000_0000_0000_002f,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_036c,
    0x4000_0000_0000_0000,
];
/// Prime subgroup order
pub const R: [u64; 6] = [
    0x0000_0000_0000_005f,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x8000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G1
pub const H: [u64; 6] = [
    0x0000_0000_0000_06d8,
    0x8000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G2 on the twist
pub const H2: [u64; 2] = [
    0x0000_0000_0000_06d8,
    0x8000_0000_0000_0000,
];
/// Absolute value of the trace of Frobenius of the G1 curve
pub const T: [u64; 6] = [
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Trace sign
pub const T_NEG: bool = false;
/// Linear coefficient of the G1 curve
pub const A: i64 = 1;
/// Constant coefficient of the G1 curve
pub const B: i64 = 0;
/// Quadratic non-residue defining fp2
pub const QNR: i64 = -1;
/// Cubic non-residue defining fp3
pub const CNR: i64 = 3;
/// Non-residue xi = XI.0 + XI.1 * u defining fp4 and fp6
pub const XI: (i64, i64) = (6, 1);
/// Twist type: true for M-type, false for D-type
pub const TWIST_M: bool = false;
/// QNR raised to the odd part of p - 1
pub const TS_ROOT: [u64; 6] = [
    0x0000_0000_0002_8a26,
    0x8000_0000_0000_0000,
    0x0000_0000_0000_002f,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_036c,
    0x4000_0000_0000_0000,
];
/// G1 generator x
pub const G1_X: [u64; 6] = [
    0x75f6_dbc5_036e_ee1c,
    0x524f_0c40_c29d_6640,
    0xd7ab_153e_ffbb_1508,
    0x67a9_6cf0_ef2e_8663,
    0xeee8_220f_4326_7e8a,
    0x13bc_c551_8138_5323,
];
/// G1 generator y
pub const G1_Y: [u64; 6] = [
    0x7e47_8696_417c_e43a,
    0xa284_bf14_b240_5301,
    0x6572_b027_1440_9373,
    0xf4ab_c815_f90a_bfe3,
    0xc1cd_8c4b_4f41_036f,
    0x1186_75e3_ab87_c9f8,
];
/// G2 generator x, equal to the G1 generator
pub const G2_X: [[u64; 6]; 1] = [G1_X];
/// G2 generator y
pub const G2_Y: [[u64; 6]; 1] = [G1_Y];
