//! BN curve over a 254-bit prime (Nogami et al.), embedding degree 12, D-type sextic twist.

/// Base field prime
pub const P: [u64; 6] = [
    0xa700_0000_0000_0013,
    0x6121_0000_0000_0013,
    0xba34_4d80_0000_0008,
    0x2523_6482_4000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Prime subgroup order
pub const R: [u64; 6] = [
    0xa100_0000_0000_000d,
    0xff9f_8000_0000_0010,
    0xba34_4d80_0000_0007,
    0x2523_6482_4000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor of G1
pub const H: [u64; 6] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Absolute value of the trace of Frobenius of the G1 curve
pub const T: [u64; 6] = [
    0x0600_0000_0000_0007,
    0x6181_8000_0000_0003,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Trace sign
pub const T_NEG: bool = false;
/// Absolute value of the family seed z
pub const Z_ABS: u64 = 0x4080000000000001;
/// Sign of the family seed z
pub const Z_NEG: bool = true;
/// Constant coefficient of the G1 curve y^2 = x^3 + b
pub const B: i64 = 2;
/// Quadratic non-residue defining fp2
pub const QNR: i64 = -1;
/// Cubic non-residue defining fp3
pub const CNR: i64 = 2;
/// Non-residue xi = XI.0 + XI.1 * u defining fp4 and fp6
pub const XI: (i64, i64) = (1, 1);
/// Twist type: true for M-type, false for D-type
pub const TWIST_M: bool = false;
/// QNR raised to the odd part of p - 1
pub const TS_ROOT: [u64; 6] = [
    0xa700_0000_0000_0012,
    0x6121_0000_0000_0013,
    0xba34_4d80_0000_0008,
    0x2523_6482_4000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// G1 generator x
pub const G1_X: [u64; 6] = [
    0xa700_0000_0000_0012,
    0x6121_0000_0000_0013,
    0xba34_4d80_0000_0008,
    0x2523_6482_4000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// G1 generator y
pub const G1_Y: [u64; 6] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const G2_X0: [u64; 6] = [
    0x91ee_4224_c803_fb2b,
    0xa464_8bbb_4898_bf0d,
    0xeb8d_8c7e_8c61_edb6,
    0x061a_10bb_519e_b62f,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const G2_X1: [u64; 6] = [
    0x0d8c_34c1_e7d5_4cf3,
    0x1f4d_746b_ae37_84b7,
    0x310a_a78c_5982_aa5b,
    0x0516_aaf9_ba73_7833,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const G2_Y0: [u64; 6] = [
    0x19f0_e078_91cd_2b9a,
    0x29bd_0ae6_bdbe_09bd,
    0x9a90_e096_698c_8223,
    0x0218_97a0_6baf_9343,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const G2_Y1: [u64; 6] = [
    0x8a2d_1aec_6b3a_ce9b,
    0xb090_06ff_d739_c957,
    0x8f6d_4456_f5f3_8d37,
    0x0ebb_2b0e_7c8b_1526,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cube root of unity with (x, y) -> (BETA x, y) equal to [LAMBDA]
pub const BETA: [u64; 6] = [
    0xcd80_0000_0000_0007,
    0x4909_0000_0000_0006,
    0x49b3_6240_0000_0002,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const LAMBDA: [u64; 6] = [
    0xa700_0000_0000_0016,
    0xb696_8000_0000_0013,
    0x9366_c480_0000_0005,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
