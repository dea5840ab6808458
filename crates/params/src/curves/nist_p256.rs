//! NIST P-256 (secp256r1).

/// Base field prime
pub const P: [u64; 6] = [
    0xffff_ffff_ffff_ffff,
    0x0000_0000_ffff_ffff,
    0x0000_0000_0000_0000,
    0xffff_ffff_0000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Coefficient a
pub const A: i64 = -3;
/// Coefficient b
pub const B: [u64; 6] = [
    0x3bce_3c3e_27d2_604b,
    0x651d_06b0_cc53_b0f6,
    0xb3eb_bd55_7698_86bc,
    0x5ac6_35d8_aa3a_93e7,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const G_X: [u64; 6] = [
    0xf4a1_3945_d898_c296,
    0x7703_7d81_2deb_33a0,
    0xf8bc_e6e5_63a4_40f2,
    0x6b17_d1f2_e12c_4247,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const G_Y: [u64; 6] = [
    0xcbb6_4068_37bf_51f5,
    0x2bce_3357_6b31_5ece,
    0x8ee7_eb4a_7c0f_9e16,
    0x4fe3_42e2_fe1a_7f9b,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Group order
pub const N: [u64; 6] = [
    0xf3b9_cac2_fc63_2551,
    0xbce6_faad_a717_9e84,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Quadratic non-residue
pub const QNR: i64 = -1;
/// SSWU parameter Z
pub const SSWU_Z: i64 = -10;
pub const TS_ROOT: [u64; 6] = [
    0xffff_ffff_ffff_fffe,
    0x0000_0000_ffff_ffff,
    0x0000_0000_0000_0000,
    0xffff_ffff_0000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
