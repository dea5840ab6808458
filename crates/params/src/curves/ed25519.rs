//! Ed25519 twisted Edwards curve -x^2 + y^2 = 1 + d x^2 y^2 and its Montgomery form Curve25519.

/// Base field prime 2^255 - 19
pub const P: [u64; 6] = [
    0xffff_ffff_ffff_ffed,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x7fff_ffff_ffff_ffff,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Coefficient d
pub const D: [u64; 6] = [
    0x75eb_4dca_1359_78a3,
    0x0070_0a4d_4141_d8ab,
    0x8cc7_4079_7779_e898,
    0x5203_6cee_2b6f_fe73,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const G_X: [u64; 6] = [
    0xc956_2d60_8f25_d51a,
    0x692c_c760_9525_a7b2,
    0xc0a4_e231_fdd6_dc5c,
    0x2169_36d3_cd6e_53fe,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
pub const G_Y: [u64; 6] = [
    0x6666_6666_6666_6658,
    0x6666_6666_6666_6666,
    0x6666_6666_6666_6666,
    0x6666_6666_6666_6666,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Prime subgroup order
pub const L: [u64; 6] = [
    0x5812_631a_5cf5_d3ed,
    0x14de_f9de_a2f7_9cd6,
    0x0000_0000_0000_0000,
    0x1000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
/// Cofactor
pub const H: u64 = 8;
/// Montgomery coefficient J of Curve25519
pub const MONT_J: u64 = 486662;
/// Quadratic non-residue
pub const QNR: i64 = 2;
pub const TS_ROOT: [u64; 6] = [
    0xc4ee_1b27_4a0e_a0b0,
    0x2f43_1806_ad2f_e478,
    0x2b4d_0099_3dfb_d7a7,
    0x2b83_2480_4fc1_df0b,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
