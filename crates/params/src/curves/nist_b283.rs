//! NIST binary curves over GF(2^283) with f(x) = x^283 + x^12 + x^7 + x^5 + 1.

/// Field degree
pub const M: usize = 283;
/// Middle exponents of the pentanomial
pub const PENTANOMIAL: [usize; 3] = [12, 7, 5];

/// NIST K-283 (sect283k1): a = 0, b = 1.
pub mod k283 {
    pub const G_X: [u64; 5] = [
        0xb0c2_ac24_5849_2836,
        0x23c1_567a_1687_6913,
        0x62f1_88e5_53cd_265f,
        0x78ca_4488_3f1a_3b81,
        0x0000_0000_0503_213f,
    ];
    pub const G_Y: [u64; 5] = [
        0x4e34_1161_77dd_2259,
        0xe818_4698_e459_6236,
        0x07e5_426f_e87e_45c0,
        0x0f1c_9e31_8d90_f95d,
        0x0000_0000_01cc_da38,
    ];
    pub const N: [u64; 5] = [
        0x9445_1e06_1e16_3c61,
        0x2ed0_7577_265d_ff7f,
        0xffff_ffff_ffff_e9ae,
        0xffff_ffff_ffff_ffff,
        0x0000_0000_01ff_ffff,
    ];
    /// Cofactor
    pub const H: u64 = 4;
}

/// NIST B-283 (sect283r1): a = 1.
pub mod b283 {
    pub const B: [u64; 5] = [
        0xf626_3e31_3b79_a2f5,
        0x4530_9fa2_a581_485a,
        0x19a0_303f_ca97_fd76,
        0xc8b8_596d_a5a4_af8a,
        0x0000_0000_027b_680a,
    ];
    pub const G_X: [u64; 5] = [
        0xf8cd_becd_86b1_2053,
        0x557e_ac9c_80e2_e198,
        0x70b0_dfec_2eed_25b8,
        0x8db7_dd90_e193_4f8c,
        0x0000_0000_05f9_3925,
    ];
    pub const G_Y: [u64; 5] = [
        0x13f0_df45_be81_12f4,
        0x350e_ddb0_8267_79c8,
        0xb20d_02b4_516f_f702,
        0xfe24_141c_b98f_e6d4,
        0x0000_0000_0367_6854,
    ];
    pub const N: [u64; 5] = [
        0x5b04_2a7c_efad_b307,
        0x3996_60fc_938a_9016,
        0xffff_ffff_ffff_ef90,
        0xffff_ffff_ffff_ffff,
        0x0000_0000_03ff_ffff,
    ];
    /// Cofactor
    pub const H: u64 = 2;
}
