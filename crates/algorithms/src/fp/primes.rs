//! Named prime fields

use relic_params::curves::{
    b12_p377, b12_p381, b24_p315, b48_p378, bn_p254, ed25519, k16_p361, k18_p372, nist_p256, secg_k256,
    ss_p383,
};

use super::{FpParams, Limbs};

macro_rules! prime_field {
    ($(#[$doc:meta])* $name:ident, $label:expr, $m:ident, cnr = $cnr:expr, xi = $xi:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl FpParams for $name {
            const NAME: &'static str = $label;
            const MODULUS: Limbs = $m::P;
            const QNR: i64 = $m::QNR;
            const CNR: i64 = $cnr;
            const XI: (i64, i64) = $xi;
            const TS_ROOT: Limbs = $m::TS_ROOT;
        }
    };
}

prime_field!(
    /// 254-bit prime of the Nogami BN curve
    Bn254, "BN-P254", bn_p254, cnr = bn_p254::CNR, xi = bn_p254::XI
);
prime_field!(
    /// 381-bit prime of BLS12-381
    Bls381, "B12-P381", b12_p381, cnr = b12_p381::CNR, xi = b12_p381::XI
);
prime_field!(
    /// 377-bit prime of BLS12-377, with 2-adicity 46
    Bls377, "B12-P377", b12_p377, cnr = b12_p377::CNR, xi = b12_p377::XI
);
prime_field!(
    /// 315-bit prime of the BLS24 curve
    Bls315, "B24-P315", b24_p315, cnr = b24_p315::CNR, xi = b24_p315::XI
);
prime_field!(
    /// 378-bit prime of the BLS48 curve
    Bls378, "B48-P378", b48_p378, cnr = b48_p378::CNR, xi = b48_p378::XI
);
prime_field!(
    /// 361-bit prime of the KSS16 curve
    Kss361, "K16-P361", k16_p361, cnr = k16_p361::CNR, xi = k16_p361::XI
);
prime_field!(
    /// 372-bit prime of the KSS18 curve
    Kss372, "K18-P372", k18_p372, cnr = k18_p372::CNR, xi = k18_p372::XI
);
prime_field!(
    /// 383-bit prime p = 3 mod 4 of the supersingular curve
    Ss383, "SS-P383", ss_p383, cnr = ss_p383::CNR, xi = ss_p383::XI
);
prime_field!(
    /// NIST P-256 prime
    NistP256, "NIST-P256", nist_p256, cnr = 0, xi = (0, 0)
);
prime_field!(
    /// secp256k1 prime
    SecgK256, "SECG-K256", secg_k256, cnr = 0, xi = (0, 0)
);
prime_field!(
    /// 2^255 - 19
    Curve25519, "CURVE-25519", ed25519, cnr = 0, xi = (0, 0)
);
