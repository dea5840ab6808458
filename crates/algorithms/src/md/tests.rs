use super::*;
use crate::error::ErrorKind;
use crate::fp::{Bls381, Fp, NistP256};
use crate::fpx::Fp2;

const DST: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128";

#[test]
fn test_sha256() {
    assert_eq!(
        hex::encode(sha256(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_expand_message_xmd_vectors() {
    let cases: [(&[u8], usize, &str); 3] = [
        (b"", 0x20, "68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235"),
        (b"abc", 0x20, "d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615"),
        (
            b"",
            0x80,
            "af84c27ccfd45d41914fdff5df25293e221afc53d8ad2ac06d5e3e29485dadbe\
             e0d121587713a3e0dd4d5e69e93eb7cd4f5df4cd103e188cf60cb02edc3edf18\
             eda8576c412b18ffb658e3dd6ec849469b979d444cf7b26911a08e63cf31f9dc\
             c541708d3491184472c2c29bb749d4286b004ceb5ee6b9a7fa5b646c993f0ced",
        ),
    ];
    for (msg, len, expected) in cases {
        assert_eq!(hex::encode(expand_message_xmd(msg, DST, len).unwrap()), expected);
    }
}

#[test]
fn test_expand_message_limits() {
    let err = expand_message_xmd(b"m", DST, 255 * 32 + 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoBuffer);
    let long = [b'd'; 256];
    let err = expand_message_xmd(b"m", &long, 32).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoBuffer);
    assert_eq!(expand_message_xmd(b"m", DST, 255 * 32).unwrap().len(), 255 * 32);
}

#[test]
fn test_hash_to_field() {
    let a: Vec<Fp<NistP256>> = hash_to_field(b"abc", DST, 2).unwrap();
    let b: Vec<Fp<NistP256>> = hash_to_field(b"abc", DST, 2).unwrap();
    assert_eq!(a, b);
    assert_ne!(a[0], a[1]);
    assert_eq!(field_chunk::<NistP256>(), 48);
    assert_eq!(field_chunk::<Bls381>(), 64);

    let c: Vec<Fp2<Bls381>> = hash_to_field(b"abc", b"other", 3).unwrap();
    assert_eq!(c.len(), 3);
    assert_ne!(c[0].c0, c[0].c1);
}
