use std::sync::OnceLock;

use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use super::{PrivateKey, PublicKey};
use crate::{Algo, AsymError, Bytes, FromBytes, HashId, KeyCodec, Sign, Verify};

// 2048-bit generation is slow enough that the suite shares one key.
fn testkey() -> &'static PrivateKey {
    static KEY: OnceLock<PrivateKey> = OnceLock::new();
    KEY.get_or_init(|| PrivateKey::generate(Algo::Rsa2048, &mut OsRng).unwrap())
}

#[test]
fn private_key_der_round_trip() {
    let key = testkey();
    let der = key.to_bytes().unwrap();
    let decoded = PrivateKey::from_bytes(&der, KeyCodec::default()).unwrap();
    assert_eq!(key, &decoded);
    assert_eq!(key.public_key(), decoded.public_key());
}

#[test]
fn public_key_der_round_trip() {
    let pk = testkey().public_key();
    let der = pk.to_bytes().unwrap();
    let decoded = PublicKey::from_bytes(&der, KeyCodec::default()).unwrap();
    assert_eq!(pk, decoded);
    assert_eq!(pk.modulus(), decoded.modulus());
    assert_eq!(pk.exponent(), decoded.exponent());
}

#[test]
fn sign_verify_all_registered_hashes() {
    let (key, pk) = (testkey(), testkey().public_key());

    for hash in HashId::ALL {
        let digest = vec![0xa5u8; hash.digest_len()];
        let sig = key.sign(hash, &digest, &mut OsRng).unwrap();
        assert_eq!(sig.len(), pk.size());
        pk.verify(hash, &sig, &digest).unwrap();
    }
}

#[test]
fn verify_rejects_tampered_digest() {
    let (key, pk) = (testkey(), testkey().public_key());
    let digest = Sha256::digest(b"tsumugi").to_vec();
    let sig = key.sign(HashId::Sha256, &digest, &mut OsRng).unwrap();

    let mut bad = digest.clone();
    bad[0] ^= 1;
    let err = pk.verify(HashId::Sha256, &sig, &bad).unwrap_err();
    assert!(matches!(err, AsymError::Crypto(_)), "{err}");
}

#[test]
fn verify_rejects_wrong_hash_id() {
    let (key, pk) = (testkey(), testkey().public_key());
    let digest = [0u8; 32];
    let sig = key.sign(HashId::Sha256, &digest, &mut OsRng).unwrap();
    assert!(pk.verify(HashId::Sha3_256, &sig, &digest).is_err());
}

#[test]
fn sign_rejects_wrong_digest_length() {
    let key = testkey();
    let digest = [0u8; 20];
    let err = key.sign(HashId::Sha256, &digest, &mut OsRng).unwrap_err();
    assert!(matches!(err, AsymError::Crypto(_)), "{err}");
}

#[test]
fn public_key_decode_rejects_trailing_byte() {
    let mut der = testkey().public_key().to_bytes().unwrap();
    der.push(0);
    let err = PublicKey::from_bytes(&der, KeyCodec::default()).unwrap_err();
    assert!(matches!(err, AsymError::Decode(_)), "{err}");
}

#[test]
fn public_key_decode_rejects_nonpositive_modulus() {
    // SEQUENCE { INTEGER 0, INTEGER 65537 }
    let zero_n = [
        0x30, 0x08, 0x02, 0x01, 0x00, 0x02, 0x03, 0x01, 0x00, 0x01,
    ];
    let err = PublicKey::from_bytes(&zero_n, KeyCodec::default()).unwrap_err();
    assert!(matches!(err, AsymError::Decode(_)), "{err}");

    // SEQUENCE { INTEGER -128, INTEGER 65537 }
    let negative_n = [
        0x30, 0x08, 0x02, 0x01, 0x80, 0x02, 0x03, 0x01, 0x00, 0x01,
    ];
    let err = PublicKey::from_bytes(&negative_n, KeyCodec::default()).unwrap_err();
    assert!(matches!(err, AsymError::Decode(_)), "{err}");
}

#[test]
fn private_key_decode_rejects_garbage() {
    let err = PrivateKey::from_bytes(&[0x30, 0x03, 0x02, 0x01, 0x00], KeyCodec::default())
        .unwrap_err();
    assert!(matches!(err, AsymError::Decode(_)), "{err}");
}

// 2048-bit key, private DER round trip, SHA-256 over the all-zero digest,
// verify with the derived public key, then corrupt the signature.
#[test]
fn sha256_sign_verify_scenario() {
    let der = testkey().to_bytes().unwrap();
    let key = PrivateKey::from_bytes(&der, KeyCodec::default()).unwrap();
    let pk = key.public_key();

    let hash = HashId::from_be_bytes(&[0, 0, 0, 5]).unwrap();
    assert_eq!(hash, HashId::Sha256);

    let digest = [0u8; 32];
    let mut sig = key.sign(hash, &digest, &mut OsRng).unwrap();
    pk.verify(hash, &sig, &digest).unwrap();

    sig[7] ^= 0xff;
    assert!(pk.verify(hash, &sig, &digest).is_err());
}
