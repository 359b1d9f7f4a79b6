use std::fmt::{Display, Formatter};

use num_traits::Zero;
use rand_core::CryptoRngCore;
use rsa::pkcs1::{
    DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey,
};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};

use crate::{Algo, AsymError, Bytes, FromBytes, KeyCodec};

/// RSA private key: modulus, exponents, prime factors and the CRT
/// precomputation, all held by the `rsa` crate's key type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrivateKey {
    key: RsaPrivateKey,
}

/// RSA public key: modulus `n` and public exponent `e`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicKey {
    key: RsaPublicKey,
}

impl PrivateKey {
    /// Generate a fresh key pair whose modulus size is picked by `algo`.
    ///
    /// Entropy comes from the caller's `rng`, which must be
    /// cryptographically secure. Prime search for the larger selectors can
    /// take a while.
    pub fn generate<R: CryptoRngCore + ?Sized>(
        algo: Algo,
        rng: &mut R,
    ) -> Result<Self, AsymError> {
        let key = RsaPrivateKey::new(rng, algo.bits())?;
        Ok(Self { key })
    }

    /// Read-only view of the paired public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            key: self.key.to_public_key(),
        }
    }

    pub(super) fn inner(&self) -> &RsaPrivateKey {
        &self.key
    }
}

impl PublicKey {
    /// n
    pub fn modulus(&self) -> &BigUint {
        self.key.n()
    }

    /// e
    pub fn exponent(&self) -> &BigUint {
        self.key.e()
    }

    /// Modulus length in bytes, which is also the signature length.
    pub fn size(&self) -> usize {
        self.key.size()
    }

    pub(super) fn inner(&self) -> &RsaPublicKey {
        &self.key
    }
}

impl Bytes for PrivateKey {
    /// PKCS#1 DER (RFC 8017, `RSAPrivateKey`).
    fn to_bytes(&self) -> Result<Vec<u8>, AsymError> {
        let der = self
            .key
            .to_pkcs1_der()
            .map_err(|e| AsymError::Crypto(e.to_string()))?;
        Ok(der.as_bytes().to_vec())
    }
}

impl FromBytes for PrivateKey {
    // `_codec`: PKCS#1 is the only encoding registered today.
    fn from_bytes(data: &[u8], _codec: KeyCodec) -> Result<Self, AsymError> {
        let mut key = RsaPrivateKey::from_pkcs1_der(data)?;
        key.validate().map_err(|e| AsymError::Decode(e.to_string()))?;
        // restore the CRT values the encoding carries
        key.precompute()
            .map_err(|e| AsymError::Decode(e.to_string()))?;
        Ok(Self { key })
    }
}

impl Bytes for PublicKey {
    /// ASN.1 DER `SEQUENCE { modulus INTEGER, exponent INTEGER }`
    /// (PKCS#1 `RSAPublicKey`).
    fn to_bytes(&self) -> Result<Vec<u8>, AsymError> {
        let der = self
            .key
            .to_pkcs1_der()
            .map_err(|e| AsymError::Crypto(e.to_string()))?;
        Ok(der.as_bytes().to_vec())
    }
}

impl FromBytes for PublicKey {
    // `_codec`: PKCS#1 is the only encoding registered today.
    fn from_bytes(data: &[u8], _codec: KeyCodec) -> Result<Self, AsymError> {
        // `from_pkcs1_der` already rejects trailing data and negative
        // INTEGER fields.
        let key = RsaPublicKey::from_pkcs1_der(data)?;
        if key.n().is_zero() {
            return Err(AsymError::Decode(
                "rsa: modulus is not a positive number".to_string(),
            ));
        }
        if key.e().is_zero() {
            return Err(AsymError::Decode(
                "rsa: public exponent is not a positive number".to_string(),
            ));
        }
        Ok(Self { key })
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(value: &PrivateKey) -> Self {
        value.public_key()
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{n={:#x}, e={:#x}}}", self.key.n(), self.key.e())
    }
}
