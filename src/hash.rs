use rsa::Pkcs1v15Sign;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::AsymError;

/// Registered hash functions usable for PKCS#1 v1.5 signatures.
///
/// On the wire a hash is named by a 4-byte big-endian tag; signer and
/// verifier have to agree on the numbering out of band. The discriminants
/// follow the platform hash registry of the enclosing key library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum HashId {
    Sha1 = 3,
    Sha224 = 4,
    Sha256 = 5,
    Sha384 = 6,
    Sha512 = 7,
    Sha3_224 = 10,
    Sha3_256 = 11,
    Sha3_384 = 12,
    Sha3_512 = 13,
    Sha512_224 = 14,
    Sha512_256 = 15,
}

impl HashId {
    /// Length of the wire tag.
    pub const WIRE_LEN: usize = 4;

    /// Decode a 4-byte big-endian tag. `tag` must be exactly
    /// [`WIRE_LEN`](Self::WIRE_LEN) bytes.
    pub fn from_be_bytes(tag: &[u8]) -> Result<Self, AsymError> {
        let tag: [u8; Self::WIRE_LEN] = tag.try_into().map_err(|_| {
            AsymError::InvalidParameter(format!(
                "hash tag must be {} bytes, got {}",
                Self::WIRE_LEN,
                tag.len()
            ))
        })?;

        Self::try_from(u32::from_be_bytes(tag))
    }

    pub const fn to_be_bytes(self) -> [u8; Self::WIRE_LEN] {
        (self as u32).to_be_bytes()
    }

    /// Digest length in bytes of the named hash function.
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha3_224 | Self::Sha512_224 => 28,
            Self::Sha256 | Self::Sha3_256 | Self::Sha512_256 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 => 64,
        }
    }

    pub(crate) fn pkcs1v15(self) -> Pkcs1v15Sign {
        match self {
            Self::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
            Self::Sha224 => Pkcs1v15Sign::new::<Sha224>(),
            Self::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            Self::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            Self::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
            Self::Sha3_224 => Pkcs1v15Sign::new::<Sha3_224>(),
            Self::Sha3_256 => Pkcs1v15Sign::new::<Sha3_256>(),
            Self::Sha3_384 => Pkcs1v15Sign::new::<Sha3_384>(),
            Self::Sha3_512 => Pkcs1v15Sign::new::<Sha3_512>(),
            Self::Sha512_224 => Pkcs1v15Sign::new::<Sha512_224>(),
            Self::Sha512_256 => Pkcs1v15Sign::new::<Sha512_256>(),
        }
    }

    /// Every registered hash id.
    pub const ALL: [HashId; 11] = [
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Sha512_224,
        Self::Sha512_256,
    ];
}

impl TryFrom<u32> for HashId {
    type Error = AsymError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            3 => Ok(Self::Sha1),
            4 => Ok(Self::Sha224),
            5 => Ok(Self::Sha256),
            6 => Ok(Self::Sha384),
            7 => Ok(Self::Sha512),
            10 => Ok(Self::Sha3_224),
            11 => Ok(Self::Sha3_256),
            12 => Ok(Self::Sha3_384),
            13 => Ok(Self::Sha3_512),
            14 => Ok(Self::Sha512_224),
            15 => Ok(Self::Sha512_256),
            _ => Err(AsymError::InvalidParameter(format!(
                "unregistered hash id `{id}`"
            ))),
        }
    }
}
