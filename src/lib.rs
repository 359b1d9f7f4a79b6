mod error;
pub use error::AsymError;

mod algo;
pub use algo::{Algo, KeyCodec};

mod hash;
pub use hash::HashId;

pub mod rsa;

use rand_core::CryptoRngCore;

/// Marshal a key into its standard binary encoding.
pub trait Bytes {
    fn to_bytes(&self) -> Result<Vec<u8>, AsymError>;
}

/// Unmarshal a key from its standard binary encoding.
pub trait FromBytes: Sized {
    /// `codec` selects among registered key encodings. Implementations that
    /// support a single encoding accept the value without acting on it.
    fn from_bytes(data: &[u8], codec: KeyCodec) -> Result<Self, AsymError>;
}

pub trait Sign {
    /// Signature over `digest`, which the caller must have computed with the
    /// hash function `hash` names. `rng` feeds the blinding of the
    /// underlying primitive.
    fn sign<R: CryptoRngCore + ?Sized>(
        &self,
        hash: HashId,
        digest: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>, AsymError>;
}

pub trait Verify {
    /// `Ok(())` only when `signature` is cryptographically valid for
    /// `digest` under `hash`. Any mismatch is an error.
    fn verify(&self, hash: HashId, signature: &[u8], digest: &[u8]) -> Result<(), AsymError>;
}
