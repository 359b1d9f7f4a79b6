//! PKCS#1 v1.5 signatures over caller-supplied digests (RFC 8017,
//! section 8.2).

use rand_core::CryptoRngCore;

use crate::rsa::{PrivateKey, PublicKey};
use crate::{AsymError, HashId, Sign, Verify};

impl Sign for PrivateKey {
    /// `digest` must be exactly [`hash.digest_len()`](HashId::digest_len)
    /// bytes; the primitive rejects any other length. Signing itself is
    /// deterministic, `rng` only feeds the blinding.
    fn sign<R: CryptoRngCore + ?Sized>(
        &self,
        hash: HashId,
        digest: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>, AsymError> {
        let mut rng = rng;
        self.inner()
            .sign_with_rng(&mut rng, hash.pkcs1v15(), digest)
            .map_err(AsymError::from)
    }
}

impl Verify for PublicKey {
    /// Verification always uses this key's own modulus and exponent; there
    /// is no external key selection.
    fn verify(&self, hash: HashId, signature: &[u8], digest: &[u8]) -> Result<(), AsymError> {
        self.inner()
            .verify(hash.pkcs1v15(), digest, signature)
            .map_err(AsymError::from)
    }
}
