//! RSA key adapters.
//!
//! = RFC 8017
//!
//! == PKCS #1: RSA Cryptography Specification Version 2.2
//!
//! Key generation, the PKCS#1 DER codec and the PKCS#1 v1.5 signature
//! scheme are all supplied by the `rsa` crate; this module only binds them
//! to the asymmetric-key capability traits of the crate root. No RSA
//! arithmetic lives here.

mod key;
pub use key::{PrivateKey, PublicKey};

mod pkcs1;

#[cfg(test)]
mod tests;
