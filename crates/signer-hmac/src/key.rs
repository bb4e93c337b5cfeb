//! Signing-key derivation.
//!
//! The client secret is never the final HMAC key. It is folded through the
//! signing party's key, the client id and the literal `signer`:
//!
//! ```text
//! k1      = HMAC(client_secret, self_key)
//! k2      = HMAC(k1, client_id)
//! signing = HMAC(k2, "signer")
//! ```

use std::fmt;

use signer_core::SignerIdentity;

/// Terminal usage label of the derivation chain.
const USAGE: &str = "signer";

/// Raw derived key bytes. `Debug` never prints them.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey(<{} bytes redacted>)", self.0.len())
    }
}

/// Derive the per-identity signing key.
pub fn derive_signing_key(identity: &SignerIdentity) -> SigningKey {
    let algo = identity.algo();
    let self_key_sign = algo.hmac(identity.client_secret().as_bytes(), identity.self_key().as_bytes());
    let client_id_sign = algo.hmac(&self_key_sign, identity.client_id().as_bytes());
    SigningKey(algo.hmac(&client_id_sign, USAGE.as_bytes()))
}
