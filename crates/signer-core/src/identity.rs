//! The immutable identity a signer signs under.

use std::fmt;

use crate::algorithm::HashAlgo;

/// Identifier of the signing party used when none is configured.
pub const DEFAULT_SELF_KEY: &str = "WePay";

/// `client_id`/`client_secret` keypair plus the signing party's `self_key`
/// and hash algorithm.
///
/// Fields are private and never change after construction, so one identity
/// can be shared across threads without locking. `Debug` redacts the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct SignerIdentity {
    client_id: String,
    client_secret: String,
    self_key: String,
    algo: HashAlgo,
}

impl SignerIdentity {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        self_key: impl Into<String>,
        algo: HashAlgo,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            self_key: self_key.into(),
            algo,
        }
    }

    /// Public half of the client keypair.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Private half of the client keypair.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Identifier of the signing party.
    pub fn self_key(&self) -> &str {
        &self.self_key
    }

    pub fn algo(&self) -> HashAlgo {
        self.algo
    }
}

impl fmt::Debug for SignerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerIdentity")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("self_key", &self.self_key)
            .field("algo", &self.algo)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let id = SignerIdentity::new("12173158495", "1594122c5c36f438f8ba", DEFAULT_SELF_KEY, HashAlgo::Sha512);
        let dbg = format!("{id:?}");
        assert!(dbg.contains("12173158495"));
        assert!(dbg.contains("<redacted>"));
        assert!(!dbg.contains("1594122c5c36f438f8ba"));
    }

    #[test]
    fn identity_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SignerIdentity>();
    }
}
