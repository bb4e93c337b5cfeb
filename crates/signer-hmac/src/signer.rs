//! The public [`Signer`].
//!
//! A signer is built once from a client keypair and then signs any number of
//! payloads. The signing key and scope depend only on the identity, so they
//! are derived at construction; `sign` only canonicalizes the payload, builds
//! the string-to-sign and computes one HMAC.
//!
//! `sign` does not check for the conventional `token`, `page` and
//! `redirect_uri` fields. Whatever is supplied gets signed; callers that need
//! those fields must enforce their presence themselves.

use signer_core::{HashAlgo, Payload, SignerConfig, SignerError, SignerIdentity, DEFAULT_SELF_KEY};
use tracing::{debug, trace};

use crate::context;
use crate::key::{SigningKey, derive_signing_key};
use crate::scope::create_scope;
use crate::string_to_sign::create_string_to_sign;

/// Signs payloads on behalf of a client keypair.
///
/// Immutable after construction; share it freely (`&Signer` or `Arc<Signer>`)
/// across threads.
#[derive(Debug, Clone)]
pub struct Signer {
    identity: SignerIdentity,
    scope: String,
    signing_key: SigningKey,
}

impl Signer {
    /// Signer with the default `self_key` (`WePay`) and SHA-512.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::with_options(client_id, client_secret, DEFAULT_SELF_KEY, HashAlgo::default())
    }

    pub fn with_options(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        self_key: impl Into<String>,
        algo: HashAlgo,
    ) -> Self {
        Self::from_identity(SignerIdentity::new(client_id, client_secret, self_key, algo))
    }

    /// Like [`with_options`](Self::with_options), resolving the algorithm by name.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::InvalidAlgorithm`] if `algo` is not a supported
    /// hash algorithm.
    pub fn with_algorithm_name(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        self_key: impl Into<String>,
        algo: &str,
    ) -> Result<Self, SignerError> {
        let algo: HashAlgo = algo.parse()?;
        Ok(Self::with_options(client_id, client_secret, self_key, algo))
    }

    pub fn from_config(config: &SignerConfig) -> Result<Self, SignerError> {
        config.validate()?;
        Ok(Self::from_identity(config.identity()))
    }

    pub fn from_identity(identity: SignerIdentity) -> Self {
        let scope = create_scope(&identity);
        let signing_key = derive_signing_key(&identity);
        trace!(scope = %scope, "scope built");
        debug!(
            client_id = identity.client_id(),
            self_key = identity.self_key(),
            algo = %identity.algo(),
            "signer ready"
        );
        Self { identity, scope, signing_key }
    }

    pub fn identity(&self) -> &SignerIdentity {
        &self.identity
    }

    pub fn client_id(&self) -> &str {
        self.identity.client_id()
    }

    /// `{self_key}/{client_id}/signer`.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The exact message that [`sign`](Self::sign) HMACs for `payload`.
    pub fn string_to_sign(&self, payload: &Payload) -> String {
        let context = context::canonicalize(payload, &self.identity);
        create_string_to_sign(&self.identity, &self.scope, &context)
    }

    /// Sign `payload`, returning the signature as lowercase hex.
    ///
    /// Any `client_id`/`client_secret` entries in `payload` are replaced by
    /// this signer's own before signing.
    pub fn sign(&self, payload: &Payload) -> String {
        let s2s = self.string_to_sign(payload);
        let signature = self.identity.algo().hmac_hex(self.signing_key.as_bytes(), s2s.as_bytes());
        debug!(client_id = self.identity.client_id(), fields = payload.len(), "payload signed");
        signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_payload() -> Payload {
        Payload::from([
            ("page", "https://wepay.com/account/12345"),
            ("redirect_uri", "https://partnersite.com/home"),
            ("token", "10c936ca-5e7c-508b-9e60-b211c20be9bc"),
        ])
    }

    const GOLDEN: &str = "c2de34c15cd76f797cf80781747da3874639a827a4cb79dcd862cc17b35cf2e2\
                          c721ea7d49ab9f60590d637ae0f51fd4ed8ddb551b922e0cd7e35a13b86de360";

    #[test]
    fn golden_signature() {
        let signer = Signer::new("12173158495", "1594122c5c36f438f8ba");
        assert_eq!(signer.sign(&golden_payload()), GOLDEN);
    }

    #[test]
    fn deterministic() {
        let signer = Signer::new("id", "secret");
        let payload = Payload::from([("token", "t")]);
        assert_eq!(signer.sign(&payload), signer.sign(&payload));
    }

    #[test]
    fn any_value_change_changes_signature() {
        let signer = Signer::new("12173158495", "1594122c5c36f438f8ba");
        let base = signer.sign(&golden_payload());
        for key in ["page", "redirect_uri", "token"] {
            let mut payload = golden_payload();
            payload.insert(key, "tampered");
            assert_ne!(signer.sign(&payload), base, "changing {key} must change the signature");
        }
        let mut extra = golden_payload();
        extra.insert("extra", 1i64);
        assert_ne!(signer.sign(&extra), base);
    }

    #[test]
    fn identity_fields_in_payload_are_ignored() {
        let signer = Signer::new("12173158495", "1594122c5c36f438f8ba");
        let mut forged = golden_payload();
        forged.insert("client_id", "99999");
        forged.insert("client_secret", "attacker-secret");
        assert_eq!(signer.sign(&forged), GOLDEN);
    }

    #[test]
    fn identity_changes_signature() {
        let payload = golden_payload();
        let base = Signer::new("12173158495", "1594122c5c36f438f8ba").sign(&payload);
        assert_ne!(Signer::new("12173158496", "1594122c5c36f438f8ba").sign(&payload), base);
        assert_ne!(Signer::new("12173158495", "1594122c5c36f438f8bb").sign(&payload), base);
        assert_ne!(
            Signer::with_options("12173158495", "1594122c5c36f438f8ba", "Other", HashAlgo::Sha512).sign(&payload),
            base
        );
    }

    #[test]
    fn signature_length_follows_algorithm() {
        for algo in HashAlgo::ALL {
            let signer = Signer::with_options("id", "secret", "WePay", algo);
            let sig = signer.sign(&Payload::new());
            assert_eq!(sig.len(), algo.output_len() * 2);
            assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn unknown_algorithm_fails_at_construction() {
        let err = Signer::with_algorithm_name("id", "secret", "WePay", "md5").unwrap_err();
        assert_eq!(err, SignerError::InvalidAlgorithm("md5".to_string()));
        assert!(Signer::with_algorithm_name("id", "secret", "WePay", "sha384").is_ok());
    }

    #[test]
    fn from_config_validates() {
        let cfg = SignerConfig {
            client_id: String::new(),
            client_secret: "s".to_string(),
            self_key: DEFAULT_SELF_KEY.to_string(),
            hash_algo: HashAlgo::Sha512,
        };
        assert!(matches!(Signer::from_config(&cfg), Err(SignerError::Config(_))));
    }

    #[test]
    fn shared_across_threads() {
        let signer = std::sync::Arc::new(Signer::new("12173158495", "1594122c5c36f438f8ba"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let signer = signer.clone();
                std::thread::spawn(move || signer.sign(&golden_payload()))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), GOLDEN);
        }
    }

    #[test]
    fn debug_output_hides_secrets() {
        let signer = Signer::new("12173158495", "1594122c5c36f438f8ba");
        let dbg = format!("{signer:?}");
        assert!(!dbg.contains("1594122c5c36f438f8ba"));
    }
}
