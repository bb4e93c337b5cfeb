//! Configuration parsing for the signer.
//!
//! A signer reads its identity from a small JSON file. Only the keypair is
//! required; `self_key` defaults to `WePay` and `hash_algo` to `sha512`.
//!
//! # Example config
//!
//! ```json
//! {
//!   "client_id": 12173158495,
//!   "client_secret": "1594122c5c36f438f8ba",
//!   "self_key": "WePay",
//!   "hash_algo": "sha512"
//! }
//! ```
//!
//! `client_id` may be written as a JSON string or an integer.

use anyhow::Context;
use serde::{Deserialize, Deserializer};

use crate::algorithm::HashAlgo;
use crate::error::SignerError;
use crate::identity::{DEFAULT_SELF_KEY, SignerIdentity};

/// Signer configuration, deserialized from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct SignerConfig {
    /// Public half of the client keypair.
    #[serde(deserialize_with = "string_or_integer")]
    pub client_id: String,

    /// Private half of the client keypair.
    pub client_secret: String,

    /// Identifier of the signing party.
    #[serde(default = "default_self_key")]
    pub self_key: String,

    /// Hash algorithm for digests and HMACs.
    #[serde(default)]
    pub hash_algo: HashAlgo,
}

fn default_self_key() -> String {
    DEFAULT_SELF_KEY.to_string()
}

fn string_or_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Signed(i) => i.to_string(),
        Raw::Unsigned(u) => u.to_string(),
    })
}

impl SignerConfig {
    /// Reject configs that cannot identify a client.
    pub fn validate(&self) -> Result<(), SignerError> {
        if self.client_id.trim().is_empty() {
            return Err(SignerError::Config("client_id must not be empty".to_string()));
        }
        if self.client_secret.is_empty() {
            return Err(SignerError::Config("client_secret must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn identity(&self) -> SignerIdentity {
        SignerIdentity::new(&self.client_id, &self.client_secret, &self.self_key, self.hash_algo)
    }
}

/// Parse and validate a JSON config document.
pub fn parse_config(content: &str) -> anyhow::Result<SignerConfig> {
    let config: SignerConfig = serde_json::from_str(content).context("malformed signer config")?;
    config.validate()?;
    Ok(config)
}

/// Load, parse and validate a JSON config file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<SignerConfig> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&content)
}
