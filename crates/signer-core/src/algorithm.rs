//! Registry of supported hash algorithms.
//!
//! A signer is bound to exactly one [`HashAlgo`] at construction. The same
//! algorithm drives the unkeyed digests in the string-to-sign and every HMAC
//! in the key-derivation chain, so it is resolved once and then only read.
//!
//! Only the SHA-2 family is supported:
//!
//! | Variant  | Header name | Output |
//! |----------|-------------|--------|
//! | `Sha224` | `SHA224`    | 28 B   |
//! | `Sha256` | `SHA256`    | 32 B   |
//! | `Sha384` | `SHA384`    | 48 B   |
//! | `Sha512` | `SHA512`    | 64 B   |

use std::fmt;
use std::str::FromStr;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::error::SignerError;

type HmacSha224 = Hmac<Sha224>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Hash function used for both digests and HMACs. Defaults to SHA-512.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgo {
    Sha224,
    Sha256,
    Sha384,
    #[default]
    Sha512,
}

impl HashAlgo {
    /// Every supported algorithm, in ascending output size.
    pub const ALL: [HashAlgo; 4] = [Self::Sha224, Self::Sha256, Self::Sha384, Self::Sha512];

    /// Canonical uppercase name, as it appears in the `SIGNER-HMAC-*` header.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }

    /// Digest length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Unkeyed digest of `message`, as a lowercase hex string.
    pub fn digest_hex(self, message: &[u8]) -> String {
        match self {
            Self::Sha224 => digest_hex::<Sha224>(message),
            Self::Sha256 => digest_hex::<Sha256>(message),
            Self::Sha384 => digest_hex::<Sha384>(message),
            Self::Sha512 => digest_hex::<Sha512>(message),
        }
    }

    /// Raw HMAC of `message` under `key`.
    pub fn hmac(self, key: &[u8], message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha224 => mac_bytes::<HmacSha224>(key, message),
            Self::Sha256 => mac_bytes::<HmacSha256>(key, message),
            Self::Sha384 => mac_bytes::<HmacSha384>(key, message),
            Self::Sha512 => mac_bytes::<HmacSha512>(key, message),
        }
    }

    /// HMAC of `message` under `key`, as a lowercase hex string.
    pub fn hmac_hex(self, key: &[u8], message: &[u8]) -> String {
        hex::encode(self.hmac(key, message))
    }
}

fn digest_hex<D: Digest>(message: &[u8]) -> String {
    hex::encode(<D as Digest>::digest(message))
}

fn mac_bytes<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = <M as KeyInit>::new_from_slice(key).expect("HMAC accepts any key length");
    Mac::update(&mut mac, message);
    Mac::finalize(mac).into_bytes().to_vec()
}

impl fmt::Display for HashAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `sha512`, `SHA512`, `sha-512` and `sha_512` style spellings.
impl FromStr for HashAlgo {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String =
            s.trim().chars().filter(|c| !matches!(c, '-' | '_')).collect::<String>().to_ascii_lowercase();
        match normalized.as_str() {
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(SignerError::InvalidAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for HashAlgo {
    type Error = SignerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgo> for String {
    fn from(algo: HashAlgo) -> Self {
        algo.name().to_ascii_lowercase()
    }
}
