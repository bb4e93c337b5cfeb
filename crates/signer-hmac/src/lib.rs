//! # signer-hmac
//!
//! Produces tamper-evident signatures over small payloads on behalf of a
//! client keypair (`client_id`/`client_secret`), so that a third party
//! holding the same keypair can check that a set of URL parameters was
//! vouched for by the secret's holder. Only signing is provided here.
//!
//! ## Pipeline
//!
//! | Step | Module            | Output                                        |
//! |------|-------------------|-----------------------------------------------|
//! | 1    | `context`         | canonical `key=value` lines + signed key list |
//! | 2    | `scope`           | `{self_key}/{client_id}/signer`               |
//! | 3    | `key`             | signing key from a 3-step HMAC chain          |
//! | 4    | `string_to_sign`  | `SIGNER-HMAC-{ALGO}` header + hashes          |
//! | 5    | `signer`          | `hex(HMAC(signing_key, string_to_sign))`      |
//! | 6    | `query`           | sorted `&`-joined params with `stoken`        |
//!
//! ```ignore
//! let signer = Signer::new("12173158495", "1594122c5c36f438f8ba");
//! let payload = Payload::from([("token", "10c9..."), ("page", "https://..."), ("redirect_uri", "https://...")]);
//! let url = format!("https://example.com/?{}", signer.generate_query_string_params(&payload));
//! ```

pub mod context;
pub mod key;
pub mod query;
pub mod scope;
pub mod signer;
pub mod string_to_sign;

pub use query::{QueryEncoding, SIGNATURE_PARAM};
pub use signer::Signer;
pub use signer_core::{HashAlgo, Payload, Scalar, SignerError};
