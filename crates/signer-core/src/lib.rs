//! # signer-core
//!
//! Shared building blocks for the payload signer:
//!
//! - **Algorithms** (`algorithm`) - closed SHA-2 registry with digest + HMAC
//! - **Payloads** (`payload`) - scalar-only key/value data to sign
//! - **Identity** (`identity`) - immutable client keypair + signing-party key
//! - **Configuration** (`config`) - JSON config deserialization
//! - **Error types** (`error`) - domain-specific `SignerError` via thiserror
//! - **Logging** (`logging`) - tracing-based structured logging

pub mod algorithm;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod payload;

pub use algorithm::HashAlgo;
pub use config::SignerConfig;
pub use error::SignerError;
pub use identity::{DEFAULT_SELF_KEY, SignerIdentity};
pub use payload::{Payload, Scalar};
