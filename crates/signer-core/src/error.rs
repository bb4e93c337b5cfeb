//! Typed error definitions for the signer.
//!
//! Provides [`SignerError`] for failures that are the caller's fault: an
//! unsupported hash algorithm, a payload value that is not a scalar, or an
//! unusable configuration. Signing itself never fails once a `Signer` and a
//! typed payload exist. All variants implement `std::error::Error` via
//! `thiserror`, so they integrate with `anyhow::Result` in the runner.

use thiserror::Error;

/// Domain-specific errors for the signer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    /// The requested hash algorithm is not in the supported registry.
    #[error("invalid hash algorithm: {0}")]
    InvalidAlgorithm(String),

    /// A payload entry is not a string, integer, float, or boolean.
    #[error("invalid payload value for `{key}`: expected a scalar, found {kind}")]
    InvalidPayloadValue { key: String, kind: String },

    /// Configuration parsing or validation error.
    #[error("config error: {0}")]
    Config(String),
}
