//! Query-string rendering of a signed payload.
//!
//! The output is the payload (minus `client_secret`) plus `client_id` and the
//! signature under `stoken`, as `key=value` pairs sorted by key and joined
//! with `&`.
//!
//! By default keys and values are emitted verbatim, without percent-encoding,
//! which is what existing consumers of these URLs expect. A value containing
//! `&`, `=`, `#` or spaces therefore produces an ambiguous query string.
//! [`QueryEncoding::Percent`] is available for consumers that decode.

use std::borrow::Cow;

use signer_core::Payload;

use crate::signer::Signer;

/// Query parameter that carries the signature.
pub const SIGNATURE_PARAM: &str = "stoken";

/// How keys and values are written into the query string.
///
/// Encoding only affects rendering; the signature is always computed over the
/// raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEncoding {
    /// Natural string form, no escaping.
    #[default]
    Verbatim,
    /// RFC 3986 percent-encoding of everything but unreserved characters.
    Percent,
}

impl QueryEncoding {
    fn encode<'a>(self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(raw),
            Self::Percent => urlencoding::encode(raw),
        }
    }
}

impl Signer {
    /// Sign `payload` and render it as query-string parameters.
    ///
    /// A `client_secret` entry in `payload` is dropped and never appears in
    /// the output.
    pub fn generate_query_string_params(&self, payload: &Payload) -> String {
        self.generate_query_string_params_with(payload, QueryEncoding::Verbatim)
    }

    pub fn generate_query_string_params_with(&self, payload: &Payload, encoding: QueryEncoding) -> String {
        let mut params = payload.clone();
        params.remove("client_secret");

        let signature = self.sign(&params);
        params.insert("client_id", self.client_id());
        params.insert(SIGNATURE_PARAM, signature);

        params
            .iter()
            .map(|(key, value)| {
                let value = value.to_string();
                format!("{}={}", encoding.encode(key), encoding.encode(&value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
