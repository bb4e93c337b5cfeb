//! Canonical context: the deterministic string form of a signed payload.
//!
//! Layout, for a payload `{ Token: "ABC", page: "2" }` plus the identity:
//!
//! ```text
//! client_id=<id>\n
//! client_secret=<secret>\n
//! page=2\n
//! token=abc\n
//! \n
//! Token;client_id;client_secret;page
//! ```
//!
//! Lines are lowercased `key=value\n` strings sorted as whole strings (the
//! trailing `\n` included), which is not always the same order as sorting by
//! key: `a-=x\n` sorts before `a=y\n`. The trailer lists the original,
//! case-preserved keys in byte order, joined with `;`.

use signer_core::{Payload, SignerIdentity};

/// Copy `payload` and force the identity's `client_id`/`client_secret` into it.
///
/// Caller-supplied values under those keys are overwritten, never kept, so a
/// payload cannot claim a different client while signing under this secret.
pub fn with_identity(payload: &Payload, identity: &SignerIdentity) -> Payload {
    let mut merged = payload.clone();
    merged.insert("client_id", identity.client_id());
    merged.insert("client_secret", identity.client_secret());
    merged
}

/// Render the canonical context for `payload` signed under `identity`.
pub fn canonicalize(payload: &Payload, identity: &SignerIdentity) -> String {
    render(&with_identity(payload, identity))
}

/// Render an already-merged payload.
pub(crate) fn render(merged: &Payload) -> String {
    let mut lines: Vec<String> = merged
        .iter()
        .map(|(key, value)| format!("{}={}\n", key.to_lowercase(), value.to_string().to_lowercase()))
        .collect();
    lines.sort_unstable();

    // `Payload` iterates in key order already.
    let signed_keys = merged.keys().collect::<Vec<_>>().join(";");

    let mut out = lines.concat();
    out.push('\n');
    out.push_str(&signed_keys);
    out
}
