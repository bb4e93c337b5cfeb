use signer_core::SignerIdentity;

/// Scope a signature is valid in: `{self_key}/{client_id}/signer`.
pub fn create_scope(identity: &SignerIdentity) -> String {
    format!("{}/{}/signer", identity.self_key(), identity.client_id())
}
