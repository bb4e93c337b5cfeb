use signer_core::SignerIdentity;

/// Header prefix; the algorithm's uppercase name is appended.
pub const ALGORITHM_PREFIX: &str = "SIGNER-HMAC-";

/// Assemble the message that gets HMACed:
///
/// ```text
/// SIGNER-HMAC-{ALGO}
/// {self_key}
/// {client_id}
/// {hex(hash(scope))}
/// {hex(hash(context))}
/// ```
///
/// No trailing newline.
pub fn create_string_to_sign(identity: &SignerIdentity, scope: &str, context: &str) -> String {
    let algo = identity.algo();
    let scope_hash = algo.digest_hex(scope.as_bytes());
    let context_hash = algo.digest_hex(context.as_bytes());

    format!(
        "{ALGORITHM_PREFIX}{}\n{}\n{}\n{scope_hash}\n{context_hash}",
        algo.name(),
        identity.self_key(),
        identity.client_id(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use signer_core::HashAlgo;

    #[test]
    fn layout() {
        let id = SignerIdentity::new("12173158495", "x", "WePay", HashAlgo::Sha512);
        let s2s = create_string_to_sign(&id, "WePay/12173158495/signer", "ctx");
        let lines: Vec<&str> = s2s.split('\n').collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "SIGNER-HMAC-SHA512");
        assert_eq!(lines[1], "WePay");
        assert_eq!(lines[2], "12173158495");
        assert_eq!(
            lines[3],
            "6a58a1587b4ba33ea06b013b1644a3525359165200ec1127f5777dc5d6d2574c\
             e62e81da64f4c280209f0b54cdec0f60df9546f8b1f6648f16ac198d394fc3ea"
        );
        assert_eq!(lines[4], HashAlgo::Sha512.digest_hex(b"ctx"));
    }

    #[test]
    fn header_follows_algorithm() {
        let id = SignerIdentity::new("1", "x", "WePay", HashAlgo::Sha224);
        let s2s = create_string_to_sign(&id, "scope", "ctx");
        assert!(s2s.starts_with("SIGNER-HMAC-SHA224\n"));
        assert!(s2s.ends_with(&HashAlgo::Sha224.digest_hex(b"ctx")));
    }
}
