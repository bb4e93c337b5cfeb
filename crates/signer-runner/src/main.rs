//! # signer-runner
//!
//! Command-line entry point for the payload signer.
//!
//! Loads the client keypair from a JSON configuration file, builds a payload
//! from an optional JSON file and `key=value` arguments, and prints either the
//! signature or the full query string.
//!
//! # Usage
//!
//! ```bash
//! signer signer.json token=10c9... page=https://... redirect_uri=https://... --query
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use signer_core::Payload;
use signer_hmac::{QueryEncoding, Signer};
use tracing::info;

/// Payload signer.
#[derive(Parser)]
#[command(name = "signer", about = "Sign a payload on behalf of a client keypair")]
struct Cli {
    /// Configuration file path (JSON).
    config: PathBuf,

    /// Payload fields as `key=value`; these override `--payload-json` entries.
    fields: Vec<String>,

    /// JSON file holding a flat object of payload fields.
    #[arg(long)]
    payload_json: Option<PathBuf>,

    /// Print the signed query string instead of the bare signature.
    #[arg(short, long)]
    query: bool,

    /// Percent-encode keys and values in the query string.
    #[arg(long, requires = "query")]
    percent_encode: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Optional log directory for file output.
    #[arg(long)]
    log_dir: Option<String>,
}

fn build_payload(cli: &Cli) -> Result<Payload> {
    let mut payload = match &cli.payload_json {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read payload {}", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&content).context("malformed payload JSON")?;
            Payload::from_json(&value)?
        }
        None => Payload::new(),
    };
    payload.extend_from(&Payload::from_pairs(&cli.fields)?);
    Ok(payload)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    signer_core::logging::init_logging(&cli.log_level, cli.log_dir.as_deref(), "signer");

    // 2. Load configuration
    let config = signer_core::config::load_config(&cli.config)?;
    let signer = Signer::from_config(&config)?;
    info!("config loaded - client_id={}, algo={}", config.client_id, config.hash_algo);

    // 3. Sign
    let payload = build_payload(&cli)?;
    for required in ["token", "page", "redirect_uri"] {
        if !payload.contains_key(required) {
            info!("payload has no `{required}` field; signing anyway");
        }
    }

    let output = if cli.query {
        let encoding = if cli.percent_encode { QueryEncoding::Percent } else { QueryEncoding::Verbatim };
        signer.generate_query_string_params_with(&payload, encoding)
    } else {
        signer.sign(&payload)
    };
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use signer_core::Scalar;

    #[test]
    fn fields_become_string_scalars() {
        let cli = Cli::try_parse_from(["signer", "cfg.json", "token=t", "page=https://a.example/?x=1"]).unwrap();
        let payload = build_payload(&cli).unwrap();
        assert_eq!(payload.get("token"), Some(&Scalar::from("t")));
        assert_eq!(payload.get("page"), Some(&Scalar::from("https://a.example/?x=1")));
    }

    #[test]
    fn bare_field_is_rejected() {
        let cli = Cli::try_parse_from(["signer", "cfg.json", "token"]).unwrap();
        assert!(build_payload(&cli).is_err());
    }

    #[test]
    fn percent_encode_requires_query() {
        assert!(Cli::try_parse_from(["signer", "cfg.json", "--percent-encode"]).is_err());
        assert!(Cli::try_parse_from(["signer", "cfg.json", "--query", "--percent-encode"]).is_ok());
    }
}
