// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Presswire: command-line IPP request encoder.
//
// Entry point. Initialises logging, reads a JSON request (and optionally a
// document file), and writes the encoded `application/ipp` body to a file or
// stdout.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use sha2::{Digest, Sha256};
use tracing::{error, info, warn};

use presswire_core::config::{CollectionIntegerEncoding, EncoderConfig};
use presswire_core::error::Result;
use presswire_core::types::Request;
use presswire_encode::{EncodedRequest, MessageEncoder};

/// Encode an IPP request described in JSON into its binary wire form.
#[derive(Debug, Parser)]
#[command(name = "presswire", version, about)]
struct Cli {
    /// JSON request file (`operation`, `operation-attributes-tag`, ...).
    #[arg(short, long)]
    request: PathBuf,

    /// Document appended after the attributes (replaces any `data` in the JSON).
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a hex dump instead of raw bytes.
    #[arg(long)]
    hex: bool,

    /// Encoder settings file (JSON).
    #[arg(short, long, env = "PRESSWIRE_CONFIG")]
    config: Option<PathBuf>,

    /// Fail when an attribute has no resolvable tag instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Write collection integers with the legacy two-byte framing.
    #[arg(long)]
    legacy_collection_integers: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "encode failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let request = load_request(&cli.request, cli.document.as_deref())?;

    if let Some(data) = &request.data {
        info!(bytes = data.len(), sha256 = %document_digest(data), "document attached");
    }

    let encoded = MessageEncoder::new(config).encode(&request)?;
    for skipped in &encoded.skipped {
        warn!(attribute = %skipped, "attribute dropped from request");
    }
    info!(
        request_id = encoded.request_id,
        version = %encoded.version,
        bytes = encoded.bytes.len(),
        skipped = encoded.skipped.len(),
        "request encoded"
    );

    let rendered = render(&encoded, cli.hex);
    match &cli.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// File settings first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<EncoderConfig> {
    let mut config = match &cli.config {
        Some(path) => EncoderConfig::load(path)?,
        None => EncoderConfig::default(),
    };
    if cli.strict {
        config.strict = true;
    }
    if cli.legacy_collection_integers {
        config.collection_integers = CollectionIntegerEncoding::LegacyTwoByte;
    }
    Ok(config)
}

fn load_request(path: &Path, document: Option<&Path>) -> Result<Request> {
    let json = std::fs::read_to_string(path)?;
    let mut request = Request::from_json(&json)?;
    if let Some(doc) = document {
        request.data = Some(std::fs::read(doc)?);
    }
    Ok(request)
}

fn document_digest(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn render(encoded: &EncodedRequest, as_hex: bool) -> Vec<u8> {
    if as_hex {
        let mut text = hex::encode(&encoded.bytes);
        text.push('\n');
        text.into_bytes()
    } else {
        encoded.bytes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use presswire_core::types::{Operation, Version};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["presswire"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("parse args")
    }

    fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents).expect("write");
        file
    }

    #[test]
    fn flags_override_config_file() {
        let cfg = temp_file(br#"{"default_version": [1, 1]}"#);
        let path = cfg.path().to_str().expect("utf-8 path");
        let cli = cli(&["-r", "req.json", "-c", path, "--strict", "--legacy-collection-integers"]);

        let config = build_config(&cli).expect("config");
        assert_eq!(config.default_version, Version::V1_1);
        assert!(config.strict);
        assert_eq!(config.collection_integers, CollectionIntegerEncoding::LegacyTwoByte);
    }

    #[test]
    fn document_file_replaces_json_data() {
        let req = temp_file(br#"{"operation": "print-job", "request-id": 1, "data": [1, 2]}"#);
        let doc = temp_file(b"PDFBYTES");

        let request = load_request(req.path(), Some(doc.path())).expect("load");
        assert_eq!(request.operation, Operation::PrintJob);
        assert_eq!(request.data.as_deref(), Some(&b"PDFBYTES"[..]));
    }

    #[test]
    fn run_writes_encoded_request_to_output() {
        let req = temp_file(
            br#"{"operation": "get-jobs", "request-id": 7, "version": [1, 1],
                 "operation-attributes-tag": {"which-jobs": "completed"}}"#,
        );
        let out_dir = tempfile::tempdir().expect("temp dir");
        let out = out_dir.path().join("request.bin");

        let cli = cli(&[
            "--request",
            req.path().to_str().expect("utf-8 path"),
            "--output",
            out.to_str().expect("utf-8 path"),
        ]);
        run(&cli).expect("run");

        let bytes = std::fs::read(&out).expect("read output");
        assert_eq!(&bytes[..8], &[1, 1, 0x00, 0x0A, 0, 0, 0, 7]);
        assert_eq!(bytes.last(), Some(&0x03));
    }

    #[test]
    fn hex_rendering() {
        let encoded = EncodedRequest {
            bytes: vec![0x02, 0x00, 0xAB],
            request_id: 1,
            version: Version::V2_0,
            skipped: Vec::new(),
        };
        assert_eq!(render(&encoded, true), b"0200ab\n");
        assert_eq!(render(&encoded, false), vec![0x02, 0x00, 0xAB]);
    }

    #[test]
    fn digest_is_lowercase_hex_sha256() {
        assert_eq!(
            document_digest(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn strict_run_fails_on_unknown_attribute() {
        let req = temp_file(
            br#"{"operation": "get-jobs", "request-id": 7,
                 "operation-attributes-tag": {"x-unknown": "value"}}"#,
        );
        let out_dir = tempfile::tempdir().expect("temp dir");
        let out = out_dir.path().join("request.bin");
        let cli = cli(&[
            "-r",
            req.path().to_str().expect("utf-8 path"),
            "-o",
            out.to_str().expect("utf-8 path"),
            "--strict",
        ]);
        assert!(run(&cli).is_err());
        assert!(!out.exists());
    }
}
