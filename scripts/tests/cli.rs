//! Process-level tests for the deploy scripts binary.
//!
//! These run the compiled binary with inputs that fail before any network
//! request is made, checking the exit code and stream conventions: addresses
//! on stdout, everything else on stderr.

use std::process::{Command, Output};

/// A well-formed private key, never used to sign anything here
const TEST_PRIV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Run the binary with the given arguments & a scrubbed environment
fn run_with_args(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_predum-scripts"))
        .args(args)
        .env_remove("PRIV_KEY")
        .env_remove("RPC_URL")
        .output()
        .unwrap()
}

#[test]
fn test_malformed_rpc_url_fails() {
    let output = run_with_args(&[
        "--priv-key",
        TEST_PRIV_KEY,
        "--rpc-url",
        "not a url",
        "deploy-token",
    ]);

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("deployed to"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ClientInitialization"));
}

#[test]
fn test_malformed_priv_key_fails() {
    // The key is rejected before the chain id is fetched, so the RPC URL is
    // never dialed
    let output = run_with_args(&[
        "--priv-key",
        "garbage",
        "--rpc-url",
        "http://localhost:8545",
        "deploy-sale",
    ]);

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ClientInitialization"));
}

#[test]
fn test_missing_required_args_fails() {
    let output = run_with_args(&["deploy-token"]);

    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("deployed to"));
}
