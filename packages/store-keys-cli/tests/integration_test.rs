//! Integration tests for the store-keys CLI binary
//!
//! Runs the compiled binary and checks stdout / exit status. Keys go to stdout
//! only on success; failures exit non-zero with nothing on stdout.

use std::process::{Command, Output};

const CONTRACT: &str = "wasm1896qu2ml7ckj675ukxjhx8xn0srp4e7cdx0m6rh949q9vw88hdrqj49ypr";
const USER: &str = "wasm1sejq8wn2qyw0vhgk3y0ds3r6a7fssl57776aek";

fn run(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_store-keys-cli"));
    cmd.args(args)
        .env_remove("STORE_KEYS_MODE")
        .env_remove("STORE_KEYS_PREFIXES")
        .env_remove("STORE_KEYS_HRP")
        .env("RUST_LOG", "off");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to run store-keys-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_key_for_contract_store_prefix() {
    let output = run(&["key", "ns:contract_store", &format!("addr:{}", CONTRACT)], &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "0339740e2b7ff62d2d7a9cb1a5731cd37c061ae7d8699fbd0ee5a9405638e7bb46"
    );
}

#[test]
fn test_key_with_configured_prefix_and_padded_mode() {
    let output = run(
        &["key", "ns:user_counter", "str:state", &format!("addr:{}", USER)],
        &[
            ("STORE_KEYS_PREFIXES", "user_counter=0x000005"),
            ("STORE_KEYS_MODE", "padded"),
        ],
    );
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "0000057374617465866403ba6a011cf65d16891ed8447aef93087e9e"
    );
}

#[test]
fn test_decode_prints_hex() {
    let output = run(&["decode", USER, "--mode", "strict"], &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("866403ba6a011cf65d16891ed8447aef93087e9e"));
}

#[test]
fn test_strict_mode_rejects_misaligned_address() {
    let strict = run(&["decode", "test1pzrgcwm06", "--mode", "strict"], &[]);
    assert!(!strict.status.success());
    assert!(stdout(&strict).is_empty());

    let padded = run(&["decode", "test1pzrgcwm06", "--mode", "padded"], &[]);
    assert!(padded.status.success());
    assert!(stdout(&padded).contains("hex:    08"));
}

#[test]
fn test_bad_checksum_prints_no_key() {
    let tampered = "wasm1896quqml7ckj675ukxjhx8xn0srp4e7cdx0m6rh949q9vw88hdrqj49ypr";
    let output = run(&["key", "hex:03", &format!("addr:{}", tampered)], &[]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_address_without_data_prints_no_key() {
    let output = run(&["key", "hex:03", "addr:a12uel5l"], &[]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());

    let output = run(&["contract", "a12uel5l"], &[]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_expected_hrp_is_enforced() {
    let output = run(&["contract", USER], &[("STORE_KEYS_HRP", "terra")]);
    assert!(!output.status.success());

    let output = run(&["contract", USER], &[("STORE_KEYS_HRP", "wasm")]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "02866403ba6a011cf65d16891ed8447aef93087e9e"
    );
}

#[test]
fn test_namespaces_lists_builtins() {
    let output = run(&["namespaces"], &[]);
    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.contains("contract_address"));
    assert!(listing.contains("contracts_by_creator"));
}
