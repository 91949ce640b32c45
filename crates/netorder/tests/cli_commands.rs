#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::Command;

fn netorder() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_netorder"));
    cmd.arg("--log-level").arg("error");
    cmd
}

fn unique_temp_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "netorder-cli-{tag}-{}-{}.bin",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ))
}

#[test]
fn encode_json_reports_big_endian_wire() {
    let output = netorder()
        .args(["--format", "json", "encode", "--type", "u32", "0x01020304"])
        .output()
        .expect("encode should run");

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("encode should emit json");
    assert_eq!(payload.get("wire").and_then(|v| v.as_str()), Some("01 02 03 04"));
    assert_eq!(payload.get("type").and_then(|v| v.as_str()), Some("u32"));
    assert_eq!(payload.get("count").and_then(|v| v.as_u64()), Some(1));
}

#[test]
fn encode_raw_writes_bytes() {
    let output = netorder()
        .args(["--format", "raw", "encode", "-t", "u16", "0xABCD", "-2"])
        .output()
        .expect("encode should run");

    // -2 does not fit u16
    assert_eq!(output.status.code(), Some(64));

    let output = netorder()
        .args(["--format", "raw", "encode", "-t", "i16", "0x7BCD", "-2"])
        .output()
        .expect("encode should run");
    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0x7B, 0xCD, 0xFF, 0xFE]);
}

#[test]
fn decode_hex_to_values() {
    let output = netorder()
        .args(["--format", "json", "decode", "--type", "u16", "--hex", "abcd 0001"])
        .output()
        .expect("decode should run");

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("decode should emit json");
    assert_eq!(payload["values"], serde_json::json!([0xABCD, 1]));
}

#[test]
fn decode_file_roundtrips_encode() {
    let encoded = netorder()
        .args(["--format", "raw", "encode", "-t", "i32", "-1", "16909060"])
        .output()
        .expect("encode should run");
    assert!(encoded.status.success());

    let path = unique_temp_file("roundtrip");
    std::fs::write(&path, &encoded.stdout).expect("temp file should be writable");

    let decoded = netorder()
        .args(["--format", "raw", "decode", "-t", "i32", "--file"])
        .arg(&path)
        .output()
        .expect("decode should run");
    let _ = std::fs::remove_file(&path);

    assert!(decoded.status.success());
    assert_eq!(String::from_utf8_lossy(&decoded.stdout), "-1\n16909060\n");
}

#[test]
fn decode_truncated_input_returns_60() {
    let output = netorder()
        .args(["decode", "--type", "u32", "--hex", "010203"])
        .output()
        .expect("decode should run");

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("io fail"));
}

#[test]
fn debug_log_level_reports_channel_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_netorder"))
        .args(["--log-level", "debug", "decode", "--type", "u16", "--hex", "abcd ef"])
        .output()
        .expect("decode should run");

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("netorder_marshal"), "stderr: {stderr}");
    assert!(stderr.contains("buffer channel failed"), "stderr: {stderr}");
}

#[test]
fn default_log_level_hides_channel_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_netorder"))
        .env_remove("NETORDER_LOG_LEVEL")
        .args(["decode", "--type", "u16", "--hex", "abcd ef"])
        .output()
        .expect("decode should run");

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("buffer channel failed"), "stderr: {stderr}");
}

#[test]
fn decode_missing_file_fails() {
    let output = netorder()
        .args(["decode", "--type", "u8", "--file"])
        .arg(unique_temp_file("missing"))
        .output()
        .expect("decode should run");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn version_reports_package_version() {
    let output = netorder()
        .args(["version"])
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("netorder {}", env!("CARGO_PKG_VERSION"))
    );
}
