#![cfg(feature = "cli")]

use std::process::{Command, Output};

const OBJECT_HEX: &str = "56530200000001000000010400000005000000";

fn tagwire(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tagwire"))
        .arg("--format")
        .arg("json")
        .args(args)
        .output()
        .expect("tagwire should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout should be json")
}

#[test]
fn encode_object_prints_framed_hex() {
    let output = tagwire(&["encode", "--json", r#"{"a": true, "b": 5}"#]);
    assert!(output.status.success());

    let payload = stdout_json(&output);
    assert_eq!(payload["kind"], "object");
    assert_eq!(payload["len"], 19);
    assert_eq!(payload["hex"], OBJECT_HEX);
}

#[test]
fn encode_byte_markers_take_flat_path() {
    let output = tagwire(&[
        "encode",
        "--json",
        r#"[{"$byte": 1}, {"$byte": 2}, {"$byte": 3}]"#,
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["hex"], "010203");
}

#[test]
fn decode_negative_number() {
    let output = tagwire(&["decode", "d6ffffff", "--tag", "number"]);
    assert!(output.status.success());

    let payload = stdout_json(&output);
    assert_eq!(payload["tag"], "NUMBER");
    assert_eq!(payload["value"], -42);
}

#[test]
fn decode_with_record_shape() {
    let output = tagwire(&[
        "decode",
        OBJECT_HEX,
        "--shape",
        r#"{"a": "boolean", "b": "number"}"#,
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["value"],
        serde_json::json!({"a": true, "b": 5})
    );
}

#[test]
fn decode_unknown_code_exits_data_invalid() {
    let output = tagwire(&["decode", "01", "--code", "42"]);
    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported tag code 42"));
}

#[test]
fn decode_unknown_tag_name_is_usage_error() {
    let output = tagwire(&["decode", "01", "--tag", "float"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn decode_flat_run_with_bytes_tag() {
    let output = tagwire(&["decode", "010203", "--tag", "bytes"]);
    assert!(output.status.success());

    let payload = stdout_json(&output);
    assert_eq!(payload["tag"], "BYTES");
    assert_eq!(payload["kind"], "byte sequence");
    assert_eq!(payload["value"], "010203");
}

#[test]
fn decode_raw_format_writes_payload_bytes() {
    let output = Command::new(env!("CARGO_BIN_EXE_tagwire"))
        .args(["--format", "raw", "decode", "010203", "--tag", "bytes"])
        .output()
        .expect("tagwire should run");
    assert!(output.status.success());
    assert_eq!(output.stdout, vec![1, 2, 3]);

    let output = Command::new(env!("CARGO_BIN_EXE_tagwire"))
        .args(["--format", "raw", "decode", "6869", "--tag", "string"])
        .output()
        .expect("tagwire should run");
    assert_eq!(output.stdout, b"hi".to_vec());
}

#[test]
fn inspect_lists_elements() {
    let output = tagwire(&["inspect", OBJECT_HEX]);
    assert!(output.status.success());

    let rows = stdout_json(&output);
    let rows = rows.as_array().expect("inspect should emit an array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["hex"], "01");
    assert_eq!(rows[1]["hex"], "05000000");
}

#[test]
fn inspect_rejects_flat_bytes() {
    let output = tagwire(&["inspect", "010203"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn strict_kinds_rejects_null() {
    let output = tagwire(&["--strict-kinds", "encode", "--json", "null"]);
    assert_eq!(output.status.code(), Some(64));

    let output = tagwire(&["encode", "--json", "null"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["hex"], hex_of("null"));
}

#[test]
fn strict_precision_rejects_wide_numbers() {
    let output = tagwire(&["--strict-precision", "encode", "--json", "4294967296"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn version_prints_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_tagwire"))
        .arg("version")
        .output()
        .expect("version should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("tagwire {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_extended_reports_build_and_defaults() {
    let output = Command::new(env!("CARGO_BIN_EXE_tagwire"))
        .args(["version", "--extended"])
        .output()
        .expect("version should run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("name: tagwire"));
    assert!(stdout.lines().any(|line| line.starts_with("git_hash: ")));
    assert!(stdout.contains("bigint_width=64 bits"));
    assert!(stdout.contains("max_depth=64"));
}

fn hex_of(text: &str) -> String {
    text.bytes().map(|b| format!("{b:02x}")).collect()
}
