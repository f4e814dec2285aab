#![cfg(feature = "cli")]

use std::process::{Command, Output};

const WORKED_EXAMPLE_HEX: &str = "010303e803e82d";
const WORKED_EXAMPLE_JSON: &str = concat!(
    r#"{"servos":[{"id":3,"known_position":1000,"control":{"Speed":1000},"#,
    r#""blocked":false,"mode":"HoldOnBlock","color":"Magenta"}]}"#
);

fn actuframe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_actuframe"))
        .args(args)
        .output()
        .expect("binary should spawn")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn encode_worked_example() {
    let output = actuframe(&["encode", "servo", "--json", WORKED_EXAMPLE_JSON]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), WORKED_EXAMPLE_HEX);
}

#[test]
fn decode_worked_example_as_json() {
    let output = actuframe(&["decode", "servo", WORKED_EXAMPLE_HEX, "--format", "json"]);

    assert!(output.status.success());
    let decoded: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    let expected: serde_json::Value = serde_json::from_str(WORKED_EXAMPLE_JSON).unwrap();
    assert_eq!(decoded, expected);
}

#[test]
fn decode_output_feeds_encode() {
    let decoded = actuframe(&["decode", "servo", WORKED_EXAMPLE_HEX, "--format", "json"]);
    assert!(decoded.status.success());

    let encoded = actuframe(&["encode", "servo", "--json", stdout(&decoded).trim()]);
    assert!(encoded.status.success());
    assert_eq!(stdout(&encoded).trim(), WORKED_EXAMPLE_HEX);
}

#[test]
fn malformed_frame_exits_with_data_invalid() {
    let output = actuframe(&["decode", "servo", "02"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn invalid_hex_exits_with_usage() {
    let output = actuframe(&["decode", "servo", "zz"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn size_reports_exact_frame_lengths() {
    let servo = actuframe(&["size", "servo", "5"]);
    assert!(servo.status.success());
    assert_eq!(stdout(&servo).trim(), "31");

    let motor = actuframe(&["size", "motor", "1", "1", "1"]);
    assert!(motor.status.success());
    assert_eq!(stdout(&motor).trim(), "11");

    let io = actuframe(&["size", "io"]);
    assert!(io.status.success());
    assert_eq!(stdout(&io).trim(), "1");
}

#[test]
fn io_roundtrip_through_cli() {
    let encoded = actuframe(&["encode", "io", "--json", r#"{"tirette":"Waiting"}"#]);
    assert!(encoded.status.success());
    assert_eq!(stdout(&encoded).trim(), "01");

    let decoded = actuframe(&["decode", "io", "01", "--format", "json"]);
    assert!(decoded.status.success());
    assert_eq!(stdout(&decoded).trim(), r#"{"tirette":"Waiting"}"#);
}

#[test]
fn moving_frames_are_not_decodable_yet() {
    let output = actuframe(&["decode", "moving", "00"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn version_prints_package_version() {
    let output = actuframe(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("actuframe "));
}
