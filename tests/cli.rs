//! End-to-end tests for the `rut` binary.

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn rut() -> Command {
    let mut cmd = Command::cargo_bin("rut").unwrap();
    cmd.env_remove("RUT_MAX_LEN").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn dv_prints_compact_ruts() {
    let out = stdout_of(rut().args(["dv", "12345678", "1000005"]));
    assert_eq!(out, "12345678-5\n1000005-K\n");
}

#[test]
fn dv_rejects_short_bodies() {
    rut().args(["dv", "123456"]).assert().failure();
}

#[test]
fn format_inline_and_stdin() {
    let out = stdout_of(rut().args(["format", "123456785", "24965101k"]));
    assert_eq!(out, "12.345.678-5\n24.965.101-K\n");

    let out = stdout_of(rut().arg("format").write_stdin(" 123456785 \nabc\n"));
    assert_eq!(out, "12.345.678-5\n\n");
}

#[test]
fn format_readonly_keeps_case() {
    let out = stdout_of(rut().args(["format", "--readonly", "24965101k"]));
    assert_eq!(out, "24.965.101-k\n");
}

#[test]
fn check_reports_each_entry() {
    let out = stdout_of(rut().args(["check", "12.345.678-5", "12.345.678-K"]));
    assert_eq!(
        out,
        "✔ 12.345.678-5\n✖ 12.345.678-K: check digit mismatch: expected 5, found K\n"
    );
}

#[test]
fn check_strict_fails_on_invalid() {
    rut()
        .args(["check", "--strict", "12.345.678-4"])
        .assert()
        .failure();
    rut()
        .args(["check", "--strict", "12.345.678-5"])
        .assert()
        .success();
}

#[test]
fn check_json_report() {
    let out = stdout_of(rut().args(["check", "--format", "json", "1000005-k", "123"]));
    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["valid"], 1);
    assert_eq!(report["invalid"], 1);
    assert_eq!(report["entries"][0]["rut"], "1.000.005-K");
    assert_eq!(report["entries"][1]["valid"], false);
    assert!(report["generated_at"].is_string());
}

#[test]
fn watch_replays_keystrokes() {
    let out = stdout_of(rut().arg("watch").write_stdin("1\n123456\n1234567\n123456789\n"));
    assert_eq!(
        out,
        "1 - ✖\n123456 - ✖\n1234567 4 ✔\n12345678 5 ✔\n"
    );
}

#[test]
fn watch_keeps_columns_for_blank_lines() {
    let out = stdout_of(rut().arg("watch").write_stdin("\nabc\n"));
    assert_eq!(out, "- - ✖\n- - ✖\n");
}

#[test]
fn watch_respects_max_len() {
    let out = stdout_of(rut().args(["--max-len", "9", "watch"]).write_stdin("123456789\n"));
    assert_eq!(out, "123456789 2 ✔\n");

    let out = stdout_of(rut().arg("watch").env("RUT_MAX_LEN", "7").write_stdin("123456789\n"));
    assert_eq!(out, "1234567 4 ✔\n");
}

#[test]
fn name_validation() {
    let out = stdout_of(rut().args(["name", "María José"]));
    assert_eq!(out, "✔ María José\n");
    rut().args(["name", "--strict", "John123"]).assert().failure();
}
