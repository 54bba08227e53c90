//! Integration tests for the wordstop CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MIXED: &str = "abcひらがな、漢字";

#[test]
fn test_classify_single_position() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("classify").arg("--text").arg(MIXED).arg("--pos").arg("3");

    cmd.assert().success().stdout(predicate::str::contains(
        "3\tWORD_START, WORD_END, SUB_WORD_START, SUB_WORD_END",
    ));
}

#[test]
fn test_classify_all_positions() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("classify").arg("--text").arg(MIXED);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0\t"))
        .stdout(predicate::str::contains("10\t"))
        .stdout(predicate::str::contains("PUNCTUATION_START"));
}

#[test]
fn test_classify_reads_stdin() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("classify").arg("--pos").arg("1").write_stdin("ab");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1\t(none)"));
}

#[test]
fn test_classify_json_output() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("classify")
        .arg("--text")
        .arg(MIXED)
        .arg("--pos")
        .arg("7")
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"pos\": 7"))
        .stdout(predicate::str::contains("\"labels\""))
        .stdout(predicate::str::contains("PUNCTUATION_START"));
}

#[test]
fn test_classify_rejects_out_of_range_position() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("classify").arg("--text").arg("abc").arg("--pos").arg("99");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("outside the document"));
}

#[test]
fn test_word_region_over_kanji_run() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("word").arg("--text").arg(MIXED).arg("--pos").arg("9");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("8..10\t漢字"));
}

#[test]
fn test_word_region_subwords_granularity() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("word")
        .arg("--text")
        .arg("これはテストです。")
        .arg("--pos")
        .arg("4")
        .arg("--by")
        .arg("subwords");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3..6\tテスト"));
}

#[test]
fn test_jump_forward_by_words() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("jump").arg("--text").arg(MIXED).arg("--pos").arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("3\n"));
}

#[test]
fn test_jump_backward_by_words() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("jump")
        .arg("--text")
        .arg(MIXED)
        .arg("--pos")
        .arg("10")
        .arg("--backward");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("8\n"));
}

#[test]
fn test_jump_json_output() {
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("jump")
        .arg("--text")
        .arg(MIXED)
        .arg("--pos")
        .arg("0")
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"from\": 0"))
        .stdout(predicate::str::contains("\"to\": 3"));
}

#[test]
fn test_custom_groups_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("groups.toml");
    fs::write(
        &path,
        r#"
[[groups]]
name = "slip"
pattern = '[\u{3041}-\u{309F}]'
"#,
    )
    .unwrap();

    // Without the punct group, the fullwidth comma falls to "others" and the
    // hiragana-to-comma gap is a plain word boundary instead.
    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("classify")
        .arg("--text")
        .arg(MIXED)
        .arg("--pos")
        .arg("7")
        .arg("--groups")
        .arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WORD_START"))
        .stdout(predicate::str::contains("SUB_WORD_START"));
}

#[test]
fn test_validate_accepts_good_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("groups.toml");
    fs::write(
        &path,
        r#"
[[groups]]
name = "slip"
pattern = '[ぁ-ん]'
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("validate").arg("--config").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("slip"));
}

#[test]
fn test_validate_rejects_bad_pattern() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("groups.toml");
    fs::write(
        &path,
        r#"
[[groups]]
name = "broken"
pattern = '['
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("wordstop").unwrap();
    cmd.arg("validate").arg("--config").arg(&path);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"))
        .stdout(predicate::str::contains("broken"));
}

#[test]
fn test_generate_config_round_trips_through_validate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("generated.toml");

    let mut gen = Command::cargo_bin("wordstop").unwrap();
    gen.arg("generate-config").arg("--output").arg(&path);
    gen.assert().success();

    let mut validate = Command::cargo_bin("wordstop").unwrap();
    validate.arg("validate").arg("--config").arg(&path);
    validate
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
