//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dass21(config_home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("dass21").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn responses(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn questions_lists_all_items() {
    let home = TempDir::new().unwrap();
    dass21(&home)
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. [depression] I couldn't seem"))
        .stdout(predicate::str::contains("21. [stress] I felt that I was rather touchy."));
}

#[test]
fn questions_as_json() {
    let home = TempDir::new().unwrap();
    let output = dass21(&home)
        .args(["questions", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items.as_array().map(Vec::len), Some(21));
    assert_eq!(items[7]["subscale_id"], "anxiety");
}

#[test]
fn questions_as_markdown() {
    let home = TempDir::new().unwrap();
    dass21(&home)
        .args(["questions", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# DASS-21 items"))
        .stdout(predicate::str::contains("## Depression\n\nDysphoria"))
        .stdout(predicate::str::contains("\n1. I couldn't seem"))
        .stdout(predicate::str::contains("\n21. I felt that I was rather touchy."))
        .stdout(predicate::str::contains("[stress]").not());
}

#[test]
fn score_all_zero_is_normal() {
    let home = TempDir::new().unwrap();
    dass21(&home)
        .args(["score", "--responses", &responses(&[0; 21])])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Depression: 0 (Normal)"))
        .stdout(predicate::str::contains("- Anxiety: 0 (Normal)"))
        .stdout(predicate::str::contains("- Stress: 0 (Normal)"));
}

#[test]
fn score_as_json() {
    let home = TempDir::new().unwrap();
    let mut raw = [0u8; 21];
    raw[..7].fill(1);
    let output = dass21(&home)
        .args(["score", "--format", "json", "--name", "Ada", "--responses", &responses(&raw)])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["display_name"], "Ada");
    assert_eq!(result["results"][0]["score"], 14);
    assert_eq!(result["results"][0]["severity"], "moderate");
    assert_eq!(result["results"][2]["severity"], "normal");
}

#[test]
fn score_from_json_file_as_markdown() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("answers.json");
    std::fs::write(&file, serde_json::to_string(&[3u8; 21]).unwrap()).unwrap();

    dass21(&home)
        .args(["score", "--format", "markdown", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# DASS-21 Results"))
        .stdout(predicate::str::contains("Score: 42 - Extremely Severe"));
}

#[test]
fn score_writes_docx() {
    let home = TempDir::new().unwrap();
    let docx = home.path().join("results.docx");

    dass21(&home)
        .args(["score", "--responses", &responses(&[2; 21]), "--docx"])
        .arg(&docx)
        .assert()
        .success();

    let bytes = std::fs::read(&docx).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn score_rejects_short_response_set() {
    let home = TempDir::new().unwrap();
    dass21(&home)
        .args(["score", "--responses", "0,1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 21 responses, got 3"));
}

#[test]
fn score_rejects_out_of_range_answer() {
    let home = TempDir::new().unwrap();
    let mut raw = [0u8; 21];
    raw[3] = 4;
    dass21(&home)
        .args(["score", "--responses", &responses(&raw)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("response 4 for item 4"));
}

#[test]
fn take_reads_answers_from_stdin() {
    let home = TempDir::new().unwrap();
    let mut stdin: String = "2\n".repeat(21);
    stdin.push_str("Ada\n");

    dass21(&home)
        .arg("take")
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ada"))
        .stdout(predicate::str::contains("- Depression: 28 (Extremely Severe)"))
        .stdout(predicate::str::contains("- Anxiety: 28 (Extremely Severe)"))
        .stdout(predicate::str::contains("- Stress: 28 (Severe)"))
        .stderr(predicate::str::contains("Q1 of 21"));
}

#[test]
fn take_quit_scores_nothing() {
    let home = TempDir::new().unwrap();
    dass21(&home)
        .arg("take")
        .write_stdin("1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nothing was scored"));
}

#[test]
fn init_config_then_use_it() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("cfg").join("config.json");

    dass21(&home)
        .arg("init-config")
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let mut json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&config).unwrap()).unwrap();
    assert_eq!(json["config_version"], 1);
    json["format"] = "markdown".into();
    json["styles"]["title"] = "Clinic Results".into();
    std::fs::write(&config, json.to_string()).unwrap();

    dass21(&home)
        .args(["score", "--responses", &responses(&[0; 21]), "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Clinic Results"));

    dass21(&home)
        .arg("init-config")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    dass21(&home)
        .args(["score", "--responses", &responses(&[0; 21]), "--config"])
        .arg(home.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}
