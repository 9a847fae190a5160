use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn prakriti() -> Command {
    let mut cmd = Command::cargo_bin("prakriti").expect("binary");
    cmd.env_remove("PRAKRITI_TEMPLATES").arg("--quiet");
    cmd
}

fn run_json(cmd: &mut Command) -> (bool, Value) {
    let output = cmd.output().expect("command run");
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    (output.status.success(), body)
}

fn answer_csv(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn classify_all_vata_answers() {
    let answers = answer_csv(&[1; 36]);
    let (ok, body) = run_json(prakriti().args(["classify", "--answers", answers.as_str()]));
    assert!(ok);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["snapshot"]["body"]["primary"], "Vata");
    assert_eq!(body["snapshot"]["current"]["summary_key"], "Vata");
    assert_eq!(body["snapshot"]["canonical_code"], 1);
    assert!(body["snapshot"]["balance_score"].as_f64().unwrap() <= 30.0);
    assert_eq!(body["record"]["current_code"], "1");
    assert!(body.get("report").is_none());
}

#[test]
fn classify_with_merge_attaches_report() {
    let answers = answer_csv(&[2; 36]);
    let (ok, body) =
        run_json(prakriti().args(["classify", "--merge", "--answers", answers.as_str()]));
    assert!(ok);
    assert_eq!(body["report"]["body"]["primary"], "Pitta");
    assert_eq!(body["report"]["current"]["template_key"], "Pitta");
    assert_eq!(body["report"]["current_report"]["title"], "Pitta imbalance");
}

#[test]
fn classify_reads_json_from_stdin() {
    let input = serde_json::to_string(&vec![3; 36]).unwrap();
    let (ok, body) = run_json(prakriti().args(["classify", "--stdin"]).write_stdin(input));
    assert!(ok);
    assert_eq!(body["snapshot"]["mind"]["primary"], "Kapha");
}

#[test]
fn invalid_answers_report_error_json() {
    let (ok, body) = run_json(prakriti().args(["classify", "--answers", "1,2,3"]));
    assert!(!ok);
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("expected 36, got 3"));

    let mut values = vec![1; 36];
    values[4] = 7;
    let answers = answer_csv(&values);
    let (ok, body) = run_json(prakriti().args(["classify", "--answers", answers.as_str()]));
    assert!(!ok);
    assert!(body["message"].as_str().unwrap().contains("index 4"));
}

#[test]
fn merge_uses_templates_from_environment() {
    let dir = tempdir().unwrap();
    let templates = dir.path().join("templates.json");
    fs::write(
        &templates,
        r#"{ "body": { "primary": { "Kapha": { "paragraph": "Custom Kapha." } } } }"#,
    )
    .unwrap();
    let record = dir.path().join("record.json");
    fs::write(
        &record,
        r#"{ "body_primary": "Kapha", "mind_primary": "Vata", "imbalance_key": "Balanced" }"#,
    )
    .unwrap();

    let (ok, body) = run_json(
        prakriti()
            .env("PRAKRITI_TEMPLATES", &templates)
            .args(["merge", "--record"])
            .arg(&record),
    );
    assert!(ok);
    assert_eq!(body["report"]["body"]["paragraph"], "Custom Kapha.");
    assert_eq!(body["report"]["mind"]["fallback"], true);
    assert_eq!(body["report"]["current"]["template_key"], "Balanced");
    assert_eq!(body["report"]["body_report"], Value::Null);
}

#[test]
fn broken_template_asset_fails_merge_only() {
    let dir = tempdir().unwrap();
    let templates = dir.path().join("broken.json");
    fs::write(&templates, "{ nope").unwrap();

    let (ok, body) = run_json(
        prakriti()
            .arg("--templates")
            .arg(&templates)
            .args(["classify", "--answers", answer_csv(&[1; 36]).as_str()]),
    );
    assert!(ok, "classification does not need templates");
    assert_eq!(body["snapshot"]["canonical_code"], 1);

    let (ok, body) = run_json(
        prakriti()
            .arg("--templates")
            .arg(&templates)
            .args(["classify", "--merge", "--answers", answer_csv(&[1; 36]).as_str()]),
    );
    assert!(!ok);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Failed to load templates"));
}

#[test]
fn check_templates_reports_builtin_counts() {
    prakriti()
        .arg("check-templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\": \"builtin\""))
        .stdout(predicate::str::contains("\"current_reports\": 9"));
}
