use std::fs;
use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "retrolist-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

const DATASET: &str = r#"{"query_id": "F1", "query_type": "filter", "query": "SNES only", "ground_truth": "success", "response": "{\"success\": true, \"results_count\": 0, \"results\": []}", "success": "yes"}
{"query_id": "C1", "query_type": "collection", "query": "persist owned", "ground_truth": "success", "response": "{\"action\": \"persist\", \"persistence_supported\": false}", "success": "yes"}
{"query_id": "X1", "query_type": "sharecode", "query": "import", "ground_truth": "failure", "response": "{not json", "success": "no"}
"#;

#[test]
fn cli_list_evaluators_writes_output() {
    let exe = env!("CARGO_BIN_EXE_retrolist-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-evaluators", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available evaluators"));
    assert!(content.contains("search_filter_accuracy"));
    assert!(content.contains("ui_ux_functionality"));
}

#[test]
fn cli_evaluates_dataset_and_writes_artifacts() {
    let exe = env!("CARGO_BIN_EXE_retrolist-tester");
    let dir = temp_path("run");
    fs::create_dir_all(&dir).expect("create dir");
    let data = dir.join("evaluation_data.jsonl");
    fs::write(&data, DATASET).expect("write dataset");

    let output = Command::new(exe)
        .arg("--data")
        .arg(&data)
        .args(["--report", "console"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Retro Game List Evaluator"));
    assert!(stdout.contains("Loaded 3 test cases"));
    assert!(stdout.contains("Evaluation complete"));

    let summary: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.join("evaluation_summary.json")).expect("summary"),
    )
    .expect("summary json");
    assert_eq!(summary["total_evaluations"], 3);
    assert_eq!(summary["metrics"]["search_filter_accuracy"]["average_score"], 0.167);
    assert_eq!(summary["metrics"]["data_integrity"]["pass_rate"], "0.0%");
    assert_eq!(summary["by_query_type"]["sharecode"]["avg_score"], 0.0);

    let results: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.join("evaluation_results.json")).expect("results"),
    )
    .expect("results json");
    assert_eq!(results[1]["data_integrity_score"], 0.5);
    assert_eq!(results[2]["integrity_reason"], "Invalid response format");
}

#[test]
fn cli_missing_dataset_exits_with_failure() {
    let exe = env!("CARGO_BIN_EXE_retrolist-tester");
    let output = Command::new(exe)
        .arg("--data")
        .arg(temp_path("absent").join("evaluation_data.jsonl"))
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File not found"));
}

#[test]
fn cli_malformed_dataset_exits_with_failure() {
    let exe = env!("CARGO_BIN_EXE_retrolist-tester");
    let dir = temp_path("malformed");
    fs::create_dir_all(&dir).expect("create dir");
    let data = dir.join("evaluation_data.jsonl");
    fs::write(&data, "{\"query_type\": \"search\"}\nnot a record\n").expect("write dataset");

    let output = Command::new(exe)
        .arg("--data")
        .arg(&data)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.join("evaluation_results.json").exists());
}

#[test]
fn cli_converts_capture_before_evaluating() {
    let exe = env!("CARGO_BIN_EXE_retrolist-tester");
    let dir = temp_path("convert");
    fs::create_dir_all(&dir).expect("create dir");
    let capture = dir.join("responses.json");
    fs::write(
        &capture,
        r#"[{"query_id": "E1", "query_type": "export", "query_description": "export csv",
             "response": {"csv_valid": true, "games_count": 3, "success": true},
             "timestamp": "2025-01-01T00:00:00Z", "passed": true}]"#,
    )
    .expect("write capture");
    let data = dir.join("evaluation").join("evaluation_data.jsonl");
    let report = dir.join("report.md");

    let status = Command::new(exe)
        .arg("--from-responses")
        .arg(&capture)
        .arg("--data")
        .arg(&data)
        .args(["--report", "markdown", "--output"])
        .arg(&report)
        .status()
        .expect("run cli");
    assert!(status.success());
    assert!(data.is_file());
    let markdown = fs::read_to_string(report).expect("report");
    assert!(markdown.contains("| export | 1 |"));
    assert!(dir.join("evaluation").join("evaluation_results.json").is_file());
}
