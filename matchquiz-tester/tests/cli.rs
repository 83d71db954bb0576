use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "matchquiz-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_validates_bundled_document() {
    let exe = env!("CARGO_BIN_EXE_matchquiz-tester");
    let output_path = temp_path("validate");
    let status = Command::new(exe)
        .args(["--mode", "validate", "--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(value["mode"], "validate");
    assert_eq!(value["answer_paths"], 576);
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_plays_an_answer_path() {
    let exe = env!("CARGO_BIN_EXE_matchquiz-tester");
    let output = Command::new(exe)
        .args([
            "--mode",
            "play",
            "--answers",
            "40s,casual,asap,bad,speed",
            "--report",
            "markdown",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Matchquiz Test Results"));
    assert!(stdout.contains("- **Winner**: `ikukuru`"));
}

#[test]
fn cli_json_report_on_stdout_is_parseable() {
    let exe = env!("CARGO_BIN_EXE_matchquiz-tester");
    let output = Command::new(exe)
        .args(["--mode", "sweep", "--verbose", "--report", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a json report");
    assert_eq!(value["mode"], "sweep");
    assert_eq!(value["paths_checked"], 576);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("40s,casual,asap,bad,speed -> ikukuru"));
}

#[test]
fn cli_console_report_keeps_banner() {
    let exe = env!("CARGO_BIN_EXE_matchquiz-tester");
    let output = Command::new(exe)
        .args(["--mode", "validate"])
        .env("NO_COLOR", "1")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("💘 Matchquiz Tester"));
    assert!(stdout.contains("Answer paths: 576"));
}

#[test]
fn cli_sweeps_every_path() {
    let exe = env!("CARGO_BIN_EXE_matchquiz-tester");
    let output = Command::new(exe)
        .args(["--mode", "sweep", "--report", "console"])
        .env("NO_COLOR", "1")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Paths checked: 576/576"));
    assert!(!stdout.contains("Never won"));
}

#[test]
fn cli_fails_on_unreadable_document() {
    let exe = env!("CARGO_BIN_EXE_matchquiz-tester");
    let output = Command::new(exe)
        .args(["--data", "/definitely/missing/quiz-data.json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load quiz document"));
}

#[test]
fn cli_rejects_unknown_option_ids() {
    let exe = env!("CARGO_BIN_EXE_matchquiz-tester");
    let output = Command::new(exe)
        .args(["--mode", "play", "--answers", "40s,casual,never,bad,speed"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("question 3"));
}
