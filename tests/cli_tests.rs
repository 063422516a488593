use regex::Regex;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    fn store(&self) -> String {
        self.dir.path().join("saved.json").to_string_lossy().into_owned()
    }

    fn run(&self, args: &[&str]) -> Output {
        let store = self.store();
        let mut full = vec!["--store", store.as_str()];
        full.extend_from_slice(args);
        Command::new(env!("CARGO_BIN_EXE_lockforge"))
            .args(&full)
            .output()
            .expect("Failed to run lockforge")
    }
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_analyze_json_output() {
    let ctx = TestContext::new();
    let out = ctx.run(&["analyze", "--taps", "0,2,6,8", "--json"]);
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["sequence"], serde_json::json!([0, 1, 2, 4, 6, 7, 8]));
    assert_eq!(v["score"], 72);
    assert_eq!(v["rating"], "medium");
}

#[test]
fn test_analyze_table_output() {
    let ctx = TestContext::new();
    let out = ctx.run(&["analyze", "-t", "0,8"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("0 -> 4 -> 8"));
    assert!(text.contains("needs at least 4 nodes"));
}

#[test]
fn test_weight_override_changes_score() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "analyze",
        "--taps",
        "0,2,6,8",
        "--json",
        "--weight-start",
        "0",
    ]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["score"], 62);
}

#[test]
fn test_weights_file_with_cli_override() {
    let ctx = TestContext::new();
    let path = ctx.dir.path().join("weights.json");
    std::fs::write(&path, r#"{"weight_start": 0.0, "weight_turns": 0.0}"#).unwrap();
    let path = path.to_string_lossy().into_owned();

    // File alone: start and turn contributions vanish -> 71.66 - 10 - 6.67.
    let out = ctx.run(&["--weights", &path, "analyze", "--taps", "0,2,6,8", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["score"], 55);

    // Explicit flag beats the file.
    let out = ctx.run(&[
        "--weights",
        &path,
        "analyze",
        "--taps",
        "0,2,6,8",
        "--json",
        "--weight-turns",
        "1.0",
    ]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["score"], 62);
}

#[test]
fn test_invalid_taps_fail() {
    let ctx = TestContext::new();
    let out = ctx.run(&["analyze", "--taps", "0,9"]);
    assert!(!out.status.success());

    let out = ctx.run(&["analyze", "--taps=0,-1,2"]);
    assert!(!out.status.success());
}

#[test]
fn test_analyze_pointer_positions() {
    let ctx = TestContext::new();
    // Corners of the default pad, plus one miss that is ignored.
    let out = ctx.run(&[
        "analyze",
        "--points",
        "40,40; 260,40; 150,95; 40,260; 260,260",
        "--json",
    ]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["sequence"], serde_json::json!([0, 1, 2, 4, 6, 7, 8]));
    assert_eq!(v["score"], 72);

    // A smaller pad moves the nodes under the same pointer positions.
    let out = ctx.run(&[
        "analyze",
        "--points",
        "20,20; 100,100",
        "--pad-size",
        "120",
        "--pad-margin",
        "20",
        "--json",
    ]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["sequence"], serde_json::json!([0, 4, 8]));
}

#[test]
fn test_invalid_pad_or_input_mix_fails() {
    let ctx = TestContext::new();
    let bad_margin = ctx.run(&["analyze", "--points", "40,40", "--pad-margin", "150"]);
    assert!(!bad_margin.status.success());

    let bad_radius = ctx.run(&["analyze", "--points", "40,40", "--hit-radius=-1"]);
    assert!(!bad_radius.status.success());

    let both = ctx.run(&["analyze", "--points", "40,40", "--taps", "0,8"]);
    assert!(!both.status.success());

    let pad_on_save = ctx.run(&["save", "--taps", "0,2,6,8", "--hit-radius", "10"]);
    assert!(!pad_on_save.status.success());
}

#[test]
fn test_estimate() {
    let ctx = TestContext::new();
    let out = ctx.run(&["estimate", "--score", "100"]);
    assert!(out.status.success());
    let re = Regex::new(r"([\d,]+) tries, (.+) @").unwrap();
    let text = stdout(&out);
    let caps = re.captures(&text).expect("no estimate line");
    assert_eq!(&caps[1], "100,000,000");
    assert_eq!(&caps[2], "115d 17h");
}

#[test]
fn test_presets_sorted_strongest_first() {
    let ctx = TestContext::new();
    let out = ctx.run(&["presets"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let first_row = text
        .lines()
        .find(|l| l.contains("knight") || l.contains("shape") || l.contains("square"))
        .unwrap();
    assert!(first_row.contains("knight_weave"), "row was: {}", first_row);
}

#[test]
fn test_save_list_delete_cycle() {
    let ctx = TestContext::new();
    assert!(ctx.run(&["save", "--taps", "0,2,6,8"]).status.success());
    assert!(ctx
        .run(&["save", "--taps", "1,3,5,7", "--name", "diamond"])
        .status
        .success());
    assert!(!ctx.run(&["save", "--taps", "0,1"]).status.success());

    let text = stdout(&ctx.run(&["list"]));
    assert!(text.contains("Pattern 1"));
    assert!(text.contains("diamond"));

    let row = Regex::new(r"diamond\s*\|\s*1-3-4-5-7\s*\|\s*5\s*\|\s*57").unwrap();
    assert!(row.is_match(&text), "list was: {}", text);

    assert!(ctx.run(&["delete", "--index", "0"]).status.success());
    let text = stdout(&ctx.run(&["list"]));
    assert!(!text.contains("Pattern 1"));

    assert!(ctx.run(&["clear-saved"]).status.success());
    assert!(!Path::new(&ctx.store()).exists());
    assert!(stdout(&ctx.run(&["list"])).contains("No saved patterns"));
}
