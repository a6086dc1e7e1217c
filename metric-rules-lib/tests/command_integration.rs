//! Integration tests driving the command-line entry point.

use camino::Utf8PathBuf;
use metric_rules_lib::{Host, run};
use std::fs;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
    (dir, root)
}

const METRICS_JSON: &str = r#"{
    "artifacts": [
        {
            "name": "OrderService",
            "metrics": [
                { "name": "WMC", "value": 58 },
                { "name": "ATFD", "value": 9 },
                { "name": "TCC", "value": 0.12 },
                { "name": "LOC", "value": 1200 },
                { "name": "NOM", "value": 45 }
            ]
        },
        {
            "name": "Money",
            "metrics": [
                { "name": "WMC", "value": 4 },
                { "name": "ATFD", "value": 0 },
                { "name": "TCC", "value": 0.9 },
                { "name": "LOC", "value": 80 },
                { "name": "NOM", "value": 6 }
            ]
        },
        {
            "name": "Unmeasured",
            "metrics": [{ "name": "LOC", "value": 2000 }, null]
        }
    ]
}"#;

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_init_then_validate() {
    let (_dir, root) = temp_root();
    let rules = root.join("rules.toml");

    let mut host = TestHost::new();
    run(&mut host, ["metric-rules", "init", rules.as_str()]).unwrap();
    assert!(rules.exists());

    let mut host = TestHost::new();
    run(&mut host, ["metric-rules", "validate", "-c", rules.as_str()]).unwrap();
    assert!(host.output_str().contains("Rules file is valid"), "{}", host.output_str());
    assert_eq!(host.exit_code, None);
}

#[test]
fn test_validate_without_explicit_rules_uses_defaults() {
    let mut host = TestHost::new();
    run(&mut host, ["metric-rules", "validate"]).unwrap();
    assert!(host.output_str().contains("default rules"), "{}", host.output_str());
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_validate_reports_broken_rules() {
    let (_dir, root) = temp_root();
    let rules = root.join("broken.toml");
    fs::write(&rules, "[[smell]]\nname = \"x\"\n\n[smell.statement]\nconnective = \"maybe\"\n").unwrap();

    let mut host = TestHost::new();
    let result = run(&mut host, ["metric-rules", "validate", "--rules", rules.as_str()]);

    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("Rules validation failed"), "{}", host.error_str());
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_check_with_default_rules() {
    let (_dir, root) = temp_root();
    let metrics = root.join("metrics.json");
    let report = root.join("report.json");
    fs::write(&metrics, METRICS_JSON).unwrap();

    let mut host = TestHost::new();
    run(
        &mut host,
        [
            "metric-rules",
            "check",
            "--metrics",
            metrics.as_str(),
            "--json",
            report.as_str(),
            "--console",
            "--color",
            "never",
        ],
    )
    .unwrap();

    let console = host.output_str();
    assert!(console.contains("OrderService has"), "{console}");
    assert!(console.contains("Money is clean"), "{console}");
    assert!(console.contains("WMC ≥ 47"), "{console}");

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    let artifacts = json["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 3);

    let detected = |index: usize| -> Vec<String> {
        artifacts[index]["smells"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|s| s["detected"] == true)
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect()
    };

    // large by both lines and methods, so not lopsided
    assert_eq!(detected(0), ["god_class"]);
    assert!(detected(1).is_empty());
    assert!(detected(2).is_empty());
    assert_eq!(artifacts[2]["incomplete"], true);
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_check_fail_on_smell_with_toml_metrics() {
    let (_dir, root) = temp_root();
    let rules = root.join("rules.toml");
    let metrics = root.join("metrics.toml");
    fs::write(
        &rules,
        r#"
[[smell]]
name = "long_method"

[smell.statement]
connective = "or"
thresholds = [{ metric = "CYCLO", relation = ">", value = 10 }]
"#,
    )
    .unwrap();
    fs::write(
        &metrics,
        r#"
[[artifacts]]
name = "parse"
metrics = [{ name = "CYCLO", value = 31 }]

[[artifacts]]
name = "print"
metrics = [{ name = "CYCLO", value = 2 }]
"#,
    )
    .unwrap();

    let mut host = TestHost::new();
    run(
        &mut host,
        ["metric-rules", "check", "--metrics", metrics.as_str(), "-c", rules.as_str(), "--fail-on-smell"],
    )
    .unwrap();

    assert_eq!(host.exit_code, Some(1));
    assert!(host.output_buf.is_empty());
    assert!(host.error_str().contains("1 of 2"), "{}", host.error_str());
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_explain() {
    let (_dir, root) = temp_root();
    let rules = root.join("rules.toml");
    fs::write(
        &rules,
        r#"
[[smell]]
name = "lopsided"

[smell.statement]
connective = "xor"
thresholds = [
    { metric = "LOC", relation = ">", value = 500 },
    { metric = "NOM", relation = ">", value = 20 },
]
"#,
    )
    .unwrap();

    let mut host = TestHost::new();
    run(&mut host, ["metric-rules", "explain", "-c", rules.as_str()]).unwrap();

    insta::assert_snapshot!(host.output_str(), @r"
    lopsided
      (LOC > 500 ⊻ NOM > 20)
    ");
}
