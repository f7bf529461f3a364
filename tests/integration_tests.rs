#![cfg(feature = "cli")]

use clap::Parser;
use student_roster::utils::validation::Validate;
use student_roster::{
    CliConfig, LocalStorage, RosterEngine, RosterError, Student, StudentPipeline, TomlConfig,
};
use tempfile::TempDir;

const CLASS_CSV: &str = "Name,Student_ID,Score,Attendance\n\
                         Alice,1,90,95\n\
                         Bob,2,70,80\n\
                         Cara,3,70,60\n";

fn write_class_file(dir: &TempDir) {
    std::fs::write(dir.path().join("class.csv"), CLASS_CSV).unwrap();
}

fn names(students: &[Student]) -> Vec<&str> {
    students.iter().map(Student::name).collect()
}

#[tokio::test]
async fn test_end_to_end_csv_run() {
    let temp_dir = TempDir::new().unwrap();
    write_class_file(&temp_dir);

    let config = CliConfig::parse_from([
        "student-roster",
        "--data-file",
        "class.csv",
        "--search-name",
        "Bob",
        "--search-score",
        "70",
        "--top",
        "2",
        "--output",
        "reports/summary.json",
    ]);
    assert!(config.validate().is_ok());

    let storage = LocalStorage::new(temp_dir.path());
    let engine = RosterEngine::new(StudentPipeline::new(storage, config));

    let outcome = engine.run().await.unwrap();
    let report = &outcome.report;

    assert_eq!(report.student_count, 3);
    assert_eq!(report.name_match.as_ref().unwrap().student_id(), 2);
    assert_eq!(report.score_match.as_ref().unwrap().name(), "Bob");
    assert_eq!(names(&report.top_students), vec!["Cara", "Alice"]);
    assert!((report.average_score - 76.666_666_7).abs() < 1e-6);
    assert_eq!(names(outcome.roster.students()), vec!["Bob", "Cara", "Alice"]);

    assert_eq!(outcome.output_path.as_deref(), Some("reports/summary.json"));
    let written = std::fs::read(temp_dir.path().join("reports/summary.json")).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(json["search_name"], "Bob");
    assert_eq!(json["score_match"]["name"], "Bob");
    assert_eq!(json["top_students"].as_array().unwrap().len(), 2);
    assert!(json["timings"]["sort_secs"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_missing_csv_falls_back_to_generated_students() {
    let temp_dir = TempDir::new().unwrap();

    let config = CliConfig::parse_from([
        "student-roster",
        "--data-file",
        "absent.csv",
        "--count",
        "300",
        "--seed",
        "11",
    ]);

    let storage = LocalStorage::new(temp_dir.path());
    let engine = RosterEngine::new_with_monitoring(StudentPipeline::new(storage, config), true);

    let outcome = engine.run().await.unwrap();

    assert_eq!(outcome.report.student_count, 300);
    assert_eq!(outcome.report.top_students.len(), 5);
    assert!(outcome.report.name_match.is_some());
    assert!(outcome.report.score_match.is_some());
    assert!(outcome.roster.is_sorted_by_score());
    assert!(outcome.output_path.is_none());
}

#[tokio::test]
async fn test_malformed_csv_fails_run() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("class.csv"),
        "Name,Student_ID,Score,Attendance\nAlice,1,ninety,95\n",
    )
    .unwrap();

    let config = CliConfig::parse_from(["student-roster", "-f", "class.csv"]);
    let engine = RosterEngine::new(StudentPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config,
    ));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, RosterError::InvalidRow { line: 2, .. }));
}

#[tokio::test]
async fn test_skip_policy_keeps_good_rows() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("class.csv"),
        format!("{}Dan,4,not-a-score,90\n", CLASS_CSV),
    )
    .unwrap();

    let config = CliConfig::parse_from([
        "student-roster",
        "-f",
        "class.csv",
        "--on-invalid-row",
        "skip",
    ]);
    let engine = RosterEngine::new(StudentPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config,
    ));

    let outcome = engine.run().await.unwrap();
    assert_eq!(outcome.report.student_count, 3);
    // Defaults: first student's name, middle student's score.
    assert_eq!(outcome.report.search_name, "Alice");
    assert_eq!(outcome.report.search_score, 70);
}

#[tokio::test]
async fn test_toml_configured_run() {
    let temp_dir = TempDir::new().unwrap();
    write_class_file(&temp_dir);

    let config_path = temp_dir.path().join("roster.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[roster]
name = "Integration"

[source]
data_file = "class.csv"
base_dir = "{}"

[queries]
search_name = "Zed"
search_score = 90
top_n = 10

[report]
output_file = "out.json"
"#,
            temp_dir.path().display()
        ),
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    assert!(config.validate().is_ok());

    let storage = LocalStorage::new(config.base_dir());
    let engine = RosterEngine::new(StudentPipeline::new(storage, config));
    let outcome = engine.run().await.unwrap();

    assert!(outcome.report.name_match.is_none());
    assert_eq!(outcome.report.score_match.as_ref().unwrap().name(), "Alice");
    assert_eq!(names(&outcome.report.top_students), vec!["Bob", "Cara", "Alice"]);
    assert!(temp_dir.path().join("out.json").exists());
}
