//! Curriculum loading and validation tests
//!
//! Writes datasets to temporary files and loads them the way the
//! `--curriculum` flag and the `validate` command do.

use gradeplan::curriculum::Curriculum;
use gradeplan::error::GradePlanError;
use gradeplan::types::SubjectType;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

const MINIMAL: &str = r#"{
    "branch": "Computer Science",
    "regulation": "R22",
    "years": {
        "2-1": {
            "name": "II Year I Semester",
            "totalCredits": 4,
            "subjects": [
                { "code": "CS201", "name": "Algorithms", "credits": 3, "type": "theory" },
                { "code": "CS202", "name": "Algorithms Lab", "credits": 1, "type": "lab" }
            ]
        }
    }
}"#;

#[test]
fn test_load_minimal_file() {
    let file = write_temp(MINIMAL);
    let curriculum = Curriculum::load_from_file(file.path()).unwrap();

    assert_eq!(curriculum.branch, "Computer Science");
    let semester = curriculum.current_semester().unwrap();
    assert_eq!(semester.total_credits, 4);
    assert_eq!(semester.subjects[1].subject_type, SubjectType::Lab);
    assert_eq!(semester.theory_credits(), 3);
    assert_eq!(semester.lab_credits(), 1);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = Curriculum::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.json"));
}

#[test]
fn test_malformed_json_is_rejected() {
    let file = write_temp("{ \"branch\": ");
    let err = Curriculum::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid curriculum file"));
}

#[test]
fn test_unknown_subject_type_is_rejected() {
    let content = MINIMAL.replace("\"lab\"", "\"seminar\"");
    assert!(matches!(
        Curriculum::from_json_str(&content),
        Err(GradePlanError::Json(_))
    ));
}

#[test]
fn test_duplicate_codes_are_rejected() {
    let content = MINIMAL.replace("CS202", "CS201");
    let err = Curriculum::from_json_str(&content).unwrap_err();
    assert!(matches!(err, GradePlanError::Curriculum(_)));
    assert!(err.to_string().contains("Duplicate subject code CS201"));
}

#[test]
fn test_zero_credits_are_rejected() {
    let content = MINIMAL.replace("\"credits\": 3", "\"credits\": 0");
    let err = Curriculum::from_json_str(&content).unwrap_err();
    assert!(err.to_string().contains("positive credits"));
}

#[test]
fn test_missing_current_semester_is_reported() {
    let content = MINIMAL.replace("\"2-1\"", "\"3-1\"");
    let curriculum = Curriculum::from_json_str(&content).unwrap();

    assert!(curriculum.semester("3-1").is_some());
    let err = curriculum.current_semester().unwrap_err();
    assert!(matches!(err, GradePlanError::MissingSemester { .. }));
    assert_eq!(err.to_string(), "Semester 2-1 not found in curriculum data");
}

#[test]
fn test_check_file_requires_current_semester() {
    let file = write_temp(&MINIMAL.replace("\"2-1\"", "\"3-1\""));
    assert!(Curriculum::load_from_file(file.path()).is_ok());

    let err = Curriculum::check_file(file.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Unusable curriculum file"), "{}", message);
    assert!(message.contains("Semester 2-1 not found"), "{}", message);
}

#[test]
fn test_check_file_accepts_runnable_dataset() {
    let file = write_temp(MINIMAL);
    let curriculum = Curriculum::check_file(file.path()).unwrap();
    assert_eq!(curriculum.current_semester().unwrap().subjects.len(), 2);
}

#[test]
fn test_total_credit_mismatch_is_rejected() {
    let content = MINIMAL.replace("\"totalCredits\": 4", "\"totalCredits\": 5");
    let err = Curriculum::from_json_str(&content).unwrap_err();
    assert!(err.to_string().contains("declares 5 total credits"));
}

#[test]
fn test_builtin_dataset_shape() {
    let curriculum = Curriculum::builtin().unwrap();
    let info = curriculum.branch_info();
    assert_eq!(info.branch, "Information Technology");
    assert_eq!(info.regulation, "R22");

    let semester = curriculum.current_semester().unwrap();
    assert_eq!(semester.name, "II Year I Semester");
    assert_eq!(semester.total_credits, 20);
    assert_eq!(semester.theory_subjects().count(), 5);
    assert_eq!(semester.lab_subjects().count(), 4);
    assert_eq!(
        semester.theory_credits() + semester.lab_credits(),
        semester.total_credits
    );
}
