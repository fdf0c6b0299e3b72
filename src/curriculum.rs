//! Curriculum data store.
//!
//! The dataset is a nested JSON record keyed by semester identifier. It is
//! loaded once at startup into an immutable [`Curriculum`] and handed to
//! consumers by reference.

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{GradePlanError, Result};
use crate::types::SubjectType;

/// Semester the wizard works on. Fixed for this release.
pub const CURRENT_SEMESTER: &str = "2-1";

/// Dataset compiled into the binary (IT branch, R22 regulation)
const BUILTIN_CURRICULUM: &str = include_str!("../data/it_r22_curriculum.json");

/// A single subject in a semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject code (e.g., `CS302PC`)
    pub code: String,
    pub name: String,
    pub credits: u8,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
}

impl Subject {
    pub fn is_theory(&self) -> bool {
        self.subject_type == SubjectType::Theory
    }
}

/// Metadata and ordered subject list for one semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterData {
    pub name: String,
    pub total_credits: u32,
    pub subjects: Vec<Subject>,
}

impl SemesterData {
    /// Theory subjects in curriculum order
    pub fn theory_subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects
            .iter()
            .filter(|s| s.subject_type == SubjectType::Theory)
    }

    /// Lab subjects in curriculum order
    pub fn lab_subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects
            .iter()
            .filter(|s| s.subject_type == SubjectType::Lab)
    }

    pub fn theory_credits(&self) -> u32 {
        self.theory_subjects().map(|s| u32::from(s.credits)).sum()
    }

    pub fn lab_credits(&self) -> u32 {
        self.lab_subjects().map(|s| u32::from(s.credits)).sum()
    }

    /// Look up a subject by code
    pub fn subject(&self, code: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.code == code)
    }
}

/// Branch and regulation the curriculum belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub branch: String,
    pub regulation: String,
}

/// Complete curriculum dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    pub branch: String,
    pub regulation: String,
    pub years: BTreeMap<String, SemesterData>,
}

impl Curriculum {
    /// Parse and validate the dataset compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CURRICULUM)
    }

    /// Parse and validate a curriculum from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let curriculum: Self = serde_json::from_str(json)?;
        curriculum.validate()?;
        debug!(
            semesters = curriculum.years.len(),
            branch = %curriculum.branch,
            "Parsed curriculum"
        );
        Ok(curriculum)
    }

    /// Load and validate a curriculum from a JSON file
    pub fn load_from_file(path: &Path) -> AnyResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read curriculum file: {}", path.display()))?;
        let curriculum = Self::from_json_str(&content)
            .with_context(|| format!("Invalid curriculum file: {}", path.display()))?;
        info!("Loaded curriculum from {}", path.display());
        Ok(curriculum)
    }

    /// Load a dataset and confirm the wizard can start on it.
    ///
    /// Beyond `load_from_file`, the current semester must be present.
    pub fn check_file(path: &Path) -> AnyResult<Self> {
        let curriculum = Self::load_from_file(path)?;
        curriculum
            .current_semester()
            .with_context(|| format!("Unusable curriculum file: {}", path.display()))?;
        Ok(curriculum)
    }

    /// Semester data for `key`, if present
    pub fn semester(&self, key: &str) -> Option<&SemesterData> {
        self.years.get(key)
    }

    /// The semester the wizard runs against.
    ///
    /// A dataset without it is unusable; the binary treats this error as fatal.
    pub fn current_semester(&self) -> Result<&SemesterData> {
        self.semester(CURRENT_SEMESTER)
            .ok_or_else(|| GradePlanError::missing_semester(CURRENT_SEMESTER))
    }

    pub fn branch_info(&self) -> BranchInfo {
        BranchInfo {
            branch: self.branch.clone(),
            regulation: self.regulation.clone(),
        }
    }

    /// Check structural consistency of the dataset
    pub fn validate(&self) -> Result<()> {
        if self.branch.trim().is_empty() {
            return Err(GradePlanError::curriculum("Branch must be specified"));
        }
        if self.regulation.trim().is_empty() {
            return Err(GradePlanError::curriculum("Regulation must be specified"));
        }

        for (key, semester) in &self.years {
            if semester.subjects.is_empty() {
                return Err(GradePlanError::curriculum(format!(
                    "Semester {} has no subjects",
                    key
                )));
            }

            let mut seen = HashSet::new();
            for subject in &semester.subjects {
                if subject.code.trim().is_empty() {
                    return Err(GradePlanError::curriculum(format!(
                        "Semester {} has a subject with an empty code",
                        key
                    )));
                }
                if subject.credits == 0 {
                    return Err(GradePlanError::curriculum(format!(
                        "Subject {} in semester {} must have positive credits",
                        subject.code, key
                    )));
                }
                if !seen.insert(subject.code.as_str()) {
                    return Err(GradePlanError::curriculum(format!(
                        "Duplicate subject code {} in semester {}",
                        subject.code, key
                    )));
                }
            }

            let listed = semester.theory_credits() + semester.lab_credits();
            if listed != semester.total_credits {
                return Err(GradePlanError::curriculum(format!(
                    "Semester {} declares {} total credits but its subjects add up to {}",
                    key, semester.total_credits, listed
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(subjects: &str) -> String {
        format!(
            r#"{{
                "branch": "Information Technology",
                "regulation": "R22",
                "years": {{
                    "2-1": {{ "name": "II Year I Semester", "totalCredits": 7, "subjects": [{}] }}
                }}
            }}"#,
            subjects
        )
    }

    #[test]
    fn test_builtin_has_current_semester() {
        let curriculum = Curriculum::builtin().unwrap();
        let semester = curriculum.current_semester().unwrap();
        assert_eq!(semester.name, "II Year I Semester");
        assert_eq!(semester.total_credits, 20);
        assert_eq!(
            semester.theory_credits() + semester.lab_credits(),
            semester.total_credits
        );
    }

    #[test]
    fn test_builtin_branch_info() {
        let info = Curriculum::builtin().unwrap().branch_info();
        assert_eq!(info.branch, "Information Technology");
        assert_eq!(info.regulation, "R22");
    }

    #[test]
    fn test_unknown_semester_is_none() {
        let curriculum = Curriculum::builtin().unwrap();
        assert!(curriculum.semester("9-9").is_none());
        assert!(curriculum.semester("2-2").is_some());
    }

    #[test]
    fn test_missing_current_semester_is_error() {
        let json = r#"{"branch": "IT", "regulation": "R22", "years": {}}"#;
        let curriculum = Curriculum::from_json_str(json).unwrap();
        let err = curriculum.current_semester().unwrap_err();
        assert!(matches!(err, GradePlanError::MissingSemester { ref key } if key == "2-1"));
    }

    #[test]
    fn test_theory_and_lab_split() {
        let json = sample_json(
            r#"{ "code": "T1", "name": "Theory One", "credits": 3, "type": "theory" },
               { "code": "L1", "name": "Lab One", "credits": 1, "type": "lab" },
               { "code": "T2", "name": "Theory Two", "credits": 3, "type": "theory" }"#,
        );
        let curriculum = Curriculum::from_json_str(&json).unwrap();
        let semester = curriculum.current_semester().unwrap();
        let theory: Vec<&str> = semester.theory_subjects().map(|s| s.code.as_str()).collect();
        let labs: Vec<&str> = semester.lab_subjects().map(|s| s.code.as_str()).collect();
        assert_eq!(theory, vec!["T1", "T2"]);
        assert_eq!(labs, vec!["L1"]);
        assert_eq!(semester.theory_credits(), 6);
        assert_eq!(semester.lab_credits(), 1);
        assert!(semester.subject("L1").is_some_and(|s| !s.is_theory()));
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let json = sample_json(
            r#"{ "code": "T1", "name": "Theory One", "credits": 3, "type": "theory" },
               { "code": "T1", "name": "Theory Again", "credits": 3, "type": "theory" }"#,
        );
        let err = Curriculum::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("Duplicate subject code T1"));
    }

    #[test]
    fn test_zero_credits_rejected() {
        let json =
            sample_json(r#"{ "code": "T1", "name": "Theory One", "credits": 0, "type": "theory" }"#);
        assert!(Curriculum::from_json_str(&json).is_err());
    }

    #[test]
    fn test_total_credits_must_match_subjects() {
        let json = sample_json(
            r#"{ "code": "T1", "name": "Theory One", "credits": 3, "type": "theory" },
               { "code": "L1", "name": "Lab One", "credits": 1, "type": "lab" }"#,
        );
        let err = Curriculum::from_json_str(&json).unwrap_err();
        assert!(matches!(err, GradePlanError::Curriculum(_)));
        assert!(err.to_string().contains("declares 7 total credits but its subjects add up to 4"));
    }

    #[test]
    fn test_unknown_subject_type_rejected() {
        let json = sample_json(
            r#"{ "code": "T1", "name": "Theory One", "credits": 3, "type": "seminar" }"#,
        );
        let err = Curriculum::from_json_str(&json).unwrap_err();
        assert!(matches!(err, GradePlanError::Json(_)));
    }
}
