//! Step validators and numeric input parsing.
//!
//! Validators are pure functions over the wizard state. They decide whether
//! Continue is enabled and produce the inline message shown when it is not.
//! Nothing here mutates state or returns an error type: invalid input is
//! an ordinary, displayable condition.

use std::collections::BTreeMap;

use super::{SubjectMarks, WizardState, WizardStep};
use crate::curriculum::SemesterData;
use crate::types::{AcademicStage, MarkField};

/// Lowest and highest CGPA accepted by the CGPA step
pub const CGPA_RANGE: (f64, f64) = (0.0, 10.0);

/// Inline status of a single numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Nothing entered yet
    Empty,
    /// Present and within range
    Valid,
    /// Present but outside the accepted range
    OutOfRange,
}

impl FieldStatus {
    fn of(value: Option<f64>, min: f64, max: f64) -> Self {
        match value {
            None => Self::Empty,
            Some(v) if v >= min && v <= max => Self::Valid,
            Some(_) => Self::OutOfRange,
        }
    }
}

/// Status of a mark against `[0, max]`
pub fn mark_status(value: Option<f64>, max: f64) -> FieldStatus {
    FieldStatus::of(value, 0.0, max)
}

/// A mark is valid when present and within `[0, max]`
pub fn is_valid_mark(value: Option<f64>, max: f64) -> bool {
    mark_status(value, max) == FieldStatus::Valid
}

pub fn cgpa_status(value: Option<f64>) -> FieldStatus {
    FieldStatus::of(value, CGPA_RANGE.0, CGPA_RANGE.1)
}

/// CGPA is valid when present and within `[0, 10]`
pub fn is_valid_cgpa(value: Option<f64>) -> bool {
    cgpa_status(value) == FieldStatus::Valid
}

/// Fields required on the marks step. No stage means nothing is required.
pub fn required_fields(stage: Option<AcademicStage>) -> &'static [MarkField] {
    match stage {
        Some(stage) => stage.required_fields(),
        None => &[],
    }
}

/// First problem with the marks step, if any.
///
/// `BeforeMid1` short-circuits to valid. Otherwise every theory subject needs
/// a marks entry with each required field present and in range.
fn marks_problem(
    stage: Option<AcademicStage>,
    semester: &SemesterData,
    marks: &BTreeMap<String, SubjectMarks>,
) -> Option<String> {
    if stage == Some(AcademicStage::BeforeMid1) {
        return None;
    }

    let fields = required_fields(stage);
    for subject in semester.theory_subjects() {
        let Some(entry) = marks.get(&subject.code) else {
            return Some(format!("{}: no marks recorded", subject.code));
        };
        for &field in fields {
            match mark_status(entry.get(field), field.max()) {
                FieldStatus::Valid => {}
                FieldStatus::Empty => {
                    return Some(format!("{}: {} is required", subject.code, field.label()));
                }
                FieldStatus::OutOfRange => {
                    return Some(format!(
                        "{}: {} must be between 0 and {}",
                        subject.code,
                        field.label(),
                        field.max()
                    ));
                }
            }
        }
    }
    None
}

/// Whether every theory subject has all marks required by `stage`
pub fn marks_complete(
    stage: Option<AcademicStage>,
    semester: &SemesterData,
    marks: &BTreeMap<String, SubjectMarks>,
) -> bool {
    marks_problem(stage, semester, marks).is_none()
}

/// Why `step` cannot be left yet, or `None` if Continue is allowed
pub fn incomplete_reason(
    step: WizardStep,
    state: &WizardState,
    semester: &SemesterData,
) -> Option<String> {
    match step {
        WizardStep::SemesterConfirm | WizardStep::TargetGrades => None,
        WizardStep::Stage => state
            .stage()
            .is_none()
            .then(|| "Select your academic stage to continue".to_string()),
        WizardStep::CurrentCgpa => match cgpa_status(state.current_cgpa()) {
            FieldStatus::Valid => None,
            FieldStatus::Empty => Some("Enter your CGPA to continue".to_string()),
            FieldStatus::OutOfRange => Some("CGPA must be between 0 and 10".to_string()),
        },
        WizardStep::SubjectMarks => marks_problem(state.stage(), semester, state.subject_marks()),
    }
}

/// Whether Continue is enabled on `step`
pub fn step_is_complete(step: WizardStep, state: &WizardState, semester: &SemesterData) -> bool {
    incomplete_reason(step, state, semester).is_none()
}

/// Value held by a numeric input field with the given text.
///
/// Only a finite number yields a value. Empty or malformed text leaves the
/// field unset, so the step validator treats it as missing.
pub fn parse_numeric_input(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
