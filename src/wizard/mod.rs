//! Wizard State Machine
//!
//! Owns everything the student enters while walking through the wizard and
//! sequences the steps.
//!
//! # Design Principles
//!
//! - **Whole-state transforms**: every operation takes `&self` and returns the
//!   derived state, so callers never observe a half-applied update
//! - **Permissive setters, strict validators**: setters store what they are
//!   given; range checks live in [`validate`] and only gate advancement
//! - **No Global State**: the curriculum is passed in by reference
//!
//! # Step Flow
//!
//! ```text
//! SemesterConfirm -> Stage -> CurrentCgpa -> SubjectMarks -> TargetGrades -> (not implemented)
//! ```
//!
//! `advance()` is unbounded. Indices past the last implemented step map to
//! `None` from [`WizardState::step`] and are rendered as a placeholder.

pub mod validate;

use std::collections::BTreeMap;
use std::fmt;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;

use crate::curriculum::{CURRENT_SEMESTER, SemesterData};
use crate::types::{AcademicStage, MarkField, TargetGrade};

/// Implemented wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WizardStep {
    /// Confirm branch, regulation and subject list
    SemesterConfirm = 1,
    /// Pick the academic stage
    Stage = 2,
    /// Enter CGPA up to the previous semester
    CurrentCgpa = 3,
    /// Enter marks required by the stage
    SubjectMarks = 4,
    /// Pick a target grade per theory subject
    TargetGrades = 5,
}

impl WizardStep {
    /// Step count shown in the progress header. One more than the
    /// implemented steps: the last one is still a placeholder.
    pub const TOTAL_STEPS: usize = 6;

    /// Map a 1-based step index to an implemented step
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::SemesterConfirm),
            2 => Some(Self::Stage),
            3 => Some(Self::CurrentCgpa),
            4 => Some(Self::SubjectMarks),
            5 => Some(Self::TargetGrades),
            _ => None,
        }
    }

    /// 1-based index of this step
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::SemesterConfirm => "Semester Confirmation",
            Self::Stage => "Academic Stage",
            Self::CurrentCgpa => "Current CGPA",
            Self::SubjectMarks => "Subject Marks",
            Self::TargetGrades => "Target Grades",
        }
    }

    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::SemesterConfirm => "Verify your current semester details",
            Self::Stage => "Select your current position in the semester",
            Self::CurrentCgpa => "Enter your cumulative CGPA up to the previous semester",
            Self::SubjectMarks => "Enter marks obtained in theory subjects",
            Self::TargetGrades => "Select your desired grade for each theory subject",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.index(), self.title())
    }
}

/// Marks reported for one theory subject
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubjectMarks {
    /// Out of 30
    pub mid1: Option<f64>,
    /// Out of 30
    pub mid2: Option<f64>,
    /// Out of 10
    pub internals: Option<f64>,
}

impl SubjectMarks {
    pub fn get(&self, field: MarkField) -> Option<f64> {
        match field {
            MarkField::Mid1 => self.mid1,
            MarkField::Mid2 => self.mid2,
            MarkField::Internals => self.internals,
        }
    }

    fn set(&mut self, field: MarkField, value: Option<f64>) {
        match field {
            MarkField::Mid1 => self.mid1 = value,
            MarkField::Mid2 => self.mid2 = value,
            MarkField::Internals => self.internals = value,
        }
    }
}

/// Errors from wizard state transitions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    /// Subject code is not a theory subject of the current semester
    #[error("Unknown theory subject: {code}")]
    UnknownSubject { code: String },

    /// The current step's validator rejected advancement
    #[error("Cannot continue from {step}: {reason}")]
    StepIncomplete { step: WizardStep, reason: String },
}

/// Everything the student has entered so far.
///
/// # Example
///
/// ```
/// use gradeplan::curriculum::Curriculum;
/// use gradeplan::wizard::WizardState;
///
/// let curriculum = Curriculum::builtin().unwrap();
/// let semester = curriculum.current_semester().unwrap();
///
/// let state = WizardState::new(semester);
/// assert_eq!(state.current_step(), 1);
///
/// let state = state.advance().retreat().retreat();
/// assert_eq!(state.current_step(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    current_step: usize,
    selected_semester: String,
    stage: Option<AcademicStage>,
    current_cgpa: Option<f64>,
    subject_marks: BTreeMap<String, SubjectMarks>,
    target_grades: BTreeMap<String, TargetGrade>,
}

impl WizardState {
    /// Fresh state at step 1 with empty marks and "O" targets for every
    /// theory subject of `semester`.
    pub fn new(semester: &SemesterData) -> Self {
        let subject_marks = semester
            .theory_subjects()
            .map(|s| (s.code.clone(), SubjectMarks::default()))
            .collect();
        let target_grades = semester
            .theory_subjects()
            .map(|s| (s.code.clone(), TargetGrade::default()))
            .collect();

        Self {
            current_step: 1,
            selected_semester: CURRENT_SEMESTER.to_string(),
            stage: None,
            current_cgpa: None,
            subject_marks,
            target_grades,
        }
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The implemented step at the current index, if any
    #[inline]
    pub fn step(&self) -> Option<WizardStep> {
        WizardStep::from_index(self.current_step)
    }

    pub fn selected_semester(&self) -> &str {
        &self.selected_semester
    }

    #[inline]
    pub fn stage(&self) -> Option<AcademicStage> {
        self.stage
    }

    #[inline]
    pub fn current_cgpa(&self) -> Option<f64> {
        self.current_cgpa
    }

    pub fn subject_marks(&self) -> &BTreeMap<String, SubjectMarks> {
        &self.subject_marks
    }

    pub fn marks_for(&self, code: &str) -> Option<&SubjectMarks> {
        self.subject_marks.get(code)
    }

    pub fn target_grades(&self) -> &BTreeMap<String, TargetGrade> {
        &self.target_grades
    }

    pub fn grade_for(&self, code: &str) -> Option<TargetGrade> {
        self.target_grades.get(code).copied()
    }

    /// Move to the next step without validation.
    #[must_use]
    pub fn advance(&self) -> Self {
        let next = Self {
            current_step: self.current_step + 1,
            ..self.clone()
        };
        debug!(from = self.current_step, to = next.current_step, "Wizard advanced");
        next
    }

    /// Move to the previous step, never below step 1.
    #[must_use]
    pub fn retreat(&self) -> Self {
        let next = Self {
            current_step: self.current_step.saturating_sub(1).max(1),
            ..self.clone()
        };
        debug!(from = self.current_step, to = next.current_step, "Wizard retreated");
        next
    }

    /// Advance only if the current step's validator accepts the state.
    ///
    /// Indices past the implemented steps have no validator and advance freely.
    ///
    /// # Errors
    ///
    /// - `StepIncomplete` with an inline-displayable reason
    pub fn try_advance(&self, semester: &SemesterData) -> Result<Self, WizardError> {
        if let Some(step) = self.step() {
            if let Some(reason) = validate::incomplete_reason(step, self, semester) {
                debug!(%step, %reason, "Advance blocked");
                return Err(WizardError::StepIncomplete { step, reason });
            }
        }
        Ok(self.advance())
    }

    /// Whether the current step's validator accepts the state
    pub fn can_advance(&self, semester: &SemesterData) -> bool {
        self.step()
            .is_none_or(|step| validate::step_is_complete(step, self, semester))
    }

    /// Select the academic stage. Marks and grades already entered are kept.
    #[must_use]
    pub fn set_stage(&self, stage: AcademicStage) -> Self {
        debug!(%stage, "Stage selected");
        Self {
            stage: Some(stage),
            ..self.clone()
        }
    }

    /// Store the CGPA verbatim. No range check happens here.
    #[must_use]
    pub fn set_cgpa(&self, cgpa: Option<f64>) -> Self {
        Self {
            current_cgpa: cgpa,
            ..self.clone()
        }
    }

    /// Overwrite one mark field of one theory subject. No range check happens here.
    ///
    /// # Errors
    ///
    /// - `UnknownSubject` if `code` is not a theory subject of this semester
    pub fn set_mark(
        &self,
        code: &str,
        field: MarkField,
        value: Option<f64>,
    ) -> Result<Self, WizardError> {
        let mut next = self.clone();
        let marks = next
            .subject_marks
            .get_mut(code)
            .ok_or_else(|| WizardError::UnknownSubject {
                code: code.to_string(),
            })?;
        marks.set(field, value);
        Ok(next)
    }

    /// Overwrite the target grade of one theory subject.
    ///
    /// # Errors
    ///
    /// - `UnknownSubject` if `code` is not a theory subject of this semester
    pub fn set_grade(&self, code: &str, grade: TargetGrade) -> Result<Self, WizardError> {
        let mut next = self.clone();
        let slot = next
            .target_grades
            .get_mut(code)
            .ok_or_else(|| WizardError::UnknownSubject {
                code: code.to_string(),
            })?;
        *slot = grade;
        Ok(next)
    }

    /// Count of theory subjects per target grade, in grade order.
    /// Grades nobody picked are omitted.
    pub fn grade_summary(&self, semester: &SemesterData) -> Vec<(TargetGrade, usize)> {
        TargetGrade::iter()
            .map(|grade| {
                let count = semester
                    .theory_subjects()
                    .filter(|s| self.grade_for(&s.code).unwrap_or_default() == grade)
                    .count();
                (grade, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

// Convert WizardError to the main GradePlanError type
impl From<WizardError> for crate::error::GradePlanError {
    fn from(err: WizardError) -> Self {
        crate::error::GradePlanError::general(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Curriculum;

    fn semester() -> SemesterData {
        Curriculum::builtin()
            .unwrap()
            .current_semester()
            .unwrap()
            .clone()
    }

    #[test]
    fn test_new_state_defaults() {
        let sem = semester();
        let state = WizardState::new(&sem);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.step(), Some(WizardStep::SemesterConfirm));
        assert_eq!(state.selected_semester(), "2-1");
        assert!(state.stage().is_none());
        assert!(state.current_cgpa().is_none());
        assert_eq!(state.subject_marks().len(), sem.theory_subjects().count());
        assert!(state
            .subject_marks()
            .values()
            .all(|m| *m == SubjectMarks::default()));
        assert!(state.target_grades().values().all(|g| *g == TargetGrade::O));
    }

    #[test]
    fn test_labs_are_not_tracked() {
        let sem = semester();
        let state = WizardState::new(&sem);
        for lab in sem.lab_subjects() {
            assert!(state.marks_for(&lab.code).is_none());
            assert!(state.grade_for(&lab.code).is_none());
        }
    }

    #[test]
    fn test_retreat_clamps_at_one() {
        let state = WizardState::new(&semester());
        assert_eq!(state.retreat().current_step(), 1);
        assert_eq!(state.advance().advance().retreat().current_step(), 2);
    }

    #[test]
    fn test_advance_is_unbounded() {
        let mut state = WizardState::new(&semester());
        for _ in 0..7 {
            state = state.advance();
        }
        assert_eq!(state.current_step(), 8);
        assert!(state.step().is_none());
    }

    #[test]
    fn test_operations_leave_original_untouched() {
        let state = WizardState::new(&semester());
        let moved = state.set_stage(AcademicStage::AfterMid1).advance();
        assert_eq!(state.current_step(), 1);
        assert!(state.stage().is_none());
        assert_eq!(moved.stage(), Some(AcademicStage::AfterMid1));
    }

    #[test]
    fn test_set_stage_keeps_marks() {
        let state = WizardState::new(&semester())
            .set_mark("CS302PC", MarkField::Mid1, Some(25.0))
            .unwrap()
            .set_stage(AcademicStage::AfterMid2);
        assert_eq!(state.marks_for("CS302PC").unwrap().mid1, Some(25.0));
    }

    #[test]
    fn test_set_cgpa_is_verbatim() {
        let state = WizardState::new(&semester()).set_cgpa(Some(12.5));
        assert_eq!(state.current_cgpa(), Some(12.5));
        assert!(state.set_cgpa(None).current_cgpa().is_none());
    }

    #[test]
    fn test_set_mark_unknown_subject() {
        let state = WizardState::new(&semester());
        let err = state
            .set_mark("CS306PC", MarkField::Mid1, Some(10.0))
            .unwrap_err();
        assert_eq!(
            err,
            WizardError::UnknownSubject {
                code: "CS306PC".to_string()
            }
        );
    }

    #[test]
    fn test_set_grade_only_touches_one_subject() {
        let state = WizardState::new(&semester())
            .set_grade("MA301BS", TargetGrade::A)
            .unwrap();
        assert_eq!(state.grade_for("MA301BS"), Some(TargetGrade::A));
        assert!(state
            .target_grades()
            .iter()
            .filter(|(code, _)| code.as_str() != "MA301BS")
            .all(|(_, g)| *g == TargetGrade::O));
    }

    #[test]
    fn test_try_advance_blocks_on_stage_step() {
        let sem = semester();
        let state = WizardState::new(&sem).advance();
        let err = state.try_advance(&sem).unwrap_err();
        assert!(matches!(
            err,
            WizardError::StepIncomplete {
                step: WizardStep::Stage,
                ..
            }
        ));
        let next = state
            .set_stage(AcademicStage::BeforeMid1)
            .try_advance(&sem)
            .unwrap();
        assert_eq!(next.step(), Some(WizardStep::CurrentCgpa));
    }

    #[test]
    fn test_grade_summary_counts() {
        let sem = semester();
        let state = WizardState::new(&sem)
            .set_grade("MA301BS", TargetGrade::APlus)
            .unwrap()
            .set_grade("CS302PC", TargetGrade::APlus)
            .unwrap();
        let theory = sem.theory_subjects().count();
        assert_eq!(
            state.grade_summary(&sem),
            vec![(TargetGrade::O, theory - 2), (TargetGrade::APlus, 2)]
        );
    }

    #[test]
    fn test_step_indices_round_trip() {
        for index in 1..=5 {
            let step = WizardStep::from_index(index).unwrap();
            assert_eq!(step.index(), index);
        }
        assert!(WizardStep::from_index(0).is_none());
        assert!(WizardStep::from_index(6).is_none());
    }
}
