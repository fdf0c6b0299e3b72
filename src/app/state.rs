//! Application state definitions
//!
//! Contains the per-session state behind the terminal front end: the wizard
//! record itself plus cursor, focus and text-buffer bookkeeping that only the
//! views care about.

use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::components::keybindings::KeyAction;
use crate::curriculum::SemesterData;
use crate::input::{EditOutcome, FieldKey, InputHandler};
use crate::types::AcademicStage;
use crate::wizard::validate::required_fields;
use crate::wizard::{WizardError, WizardState, WizardStep};

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Wizard record (step, stage, CGPA, marks, grades)
    pub wizard: WizardState,
    /// Text typed into numeric fields
    pub input: InputHandler,
    /// Highlighted option on the stage step
    pub stage_cursor: usize,
    /// Focused row on the marks and grades steps
    pub focus: usize,
    /// Inline message, set when Continue is blocked
    pub status_message: Option<String>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new(semester: &SemesterData) -> Self {
        Self {
            wizard: WizardState::new(semester),
            input: InputHandler::new(),
            stage_cursor: 0,
            focus: 0,
            status_message: None,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Editable mark fields on the marks step, subject by subject
    pub fn mark_slots(&self, semester: &SemesterData) -> Vec<FieldKey> {
        let fields = required_fields(self.wizard.stage());
        semester
            .theory_subjects()
            .flat_map(|subject| {
                fields.iter().map(|&field| FieldKey::Mark {
                    code: subject.code.clone(),
                    field,
                })
            })
            .collect()
    }

    /// Field receiving typed characters on the current step
    pub fn focused_field(&self, semester: &SemesterData) -> Option<FieldKey> {
        match self.wizard.step() {
            Some(WizardStep::CurrentCgpa) => Some(FieldKey::Cgpa),
            Some(WizardStep::SubjectMarks) => self.mark_slots(semester).get(self.focus).cloned(),
            _ => None,
        }
    }

    /// Number of focusable rows on the current step
    fn row_count(&self, semester: &SemesterData) -> usize {
        match self.wizard.step() {
            Some(WizardStep::Stage) => AcademicStage::iter().count(),
            Some(WizardStep::SubjectMarks) => self.mark_slots(semester).len(),
            Some(WizardStep::TargetGrades) => semester.theory_subjects().count(),
            _ => 0,
        }
    }

    /// Apply one resolved key action.
    ///
    /// `typed` carries the character for `KeyAction::Edit`.
    pub fn handle_action(&mut self, action: KeyAction, typed: Option<char>, semester: &SemesterData) {
        if self.help_visible {
            // Help overlay swallows everything except closing it and quitting
            match action {
                KeyAction::Help | KeyAction::Back => self.help_visible = false,
                KeyAction::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Help => self.help_visible = true,
            KeyAction::Continue => self.continue_step(semester),
            KeyAction::Back => self.back(),
            KeyAction::NavigateUp => self.move_focus(-1, semester),
            KeyAction::NavigateDown => self.move_focus(1, semester),
            KeyAction::Select => self.select_stage(),
            KeyAction::CycleNext => self.cycle_grade(true, semester),
            KeyAction::CyclePrevious => self.cycle_grade(false, semester),
            KeyAction::Edit => {
                if let Some(c) = typed {
                    self.edit(semester, |input, key| input.push_char(key, c));
                }
            }
            KeyAction::Erase => self.edit(semester, |input, key| input.pop_char(key)),
        }
    }

    fn continue_step(&mut self, semester: &SemesterData) {
        match self.wizard.try_advance(semester) {
            Ok(next) => {
                self.wizard = next;
                self.enter_step();
            }
            Err(WizardError::StepIncomplete { reason, .. }) => {
                self.status_message = Some(reason);
            }
            Err(err) => {
                warn!("Unexpected wizard error on continue: {}", err);
                self.status_message = Some(err.to_string());
            }
        }
    }

    fn back(&mut self) {
        self.wizard = self.wizard.retreat();
        self.enter_step();
    }

    /// Reset per-step cursors after a step change
    fn enter_step(&mut self) {
        self.focus = 0;
        self.status_message = None;
        if let Some(stage) = self.wizard.stage() {
            self.stage_cursor = AcademicStage::iter().position(|s| s == stage).unwrap_or(0);
        }
    }

    fn move_focus(&mut self, delta: isize, semester: &SemesterData) {
        let rows = self.row_count(semester);
        if rows == 0 {
            return;
        }
        let cursor = if self.wizard.step() == Some(WizardStep::Stage) {
            &mut self.stage_cursor
        } else {
            &mut self.focus
        };
        *cursor = cursor.saturating_add_signed(delta).min(rows - 1);
    }

    fn select_stage(&mut self) {
        if self.wizard.step() != Some(WizardStep::Stage) {
            return;
        }
        if let Some(stage) = AcademicStage::iter().nth(self.stage_cursor) {
            self.wizard = self.wizard.set_stage(stage);
            self.status_message = None;
        }
    }

    fn cycle_grade(&mut self, forward: bool, semester: &SemesterData) {
        if self.wizard.step() != Some(WizardStep::TargetGrades) {
            return;
        }
        let Some(subject) = semester.theory_subjects().nth(self.focus) else {
            return;
        };
        let current = self.wizard.grade_for(&subject.code).unwrap_or_default();
        let grade = if forward { current.next() } else { current.previous() };
        match self.wizard.set_grade(&subject.code, grade) {
            Ok(next) => self.wizard = next,
            Err(err) => warn!("Grade change rejected: {}", err),
        }
    }

    fn edit(
        &mut self,
        semester: &SemesterData,
        apply: impl FnOnce(&mut InputHandler, &FieldKey) -> EditOutcome,
    ) {
        let Some(key) = self.focused_field(semester) else {
            return;
        };
        let EditOutcome::Set(value) = apply(&mut self.input, &key) else {
            return;
        };

        self.status_message = None;
        match &key {
            FieldKey::Cgpa => self.wizard = self.wizard.set_cgpa(value),
            FieldKey::Mark { code, field } => match self.wizard.set_mark(code, *field, value) {
                Ok(next) => self.wizard = next,
                Err(err) => warn!("Mark change rejected: {}", err),
            },
        }
        debug!(?key, ?value, "Field updated");
    }
}
