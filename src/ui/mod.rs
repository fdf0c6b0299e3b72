//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Progress header, status line, nav bar and help overlay
//! - `screens` - One screen per wizard step plus the placeholder

pub mod header;
pub mod screens;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::curriculum::{Curriculum, SemesterData};
use crate::theme::UiConstants;
use crate::wizard::WizardStep;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It lays out the frame and
/// delegates to the screen for the current step.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI for the current state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        curriculum: &Curriculum,
        semester: &SemesterData,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(5),
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        let step = state.wizard.step();
        header::render_progress(f, chunks[0], state.wizard.current_step());

        let content_area = chunks[1];
        match step {
            Some(WizardStep::SemesterConfirm) => screens::render_semester_confirm(
                f,
                content_area,
                &curriculum.branch_info(),
                semester,
            ),
            Some(WizardStep::Stage) => screens::render_stage_select(f, content_area, state),
            Some(WizardStep::CurrentCgpa) => screens::render_cgpa(f, content_area, state),
            Some(WizardStep::SubjectMarks) => {
                screens::render_subject_marks(f, content_area, state, semester)
            }
            Some(WizardStep::TargetGrades) => {
                screens::render_target_grades(f, content_area, state, semester)
            }
            None => screens::render_not_implemented(f, content_area, state.wizard.current_step()),
        }

        // The placeholder has no Continue
        if step.is_some() {
            header::render_status(
                f,
                chunks[2],
                state.status_message.as_deref(),
                state.wizard.can_advance(semester),
            );
        }
        header::render_nav_bar(f, step, keybinding_ctx, chunks[3]);

        if state.help_visible {
            header::render_help_overlay(f, step, keybinding_ctx);
        }
    }
}
