//! Application module
//!
//! Contains the main application loop and event handling.
//!
//! # Module Structure
//! - `state` - Application state (wizard record, focus, text buffers)
//! - Main module - App struct and event loop

mod state;

pub use state::AppState;

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::curriculum::{Curriculum, SemesterData};
use crate::error::{GradePlanError, Result};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App<'a> {
    curriculum: &'a Curriculum,
    semester: &'a SemesterData,
    state: AppState,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
}

impl<'a> App<'a> {
    /// Create a new application instance.
    ///
    /// Fails if the curriculum has no current semester.
    pub fn new(curriculum: &'a Curriculum) -> Result<Self> {
        let semester = curriculum.current_semester()?;
        info!(
            semester = %semester.name,
            subjects = semester.subjects.len(),
            "Creating new App instance"
        );

        Ok(Self {
            curriculum,
            semester,
            state: AppState::new(semester),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.state.should_quit {
            terminal
                .draw(|f| {
                    self.ui_renderer.render(
                        f,
                        &self.state,
                        self.curriculum,
                        self.semester,
                        &self.keybinding_context,
                    )
                })
                .map_err(|e| GradePlanError::terminal(format!("Failed to draw: {}", e)))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }

        info!(step = self.state.wizard.current_step(), "Wizard closed");
        Ok(())
    }

    /// Handle a single key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ignore release/repeat events reported by some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }

        let step = self.state.wizard.step();
        let Some(action) = self.keybinding_context.resolve(step, key.code, key.modifiers) else {
            return;
        };
        debug!(?action, ?step, "Key resolved");

        let typed = match (&action, key.code) {
            (KeyAction::Edit, KeyCode::Char(c)) => Some(c),
            _ => None,
        };
        self.state.handle_action(action, typed, self.semester);
    }
}
