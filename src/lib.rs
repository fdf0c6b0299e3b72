//! gradeplan library
//!
//! Core of the grade-planning wizard: curriculum data, the wizard state
//! machine with its validation rules, and the terminal UI around them.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod input;
pub mod theme;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use curriculum::{BranchInfo, Curriculum, SemesterData, Subject, CURRENT_SEMESTER};
pub use error::GradePlanError;
pub use types::{AcademicStage, MarkField, SubjectType, TargetGrade};
pub use wizard::{SubjectMarks, WizardError, WizardState, WizardStep};
