//! Type-safe domain types for gradeplan
//!
//! Stages, grades, subject kinds and mark fields are proper Rust enums so
//! that every match over them is exhaustive and every string form round-trips.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Where the student currently is in the semester.
///
/// Determines which assessment marks must be entered on the marks step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum AcademicStage {
    #[serde(rename = "BEFORE_MID1")]
    #[strum(serialize = "BEFORE_MID1")]
    BeforeMid1,
    #[serde(rename = "AFTER_MID1")]
    #[strum(serialize = "AFTER_MID1")]
    AfterMid1,
    #[serde(rename = "AFTER_MID2")]
    #[strum(serialize = "AFTER_MID2")]
    AfterMid2,
    #[serde(rename = "BEFORE_SEM")]
    #[strum(serialize = "BEFORE_SEM")]
    BeforeSem,
}

impl AcademicStage {
    /// Short label shown on the stage selection screen
    pub const fn label(self) -> &'static str {
        match self {
            Self::BeforeMid1 => "Before Mid-1",
            Self::AfterMid1 => "After Mid-1",
            Self::AfterMid2 => "After Mid-2",
            Self::BeforeSem => "Before Semester Exam",
        }
    }

    /// One-line description of the stage
    pub const fn description(self) -> &'static str {
        match self {
            Self::BeforeMid1 => "Planning before first mid-term exam",
            Self::AfterMid1 => "Mid-1 completed, planning for remaining exams",
            Self::AfterMid2 => "Both mids completed, planning for semester exam",
            Self::BeforeSem => "All internals completed, final exam planning",
        }
    }

    /// Mark fields that must be filled for every theory subject at this stage
    pub const fn required_fields(self) -> &'static [MarkField] {
        match self {
            Self::BeforeMid1 => &[],
            Self::AfterMid1 => &[MarkField::Mid1],
            Self::AfterMid2 => &[MarkField::Mid1, MarkField::Mid2],
            Self::BeforeSem => &[MarkField::Mid1, MarkField::Mid2, MarkField::Internals],
        }
    }
}

/// Kind of subject in the curriculum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubjectType {
    /// Requires mid-term and internal marks
    Theory,
    /// Graded "O" by default, no marks entry
    Lab,
}

/// One assessment mark slot of a theory subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkField {
    Mid1,
    Mid2,
    Internals,
}

impl MarkField {
    /// Highest mark obtainable in this field
    pub const fn max(self) -> f64 {
        match self {
            Self::Mid1 | Self::Mid2 => 30.0,
            Self::Internals => 10.0,
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mid1 => "Mid-1",
            Self::Mid2 => "Mid-2",
            Self::Internals => "Internals",
        }
    }
}

/// Grade a student aims for in a theory subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum TargetGrade {
    #[default]
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    O,
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    A,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus,
}

impl TargetGrade {
    /// Descriptor shown next to the grade
    pub const fn descriptor(self) -> &'static str {
        match self {
            Self::O => "Outstanding",
            Self::APlus => "Excellent",
            Self::A => "Very Good",
            Self::BPlus => "Good",
        }
    }

    /// Inclusive percentage band for the grade
    pub const fn percent_band(self) -> (u8, u8) {
        match self {
            Self::O => (90, 100),
            Self::APlus => (80, 89),
            Self::A => (70, 79),
            Self::BPlus => (60, 69),
        }
    }

    /// Next grade in the option list, wrapping around
    pub const fn next(self) -> Self {
        match self {
            Self::O => Self::APlus,
            Self::APlus => Self::A,
            Self::A => Self::BPlus,
            Self::BPlus => Self::O,
        }
    }

    /// Previous grade in the option list, wrapping around
    pub const fn previous(self) -> Self {
        match self {
            Self::O => Self::BPlus,
            Self::APlus => Self::O,
            Self::A => Self::APlus,
            Self::BPlus => Self::A,
        }
    }
}
