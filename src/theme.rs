//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used throughout the application.
//!
//! # Usage
//! ```rust
//! use gradeplan::theme::{Colors, Styles, Theme};
//! use gradeplan::wizard::validate::FieldStatus;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let input_style = Theme::field_style(FieldStatus::OutOfRange, true);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::types::{SubjectType, TargetGrade};
use crate::wizard::validate::FieldStatus;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and the help overlay
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Gauge/progress bar background
    pub const BG_GAUGE: Color = Color::Rgb(40, 40, 50);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Progress bar fill
    pub const PROGRESS: Color = Color::Green;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Curriculum Colors
    // -------------------------------------------------------------------------

    pub const THEORY: Color = Color::LightBlue;

    pub const LAB: Color = Color::LightGreen;

    pub const GRADE_O: Color = Color::Green;

    pub const GRADE_A_PLUS: Color = Color::Blue;

    pub const GRADE_A: Color = Color::Magenta;

    pub const GRADE_B_PLUS: Color = Color::Rgb(255, 165, 0);
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Bold text
    pub fn text_bold() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused item (cyan highlight)
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    pub fn info() -> Style {
        Style::default().fg(Colors::INFO)
    }

    /// Progress bar style
    pub fn progress() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_GAUGE)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style of a numeric input, coloured by validation status
    pub fn field_style(status: FieldStatus, focused: bool) -> Style {
        let base = match status {
            FieldStatus::Empty => Style::default().fg(Colors::FG_SECONDARY),
            FieldStatus::Valid => Style::default().fg(Colors::SUCCESS),
            FieldStatus::OutOfRange => Style::default().fg(Colors::ERROR),
        };
        if focused {
            base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            base
        }
    }

    /// Badge style for a subject type
    pub fn subject_type_style(subject_type: SubjectType) -> Style {
        match subject_type {
            SubjectType::Theory => Style::default().fg(Colors::THEORY),
            SubjectType::Lab => Style::default().fg(Colors::LAB),
        }
    }

    /// Accent color for a target grade
    pub fn grade_color(grade: TargetGrade) -> Color {
        match grade {
            TargetGrade::O => Colors::GRADE_O,
            TargetGrade::APlus => Colors::GRADE_A_PLUS,
            TargetGrade::A => Colors::GRADE_A,
            TargetGrade::BPlus => Colors::GRADE_B_PLUS,
        }
    }

    /// Continue button style, dimmed while the step is incomplete
    pub fn continue_style(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::FG_MUTED).bg(Colors::BG_GAUGE)
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Help overlay width percentage
    pub const DIALOG_WIDTH_PCT: u16 = 60;

    /// Help overlay height percentage
    pub const DIALOG_HEIGHT_PCT: u16 = 70;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Progress header height (title line + gauge)
    pub const HEADER_HEIGHT: u16 = 4;

    /// Status line height
    pub const STATUS_BAR_HEIGHT: u16 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_style_colors() {
        assert_eq!(
            Theme::field_style(FieldStatus::Valid, false).fg,
            Some(Colors::SUCCESS)
        );
        assert_eq!(
            Theme::field_style(FieldStatus::OutOfRange, false).fg,
            Some(Colors::ERROR)
        );
        assert!(Theme::field_style(FieldStatus::Empty, true)
            .add_modifier
            .contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_grade_colors_distinct() {
        use strum::IntoEnumIterator;
        let colors: Vec<Color> = TargetGrade::iter().map(Theme::grade_color).collect();
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn test_selected_stands_out_from_text() {
        let selected = Styles::selected();
        assert_eq!(selected.bg, Some(Colors::SELECTED_BG));
        assert_eq!(selected.fg, Some(Colors::SELECTED_FG));
        assert!(selected.add_modifier.contains(Modifier::BOLD));
        assert_eq!(Styles::text().bg, None);
    }

    #[test]
    fn test_message_styles_use_status_colors() {
        assert_eq!(Styles::title().fg, Some(Colors::PRIMARY));
        assert_eq!(Styles::error().fg, Some(Colors::ERROR));
        assert_eq!(Styles::warning().fg, Some(Colors::WARNING));
        assert_eq!(Styles::success().fg, Some(Colors::SUCCESS));
    }
}
