//! Header and common widget rendering
//!
//! Progress header, inline status line, navigation bar and help overlay.

use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles, Theme};
use crate::wizard::WizardStep;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Fraction of the wizard completed, for the progress gauge
pub fn progress_ratio(current_step: usize) -> f64 {
    (current_step as f64 / WizardStep::TOTAL_STEPS as f64).clamp(0.0, 1.0)
}

/// Render "Step N of 6" and the progress gauge
pub fn render_progress(f: &mut Frame, area: Rect, current_step: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    let title = Paragraph::new(format!(
        "Step {} of {}",
        current_step,
        WizardStep::TOTAL_STEPS
    ))
    .alignment(Alignment::Center)
    .style(Styles::text_secondary());
    f.render_widget(title, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()))
        .gauge_style(Styles::progress())
        .ratio(progress_ratio(current_step))
        .label("");
    f.render_widget(gauge, chunks[1]);
}

/// Render the inline message and the Continue hint.
///
/// `message` explains why Continue is blocked; `None` with `can_continue`
/// shows the button as enabled.
pub fn render_status(f: &mut Frame, area: Rect, message: Option<&str>, can_continue: bool) {
    let mut spans = vec![Span::styled(
        " Continue (Enter) ",
        Theme::continue_style(can_continue),
    )];
    if let Some(message) = message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.to_string(), Styles::error()));
    }

    let status = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::TOP).border_style(Styles::border_inactive()))
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    step: Option<WizardStep>,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans = Vec::new();
    for item in keybinding_ctx.get_nav_items(step) {
        if !spans.is_empty() {
            spans.push(Span::styled(" | ", Styles::nav_hint()));
        }
        spans.push(Span::styled(item.key_display, Styles::focused()));
        spans.push(Span::styled(
            format!(" {}", item.action_label),
            ratatui::style::Style::default().fg(Colors::FG_SECONDARY),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, step: Option<WizardStep>, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(step, keybinding_ctx);
    help_overlay.render(f, f.area());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ratio() {
        assert_eq!(progress_ratio(0), 0.0);
        assert!((progress_ratio(3) - 0.5).abs() < f64::EPSILON);
        assert_eq!(progress_ratio(6), 1.0);
        assert_eq!(progress_ratio(9), 1.0);
    }
}
