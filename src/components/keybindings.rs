//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current wizard
//! step. `None` stands for step indices past the implemented ones.

use crate::wizard::WizardStep;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Select,
    CyclePrevious,
    CycleNext,
    Edit,
    Erase,
    Continue,
    Back,
    Quit,
    Help,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Step-specific keybindings
    step_bindings: HashMap<Option<WizardStep>, Vec<Keybinding>>,
    /// Global keybindings (available on every step)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            step_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all steps
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let continue_binding =
            || Keybinding::new(KeyCode::Enter, KeyAction::Continue, "Enter", "Continue");
        let back_binding = || Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back");
        // Left/Right double as Back/Continue except where they cycle grades
        let right_binding =
            || Keybinding::new(KeyCode::Right, KeyAction::Continue, "Right", "Continue");
        let left_binding = || Keybinding::new(KeyCode::Left, KeyAction::Back, "Left", "Back");

        // Semester confirmation (first step, nothing to go back to)
        self.step_bindings.insert(
            Some(WizardStep::SemesterConfirm),
            vec![continue_binding(), right_binding()],
        );

        // Stage selection
        self.step_bindings.insert(
            Some(WizardStep::Stage),
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous stage"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next stage"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Select, "Space", "Select stage"),
                continue_binding(),
                back_binding(),
                right_binding(),
                left_binding(),
            ],
        );

        // CGPA entry
        self.step_bindings.insert(
            Some(WizardStep::CurrentCgpa),
            vec![
                Keybinding::new(KeyCode::Char('0'), KeyAction::Edit, "0-9 .", "Type CGPA"),
                Keybinding::new(KeyCode::Backspace, KeyAction::Erase, "Bksp", "Delete"),
                continue_binding(),
                back_binding(),
                right_binding(),
                left_binding(),
            ],
        );

        // Marks entry
        self.step_bindings.insert(
            Some(WizardStep::SubjectMarks),
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous field"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next field"),
                Keybinding::new(KeyCode::Tab, KeyAction::NavigateDown, "Tab", "Next field"),
                Keybinding::new(KeyCode::Char('0'), KeyAction::Edit, "0-9 .", "Type mark"),
                Keybinding::new(KeyCode::Backspace, KeyAction::Erase, "Bksp", "Delete"),
                continue_binding(),
                back_binding(),
                right_binding(),
                left_binding(),
            ],
        );

        // Target grades
        self.step_bindings.insert(
            Some(WizardStep::TargetGrades),
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous subject"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next subject"),
                Keybinding::new(KeyCode::Left, KeyAction::CyclePrevious, "Left", "Higher grade"),
                Keybinding::new(KeyCode::Right, KeyAction::CycleNext, "Right", "Lower grade"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::CycleNext, "Space", "Lower grade"),
                continue_binding(),
                back_binding(),
            ],
        );

        // Placeholder for steps that are not implemented yet
        self.step_bindings.insert(None, vec![back_binding(), left_binding()]);
    }

    /// Get keybindings for a specific step (includes global bindings)
    pub fn get_bindings(&self, step: Option<WizardStep>) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(step_bindings) = self.step_bindings.get(&step) {
            bindings.extend(step_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press to an action on the given step.
    ///
    /// Numeric characters resolve to `Edit` on steps that accept typing even
    /// though only one representative key is registered for display.
    pub fn resolve(
        &self,
        step: Option<WizardStep>,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        // Shifted characters like '?' arrive with SHIFT on some terminals
        let modifiers = match key {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        let bindings = self.get_bindings(step);
        if let Some(binding) = bindings
            .iter()
            .find(|b| b.key == key && b.modifiers == modifiers)
        {
            return Some(binding.action.clone());
        }

        let accepts_typing = bindings.iter().any(|b| b.action == KeyAction::Edit);
        match key {
            KeyCode::Char(c) if accepts_typing && crate::input::is_numeric_char(c) => {
                Some(KeyAction::Edit)
            }
            _ => None,
        }
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, step: Option<WizardStep>) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(step);

        let priority_actions = match step {
            Some(WizardStep::SemesterConfirm) => {
                vec![KeyAction::Continue, KeyAction::Help, KeyAction::Quit]
            }
            Some(WizardStep::Stage) => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Continue,
                KeyAction::Back,
                KeyAction::Quit,
            ],
            Some(WizardStep::CurrentCgpa) => vec![
                KeyAction::Edit,
                KeyAction::Continue,
                KeyAction::Back,
                KeyAction::Quit,
            ],
            Some(WizardStep::SubjectMarks) => vec![
                KeyAction::NavigateUp,
                KeyAction::Edit,
                KeyAction::Continue,
                KeyAction::Back,
                KeyAction::Quit,
            ],
            Some(WizardStep::TargetGrades) => vec![
                KeyAction::NavigateUp,
                KeyAction::CyclePrevious,
                KeyAction::Continue,
                KeyAction::Back,
                KeyAction::Quit,
            ],
            None => vec![KeyAction::Back, KeyAction::Quit],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            let Some(binding) = bindings.iter().find(|b| b.action == action) else {
                continue;
            };
            // Up/Down and Left/Right pairs are shown as one item
            let item = match action {
                KeyAction::NavigateUp => NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                },
                KeyAction::CyclePrevious => NavBarItem {
                    key_display: "Left/Right".to_string(),
                    action_label: "Change grade".to_string(),
                },
                _ => NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                },
            };
            items.push(item);
        }

        items
    }

    /// Get full help content for a step (for help overlay)
    pub fn get_help_content(&self, step: Option<WizardStep>) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(a, KeyAction::NavigateUp | KeyAction::NavigateDown)
            }),
            ("Editing", |a| {
                matches!(
                    a,
                    KeyAction::Select
                        | KeyAction::CyclePrevious
                        | KeyAction::CycleNext
                        | KeyAction::Edit
                        | KeyAction::Erase
                )
            }),
            ("General", |a| {
                matches!(
                    a,
                    KeyAction::Continue | KeyAction::Back | KeyAction::Help | KeyAction::Quit
                )
            }),
        ];

        let bindings = self.get_bindings(step);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: (*title).to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_has_no_back() {
        let ctx = KeybindingContext::new();
        let bindings = ctx.get_bindings(Some(WizardStep::SemesterConfirm));
        assert!(bindings.iter().all(|b| b.action != KeyAction::Back));
        assert!(bindings.iter().any(|b| b.action == KeyAction::Continue));
    }

    #[test]
    fn test_placeholder_only_goes_back() {
        let ctx = KeybindingContext::new();
        let bindings = ctx.get_bindings(None);
        assert!(bindings.iter().any(|b| b.action == KeyAction::Back));
        assert!(bindings.iter().all(|b| b.action != KeyAction::Continue));
    }

    #[test]
    fn test_nav_items_combine_pairs() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(Some(WizardStep::TargetGrades));
        let keys: Vec<&str> = items.iter().map(|i| i.key_display.as_str()).collect();
        assert_eq!(keys, vec!["Up/Dn", "Left/Right", "Enter", "Esc", "Q"]);
    }

    #[test]
    fn test_resolve_typing_only_on_input_steps() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(
                Some(WizardStep::CurrentCgpa),
                KeyCode::Char('7'),
                KeyModifiers::NONE
            ),
            Some(KeyAction::Edit)
        );
        assert_eq!(
            ctx.resolve(Some(WizardStep::Stage), KeyCode::Char('7'), KeyModifiers::NONE),
            None
        );
        assert_eq!(
            ctx.resolve(
                Some(WizardStep::SubjectMarks),
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_arrows_cycle_grades_but_navigate_elsewhere() {
        let ctx = KeybindingContext::new();
        let on = |step, key| ctx.resolve(step, key, KeyModifiers::NONE);
        assert_eq!(on(Some(WizardStep::Stage), KeyCode::Right), Some(KeyAction::Continue));
        assert_eq!(on(Some(WizardStep::CurrentCgpa), KeyCode::Left), Some(KeyAction::Back));
        assert_eq!(on(Some(WizardStep::TargetGrades), KeyCode::Right), Some(KeyAction::CycleNext));
        assert_eq!(on(None, KeyCode::Right), None);
        assert_eq!(on(None, KeyCode::Left), Some(KeyAction::Back));
    }

    #[test]
    fn test_shifted_question_mark_opens_help() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(None, KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(KeyAction::Help)
        );
    }

    #[test]
    fn test_help_sections_for_marks() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(Some(WizardStep::SubjectMarks));
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Editing", "General"]);
    }
}
