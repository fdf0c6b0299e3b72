//! Input handling module
//!
//! Text buffers behind the numeric fields (CGPA and marks). The buffer holds
//! exactly what the student typed; the wizard only sees the parsed value.
//! Text that does not parse as a number leaves the field unset.

use std::collections::HashMap;

use crate::types::MarkField;
use crate::wizard::validate::parse_numeric_input;

/// Longest text a numeric field accepts
const MAX_FIELD_LEN: usize = 6;

/// Characters that can appear in a numeric field
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

/// Identifies one editable numeric field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Cgpa,
    Mark { code: String, field: MarkField },
}

/// Outcome of an edit on a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// Text changed: store this value (`None` when empty or malformed)
    Set(Option<f64>),
    /// Keystroke rejected, text unchanged
    Rejected,
}

/// Text buffers for every numeric field on screen
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    buffers: HashMap<FieldKey, String>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field (empty if never edited)
    pub fn text(&self, key: &FieldKey) -> &str {
        self.buffers.get(key).map_or("", String::as_str)
    }

    /// Append a character to a field
    pub fn push_char(&mut self, key: &FieldKey, c: char) -> EditOutcome {
        if !is_numeric_char(c) {
            return EditOutcome::Rejected;
        }
        let buffer = self.buffers.entry(key.clone()).or_default();
        if buffer.len() >= MAX_FIELD_LEN {
            return EditOutcome::Rejected;
        }
        buffer.push(c);
        Self::outcome(buffer)
    }

    /// Remove the last character of a field
    pub fn pop_char(&mut self, key: &FieldKey) -> EditOutcome {
        let Some(buffer) = self.buffers.get_mut(key) else {
            return EditOutcome::Rejected;
        };
        if buffer.pop().is_none() {
            return EditOutcome::Rejected;
        }
        Self::outcome(buffer)
    }

    /// Whether a field holds text that is not a number
    pub fn is_malformed(&self, key: &FieldKey) -> bool {
        let text = self.text(key);
        !text.trim().is_empty() && parse_numeric_input(text).is_none()
    }

    fn outcome(text: &str) -> EditOutcome {
        EditOutcome::Set(parse_numeric_input(text))
    }
}
