//! Reusable UI components
//!
//! - `keybindings` - Step-aware keybinding registry
//! - `help_overlay` - Context-sensitive help window

pub mod help_overlay;
pub mod keybindings;
