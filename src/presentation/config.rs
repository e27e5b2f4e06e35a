//! UI configuration
//!
//! This module contains configuration for UI behavior.

pub mod keybindings;

// Re-export for convenience
pub use keybindings::{Action, KeyBindings};
