//! Presentation layer
//!
//! This module turns state into pixels:
//! - The pure view projection
//! - Components holding host-only UI state (selection)
//! - Reusable widgets
//! - Configuration (keybindings)

pub mod components;
pub mod config;
pub mod renderer;
pub mod view;
pub mod widgets;
