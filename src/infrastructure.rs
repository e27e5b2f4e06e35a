//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration
//! - Twitter API access and response parsing

pub mod cli;
pub mod config;
pub mod tui;
pub mod twitter;
