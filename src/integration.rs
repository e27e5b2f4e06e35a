//! Integration layer
//!
//! This module wires the core to the host:
//! - The runtime owning the state and the message channel
//! - The app runner driving the terminal
pub mod app_runner;
pub mod runtime;
