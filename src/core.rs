//! Core Elm Architecture implementation
//!
//! This module contains the core components of the Elm architecture:
//! - Messages, commands and routes
//! - Application state
//! - Update logic and command execution
//! - Navigation translation
//! - Subscription contract

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod route;
pub mod state;
pub mod subscription;
pub mod translator;
pub mod update;
