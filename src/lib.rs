//! # Voices - Twitter timeline TUI
//!
//! A terminal timeline viewer built on an Elm-like architecture: a pure
//! update function owns every state change, and network access is described
//! as commands that an executor runs in the background.
//!
//! ## Architecture Overview
//!
//! - **State** (`core::state`): `Idle`, `Loading`, `Failed` or `Complete`
//! - **Message** (`core::msg`): launch, route changes and network results
//! - **Update** (`core::update`): pure `(Msg, State) -> Transition`
//! - **Command** (`core::cmd`): timeline and avatar fetches
//! - **Runtime** (`integration::runtime`): single owner of the state, fed by one channel
//! - **View** (`presentation::view`): pure projection of the state into a render tree
//!
//! ## Example Usage
//!
//! ```rust
//! use voices::{update, Cmd, Msg, State};
//!
//! let (state, cmd) = update(Msg::ApplicationLaunched, State::initial()).into_parts();
//!
//! assert_eq!(state, State::Loading);
//! assert_eq!(cmd, Some(Cmd::FetchTimeline));
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Tweets, users, ids and errors
//! - [`core`] - State, messages, commands, update and navigation
//! - [`infrastructure`] - Twitter API, configuration, CLI and terminal
//! - [`integration`] - Runtime and app runner
//! - [`presentation`] - View projection, widgets and keybindings

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd,
    msg::Msg,
    route::Route,
    state::State,
    update::{update, Transition},
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
