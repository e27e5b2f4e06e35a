//! Components
//!
//! Components keep UI state the core does not care about (selection,
//! scroll offset) and render parts of a `View`.

pub mod timeline;

pub use timeline::TimelineComponent;
