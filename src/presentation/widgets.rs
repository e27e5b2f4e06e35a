//! Reusable UI widgets

pub mod alert;
pub mod tweet;

pub use alert::AlertWidget;
pub use tweet::TweetWidget;
