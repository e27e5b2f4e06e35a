//! Domain model
//!
//! Immutable value types shared by every layer:
//! - Typed identifiers
//! - Tweets, users and timeline pages
//! - Avatar images
//! - Twitter operation errors

pub mod error;
pub mod id;
pub mod image;
pub mod text;
pub mod timeline;
pub mod tweet;

pub use error::{TwitterOperationError, TwitterParsingError};
pub use id::ObjectId;
pub use image::Image;
pub use timeline::TimelineResponse;
pub use tweet::{Tweet, User};
