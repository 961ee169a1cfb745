//! Test utilities shared across the flock crates.
//!
//! Provides:
//! - `PostBuilder` for concise post fixtures with sensible defaults
//! - Recording fakes for the board store, so tests can count collaborator
//!   calls instead of mocking frameworks

pub mod builders;
pub mod fakes;

pub use builders::{sample_posts, PostBuilder};
pub use fakes::RecordingBoardStore;
