pub mod mock;
pub mod repository;

pub use mock::MockFeed;
pub use repository::{BoardStore, PostFilter, PostRepository};
