//! Capability traits the dashboard is polymorphic over.
//!
//! The mock feed implements both today; a real backend client would
//! implement the same two traits and nothing above this layer changes.

use flock_types::{Board, BoardId, Post, PostId, Result};

/// Filter for listing posts.
///
/// The board id is an opaque partition key: the repository decides what
/// membership means, the dashboard only forwards it.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub board: Option<BoardId>,
    pub limit: Option<usize>,
}

impl PostFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn board(board: BoardId) -> Self {
        Self {
            board: Some(board),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Source of the materialized post sequence the leaderboard consumes
pub trait PostRepository {
    /// List posts matching the filter, already ranked by the feed.
    fn list(&self, filter: &PostFilter) -> Result<Vec<Post>>;
}

/// Persistence for boards. Save and create are fire-and-return: the
/// dashboard only depends on success or failure, never on a response body.
pub trait BoardStore {
    fn boards(&self) -> Result<Vec<Board>>;

    /// Create a board with the given display name.
    fn create_board(&self, name: &str) -> Result<Board>;

    /// Register `post` as saved to `board`.
    fn save_post(&self, post: &PostId, board: &BoardId) -> Result<()>;
}
