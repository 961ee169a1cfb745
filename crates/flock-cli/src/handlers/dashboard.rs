use anyhow::Result;

use flock_data::{BoardStore, PostFilter, PostRepository};
use flock_types::{BoardId, ViewMode};

use crate::presentation::renderers::tui::{self, AppState};

pub fn handle(
    feed: &(impl PostRepository + BoardStore),
    view: ViewMode,
    board: Option<BoardId>,
) -> Result<()> {
    let filter = board
        .clone()
        .map(PostFilter::board)
        .unwrap_or_else(PostFilter::all);
    let posts = feed.list(&filter)?;
    let boards = feed.boards()?;

    let app = AppState::new(posts, boards, view, board);
    tui::run(app, feed, feed)
}
