use anyhow::Result;
use is_terminal::IsTerminal;

use flock_data::{BoardStore, PostFilter, PostRepository};
use flock_engine::{preset_for, resort};
use flock_types::{BoardId, SortDirection, SortField, SortState};

use crate::args::OutputFormat;
use crate::presentation::presenters::build_leaderboard;
use crate::presentation::views::console::render_leaderboard;

pub fn handle(
    feed: &(impl PostRepository + BoardStore),
    board: BoardId,
    field: SortField,
    direction: SortDirection,
    format: OutputFormat,
) -> Result<()> {
    let posts = feed.list(&PostFilter::board(board.clone()))?;
    let state = SortState::new(field, direction);
    let posts = resort(&posts, state);

    let board_name = feed
        .boards()?
        .into_iter()
        .find(|b| b.id == board)
        .map(|b| b.name);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&posts)?),
        OutputFormat::Plain => {
            let vm = build_leaderboard(
                &posts,
                state,
                preset_for(state.field),
                board_name.as_deref(),
            );
            print!(
                "{}",
                render_leaderboard(&vm, std::io::stdout().is_terminal())
            );
        }
    }

    Ok(())
}
