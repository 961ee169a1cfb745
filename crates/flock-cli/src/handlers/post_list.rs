use anyhow::Result;
use is_terminal::IsTerminal;

use flock_data::{PostFilter, PostRepository};
use flock_engine::{preset_for, resort};
use flock_types::{SortDirection, SortField, SortState};

use crate::args::OutputFormat;
use crate::presentation::presenters::build_leaderboard;
use crate::presentation::views::console::render_leaderboard;

pub fn handle(
    repo: &impl PostRepository,
    field: SortField,
    direction: SortDirection,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    // Sort the full sequence before truncating so the limit applies to the
    // requested order, not the feed's
    let posts = repo.list(&PostFilter::all())?;
    let state = SortState::new(field, direction);
    let mut posts = resort(&posts, state);
    posts.truncate(limit);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&posts)?),
        OutputFormat::Plain => {
            let vm = build_leaderboard(&posts, state, preset_for(state.field), None);
            print!(
                "{}",
                render_leaderboard(&vm, std::io::stdout().is_terminal())
            );
        }
    }

    Ok(())
}
