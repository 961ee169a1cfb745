use std::path::Path;

use anyhow::Result;

use flock_data::MockFeed;
use flock_types::BoardId;

use super::args::{BoardCommand, Cli, Commands, PostsCommand};
use super::config::Config;
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    let seed = cli.seed.unwrap_or(config.feed.seed);
    let feed = MockFeed::with_seed(seed, config.feed.post_count);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Dashboard { view, board } => {
            let view = view
                .map(Into::into)
                .unwrap_or(config.dashboard.default_view);
            handlers::dashboard::handle(&feed, view, board.map(BoardId::new))
        }

        Commands::Posts { command } => match command {
            PostsCommand::List {
                sort,
                direction,
                limit,
            } => handlers::post_list::handle(&feed, sort.into(), direction.into(), limit, cli.format),
        },

        Commands::Board { command } => match command {
            BoardCommand::List => handlers::board_list::handle(&feed, cli.format),
            BoardCommand::Show {
                id,
                sort,
                direction,
            } => handlers::board_show::handle(
                &feed,
                BoardId::new(id),
                sort.into(),
                direction.into(),
                cli.format,
            ),
            BoardCommand::Create { name } => handlers::board_create::handle(&feed, &name, cli.format),
        },
    }
}

fn show_guidance() {
    println!("flock - creator content leaderboard");
    println!();
    println!("Common commands:");
    println!("  flock dashboard              Open the interactive dashboard");
    println!("  flock posts list             Print the ranked leaderboard");
    println!("  flock board list             List your boards");
    println!("  flock board show <id>        Show a board's saved posts");
    println!();
    println!("Run 'flock --help' for the full command reference.");
}
