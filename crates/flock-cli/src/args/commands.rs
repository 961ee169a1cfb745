use super::enums::{DirectionArg, SortFieldArg, ViewArg};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard (chart, grid, and table views)")]
    Dashboard {
        #[arg(long, value_enum, help = "View to land on (defaults to the configured view)")]
        view: Option<ViewArg>,

        #[arg(long, help = "Show only posts saved to this board")]
        board: Option<String>,
    },

    #[command(about = "View leaderboard posts")]
    Posts {
        #[command(subcommand)]
        command: PostsCommand,
    },

    #[command(about = "Manage boards (saved post collections)")]
    Board {
        #[command(subcommand)]
        command: BoardCommand,
    },
}

#[derive(Subcommand)]
pub enum PostsCommand {
    #[command(about = "List ranked posts")]
    List {
        #[arg(long, value_enum, default_value = "viral-score")]
        sort: SortFieldArg,

        #[arg(long, value_enum, default_value = "desc")]
        direction: DirectionArg,

        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

#[derive(Subcommand)]
pub enum BoardCommand {
    #[command(about = "List boards")]
    List,

    #[command(about = "Show the posts saved to a board")]
    Show {
        id: String,

        #[arg(long, value_enum, default_value = "viral-score")]
        sort: SortFieldArg,

        #[arg(long, value_enum, default_value = "desc")]
        direction: DirectionArg,
    },

    #[command(about = "Create a new board")]
    Create { name: String },
}
