// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - `posts list` / `board show` group related operations and keep --help
//   discoverable as the surface grows
// - The bare `flock` invocation prints guidance instead of failing

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "flock")]
#[command(about = "Creator content leaderboard and boards", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a config file (default: data dir config.toml)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Feed seed override (mock data is deterministic per seed)")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
