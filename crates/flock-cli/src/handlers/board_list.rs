use anyhow::Result;
use is_terminal::IsTerminal;

use flock_data::BoardStore;

use crate::args::OutputFormat;
use crate::presentation::presenters::build_board_list;
use crate::presentation::views::console::render_board_list;

pub fn handle(store: &impl BoardStore, format: OutputFormat) -> Result<()> {
    let boards = store.boards()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&boards)?),
        OutputFormat::Plain => {
            let vm = build_board_list(&boards);
            print!(
                "{}",
                render_board_list(&vm, std::io::stdout().is_terminal())
            );
        }
    }

    Ok(())
}
