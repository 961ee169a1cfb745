use anyhow::Result;

use flock_data::BoardStore;

use crate::args::OutputFormat;

pub fn handle(store: &impl BoardStore, name: &str, format: OutputFormat) -> Result<()> {
    let board = store.create_board(name)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&board)?),
        OutputFormat::Plain => println!("Created board {} ({})", board.name, board.id),
    }

    Ok(())
}
