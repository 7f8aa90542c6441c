//! This crate contains the source code for the binary for the game labyrinth-walker.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use labyrinth_walker::{config::Cli, init_tracing, App};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    init_tracing(&cli.log_file, &cli.log_level)?;
    let mut app = App::from_cli(&cli)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
