mod cli;
mod error;
mod ui;
mod update;

use clap::Parser;
use cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = update::execute(&cli) {
        ui::error_message(&err.user_message());
        process::exit(1);
    }
}
