mod history;
mod shell;
mod stats;

use anyhow::Result;
use clap::Parser;
use reckon_core::{HistoryService, MemoryHistoryRepository};

use crate::shell::Shell;

#[derive(Parser)]
#[command(name = "reckon")]
#[command(about = "An interactive calculator with day-keyed history", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // SIGINT ends the session like menu option 6 would, with a distinct
    // farewell instead of a crash.
    ctrlc::set_handler(|| {
        println!("\n\nCalculator terminated by user.");
        std::process::exit(0);
    })?;

    // The store lives exactly as long as the shell that owns it.
    let service = HistoryService::new(MemoryHistoryRepository::new());
    Shell::new(service).run()
}
