use clap::Parser;
use extidy::cli::{Cli, run_cli};
use extidy::output::OutputFormatter;

fn main() {
    let cli = Cli::parse();

    // Only an invalid target directory is recoverable; any other filesystem
    // failure surfaces here and is process-fatal.
    if let Err(e) = run_cli(&cli) {
        OutputFormatter::error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
