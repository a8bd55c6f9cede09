use std::process;

use clap::Parser;
use dvpl_cli::{logging::init_tracing, run, Cli};

/// Exit code for codec and I/O failures; clap exits with 2 on usage errors.
const EXIT_ERROR: i32 = 1;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(EXIT_ERROR);
    }
}
