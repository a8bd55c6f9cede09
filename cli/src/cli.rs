use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dvpl_core::compression::Method;

#[derive(Parser, Debug)]
#[command(name = "dvpl", about = "DVPL (un)packer", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logs on stderr)
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print run statistics as JSON on stdout
    #[arg(long, global = true)]
    pub stats: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack a file into a .dvpl container
    Pack {
        /// File to pack
        file: PathBuf,

        /// Compression method: raw, fast, high (or tag 0, 1, 2)
        #[arg(long, short = 'm', default_value = "high")]
        method: Method,

        /// Output path (defaults to FILE.dvpl)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Unpack a .dvpl container
    Unpack {
        /// Container to unpack
        file: PathBuf,

        /// Output path (defaults to FILE without .dvpl, or "orig" beside it)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Validate a container and print its trailer
    Info {
        /// Container to inspect
        file: PathBuf,
    },
}
