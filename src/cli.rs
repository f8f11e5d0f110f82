use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "docgate",
    version,
    about = "Docs index generator and structural validator"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Repository root containing the docs directory"
    )]
    pub root: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Settings file (defaults to <root>/docgate.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate headers, links, supersede references and repo hygiene (default)
    Check,
    /// Regenerate the docs index table
    Index {
        #[arg(long, default_value_t = false, help = "Print the index instead of writing it")]
        stdout: bool,
    },
}
