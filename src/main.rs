use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::index::{build_rows, render_index};
pub use services::output::{print_json, print_out};
pub use services::rules::run_checks;
pub use services::scan::{load_documents, rel_display};
pub use services::settings::open_workspace;
pub use services::vcs::detect as detect_vcs;

pub const EXIT_VIOLATIONS: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let ws = open_workspace(&cli.root, cli.config.as_deref())?;
    tracing::debug!(root = %ws.root.display(), docs = %ws.settings.docs_dir, "workspace opened");

    match &cli.command {
        None | Some(Commands::Check) => handle_check_command(cli, &ws),
        Some(Commands::Index { stdout }) => handle_index_command(cli, &ws, *stdout),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            if cli.json {
                let _ = print_json(false, format!("{err:#}"));
            }
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}
