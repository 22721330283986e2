mod commands;
mod config;
mod error;
mod fixer;
mod scanner;
mod symbols;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Insert missing cross-module references into DocC static-site JSON.
#[derive(Parser)]
#[command(name = "docc-xref", version, about)]
struct Cli {
    /// Root of the generated documentation site.
    #[arg(default_value = "docs")]
    docs_path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    return match commands::fix(&cli.docs_path) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    };
}
