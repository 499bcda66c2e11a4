mod commands;
mod config;
mod error;
mod extract;
mod index;
mod resolver;
mod scanner;
mod types;
mod validator;

use std::process::ExitCode;

use clap::Parser;

/// docvet takes no arguments: it always validates the `docs` directory
/// under the current working directory. clap still provides `--help` and
/// `--version`, and rejects anything else.
#[derive(Parser)]
#[command(
    name = "docvet",
    version,
    about = "Validate internal links in a markdown documentation tree"
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match commands::check() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}
