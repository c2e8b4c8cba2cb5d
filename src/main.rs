//! pdf-protect CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the protection
//! pipeline, report errors and exit with the matching status.
//! For programmatic use, prefer the library API (`pdf_protect::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    let quiet = args.quiet;
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !quiet {
                eprintln!("\n{}\n", cli::errors::describe(&e));
            }
            ExitCode::FAILURE
        }
    }
}
