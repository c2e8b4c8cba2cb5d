//! Command Line Interface (CLI) layer for pdf-protect.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): logging setup, option merging,
//! and the report printed after a successful run. It wires user-provided
//! options to the library functionality exposed via `pdf_protect::api`.
//!
//! If you are embedding pdf-protect into another application, prefer the
//! high-level `pdf_protect::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
