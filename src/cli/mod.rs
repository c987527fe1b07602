//! Command Line Interface (CLI) layer for LUMAVIEW.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the load-convert-display
//! flow. It wires user-provided options to the underlying library
//! functionality exposed via `lumaview::api`.
//!
//! If you are embedding LUMAVIEW into another application, prefer using
//! the high-level `lumaview::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
