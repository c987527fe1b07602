//! LUMAVIEW CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, render the
//! input to a grayscale frame, and show it until a key is pressed.
//! For programmatic use, prefer the library API (`lumaview::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
