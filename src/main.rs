//! Binary entry point for the `binpack` command-line tool.
//!
//! 1. Parse arguments with clap.
//! 2. Derive the display level from `-v` / `-q` and install a tracing
//!    subscriber on stderr (`RUST_LOG` overrides the derived filter).
//! 3. Dispatch and map the outcome to an exit code.

use binstream::cli::constants::{level_from_flags, set_display_level, tracing_directive};
use binstream::cli::{self, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Cli::parse();

    let level = level_from_flags(args.verbose, args.quiet);
    set_display_level(level);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing_directive(level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli::run(args) {
        binstream::displaylevel!(1, "{}: {:#}\n", binstream::cli::constants::PROGRAM_NAME, err);
        std::process::exit(1);
    }
}
