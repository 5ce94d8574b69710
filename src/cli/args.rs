//! Command-line arguments for `binpack`.
//!
//! ```text
//! binpack [-v|-q]... [-f] compress   <input> [-o <output>] [--format <fmt>]
//! binpack [-v|-q]... [-f] decompress <input> [-o <output>]
//! binpack [-v|-q]...      info       <input>...
//! ```
//!
//! `--format` falls back to the `BINPACK_FORMAT` environment variable, then to
//! [`FORMAT_DEFAULT`].

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::cli::constants::PROGRAM_NAME;
use crate::config::FORMAT_DEFAULT;
use crate::container::Format;

/// Pack and unpack Yaz0 / LZ77 compressed game assets.
#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, version, about)]
pub struct Cli {
    /// More output (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Less output (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Overwrite existing output files.
    #[arg(short, long, global = true)]
    pub force: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress a file into a container.
    Compress {
        input: PathBuf,

        /// Output path; defaults to the input plus the format's extension.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Container format: yaz0, lz77 or lz77-ext.
        #[arg(long, env = "BINPACK_FORMAT", default_value = FORMAT_DEFAULT)]
        format: Format,
    },

    /// Decompress a container; the format is detected from its header.
    Decompress {
        input: PathBuf,

        /// Output path; defaults to the input without its container extension.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print format and sizes of one or more containers.
    Info {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}
