//! Operation dispatch for `binpack`.
//!
//! Files are read and written whole through [`ByteBuffer::load`] /
//! [`ByteBuffer::save`]; all codec work happens in memory.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tracing::info;

use crate::cli::args::{Cli, Command};
use crate::container::{self, Format};
use crate::displaylevel;
use crate::displayout;
use crate::stream::ByteBuffer;

/// Extension appended when the decompressed name cannot be derived.
const RAW_EXTENSION: &str = "bin";

/// Execute the parsed command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Compress {
            input,
            output,
            format,
        } => {
            let output = output.unwrap_or_else(|| default_compressed_name(&input, format));
            compress_file(&input, &output, format, cli.force).map(|_| ())
        }
        Command::Decompress { input, output } => {
            decompress_file(&input, output.as_deref(), cli.force).map(|_| ())
        }
        Command::Info { inputs } => {
            for input in &inputs {
                print_info(input)?;
            }
            Ok(())
        }
    }
}

/// `<input>.<ext>`, e.g. `course.bin` → `course.bin.szs`.
pub fn default_compressed_name(input: &Path, format: Format) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Strip the container extension if present, otherwise append `.bin`.
pub fn default_decompressed_name(input: &Path, format: Format) -> PathBuf {
    match input.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(format.extension()) => input.with_extension(""),
        _ => {
            let mut name = input.as_os_str().to_owned();
            name.push(".");
            name.push(RAW_EXTENSION);
            PathBuf::from(name)
        }
    }
}

fn check_overwrite(output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists; use --force to overwrite",
            output.display()
        );
    }
    if output.exists() {
        info!(path = %output.display(), "overwriting existing file");
    }
    Ok(())
}

/// Compress `input` into `output`.  Returns `(decompressed, compressed)` sizes.
pub fn compress_file(
    input: &Path,
    output: &Path,
    format: Format,
    force: bool,
) -> anyhow::Result<(usize, usize)> {
    check_overwrite(output, force)?;
    let src = ByteBuffer::load(input).with_context(|| format!("reading {}", input.display()))?;
    let packed = container::pack(format, src.as_slice())
        .with_context(|| format!("compressing {}", input.display()))?;
    let sizes = (src.len(), packed.len());

    ByteBuffer::from_vec(packed)
        .save(output)
        .with_context(|| format!("writing {}", output.display()))?;

    displaylevel!(
        2,
        "{} : {} -> {} bytes ({}) => {}\n",
        input.display(),
        sizes.0,
        sizes.1,
        format,
        output.display()
    );
    Ok(sizes)
}

/// Decompress `input`; the output path defaults from the detected format.
/// Returns the path written.
pub fn decompress_file(
    input: &Path,
    output: Option<&Path>,
    force: bool,
) -> anyhow::Result<PathBuf> {
    let src = ByteBuffer::load(input).with_context(|| format!("reading {}", input.display()))?;
    let (format, data) = container::unpack(src.as_slice())
        .with_context(|| format!("decompressing {}", input.display()))?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_decompressed_name(input, format));
    check_overwrite(&output, force)?;

    let len = data.len();
    ByteBuffer::from_vec(data)
        .save(&output)
        .with_context(|| format!("writing {}", output.display()))?;

    displaylevel!(
        2,
        "{} : {} ({}) -> {} bytes => {}\n",
        input.display(),
        src.len(),
        format,
        len,
        output.display()
    );
    Ok(output)
}

fn print_info(input: &Path) -> anyhow::Result<()> {
    let src = ByteBuffer::load(input).with_context(|| format!("reading {}", input.display()))?;
    let info = container::detect(src.as_slice())
        .with_context(|| format!("inspecting {}", input.display()))?;
    let ratio = if info.decompressed_size == 0 {
        0.0
    } else {
        info.compressed_size as f64 * 100.0 / info.decompressed_size as f64
    };
    displayout!(
        "{:<10} {:>12} {:>12} {:>7.2}%  {}\n",
        info.format.name(),
        info.compressed_size,
        info.decompressed_size,
        ratio,
        input.display()
    );
    Ok(())
}
