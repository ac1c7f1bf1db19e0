//! Save command handler.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::cli::SaveArgs;
use crate::infra::{validate_output_path, write_output};

/// Internal implementation that reads from any source when no input file is given.
pub(crate) fn handle_save_impl<R: Read>(args: &SaveArgs, mut stdin: R) -> Result<()> {
    // Reject the destination before consuming any input
    validate_output_path(&args.output).into_result(&args.output)?;

    let contents = match &args.input {
        Some(path) => read_input(path)?,
        None => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .context("failed to read standard input")?;
            buf
        }
    };

    let written = write_output(&args.output, &contents)?;
    eprintln!("Saved to {}", written.display());
    Ok(())
}

pub fn handle_save(args: &SaveArgs) -> Result<()> {
    handle_save_impl(args, std::io::stdin().lock())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read input file: {}", path.display()))
}
