//! Check-output command handler.

use anyhow::Result;

use super::print_json;
use crate::cli::CheckOutputArgs;
use crate::cli::output::{OutputFormat, PathCheckReport};
use crate::infra::validate_output_path;

pub fn handle_check_output(args: &CheckOutputArgs, format: OutputFormat) -> Result<()> {
    let outcome = validate_output_path(&args.path);

    match format {
        OutputFormat::Json => print_json(PathCheckReport::new(&args.path, &outcome))?,
        OutputFormat::Human => {
            if outcome.is_accepted() {
                println!("ok: {}", args.path.display());
            }
        }
    }

    // Rejections surface as errors so the exit status is non-zero
    outcome.into_result(&args.path)?;
    Ok(())
}
