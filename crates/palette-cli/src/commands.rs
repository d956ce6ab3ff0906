//! Subcommand entry points.

use anyhow::{Context, Result};

use palette_cli::pipeline::{ValidateOptions, ValidateResult, run_validate};
use palette_ingest::read_document;

use crate::cli::{InspectArgs, ValidateArgs};
use crate::summary::print_inspect;

pub fn run_validate_command(args: &ValidateArgs) -> Result<ValidateResult> {
    let options = ValidateOptions {
        report_dir: args.report_dir.clone(),
        strict: args.strict,
    };
    run_validate(&args.paths, &options)
}

pub fn run_inspect_command(args: &InspectArgs) -> Result<()> {
    let document = read_document(&args.file)
        .with_context(|| format!("cannot inspect {}", args.file.display()))?;
    print_inspect(&args.file, &document);
    Ok(())
}
