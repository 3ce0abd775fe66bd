//! Apply command: abstract the parameter labels of every configured locale file.
//!
//! Files are processed one after another. A missing file is reported and
//! skipped, an I/O failure aborts the run.

use crate::commands::{DryRunDiff, RootArgs};
use crate::core::{CliError, RunSummary};
use crate::locale::{ProcessOptions, SectionMarkers, process_locale_file};
use crate::utils::ui;
use clap::Parser;

/// Arguments for the apply command.
#[derive(Debug, Parser)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Dry run - show what would change without writing any file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the apply command.
pub fn run_apply(args: ApplyArgs) -> Result<RunSummary, CliError> {
    let (root, config) = args.root.resolve()?;
    let options = ProcessOptions {
        markers: SectionMarkers::from(&config),
        dry_run: args.dry_run,
    };

    ui::print_header(args.dry_run);

    let mut summary = RunSummary::default();

    for file in config.locale_files(&root) {
        if !file.path.exists() {
            ui::print_file_not_found(&file.file_name);
            summary.missing += 1;
            continue;
        }

        ui::print_processing(&file.file_name);
        let outcome = process_locale_file(&file.path, &options)?;
        summary.record(&outcome);
        tracing::debug!(
            language = %file.language,
            path = %outcome.path.display(),
            count = outcome.count(),
            "processed locale file"
        );

        if outcome.count() == 0 {
            ui::print_no_changes();
            continue;
        }

        ui::print_applied(outcome.count(), args.dry_run);
        ui::print_examples(&outcome.transformations, config.examples_shown);

        if args.dry_run {
            println!();
            DryRunDiff::from(&outcome).print();
        }

        println!();
    }

    ui::print_summary(&summary, args.dry_run);

    Ok(summary)
}
