//! Label command: run the pipeline on strings given on the command line.

use crate::core::CliError;
use crate::utils::ui;
use clap::Parser;
use label_abstract::abstract_label;

/// Arguments for the label command.
#[derive(Debug, Parser)]
pub struct LabelArgs {
    /// Descriptions to abstract, one label is printed per argument.
    #[arg(required = true)]
    pub text: Vec<String>,
}

pub fn run_label(args: LabelArgs) -> Result<(), CliError> {
    for text in &args.text {
        ui::print_label(&abstract_label(text));
    }
    Ok(())
}
