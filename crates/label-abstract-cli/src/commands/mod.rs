//! CLI command implementations.

mod apply;
mod common;
mod dry_run;
mod label;

pub use apply::{ApplyArgs, run_apply};
pub use common::RootArgs;
pub use dry_run::DryRunDiff;
pub use label::{LabelArgs, run_label};
