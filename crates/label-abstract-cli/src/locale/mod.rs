//! Locale file processing: find the parameter section, abstract its values
//! and patch the changed ones back into the file.

mod patch;
mod section;

pub use patch::{anchor_pattern, apply_transformations};
pub use section::{
    SectionMarkers, extract_parameter_section, parameter_entries, plan_transformations,
};

use crate::core::{CliError, ProcessOutcome};
use anyhow::Context as _;
use fs_err as fs;
use std::path::Path;

/// Options for [`process_locale_file`].
#[derive(Clone, Debug, Default)]
pub struct ProcessOptions {
    pub markers: SectionMarkers,
    /// Compute the outcome without writing the file.
    pub dry_run: bool,
}

/// Processes a single locale file.
///
/// The file is read in full, every changed value is substituted, and the
/// result is written back in one go unless `options.dry_run` is set. A file
/// without a parameter section yields an empty outcome and is not written.
pub fn process_locale_file(
    path: &Path,
    options: &ProcessOptions,
) -> Result<ProcessOutcome, CliError> {
    let pattern = options.markers.pattern()?;
    let content = fs::read_to_string(path)?;

    let Some(section) = extract_parameter_section(&content, &pattern) else {
        tracing::debug!(path = %path.display(), "no parameter section found");
        return Ok(ProcessOutcome::unchanged(path, content));
    };

    let transformations = plan_transformations(section);
    if transformations.is_empty() {
        return Ok(ProcessOutcome::unchanged(path, content));
    }

    let updated = apply_transformations(&content, &transformations)?;

    if !options.dry_run && updated != content {
        fs::write(path, &updated)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            count = transformations.len(),
            "rewrote parameter labels"
        );
    }

    Ok(ProcessOutcome {
        path: path.to_path_buf(),
        transformations,
        original: content,
        updated,
    })
}
