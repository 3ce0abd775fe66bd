use std::path::{Path, PathBuf};

/// A `'key': 'value'` literal found inside the parameter section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterEntry {
    pub key: String,
    pub value: String,
}

/// A value that the label pipeline changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transformation {
    pub key: String,
    pub before: String,
    pub after: String,
}

/// Result of processing a single locale file.
#[derive(Debug)]
pub struct ProcessOutcome {
    /// Path to the file.
    pub path: PathBuf,
    /// Changed values, in file order.
    pub transformations: Vec<Transformation>,
    /// File content as read.
    pub original: String,
    /// File content with every transformation applied.
    pub updated: String,
}

impl ProcessOutcome {
    /// An outcome for a file that needs no work.
    pub fn unchanged(path: &Path, content: String) -> Self {
        Self {
            path: path.to_path_buf(),
            transformations: Vec::new(),
            updated: content.clone(),
            original: content,
        }
    }

    pub fn count(&self) -> usize {
        self.transformations.len()
    }

    /// Whether the rewritten text differs from what was read.
    pub fn changed(&self) -> bool {
        self.original != self.updated
    }
}

/// Totals across all configured locale files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that were read and processed.
    pub processed: usize,
    /// Configured files that do not exist.
    pub missing: usize,
    /// Transformations applied (or, in a dry run, that would be applied).
    pub transformations: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &ProcessOutcome) {
        self.processed += 1;
        self.transformations += outcome.count();
    }
}
