use crate::core::ProcessOutcome;
use crate::utils::ui;

#[derive(Debug, Clone)]
pub struct DryRunDiff {
    before: String,
    after: String,
}

impl DryRunDiff {
    pub fn new(before: String, after: String) -> Self {
        Self { before, after }
    }

    pub fn print(&self) {
        ui::print_diff(&self.before, &self.after);
    }
}

impl From<&ProcessOutcome> for DryRunDiff {
    fn from(outcome: &ProcessOutcome) -> Self {
        Self::new(outcome.original.clone(), outcome.updated.clone())
    }
}
