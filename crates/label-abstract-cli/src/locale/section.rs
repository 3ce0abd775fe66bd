//! Locating the parameter section and its `'key': 'value'` literals.

use crate::core::{ParameterEntry, Transformation};
use label_abstract::abstract_label;
use label_abstract_toml::LabelsConfig;
use regex::Regex;
use std::sync::LazyLock;

static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)':\s*'([^']*)'").expect("valid entry pattern"));

/// Keys bounding the parameter section.
///
/// The section opens at `'{start}':` followed by `{` and ends right before
/// the first `'{end}` after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionMarkers {
    pub start: String,
    pub end: String,
}

impl SectionMarkers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Compiles the markers into a pattern whose first group is the section body.
    pub fn pattern(&self) -> Result<Regex, regex::Error> {
        Regex::new(&format!(
            r"(?s)'{}':\s*\{{(.*?)'{}",
            regex::escape(&self.start),
            regex::escape(&self.end)
        ))
    }
}

impl Default for SectionMarkers {
    fn default() -> Self {
        Self::from(&LabelsConfig::default())
    }
}

impl From<&LabelsConfig> for SectionMarkers {
    fn from(config: &LabelsConfig) -> Self {
        Self::new(config.section_start.clone(), config.section_end.clone())
    }
}

/// Returns the text between the start and end markers, or `None` when either
/// marker is missing.
pub fn extract_parameter_section<'a>(content: &'a str, pattern: &Regex) -> Option<&'a str> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
}

/// Every quoted key/value literal in `section`, in order.
///
/// Entries whose key or value contains a single quote are not matched.
pub fn parameter_entries(section: &str) -> Vec<ParameterEntry> {
    ENTRY
        .captures_iter(section)
        .map(|caps| ParameterEntry {
            key: caps[1].to_string(),
            value: caps[2].to_string(),
        })
        .collect()
}

/// Runs every entry through [`abstract_label`] and keeps those that change.
///
/// Entries whose value is the key itself are left alone.
pub fn plan_transformations(section: &str) -> Vec<Transformation> {
    parameter_entries(section)
        .into_iter()
        .filter(|entry| entry.value != entry.key)
        .filter_map(|entry| {
            let after = abstract_label(&entry.value);
            (after != entry.value).then(|| Transformation {
                key: entry.key,
                before: entry.value,
                after,
            })
        })
        .collect()
}
