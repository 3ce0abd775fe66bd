//! In-place value substitution anchored on the key and its original literal.

use crate::core::Transformation;
use regex::{Captures, Regex};

/// Applies `transformations` to the full file text, in order.
///
/// Each one rewrites every `'key':<ws>'before'` literal to
/// `'key':<ws>'after'`, keeping the key and the whitespace between key and
/// value exactly as they were. Nothing else in `content` changes.
pub fn apply_transformations(
    content: &str,
    transformations: &[Transformation],
) -> Result<String, regex::Error> {
    let mut updated = content.to_string();

    for transformation in transformations {
        let anchor = anchor_pattern(&transformation.key, &transformation.before)?;
        let replaced = anchor.replace_all(&updated, |caps: &Captures| {
            format!("{}'{}'", &caps[1], transformation.after)
        });
        updated = replaced.into_owned();
    }

    Ok(updated)
}

/// Builds the literal-match anchor for one key/value pair. Both parts are
/// escaped, so values may contain any regex metacharacter.
pub fn anchor_pattern(key: &str, value: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"('{}':\s*)'{}'",
        regex::escape(key),
        regex::escape(value)
    ))
}
