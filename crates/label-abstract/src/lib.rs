#![doc = include_str!("../README.md")]

pub mod rules;

use regex::NoExpand;
use rules::{
    CORRECTIONS, MULTI_PERIOD, SENTENCE_BOUNDARY, UNDERSCORE_ACRONYMS, WHITESPACE_RUN,
    is_acronym, is_stop_word,
};

const WHETHER_TO: &str = "whether to ";
const WHETHER: &str = "whether ";

/// Abstracts a verbose parameter description into a short title-style label.
///
/// The stages run in this order:
///
/// 1. [`normalize_periods`]
/// 2. [`strip_whether_prefix`]
/// 3. [`split_sentences`], then [`title_case_sentence`] on each sentence
/// 4. sentences rejoined with `". "`
/// 5. [`restore_acronyms`]
/// 6. [`collapse_whitespace`]
/// 7. periods left dangling at the end are dropped
///
/// ```
/// use label_abstract::abstract_label;
///
/// assert_eq!(
///     abstract_label("Whether to enable the CD-ROM drive."),
///     "Enable the CD-ROM Drive"
/// );
/// ```
pub fn abstract_label(label: &str) -> String {
    let normalized = normalize_periods(label);
    let stripped = strip_whether_prefix(&normalized);

    let joined = split_sentences(&stripped)
        .into_iter()
        .map(title_case_sentence)
        .collect::<Vec<_>>()
        .join(". ");

    collapse_whitespace(&restore_acronyms(&joined))
        .trim_end_matches(['.', ' '])
        .to_string()
}

/// Removes trailing periods and collapses every run of periods into one.
pub fn normalize_periods(label: &str) -> String {
    MULTI_PERIOD
        .replace_all(label.trim_end_matches('.'), ".")
        .into_owned()
}

/// Drops a leading "Whether to " or "Whether " (any case) and capitalizes
/// what follows. Only the first matching prefix is removed.
pub fn strip_whether_prefix(label: &str) -> String {
    for prefix in [WHETHER_TO, WHETHER] {
        if let Some(head) = label.get(..prefix.len())
            && head.eq_ignore_ascii_case(prefix)
        {
            return capitalize_first(&label[prefix.len()..]);
        }
    }
    label.to_string()
}

/// Splits on a `.`, `!` or `?` followed by whitespace. The boundary itself is
/// not part of either sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY.split(text).collect()
}

/// Inserts spaces inside underscore-joined uppercase runs,
/// e.g. `MONITOR_TYPE_DIMENSION` becomes `MONITOR TYPE DIMENSION`.
pub fn split_underscore_acronyms(sentence: &str) -> String {
    UNDERSCORE_ACRONYMS
        .iter()
        .fold(sentence.to_string(), |text, (regex, replacement)| {
            regex.replace_all(&text, *replacement).into_owned()
        })
}

/// Title-cases one sentence word by word.
///
/// Acronyms are upper-cased, the first word is capitalized, stop words are
/// lower-cased and every other word is capitalized with the rest lowered.
pub fn title_case_sentence(sentence: &str) -> String {
    let spaced = split_underscore_acronyms(sentence).replace('_', " ");

    let mut words: Vec<String> = Vec::new();
    for word in spaced.split(' ').filter(|word| !word.is_empty()) {
        let cased = if is_acronym(word) {
            word.to_uppercase()
        } else if words.is_empty() {
            capitalize_word(word)
        } else if is_stop_word(word) {
            word.to_lowercase()
        } else {
            capitalize_word(word)
        };
        words.push(cased);
    }

    words.join(" ")
}

/// Applies [`rules::ACRONYM_CORRECTIONS`] as whole-word, case-insensitive
/// replacements.
pub fn restore_acronyms(text: &str) -> String {
    CORRECTIONS
        .iter()
        .fold(text.to_string(), |text, (regex, replacement)| {
            regex.replace_all(&text, NoExpand(*replacement)).into_owned()
        })
}

/// Collapses whitespace runs into a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Upper-cases the first character and leaves the rest alone.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        },
        None => String::new(),
    }
}
