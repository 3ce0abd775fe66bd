//! Declarative rule tables used by the label pipeline.
//!
//! The tables are plain data so new entries can be added without touching
//! the stages that consume them. Regexes are compiled once on first use.

use regex::Regex;
use std::sync::LazyLock;

/// Tokens rendered fully upper-cased wherever they appear as a whole word.
pub const ACRONYMS: &[&str] = &[
    "MB", "SCSI", "DRAM", "ROM", "FPU", "LED", "CPU", "CD-ROM", "HD", "ID", "POT", "I860", "M68K",
    "SRAM", "NBIC", "ADB", "NFS", "PCAP", "MHz", "BIOS", "UEFI",
];

/// Connective words kept lowercase unless they open a sentence.
pub const STOP_WORDS: &[&str] = &[
    "to", "in", "at", "on", "of", "or", "and", "the", "with", "for", "by", "as", "if", "are", "a",
    "an",
];

/// Whole-word corrections applied after casing, in order.
///
/// Matching is case-insensitive, the replacement is inserted verbatim.
pub const ACRONYM_CORRECTIONS: &[(&str, &str)] = &[
    ("Mb", "MB"),
    ("Scsi", "SCSI"),
    ("Dram", "DRAM"),
    ("Mhz", "MHz"),
    ("Rom", "ROM"),
    ("Fpu", "FPU"),
    ("Led", "LED"),
    ("Cpu", "CPU"),
    ("Cdrom", "CD-ROM"),
    ("Cd-rom", "CD-ROM"),
    ("Hd", "HD"),
    ("Id", "ID"),
    ("Pot", "Power-On Test"),
    ("I860", "I860"),
    ("M68k", "M68K"),
    ("Bios", "BIOS"),
    ("Uefi", "UEFI"),
    // Casing turns an expanded "Power-On" back into "Power-on".
    ("Power-on", "Power-On"),
];

/// `([A-Z])([A-Z]+)_([A-Z])` followed by `([A-Z]+)_([A-Z])`, see
/// [`crate::split_underscore_acronyms`].
pub(crate) const UNDERSCORE_ACRONYM_RULES: &[(&str, &str)] = &[
    (r"([A-Z])([A-Z]+)_([A-Z])", "${1}${2} ${3}"),
    (r"([A-Z]+)_([A-Z])", "${1} ${2}"),
];

pub(crate) static MULTI_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("valid period pattern"));

pub(crate) static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary pattern"));

pub(crate) static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

pub(crate) static UNDERSCORE_ACRONYMS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    UNDERSCORE_ACRONYM_RULES
        .iter()
        .map(|(pattern, replacement)| (build(pattern), *replacement))
        .collect()
});

pub(crate) static CORRECTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ACRONYM_CORRECTIONS
        .iter()
        .map(|(word, replacement)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
            (build(&pattern), *replacement)
        })
        .collect()
});

fn build(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid rule pattern `{}`: {}", pattern, err))
}

/// Returns `true` if `word` is in [`ACRONYMS`], ignoring ASCII case.
pub fn is_acronym(word: &str) -> bool {
    ACRONYMS.iter().any(|acronym| acronym.eq_ignore_ascii_case(word))
}

/// Returns `true` if `word` is in [`STOP_WORDS`], ignoring ASCII case.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.iter().any(|stop| stop.eq_ignore_ascii_case(word))
}
