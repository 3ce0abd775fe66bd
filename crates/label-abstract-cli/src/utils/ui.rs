// CLI output formatting with consistent styling using colored.
// Plain println!/eprintln! keep ANSI colours intact; tracing is reserved for diagnostics.

use crate::core::{RunSummary, Transformation};
use colored::Colorize as _;

/// Enable E2E mode for deterministic output (no colors).
pub fn set_e2e_mode(enabled: bool) {
    if enabled {
        colored::control::set_override(false);
    }
}

pub fn print_header(dry_run: bool) {
    if dry_run {
        println!("🔄 Abstracting config parameter labels {}\n", "(dry run)".yellow());
    } else {
        println!("🔄 Abstracting config parameter labels...\n");
    }
}

pub fn print_file_not_found(file_name: &str) {
    println!("{} {}", "⚠️  File not found:".yellow(), file_name);
}

pub fn print_processing(file_name: &str) {
    println!("📝 Processing {}...", file_name.cyan());
}

pub fn print_no_changes() {
    println!("   ℹ️  {}\n", "No changes needed".dimmed());
}

pub fn print_applied(count: usize, dry_run: bool) {
    if dry_run {
        println!(
            "   🔍 {} {} transformations:",
            "Would apply".yellow(),
            count
        );
    } else {
        println!("   ✅ {} {} transformations:", "Applied".green(), count);
    }
}

/// Prints up to `limit` before/after pairs and a count of the rest.
pub fn print_examples(transformations: &[Transformation], limit: usize) {
    for transformation in transformations.iter().take(limit) {
        println!("      • {}", transformation.key.bold());
        println!("        {} {}", "Before:".dimmed(), transformation.before);
        println!("        {}  {}", "After:".green(), transformation.after);
    }

    if transformations.len() > limit {
        println!(
            "      {}",
            format!("... and {} more", transformations.len() - limit).dimmed()
        );
    }
}

pub fn print_summary(summary: &RunSummary, dry_run: bool) {
    println!();
    if dry_run {
        println!(
            "✨ {} {} label transformations would be applied across {} file(s).",
            "Dry run:".yellow(),
            summary.transformations,
            summary.processed
        );
    } else {
        println!(
            "✨ {} Applied {} label transformations total.",
            "Done!".green(),
            summary.transformations
        );
    }

    if summary.missing > 0 {
        println!(
            "{}",
            format!("   {} configured file(s) not found", summary.missing).yellow()
        );
    }
}

pub fn print_label(label: &str) {
    println!("{}", label);
}

pub fn print_diff(old: &str, new: &str) {
    // Colours are already off in e2e mode through `colored::control::set_override(false)`.

    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);

    for (idx, group) in diff.grouped_ops(1).iter().enumerate() {
        if idx > 0 {
            println!("{}", "  ...".dimmed());
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let line = format!("{} {}", sign, change);
                match change.tag() {
                    ChangeTag::Delete => print!("{}", line.red()),
                    ChangeTag::Insert => print!("{}", line.green()),
                    ChangeTag::Equal => print!("{}", line.dimmed()),
                }
            }
        }
    }
}
