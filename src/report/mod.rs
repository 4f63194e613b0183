pub mod taxonomy;

use crate::classifier::RecordClassification;
use crate::index::{IndexEntry, ReverseIndex};
use colored::Colorize;
use std::fmt::Write;

pub use taxonomy::{category_of, Category, CATEGORIES};

/// How the reverse index is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// All libraries ranked by total mention count.
    Flat,
    /// Libraries grouped under the category taxonomy; untaxonomized
    /// libraries are omitted here but always present in the flat view.
    Grouped,
}

impl Default for ReportFormat {
    fn default() -> Self {
        ReportFormat::Grouped
    }
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Some(ReportFormat::Flat),
            "grouped" => Some(ReportFormat::Grouped),
            _ => None,
        }
    }
}

fn push_entry(out: &mut String, library: &str, entry: &IndexEntry, show_total: bool) {
    if show_total {
        let _ = writeln!(
            out,
            "{} (Total: {} mentions):",
            library.bold(),
            entry.total_mentions()
        );
    } else {
        let _ = writeln!(out, "{}:", library.bold());
    }
    if !entry.used_by.is_empty() {
        let apps: Vec<&str> = entry.used_by.iter().map(String::as_str).collect();
        let _ = writeln!(out, "  Used by: {}", apps.join(", "));
    }
    if !entry.interested_by.is_empty() {
        let apps: Vec<&str> = entry.interested_by.iter().map(String::as_str).collect();
        let _ = writeln!(out, "  Interested by: {}", apps.join(", "));
    }
    if !entry.mentioned_by.is_empty() {
        let apps: Vec<&str> = entry.mentioned_by.iter().map(String::as_str).collect();
        let _ = writeln!(out, "  Mentioned by: {}", apps.join(", "));
    }
}

/// Every indexed library ranked by total mention count descending, ties
/// broken on the canonical name.
pub fn render_flat(index: &ReverseIndex) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "SUMMARY BY LIBRARY".bold());
    let _ = writeln!(out, "{}", "=".repeat(60));

    for (library, entry) in index.ranked() {
        let _ = writeln!(out);
        push_entry(&mut out, library, entry, true);
    }
    out
}

/// Indexed libraries grouped by category. A library outside the taxonomy
/// never appears here.
pub fn render_grouped(index: &ReverseIndex) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Library Analysis Results".bold());
    let _ = writeln!(out, "{}", "=".repeat(60));

    for category in CATEGORIES {
        let present: Vec<_> = category
            .libraries
            .iter()
            .filter_map(|library| index.get(library).map(|entry| (*library, entry)))
            .collect();
        if present.is_empty() {
            continue;
        }

        let _ = writeln!(out, "\n{}:", category.name.cyan().bold());
        let _ = writeln!(out, "{}", "-".repeat(30));
        for (library, entry) in present {
            push_entry(&mut out, library, entry, false);
        }
    }
    out
}

/// Per-record classification detail, one section per application, in corpus
/// order. Verbose companion to the index views.
pub fn render_audit(classified: &[(String, RecordClassification)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "PER-APPLICATION CLASSIFICATION".bold());
    let _ = writeln!(out, "{}", "=".repeat(60));

    for (app_name, classification) in classified {
        let _ = writeln!(out, "\n{}:", app_name.bold());
        let _ = writeln!(out, "{}", "-".repeat(40));
        for library in &classification.used {
            let _ = writeln!(out, "  {}: {}", "USED".green(), library);
        }
        for library in &classification.interested {
            let _ = writeln!(out, "  {}: {}", "INTERESTED".yellow(), library);
        }
        for library in &classification.mentioned {
            let _ = writeln!(out, "  {}: {}", "MENTIONED".dimmed(), library);
        }
        if classification.is_empty() {
            let _ = writeln!(out, "  (no recognizable libraries)");
        }
    }
    out
}
