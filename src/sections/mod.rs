//! Section Generators
//!
//! One module per document section. Each generator takes raw records plus
//! the active variant, resolves and normalizes field text internally, and
//! emits a sequence of Typst template calls. Argument order and naming are
//! a contract with the template definitions and must not drift.

mod education;
mod experience;
mod programs;
mod publications;
mod skills;

pub use education::render_education;
pub use experience::{filter_experience, render_experience, CURATED_CUTOFF};
pub use programs::render_programs;
pub use publications::render_publications;
pub use skills::{render_skills, PREFERRED_CATEGORY_ORDER};

/// Section header call. The trailing newline yields a blank line between
/// the header and the first entry once lines are joined.
fn section_header(title: &str) -> String {
    format!("#section(\"{}\")\n", title)
}

/// Append a named list argument of bracketed content lines, e.g.
/// `achievements: ([...], [...])`.
fn push_content_list(lines: &mut Vec<String>, name: &str, items: &[String]) {
    lines.push(format!("  {}: (", name));
    for item in items {
        lines.push(format!("    [{}],", item));
    }
    lines.push("  ),".to_string());
}
