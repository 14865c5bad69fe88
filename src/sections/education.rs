//! Education section: one simple entry per record, no filtering.

use super::{push_content_list, section_header};
use crate::content::EducationRecord;
use crate::glossary::Glossary;
use crate::normalize::normalize;
use crate::resolve::TextTarget;

pub fn render_education(
    records: &[EducationRecord],
    glossary: &Glossary,
    target: TextTarget,
) -> String {
    let mut lines = vec![section_header("Education")];

    for record in records {
        let degree = normalize(&record.degree, glossary);
        let field = normalize(&record.field, glossary);
        let title = format!("{} {}", degree, field);
        let highlights: Vec<String> = record
            .highlights
            .iter()
            .map(|item| normalize(item.text_for(target), glossary))
            .collect();

        lines.push("#simple-entry(".to_string());
        lines.push(format!("  \"{}\",", title.trim()));
        lines.push(format!("  \"{}\",", normalize(&record.institution, glossary)));
        lines.push(format!("  \"{}\",", normalize(&record.location, glossary)));
        lines.push(format!(
            "  format-date(\"{}\", \"{}\"),",
            record.start_date, record.end_date
        ));

        if !highlights.is_empty() {
            push_content_list(&mut lines, "highlights", &highlights);
        }

        lines.push(")\n".to_string());
    }

    lines.join("\n")
}
