//! Programs & awards section: programs first, then awards, skipping
//! entries explicitly excluded. Suppressed when both lists are empty.

use super::{push_content_list, section_header};
use crate::content::MiscContent;
use crate::glossary::Glossary;
use crate::normalize::normalize;
use crate::resolve::TextTarget;

pub fn render_programs(misc: &MiscContent, glossary: &Glossary, target: TextTarget) -> String {
    if misc.programs.is_empty() && misc.awards.is_empty() {
        return String::new();
    }

    let mut lines = vec![section_header("Programs & Awards")];

    for record in misc.programs.iter().chain(misc.awards.iter()) {
        if !record.included() {
            continue;
        }

        let date_label = record.year.map(|y| y.to_string()).unwrap_or_default();
        let description = normalize(record.description_for(target), glossary);
        let achievements: Vec<String> = record
            .achievements
            .iter()
            .map(|item| normalize(item.text_for(target), glossary))
            .collect();

        lines.push("#simple-entry(".to_string());
        lines.push(format!("  \"{}\",", normalize(&record.title, glossary)));
        lines.push(format!("  \"{}\",", normalize(&record.organization, glossary)));
        lines.push(format!("  \"{}\",", normalize(&record.location, glossary)));
        lines.push(format!("  \"{}\",", date_label));

        if !description.is_empty() {
            lines.push(format!("  description: [{}],", description));
        }
        if !achievements.is_empty() {
            push_content_list(&mut lines, "highlights", &achievements);
        }

        lines.push(")\n".to_string());
    }

    lines.join("\n")
}
