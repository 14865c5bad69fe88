//! Publications section. Suppressed entirely, header included, when the
//! list is empty.

use super::section_header;
use crate::content::PublicationRecord;
use crate::glossary::Glossary;
use crate::normalize::normalize;

pub fn render_publications(records: &[PublicationRecord], glossary: &Glossary) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut lines = vec![section_header("Publications")];

    for record in records {
        let authors: Vec<String> = record
            .authors
            .iter()
            .map(|author| normalize(author, glossary))
            .collect();
        let year = record.year.map(|y| y.to_string()).unwrap_or_default();

        lines.push("#publication(".to_string());
        lines.push(format!("  \"{}\",", normalize(&record.title, glossary)));
        lines.push(format!("  \"{}\",", authors.join(", ")));
        lines.push(format!("  \"{}\",", normalize(&record.venue, glossary)));
        lines.push(format!("  {},", year));

        if !record.links.doi.is_empty() {
            lines.push(format!("  doi: \"{}\",", record.links.doi));
        }
        if let Some(citations) = record.citations {
            if citations > 0 {
                lines.push(format!("  citations: {},", citations));
            }
        }

        lines.push(")\n".to_string());
    }

    lines.join("\n")
}
