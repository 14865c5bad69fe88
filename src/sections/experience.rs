//! Professional experience section: curation filter, entry emission, and
//! the optional curated-selection disclaimer.

use super::{push_content_list, section_header};
use crate::content::ExperienceRecord;
use crate::glossary::Glossary;
use crate::normalize::normalize;
use crate::variant::{ExperienceFilter, Variant};

/// Records without an explicit `cvInclude` flag are curated in when they
/// started at or after this month. Fixed-width `YYYY-MM` strings compare
/// lexicographically in chronological order.
pub const CURATED_CUTOFF: &str = "2019-01";

/// Apply the variant's experience filter, preserving input order.
pub fn filter_experience(
    records: &[ExperienceRecord],
    mode: ExperienceFilter,
) -> Vec<&ExperienceRecord> {
    records
        .iter()
        .filter(|record| match (mode, record.cv_include) {
            (_, Some(false)) => false,
            (ExperienceFilter::All, _) => true,
            (ExperienceFilter::Curated, Some(true)) => true,
            (ExperienceFilter::Curated, None) => {
                !record.start_date.is_empty() && record.start_date.as_str() >= CURATED_CUTOFF
            }
        })
        .collect()
}

/// Render the experience section for one variant. `website` feeds the
/// curated disclaimer link when the variant requests one.
pub fn render_experience(
    records: &[ExperienceRecord],
    glossary: &Glossary,
    variant: &Variant,
    website: &str,
) -> String {
    let mut lines = vec![section_header("Professional Experience")];

    for record in filter_experience(records, variant.filter) {
        if record.page_break {
            lines.push("#pagebreak()".to_string());
            lines.push(String::new());
        }

        let description = normalize(record.description_for(variant.target), glossary);
        let achievements: Vec<String> = record
            .achievements_for_render()
            .iter()
            .map(|item| normalize(item.text_for(variant.target), glossary))
            .collect();
        let technologies: Vec<String> = record
            .technologies_for(variant.target)
            .iter()
            .map(|tech| normalize(tech, glossary))
            .collect();

        lines.push("#entry(".to_string());
        lines.push(format!("  \"{}\",", normalize(&record.position, glossary)));
        lines.push(format!("  \"{}\",", normalize(&record.company, glossary)));
        lines.push(format!("  \"{}\",", normalize(&record.location, glossary)));
        lines.push(format!(
            "  format-date(\"{}\", \"{}\", current: {}),",
            record.start_date, record.end_date, record.current
        ));

        if !description.is_empty() {
            lines.push(format!("  description: [{}],", description));
        }

        if !achievements.is_empty() {
            push_content_list(&mut lines, "achievements", &achievements);
        }

        let within_cap = variant.tech_cap.map_or(true, |cap| technologies.len() <= cap);
        if !technologies.is_empty() && within_cap {
            lines.push(format!("  technologies: (\"{}\"),", technologies.join("\", \"")));
        }

        lines.push(")\n".to_string());
    }

    if variant.curated_note {
        lines.push(curated_note(website));
    }

    lines.join("\n")
}

fn curated_note(website: &str) -> String {
    if website.is_empty() {
        "#cv-note[Selected experience shown; the complete history is available on request.]\n"
            .to_string()
    } else {
        let label = website
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        format!(
            "#cv-note[Selected experience shown. The complete history is available at #link(\"{}\")[{}].]\n",
            website, label
        )
    }
}
