//! Document Assembly
//!
//! Concatenates the Typst preamble, the header block, and each rendered
//! section into one output document for a variant. Section order is fixed:
//! experience, education, publications (when enabled), skills, then
//! programs/awards (when enabled).

use crate::content::ContentSet;
use crate::glossary::Glossary;
use crate::normalize::normalize;
use crate::sections::{
    render_education, render_experience, render_programs, render_publications, render_skills,
};
use crate::variant::Variant;

/// Render the full document for one variant.
pub fn render_document(content: &ContentSet, glossary: &Glossary, variant: &Variant) -> String {
    let mut parts = vec![header_block(content, glossary, variant)];

    parts.push(render_experience(
        &content.experience,
        glossary,
        variant,
        &content.intro.website,
    ));
    parts.push(render_education(
        &content.education,
        glossary,
        variant.target,
    ));
    if variant.publications {
        parts.push(render_publications(&content.publications, glossary));
    }
    parts.push(render_skills(&content.skills, glossary, variant.skills));
    if variant.programs {
        parts.push(render_programs(&content.misc, glossary, variant.target));
    }

    parts.retain(|part| !part.is_empty());
    parts.join("\n")
}

fn header_block(content: &ContentSet, glossary: &Glossary, variant: &Variant) -> String {
    let intro = &content.intro;
    // The summary may carry Typst markup, so it bypasses normalization.
    let summary = intro.summary_for(variant.target);

    let lines = vec![
        "#import \"template.typ\": *".to_string(),
        String::new(),
        "#show: cv-document".to_string(),
        String::new(),
        "#cv-header(".to_string(),
        format!("  \"{}\",", normalize(&intro.name, glossary)),
        format!("  \"{}\",", normalize(&intro.title, glossary)),
        format!("  \"{}\",", intro.email),
        link_line(&intro.linkedin),
        link_line(&intro.github),
        link_line(&intro.website),
        format!("  summary: [{}],", summary),
        ")".to_string(),
        String::new(),
    ];

    lines.join("\n")
}

/// Contact link argument: the URL as the link target with the scheme
/// stripped for display.
fn link_line(url: &str) -> String {
    let label = url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    format!("  link(\"{}\")[{}],", url, label)
}
