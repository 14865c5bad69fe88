//! Technical skills section: grouping by category, the featured/level
//! selection rule, and the fixed category ordering.

use super::section_header;
use crate::content::{SkillLevel, SkillsDatabase};
use crate::glossary::Glossary;
use crate::normalize::normalize;
use crate::variant::SkillsMode;
use std::collections::BTreeMap;

/// Categories listed here appear first, in this order; any remaining
/// categories follow lexicographically.
pub const PREFERRED_CATEGORY_ORDER: [&str; 5] = [
    "Programming Languages",
    "Frameworks & Libraries",
    "Cloud & Infrastructure",
    "Data & Machine Learning",
    "Tools & Systems",
];

pub fn render_skills(db: &SkillsDatabase, glossary: &Glossary, mode: SkillsMode) -> String {
    let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (name, skill) in &db.skills {
        let keep = match mode {
            SkillsMode::All => true,
            SkillsMode::Featured => skill.featured || skill.level >= SkillLevel::Proficient,
        };
        if !keep {
            continue;
        }
        let category = if skill.category.is_empty() {
            "Other".to_string()
        } else {
            skill.category.clone()
        };
        categories.entry(category).or_default().push(name.clone());
    }

    let mut ordered: Vec<(String, Vec<String>)> = Vec::new();
    for preferred in PREFERRED_CATEGORY_ORDER {
        if let Some(skills) = categories.remove(preferred) {
            ordered.push((preferred.to_string(), skills));
        }
    }
    // Remaining categories come out of the BTreeMap already sorted.
    ordered.extend(categories);

    let mut lines = vec![section_header("Technical Skills")];
    lines.push("#skills-section((".to_string());
    for (category, skills) in &ordered {
        let rendered: Vec<String> = skills.iter().map(|s| skill_literal(s, glossary)).collect();
        lines.push(format!(
            "  (\"{}\", ({},)),",
            normalize(category, glossary),
            rendered.join(", ")
        ));
    }
    lines.push("))\n".to_string());

    lines.join("\n")
}

/// Skill names become quoted string literals, except LaTeX, which is
/// emitted as the bare metalogo identifier so the template can typeset it.
fn skill_literal(name: &str, glossary: &Glossary) -> String {
    if name == "LaTeX" {
        "LaTeX".to_string()
    } else {
        format!("\"{}\"", normalize(name, glossary))
    }
}
