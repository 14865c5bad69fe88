//! Output Variants
//!
//! A variant is a named configuration bundle selecting the filtering and
//! formatting rules for one rendered document flavor. Variants run
//! independently over the same read-only content set.

use crate::resolve::TextTarget;
use serde::{Deserialize, Serialize};

/// How the experience list is filtered for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceFilter {
    /// Keep explicitly included records, plus unflagged records whose start
    /// date is at or after the curation cutoff
    Curated,
    /// Keep everything not explicitly excluded
    All,
}

/// Which skills a variant renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillsMode {
    /// Featured skills plus anything at proficient level or above
    Featured,
    /// Every skill in the database
    All,
}

/// One named output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Variant {
    pub name: String,
    /// Output file name within the output directory
    pub output_file: String,
    pub filter: ExperienceFilter,
    /// Suppress the technology list when it exceeds this length; `None`
    /// always includes it
    #[serde(default)]
    pub tech_cap: Option<usize>,
    pub skills: SkillsMode,
    /// Append the curated-selection disclaimer after the experience section
    #[serde(default)]
    pub curated_note: bool,
    #[serde(default = "default_true")]
    pub publications: bool,
    #[serde(default = "default_true")]
    pub programs: bool,
    pub target: TextTarget,
}

fn default_true() -> bool {
    true
}

/// The built-in variant set: the narrative CV and the ATS-oriented plain
/// rendering.
pub fn builtin_variants() -> Vec<Variant> {
    vec![
        Variant {
            name: "cv".to_string(),
            output_file: "cv.typ".to_string(),
            filter: ExperienceFilter::Curated,
            tech_cap: Some(10),
            skills: SkillsMode::Featured,
            curated_note: true,
            publications: true,
            programs: true,
            target: TextTarget::Cv,
        },
        Variant {
            name: "ats".to_string(),
            output_file: "cv-ats.typ".to_string(),
            filter: ExperienceFilter::All,
            tech_cap: None,
            skills: SkillsMode::All,
            curated_note: false,
            publications: true,
            programs: true,
            target: TextTarget::Ats,
        },
    ]
}
