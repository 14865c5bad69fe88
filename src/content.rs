//! Content Records
//!
//! Serde types for the JSON content documents and the loader that reads
//! them once at startup. Records are held read-only for the duration of a
//! run. Absent fields degrade to empty defaults; only a missing required
//! file is fatal, with the diagnostic naming the file.

use crate::error::ContentError;
use crate::resolve::{resolve_list, resolve_text, TextTarget};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Personal header fields from `intro/data.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntroRecord {
    pub name: String,
    pub title: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub summary: String,
    pub cv_summary: String,
    pub ats_summary: String,
}

impl IntroRecord {
    /// Summary text for the given target. Deliberately returned raw: the
    /// summary may carry Typst markup and is never escaped.
    pub fn summary_for(&self, target: TextTarget) -> &str {
        resolve_text(&self.summary, &self.cv_summary, &self.ats_summary, target)
    }
}

/// One achievement line: either a bare string or an object with per-target
/// override text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AchievementItem {
    Plain(String),
    Detailed {
        #[serde(default)]
        text: String,
        #[serde(default, rename = "cvText")]
        cv_text: String,
        #[serde(default, rename = "atsText")]
        ats_text: String,
    },
}

impl AchievementItem {
    pub fn text_for(&self, target: TextTarget) -> &str {
        match self {
            AchievementItem::Plain(text) => text,
            AchievementItem::Detailed {
                text,
                cv_text,
                ats_text,
            } => resolve_text(text, cv_text, ats_text, target),
        }
    }
}

/// One role from `experience/data.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRecord {
    pub company: String,
    pub position: String,
    pub location: String,
    /// `"YYYY-MM"`, or empty when unknown
    pub start_date: String,
    /// `"YYYY-MM"`, or empty for ongoing roles
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub cv_description: String,
    pub ats_description: String,
    pub achievements: Vec<AchievementItem>,
    /// Shortened achievements list used when present
    pub cv_achievements: Option<Vec<AchievementItem>>,
    pub technologies: Vec<String>,
    pub cv_technologies: Option<Vec<String>>,
    pub ats_technologies: Option<Vec<String>>,
    /// Tri-state curation flag; `None` defers to the date cutoff
    pub cv_include: Option<bool>,
    /// Force a page break before this entry
    pub page_break: bool,
}

impl ExperienceRecord {
    pub fn description_for(&self, target: TextTarget) -> &str {
        resolve_text(
            &self.description,
            &self.cv_description,
            &self.ats_description,
            target,
        )
    }

    /// The achievements list to render: the short CV list when the record
    /// defines one, otherwise the full list.
    pub fn achievements_for_render(&self) -> &[AchievementItem] {
        match &self.cv_achievements {
            Some(short) if !short.is_empty() => short,
            _ => &self.achievements,
        }
    }

    pub fn technologies_for(&self, target: TextTarget) -> &[String] {
        resolve_list(
            &self.technologies,
            self.cv_technologies.as_deref(),
            self.ats_technologies.as_deref(),
            target,
        )
    }
}

/// One entry from `education/data.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRecord {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<AchievementItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicationLinks {
    #[serde(default)]
    pub doi: String,
}

/// One entry from `publications/data.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: Option<u32>,
    pub links: PublicationLinks,
    pub citations: Option<u32>,
}

/// Proficiency tiers, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Proficient,
    Expert,
    Wizard,
}

/// One skill from `skillsDatabase.json`, keyed by name in the source map
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillRecord {
    pub category: String,
    pub level: SkillLevel,
    pub featured: bool,
}

/// The whole skills database. A `BTreeMap` keeps within-category skill
/// order independent of source map iteration order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillsDatabase {
    pub skills: BTreeMap<String, SkillRecord>,
}

/// One program or award entry from `misc/data.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramRecord {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub year: Option<u32>,
    pub description: String,
    pub cv_description: String,
    pub ats_description: String,
    pub achievements: Vec<AchievementItem>,
    /// Inclusion flag, default true; only an explicit `false` excludes
    pub include: Option<bool>,
}

impl ProgramRecord {
    pub fn description_for(&self, target: TextTarget) -> &str {
        resolve_text(
            &self.description,
            &self.cv_description,
            &self.ats_description,
            target,
        )
    }

    pub fn included(&self) -> bool {
        self.include != Some(false)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MiscContent {
    pub programs: Vec<ProgramRecord>,
    pub awards: Vec<ProgramRecord>,
}

/// All content documents for one run, loaded once and held read-only.
#[derive(Debug, Clone)]
pub struct ContentSet {
    pub intro: IntroRecord,
    pub experience: Vec<ExperienceRecord>,
    pub education: Vec<EducationRecord>,
    pub publications: Vec<PublicationRecord>,
    pub skills: SkillsDatabase,
    pub misc: MiscContent,
}

impl ContentSet {
    /// Load every required content document from `content_dir`.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let set = Self {
            intro: load_json(&content_dir.join("intro/data.json"))?,
            experience: load_json(&content_dir.join("experience/data.json"))?,
            education: load_json(&content_dir.join("education/data.json"))?,
            publications: load_json(&content_dir.join("publications/data.json"))?,
            skills: load_json(&content_dir.join("skillsDatabase.json"))?,
            misc: load_json(&content_dir.join("misc/data.json"))?,
        };
        debug!(
            "Loaded content: {} experience, {} education, {} publications, {} skills",
            set.experience.len(),
            set.education.len(),
            set.publications.len(),
            set.skills.skills.len()
        );
        Ok(set)
    }
}

/// Load and parse one required JSON document. A missing file maps to
/// `ContentError::Missing` so the diagnostic names the file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ContentError::Missing(path.to_path_buf())
        } else {
            ContentError::Io(e)
        }
    })?;
    serde_json::from_str(&raw).map_err(|e| ContentError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
