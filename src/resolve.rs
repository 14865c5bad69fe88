//! Field Resolution
//!
//! Picks the most specific available variant of a record field. Precedence,
//! highest first: ATS override (only when the variant targets ATS output),
//! CV override, base field. An override that is present but empty never
//! stops the chain; resolution falls through to the next field. The same
//! chain applies to descriptions, summaries, and achievement text.

use serde::{Deserialize, Serialize};

/// Which text flavor a variant renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTarget {
    /// Narrative CV wording
    Cv,
    /// Applicant-tracking-system-oriented plain wording
    Ats,
}

/// Resolve a text field against its CV and ATS overrides.
pub fn resolve_text<'a>(base: &'a str, cv: &'a str, ats: &'a str, target: TextTarget) -> &'a str {
    if target == TextTarget::Ats && !ats.is_empty() {
        return ats;
    }
    if !cv.is_empty() {
        return cv;
    }
    base
}

/// Resolve a list field against its CV and ATS overrides. Empty or absent
/// override lists fall through, mirroring `resolve_text`.
pub fn resolve_list<'a, T>(
    base: &'a [T],
    cv: Option<&'a [T]>,
    ats: Option<&'a [T]>,
    target: TextTarget,
) -> &'a [T] {
    if target == TextTarget::Ats {
        if let Some(list) = ats {
            if !list.is_empty() {
                return list;
            }
        }
    }
    if let Some(list) = cv {
        if !list.is_empty() {
            return list;
        }
    }
    base
}
