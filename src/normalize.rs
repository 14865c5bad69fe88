//! Text Normalization
//!
//! Turns resolved record text into Typst-safe output: glossary placeholder
//! substitution, whitespace and comma normalization, and escaping of the
//! characters Typst reserves in content position. Pure functions; the
//! glossary is passed in explicitly rather than read from ambient state.

use crate::glossary::Glossary;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static COMMA_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());

/// Normalize `text` for emission into Typst markup.
///
/// Steps, in order: placeholder substitution, whitespace-run collapse, comma
/// spacing normalization, reserved-character escaping, trim. Empty input
/// short-circuits to an empty string.
pub fn normalize(text: &str, glossary: &Glossary) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = substitute_placeholders(text, glossary);
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = COMMA_SPACING.replace_all(&text, ", ");
    let text = escape_typst(&text);
    text.trim().to_string()
}

/// Replace every `{{term-id}}` token with its glossary term. Unknown ids
/// keep the literal id text with the braces stripped.
fn substitute_placeholders(text: &str, glossary: &Glossary) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            let id = &caps[1];
            glossary.lookup(id).unwrap_or(id).to_string()
        })
        .into_owned()
}

/// Escape the characters Typst treats specially in content position.
/// Fixed replacement order: `#`, `[`, `]`, `@`.
fn escape_typst(text: &str) -> String {
    text.replace('#', "\\#")
        .replace('[', "\\[")
        .replace(']', "\\]")
        .replace('@', "\\@")
}
