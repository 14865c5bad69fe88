//! The glossary is optional input: broken or absent glossary sources must
//! degrade to no substitution, never abort the build.

use super::test_utils::{fixture_content_dir, write_file};
use cvgen::config::BuildConfig;
use cvgen::pipeline::run_build;
use cvgen::variant::builtin_variants;
use std::fs;
use tempfile::TempDir;

fn build_with_glossary(glossary_json: Option<&str>) -> String {
    let content = fixture_content_dir();
    match glossary_json {
        Some(json) => write_file(content.path(), "glossary.json", json),
        None => fs::remove_file(content.path().join("glossary.json")).unwrap(),
    }
    write_file(
        content.path(),
        "experience/data.json",
        r#"[
            {
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2020-01",
                "achievements": ["Operated {{distsys}} at scale"]
            }
        ]"#,
    );

    let output = TempDir::new().unwrap();
    let mut config = BuildConfig::default();
    config.content_dir = content.path().to_path_buf();
    config.output_dir = output.path().to_path_buf();

    run_build(&config, &builtin_variants()).unwrap();
    fs::read_to_string(output.path().join("cv.typ")).unwrap()
}

#[test]
fn test_missing_glossary_keeps_literal_ids() {
    let doc = build_with_glossary(None);
    assert!(doc.contains("Operated distsys at scale"));
}

#[test]
fn test_malformed_glossary_keeps_literal_ids() {
    let doc = build_with_glossary(Some("{ not json"));
    assert!(doc.contains("Operated distsys at scale"));
}

#[test]
fn test_glossary_without_terms_list_keeps_literal_ids() {
    let doc = build_with_glossary(Some(r#"{"entries": []}"#));
    assert!(doc.contains("Operated distsys at scale"));
}
