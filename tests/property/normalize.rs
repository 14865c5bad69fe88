//! Property-based tests for the text normalizer.

use cvgen::glossary::{Glossary, GlossaryTerm};
use cvgen::normalize::normalize;
use proptest::prelude::*;

fn glossary() -> Glossary {
    Glossary::from_terms(vec![GlossaryTerm {
        id: "distsys".to_string(),
        term: "distributed systems".to_string(),
    }])
}

/// Every reserved character in the output must carry its escape backslash.
fn reserved_chars_escaped(text: &str) -> bool {
    let bytes = text.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if matches!(b, b'#' | b'[' | b']' | b'@') {
            if i == 0 || bytes[i - 1] != b'\\' {
                return false;
            }
        }
    }
    true
}

#[test]
fn test_plain_words_collapse_to_single_spaces() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec("[a-zA-Z0-9.]{1,8}", 1..6),
                proptest::collection::vec(" |\t|\n|  ", 0..6),
            ),
            |(words, gaps)| {
                // Interleave words with arbitrary whitespace runs.
                let mut input = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i > 0 {
                        input.push_str(gaps.get(i - 1).map(String::as_str).unwrap_or("   "));
                        input.push(' ');
                    }
                    input.push_str(word);
                }
                let expected = words.join(" ");
                assert_eq!(normalize(&input, &glossary()), expected);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_no_unescaped_reserved_characters_survive() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |input| {
            let out = normalize(&input, &glossary());
            assert!(
                reserved_chars_escaped(&out),
                "unescaped reserved char in {:?}",
                out
            );
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_known_placeholder_always_replaced() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[a-z ]{0,10}", "[a-z ]{0,10}"), |(prefix, suffix)| {
            let input = format!("{}{{{{distsys}}}}{}", prefix, suffix);
            let out = normalize(&input, &glossary());
            assert!(out.contains("distributed systems"));
            assert!(!out.contains("{{distsys}}"));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_unknown_placeholder_keeps_id_without_braces() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-z][a-z-]{0,12}", |id| {
            prop_assume!(id != "distsys");
            let input = format!("used {{{{{}}}}} here", id);
            let out = normalize(&input, &glossary());
            assert!(out.contains(&id), "id {:?} lost in {:?}", id, out);
            assert!(!out.contains("{{"));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_output_is_always_trimmed() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |input| {
            let out = normalize(&input, &glossary());
            assert_eq!(out, out.trim());
            Ok(())
        })
        .unwrap();
}
