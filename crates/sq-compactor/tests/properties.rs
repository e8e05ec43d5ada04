//! Property tests for the rewrite pipeline.

use proptest::prelude::*;
use sq_compactor::{compress, RuleCompressor, STANDARD_TABLE};
use sq_core::GroupName;

const VOCAB: &[&str] = &[
    "please", "actually", "very", "really", "quite", "basically", "literally",
    "rather", "send", "the", "report", "cat", "data", "model", "fast", "and",
];

fn is_normalized(text: &str) -> bool {
    !text.contains("  ") && text == text.trim()
}

fn word_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..24).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn test_compress_is_total(input in any::<String>()) {
        let out = compress(&input);
        prop_assert!(is_normalized(&out), "not normalized: {:?}", out);
    }

    #[test]
    fn test_recompress_stays_normalized(input in "\\PC{0,200}") {
        let twice = compress(&compress(&input));
        prop_assert!(is_normalized(&twice));
    }

    #[test]
    fn test_no_filler_tokens_survive(input in word_soup()) {
        let out = compress(&input);
        for token in out.split_whitespace() {
            prop_assert!(!STANDARD_TABLE.is_filler(token), "filler {:?} in {:?}", token, out);
        }
    }

    #[test]
    fn test_output_not_longer_for_word_soup(input in word_soup()) {
        let out = compress(&input);
        prop_assert!(out.len() <= input.len());
    }

    #[test]
    fn test_disabling_identity_group_changes_nothing(input in "\\PC{0,120}") {
        let without = RuleCompressor::new().with_group(GroupName::QuestionPreservation, false);
        prop_assert_eq!(without.compress(&input), compress(&input));
    }
}
