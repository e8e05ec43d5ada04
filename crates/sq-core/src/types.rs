use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SqError;

/// Identifier of a rule group in the rewrite pipeline.
///
/// Variant order is pipeline order; [`GroupName::ALL`] is the canonical
/// sequence the engine walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupName {
    RemoveFillers,
    RemoveGreetings,
    StripModifiers,
    CollapsePhrases,
    PunctuationCompression,
    SentenceCompression,
    QuestionPreservation,
}

impl GroupName {
    pub const ALL: [GroupName; 7] = [
        GroupName::RemoveFillers,
        GroupName::RemoveGreetings,
        GroupName::StripModifiers,
        GroupName::CollapsePhrases,
        GroupName::PunctuationCompression,
        GroupName::SentenceCompression,
        GroupName::QuestionPreservation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RemoveFillers => "remove_fillers",
            Self::RemoveGreetings => "remove_greetings",
            Self::StripModifiers => "strip_modifiers",
            Self::CollapsePhrases => "collapse_phrases",
            Self::PunctuationCompression => "punctuation_compression",
            Self::SentenceCompression => "sentence_compression",
            Self::QuestionPreservation => "question_preservation",
        }
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupName {
    type Err = SqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupName::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| SqError::InvalidConfig(format!("unknown rule group: {s}")))
    }
}
