use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SqError};
use crate::types::GroupName;

pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompressorConfig {
    pub groups: GroupToggles,
    /// Model identifier handed to the token counter when computing stats.
    pub model: String,
}

/// Per-group enable flags. Missing keys default to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupToggles {
    pub remove_fillers: bool,
    pub remove_greetings: bool,
    pub strip_modifiers: bool,
    pub collapse_phrases: bool,
    pub punctuation_compression: bool,
    pub sentence_compression: bool,
    pub question_preservation: bool,
}

impl GroupToggles {
    pub fn is_enabled(&self, name: GroupName) -> bool {
        match name {
            GroupName::RemoveFillers => self.remove_fillers,
            GroupName::RemoveGreetings => self.remove_greetings,
            GroupName::StripModifiers => self.strip_modifiers,
            GroupName::CollapsePhrases => self.collapse_phrases,
            GroupName::PunctuationCompression => self.punctuation_compression,
            GroupName::SentenceCompression => self.sentence_compression,
            GroupName::QuestionPreservation => self.question_preservation,
        }
    }

    pub fn set(&mut self, name: GroupName, enabled: bool) {
        let slot = match name {
            GroupName::RemoveFillers => &mut self.remove_fillers,
            GroupName::RemoveGreetings => &mut self.remove_greetings,
            GroupName::StripModifiers => &mut self.strip_modifiers,
            GroupName::CollapsePhrases => &mut self.collapse_phrases,
            GroupName::PunctuationCompression => &mut self.punctuation_compression,
            GroupName::SentenceCompression => &mut self.sentence_compression,
            GroupName::QuestionPreservation => &mut self.question_preservation,
        };
        *slot = enabled;
    }
}

impl Default for GroupToggles {
    fn default() -> Self {
        Self {
            remove_fillers: true,
            remove_greetings: true,
            strip_modifiers: true,
            collapse_phrases: true,
            punctuation_compression: true,
            sentence_compression: true,
            question_preservation: true,
        }
    }
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            groups: GroupToggles::default(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl CompressorConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: CompressorConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), model = %config.model, "loaded compressor config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(SqError::InvalidConfig("model must not be empty".into()));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
