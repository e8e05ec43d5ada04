//! Rewrite engine — runs the pattern table over a text in fixed order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sq_core::{CompressorConfig, GroupName, TextCompressor};

use crate::rules::apply_all;
use crate::table::{PatternTable, STANDARD_TABLE};

pub const STAGE_PHRASES: &str = "phrases";
pub const STAGE_FILLER_WORDS: &str = "filler_words";
pub const STAGE_SECONDARY: &str = "secondary";
pub const STAGE_TRAILING: &str = "trailing_abbreviations";
pub const STAGE_WHITESPACE: &str = "whitespace";

/// Engine output with the stages that ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub output: String,
    pub original_len: usize,
    pub compressed_len: usize,
    pub stages_applied: Vec<String>,
}

impl CompressionResult {
    /// Byte-length ratio; token ratios live in `CompressionStats`.
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.compressed_len as f64 / self.original_len as f64
    }
}

/// Deterministic rule-based compressor.
///
/// Stateless apart from the shared, read-only table: cheap to clone and safe
/// to call from any number of threads.
#[derive(Debug, Clone)]
pub struct RuleCompressor {
    table: Arc<PatternTable>,
}

impl RuleCompressor {
    /// All groups enabled, sharing the process-wide table.
    pub fn new() -> Self {
        Self { table: Arc::clone(&*STANDARD_TABLE) }
    }

    pub fn from_config(config: &CompressorConfig) -> Self {
        Self::with_table(STANDARD_TABLE.with_toggles(&config.groups))
    }

    /// Run a caller-built table instead of the shared one.
    pub fn with_table(table: PatternTable) -> Self {
        Self { table: Arc::new(table) }
    }

    pub fn with_group(self, name: GroupName, enabled: bool) -> Self {
        Self::with_table(self.table.with_group(name, enabled))
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Names of enabled groups, in the order they run.
    pub fn enabled_groups(&self) -> Vec<GroupName> {
        self.table.groups().iter().filter(|g| g.enabled).map(|g| g.name).collect()
    }

    /// Compress text through the pipeline.
    pub fn compress(&self, text: &str) -> String {
        self.compress_detailed(text).output
    }

    pub fn compress_detailed(&self, text: &str) -> CompressionResult {
        let original_len = text.len();
        let mut result = text.to_string();
        let mut stages = Vec::new();

        // 1. Grouped rules, declared order.
        for group in self.table.groups().iter().filter(|g| g.enabled) {
            let before = result.len();
            result = group.apply(&result);
            tracing::trace!(group = %group.name, before, after = result.len(), "rule group applied");
            stages.push(group.name.as_str().to_string());
        }

        // 2. Verbose phrases, then technical abbreviations.
        result = apply_all(self.table.phrases(), &result);
        result = apply_all(self.table.abbreviations(), &result);
        stages.push(STAGE_PHRASES.into());

        // 3. Word-level filler drop on exact tokens ("very," survives);
        //    step 4 repairs spacing.
        result = self.drop_fillers(&result);
        stages.push(STAGE_FILLER_WORDS.into());

        // 4. Secondary cleanup list.
        result = apply_all(self.table.secondary(), &result);
        stages.push(STAGE_SECONDARY.into());

        // 5. Re-applied abbreviations; no-op after sentence_compression.
        result = apply_all(self.table.trailing(), &result);
        stages.push(STAGE_TRAILING.into());

        // 6. Whitespace.
        result = collapse_whitespace(&result);
        stages.push(STAGE_WHITESPACE.into());

        let compressed_len = result.len();
        tracing::debug!(original_len, compressed_len, stages = stages.len(), "compressed text");

        CompressionResult {
            output: result,
            original_len,
            compressed_len,
            stages_applied: stages,
        }
    }

    fn drop_fillers(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.table.is_filler(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for RuleCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCompressor for RuleCompressor {
    fn name(&self) -> &str {
        "rule"
    }

    fn compress(&self, text: &str) -> String {
        RuleCompressor::compress(self, text)
    }
}

/// Collapse whitespace runs to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compress with every group enabled.
pub fn compress(text: &str) -> String {
    RuleCompressor::new().compress(text)
}
