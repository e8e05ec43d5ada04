//! Before/after token accounting for a single compression call.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MODEL;
use crate::tokens::{HeuristicCounter, TokenCounter};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    pub original_token_count: usize,
    pub compressed_token_count: usize,
    /// Negative when compression grew the text.
    pub tokens_saved: i64,
    pub compression_ratio: f64,
    pub percentage_saved: f64,
}

impl CompressionStats {
    pub fn compute(
        original: &str,
        compressed: &str,
        counter: &dyn TokenCounter,
        model: &str,
    ) -> Self {
        let original_tokens = counter.count_tokens(original, model);
        let compressed_tokens = counter.count_tokens(compressed, model);
        Self::from_counts(original_tokens, compressed_tokens)
    }

    pub fn from_counts(original_token_count: usize, compressed_token_count: usize) -> Self {
        let (compression_ratio, percentage_saved) = if original_token_count > 0 {
            let ratio = compressed_token_count as f64 / original_token_count as f64;
            (ratio, (1.0 - ratio) * 100.0)
        } else {
            (1.0, 0.0)
        };

        Self {
            original_token_count,
            compressed_token_count,
            tokens_saved: original_token_count as i64 - compressed_token_count as i64,
            compression_ratio,
            percentage_saved,
        }
    }
}

/// Stats using the heuristic counter and the default model.
pub fn get_compression_stats(original: &str, compressed: &str) -> CompressionStats {
    CompressionStats::compute(original, compressed, &HeuristicCounter::default(), DEFAULT_MODEL)
}
