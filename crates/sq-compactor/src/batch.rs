//! Batch helpers: split a prompt file, compress each prompt, summarize.

use serde::{Deserialize, Serialize};
use sq_core::{CompressionStats, TextCompressor, TokenCounter};

/// Split a document into prompts separated by blank lines.
pub fn split_prompts(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub compressed: String,
    pub stats: CompressionStats,
}

/// Compress every prompt independently and record its stats.
pub fn compress_batch(
    compressor: &dyn TextCompressor,
    prompts: &[&str],
    counter: &dyn TokenCounter,
    model: &str,
) -> Vec<BatchEntry> {
    prompts
        .iter()
        .map(|prompt| {
            let compressed = compressor.compress(prompt);
            let stats = CompressionStats::compute(prompt, &compressed, counter, model);
            BatchEntry { compressed, stats }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub prompts: usize,
    pub original_tokens: usize,
    pub compressed_tokens: usize,
    pub tokens_saved: i64,
    pub avg_compression_ratio: f64,
    pub avg_percentage_saved: f64,
}

impl BatchSummary {
    pub fn from_stats(stats: &[CompressionStats]) -> Self {
        let n = stats.len();
        let (avg_compression_ratio, avg_percentage_saved) = if n > 0 {
            (
                stats.iter().map(|s| s.compression_ratio).sum::<f64>() / n as f64,
                stats.iter().map(|s| s.percentage_saved).sum::<f64>() / n as f64,
            )
        } else {
            (1.0, 0.0)
        };

        Self {
            prompts: n,
            original_tokens: stats.iter().map(|s| s.original_token_count).sum(),
            compressed_tokens: stats.iter().map(|s| s.compressed_token_count).sum(),
            tokens_saved: stats.iter().map(|s| s.tokens_saved).sum(),
            avg_compression_ratio,
            avg_percentage_saved,
        }
    }

    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let stats: Vec<CompressionStats> = entries.iter().map(|e| e.stats).collect();
        Self::from_stats(&stats)
    }
}
