//! Shared types for the squeeze compressors: errors, configuration, the
//! token-counting seam and per-call compression stats.

pub mod compressor;
pub mod config;
pub mod error;
pub mod stats;
pub mod tokens;
pub mod types;

pub use compressor::TextCompressor;
pub use config::{CompressorConfig, GroupToggles, DEFAULT_MODEL};
pub use error::{Result, SqError};
pub use stats::{get_compression_stats, CompressionStats};
pub use tokens::{HeuristicCounter, TokenCounter};
pub use types::GroupName;
