//! Squeeze compactor — deterministic rule-based prompt compression.
//!
//! Pipeline, in order:
//! 1. Rule groups (fillers, greetings, modifiers, phrase collapse,
//!    punctuation, sentence openers, question vocabulary)
//! 2. Verbose-phrase dictionary and technical abbreviations
//! 3. Filler-word drop
//! 4. Secondary cleanup (idioms, repeats, punctuation, whitespace)
//! 5. Trailing abbreviations
//! 6. Whitespace collapse

pub mod batch;
pub mod pipeline;
pub mod rules;
pub mod scan;
pub mod table;

pub use batch::{compress_batch, split_prompts, BatchEntry, BatchSummary};
pub use pipeline::{compress, CompressionResult, RuleCompressor};
pub use rules::{Rule, RuleGroup};
pub use table::{PatternTable, STANDARD_TABLE};
