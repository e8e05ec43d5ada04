//! Token counting seam. Real tokenizers live outside this workspace and plug
//! in through [`TokenCounter`].

/// Counts tokens of `text` as seen by `model`.
pub trait TokenCounter: Send + Sync {
    fn count_tokens(&self, text: &str, model: &str) -> usize;
}

impl<F> TokenCounter for F
where
    F: Fn(&str, &str) -> usize + Send + Sync,
{
    fn count_tokens(&self, text: &str, model: &str) -> usize {
        self(text, model)
    }
}

/// Character-based fallback estimate, used when no tokenizer is available.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicCounter {
    pub chars_per_token: usize,
}

impl HeuristicCounter {
    pub fn new(chars_per_token: usize) -> Self {
        Self { chars_per_token: chars_per_token.max(1) }
    }
}

impl Default for HeuristicCounter {
    fn default() -> Self {
        Self::new(4)
    }
}

impl TokenCounter for HeuristicCounter {
    fn count_tokens(&self, text: &str, _model: &str) -> usize {
        text.chars().count().div_ceil(self.chars_per_token.max(1))
    }
}
