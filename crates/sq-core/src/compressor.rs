/// A text-to-text compression backend.
pub trait TextCompressor: Send + Sync {
    /// Short backend identifier, e.g. `"rule"`.
    fn name(&self) -> &str;

    /// Compress `text`. Must accept any input, including the empty string.
    fn compress(&self, text: &str) -> String;
}
