//! Analyzers turn raw text into the words that get indexed.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that run the full tokenize-and-filter pipeline.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a token stream.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and keep only the text of tokens that were not stopped.
    fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(text)?
            .filter(|token| !token.is_stopped() && !token.is_empty())
            .map(|token| token.text)
            .collect())
    }
}

pub mod pipeline;
