//! Length filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that stops tokens shorter than a minimum number of characters.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_len: usize,
}

impl LengthFilter {
    /// Create a filter that keeps tokens with at least `min_len` characters.
    pub fn new(min_len: usize) -> Self {
        LengthFilter { min_len }
    }

    /// The minimum token length in characters.
    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_len = self.min_len;
        let filtered_tokens = tokens
            .map(|token| {
                if !token.is_stopped() && token.char_len() < min_len {
                    token.stop()
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
