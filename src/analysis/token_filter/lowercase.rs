//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::token_filter::Filter;
//! use lexis::analysis::token_filter::lowercase::LowercaseFilter;
//! use lexis::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("МИР", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "мир");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// ASCII-only tokens take the cheap byte-wise path; everything else goes
/// through Unicode-aware lowercasing. Stopped tokens are passed through
/// untouched.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else if token.text.is_ascii() {
                    token.with_text(token.text.to_ascii_lowercase())
                } else {
                    token.with_text(token.text.to_lowercase())
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("ПРОГРАММА", 1),
            Token::new("Test", 2).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "программа");
        assert_eq!(result[2].text, "Test"); // Stopped tokens are not processed
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
