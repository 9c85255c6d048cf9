//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`alphabetic::AlphabeticTokenizer`] - Runs of letters from configured alphabets
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::tokenizer::Tokenizer;
//! use lexis::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
//!
//! let tokenizer = AlphabeticTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, мир!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "мир");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by the
/// parallel bulk indexer.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphabetic;
pub mod unicode_word;
