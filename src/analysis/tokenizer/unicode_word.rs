//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and keeps only
//! segments made entirely of letters from the configured alphabets. Numbers,
//! punctuation and mixed segments such as `don't` or `abc123` are dropped, so
//! the index only ever sees letter sequences.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::tokenizer::Tokenizer;
//! use lexis::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world! 42").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::alphabetic::Alphabet;
use crate::error::{LexisError, Result};

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug)]
pub struct UnicodeWordTokenizer {
    alphabets: Vec<Alphabet>,
}

impl UnicodeWordTokenizer {
    /// Create a tokenizer accepting words in any alphabet.
    pub fn new() -> Self {
        UnicodeWordTokenizer {
            alphabets: vec![Alphabet::Any],
        }
    }

    /// Create a tokenizer accepting only words spelled in the given alphabets.
    pub fn with_alphabets(alphabets: &[Alphabet]) -> Result<Self> {
        if alphabets.is_empty() {
            return Err(LexisError::analysis(
                "Unicode word tokenizer needs at least one alphabet",
            ));
        }

        let mut alphabets = alphabets.to_vec();
        alphabets.dedup();
        Ok(UnicodeWordTokenizer { alphabets })
    }

    /// The alphabets this tokenizer accepts.
    pub fn alphabets(&self) -> &[Alphabet] {
        &self.alphabets
    }

    fn accepts(&self, word: &str) -> bool {
        word.chars()
            .all(|c| self.alphabets.iter().any(|alphabet| alphabet.contains(c)))
    }
}

impl Default for UnicodeWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_word_indices()
            .filter(|(_, word)| self.accepts(word))
            .enumerate()
            .map(|(position, (start_offset, word))| {
                Token::with_offsets(word, position, start_offset, start_offset + word.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
