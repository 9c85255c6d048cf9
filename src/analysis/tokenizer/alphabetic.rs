//! Alphabet-aware tokenizer.
//!
//! Extracts maximal runs of letters that belong to a configured set of
//! alphabets. Everything else (digits, punctuation, whitespace, letters of
//! other scripts) separates tokens.
//!
//! Runs are not required to sit on word boundaries. Letters glued to digits
//! or underscores still form tokens, so `abc123` yields `abc` and
//! `snake_case` yields `snake` and `case`. Accented Latin letters belong to
//! the Latin alphabet, so `héllo` is a single token.

use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{LexisError, Result};

/// A set of letters a token may be built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// Basic Latin letters plus the Latin-1 and Latin Extended-A/B letters
    Latin,
    /// The Cyrillic block (U+0400..U+04FF), including `ё` and `Ё`
    Cyrillic,
    /// Every character with the Unicode `Alphabetic` property
    Any,
}

impl Alphabet {
    /// The default alphabets: Latin and Cyrillic.
    pub fn defaults() -> Vec<Alphabet> {
        vec![Alphabet::Latin, Alphabet::Cyrillic]
    }

    /// Character ranges of this alphabet as regex class items.
    fn class_items(&self) -> &'static str {
        match self {
            Alphabet::Latin => "a-zA-ZÀ-ÖØ-öø-ɏ",
            Alphabet::Cyrillic => "Ѐ-ӿ",
            Alphabet::Any => r"\p{Alphabetic}",
        }
    }

    /// Whether `c` belongs to this alphabet.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Alphabet::Latin => {
                c.is_ascii_alphabetic()
                    || matches!(c, 'À'..='Ö' | 'Ø'..='ö' | 'ø'..='ɏ')
            }
            Alphabet::Cyrillic => matches!(c, 'Ѐ'..='ӿ'),
            Alphabet::Any => c.is_alphabetic(),
        }
    }
}

/// A tokenizer that extracts runs of letters from the configured alphabets.
///
/// This is the default tokenizer used for bulk indexing.
#[derive(Clone, Debug)]
pub struct AlphabeticTokenizer {
    pattern: Arc<Regex>,
    alphabets: Vec<Alphabet>,
}

impl AlphabeticTokenizer {
    /// Create a tokenizer over Latin and Cyrillic letters.
    pub fn new() -> Result<Self> {
        Self::with_alphabets(&Alphabet::defaults())
    }

    /// Create a tokenizer over the given alphabets.
    pub fn with_alphabets(alphabets: &[Alphabet]) -> Result<Self> {
        if alphabets.is_empty() {
            return Err(LexisError::analysis(
                "Alphabetic tokenizer needs at least one alphabet",
            ));
        }

        let mut alphabets = alphabets.to_vec();
        alphabets.dedup();

        let class: String = alphabets.iter().map(Alphabet::class_items).collect();
        let regex = Regex::new(&format!("[{class}]+"))
            .map_err(|e| LexisError::analysis(format!("Invalid alphabet pattern: {e}")))?;

        Ok(AlphabeticTokenizer {
            pattern: Arc::new(regex),
            alphabets,
        })
    }

    /// The alphabets this tokenizer accepts.
    pub fn alphabets(&self) -> &[Alphabet] {
        &self.alphabets
    }
}

impl Default for AlphabeticTokenizer {
    fn default() -> Self {
        Self::new().expect("Default alphabet pattern should be valid")
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &AlphabeticTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_latin_and_cyrillic() {
        let text = "Программирование на Python, 2024!";
        let tokenizer = AlphabeticTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "Программирование");
        assert_eq!(tokens[1].text, "на");
        assert_eq!(tokens[2].text, "Python");
        assert_eq!(tokens[2].position, 2);
        assert_eq!(&text[tokens[2].start_offset..tokens[2].end_offset], "Python");
    }

    #[test]
    fn test_yo_is_a_letter() {
        let tokenizer = AlphabeticTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "Ёлка и ёж"), vec!["Ёлка", "и", "ёж"]);
    }

    #[test]
    fn test_digits_and_underscores_split() {
        let tokenizer = AlphabeticTokenizer::new().unwrap();
        assert_eq!(
            texts(&tokenizer, "abc123def snake_case"),
            vec!["abc", "def", "snake", "case"]
        );
    }

    #[test]
    fn test_accented_latin_is_one_token() {
        let tokenizer = AlphabeticTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "héllo, naïve"), vec!["héllo", "naïve"]);
    }

    #[test]
    fn test_restricted_alphabet() {
        let tokenizer = AlphabeticTokenizer::with_alphabets(&[Alphabet::Latin]).unwrap();
        assert_eq!(texts(&tokenizer, "hello мир"), vec!["hello"]);

        let tokenizer = AlphabeticTokenizer::with_alphabets(&[Alphabet::Cyrillic]).unwrap();
        assert_eq!(texts(&tokenizer, "hello мир"), vec!["мир"]);
    }

    #[test]
    fn test_any_alphabet() {
        let tokenizer = AlphabeticTokenizer::with_alphabets(&[Alphabet::Any]).unwrap();
        assert_eq!(texts(&tokenizer, "γειά σου"), vec!["γειά", "σου"]);
    }

    #[test]
    fn test_empty_alphabets_rejected() {
        assert!(AlphabeticTokenizer::with_alphabets(&[]).is_err());
    }

    #[test]
    fn test_contains() {
        assert!(Alphabet::Latin.contains('é'));
        assert!(!Alphabet::Latin.contains('ж'));
        assert!(Alphabet::Cyrillic.contains('ё'));
        assert!(Alphabet::Any.contains('ж'));
        assert!(!Alphabet::Any.contains('7'));
    }
}
