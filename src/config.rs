//! Configuration for the prefix index and its text analysis.
//!
//! Configuration is plain data with sensible defaults and can be loaded from
//! a JSON file. Every field is optional in the file; missing fields take
//! their default values.
//!
//! ```
//! use lexis::config::{IndexConfig, TokenizerKind};
//!
//! let config: IndexConfig = serde_json::from_str(
//!     r#"{ "default_limit": 3, "analyzer": { "tokenizer": "unicode_word" } }"#,
//! ).unwrap();
//!
//! assert_eq!(config.default_limit, 3);
//! assert_eq!(config.analyzer.tokenizer, TokenizerKind::UnicodeWord);
//! assert!(config.analyzer.lowercase);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::alphabetic::Alphabet;
use crate::error::{LexisError, Result};

/// Which tokenizer bulk indexing uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Runs of letters from the configured alphabets
    #[default]
    Alphabetic,
    /// Unicode word boundaries, alphabetic words only
    UnicodeWord,
}

/// Configuration of the text analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Tokenizer used to split text.
    pub tokenizer: TokenizerKind,
    /// Alphabets accepted by the alphabetic tokenizer.
    pub alphabets: Vec<Alphabet>,
    /// Whether tokens are lowercased before indexing.
    pub lowercase: bool,
    /// Minimum token length in characters.
    pub min_token_len: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            tokenizer: TokenizerKind::Alphabetic,
            alphabets: Alphabet::defaults(),
            lowercase: true,
            min_token_len: 1,
        }
    }
}

/// Configuration of a prefix index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Number of suggestions returned when the caller gives no limit.
    pub default_limit: usize,
    /// Text analysis used by bulk indexing.
    pub analyzer: AnalyzerConfig,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            default_limit: 5,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl IndexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: IndexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(LexisError::config("default_limit must be greater than 0"));
        }
        if self.analyzer.alphabets.is_empty() {
            return Err(LexisError::config("analyzer needs at least one alphabet"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = IndexConfig::default();
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.analyzer.tokenizer, TokenizerKind::Alphabetic);
        assert_eq!(
            config.analyzer.alphabets,
            vec![Alphabet::Latin, Alphabet::Cyrillic]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "default_limit": 10, "analyzer": {{ "alphabets": ["cyrillic"], "min_token_len": 2 }} }}"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = IndexConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.analyzer.alphabets, vec![Alphabet::Cyrillic]);
        assert_eq!(config.analyzer.min_token_len, 2);
        assert!(config.analyzer.lowercase);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_limit": 0 }}"#).unwrap();
        file.flush().unwrap();

        match IndexConfig::from_file(file.path()) {
            Err(LexisError::Config(_)) => {}
            other => panic!("Expected config error, got {other:?}"),
        }

        let config = IndexConfig {
            analyzer: AnalyzerConfig {
                alphabets: Vec::new(),
                ..AnalyzerConfig::default()
            },
            ..IndexConfig::default()
        };
        assert!(config.validate().is_err());

        let config = IndexConfig {
            analyzer: AnalyzerConfig {
                tokenizer: TokenizerKind::UnicodeWord,
                alphabets: Vec::new(),
                ..AnalyzerConfig::default()
            },
            ..IndexConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
