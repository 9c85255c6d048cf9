//! Pipeline analyzer: one tokenizer followed by a chain of filters.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::config::{AnalyzerConfig, TokenizerKind};
use crate::error::Result;

/// An analyzer that runs a tokenizer and then each filter in order.
///
/// # Examples
///
/// ```
/// use lexis::analysis::analyzer::Analyzer;
/// use lexis::analysis::analyzer::pipeline::PipelineAnalyzer;
///
/// let analyzer = PipelineAnalyzer::word().unwrap();
/// let words = analyzer.words("Тест, test, TEST!").unwrap();
/// assert_eq!(words, vec!["тест", "test", "test"]);
/// ```
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// The default word analyzer: Latin and Cyrillic runs, lowercased.
    pub fn word() -> Result<Self> {
        Self::from_config(&AnalyzerConfig::default())
    }

    /// Build an analyzer from configuration.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let tokenizer: Arc<dyn Tokenizer> = match config.tokenizer {
            TokenizerKind::Alphabetic => {
                Arc::new(AlphabeticTokenizer::with_alphabets(&config.alphabets)?)
            }
            TokenizerKind::UnicodeWord => {
                Arc::new(UnicodeWordTokenizer::with_alphabets(&config.alphabets)?)
            }
        };

        let mut analyzer = PipelineAnalyzer::new(tokenizer);
        if config.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        if config.min_token_len > 1 {
            analyzer = analyzer.add_filter(Arc::new(LengthFilter::new(config.min_token_len)));
        }
        Ok(analyzer)
    }

    /// Append a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters in application order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Default for PipelineAnalyzer {
    fn default() -> Self {
        PipelineAnalyzer::new(Arc::new(AlphabeticTokenizer::default()))
            .add_filter(Arc::new(LowercaseFilter::new()))
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}
