//! Text analysis for bulk indexing.
//!
//! Raw text is turned into index words by a small pipeline: a tokenizer
//! extracts alphabetic runs, then token filters normalize them. The
//! [`analyzer::WordAnalyzer`] ties the two together and is what the prefix
//! index uses when it ingests free text.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
