//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexisArgs, OutputFormat};
use crate::error::Result;
use crate::trie::{IndexStats, Suggestion, SuggestionShare};

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Write the result for a person reading a terminal.
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Result structure for suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub prefix: String,
    pub limit: usize,
    pub suggestions: Vec<SuggestionShare>,
}

/// Result structure for a word lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub found: bool,
    pub count: u64,
    pub frequency: Option<u64>,
}

/// Result structure for a prefix count.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResult {
    pub prefix: String,
    pub count: u64,
}

/// Result structure for text indexing.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexingResult {
    pub texts: usize,
    pub distinct_words: usize,
    pub total_words: u64,
    pub duration_ms: u64,
    pub top_words: Vec<(String, u64)>,
}

/// Result structure for a tree rendering.
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeResult {
    pub depth: Option<usize>,
    pub tree: String,
}

/// Result structure for the most frequent words.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopWordsResult {
    pub words: Vec<Suggestion>,
}

impl HumanOutput for SuggestResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Prefix: {:?} (max {} suggestions)", self.prefix, self.limit)?;
        if self.suggestions.is_empty() {
            writeln!(out, "  No suggestions")?;
        }
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            writeln!(
                out,
                "  {}. {:25} [frequency: {:3}, {:5.1}%]",
                i + 1,
                suggestion.word,
                suggestion.frequency,
                suggestion.percentage
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for LookupResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        match self.frequency {
            Some(frequency) if self.found => writeln!(
                out,
                "Word {:?} found (count: {}, frequency: {})",
                self.word, self.count, frequency
            ),
            _ => writeln!(out, "Word {:?} not found", self.word),
        }
    }
}

impl HumanOutput for CountResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Words starting with {:?}: {}", self.prefix, self.count)
    }
}

impl HumanOutput for IndexingResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Indexed {} words ({} distinct) from {} texts in {} ms",
            self.total_words, self.distinct_words, self.texts, self.duration_ms
        )?;
        if !self.top_words.is_empty() {
            writeln!(out, "Most frequent words in the texts:")?;
            for (word, count) in &self.top_words {
                writeln!(out, "  {word:25} - {count:3}")?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for TreeResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.tree)
    }
}

impl HumanOutput for TopWordsResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for suggestion in &self.words {
            writeln!(out, "  {:25} - {:3}", suggestion.word, suggestion.frequency)?;
        }
        Ok(())
    }
}

impl HumanOutput for IndexStats {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Index Statistics:")?;
        writeln!(out, "  Distinct words:  {}", self.words)?;
        writeln!(out, "  Insertions:      {}", self.insertions)?;
        writeln!(out, "  Nodes:           {}", self.nodes)?;
        writeln!(out, "  Total frequency: {}", self.total_frequency)?;
        writeln!(out, "  Longest word:    {}", self.max_depth)
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T>(result: &T, args: &LexisArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, args.output_format, args.pretty)
}

/// Write a result in the given format.
pub fn write_result<T>(out: &mut dyn Write, result: &T, format: OutputFormat, pretty: bool) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
