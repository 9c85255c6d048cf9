//! Command line argument parsing for the Lexis CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lexis - a prefix-indexed word store with ranked autocomplete
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "A prefix-indexed word store with frequency-ranked autocomplete")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Index configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXIS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Frequency file with `word frequency` lines (repeatable)
    #[arg(short = 'w', long = "words", value_name = "FILE", global = true)]
    pub frequency_files: Vec<PathBuf>,

    /// Word list with one word per line (repeatable)
    #[arg(long = "word-list", value_name = "FILE", global = true)]
    pub word_files: Vec<PathBuf>,

    /// Text file to tokenize and index (repeatable)
    #[arg(short = 't', long = "text", value_name = "FILE", global = true)]
    pub text_files: Vec<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            // Normal output is level 1; every -v adds one
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the completions of a prefix
    Suggest(SuggestArgs),

    /// Look up a single word
    Lookup(LookupArgs),

    /// Count the words starting with a prefix
    Count(CountArgs),

    /// Index the given texts and report word counts
    Index(IndexArgs),

    /// Print the tree structure
    Tree(TreeArgs),

    /// Show index statistics
    Stats,

    /// Show the most frequent words
    Top(TopArgs),
}

/// Arguments for suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of suggestions (default: from configuration)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for word lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for prefix counting
#[derive(Parser, Debug, Clone)]
pub struct CountArgs {
    /// Prefix to count (empty counts everything)
    #[arg(value_name = "PREFIX", default_value = "")]
    pub prefix: String,
}

/// Arguments for text indexing
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Number of most frequent text words to report
    #[arg(short = 'n', long, default_value = "10")]
    pub top: usize,
}

/// Arguments for tree rendering
#[derive(Parser, Debug, Clone)]
pub struct TreeArgs {
    /// Maximum depth to render
    #[arg(short, long)]
    pub depth: Option<usize>,
}

/// Arguments for the most frequent words
#[derive(Parser, Debug, Clone)]
pub struct TopArgs {
    /// Number of words to show
    #[arg(short = 'n', long, default_value = "5")]
    pub count: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
