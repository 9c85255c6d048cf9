//! Command implementations for the Lexis CLI.

use std::fs;
use std::time::Instant;

use ahash::AHashMap;
use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::IndexConfig;
use crate::error::{LexisError, Result};
use crate::trie::{PrefixIndex, Suggestion};

/// An index built from the inputs named on the command line.
pub struct LoadedIndex {
    pub index: PrefixIndex,
    /// Word counts found in the text files.
    pub text_counts: AHashMap<String, u64>,
    pub texts: usize,
    pub duration_ms: u64,
}

/// Execute a CLI command.
pub fn execute_command(args: LexisArgs) -> Result<()> {
    let loaded = build_index(&args)?;

    match &args.command {
        Command::Suggest(suggest_args) => suggest_prefix(suggest_args, &loaded.index, &args),
        Command::Lookup(lookup_args) => lookup_word(lookup_args, &loaded.index, &args),
        Command::Count(count_args) => count_prefix(count_args, &loaded.index, &args),
        Command::Index(index_args) => report_indexing(index_args, &loaded, &args),
        Command::Tree(tree_args) => show_tree(tree_args, &loaded.index, &args),
        Command::Stats => output_result(&loaded.index.stats(), &args),
        Command::Top(top_args) => show_top(top_args, &loaded.index, &args),
    }
}

/// Build an index from the configuration, word lists and texts in `args`.
pub fn build_index(args: &LexisArgs) -> Result<LoadedIndex> {
    let config = match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            IndexConfig::from_file(path)?
        }
        None => IndexConfig::default(),
    };
    let mut index = PrefixIndex::with_config(config)?;

    let start_time = Instant::now();

    for path in &args.frequency_files {
        let loaded = index.load_from_frequency_file(path)?;
        info!("loaded {loaded} entries from {}", path.display());
    }

    for path in &args.word_files {
        let loaded = index.load_from_word_file(path)?;
        info!("loaded {loaded} words from {}", path.display());
    }

    let texts = args
        .text_files
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read text file {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let text_counts = if texts.is_empty() {
        AHashMap::new()
    } else {
        index.index_texts(&texts)?
    };

    Ok(LoadedIndex {
        index,
        text_counts,
        texts: texts.len(),
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// Reject a zero result count given on the command line.
fn check_limit(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(LexisError::invalid_argument(format!(
            "{name} must be at least 1"
        )));
    }
    Ok(value)
}

fn suggest_prefix(args: &SuggestArgs, index: &PrefixIndex, cli_args: &LexisArgs) -> Result<()> {
    let limit = match args.limit {
        Some(limit) => check_limit("--limit", limit)?,
        None => index.config().default_limit,
    };
    let result = SuggestResult {
        prefix: args.prefix.clone(),
        limit,
        suggestions: index.suggest_with_shares(&args.prefix, limit),
    };
    output_result(&result, cli_args)
}

fn lookup_word(args: &LookupArgs, index: &PrefixIndex, cli_args: &LexisArgs) -> Result<()> {
    let result = LookupResult {
        word: args.word.clone(),
        found: index.lookup_exact(&args.word),
        count: index.count_equal(&args.word),
        frequency: index.frequency(&args.word),
    };
    output_result(&result, cli_args)
}

fn count_prefix(args: &CountArgs, index: &PrefixIndex, cli_args: &LexisArgs) -> Result<()> {
    let result = CountResult {
        prefix: args.prefix.clone(),
        count: index.count_prefix(&args.prefix),
    };
    output_result(&result, cli_args)
}

fn report_indexing(args: &IndexArgs, loaded: &LoadedIndex, cli_args: &LexisArgs) -> Result<()> {
    let mut ranked: Vec<Suggestion> = loaded
        .text_counts
        .iter()
        .map(|(word, count)| Suggestion::new(word.as_str(), *count))
        .collect();
    ranked.sort_unstable();
    ranked.truncate(args.top);

    let result = IndexingResult {
        texts: loaded.texts,
        distinct_words: loaded.text_counts.len(),
        total_words: loaded.text_counts.values().sum(),
        duration_ms: loaded.duration_ms,
        top_words: ranked.into_iter().map(|s| s.into_pair()).collect(),
    };
    output_result(&result, cli_args)
}

fn show_tree(args: &TreeArgs, index: &PrefixIndex, cli_args: &LexisArgs) -> Result<()> {
    let result = TreeResult {
        depth: args.depth,
        tree: index.render_tree(args.depth),
    };
    output_result(&result, cli_args)
}

fn show_top(args: &TopArgs, index: &PrefixIndex, cli_args: &LexisArgs) -> Result<()> {
    let count = check_limit("--count", args.count)?;
    let result = TopWordsResult {
        words: index.top_words(count),
    };
    output_result(&result, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_index_from_inputs() {
        let mut words = NamedTempFile::new().unwrap();
        writeln!(words, "тест 200").unwrap();
        writeln!(words, "текст 95").unwrap();
        words.flush().unwrap();

        let mut text = NamedTempFile::new().unwrap();
        writeln!(text, "Тест и ещё тест. Test!").unwrap();
        text.flush().unwrap();

        let args = LexisArgs::try_parse_from([
            "lexis",
            "--words",
            words.path().to_str().unwrap(),
            "--text",
            text.path().to_str().unwrap(),
            "stats",
        ])
        .unwrap();

        let loaded = build_index(&args).unwrap();
        assert_eq!(loaded.texts, 1);
        assert_eq!(loaded.text_counts.get("тест"), Some(&2));
        assert_eq!(loaded.index.frequency("тест"), Some(202));
        assert_eq!(loaded.index.frequency("test"), Some(1));
        assert_eq!(loaded.index.frequency("текст"), Some(95));
    }

    #[test]
    fn test_build_index_missing_file() {
        let args = LexisArgs::try_parse_from([
            "lexis",
            "--word-list",
            "/nonexistent/lexis/words.txt",
            "stats",
        ])
        .unwrap();

        assert!(build_index(&args).is_err());
    }

    #[test]
    fn test_missing_text_file_names_path() {
        let args = LexisArgs::try_parse_from([
            "lexis",
            "--text",
            "/nonexistent/lexis/corpus.txt",
            "stats",
        ])
        .unwrap();

        let error = build_index(&args).err().unwrap();
        assert!(matches!(error, LexisError::Anyhow(_)));
        assert!(error.to_string().contains("/nonexistent/lexis/corpus.txt"));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let args = LexisArgs::try_parse_from(["lexis", "suggest", "те", "--limit", "0"]).unwrap();
        let error = execute_command(args).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Error: Invalid argument: --limit must be at least 1"
        );

        let args = LexisArgs::try_parse_from(["lexis", "top", "-n", "0"]).unwrap();
        assert!(matches!(
            execute_command(args),
            Err(LexisError::Other(_))
        ));
    }
}
