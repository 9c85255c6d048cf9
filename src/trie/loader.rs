//! Loading word lists into a prefix index.
//!
//! Two plain-text formats are understood:
//!
//! - word files: one word per line, each line counts as one insertion;
//! - frequency files: `word frequency` per line. The frequency is the last
//!   whitespace-separated field, so entries may contain spaces
//!   (`база данных 65`).
//!
//! Blank lines and lines starting with `#` are skipped in both formats.
//! Malformed frequency lines are skipped with a warning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::{LexisError, Result};
use crate::trie::index::PrefixIndex;

/// Split a frequency line into its entry and frequency.
pub fn parse_frequency_line(line: &str) -> Result<(&str, u64)> {
    let line = line.trim();
    let (word, frequency) = line
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| LexisError::parse(format!("missing frequency in line {line:?}")))?;

    let word = word.trim_end();
    let frequency = frequency
        .parse::<u64>()
        .map_err(|e| LexisError::parse(format!("invalid frequency {frequency:?}: {e}")))?;

    if word.is_empty() {
        return Err(LexisError::parse(format!("missing word in line {line:?}")));
    }
    Ok((word, frequency))
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

impl PrefixIndex {
    /// Insert every `word frequency` line of a reader. Returns the number of
    /// entries inserted.
    pub fn load_frequencies<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut loaded = 0;
        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if is_skipped(line) {
                continue;
            }

            match parse_frequency_line(line) {
                Ok((word, frequency)) => {
                    self.insert_with_weight(word, frequency);
                    loaded += 1;
                }
                Err(e) => warn!("skipping line {}: {e}", line_num + 1),
            }
        }
        Ok(loaded)
    }

    /// Insert every word of a reader, one word per line. Returns the number
    /// of words inserted.
    pub fn load_words<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut loaded = 0;
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if is_skipped(word) {
                continue;
            }
            self.insert(word);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Load a frequency file.
    pub fn load_from_frequency_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let file = File::open(path)?;
        self.load_frequencies(BufReader::new(file))
    }

    /// Load a word file.
    pub fn load_from_word_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let file = File::open(path)?;
        self.load_words(BufReader::new(file))
    }
}
