//! Frequency-ranked autocomplete results.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::trie::iter::Completion;

/// An autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Aggregated frequency of the word in the index.
    pub frequency: u64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(word: S, frequency: u64) -> Self {
        Suggestion {
            word: word.into(),
            frequency,
        }
    }

    /// Convert into a `(word, frequency)` pair.
    pub fn into_pair(self) -> (String, u64) {
        (self.word, self.frequency)
    }
}

impl From<Completion<'_>> for Suggestion {
    fn from(completion: Completion<'_>) -> Self {
        Suggestion::new(completion.word, completion.frequency)
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher frequencies come first, ties in word order
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A suggestion together with its share of the returned set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionShare {
    /// The suggested word.
    pub word: String,
    /// Aggregated frequency of the word in the index.
    pub frequency: u64,
    /// Percentage of the frequency total of the returned suggestions.
    pub percentage: f64,
}

/// Rank completions and keep the best `limit` of them.
pub fn rank<'a, I>(completions: I, limit: usize) -> Vec<Suggestion>
where
    I: IntoIterator<Item = Completion<'a>>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut suggestions: Vec<Suggestion> = completions.into_iter().map(Suggestion::from).collect();
    suggestions.sort_unstable();
    suggestions.truncate(limit);
    suggestions
}

/// Attach percentage shares to an already ranked list.
pub fn with_shares(suggestions: Vec<Suggestion>) -> Vec<SuggestionShare> {
    // Widened so frequencies saturated at u64::MAX still add up
    let total: u128 = suggestions.iter().map(|s| u128::from(s.frequency)).sum();

    suggestions
        .into_iter()
        .map(|s| {
            let percentage = if total > 0 {
                s.frequency as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            SuggestionShare {
                word: s.word,
                frequency: s.frequency,
                percentage,
            }
        })
        .collect()
}
