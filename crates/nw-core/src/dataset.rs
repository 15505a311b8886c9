//! File layout of an n-gram dataset directory.
//!
//! ```text
//! 1gram.txt          sorted vocabulary, one word per line
//! {n}gram-{c}.txt    n in 2..=5, c in a..=z: "w1 .. wn-1\tc1 c2 .. ck"
//! ```
//!
//! N-gram shards are keyed by the lower-cased initial of the first context
//! word. The naming is fixed by the published dataset.

use std::path::{Path, PathBuf};

use crate::query::MAX_CONTEXT_WORDS;

pub const UNIGRAM_FILE: &str = "1gram.txt";

/// Largest n with an n-gram tier.
pub const MAX_TIER: usize = MAX_CONTEXT_WORDS + 1;

#[derive(Debug, Clone)]
pub struct Dataset {
    root: PathBuf,
}

impl Dataset {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn unigram_path(&self) -> PathBuf {
        self.root.join(UNIGRAM_FILE)
    }

    pub fn ngram_path(&self, n: usize, initial: char) -> PathBuf {
        self.root.join(format!("{n}gram-{initial}.txt"))
    }

    /// Shard holding the `words.len() + 1`-grams that begin with `words`.
    ///
    /// `None` when no shard can exist: empty or over-long context, or a first
    /// word whose initial is not a latin letter.
    pub fn shard_for(&self, words: &[String]) -> Option<PathBuf> {
        if words.is_empty() || words.len() >= MAX_TIER {
            return None;
        }
        let initial = shard_initial(&words[0])?;
        Some(self.ngram_path(words.len() + 1, initial))
    }
}

/// Lower-cased initial of `word` if it is in `a..=z`.
pub fn shard_initial(word: &str) -> Option<char> {
    let first = word.chars().next()?;
    let mut lower = first.to_lowercase();
    let c = lower.next()?;
    if lower.next().is_some() || !c.is_ascii_lowercase() {
        return None;
    }
    Some(c)
}
