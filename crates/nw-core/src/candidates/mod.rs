//! Merging candidates across n-gram tiers.
//!
//! Tier priority is the ranking: longer contexts first, the unigram prefix
//! fallback last. Within a tier, file order is kept (records are
//! pre-ranked by the dataset).


use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::error::SuggestError;
use crate::query::Query;

/// Where tier candidates come from. Implemented over dataset files by
/// [`FileTiers`](crate::tier::FileTiers).
pub trait TierSource {
    /// Continuations recorded for exactly `words`, in ranked order.
    fn context(&mut self, words: &[String]) -> Result<Vec<String>, SuggestError>;

    /// Up to `limit` vocabulary words starting with `prefix`.
    fn prefix(&mut self, prefix: &str, limit: usize) -> Result<Vec<String>, SuggestError>;
}

/// How many context tiers contribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TierMode {
    /// Query every context suffix and the unigram fallback, merge in
    /// priority order.
    #[default]
    MergeAll,
    /// Stop at the first context tier with a non-empty (prefix-filtered)
    /// contribution; the unigram fallback runs only if none matched.
    FirstMatch,
}

/// Keep entries that start with `prefix` (byte-wise). Empty prefix keeps all.
pub fn filter_prefix(candidates: Vec<String>, prefix: &str) -> Vec<String> {
    if prefix.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|w| w.starts_with(prefix))
        .collect()
}

/// Drop repeated words, keeping the first occurrence and the order.
pub fn dedup_first_seen(mut candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates.retain(|w| seen.insert(w.clone()));
    candidates
}

fn finish(merged: Vec<String>, limit: usize) -> Vec<String> {
    let mut out = dedup_first_seen(merged);
    out.truncate(limit);
    out
}

/// Ranked, deduplicated, prefix-filtered candidates for `query`, at most
/// `limit` long.
pub fn aggregate<T: TierSource + ?Sized>(
    tiers: &mut T,
    query: &Query,
    mode: TierMode,
    limit: usize,
) -> Result<Vec<String>, SuggestError> {
    let _span = debug_span!(
        "aggregate",
        context_len = query.context.len(),
        prefix = query.prefix.as_str(),
        ?mode
    )
    .entered();

    let mut merged = Vec::new();
    for words in query.context_suffixes() {
        let found = filter_prefix(tiers.context(words)?, &query.prefix);
        debug!(n = words.len() + 1, count = found.len(), "context tier");
        let matched = !found.is_empty();
        merged.extend(found);
        if matched && mode == TierMode::FirstMatch {
            return Ok(finish(merged, limit));
        }
    }

    if !query.prefix.is_empty() {
        let found = filter_prefix(tiers.prefix(&query.prefix, limit)?, &query.prefix);
        debug!(count = found.len(), "unigram tier");
        merged.extend(found);
    }

    Ok(finish(merged, limit))
}
