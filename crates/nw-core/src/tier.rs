//! Tier lookups: exact context match in an n-gram shard, prefix match in
//! the unigram file.

use std::io;

use tracing::{debug, trace};

use crate::candidates::TierSource;
use crate::dataset::Dataset;
use crate::error::SuggestError;
use crate::line::LineLocator;
use crate::search::SortedFile;
use crate::source::{open_source, ByteSource};

/// Search key for a context: the space-joined words plus the tab that
/// separates key from value in an n-gram record.
pub fn context_key(words: &[String]) -> String {
    let mut key = words.join(" ");
    key.push('\t');
    key
}

/// Continuations stored for `words`, in file order.
///
/// A missing shard or a key absent from the shard yields an empty list.
pub fn lookup_context(
    dataset: &Dataset,
    words: &[String],
    locator: &mut LineLocator,
    mmap: bool,
) -> Result<Vec<String>, SuggestError> {
    let Some(path) = dataset.shard_for(words) else {
        trace!(?words, "no shard for context");
        return Ok(Vec::new());
    };

    let source = match open_source(&path, mmap) {
        Ok(source) => source,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "shard missing");
            return Ok(Vec::new());
        }
        Err(e) => return Err(SuggestError::io(&path, e)),
    };

    let key = context_key(words);
    let record = find_record(&*source, locator, key.as_bytes())
        .map_err(|e| SuggestError::io(&path, e))?;
    Ok(record
        .map(|line| record_values(&line[key.len()..]))
        .unwrap_or_default())
}

fn find_record(
    source: &dyn ByteSource,
    locator: &mut LineLocator,
    key: &[u8],
) -> io::Result<Option<Vec<u8>>> {
    SortedFile::new(source)?.find_prefixed(locator, key)
}

fn record_values(value: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(value)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Up to `limit` unigrams beginning with `prefix`, in file order.
pub fn lookup_prefix<S: ByteSource + ?Sized>(
    unigram: &SortedFile<'_, S>,
    locator: &mut LineLocator,
    prefix: &str,
    limit: usize,
) -> io::Result<Vec<String>> {
    if prefix.is_empty() {
        return Ok(Vec::new());
    }
    let lines = unigram.prefix_scan(locator, prefix.as_bytes(), limit)?;
    Ok(lines
        .into_iter()
        .map(|l| String::from_utf8_lossy(&l).into_owned())
        .collect())
}

/// Tier lookups against a dataset directory for the duration of one query.
///
/// The unigram source is borrowed from the engine; n-gram shards are opened
/// per lookup. One scratch buffer serves every read.
pub struct FileTiers<'a> {
    dataset: &'a Dataset,
    unigram: &'a dyn ByteSource,
    locator: LineLocator,
    mmap: bool,
}

impl<'a> FileTiers<'a> {
    pub fn new(
        dataset: &'a Dataset,
        unigram: &'a dyn ByteSource,
        read_buf_size: usize,
        mmap: bool,
    ) -> Self {
        Self {
            dataset,
            unigram,
            locator: LineLocator::new(read_buf_size),
            mmap,
        }
    }
}

impl TierSource for FileTiers<'_> {
    fn context(&mut self, words: &[String]) -> Result<Vec<String>, SuggestError> {
        lookup_context(self.dataset, words, &mut self.locator, self.mmap)
    }

    fn prefix(&mut self, prefix: &str, limit: usize) -> Result<Vec<String>, SuggestError> {
        let path = self.dataset.unigram_path();
        let unigram = SortedFile::new(self.unigram).map_err(|e| SuggestError::io(&path, e))?;
        lookup_prefix(&unigram, &mut self.locator, prefix, limit)
            .map_err(|e| SuggestError::io(&path, e))
    }
}
