use std::fs;
use std::path::PathBuf;

use tracing::{debug, debug_span, info};

use crate::candidates::{aggregate, TierMode};
use crate::dataset::Dataset;
use crate::error::SuggestError;
use crate::query::Query;
use crate::settings::settings;
use crate::source::{open_source, ByteSource};
use crate::tier::FileTiers;

/// Engine configuration. [`SuggesterConfig::new`] fills everything but the
/// data directory from [`settings()`].
#[derive(Debug, Clone)]
pub struct SuggesterConfig {
    pub data_dir: PathBuf,
    /// Upper bound on returned candidates. Must be at least 1.
    pub max_candidates: usize,
    /// Scratch buffer size for line reads. Must be at least 1.
    pub read_buf_size: usize,
    pub tier_mode: TierMode,
    /// Memory-map data files instead of positional reads.
    pub mmap: bool,
}

impl SuggesterConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let s = settings();
        Self {
            data_dir: data_dir.into(),
            max_candidates: s.candidates.max_results,
            read_buf_size: s.io.read_buf_size,
            tier_mode: s.candidates.tier_mode(),
            mmap: s.io.mmap,
        }
    }
}

/// Suggests the next English words for a partial sentence from a sorted
/// n-gram dataset on disk.
///
/// Queries are independent: every call re-reads the files it needs. The
/// unigram file stays open for the engine's lifetime; `suggest` takes
/// `&self`, so one engine can serve concurrent callers.
pub struct Suggester {
    config: SuggesterConfig,
    dataset: Dataset,
    unigram: Box<dyn ByteSource>,
}

impl Suggester {
    /// Validate `config` and open the dataset's unigram file.
    pub fn open(config: SuggesterConfig) -> Result<Self, SuggestError> {
        if config.max_candidates < 1 {
            return Err(SuggestError::InvalidCandidateLen(config.max_candidates));
        }
        if config.read_buf_size < 1 {
            return Err(SuggestError::InvalidBufSize);
        }

        let meta = fs::metadata(&config.data_dir).map_err(|source| SuggestError::DataDirMissing {
            path: config.data_dir.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(SuggestError::NotADirectory(config.data_dir.clone()));
        }

        let dataset = Dataset::new(&config.data_dir);
        let path = dataset.unigram_path();
        let unigram = open_source(&path, config.mmap)
            .map_err(|source| SuggestError::OpenUnigram { path, source })?;

        info!(
            data_dir = %config.data_dir.display(),
            max_candidates = config.max_candidates,
            mode = ?config.tier_mode,
            mmap = config.mmap,
            "suggester opened"
        );
        Ok(Self {
            config,
            dataset,
            unigram,
        })
    }

    pub fn config(&self) -> &SuggesterConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Ranked candidates following `input`.
    ///
    /// If `input` ends with a space the candidates are whole next words;
    /// otherwise they all begin with the input's last (partial) word.
    pub fn suggest(&self, input: &str) -> Result<Vec<String>, SuggestError> {
        let _span = debug_span!("suggest", input).entered();
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let query = Query::parse(input);
        let mut tiers = FileTiers::new(
            &self.dataset,
            &*self.unigram,
            self.config.read_buf_size,
            self.config.mmap,
        );
        let candidates = aggregate(
            &mut tiers,
            &query,
            self.config.tier_mode,
            self.config.max_candidates,
        )?;
        debug!(count = candidates.len());
        Ok(candidates)
    }
}
