//! Synthetic datasets for tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::dataset::Dataset;

/// Write a dataset directory. `ngrams` are `(context, continuations)` pairs
/// such as `("Alice was", "not a very")`; shards are derived from the context
/// and every file is sorted byte-wise with a trailing newline.
pub(crate) fn write_dataset(unigrams: &[&str], ngrams: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let ds = Dataset::new(dir.path());

    let mut vocab: Vec<&str> = unigrams.to_vec();
    vocab.sort_unstable();
    vocab.dedup();
    write_lines(ds.unigram_path(), vocab.into_iter().map(str::to_owned).collect());

    let mut shards: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();
    for &(context, values) in ngrams {
        let words: Vec<String> = context.split(' ').map(str::to_owned).collect();
        let path = ds
            .shard_for(&words)
            .unwrap_or_else(|| panic!("no shard for {context:?}"));
        shards
            .entry(path)
            .or_default()
            .push(format!("{context}\t{values}"));
    }
    for (path, lines) in shards {
        write_lines(path, lines);
    }

    dir
}

fn write_lines(path: PathBuf, mut lines: Vec<String>) {
    lines.sort_unstable();
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).unwrap();
}

pub(crate) const SAMPLE_VOCAB: &[&str] = &[
    "Alice", "a", "about", "arguments", "beginning", "by", "calculations", "considerations",
    "had", "in", "not", "said", "still", "the", "thought", "very", "was", "way", "we",
    "went", "were", "what", "when", "which", "who", "will", "with", "would", "wrote",
];

pub(crate) fn sample_dataset() -> TempDir {
    write_dataset(
        SAMPLE_VOCAB,
        &[
            ("Alice", "was said had thought"),
            ("Alice was", "not a beginning very"),
            ("was", "a the not in still"),
            ("by", "the a far"),
            ("by thermodynamic", "considerations calculations arguments"),
            ("thermodynamic", "equilibrium properties considerations"),
            ("the", "world way same"),
            ("was very", "wise"),
        ],
    )
}
