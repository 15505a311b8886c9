use proptest::prelude::*;

use super::{search, SortedFile};
use crate::line::LineLocator;

fn file_of(lines: &[&str], trailing_newline: bool) -> Vec<u8> {
    let mut data = lines.join("\n").into_bytes();
    if trailing_newline && !lines.is_empty() {
        data.push(b'\n');
    }
    data
}

/// Offset of the leftmost line >= query, or the file size.
fn expected_offset(lines: &[String], query: &[u8], size: u64) -> u64 {
    let mut offset = 0u64;
    for line in lines {
        if line.as_bytes() >= query {
            return offset;
        }
        offset += line.len() as u64 + 1;
    }
    size
}

fn search_str(data: &[u8], query: &str, buf_size: usize) -> u64 {
    let mut loc = LineLocator::new(buf_size);
    search(&mut loc, data, data.len() as u64, query.as_bytes()).unwrap()
}

#[test]
fn test_single_record() {
    let data = file_of(&["hello"], true);
    assert_eq!(search_str(&data, "hello", 4), 0);
    assert_eq!(search_str(&data, "a", 4), 0);
    assert_eq!(search_str(&data, "hell", 4), 0);
    assert_eq!(search_str(&data, "z", 4), data.len() as u64);
}

#[test]
fn test_query_before_first_record() {
    let data = file_of(&["bird", "cat", "dog"], true);
    assert_eq!(search_str(&data, "ant", 1024), 0);
    assert_eq!(search_str(&data, "", 1024), 0);
}

#[test]
fn test_query_after_last_record() {
    let data = file_of(&["bird", "cat", "dog"], true);
    assert_eq!(search_str(&data, "zebra", 1024), data.len() as u64);
}

#[test]
fn test_query_after_last_record_without_trailing_newline() {
    let data = file_of(&["bird", "cat", "dog"], false);
    assert_eq!(search_str(&data, "zebra", 1024), data.len() as u64);
    assert_eq!(search_str(&data, "dog", 1024), 9);
}

#[test]
fn test_query_equal_to_record() {
    let data = file_of(&["bird", "cat", "dog"], true);
    assert_eq!(search_str(&data, "bird", 2), 0);
    assert_eq!(search_str(&data, "cat", 2), 5);
    assert_eq!(search_str(&data, "dog", 2), 9);
}

#[test]
fn test_query_between_records() {
    let data = file_of(&["bird", "cat", "dog"], true);
    assert_eq!(search_str(&data, "bz", 3), 5);
    assert_eq!(search_str(&data, "ca", 3), 5);
    assert_eq!(search_str(&data, "cb", 3), 9);
}

#[test]
fn test_empty_file() {
    assert_eq!(search_str(b"", "anything", 16), 0);
}

#[test]
fn test_tab_keys_sort_before_longer_contexts() {
    // '\t' < ' ', so "by\t" sorts before "by the\t".
    let data = file_of(&["by\tfar the", "by the\tway end"], true);
    let mut loc = LineLocator::new(8);
    let file = SortedFile::new(data.as_slice()).unwrap();

    let hit = file.find_prefixed(&mut loc, b"by the\t").unwrap();
    assert_eq!(hit.as_deref(), Some(&b"by the\tway end"[..]));

    let hit = file.find_prefixed(&mut loc, b"by\t").unwrap();
    assert_eq!(hit.as_deref(), Some(&b"by\tfar the"[..]));

    assert!(file.find_prefixed(&mut loc, b"by a\t").unwrap().is_none());
    assert!(file.find_prefixed(&mut loc, b"zz\t").unwrap().is_none());
}

#[test]
fn test_prefix_scan() {
    let data = file_of(&["wa", "was", "way", "we", "went", "xylophone"], true);
    let file = SortedFile::new(data.as_slice()).unwrap();
    let mut loc = LineLocator::new(4);

    let lines = file.prefix_scan(&mut loc, b"wa", 10).unwrap();
    assert_eq!(lines, vec![b"wa".to_vec(), b"was".to_vec(), b"way".to_vec()]);

    let lines = file.prefix_scan(&mut loc, b"w", 4).unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], b"we".to_vec());

    assert!(file.prefix_scan(&mut loc, b"q", 10).unwrap().is_empty());
    assert!(file.prefix_scan(&mut loc, b"w", 0).unwrap().is_empty());
}

#[test]
fn test_prefix_scan_runs_to_eof() {
    let data = file_of(&["alpha", "zeta", "zoo"], false);
    let file = SortedFile::new(data.as_slice()).unwrap();
    let mut loc = LineLocator::new(1024);
    let lines = file.prefix_scan(&mut loc, b"z", 10).unwrap();
    assert_eq!(lines, vec![b"zeta".to_vec(), b"zoo".to_vec()]);
}

proptest! {
    #[test]
    fn prop_search_finds_leftmost_line_ge_query(
        words in prop::collection::btree_set("[a-d ]{0,5}", 0..40),
        query in "[a-d ]{0,6}",
        buf_size in 1usize..9,
        trailing_newline in any::<bool>(),
    ) {
        let lines: Vec<String> = words.into_iter().collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let data = file_of(&refs, trailing_newline);
        let size = data.len() as u64;

        let mut loc = LineLocator::new(buf_size);
        let got = search(&mut loc, data.as_slice(), size, query.as_bytes()).unwrap();
        prop_assert_eq!(got, expected_offset(&lines, query.as_bytes(), size));
    }

    #[test]
    fn prop_prefix_scan_matches_filter(
        words in prop::collection::btree_set("[a-c]{1,4}", 1..40),
        prefix in "[a-c]{1,2}",
    ) {
        let lines: Vec<String> = words.into_iter().collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let data = file_of(&refs, true);
        let file = SortedFile::new(data.as_slice()).unwrap();
        let mut loc = LineLocator::new(3);

        let got = file.prefix_scan(&mut loc, prefix.as_bytes(), usize::MAX).unwrap();
        let want: Vec<Vec<u8>> = lines
            .iter()
            .filter(|l| l.starts_with(prefix.as_str()))
            .map(|l| l.as_bytes().to_vec())
            .collect();
        prop_assert_eq!(got, want);
    }
}
