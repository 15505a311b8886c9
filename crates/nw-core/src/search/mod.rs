//! Binary search over a sorted, newline-delimited record file.
//!
//! Records have no fixed width, so the search runs over byte offsets and
//! every probe is normalized to a line start before comparing. Comparison
//! is byte-wise on the undecoded record.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::io;

use tracing::trace;

use crate::line::LineLocator;
use crate::source::ByteSource;

/// Offset of the leftmost line that is `>= query`.
///
/// Returns `size` (EOF) when every line is smaller than `query`. A probe
/// that lands at EOF compares greater than any query.
pub fn search<S: ByteSource + ?Sized>(
    locator: &mut LineLocator,
    source: &S,
    size: u64,
    query: &[u8],
) -> io::Result<u64> {
    let mut left = 0u64;
    let mut right = size;

    while left <= right {
        let mid = left + (right - left) / 2;
        let head = locator.find_line_start(source, mid)?;
        let ordering = match locator.read_line(source, head, size)? {
            Some(line) => query.cmp(line.as_slice()),
            None => Ordering::Less,
        };

        match ordering {
            Ordering::Less => match mid.checked_sub(1) {
                Some(r) => right = r,
                None => break,
            },
            Ordering::Greater => left = mid + 1,
            Ordering::Equal => return Ok(head),
        }
    }

    if left >= size {
        return Ok(size);
    }
    locator.find_line_start(source, left)
}

/// A sorted record file: a byte source plus the size captured when it
/// was opened.
pub struct SortedFile<'a, S: ByteSource + ?Sized> {
    source: &'a S,
    size: u64,
}

impl<'a, S: ByteSource + ?Sized> SortedFile<'a, S> {
    pub fn new(source: &'a S) -> io::Result<Self> {
        let size = source.size()?;
        Ok(Self { source, size })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn search(&self, locator: &mut LineLocator, query: &[u8]) -> io::Result<u64> {
        search(locator, self.source, self.size, query)
    }

    pub fn find_line_start(&self, locator: &mut LineLocator, offset: u64) -> io::Result<u64> {
        locator.find_line_start(self.source, offset)
    }

    pub fn line_at(&self, locator: &mut LineLocator, offset: u64) -> io::Result<Option<Vec<u8>>> {
        locator.read_line(self.source, offset, self.size)
    }

    /// The line at the insertion point of `key`, if it starts with `key`.
    pub fn find_prefixed(
        &self,
        locator: &mut LineLocator,
        key: &[u8],
    ) -> io::Result<Option<Vec<u8>>> {
        let offset = self.search(locator, key)?;
        let line = self.line_at(locator, offset)?;
        Ok(line.filter(|l| l.starts_with(key)))
    }

    /// Up to `limit` consecutive lines starting with `prefix`, in file order.
    pub fn prefix_scan(
        &self,
        locator: &mut LineLocator,
        prefix: &[u8],
        limit: usize,
    ) -> io::Result<Vec<Vec<u8>>> {
        let mut lines = Vec::new();
        if limit == 0 {
            return Ok(lines);
        }

        let mut offset = self.search(locator, prefix)?;
        while lines.len() < limit {
            let Some(line) = self.line_at(locator, offset)? else {
                break;
            };
            if !line.starts_with(prefix) {
                break;
            }
            offset += line.len() as u64 + 1;
            lines.push(line);
        }
        trace!(matched = lines.len(), "prefix scan");
        Ok(lines)
    }
}
