//! Line boundary recovery over a [`ByteSource`].
//!
//! Records are variable-length and delimited by `\n`, so an arbitrary byte
//! offset has to be normalized to the start of the line containing it
//! before anything can be compared. A delimiter byte belongs to the line it
//! terminates.

use std::io;

use memchr::{memchr, memrchr};

use crate::source::{read_full, read_some, ByteSource};

pub const DELIMITER: u8 = b'\n';

/// Owns the scratch buffer shared by every read issued for one query.
pub struct LineLocator {
    scratch: Vec<u8>,
}

impl LineLocator {
    /// `buf_size` is clamped to at least one byte.
    pub fn new(buf_size: usize) -> Self {
        Self {
            scratch: vec![0; buf_size.max(1)],
        }
    }

    pub fn buf_size(&self) -> usize {
        self.scratch.len()
    }

    /// Offset of the first byte of the line containing `offset`.
    ///
    /// Scans backward from `offset - 1` and returns the position right after
    /// the nearest delimiter, or 0 when the start of the source is reached.
    /// Idempotent: `find_line_start(find_line_start(x)) == find_line_start(x)`.
    pub fn find_line_start<S: ByteSource + ?Sized>(
        &mut self,
        source: &S,
        offset: u64,
    ) -> io::Result<u64> {
        let mut end = offset;
        while end > 0 {
            let chunk = (self.scratch.len() as u64).min(end);
            let start = end - chunk;
            let buf = &mut self.scratch[..chunk as usize];
            let n = read_full(source, start, buf)?;
            if let Some(i) = memrchr(DELIMITER, &buf[..n]) {
                return Ok(start + i as u64 + 1);
            }
            end = start;
        }
        Ok(0)
    }

    /// Bytes of the line starting at `offset`, without the delimiter.
    ///
    /// Never reads at or beyond `size`. Returns `None` when `offset >= size`;
    /// that is the EOF condition, not a failure. A line running into `size`
    /// (or into a source shorter than declared) ends there.
    pub fn read_line<S: ByteSource + ?Sized>(
        &mut self,
        source: &S,
        offset: u64,
        size: u64,
    ) -> io::Result<Option<Vec<u8>>> {
        if offset >= size {
            return Ok(None);
        }

        let mut line = Vec::new();
        let mut pos = offset;
        while pos < size {
            let want = (self.scratch.len() as u64).min(size - pos) as usize;
            let n = read_some(source, pos, &mut self.scratch[..want])?;
            if n == 0 {
                break;
            }
            let chunk = &self.scratch[..n];
            if let Some(i) = memchr(DELIMITER, chunk) {
                line.extend_from_slice(&chunk[..i]);
                return Ok(Some(line));
            }
            line.extend_from_slice(chunk);
            pos += n as u64;
        }
        Ok(Some(line))
    }
}

impl Default for LineLocator {
    fn default() -> Self {
        Self::new(crate::settings::settings().io.read_buf_size)
    }
}
