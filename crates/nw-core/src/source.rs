//! Random-access byte sources backing the sorted record files.
//!
//! Everything above this module sees a data file only through
//! [`ByteSource`]: "read up to N bytes at offset K" plus the total size.

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;

pub trait ByteSource: Send + Sync {
    /// Read up to `buf.len()` bytes starting at `offset`.
    ///
    /// Short reads are allowed. `Ok(0)` means nothing is stored at or after
    /// `offset`.
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize>;

    /// Total size of the source in bytes.
    fn size(&self) -> io::Result<u64>;
}

impl ByteSource for [u8] {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        let Ok(start) = usize::try_from(offset) else {
            return Ok(0);
        };
        if start >= self.len() {
            return Ok(0);
        }
        let n = buf.len().min(self.len() - start);
        buf[..n].copy_from_slice(&self[start..start + n]);
        Ok(n)
    }

    fn size(&self) -> io::Result<u64> {
        Ok(self.len() as u64)
    }
}

impl ByteSource for Vec<u8> {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        self.as_slice().read_at(offset, buf)
    }

    fn size(&self) -> io::Result<u64> {
        Ok(self.len() as u64)
    }
}

impl ByteSource for Mmap {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        self[..].read_at(offset, buf)
    }

    fn size(&self) -> io::Result<u64> {
        Ok(self.len() as u64)
    }
}

impl ByteSource for File {
    #[cfg(unix)]
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        std::os::unix::fs::FileExt::read_at(self, buf, offset)
    }

    #[cfg(windows)]
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        std::os::windows::fs::FileExt::seek_read(self, buf, offset)
    }

    fn size(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }
}

/// Read once at `offset`, retrying reads interrupted by a signal.
pub(crate) fn read_some<S: ByteSource + ?Sized>(
    source: &S,
    offset: u64,
    buf: &mut [u8],
) -> io::Result<usize> {
    loop {
        match source.read_at(offset, buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

/// Fill `buf` from `offset`, stopping early only at the end of the source.
/// Returns the number of bytes read.
pub(crate) fn read_full<S: ByteSource + ?Sized>(
    source: &S,
    offset: u64,
    buf: &mut [u8],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = read_some(source, offset + filled as u64, &mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// Open a data file as a boxed source, memory-mapped when `mmap` is set.
///
/// Only regular files qualify; anything else is `InvalidInput`.
pub fn open_source(path: &Path, mmap: bool) -> io::Result<Box<dyn ByteSource>> {
    let file = File::open(path)?;
    if !file.metadata()?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    if mmap {
        // SAFETY: The file is opened read-only and data files are never
        // modified while an engine is reading them.
        let map = unsafe { Mmap::map(&file)? };
        return Ok(Box::new(map));
    }
    Ok(Box::new(file))
}
