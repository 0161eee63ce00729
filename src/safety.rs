//! Resource limit utilities.
//!
//! Template containers come from callers and are inflated fully into memory,
//! so the document entry is read through a size-capped reader to guard
//! against compression bombs.

use std::io::{self, Read};

use crate::{Error, Result};

/// Default cap on the inflated size of the document entry (256 MiB).
pub const DEFAULT_MAX_DOCUMENT_SIZE: u64 = 256 * 1024 * 1024;

/// A reader wrapper that enforces a byte limit.
///
/// Once more than `max_bytes` bytes have been produced, reads fail with an
/// [`io::Error`] wrapping [`Error::ResourceLimitExceeded`].
pub struct LimitedReader<R> {
    inner: R,
    /// Maximum bytes this reader can produce.
    max_bytes: u64,
    /// Bytes read so far.
    bytes_read: u64,
}

impl<R> LimitedReader<R> {
    /// Creates a new limited reader with no limit.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            max_bytes: u64::MAX,
            bytes_read: 0,
        }
    }

    /// Sets the maximum number of bytes.
    pub fn max_bytes(mut self, max: u64) -> Self {
        self.max_bytes = max;
        self
    }

    /// Returns the number of bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Returns the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for LimitedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 {
            return Ok(0);
        }

        self.bytes_read += n as u64;

        if self.bytes_read > self.max_bytes {
            return Err(io::Error::other(Error::ResourceLimitExceeded(format!(
                "Entry size {} exceeds limit {}",
                self.bytes_read, self.max_bytes
            ))));
        }

        Ok(n)
    }
}

impl<R> std::fmt::Debug for LimitedReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LimitedReader")
            .field("max_bytes", &self.max_bytes)
            .field("bytes_read", &self.bytes_read)
            .finish_non_exhaustive()
    }
}

/// Reads `reader` to the end, failing once more than `max_bytes` are produced.
///
/// A limit violation surfaces as [`Error::ResourceLimitExceeded`] rather than
/// as a wrapped I/O error.
pub fn read_to_end_limited<R: Read>(reader: R, max_bytes: u64) -> Result<Vec<u8>> {
    let mut limited = LimitedReader::new(reader).max_bytes(max_bytes);
    let mut buf = Vec::new();
    limited.read_to_end(&mut buf).map_err(unwrap_limit_error)?;
    Ok(buf)
}

fn unwrap_limit_error(err: io::Error) -> Error {
    if !err.get_ref().is_some_and(|inner| inner.is::<Error>()) {
        return Error::Io(err);
    }
    match err.into_inner().map(|inner| inner.downcast::<Error>()) {
        Some(Ok(limit)) => *limit,
        _ => Error::ResourceLimitExceeded("entry size limit".into()),
    }
}
