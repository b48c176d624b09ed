use log::debug;
use log::trace;
use sha1::{Digest, Sha1};

use std::ffi::OsStr;
use std::io;
use std::io::Read;
use std::io::Write;

use crate::digest::Sha1Digest;
use crate::error::HashError;

/// SHA-1 digest of raw bytes.
pub fn sha1_hash(data: &[u8]) -> Sha1Digest {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-1 of the UTF-8 bytes of `text`, as 40 lowercase hex characters.
///
/// Example: `sha1_hex("abc") == "a9993e364706816aba3e25717850c26c9cd0d89d"`
pub fn sha1_hex(text: &str) -> String {
    sha1_hash(text.as_bytes()).to_hex()
}

/// Same as [`sha1_hex`] for bytes that are expected to hold UTF-8 text.
///
/// Malformed input is rejected with [`HashError::Encoding`]; nothing is
/// replaced or truncated.
pub fn sha1_hex_utf8(bytes: &[u8]) -> Result<String, HashError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(sha1_hex(text))
}

/// Same as [`sha1_hex`] for platform strings (command line arguments,
/// environment values, paths).
pub fn sha1_hex_os_str(text: &OsStr) -> Result<String, HashError> {
    sha1_hex_utf8(text.as_encoded_bytes())
}

/// Incremental SHA-1 for input that arrives in pieces.
#[derive(Clone, Default)]
pub struct Sha1Hasher {
    inner: Sha1,
    /// Total bytes fed so far.
    len: u64,
}

impl Sha1Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        let data = data.as_ref();
        self.inner.update(data);
        self.len += data.len() as u64;

        self
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn finalize(self) -> Sha1Digest {
        trace!("finalizing sha1 over {} bytes", self.len);
        self.inner.finalize().into()
    }
}

impl Write for Sha1Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Drains `reader` and returns the SHA-1 of everything it produced.
pub fn hash_reader<R: Read>(mut reader: R) -> Result<Sha1Digest, HashError> {
    let mut hasher = Sha1Hasher::new();
    let copied = io::copy(&mut reader, &mut hasher)?;
    debug!("hashed {copied} bytes from reader");

    Ok(hasher.finalize())
}
