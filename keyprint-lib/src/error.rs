use thiserror::Error;

/// Errors raised while turning input into a SHA-1 fingerprint.
#[derive(Debug, Error)]
pub enum HashError {
    /// The input bytes are not well-formed UTF-8 text.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Encoding {
        valid_up_to: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("invalid SHA-1 digest '{0}': expected 40 hex characters")]
    InvalidDigest(String),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::str::Utf8Error> for HashError {
    fn from(source: std::str::Utf8Error) -> Self {
        HashError::Encoding {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}
