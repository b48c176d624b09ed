use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::digest::Sha1Digest;
use crate::error::HashError;
use crate::utils::cryptography::sha1_hash;
use crate::utils::cryptography::sha1_hex;

/// Adds SHA-1 fingerprinting to text.
///
/// ```
/// use keyprint_lib::Sha1Ext;
///
/// assert_eq!("abc".sha1(), "a9993e364706816aba3e25717850c26c9cd0d89d");
/// assert_eq!(String::from("abc").sha1_digest().to_hex(), "abc".sha1());
/// ```
pub trait Sha1Ext {
    /// 40 lowercase hex characters.
    fn sha1(&self) -> String;

    fn sha1_digest(&self) -> Sha1Digest;
}

impl Sha1Ext for str {
    fn sha1(&self) -> String {
        sha1_hex(self)
    }

    fn sha1_digest(&self) -> Sha1Digest {
        sha1_hash(self.as_bytes())
    }
}

/// Standard (padded) base64 of the UTF-8 bytes of text.
pub trait Base64Ext {
    fn base64(&self) -> String;
}

impl Base64Ext for str {
    fn base64(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }
}

/// Decodes standard base64 back into text. The decoded bytes must be UTF-8.
pub fn from_base64(encoded: &str) -> Result<String, HashError> {
    let bytes = STANDARD.decode(encoded)?;
    String::from_utf8(bytes).map_err(|err| err.utf8_error().into())
}

#[cfg(test)]
mod test_ext {
    use super::*;

    #[test]
    fn works_on_str_and_string() {
        let owned = String::from("");
        assert_eq!(owned.sha1(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!("abc".sha1(), "abc".sha1_digest().to_string());
    }

    #[test]
    fn base64_text() {
        assert_eq!("".base64(), "");
        assert_eq!("abc".base64(), "YWJj");
        assert_eq!(String::from("héllo").base64(), "aMOpbGxv");
        assert_eq!(from_base64("aMOpbGxv").unwrap(), "héllo");
        assert_eq!(from_base64(&"cacherImage".base64()).unwrap(), "cacherImage");
    }

    #[test]
    fn base64_rejects_bad_input() {
        assert!(matches!(from_base64("not base64!"), Err(HashError::Base64(_))));
        // "/w==" decodes to the lone byte 0xff.
        assert!(matches!(
            from_base64("/w=="),
            Err(HashError::Encoding { valid_up_to: 0, .. })
        ));
    }
}
