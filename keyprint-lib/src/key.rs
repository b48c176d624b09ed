use url::Url;

use crate::utils::cryptography::sha1_hex;

/// A value usable as a cache key.
///
/// The string value is what a store indexes by. For a [`Url`] it is already
/// the 40-char SHA-1 hex of the absolute URL and is the name to use.
pub trait CacheableKey {
    fn string_value(&self) -> String;

    /// SHA-1 hex of [`string_value`](CacheableKey::string_value), safe as a
    /// file name for any key. For a [`Url`] this hashes the digest a second
    /// time.
    fn fingerprint(&self) -> String {
        sha1_hex(&self.string_value())
    }
}

impl CacheableKey for str {
    fn string_value(&self) -> String {
        self.to_string()
    }
}

impl CacheableKey for String {
    fn string_value(&self) -> String {
        self.clone()
    }
}

impl<K: CacheableKey + ?Sized> CacheableKey for &K {
    fn string_value(&self) -> String {
        (**self).string_value()
    }
}

/// URLs are keyed by the hash of their absolute form, so the string value is
/// already 40 hex characters.
impl CacheableKey for Url {
    fn string_value(&self) -> String {
        sha1_hex(self.as_str())
    }
}

/// Keys that can be rebuilt from their string value.
pub trait FromStringValue: CacheableKey + Sized {
    fn from_string_value(value: &str) -> Option<Self>;
}

impl FromStringValue for String {
    fn from_string_value(value: &str) -> Option<Self> {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod test_key {
    use super::*;

    #[test]
    fn string_keys() {
        let key = "cacherImage";
        assert_eq!(key.string_value(), "cacherImage");
        assert_eq!(key.fingerprint(), sha1_hex("cacherImage"));
        assert_eq!(String::from(key).fingerprint(), key.fingerprint());
        assert_eq!(
            String::from_string_value(&key.string_value()).as_deref(),
            Some(key)
        );
    }

    #[test]
    fn url_keys_use_absolute_form() {
        let url = Url::parse("HTTPS://Example.com/images/a.png").unwrap();
        // Url normalises scheme and host before hashing.
        assert_eq!(url.as_str(), "https://example.com/images/a.png");
        assert_eq!(
            url.string_value(),
            sha1_hex("https://example.com/images/a.png")
        );

        let value = url.string_value();
        assert_eq!(value.len(), 40);
        assert!(value.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        assert_eq!(url.fingerprint(), sha1_hex(&value));
        assert_ne!(url.fingerprint(), value);
    }

    #[test]
    fn different_urls_differ() {
        let a = Url::parse("https://example.com/a.png").unwrap();
        let b = Url::parse("https://example.com/b.png").unwrap();
        assert_ne!(a.string_value(), b.string_value());
    }
}
