pub mod digest;
pub mod error;
pub mod ext;
pub mod key;
mod utils;

pub use utils::cryptography;

pub use cryptography::Sha1Hasher;
pub use cryptography::hash_reader;
pub use cryptography::sha1_hash;
pub use cryptography::sha1_hex;
pub use cryptography::sha1_hex_os_str;
pub use cryptography::sha1_hex_utf8;
pub use digest::Sha1Digest;
pub use error::HashError;
pub use ext::Base64Ext;
pub use ext::Sha1Ext;
pub use ext::from_base64;
pub use key::CacheableKey;
pub use key::FromStringValue;
