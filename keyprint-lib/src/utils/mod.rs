pub mod cryptography;
