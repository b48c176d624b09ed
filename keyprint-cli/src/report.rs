use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use keyprint_lib::CacheableKey;
use keyprint_lib::HashError;
use keyprint_lib::Sha1Digest;
use keyprint_lib::hash_reader;
use keyprint_lib::sha1_hex_os_str;
use serde::Serialize;
use url::Url;

use std::ffi::OsStr;
use std::io::Read;

use crate::args::Args;

#[derive(Debug, Serialize)]
pub struct Entry {
    pub input: String,
    pub sha1: String,
}

impl Entry {
    /// Hashes one command line value.
    pub fn from_text(input: &OsStr) -> Result<Self, HashError> {
        let sha1 = sha1_hex_os_str(input)?;
        Ok(Self {
            input: input.to_string_lossy().into_owned(),
            sha1,
        })
    }

    pub fn from_url(input: &OsStr) -> Result<Self> {
        let text = input
            .to_str()
            .with_context(|| format!("URL {input:?} is not valid UTF-8"))?;
        let url = Url::parse(text).with_context(|| format!("invalid URL '{text}'"))?;

        // A URL key's string value is already the SHA-1 of its absolute form.
        Ok(Self {
            input: text.to_string(),
            sha1: url.string_value(),
        })
    }

    pub fn from_stdin(digest: Sha1Digest) -> Self {
        Self {
            input: "-".to_string(),
            sha1: digest.to_hex(),
        }
    }

    /// sha1sum-style: `<hex>  <input>`.
    pub fn line(&self) -> String {
        format!("{}  {}", self.sha1, self.input)
    }

    pub fn json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Hashes whatever `args` selects: `stdin` when `--stdin` is set, otherwise
/// each positional value as a URL key or as text.
pub fn collect<R: Read>(args: &Args, stdin: R) -> Result<Vec<Entry>> {
    if args.stdin {
        let digest = hash_reader(stdin)?;
        return Ok(vec![Entry::from_stdin(digest)]);
    }

    if args.url {
        return args.inputs.iter().map(|input| Entry::from_url(input)).collect();
    }

    let entries = args
        .inputs
        .iter()
        .map(|input| Entry::from_text(input))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries)
}

/// Succeeds when `entries` holds one digest equal to `expected`.
pub fn check(entries: &[Entry], expected: &str) -> Result<()> {
    let expected: Sha1Digest = expected.parse()?;

    let [entry] = entries else {
        bail!("--check needs exactly one input, got {}", entries.len());
    };
    let actual: Sha1Digest = entry.sha1.parse()?;

    if actual != expected {
        bail!("digest mismatch for '{}': expected {expected}, got {actual}", entry.input);
    }

    Ok(())
}
