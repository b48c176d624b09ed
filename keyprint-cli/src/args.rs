use clap::Parser;

use std::ffi::OsString;

/// Print SHA-1 fingerprints of text, standard input or URL keys.
#[derive(Debug, Parser)]
#[command(name = "keyprint", version, about)]
pub struct Args {
    /// Text to hash. Each value is hashed separately.
    #[arg(value_name = "TEXT", required_unless_present = "stdin", conflicts_with = "stdin")]
    pub inputs: Vec<OsString>,

    /// Hash standard input as a byte stream.
    #[arg(long)]
    pub stdin: bool,

    /// Treat inputs as URLs and print their cache key: the SHA-1 of the absolute URL.
    #[arg(long, conflicts_with = "stdin")]
    pub url: bool,

    /// Compare the computed digest against this one. Needs exactly one input.
    #[arg(long, value_name = "DIGEST")]
    pub check: Option<String>,

    /// Print one JSON object per input.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod test_args {
    use super::*;

    #[test]
    fn positional_inputs() {
        let args = Args::try_parse_from(["keyprint", "abc", ""]).unwrap();
        assert_eq!(args.inputs, vec![OsString::from("abc"), OsString::from("")]);
        assert!(!args.stdin);
        assert!(!args.json);
    }

    #[test]
    fn stdin_with_check() {
        let args = Args::try_parse_from([
            "keyprint",
            "--stdin",
            "--check",
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        ])
        .unwrap();
        assert!(args.stdin);
        assert!(args.inputs.is_empty());
        assert_eq!(
            args.check.as_deref(),
            Some("da39a3ee5e6b4b0d3255bfef95601890afd80709")
        );
    }

    #[test]
    fn needs_some_input() {
        assert!(Args::try_parse_from(["keyprint"]).is_err());
        assert!(Args::try_parse_from(["keyprint", "--stdin", "abc"]).is_err());
        assert!(Args::try_parse_from(["keyprint", "--stdin", "--url"]).is_err());
    }
}
