use anyhow::Result;
use clap::Parser;
use log::debug;
use log::info;

mod args;
mod report;

use args::Args;

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();
    debug!("arguments: {args:?}");

    let entries = report::collect(&args, std::io::stdin().lock())?;

    for entry in &entries {
        if args.json {
            println!("{}", entry.json()?);
        } else {
            println!("{}", entry.line());
        }
    }

    if let Some(expected) = args.check.as_deref() {
        report::check(&entries, expected)?;
        info!("digest matches {expected}");
    }

    Ok(())
}
