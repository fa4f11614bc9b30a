use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use dumpscan_core::DEFAULT_CHUNK_SIZE;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dumpscan")]
#[command(about = "Search memory dumps for byte patterns")]
#[command(group(ArgGroup::new("mode").required(true).args(["pattern", "nth_nonzero"])))]
struct Args {
    /// Path to the memory dump file
    dump: PathBuf,

    /// Hex pattern to search for (even length, optional 0x prefix)
    #[arg(short = 's', long = "pattern")]
    pattern: Option<String>,

    /// Report the offset of the nth non-zero byte instead of a pattern scan
    #[arg(short = 'n', long = "nth-nonzero", value_parser = clap::value_parser!(u64).range(1..))]
    nth_nonzero: Option<u64>,

    /// Read chunk size in bytes
    #[arg(
        long = "chunk-size",
        default_value_t = DEFAULT_CHUNK_SIZE as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    chunk_size: u64,
}

fn main() -> Result<()> {
    // Initialize logging; diagnostics go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dumpscan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let chunk_size = args.chunk_size as usize;

    info!("dumpscan starting on {:?}", args.dump);

    match (args.pattern.as_deref(), args.nth_nonzero) {
        (Some(hex), None) => commands::search::run(&args.dump, hex, chunk_size),
        (None, Some(n)) => commands::nonzero::run(&args.dump, n, chunk_size),
        // The arg group enforces exactly one mode.
        _ => unreachable!(),
    }
}
