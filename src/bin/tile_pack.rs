use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use indicatif::ProgressBar;
use sha2::{Digest, Sha256};

use mosaic::io_utils::{io_cli_error, mosaic_cli_error, simple_cli_error, CliError};
use mosaic::{encode_block, Query, TileManifest};

/// Pack an image payload into a block stream for progressive delivery.
#[derive(Parser)]
#[command(name = "tile_pack")]
struct Args {
    /// Payload file (one tile image).
    input: PathBuf,
    /// Output block stream.
    output: PathBuf,
    /// Payload bytes per block.
    #[arg(long, default_value_t = 65536)]
    block_size: usize,
    /// Query cell this tile answers, as "x,y". Required with --manifest.
    #[arg(long)]
    query: Option<String>,
    /// Manifest to record this tile's block count in (created if missing).
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Grid factor recorded in a freshly created manifest.
    #[arg(long, default_value_t = 10)]
    factor: u32,
    /// Navigation surface dimension recorded in a freshly created manifest.
    #[arg(long, default_value_t = 600)]
    dim: u32,
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("{e}");
        exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if args.block_size == 0 {
        return Err(simple_cli_error("--block-size must be non-zero"));
    }

    let payload = fs::read(&args.input).map_err(|e| io_cli_error("reading", &args.input, e))?;

    let nblocks = payload.chunks(args.block_size).count();
    let bar = ProgressBar::new(nblocks as u64);
    let mut stream = Vec::with_capacity(payload.len() + nblocks * mosaic::BLOCK_HEADER_SIZE);
    for (index, chunk) in payload.chunks(args.block_size).enumerate() {
        stream.extend_from_slice(&encode_block(index as u32, chunk));
        bar.inc(1);
    }
    bar.finish_and_clear();

    fs::write(&args.output, &stream).map_err(|e| io_cli_error("writing", &args.output, e))?;

    if let Some(path) = &args.manifest {
        let query = parse_query(args.query.as_deref())?;
        let mut manifest = if path.exists() {
            TileManifest::load(path).map_err(|e| mosaic_cli_error("loading manifest", e))?
        } else {
            TileManifest::new(args.factor, args.dim)
        };
        manifest.set_block_count(query, nblocks);
        manifest
            .save(path)
            .map_err(|e| mosaic_cli_error("writing manifest", e))?;
    }

    let digest = Sha256::digest(&payload);
    println!(
        "{} -> {} blocks, {} bytes, sha256 {}",
        args.input.display(),
        nblocks,
        stream.len(),
        hex::encode(digest)
    );
    Ok(())
}

fn parse_query(arg: Option<&str>) -> Result<Query, CliError> {
    let arg = arg.ok_or_else(|| simple_cli_error("--manifest requires --query x,y"))?;
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| simple_cli_error("--query must look like x,y"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|_| simple_cli_error("--query coordinates must be unsigned integers"))
    };
    Ok(Query { x: parse(x)?, y: parse(y)? })
}
