use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use sha2::{Digest, Sha256};

use mosaic::io_utils::{io_cli_error, mosaic_cli_error, simple_cli_error, CliError};
use mosaic::{assemble, scan_stream, TileManifest};

/// Reassemble a block stream into its image payload.
///
/// Truncated or gapped streams still produce output: the assembled buffer
/// is the longest contiguous prefix, exactly what the viewer would show.
#[derive(Parser)]
#[command(name = "tile_unpack")]
struct Args {
    /// Block stream written by tile_pack.
    input: PathBuf,
    /// Output payload file.
    output: PathBuf,
    /// Expected total block count. Defaults to the manifest entry for
    /// --query, else to the number of blocks found in the stream.
    #[arg(long)]
    expected: Option<usize>,
    /// Manifest to look the expected count up in.
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Query key for the manifest lookup, as serialized JSON.
    #[arg(long)]
    query_key: Option<String>,
    /// Fail unless the assembled payload matches this sha256 (hex).
    #[arg(long)]
    verify: Option<String>,
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("{e}");
        exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let stream = fs::read(&args.input).map_err(|e| io_cli_error("reading", &args.input, e))?;
    let set = scan_stream(&stream);

    let expected = match (args.expected, &args.manifest) {
        (Some(n), _) => n,
        (None, Some(path)) => {
            let key = args
                .query_key
                .as_deref()
                .ok_or_else(|| simple_cli_error("--manifest requires --query-key"))?;
            let manifest = TileManifest::load(path).map_err(|e| mosaic_cli_error("loading manifest", e))?;
            manifest
                .block_count_for_key(key)
                .ok_or_else(|| simple_cli_error("query key not present in manifest"))?
        }
        (None, None) => set.populated(),
    };

    let assembly = assemble(&set, expected);
    fs::write(&args.output, &assembly.buffer).map_err(|e| io_cli_error("writing", &args.output, e))?;
    println!("{} out of {} blocks assembled", assembly.assembled_count, expected);

    if let Some(want) = &args.verify {
        let got = hex::encode(Sha256::digest(&assembly.buffer));
        if !got.eq_ignore_ascii_case(want) {
            return Err(simple_cli_error(&format!(
                "digest mismatch: assembled {got}, expected {want}"
            )));
        }
    }
    Ok(())
}
