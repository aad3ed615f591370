use std::env;
use std::fs;
use std::fs::File;

use mosaic::QueryStats;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <log.json> <out.csv>", args[0]);
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2]) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(log_path: &str, csv_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let log = fs::read_to_string(log_path)?;
    let stats = QueryStats::from_json(&log)?;
    let out = File::create(csv_path)?;
    stats.write_csv(out)?;
    println!("{} queries written to {csv_path}", stats.len());
    Ok(())
}
