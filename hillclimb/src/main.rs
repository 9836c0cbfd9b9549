//! Command-line entry point.
//!
//! Run: cargo run -- input.txt [x,y | all] [--show-path] [--json] [-v]

use std::io;

use clap::Parser;
use hillclimb::cli::{Args, RunConfig};

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let config = RunConfig::from(args);
    if let Err(e) = hillclimb::run(&config, &mut io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
