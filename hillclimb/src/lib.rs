//! **hillclimb**: fewest-step routes across a height map.
//!
//! Reads a height map, answers the query selected on the command line and
//! prints the answer as text or JSON, optionally with the route drawn over
//! the map.

pub mod cli;
pub mod render;
pub mod report;

use std::fs;
use std::io::Write;

use anyhow::Context;
use hillclimb_core::HeightMap;

use cli::{OutputFormat, RunConfig};
use report::Report;

/// Read the configured input file and answer its query into `out`.
pub fn run(config: &RunConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let path = config.input.display();
    let text = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read {path}"))?;
    let map = HeightMap::parse(&text)
        .with_context(|| format!("failed to parse {path}"))?;
    log::info!(
        "loaded {path}: {}x{}, start {}, end {}",
        map.width(),
        map.height(),
        map.start(),
        map.end()
    );
    answer(&map, config, out)
}

/// Answer the configured query for an already parsed map.
pub fn answer(map: &HeightMap, config: &RunConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let report = Report::build(map, config.start, config.show_path)?;

    match config.format {
        OutputFormat::Text => {
            report.write_text(out)?;
            if config.show_path {
                writeln!(out)?;
                match &report.route {
                    Some(walk) => write!(out, "{}", render::render_route(map, walk))?,
                    None => writeln!(out, "no route to draw")?,
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
