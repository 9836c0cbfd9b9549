//! Command-line arguments and the run configuration derived from them.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use hillclimb_core::{Point, PointParseError};

/// Fewest-step routes across a height map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Height map file
    pub input: PathBuf,

    /// Climb from `x,y` instead of the start marker, or `all` to report
    /// every lowest point
    pub start: Option<StartSelector>,

    /// Print the map with the route drawn on it
    #[arg(long)]
    pub show_path: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Raise the log level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level for `-v` count; `RUST_LOG` still overrides it.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// The optional second positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartSelector {
    /// Climb from this cell to the end.
    At(Point),
    /// Report every lowest cell and the best of them.
    AllLowest,
}

impl StartSelector {
    pub const ALL: &'static str = "all";
}

impl FromStr for StartSelector {
    type Err = StartParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL {
            return Ok(Self::AllLowest);
        }
        s.parse().map(Self::At).map_err(|source| StartParseError {
            input: s.to_string(),
            source,
        })
    }
}

/// A start argument that is neither `all` nor `x,y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartParseError {
    input: String,
    source: PointParseError,
}

impl fmt::Display for StartParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (all, input) = (StartSelector::ALL, &self.input);
        write!(f, "expected `x,y` or `{all}`, got \u{201c}{input}\u{201d}")
    }
}

impl std::error::Error for StartParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything [`run`](crate::run) needs, detached from the argument parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub start: Option<StartSelector>,
    pub format: OutputFormat,
    pub show_path: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            start: args.start,
            format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            show_path: args.show_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parses_point_and_all() {
        assert_eq!("all".parse::<StartSelector>(), Ok(StartSelector::AllLowest));
        assert_eq!(
            "3,1".parse::<StartSelector>(),
            Ok(StartSelector::At(Point::new(3, 1)))
        );
    }

    #[test]
    fn selector_rejects_garbage() {
        let err = "everywhere".parse::<StartSelector>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected `x,y` or `all`, got \u{201c}everywhere\u{201d}"
        );
        assert!("1,".parse::<StartSelector>().is_err());
    }

    #[test]
    fn args_minimal() {
        let args = Args::try_parse_from(["hillclimb", "input.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("input.txt"));
        assert_eq!(args.start, None);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
        let config = RunConfig::from(args);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.show_path);
    }

    #[test]
    fn args_full() {
        let argv = ["hillclimb", "in", "2,4", "--json", "--show-path", "-vv"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.start, Some(StartSelector::At(Point::new(2, 4))));
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
        let config = RunConfig::from(args);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.show_path);
    }

    #[test]
    fn args_reject_bad_start() {
        let args = Args::try_parse_from(["hillclimb", "in.txt", "nowhere"]);
        assert!(args.is_err());
    }

    #[test]
    fn args_require_input() {
        assert!(Args::try_parse_from(["hillclimb"]).is_err());
    }
}
