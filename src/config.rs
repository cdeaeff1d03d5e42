//! Command line options and logging setup.
//!
//! Every option can also come from the environment:
//!
//! - `TILE_PUZZLE_IMAGE`: reference image to start with
//! - `TILE_PUZZLE_SEED`: fixed shuffle seed (reproducible sessions)
//! - `TILE_PUZZLE_LOG_PATH`: write logs to this file
//!
//! The terminal belongs to the UI, so logs only ever go to a file. Without a
//! log path no logger is installed and `log` macros are no-ops.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use simplelog::{Config, WriteLogger};
use structopt::StructOpt;
use structopt_flags::{LogLevel, QuietVerbose};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tile-puzzle",
    about = "Shuffle a picture into nine tiles and drag them back into place"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        short,
        long,
        parse(from_os_str),
        env = "TILE_PUZZLE_IMAGE",
        help = "Reference image to load at startup"
    )]
    pub image: Option<PathBuf>,

    #[structopt(long, env = "TILE_PUZZLE_SEED", help = "Seed for reproducible shuffles")]
    pub seed: Option<u64>,

    #[structopt(
        long,
        parse(from_os_str),
        env = "TILE_PUZZLE_LOG_PATH",
        help = "Append logs to this file"
    )]
    pub log_file: Option<PathBuf>,
}

impl Opt {
    /// Install the file logger if a log path was given.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = self.log_file.as_ref() else {
            return Ok(());
        };
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        WriteLogger::init(self.verbose.get_level_filter(), Config::default(), file)
            .context("installing logger")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let opt = Opt::from_iter_safe([
            "tile-puzzle",
            "--image",
            "cat.png",
            "--seed",
            "42",
            "--log-file",
            "puzzle.log",
        ])
        .unwrap();
        assert_eq!(opt.image, Some(PathBuf::from("cat.png")));
        assert_eq!(opt.seed, Some(42));
        assert_eq!(opt.log_file, Some(PathBuf::from("puzzle.log")));
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Opt::from_iter_safe(["tile-puzzle", "--seed", "abc"]).is_err());
    }
}
