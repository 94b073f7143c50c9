//! Configuration for the skyscraper checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Puzzle size and output format selection

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the skyscraper checker
#[derive(Debug, Parser)]
#[command(name = "skyscraper-check")]
#[command(about = "Validate candidate solutions to skyscraper puzzles")]
#[command(version)]
pub struct Args {
    /// Input file with one or more bordered puzzle grids
    pub input: PathBuf,

    /// Interior size of the puzzles in the file
    #[arg(long, default_value_t = 4, help = "Interior grid size N")]
    pub size: usize,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How each puzzle's result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered grid followed by a VALID / NOT VALID line
    Text,
    /// One JSON object per puzzle
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Puzzle input file
    pub input: PathBuf,
    /// Interior grid size
    pub size: usize,
    /// Report format
    pub format: OutputFormat,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // Heights are stored as u8, which bounds the interior size.
        if args.size == 0 || args.size > 255 {
            bail!("puzzle size must be between 1 and 255, got {}", args.size);
        }

        Ok(Config {
            input: args.input,
            size: args.size,
            format: args.format,
            log_level: args.log_level,
        })
    }
}
