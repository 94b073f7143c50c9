//! Skyscraper Checker
//!
//! Validates candidate solutions to Skyscraper logic puzzles: a square grid
//! of building heights bordered by visibility clues.
//!
//! This library provides:
//! - The bordered grid model and line-of-sight extraction
//! - A streaming loader for multi-puzzle input files
//! - The visibility-count evaluator and constraint checker
//! - Text and JSON reporting

pub mod config;
pub mod puzzle;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use puzzle::{Grid, MalformedInput, PuzzleReader, Side};
pub use validation::{check_grid, validate, visible_count, CheckReport};
