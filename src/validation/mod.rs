//! Validation Engine
//!
//! Clean separation of checking logic from the grid model and CLI concerns.

pub mod engine;

pub use engine::{check_grid, validate, visible_count, CheckReport, Violation};
