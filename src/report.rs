//! Puzzle reporting
//!
//! Renders a checked puzzle for humans (the bordered grid followed by a
//! VALID / NOT VALID verdict) or for machines (one JSON object per puzzle).

use serde::Serialize;

use crate::puzzle::{Grid, Side};
use crate::validation::CheckReport;

/// Render the bordered grid as text, one row per line.
///
/// Corner cells are blank. Values are right-aligned to the width of the
/// widest cell, so grids with single-digit values reproduce the classic
/// compact digit-run format.
pub fn render_grid(grid: &Grid) -> String {
    let bordered = grid.bordered_size();
    let mut widest = 1;
    for row in 0..bordered {
        for col in 0..bordered {
            widest = widest.max(decimal_width(grid.cell(row, col)));
        }
    }
    let separator = if widest == 1 { "" } else { " " };

    let mut out = String::new();
    for row in 0..bordered {
        let mut cells = Vec::with_capacity(bordered);
        for col in 0..bordered {
            let value = grid.cell(row, col);
            if value == 0 {
                cells.push(" ".repeat(widest));
            } else {
                cells.push(format!("{:>width$}", value, width = widest));
            }
        }
        out.push_str(&cells.join(separator));
        out.push('\n');
    }
    out
}

/// The literal verdict line for a check report.
pub fn render_verdict(report: &CheckReport) -> &'static str {
    if report.is_valid() {
        "VALID"
    } else {
        "NOT VALID"
    }
}

/// Full text outcome for one puzzle: the grid followed by the verdict.
pub fn render_text(grid: &Grid, report: &CheckReport) -> String {
    format!("{}{}", render_grid(grid), render_verdict(report))
}

/// Machine-readable outcome for one puzzle.
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleOutcome {
    pub size: usize,
    pub heights: Vec<Vec<u8>>,
    pub clues: ClueSets,
    pub valid: bool,
    pub violations: Vec<String>,
}

/// The four border clue sets, each in line-index order.
#[derive(Debug, Clone, Serialize)]
pub struct ClueSets {
    pub top: Vec<u8>,
    pub bottom: Vec<u8>,
    pub left: Vec<u8>,
    pub right: Vec<u8>,
}

impl PuzzleOutcome {
    pub fn new(grid: &Grid, report: &CheckReport) -> Self {
        Self {
            size: grid.size(),
            heights: grid.interior_rows(),
            clues: ClueSets {
                top: grid.clues(Side::Top),
                bottom: grid.clues(Side::Bottom),
                left: grid.clues(Side::Left),
                right: grid.clues(Side::Right),
            },
            valid: report.is_valid(),
            violations: report.violations.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn decimal_width(value: u8) -> usize {
    match value {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}
