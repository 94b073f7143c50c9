//! Validation Engine
//!
//! Core checking logic separated from the grid model and CLI concerns:
//! the visibility line scan, the Latin-square check, and the clue sweep.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::puzzle::{Grid, Side};

/// A single constraint violation found in a candidate grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A height appears more than once in an interior row (0-based).
    DuplicateInRow { row: usize, value: u8 },
    /// A height appears more than once in an interior column (0-based).
    DuplicateInColumn { col: usize, value: u8 },
    /// A border clue disagrees with the visible count of its line of sight.
    ClueMismatch {
        side: Side,
        index: usize,
        clue: u8,
        visible: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateInRow { row, value } => {
                write!(f, "duplicate height {} in row {}", value, row + 1)
            }
            Violation::DuplicateInColumn { col, value } => {
                write!(f, "duplicate height {} in column {}", value, col + 1)
            }
            Violation::ClueMismatch {
                side,
                index,
                clue,
                visible,
            } => write!(
                f,
                "{} clue {} at line {} does not match visible count {}",
                side,
                clue,
                index + 1,
                visible
            ),
        }
    }
}

/// Result of checking one candidate grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CheckReport {
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    fn add(&mut self, violation: Violation) {
        debug!("violation: {}", violation);
        self.violations.push(violation);
    }

    /// A grid is valid iff the Latin-square property holds and every clue
    /// matches its line's visible count.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Count the buildings visible along a line of sight.
///
/// A building is visible iff it is strictly taller than every building
/// before it in the sequence; ties are blocked. Single scan tracking the
/// running maximum, so a clue value c is satisfied by a line exactly when
/// `visible_count(line) == c`, for any line length.
pub fn visible_count(line: &[u8]) -> usize {
    let mut tallest = 0u8;
    let mut visible = 0;
    for &height in line {
        if height > tallest {
            visible += 1;
            tallest = height;
        }
    }
    visible
}

/// Check a candidate grid against the skyscraper rules.
///
/// The Latin-square check runs first; a structurally broken grid (duplicate
/// height in a row or column) short-circuits the clue sweep. The clue sweep
/// itself examines every clue on all four sides and records every mismatch,
/// so the report names each failing clue.
pub fn check_grid(grid: &Grid) -> CheckReport {
    let mut report = CheckReport::new();

    if let Some(violation) = find_latin_violation(grid) {
        report.add(violation);
        return report;
    }

    let n = grid.size();
    for side in Side::ALL {
        for index in 0..n {
            let clue = grid.clue(side, index);
            let visible = visible_count(&grid.line_of_sight(side, index));
            if clue as usize != visible {
                report.add(Violation::ClueMismatch {
                    side,
                    index,
                    clue,
                    visible,
                });
            }
        }
    }

    report
}

/// Check a candidate grid, reducing the report to a verdict.
pub fn validate(grid: &Grid) -> bool {
    check_grid(grid).is_valid()
}

/// First duplicate height in any interior row or column, if one exists.
///
/// Heights are already constrained to `1..=n` at construction, so a seen
/// array per line suffices.
fn find_latin_violation(grid: &Grid) -> Option<Violation> {
    let n = grid.size();
    let mut seen = vec![false; n + 1];

    for row in 0..n {
        seen.fill(false);
        for col in 0..n {
            let value = grid.height(row, col);
            if seen[value as usize] {
                return Some(Violation::DuplicateInRow { row, value });
            }
            seen[value as usize] = true;
        }
    }

    for col in 0..n {
        seen.fill(false);
        for row in 0..n {
            let value = grid.height(row, col);
            if seen[value as usize] {
                return Some(Violation::DuplicateInColumn { col, value });
            }
            seen[value as usize] = true;
        }
    }

    None
}
