//! Puzzle grid model
//!
//! Pure data representation of a bordered skyscraper grid.
//! No validation logic or I/O concerns live here.

use std::fmt;

/// The vantage point of a border clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All four sides, in the order clues are checked and reported.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}

/// A bordered skyscraper grid of interior size `n`.
///
/// Stored as a flat `(n + 2) x (n + 2)` matrix in row-major order. The outer
/// ring (minus the four corners) holds clue values; the interior holds the
/// candidate building heights in `1..=n`. Corners are sentinel zeros and are
/// never read as clues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    n: usize,
    cells: Vec<u8>,
}

/// Reasons a grid cannot be built from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// A token in the stream is not an unsigned integer fitting `u8`.
    BadToken { token: String },
    /// The stream ended in the middle of a puzzle.
    TruncatedPuzzle { expected: usize, found: usize },
    /// An interior height falls outside `1..=n` (bordered coordinates).
    HeightOutOfRange { row: usize, col: usize, value: u8 },
    /// The row lengths do not form a square matrix.
    NotSquare { rows: usize, cols: usize },
    /// Bordered size below 3, i.e. no interior at all.
    TooSmall,
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::BadToken { token } => {
                write!(f, "not an unsigned integer: '{}'", token)
            }
            MalformedInput::TruncatedPuzzle { expected, found } => {
                write!(
                    f,
                    "input ended mid-puzzle: expected {} values, found {}",
                    expected, found
                )
            }
            MalformedInput::HeightOutOfRange { row, col, value } => {
                write!(
                    f,
                    "height {} at row {}, column {} is outside the valid range",
                    value, row, col
                )
            }
            MalformedInput::NotSquare { rows, cols } => {
                write!(f, "grid is not square: {} rows x {} columns", rows, cols)
            }
            MalformedInput::TooSmall => write!(f, "grid has no interior (size below 3x3)"),
        }
    }
}

impl std::error::Error for MalformedInput {}

impl Grid {
    /// Build a grid from explicit bordered rows.
    ///
    /// Enforces squareness, a minimum bordered size of 3, and interior
    /// heights in `1..=n`. Corner values are overwritten with the sentinel 0
    /// whatever the caller supplied.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MalformedInput> {
        let bordered = rows.len();
        if bordered < 3 {
            return Err(MalformedInput::TooSmall);
        }
        for row in &rows {
            if row.len() != bordered {
                return Err(MalformedInput::NotSquare {
                    rows: bordered,
                    cols: row.len(),
                });
            }
        }

        let n = bordered - 2;
        let mut cells: Vec<u8> = rows.into_iter().flatten().collect();
        for (row, col) in [
            (0, 0),
            (0, bordered - 1),
            (bordered - 1, 0),
            (bordered - 1, bordered - 1),
        ] {
            cells[row * bordered + col] = 0;
        }

        let grid = Grid { n, cells };
        grid.check_interior_range()?;
        Ok(grid)
    }

    /// Build a grid from the flat list of non-corner values, in reading
    /// order. This matches the on-disk puzzle format: corners are absent from
    /// the input and synthesized as 0.
    pub fn from_flat(n: usize, values: &[u8]) -> Result<Self, MalformedInput> {
        if n == 0 {
            return Err(MalformedInput::TooSmall);
        }
        let bordered = n + 2;
        let expected = bordered * bordered - 4;
        if values.len() != expected {
            return Err(MalformedInput::TruncatedPuzzle {
                expected,
                found: values.len(),
            });
        }

        let mut cells = Vec::with_capacity(bordered * bordered);
        let mut next = values.iter().copied();
        for row in 0..bordered {
            for col in 0..bordered {
                if Self::is_corner(bordered, row, col) {
                    cells.push(0);
                } else {
                    // next() cannot fail: the length was checked above.
                    cells.push(next.next().unwrap_or(0));
                }
            }
        }

        let grid = Grid { n, cells };
        grid.check_interior_range()?;
        Ok(grid)
    }

    fn is_corner(bordered: usize, row: usize, col: usize) -> bool {
        (row == 0 || row == bordered - 1) && (col == 0 || col == bordered - 1)
    }

    fn check_interior_range(&self) -> Result<(), MalformedInput> {
        for row in 0..self.n {
            for col in 0..self.n {
                let value = self.height(row, col);
                if value < 1 || value as usize > self.n {
                    return Err(MalformedInput::HeightOutOfRange {
                        row: row + 1,
                        col: col + 1,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Interior size (the puzzle's N).
    pub fn size(&self) -> usize {
        self.n
    }

    /// Bordered size, `n + 2`.
    pub fn bordered_size(&self) -> usize {
        self.n + 2
    }

    /// Raw cell in bordered coordinates.
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.bordered_size() && col < self.bordered_size(),
            "cell index out of bounds"
        );
        self.cells[row * self.bordered_size() + col]
    }

    /// Interior height in 0-based interior coordinates.
    pub fn height(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.n && col < self.n, "interior index out of bounds");
        self.cells[(row + 1) * self.bordered_size() + (col + 1)]
    }

    /// The clue for line `index` (0-based) seen from `side`.
    pub fn clue(&self, side: Side, index: usize) -> u8 {
        assert!(index < self.n, "clue index out of bounds");
        let edge = self.bordered_size() - 1;
        match side {
            Side::Top => self.cell(0, index + 1),
            Side::Bottom => self.cell(edge, index + 1),
            Side::Left => self.cell(index + 1, 0),
            Side::Right => self.cell(index + 1, edge),
        }
    }

    /// The interior heights of line `index`, ordered in the viewing direction
    /// of `side`: top reads its column top-down, bottom bottom-up, left its
    /// row left-to-right, right right-to-left.
    pub fn line_of_sight(&self, side: Side, index: usize) -> Vec<u8> {
        assert!(index < self.n, "line index out of bounds");
        match side {
            Side::Top => (0..self.n).map(|row| self.height(row, index)).collect(),
            Side::Bottom => (0..self.n)
                .rev()
                .map(|row| self.height(row, index))
                .collect(),
            Side::Left => (0..self.n).map(|col| self.height(index, col)).collect(),
            Side::Right => (0..self.n)
                .rev()
                .map(|col| self.height(index, col))
                .collect(),
        }
    }

    /// The interior as row-major rows (for reporting).
    pub fn interior_rows(&self) -> Vec<Vec<u8>> {
        (0..self.n)
            .map(|row| (0..self.n).map(|col| self.height(row, col)).collect())
            .collect()
    }

    /// The clue values along `side`, in line-index order.
    pub fn clues(&self, side: Side) -> Vec<u8> {
        (0..self.n).map(|index| self.clue(side, index)).collect()
    }
}
