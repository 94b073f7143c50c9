//! Puzzle data model and loader
//!
//! The bordered grid representation, line-of-sight extraction, and the
//! streaming reader that turns token streams into grids.

pub mod grid;
pub mod reader;

pub use grid::{Grid, MalformedInput, Side};
pub use reader::PuzzleReader;

/// Parse every puzzle in `input` as grids of interior size `n`.
///
/// Convenience wrapper over `PuzzleReader` for in-memory input; fails on the
/// first malformed puzzle.
pub fn parse_puzzles(input: &str, n: usize) -> Result<Vec<Grid>, MalformedInput> {
    PuzzleReader::new(input.as_bytes(), n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_puzzles() {
        let input = "1\n1 1 1\n1\n1\n1 1 1\n1\n";
        let grids = parse_puzzles(input, 1).expect("two trivial puzzles");
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0].size(), 1);
    }

    #[test]
    fn test_parse_puzzles_propagates_errors() {
        assert!(parse_puzzles("1 1 x", 1).is_err());
    }
}
