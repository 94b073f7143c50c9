//! Loader integration tests: multi-puzzle streams and file-backed input.

use std::fs::File;
use std::io::{BufReader, Write};

use skyscraper_checker::{validate, Grid, MalformedInput, PuzzleReader};

const VALID_PUZZLE: &str = "\
 2 3 1 2
2 2 1 4 3 2
1 4 3 2 1 4
2 1 4 3 2 3
2 3 2 1 4 1
 2 2 3 1
";

const INVALID_PUZZLE: &str = "\
 4 3 1 2
2 2 1 4 3 2
1 4 3 2 1 4
2 1 4 3 2 3
2 3 2 1 4 1
 2 2 3 1
";

#[test]
fn test_load_and_validate_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}{}", VALID_PUZZLE, INVALID_PUZZLE).expect("write puzzles");

    let handle = File::open(file.path()).expect("reopen temp file");
    let grids: Vec<Grid> = PuzzleReader::new(BufReader::new(handle), 4)
        .collect::<Result<_, _>>()
        .expect("both puzzles well-formed");

    assert_eq!(grids.len(), 2);
    assert!(validate(&grids[0]));
    assert!(!validate(&grids[1]));
}

#[test]
fn test_puzzles_come_back_in_input_order() {
    let input = format!("{}{}{}", INVALID_PUZZLE, VALID_PUZZLE, INVALID_PUZZLE);
    let verdicts: Vec<bool> = PuzzleReader::new(input.as_bytes(), 4)
        .map(|grid| validate(&grid.expect("well-formed")))
        .collect();
    assert_eq!(verdicts, vec![false, true, false]);
}

#[test]
fn test_truncated_stream_aborts_with_error() {
    let input = format!("{}2 3 1 2\n", VALID_PUZZLE);
    let results: Vec<_> = PuzzleReader::new(input.as_bytes(), 4).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(MalformedInput::TruncatedPuzzle {
            expected: 32,
            found: 4
        })
    ));
}

#[test]
fn test_out_of_range_interior_height_is_a_load_error() {
    // Interior cell set to 9 on a size-4 puzzle.
    let input = VALID_PUZZLE.replacen("2 2 1 4 3 2", "2 9 1 4 3 2", 1);
    let mut reader = PuzzleReader::new(input.as_bytes(), 4);
    let err = reader.next().expect("an item").unwrap_err();
    assert!(matches!(err, MalformedInput::HeightOutOfRange { .. }));
}

#[test]
fn test_out_of_range_clue_is_not_a_load_error() {
    // A nonsense clue loads fine; it only fails validation.
    let input = VALID_PUZZLE.replacen("2 3 1 2", "9 3 1 2", 1);
    let mut reader = PuzzleReader::new(input.as_bytes(), 4);
    let grid = reader.next().expect("an item").expect("loads");
    assert!(!validate(&grid));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = MalformedInput::TruncatedPuzzle {
        expected: 32,
        found: 4,
    };
    assert_eq!(
        err.to_string(),
        "input ended mid-puzzle: expected 32 values, found 4"
    );
    let err = MalformedInput::BadToken {
        token: "4x".to_string(),
    };
    assert_eq!(err.to_string(), "not an unsigned integer: '4x'");
}
