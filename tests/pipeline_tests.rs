//! Full pipeline: load puzzles, check them, render the classic report.

use skyscraper_checker::puzzle::parse_puzzles;
use skyscraper_checker::report::{render_text, PuzzleOutcome};
use skyscraper_checker::validation::check_grid;

const TWO_PUZZLES: &str = "\
 2 3 1 2
2 2 1 4 3 2
1 4 3 2 1 4
2 1 4 3 2 3
2 3 2 1 4 1
 2 2 3 1
 4 3 1 2
2 2 1 4 3 2
1 4 3 2 1 4
2 1 4 3 2 3
2 3 2 1 4 1
 2 2 3 1
";

#[test]
fn test_text_report_matches_classic_output() {
    let grids = parse_puzzles(TWO_PUZZLES, 4).expect("both load");
    assert_eq!(grids.len(), 2);

    let first = render_text(&grids[0], &check_grid(&grids[0]));
    assert_eq!(
        first,
        " 2312 \n221432\n143214\n214323\n232141\n 2231 \nVALID"
    );

    let second = render_text(&grids[1], &check_grid(&grids[1]));
    assert_eq!(
        second,
        " 4312 \n221432\n143214\n214323\n232141\n 2231 \nNOT VALID"
    );
}

#[test]
fn test_json_report_for_each_puzzle() {
    let grids = parse_puzzles(TWO_PUZZLES, 4).expect("both load");
    let outcomes: Vec<PuzzleOutcome> = grids
        .iter()
        .map(|grid| PuzzleOutcome::new(grid, &check_grid(grid)))
        .collect();

    assert!(outcomes[0].valid);
    assert!(outcomes[0].violations.is_empty());
    assert!(!outcomes[1].valid);
    assert_eq!(outcomes[1].violations.len(), 1);

    // Each outcome serializes standalone, one object per puzzle.
    for outcome in &outcomes {
        let json = outcome.to_json().expect("serializable");
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    }
}

#[test]
fn test_trivial_puzzle_pipeline() {
    let grids = parse_puzzles("1\n1 1 1\n1\n", 1).expect("loads");
    assert_eq!(grids.len(), 1);
    let report = check_grid(&grids[0]);
    assert!(report.is_valid());
    assert_eq!(render_text(&grids[0], &report), " 1 \n111\n 1 \nVALID");
}
