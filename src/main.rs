use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use log::info;

use skyscraper_checker::config::{Config, OutputFormat};
use skyscraper_checker::puzzle::PuzzleReader;
use skyscraper_checker::report::{render_text, PuzzleOutcome};
use skyscraper_checker::validation::check_grid;

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let file = File::open(&config.input)
        .with_context(|| format!("cannot open puzzle file '{}'", config.input.display()))?;
    let puzzles = PuzzleReader::new(BufReader::new(file), config.size);

    for (index, grid) in puzzles.enumerate() {
        // Puzzles are read positionally from one stream, so a malformed
        // puzzle corrupts every later offset; abort the run.
        let grid = grid.with_context(|| format!("malformed puzzle #{}", index + 1))?;
        let report = check_grid(&grid);
        info!(
            "puzzle #{}: {}",
            index + 1,
            if report.is_valid() { "valid" } else { "not valid" }
        );
        match config.format {
            OutputFormat::Text => println!("{}", render_text(&grid, &report)),
            OutputFormat::Json => println!("{}", PuzzleOutcome::new(&grid, &report).to_json()?),
        }
    }

    println!("COMPLETED PROCESSING SKYSCRAPERS");
    Ok(())
}
