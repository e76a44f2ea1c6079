use std::path::PathBuf;

use clap::Parser;
use crossfill::solver::solve_puzzle;

#[derive(Parser)]
#[command(
    name = "crossfill",
    about = "Fills a crossword grid skeleton with a fixed word list"
)]
struct Cli {
    /// Grid rows, one per argument ('.' = blocked, digit = open cell
    /// with that many word starts), e.g. 2001 0..0 1000 0..0
    #[arg(long = "rows", num_args = 1..)]
    rows: Vec<String>,

    /// Read the grid description from a file instead of --rows
    #[arg(long, conflicts_with = "rows")]
    grid_file: Option<PathBuf>,

    /// Words to place, in order
    #[arg(long = "words", num_args = 1..)]
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let grid_text = if let Some(path) = &cli.grid_file {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error: cannot read {}: {}", path.display(), e);
            std::process::exit(1);
        })
    } else if !cli.rows.is_empty() {
        cli.rows.join("\n")
    } else {
        eprintln!("Error: provide a grid with --rows or --grid-file");
        std::process::exit(1);
    };

    match solve_puzzle(&grid_text, &cli.words) {
        Ok(solution) => println!("{solution}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
