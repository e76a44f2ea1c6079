use std::collections::HashSet;

use crate::fill::Fill;
use crate::grid::Grid;
use crate::types::{Cell, Direction, PuzzleError};

const MIN_WORDS: usize = 3;

/// Deterministic candidate order: row-major scan over the open cells,
/// across before down at each cell. Open cells with start-count 0 are
/// still anchors; start-counts are only validated in aggregate. This
/// ordering is the tie-break that picks which solution is returned when
/// several exist.
pub fn candidates(grid: &Grid) -> impl Iterator<Item = (Cell, Direction)> + '_ {
    grid.cells()
        .filter(move |&cell| !grid.is_blocked(cell))
        .flat_map(|cell| Direction::ALL.map(|dir| (cell, dir)))
}

pub struct Solver<'a> {
    grid: &'a Grid,
    words: &'a [String],
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a Grid, words: &'a [String]) -> Self {
        Self { grid, words }
    }

    /// Depth-first search for the first arrangement that places every
    /// word. Returns `None` when the candidate space is exhausted.
    pub fn solve(&self) -> Option<Fill> {
        let mut fill = Fill::new(self.grid);
        self.place_from(0, &mut fill).then_some(fill)
    }

    fn place_from(&self, k: usize, fill: &mut Fill) -> bool {
        let Some(word) = self.words.get(k) else {
            // All words placed.
            return true;
        };

        for (anchor, dir) in candidates(self.grid) {
            if let Some(writes) = fill.check_placement(word, anchor, dir) {
                fill.apply(&writes);
                if self.place_from(k + 1, fill) {
                    return true;
                }
                // The recursive call failed with the fill exactly as we
                // left it, so undoing our own writes restores the state
                // this depth was entered with.
                fill.restore(&writes);
            }
        }
        false
    }
}

pub fn validate_words(words: &[String]) -> Result<(), PuzzleError> {
    if words.len() < MIN_WORDS {
        return Err(PuzzleError::TooFewWords);
    }
    let mut seen = HashSet::new();
    for word in words {
        if word.is_empty() {
            return Err(PuzzleError::EmptyWord);
        }
        if !seen.insert(word.as_str()) {
            return Err(PuzzleError::DuplicateWord(word.clone()));
        }
    }
    Ok(())
}

/// Fills the grid described by `grid_text` with `words` and renders the
/// result. Validation runs in a fixed order: word list, grid shape,
/// start-count total, then the search itself.
pub fn solve_puzzle(grid_text: &str, words: &[String]) -> Result<String, PuzzleError> {
    validate_words(words)?;
    let grid = Grid::parse(grid_text)?;
    let expected = grid.total_starts();
    if expected != words.len() {
        return Err(PuzzleError::WordCountMismatch {
            expected,
            actual: words.len(),
        });
    }

    let solver = Solver::new(&grid, words);
    let fill = solver.solve().ok_or(PuzzleError::Unsolvable)?;
    Ok(fill.to_string())
}
