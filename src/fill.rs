use crate::grid::{BLOCKED, Grid, GridCell};
use crate::types::{Cell, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Blocked,
    Empty,
    Letter(char),
}

/// One cell write of a checked placement, recording the value it
/// overwrites so the placement can be undone exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub cell: Cell,
    pub letter: char,
    pub previous: Slot,
}

/// Working letter matrix, congruent in shape to the grid skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    slots: Vec<Slot>,
    rows: usize,
    cols: usize,
}

impl Fill {
    pub fn new(grid: &Grid) -> Self {
        let slots = grid
            .cells()
            .map(|c| match grid.cell(c) {
                GridCell::Blocked => Slot::Blocked,
                GridCell::Open(_) => Slot::Empty,
            })
            .collect();
        Self {
            slots,
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }

    pub fn get(&self, cell: Cell) -> Slot {
        self.slots[cell.row * self.cols + cell.col]
    }

    fn set(&mut self, cell: Cell, slot: Slot) {
        debug_assert!(
            self.get(cell) != Slot::Blocked,
            "write to blocked cell {cell}"
        );
        self.slots[cell.row * self.cols + cell.col] = slot;
    }

    /// Read-only check of whether `word` fits starting at `anchor` in
    /// direction `dir`. A cell already holding the matching letter counts
    /// as a fit (that is how crossings are enforced), but its previous
    /// value is still recorded so a restore is exact. Returns `None` on
    /// any out-of-bounds, blocked, or conflicting target cell.
    pub fn check_placement(&self, word: &str, anchor: Cell, dir: Direction) -> Option<Vec<Write>> {
        let mut writes = Vec::with_capacity(word.len());
        for (i, letter) in word.chars().enumerate() {
            let target = anchor.offset(dir, i);
            if target.row >= self.rows || target.col >= self.cols {
                return None;
            }
            let previous = self.get(target);
            match previous {
                Slot::Blocked => return None,
                Slot::Letter(existing) if existing != letter => return None,
                _ => {}
            }
            writes.push(Write {
                cell: target,
                letter,
                previous,
            });
        }
        Some(writes)
    }

    /// Commits a checked placement. Callers pass the full write list or
    /// nothing; partial application would break the undo contract.
    pub fn apply(&mut self, writes: &[Write]) {
        for w in writes {
            self.set(w.cell, Slot::Letter(w.letter));
        }
    }

    /// Exact inverse of `apply` for the same write list.
    pub fn restore(&mut self, writes: &[Write]) {
        for w in writes {
            self.set(w.cell, w.previous);
        }
    }
}

impl std::fmt::Display for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                let ch = match self.get(Cell::new(r, c)) {
                    Slot::Blocked => BLOCKED,
                    Slot::Empty => ' ',
                    Slot::Letter(l) => l,
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
