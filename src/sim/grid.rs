//! Territory grid: a fixed rectangular table of cells, each owned by one
//! faction.
//!
//! Dimensions are derived from the arena size once at construction and never
//! change. The grid only mutates through the conquest rule.

use serde::{Deserialize, Serialize};

/// Ownership label for a cell or a ball. Exactly two sides contest the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Day,
    Night,
}

impl Faction {
    /// The opposing faction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Faction::Day => Faction::Night,
            Faction::Night => Faction::Day,
        }
    }
}

/// Cell counts per faction from one full board scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub day: u32,
    pub night: u32,
}

/// Rectangular table of cell owners, column-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cols: usize,
    rows: usize,
    /// `cells[col * rows + row]`
    cells: Vec<Faction>,
}

impl Grid {
    /// Carve a grid out of an arena at `cell_edge` pixels per cell
    /// (dimensions round down). Every cell starts owned by Day.
    pub fn new(arena_width: f32, arena_height: f32, cell_edge: f32) -> Self {
        let cols = (arena_width / cell_edge) as usize;
        let rows = (arena_height / cell_edge) as usize;
        Self {
            cols,
            rows,
            cells: vec![Faction::Day; cols * rows],
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flat cell storage, column-major. For snapshotting.
    pub fn cells(&self) -> &[Faction] {
        &self.cells
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| col * self.rows + row)
    }

    /// Owner of the cell, or `None` when the address is off the board.
    pub fn owner_at(&self, col: usize, row: usize) -> Option<Faction> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Hand a cell to `faction`. Off-board addresses are silently ignored.
    pub fn set_owner_at(&mut self, col: usize, row: usize, faction: Faction) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = faction;
        }
    }

    /// Count cells per faction. Linear scan, run once per tick.
    pub fn tally(&self) -> Score {
        let mut score = Score::default();
        for cell in &self.cells {
            match cell {
                Faction::Day => score.day += 1,
                Faction::Night => score.night += 1,
            }
        }
        score
    }
}
