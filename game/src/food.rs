use rand::Rng;

use crate::grid::{Grid, Position};

/// The single piece of food on the board.
///
/// Placement is uniform over the whole grid; cells under the snake are not
/// excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn spawn<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        Self::at(grid.random_cell(rng))
    }

    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: Grid, rng: &mut R) {
        self.position = grid.random_cell(rng);
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
