use glam::IVec2;
use rand::Rng;

/// A grid coordinate, `x` to the right and `y` down.
pub type Position = IVec2;

/// The playing field, `width` × `height` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of whole tiles that fit on a `screen_width` × `screen_height` screen.
    pub fn from_screen(screen_width: u32, screen_height: u32, tile_size: u32) -> Self {
        let tile_size = tile_size.max(1);
        let cells = |pixels: u32| (pixels / tile_size).min(i32::MAX as u32) as i32;
        Self::new(cells(screen_width), cells(screen_height))
    }

    /// Saturates at `usize::MAX` instead of overflowing.
    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize).saturating_mul(self.height.max(0) as usize)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// A cell picked uniformly over the whole grid.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn default_screen_gives_32_by_24() {
        let grid = Grid::from_screen(640, 480, 20);
        assert_eq!(grid, Grid::new(32, 24));
        assert_eq!(grid.cell_count(), 768);
    }

    #[test]
    fn huge_screens_do_not_overflow() {
        let grid = Grid::from_screen(100_000, 100_000, 1);
        assert_eq!(grid, Grid::new(100_000, 100_000));
        assert!(grid.cell_count() >= 1 << 30);

        let grid = Grid::from_screen(u32::MAX, u32::MAX, 1);
        assert_eq!(grid.width, i32::MAX);
        assert!(grid.cell_count() > 0);
    }

    #[test]
    fn contains_is_half_open() {
        let grid = Grid::new(4, 3);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(3, 2)));
        assert!(!grid.contains(Position::new(4, 0)));
        assert!(!grid.contains(Position::new(0, 3)));
        assert!(!grid.contains(Position::new(-1, 1)));
        assert!(!grid.contains(Position::new(1, -1)));
    }

    #[test]
    fn random_cells_stay_inside() {
        let grid = Grid::new(5, 2);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }
}
