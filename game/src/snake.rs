use crate::direction::Direction;
use crate::grid::{Grid, Position};

/// The snake body, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
    direction: Direction,
    capacity: usize,
}

impl Snake {
    /// A straight snake on row 0 with its tail at the origin, heading right.
    ///
    /// `length` is clamped to `1..=grid.width`.
    pub fn new(length: usize, grid: Grid) -> Self {
        let length = length.clamp(1, grid.width.max(1) as usize) as i32;
        let body = (0..length)
            .map(|i| Position::new(length - i - 1, 0))
            .collect();
        Self::with_body(body, Direction::Right, grid)
    }

    /// A snake with an explicit body (head first), or `None` for an empty body.
    pub fn from_segments(body: Vec<Position>, direction: Direction, grid: Grid) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self::with_body(body, direction, grid))
    }

    fn with_body(body: Vec<Position>, direction: Direction, grid: Grid) -> Self {
        let capacity = grid.cell_count().max(body.len());
        Self {
            body,
            direction,
            capacity,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Turns the snake if `next` is on the other axis. Returns whether it turned.
    pub fn steer(&mut self, next: Direction) -> bool {
        if self.direction.can_turn_to(next) {
            self.direction = next;
            true
        } else {
            false
        }
    }

    /// Shifts every segment onto its predecessor and steps the head.
    ///
    /// Returns the cell the tail just left.
    pub fn advance(&mut self) -> Position {
        let vacated = self.body[self.body.len() - 1];
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] += self.direction.vector();
        vacated
    }

    /// Appends `vacated` as the new tail unless the snake already fills the grid.
    pub fn grow(&mut self, vacated: Position) -> bool {
        if self.body.len() >= self.capacity {
            return false;
        }
        self.body.push(vacated);
        true
    }

    /// The head shares a cell with another segment.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body[1..].contains(&head)
    }
}
