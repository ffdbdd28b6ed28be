use glam::IVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step on the grid; `y` grows downwards.
    pub fn vector(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Whether a snake heading `self` may turn to `next`.
    ///
    /// Only turns onto the other axis are allowed, which rules out reversing
    /// into the neck as well as re-pressing the current axis.
    pub fn can_turn_to(self, next: Direction) -> bool {
        self.is_horizontal() != next.is_horizontal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_are_unit_and_opposites_cancel() {
        for dir in Direction::ALL {
            let v = dir.vector();
            assert_eq!(v.x.abs() + v.y.abs(), 1);
            assert_eq!(v + dir.opposite().vector(), IVec2::ZERO);
        }
    }

    #[test]
    fn only_perpendicular_turns_are_allowed() {
        assert!(Direction::Right.can_turn_to(Direction::Up));
        assert!(Direction::Right.can_turn_to(Direction::Down));
        assert!(!Direction::Right.can_turn_to(Direction::Left));
        assert!(!Direction::Right.can_turn_to(Direction::Right));
        assert!(Direction::Up.can_turn_to(Direction::Left));
        assert!(!Direction::Up.can_turn_to(Direction::Down));
    }
}
