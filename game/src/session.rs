use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::direction::Direction;
use crate::food::Food;
use crate::grid::Grid;
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver(GameOverReason),
}

/// What a call to [`Session::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    GameOver(GameOverReason),
    /// The game is already over; nothing changed.
    Idle,
}

/// One play session: snake, food and score on a fixed grid.
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    phase: Phase,
    rng: R,
}

impl Session<StdRng> {
    /// A session seeded from OS entropy.
    pub fn new(grid: Grid, initial_length: usize) -> Self {
        Self::with_rng(grid, initial_length, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(grid: Grid, initial_length: usize, mut rng: R) -> Self {
        let snake = Snake::new(initial_length, grid);
        let food = Food::spawn(grid, &mut rng);
        Self::from_parts(grid, snake, food, rng)
    }

    /// A running session with a hand-placed snake and food.
    pub fn from_parts(grid: Grid, snake: Snake, food: Food, rng: R) -> Self {
        Self {
            grid,
            snake,
            food,
            score: 0,
            phase: Phase::Running,
            rng,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Applies a turn right away; it takes effect on the next tick.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.is_over() {
            return false;
        }
        self.snake.steer(direction)
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Idle;
        }

        let vacated = self.snake.advance();
        let head = self.snake.head();

        let collision = if !self.grid.contains(head) {
            Some(GameOverReason::HitWall)
        } else if self.snake.bites_itself() {
            Some(GameOverReason::HitSelf)
        } else {
            None
        };
        if let Some(reason) = collision {
            info!(
                "game over ({reason:?}) at ({}, {}) with score {}",
                head.x, head.y, self.score
            );
            self.phase = Phase::GameOver(reason);
            return TickOutcome::GameOver(reason);
        }

        if head == self.food.position() {
            self.snake.grow(vacated);
            self.score += 1;
            self.food.relocate(self.grid, &mut self.rng);
            debug!(
                "ate food, score {} length {}, food moved to ({}, {})",
                self.score,
                self.snake.len(),
                self.food.position().x,
                self.food.position().y
            );
            return TickOutcome::Ate;
        }

        TickOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    fn session(snake: Vec<Position>, direction: Direction, food: Position) -> Session {
        let grid = Grid::new(8, 6);
        Session::from_parts(
            grid,
            Snake::from_segments(snake, direction, grid).unwrap(),
            Food::at(food),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn new_session_starts_running_with_zero_score() {
        let s = Session::with_rng(Grid::new(32, 24), 5, StdRng::seed_from_u64(9));
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.score(), 0);
        assert_eq!(s.snake().len(), 5);
        assert!(s.grid().contains(s.food().position()));
    }

    #[test]
    fn steering_after_game_over_is_ignored() {
        let mut s = session(vec![Position::new(7, 0)], Direction::Right, Position::new(0, 5));
        assert_eq!(s.tick(), TickOutcome::GameOver(GameOverReason::HitWall));
        assert!(!s.steer(Direction::Down));
        assert_eq!(s.snake().direction(), Direction::Right);
    }

    #[test]
    fn ticks_after_game_over_change_nothing() {
        let mut s = session(vec![Position::new(0, 0)], Direction::Up, Position::new(5, 5));
        assert_eq!(s.tick(), TickOutcome::GameOver(GameOverReason::HitWall));
        let before = s.snake().clone();
        assert_eq!(s.tick(), TickOutcome::Idle);
        assert_eq!(s.snake(), &before);
        assert_eq!(s.score(), 0);
    }
}
