use rand::{rngs::StdRng, SeedableRng};
use snake_game::{
    Direction, Food, GameOverReason, Grid, Phase, Position, Session, Snake, TickOutcome,
};

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn session_with(grid: Grid, body: &[Position], direction: Direction, food: Position) -> Session {
    Session::from_parts(
        grid,
        Snake::from_segments(body.to_vec(), direction, grid).unwrap(),
        Food::at(food),
        StdRng::seed_from_u64(42),
    )
}

#[test]
fn head_moves_one_cell_in_the_current_direction() {
    let grid = Grid::new(10, 10);
    for direction in Direction::ALL {
        let body = [p(5, 5), p(5, 5) - direction.vector()];
        let mut session = session_with(grid, &body, direction, p(0, 0));
        let head = session.snake().head();

        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(session.snake().head(), head + direction.vector());
    }
}

#[test]
fn steering_applies_on_the_next_tick() {
    let grid = Grid::new(10, 10);
    let mut session = session_with(grid, &[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, p(0, 0));

    assert!(session.steer(Direction::Down));
    session.tick();
    assert_eq!(session.snake().head(), p(5, 6));
}

#[test]
fn reversal_is_ignored() {
    let grid = Grid::new(10, 10);
    let mut session = session_with(grid, &[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, p(0, 0));

    assert!(!session.steer(Direction::Left));
    assert_eq!(session.tick(), TickOutcome::Moved);
    assert_eq!(session.snake().head(), p(6, 5));
}

#[test]
fn wall_collision_should_end_the_game() {
    let grid = Grid::new(5, 5);
    let mut session = Session::with_rng(grid, 3, StdRng::seed_from_u64(1));

    let mut outcome = TickOutcome::Moved;
    for _ in 0..10 {
        outcome = session.tick();
        if outcome != TickOutcome::Moved && outcome != TickOutcome::Ate {
            break;
        }
    }

    assert_eq!(outcome, TickOutcome::GameOver(GameOverReason::HitWall));
    assert_eq!(session.phase(), Phase::GameOver(GameOverReason::HitWall));
    assert!(!grid.contains(session.snake().head()));
}

#[test]
fn boundary_is_detected_on_every_edge() {
    let grid = Grid::new(4, 3);
    let cases = [
        (p(0, 1), Direction::Left),
        (p(3, 1), Direction::Right),
        (p(1, 0), Direction::Up),
        (p(1, 2), Direction::Down),
    ];
    for (head, direction) in cases {
        let mut session = session_with(grid, &[head], direction, p(2, 1));
        assert_eq!(
            session.tick(),
            TickOutcome::GameOver(GameOverReason::HitWall),
            "{head:?} heading {direction:?}"
        );
    }
}

#[test]
fn staying_inside_never_hits_the_wall() {
    let grid = Grid::new(4, 3);
    let mut session = session_with(grid, &[p(0, 0)], Direction::Right, p(3, 2));
    for _ in 0..3 {
        assert_ne!(session.tick(), TickOutcome::GameOver(GameOverReason::HitWall));
    }
    assert_eq!(session.snake().head(), p(3, 0));
}

#[test]
fn self_collision_should_end_the_game() {
    let grid = Grid::new(8, 8);
    // Head at (3,4) moving left; turning down runs into (3,5).
    let body = [p(3, 4), p(3, 5), p(4, 5), p(5, 5), p(5, 4), p(4, 4)];
    let mut session = session_with(grid, &body, Direction::Left, p(0, 0));

    assert!(session.steer(Direction::Down));
    assert_eq!(session.tick(), TickOutcome::GameOver(GameOverReason::HitSelf));
    assert!(session.is_over());
}

#[test]
fn turning_into_the_neck_is_a_self_collision() {
    let grid = Grid::new(8, 8);
    let body = [p(1, 1), p(2, 1), p(2, 2), p(1, 2)];
    let mut session = session_with(grid, &body, Direction::Up, p(7, 7));

    // Right from (1,1) lands on (2,1), which is still occupied after the shift.
    assert!(session.steer(Direction::Right));
    assert_eq!(session.tick(), TickOutcome::GameOver(GameOverReason::HitSelf));
}

#[test]
fn moving_into_the_old_tail_cell_is_safe() {
    let grid = Grid::new(8, 8);
    // A 2x2 loop: the tail at (1,2) moves away on the same tick the head arrives.
    let body = [p(1, 1), p(2, 1), p(2, 2), p(1, 2)];
    let mut session = session_with(grid, &body, Direction::Down, p(7, 7));

    assert_eq!(session.tick(), TickOutcome::Moved);
    assert_eq!(session.snake().head(), p(1, 2));
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn eating_food_grows_and_scores_by_one() {
    let grid = Grid::new(7, 7);
    let mut session = session_with(grid, &[p(4, 3), p(3, 3), p(2, 3)], Direction::Right, p(5, 3));

    assert_eq!(session.tick(), TickOutcome::Ate);
    assert_eq!(session.score(), 1);
    assert_eq!(session.snake().len(), 4);
    assert_eq!(session.snake().head(), p(5, 3));
    // The new tail fills the cell the old tail just left.
    assert_eq!(session.snake().segments()[3], p(2, 3));
    assert!(grid.contains(session.food().position()));
}

#[test]
fn score_tracks_every_meal() {
    let grid = Grid::new(20, 1);
    let mut session = session_with(grid, &[p(0, 0)], Direction::Right, p(1, 0));
    let mut meals = 0;
    for _ in 0..19 {
        if session.tick() == TickOutcome::Ate {
            meals += 1;
        }
    }
    assert!(meals >= 1);
    assert_eq!(session.score(), meals);
    assert_eq!(session.snake().len(), 1 + meals as usize);
}

#[test]
fn game_over_freezes_the_session() {
    let grid = Grid::new(3, 3);
    let mut session = session_with(grid, &[p(2, 0), p(1, 0)], Direction::Right, p(0, 2));
    assert_eq!(session.tick(), TickOutcome::GameOver(GameOverReason::HitWall));

    let snake = session.snake().clone();
    assert_eq!(session.tick(), TickOutcome::Idle);
    assert!(!session.steer(Direction::Down));
    assert_eq!(session.snake(), &snake);
}
