//! Choosing the segment sprite for each cell of the snake.
//!
//! The head follows the travel direction, the tail points away from its
//! neighbour, and interior segments are either straight pieces or one of four
//! corners named after the two sides their neighbours sit on.

use crate::direction::Direction;
use crate::grid::Position;
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentSprite {
    HeadUp,
    HeadDown,
    HeadLeft,
    HeadRight,
    TailUp,
    TailDown,
    TailLeft,
    TailRight,
    BodyVertical,
    BodyHorizontal,
    BodyTopLeft,
    BodyTopRight,
    BodyBottomLeft,
    BodyBottomRight,
}

impl SegmentSprite {
    pub const ALL: [SegmentSprite; 14] = [
        SegmentSprite::HeadUp,
        SegmentSprite::HeadDown,
        SegmentSprite::HeadLeft,
        SegmentSprite::HeadRight,
        SegmentSprite::TailUp,
        SegmentSprite::TailDown,
        SegmentSprite::TailLeft,
        SegmentSprite::TailRight,
        SegmentSprite::BodyVertical,
        SegmentSprite::BodyHorizontal,
        SegmentSprite::BodyTopLeft,
        SegmentSprite::BodyTopRight,
        SegmentSprite::BodyBottomLeft,
        SegmentSprite::BodyBottomRight,
    ];

    /// Image file, relative to the asset root.
    pub fn file_name(self) -> &'static str {
        match self {
            SegmentSprite::HeadUp => "texture/head_up.png",
            SegmentSprite::HeadDown => "texture/head_down.png",
            SegmentSprite::HeadLeft => "texture/head_left.png",
            SegmentSprite::HeadRight => "texture/head_right.png",
            SegmentSprite::TailUp => "texture/tail_up.png",
            SegmentSprite::TailDown => "texture/tail_down.png",
            SegmentSprite::TailLeft => "texture/tail_left.png",
            SegmentSprite::TailRight => "texture/tail_right.png",
            SegmentSprite::BodyVertical => "texture/body_vertical.png",
            SegmentSprite::BodyHorizontal => "texture/body_horizontal.png",
            SegmentSprite::BodyTopLeft => "texture/body_topleft.png",
            SegmentSprite::BodyTopRight => "texture/body_topright.png",
            SegmentSprite::BodyBottomLeft => "texture/body_bottomleft.png",
            SegmentSprite::BodyBottomRight => "texture/body_bottomright.png",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            SegmentSprite::BodyTopLeft
                | SegmentSprite::BodyTopRight
                | SegmentSprite::BodyBottomLeft
                | SegmentSprite::BodyBottomRight
        )
    }
}

/// Which side of `from` the cell `to` lies on, if they differ.
///
/// Horizontal offsets win over vertical ones.
fn side_of(from: Position, to: Position) -> Option<Direction> {
    if to.x < from.x {
        Some(Direction::Left)
    } else if to.x > from.x {
        Some(Direction::Right)
    } else if to.y < from.y {
        Some(Direction::Up)
    } else if to.y > from.y {
        Some(Direction::Down)
    } else {
        None
    }
}

pub fn head_sprite(direction: Direction) -> SegmentSprite {
    match direction {
        Direction::Up => SegmentSprite::HeadUp,
        Direction::Down => SegmentSprite::HeadDown,
        Direction::Left => SegmentSprite::HeadLeft,
        Direction::Right => SegmentSprite::HeadRight,
    }
}

/// Tail sprite for a tail at `tail` whose only neighbour is `prev`.
pub fn tail_sprite(tail: Position, prev: Position) -> Option<SegmentSprite> {
    // The tail points away from the body: a tail left of its neighbour is "tail_left".
    side_of(prev, tail).map(|side| match side {
        Direction::Up => SegmentSprite::TailUp,
        Direction::Down => SegmentSprite::TailDown,
        Direction::Left => SegmentSprite::TailLeft,
        Direction::Right => SegmentSprite::TailRight,
    })
}

/// Sprite for an interior segment at `cur` between `prev` (towards the head) and `next`.
pub fn body_sprite(prev: Position, cur: Position, next: Position) -> Option<SegmentSprite> {
    if prev.x == next.x {
        return Some(SegmentSprite::BodyVertical);
    }
    if prev.y == next.y {
        return Some(SegmentSprite::BodyHorizontal);
    }

    let a = side_of(cur, prev)?;
    let b = side_of(cur, next)?;
    let (horizontal, vertical) = match (a.is_horizontal(), b.is_horizontal()) {
        (true, false) => (a, b),
        (false, true) => (b, a),
        _ => return None,
    };

    // Corners only exist between direct neighbours.
    if (prev - cur).abs().max_element() > 1 || (next - cur).abs().max_element() > 1 {
        return None;
    }

    match (horizontal, vertical) {
        (Direction::Left, Direction::Up) => Some(SegmentSprite::BodyTopLeft),
        (Direction::Right, Direction::Up) => Some(SegmentSprite::BodyTopRight),
        (Direction::Left, Direction::Down) => Some(SegmentSprite::BodyBottomLeft),
        (Direction::Right, Direction::Down) => Some(SegmentSprite::BodyBottomRight),
        _ => None,
    }
}

/// Every segment's position paired with its sprite, head first.
///
/// `None` means the segment has no drawable orientation and is skipped.
pub fn segment_sprites(snake: &Snake) -> Vec<(Position, Option<SegmentSprite>)> {
    let body = snake.segments();
    let last = body.len() - 1;
    body.iter()
        .enumerate()
        .map(|(i, &cur)| {
            let sprite = if i == 0 {
                Some(head_sprite(snake.direction()))
            } else if i == last {
                tail_sprite(cur, body[i - 1])
            } else {
                body_sprite(body[i - 1], cur, body[i + 1])
            };
            (cur, sprite)
        })
        .collect()
}
