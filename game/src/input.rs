use gilrs::{Button, EventType, Gilrs};
use log::{info, warn};
use snake_engine::KeyCode;

use crate::direction::Direction;

/// Player intent, translated from keys or gamepad buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    /// Leave the game-over screen.
    Exit,
}

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Command::Steer(Direction::Up)),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Command::Steer(Direction::Down)),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Command::Steer(Direction::Left)),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Command::Steer(Direction::Right)),
        KeyCode::Escape | KeyCode::Enter | KeyCode::NumpadEnter => Some(Command::Exit),
        _ => None,
    }
}

pub fn command_for_button(button: Button) -> Option<Command> {
    match button {
        Button::DPadUp => Some(Command::Steer(Direction::Up)),
        Button::DPadDown => Some(Command::Steer(Direction::Down)),
        Button::DPadLeft => Some(Command::Steer(Direction::Left)),
        Button::DPadRight => Some(Command::Steer(Direction::Right)),
        Button::South | Button::Start => Some(Command::Exit),
        _ => None,
    }
}

/// Gamepad input, if a backend is available on this platform.
pub struct Gamepads {
    gilrs: Option<Gilrs>,
}

impl Default for Gamepads {
    fn default() -> Self {
        Self::new()
    }
}

impl Gamepads {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => {
                for (_id, pad) in gilrs.gamepads() {
                    info!("gamepad connected: {}", pad.name());
                }
                Some(gilrs)
            }
            Err(gilrs::Error::NotImplemented(gilrs)) => {
                warn!("gamepads are not supported on this platform");
                Some(gilrs)
            }
            Err(err) => {
                warn!("gamepad input disabled: {err}");
                None
            }
        };
        Self { gilrs }
    }

    /// A stand-in that never reports anything.
    pub fn disabled() -> Self {
        Self { gilrs: None }
    }

    /// Drains pending gamepad events into commands.
    pub fn poll(&mut self) -> Vec<Command> {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return Vec::new();
        };

        let mut commands = Vec::new();
        while let Some(event) = gilrs.next_event() {
            match event.event {
                EventType::ButtonPressed(button, _) => commands.extend(command_for_button(button)),
                EventType::Connected => info!("gamepad {} connected", event.id),
                EventType::Disconnected => info!("gamepad {} disconnected", event.id),
                _ => {}
            }
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(command_for_key(KeyCode::ArrowUp), Some(Command::Steer(Direction::Up)));
        assert_eq!(command_for_key(KeyCode::KeyA), Some(Command::Steer(Direction::Left)));
        assert_eq!(command_for_key(KeyCode::KeyS), Some(Command::Steer(Direction::Down)));
        assert_eq!(command_for_key(KeyCode::ArrowRight), Some(Command::Steer(Direction::Right)));
    }

    #[test]
    fn escape_and_enter_exit() {
        assert_eq!(command_for_key(KeyCode::Escape), Some(Command::Exit));
        assert_eq!(command_for_key(KeyCode::Enter), Some(Command::Exit));
        assert_eq!(command_for_key(KeyCode::Space), None);
    }

    #[test]
    fn dpad_steers() {
        assert_eq!(command_for_button(Button::DPadUp), Some(Command::Steer(Direction::Up)));
        assert_eq!(command_for_button(Button::DPadRight), Some(Command::Steer(Direction::Right)));
        assert_eq!(command_for_button(Button::South), Some(Command::Exit));
        assert_eq!(command_for_button(Button::North), None);
    }

    #[test]
    fn disabled_gamepads_report_nothing() {
        assert!(Gamepads::disabled().poll().is_empty());
    }
}
