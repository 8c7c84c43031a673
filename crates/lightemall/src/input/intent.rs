//! Decoding UI input into player intents.
//!
//! Keyboard: arrows / WASD move the power source, R toggles the radius cap,
//! H toggles extended mode. Pointer presses rotate the cell underneath.
//! Custom events carry button commands.

use glam::Vec2;

use crate::board::{Difficulty, Direction};
use crate::input::layout::BoardLayout;
use crate::input::queue::InputEvent;

pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_A: u32 = 65;
pub const KEY_D: u32 = 68;
pub const KEY_H: u32 = 72;
pub const KEY_R: u32 = 82;
pub const KEY_S: u32 = 83;
pub const KEY_W: u32 = 87;

// Custom event kinds (UI → Rust)
pub const CUSTOM_RESET: u32 = 1;
/// a = level (1..=3)
pub const CUSTOM_SET_DIFFICULTY: u32 = 2;
/// a = width, b = height
pub const CUSTOM_RESIZE: u32 = 3;
pub const CUSTOM_TOGGLE_RADIUS: u32 = 4;
pub const CUSTOM_TOGGLE_EXTENDED: u32 = 5;
/// a = row, b = col
pub const CUSTOM_ROTATE: u32 = 6;
/// a = row, b = col
pub const CUSTOM_MOVE_SOURCE: u32 = 7;

/// A player action the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Rotate { row: usize, col: usize },
    MoveSource { row: usize, col: usize },
    MoveSourceToward(Direction),
    ToggleRadius,
    ToggleExtendedMode,
    SetDifficulty(Difficulty),
    Resize { width: usize, height: usize },
    Reset,
}

/// Non-negative whole number carried in a float payload.
fn whole(v: f32) -> Option<usize> {
    (v.is_finite() && v >= 0.0).then(|| v as usize)
}

impl Intent {
    pub fn from_key(key_code: u32) -> Option<Intent> {
        let intent = match key_code {
            KEY_UP | KEY_W => Intent::MoveSourceToward(Direction::N),
            KEY_DOWN | KEY_S => Intent::MoveSourceToward(Direction::S),
            KEY_LEFT | KEY_A => Intent::MoveSourceToward(Direction::W),
            KEY_RIGHT | KEY_D => Intent::MoveSourceToward(Direction::E),
            KEY_R => Intent::ToggleRadius,
            KEY_H => Intent::ToggleExtendedMode,
            _ => return None,
        };
        Some(intent)
    }

    pub fn from_custom(kind: u32, a: f32, b: f32) -> Option<Intent> {
        match kind {
            CUSTOM_RESET => Some(Intent::Reset),
            CUSTOM_TOGGLE_RADIUS => Some(Intent::ToggleRadius),
            CUSTOM_TOGGLE_EXTENDED => Some(Intent::ToggleExtendedMode),
            CUSTOM_SET_DIFFICULTY => {
                let difficulty = whole(a).and_then(|l| Difficulty::from_level(l as u32));
                if difficulty.is_none() {
                    log::warn!("ignoring difficulty level {}", a);
                }
                difficulty.map(Intent::SetDifficulty)
            }
            CUSTOM_RESIZE => Some(Intent::Resize {
                width: whole(a)?,
                height: whole(b)?,
            }),
            CUSTOM_ROTATE => Some(Intent::Rotate {
                row: whole(a)?,
                col: whole(b)?,
            }),
            CUSTOM_MOVE_SOURCE => Some(Intent::MoveSource {
                row: whole(a)?,
                col: whole(b)?,
            }),
            _ => {
                log::warn!("unknown custom event kind {}", kind);
                None
            }
        }
    }

    /// Decode one queued event against the current board size.
    pub fn from_event(
        event: &InputEvent,
        layout: &BoardLayout,
        width: usize,
        height: usize,
    ) -> Option<Intent> {
        match *event {
            InputEvent::PointerDown { x, y } => layout
                .cell_at(Vec2::new(x, y), width, height)
                .map(|(row, col)| Intent::Rotate { row, col }),
            InputEvent::KeyDown { key_code } => Intent::from_key(key_code),
            InputEvent::Custom { kind, a, b, .. } => Intent::from_custom(kind, a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_move_the_source() {
        assert_eq!(Intent::from_key(KEY_UP), Some(Intent::MoveSourceToward(Direction::N)));
        assert_eq!(Intent::from_key(KEY_W), Some(Intent::MoveSourceToward(Direction::N)));
        assert_eq!(Intent::from_key(KEY_S), Some(Intent::MoveSourceToward(Direction::S)));
        assert_eq!(Intent::from_key(KEY_LEFT), Some(Intent::MoveSourceToward(Direction::W)));
        assert_eq!(Intent::from_key(KEY_D), Some(Intent::MoveSourceToward(Direction::E)));
        assert_eq!(Intent::from_key(KEY_R), Some(Intent::ToggleRadius));
        assert_eq!(Intent::from_key(KEY_H), Some(Intent::ToggleExtendedMode));
        assert_eq!(Intent::from_key(13), None);
    }

    #[test]
    fn custom_events_decode() {
        assert_eq!(Intent::from_custom(CUSTOM_RESET, 0.0, 0.0), Some(Intent::Reset));
        assert_eq!(
            Intent::from_custom(CUSTOM_SET_DIFFICULTY, 3.0, 0.0),
            Some(Intent::SetDifficulty(Difficulty::Hard))
        );
        assert_eq!(Intent::from_custom(CUSTOM_SET_DIFFICULTY, 9.0, 0.0), None);
        assert_eq!(
            Intent::from_custom(CUSTOM_RESIZE, 8.0, 5.0),
            Some(Intent::Resize { width: 8, height: 5 })
        );
        assert_eq!(
            Intent::from_custom(CUSTOM_ROTATE, 1.0, 2.0),
            Some(Intent::Rotate { row: 1, col: 2 })
        );
        assert_eq!(Intent::from_custom(CUSTOM_MOVE_SOURCE, -1.0, 2.0), None);
        assert_eq!(Intent::from_custom(99, 0.0, 0.0), None);
    }

    #[test]
    fn pointer_rotates_cell_underneath() {
        let layout = BoardLayout::new(Vec2::ZERO, 40.0);
        let down = InputEvent::PointerDown { x: 50.0, y: 95.0 };
        assert_eq!(
            Intent::from_event(&down, &layout, 4, 4),
            Some(Intent::Rotate { row: 2, col: 1 })
        );
        let outside = InputEvent::PointerDown { x: 500.0, y: 5.0 };
        assert_eq!(Intent::from_event(&outside, &layout, 4, 4), None);
    }
}
