use bytemuck::{Pod, Zeroable};

/// Event kinds carried in [`GameEvent::kind`].
pub const EVENT_MOVE: f32 = 1.0;
pub const EVENT_SOLVED: f32 = 2.0;
pub const EVENT_NEW_BOARD: f32 = 3.0;

/// A game event handed from Rust to the UI.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
///
/// - `EVENT_MOVE`: a = move count, b = powered pieces, c = total pieces
/// - `EVENT_SOLVED`: a = move count
/// - `EVENT_NEW_BOARD`: a = width, b = height, c = radius
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn moved(moves: u32, powered: usize, total: usize) -> Self {
        Self {
            kind: EVENT_MOVE,
            a: moves as f32,
            b: powered as f32,
            c: total as f32,
        }
    }

    pub fn solved(moves: u32) -> Self {
        Self {
            kind: EVENT_SOLVED,
            a: moves as f32,
            ..Self::default()
        }
    }

    pub fn new_board(width: usize, height: usize, radius: u32) -> Self {
        Self {
            kind: EVENT_NEW_BOARD,
            a: width as f32,
            b: height as f32,
            c: radius as f32,
        }
    }
}
