use serde::{Deserialize, Serialize};

use crate::api::game::{GamePhase, LightEmAll};
use crate::board::{Difficulty, Direction, Piece, WireMode};

/// Everything a UI needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub row: usize,
    pub col: usize,
    pub wires: Vec<Direction>,
    pub powered: bool,
    pub power_source: bool,
}

impl From<&Piece> for CellSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            row: piece.row(),
            col: piece.col(),
            wires: piece.wire_directions().collect(),
            powered: piece.is_powered(),
            power_source: piece.is_power_source(),
        }
    }
}

/// Read-only copy of the game state, serialized to JSON for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    pub mode: WireMode,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    pub won: bool,
    pub moves: u32,
    pub radius: u32,
    pub radius_enabled: bool,
    pub power_source: (usize, usize),
    /// Row-major.
    pub cells: Vec<CellSnapshot>,
}

impl BoardSnapshot {
    pub fn capture(game: &LightEmAll) -> Self {
        let board = game.board();
        Self {
            width: board.width(),
            height: board.height(),
            mode: board.mode(),
            difficulty: game.difficulty(),
            phase: game.phase(),
            won: game.is_won(),
            moves: game.moves(),
            radius: game.radius(),
            radius_enabled: game.radius_enabled(),
            power_source: board.power_source(),
            cells: board.pieces().iter().map(CellSnapshot::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
