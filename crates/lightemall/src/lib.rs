pub mod api;
pub mod board;
pub mod bridge;
pub mod error;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::GameConfig;
pub use api::game::{GamePhase, LightEmAll};
pub use api::snapshot::{BoardSnapshot, CellSnapshot};
pub use api::types::{GameEvent, EVENT_MOVE, EVENT_NEW_BOARD, EVENT_SOLVED};
pub use board::{Board, Difficulty, Direction, Piece, Rng, UnionFind, WireMode};
pub use bridge::protocol::{CellRecord, CELL_RECORD_BYTES, PROTOCOL_VERSION};
pub use error::{BoardError, ConfigError};
pub use input::intent::Intent;
pub use input::layout::BoardLayout;
pub use input::queue::{InputEvent, InputQueue};
