pub mod direction;
pub mod grid;
pub mod maze;
pub mod piece;
pub mod power;
pub mod rng;
pub mod union_find;

pub use direction::{Direction, WireMode};
pub use grid::{Board, MAX_CELLS};
pub use maze::Difficulty;
pub use piece::Piece;
pub use rng::Rng;
pub use union_find::UnionFind;
