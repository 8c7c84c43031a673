use thiserror::Error;

/// Reasons a board cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("board {width}x{height} exceeds the {max} cell limit")]
    TooLarge { width: usize, height: usize, max: usize },
}

/// Errors from loading a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
}
