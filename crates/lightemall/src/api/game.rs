use serde::{Deserialize, Serialize};

use crate::api::config::GameConfig;
use crate::api::snapshot::BoardSnapshot;
use crate::api::types::GameEvent;
use crate::board::{maze, power, Board, Difficulty, Direction, Rng, WireMode};
use crate::error::BoardError;
use crate::input::intent::Intent;

/// Game state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Initializing,
    Playing,
    Won,
}

/// The Light-Em-All game controller. Owns the board; every mutation goes
/// through one of the command methods, which return whether they were
/// accepted. Rejected commands change nothing.
#[derive(Debug, Clone)]
pub struct LightEmAll {
    config: GameConfig,
    board: Board,
    /// Session stream; each new board draws its seed from here.
    rng: Rng,
    seed: u64,
    phase: GamePhase,
    moves: u32,
    radius: u32,
    events: Vec<GameEvent>,
}

impl LightEmAll {
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        Self::with_scramble(config, true)
    }

    fn with_scramble(config: GameConfig, scramble: bool) -> Result<Self, BoardError> {
        let mut rng = Rng::new(config.seed);
        let seed = rng.next_u64();
        let (board, radius) = Self::build(&config, seed, scramble)?;
        let mut game = Self {
            config,
            board,
            rng,
            seed,
            phase: GamePhase::Playing,
            moves: 0,
            radius,
            events: Vec::new(),
        };
        game.announce_board();
        Ok(game)
    }

    /// Same as [`LightEmAll::new`] but leaves the generated tree unrotated,
    /// so every wire lines up from the start.
    #[cfg(test)]
    pub(crate) fn unscrambled(config: GameConfig) -> Result<Self, BoardError> {
        Self::with_scramble(config, false)
    }

    /// Generate, measure, scramble and power a fresh board.
    fn build(config: &GameConfig, seed: u64, scramble: bool) -> Result<(Board, u32), BoardError> {
        let mut board = Board::new(config.width, config.height, config.mode)?;
        let mut rng = Rng::new(seed);
        maze::generate(&mut board, config.difficulty, &mut rng);
        let radius = power::calculate_radius(&board);
        if scramble {
            maze::scramble(&mut board, &mut rng);
        }
        let cap = config.radius_enabled.then_some(radius);
        power::update_power(&mut board, cap);
        Ok((board, radius))
    }

    /// Replace the whole game with a new board built from `config`.
    /// The current board stays in place until the new one is complete.
    fn initialize(&mut self, config: GameConfig) -> Result<(), BoardError> {
        let previous = self.phase;
        self.phase = GamePhase::Initializing;
        let seed = self.rng.next_u64();
        match Self::build(&config, seed, true) {
            Ok((board, radius)) => {
                self.config = config;
                self.board = board;
                self.radius = radius;
                self.seed = seed;
                self.moves = 0;
                self.phase = GamePhase::Playing;
                self.announce_board();
                Ok(())
            }
            Err(e) => {
                self.phase = previous;
                log::warn!("board rebuild rejected: {}", e);
                Err(e)
            }
        }
    }

    fn announce_board(&mut self) {
        log::info!(
            "new board {}x{} {:?} {:?} seed={} radius={}",
            self.board.width(),
            self.board.height(),
            self.config.mode,
            self.config.difficulty,
            self.seed,
            self.radius
        );
        self.events.push(GameEvent::new_board(
            self.board.width(),
            self.board.height(),
            self.radius,
        ));
    }

    /// Count the move, recompute power, and check for a win.
    fn finish_move(&mut self) {
        self.moves += 1;
        let cap = self.power_cap();
        let powered = power::update_power(&mut self.board, cap);
        self.events.push(GameEvent::moved(self.moves, powered, self.board.len()));
        if self.phase == GamePhase::Playing && self.board.is_all_powered() {
            self.phase = GamePhase::Won;
            log::info!("puzzle solved in {} moves", self.moves);
            self.events.push(GameEvent::solved(self.moves));
        }
    }

    // ---- Commands ----

    /// Rotate the piece at (row, col) one step clockwise.
    pub fn rotate(&mut self, row: usize, col: usize) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let mode = self.board.mode();
        match self.board.get_mut(row, col) {
            Some(piece) => piece.rotate(mode),
            None => return false,
        }
        log::debug!("rotate ({}, {})", row, col);
        self.finish_move();
        true
    }

    /// Move the power source to (row, col). Only legal onto a neighbor whose
    /// wires line up with the current source.
    pub fn move_power_source(&mut self, row: usize, col: usize) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let target = match self.board.index(row, col) {
            Some(i) => i,
            None => return false,
        };
        let current = self.board.piece(self.board.power_source_index());
        if !current.is_connected_to(self.board.piece(target), self.board.mode()) {
            return false;
        }
        self.board.set_power_source(target);
        log::debug!("power source -> ({}, {})", row, col);
        self.finish_move();
        true
    }

    /// Move the power source one step in `dir`, if that cell exists.
    pub fn move_power_source_toward(&mut self, dir: Direction) -> bool {
        let (row, col) = self.board.power_source();
        match self.board.neighbor(row, col, dir) {
            Some((r, c)) => self.move_power_source(r, c),
            None => false,
        }
    }

    pub fn toggle_radius(&mut self) -> bool {
        let mut config = self.config.clone();
        config.radius_enabled = !config.radius_enabled;
        self.initialize(config).is_ok()
    }

    pub fn toggle_extended_mode(&mut self) -> bool {
        let mut config = self.config.clone();
        config.mode = WireMode::from_extended(!config.mode.is_extended());
        self.initialize(config).is_ok()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        let mut config = self.config.clone();
        config.difficulty = difficulty;
        self.initialize(config).is_ok()
    }

    /// Start over with a `width` x `height` board. Empty or oversized
    /// dimensions are rejected and the current game is kept.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), BoardError> {
        Board::check_dimensions(width, height)?;
        let mut config = self.config.clone();
        config.width = width;
        config.height = height;
        self.initialize(config)
    }

    /// New board with the same settings.
    pub fn reset(&mut self) -> bool {
        self.initialize(self.config.clone()).is_ok()
    }

    /// Apply a decoded player intent.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Rotate { row, col } => self.rotate(row, col),
            Intent::MoveSource { row, col } => self.move_power_source(row, col),
            Intent::MoveSourceToward(dir) => self.move_power_source_toward(dir),
            Intent::ToggleRadius => self.toggle_radius(),
            Intent::ToggleExtendedMode => self.toggle_extended_mode(),
            Intent::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
            Intent::Resize { width, height } => self.resize(width, height).is_ok(),
            Intent::Reset => self.reset(),
        }
    }

    // ---- Queries ----

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// True iff every piece is powered.
    pub fn is_won(&self) -> bool {
        self.board.is_all_powered()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Radius computed for the current board, whether or not it is enforced.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn radius_enabled(&self) -> bool {
        self.config.radius_enabled
    }

    /// The distance cap currently applied to power propagation.
    pub fn power_cap(&self) -> Option<u32> {
        self.config.radius_enabled.then_some(self.radius)
    }

    pub fn is_extended_mode(&self) -> bool {
        self.config.mode.is_extended()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Seed that generated the current board.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }

    /// Events queued since the last drain.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
