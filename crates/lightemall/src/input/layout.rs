use glam::Vec2;

pub const MIN_CELL_SIZE: f32 = 30.0;
pub const MAX_CELL_SIZE: f32 = 60.0;
/// Space between neighboring cells.
pub const CELL_GAP: f32 = 4.0;

/// Where the board sits in world space, for pointer hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Top-left corner of cell (0, 0).
    pub origin: Vec2,
    pub cell_size: f32,
    pub gap: f32,
}

impl BoardLayout {
    pub fn new(origin: Vec2, cell_size: f32) -> Self {
        Self {
            origin,
            cell_size,
            gap: CELL_GAP,
        }
    }

    /// Largest cell size that fits `cols` cells across `available_width`,
    /// clamped to [MIN_CELL_SIZE, MAX_CELL_SIZE].
    pub fn fit(cols: usize, available_width: f32) -> Self {
        let per_cell = (available_width / cols.max(1) as f32).floor() - CELL_GAP;
        Self::new(Vec2::ZERO, per_cell.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE))
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Distance between the top-left corners of neighboring cells.
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.gap
    }

    /// The (row, col) under `point`, or `None` outside a `width` x `height` board.
    pub fn cell_at(&self, point: Vec2, width: usize, height: usize) -> Option<(usize, usize)> {
        let local = (point - self.origin) / self.pitch();
        if !local.is_finite() || local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let col = local.x.floor() as usize;
        let row = local.y.floor() as usize;
        (row < height && col < width).then_some((row, col))
    }

    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        self.origin
            + Vec2::new(col as f32, row as f32) * self.pitch()
            + Vec2::splat(self.cell_size * 0.5)
    }

    /// World-space size of a `width` x `height` board.
    pub fn board_size(&self, width: usize, height: usize) -> Vec2 {
        Vec2::new(width as f32, height as f32) * self.pitch() - Vec2::splat(self.gap)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Vec2::ZERO, MAX_CELL_SIZE)
    }
}
