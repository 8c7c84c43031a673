use crate::board::direction::{Direction, WireMode};
use crate::board::piece::Piece;
use crate::error::BoardError;

/// Upper bound on `width * height`.
pub const MAX_CELLS: usize = 1 << 16;

/// Rectangular grid of pieces, row-major: index = row * width + col.
/// Exactly one piece is the power source at all times.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    mode: WireMode,
    pieces: Vec<Piece>,
    source: usize,
}

impl Board {
    /// Build an unwired board with the power source at (0, 0).
    pub fn new(width: usize, height: usize, mode: WireMode) -> Result<Self, BoardError> {
        Self::check_dimensions(width, height)?;

        let mut pieces = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pieces.push(Piece::new(row, col));
            }
        }
        pieces[0].set_power_source(true);

        Ok(Self {
            width,
            height,
            mode,
            pieces,
            source: 0,
        })
    }

    /// Reject empty or oversized dimensions before anything is allocated.
    pub fn check_dimensions(width: usize, height: usize) -> Result<(), BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(BoardError::TooLarge {
                width,
                height,
                max: MAX_CELLS,
            }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mode(&self) -> WireMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Flattened index of (row, col), or `None` off the grid.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Piece> {
        self.index(row, col).map(|i| &self.pieces[i])
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Piece> {
        let i = self.index(row, col)?;
        Some(&mut self.pieces[i])
    }

    pub(crate) fn piece(&self, index: usize) -> &Piece {
        &self.pieces[index]
    }

    pub(crate) fn piece_mut(&mut self, index: usize) -> &mut Piece {
        &mut self.pieces[index]
    }

    /// Pieces in row-major order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.iter_mut()
    }

    /// Cell one step from (row, col) in `dir`, or `None` if that leaves the grid.
    pub fn neighbor(&self, row: usize, col: usize, dir: Direction) -> Option<(usize, usize)> {
        let (d_row, d_col) = dir.offset();
        let r = row.checked_add_signed(d_row)?;
        let c = col.checked_add_signed(d_col)?;
        self.index(r, c).map(|_| (r, c))
    }

    /// Indices of the neighbors whose wires currently line up with `index`.
    pub fn connected_neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let piece = &self.pieces[index];
        self.mode.directions().iter().filter_map(move |&dir| {
            if !piece.has_wire(dir) {
                return None;
            }
            let (r, c) = self.neighbor(piece.row(), piece.col(), dir)?;
            let other = r * self.width + c;
            self.pieces[other].has_wire(dir.opposite()).then_some(other)
        })
    }

    pub fn power_source(&self) -> (usize, usize) {
        let p = &self.pieces[self.source];
        (p.row(), p.col())
    }

    pub fn power_source_index(&self) -> usize {
        self.source
    }

    pub(crate) fn set_power_source(&mut self, index: usize) {
        self.pieces[self.source].set_power_source(false);
        self.pieces[index].set_power_source(true);
        self.source = index;
    }

    /// Set facing wires on two neighboring pieces. Returns false (and changes
    /// nothing) if they are not neighbors under this board's mode.
    pub(crate) fn link(&mut self, a: usize, b: usize) -> bool {
        let dir = match self.pieces[a].direction_to(&self.pieces[b], self.mode) {
            Some(dir) => dir,
            None => return false,
        };
        self.pieces[a].set_wire(dir);
        self.pieces[b].set_wire(dir.opposite());
        true
    }

    /// Number of links in the wiring, counted as total stubs / 2.
    /// Rotation never changes it.
    pub fn wire_edge_count(&self) -> usize {
        let stubs: u32 = self.pieces.iter().map(Piece::wire_count).sum();
        (stubs / 2) as usize
    }

    /// Number of neighbor pairs whose wires currently line up.
    pub fn aligned_edge_count(&self) -> usize {
        let total: usize = (0..self.pieces.len())
            .map(|i| self.connected_neighbors(i).count())
            .sum();
        total / 2
    }

    pub fn powered_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_powered()).count()
    }

    pub fn is_all_powered(&self) -> bool {
        self.pieces.iter().all(Piece::is_powered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert!(Board::new(0, 3, WireMode::Orthogonal).is_err());
        assert!(Board::new(3, 0, WireMode::Orthogonal).is_err());
        assert_eq!(
            Board::check_dimensions(0, 4),
            Err(BoardError::InvalidDimensions { width: 0, height: 4 })
        );
    }

    #[test]
    fn rejects_oversized_dimensions() {
        let huge = usize::MAX / 2;
        assert!(matches!(
            Board::check_dimensions(huge, 3),
            Err(BoardError::TooLarge { .. })
        ));
        assert!(Board::new(MAX_CELLS + 1, 1, WireMode::Orthogonal).is_err());
        assert!(Board::check_dimensions(256, 256).is_ok());
        assert!(Board::check_dimensions(256, 257).is_err());
    }

    #[test]
    fn new_board_has_single_source_at_origin() {
        let board = Board::new(4, 3, WireMode::Orthogonal).unwrap();
        assert_eq!(board.len(), 12);
        assert_eq!(board.power_source(), (0, 0));
        assert_eq!(board.pieces().iter().filter(|p| p.is_power_source()).count(), 1);
        assert_eq!(board.get(2, 3).map(|p| (p.row(), p.col())), Some((2, 3)));
    }

    #[test]
    fn off_grid_lookups_are_absent() {
        let board = Board::new(3, 2, WireMode::Orthogonal).unwrap();
        assert!(board.get(2, 0).is_none());
        assert!(board.get(0, 3).is_none());
        assert_eq!(board.neighbor(0, 0, Direction::N), None);
        assert_eq!(board.neighbor(0, 0, Direction::W), None);
        assert_eq!(board.neighbor(1, 2, Direction::E), None);
        assert_eq!(board.neighbor(0, 0, Direction::SE), Some((1, 1)));
    }

    #[test]
    fn link_sets_facing_wires() {
        let mut board = Board::new(2, 2, WireMode::Orthogonal).unwrap();
        assert!(board.link(0, 1));
        assert!(board.get(0, 0).unwrap().has_wire(Direction::E));
        assert!(board.get(0, 1).unwrap().has_wire(Direction::W));
        // Diagonal neighbors are not linkable in orthogonal mode.
        assert!(!board.link(0, 3));
        assert_eq!(board.wire_edge_count(), 1);
        assert_eq!(board.aligned_edge_count(), 1);
        assert_eq!(board.connected_neighbors(0).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn moving_source_keeps_exactly_one() {
        let mut board = Board::new(3, 3, WireMode::Orthogonal).unwrap();
        board.set_power_source(4);
        assert_eq!(board.power_source(), (1, 1));
        assert!(!board.piece(0).is_power_source());
        assert_eq!(board.pieces().iter().filter(|p| p.is_power_source()).count(), 1);
    }
}
