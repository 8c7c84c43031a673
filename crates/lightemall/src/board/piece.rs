use crate::board::direction::{Direction, WireMode};

const ORTHOGONAL_MASK: u8 = 0b0101_0101;
const DIAGONAL_MASK: u8 = 0b1010_1010;

/// A single maze cell: its grid position plus an 8-bit wire mask
/// (bit `i` set means a wire stub towards `Direction::ALL[i]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    row: usize,
    col: usize,
    wires: u8,
    powered: bool,
    power_source: bool,
}

impl Piece {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            wires: 0,
            powered: false,
            power_source: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Raw wire mask.
    pub fn wires(&self) -> u8 {
        self.wires
    }

    pub fn has_wire(&self, dir: Direction) -> bool {
        (self.wires & dir.bit()) != 0
    }

    /// Directions this piece currently has wires towards, clockwise from north.
    pub fn wire_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.has_wire(*d))
    }

    pub fn wire_count(&self) -> u32 {
        self.wires.count_ones()
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn is_power_source(&self) -> bool {
        self.power_source
    }

    pub(crate) fn set_wire(&mut self, dir: Direction) {
        self.wires |= dir.bit();
    }

    pub(crate) fn set_powered(&mut self, powered: bool) {
        self.powered = powered;
    }

    pub(crate) fn set_power_source(&mut self, power_source: bool) {
        self.power_source = power_source;
    }

    /// Rotate one step clockwise.
    /// Orthogonal: quarter turn of N/E/S/W, diagonal bits untouched.
    /// Extended: eighth turn of all eight wires.
    pub fn rotate(&mut self, mode: WireMode) {
        let w = self.wires;
        self.wires = match mode {
            WireMode::Orthogonal => {
                let o = w & ORTHOGONAL_MASK;
                (((o << 2) | (o >> 6)) & ORTHOGONAL_MASK) | (w & DIAGONAL_MASK)
            }
            WireMode::Extended => w.rotate_left(1),
        };
    }

    /// Direction from this piece to `other`, if `other` is one of the
    /// neighbors `mode` allows.
    pub fn direction_to(&self, other: &Piece, mode: WireMode) -> Option<Direction> {
        let d_row = other.row as isize - self.row as isize;
        let d_col = other.col as isize - self.col as isize;
        Direction::from_offset(d_row, d_col).filter(|d| mode.allows(*d))
    }

    /// True if both pieces have wires facing each other across a shared
    /// boundary. Pieces that are not neighbors are never connected.
    pub fn is_connected_to(&self, other: &Piece, mode: WireMode) -> bool {
        match self.direction_to(other, mode) {
            Some(dir) => self.has_wire(dir) && other.has_wire(dir.opposite()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece_with(row: usize, col: usize, dirs: &[Direction]) -> Piece {
        let mut p = Piece::new(row, col);
        for d in dirs {
            p.set_wire(*d);
        }
        p
    }

    #[test]
    fn orthogonal_rotation_is_clockwise() {
        // W rotates to N, N rotates to E
        let mut p = piece_with(0, 0, &[Direction::W, Direction::N]);
        p.rotate(WireMode::Orthogonal);
        assert!(p.has_wire(Direction::N));
        assert!(p.has_wire(Direction::E));
        assert!(!p.has_wire(Direction::W));
        assert_eq!(p.wire_count(), 2);
    }

    #[test]
    fn extended_rotation_is_eighth_turn() {
        let mut p = piece_with(0, 0, &[Direction::NW, Direction::E]);
        p.rotate(WireMode::Extended);
        assert!(p.has_wire(Direction::N));
        assert!(p.has_wire(Direction::SE));
        assert_eq!(p.wire_count(), 2);
    }

    #[test]
    fn rotation_returns_after_full_cycle() {
        for mask in 0..=u8::MAX {
            let mut ortho = Piece::new(1, 1);
            ortho.wires = mask & ORTHOGONAL_MASK;
            let start = ortho;
            for _ in 0..WireMode::Orthogonal.rotation_steps() {
                ortho.rotate(WireMode::Orthogonal);
            }
            assert_eq!(ortho, start);

            let mut ext = Piece::new(1, 1);
            ext.wires = mask;
            let start = ext;
            for _ in 0..WireMode::Extended.rotation_steps() {
                ext.rotate(WireMode::Extended);
            }
            assert_eq!(ext, start);
        }
    }

    #[test]
    fn connection_needs_both_sides() {
        let a = piece_with(0, 0, &[Direction::E]);
        let b = piece_with(0, 1, &[Direction::W]);
        let c = piece_with(0, 1, &[Direction::N]);
        assert!(a.is_connected_to(&b, WireMode::Orthogonal));
        assert!(b.is_connected_to(&a, WireMode::Orthogonal));
        assert!(!a.is_connected_to(&c, WireMode::Orthogonal));
    }

    #[test]
    fn non_neighbors_never_connect() {
        let a = piece_with(0, 0, &[Direction::E, Direction::SE]);
        let far = piece_with(0, 2, &[Direction::W]);
        assert!(!a.is_connected_to(&far, WireMode::Extended));
        assert!(!a.is_connected_to(&a, WireMode::Extended));
    }

    #[test]
    fn diagonals_only_connect_in_extended_mode() {
        let a = piece_with(0, 0, &[Direction::SE]);
        let b = piece_with(1, 1, &[Direction::NW]);
        assert!(a.is_connected_to(&b, WireMode::Extended));
        assert!(b.is_connected_to(&a, WireMode::Extended));
        assert!(!a.is_connected_to(&b, WireMode::Orthogonal));
    }

    #[test]
    fn connection_is_symmetric_on_scrambled_board() {
        use crate::board::{maze, Board, Difficulty, Rng};

        let mode = WireMode::Extended;
        let mut board = Board::new(7, 5, mode).unwrap();
        let mut rng = Rng::new(1234);
        maze::generate(&mut board, Difficulty::Hard, &mut rng);
        maze::scramble(&mut board, &mut rng);

        let mut pairs = 0;
        for a in board.pieces() {
            for dir in Direction::ALL {
                let Some((row, col)) = board.neighbor(a.row(), a.col(), dir) else {
                    continue;
                };
                let b = board.get(row, col).unwrap();
                assert_eq!(a.is_connected_to(b, mode), b.is_connected_to(a, mode));
                pairs += 1;
            }
        }
        // Every interior and edge adjacency is seen from both ends.
        assert_eq!(pairs, 2 * (6 * 5 + 7 * 4 + 2 * 6 * 4));
    }
}
