use serde::{Deserialize, Serialize};

/// One of the eight wire directions, clockwise from north.
/// The discriminant is the bit index in a piece's wire mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Direction {
    N = 0,
    NE = 1,
    E = 2,
    SE = 3,
    S = 4,
    SW = 5,
    W = 6,
    NW = 7,
}

impl Direction {
    /// All eight directions in clockwise order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// The four orthogonal directions in clockwise order.
    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Bit for this direction inside a wire mask.
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub const fn is_diagonal(self) -> bool {
        (self as u8) % 2 == 1
    }

    pub const fn opposite(self) -> Direction {
        Direction::ALL[((self as u8 + 4) % 8) as usize]
    }

    /// Row/column step for this direction (rows grow southwards).
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }

    /// Inverse of [`Direction::offset`]. `None` for anything that is not a
    /// single step to one of the eight neighbors.
    pub fn from_offset(d_row: isize, d_col: isize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.offset() == (d_row, d_col))
    }
}

/// Which neighbor set a board uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireMode {
    /// Four orthogonal wires per piece.
    #[default]
    Orthogonal,
    /// Eight wires per piece, diagonals included ("hex" mode).
    Extended,
}

impl WireMode {
    pub fn from_extended(extended: bool) -> Self {
        if extended {
            WireMode::Extended
        } else {
            WireMode::Orthogonal
        }
    }

    pub fn is_extended(self) -> bool {
        self == WireMode::Extended
    }

    /// Directions a piece may wire towards in this mode.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            WireMode::Orthogonal => &Direction::ORTHOGONAL,
            WireMode::Extended => &Direction::ALL,
        }
    }

    /// Number of single rotations that bring a piece back to where it started.
    pub fn rotation_steps(self) -> u32 {
        match self {
            WireMode::Orthogonal => 4,
            WireMode::Extended => 8,
        }
    }

    pub fn allows(self, dir: Direction) -> bool {
        self.is_extended() || !dir.is_diagonal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
        assert_eq!(Direction::N.opposite(), Direction::S);
        assert_eq!(Direction::NE.opposite(), Direction::SW);
    }

    #[test]
    fn offset_round_trips() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            assert_eq!(Direction::from_offset(dr, dc), Some(dir));
        }
        assert_eq!(Direction::from_offset(0, 0), None);
        assert_eq!(Direction::from_offset(2, 0), None);
    }

    #[test]
    fn orthogonal_mode_rejects_diagonals() {
        assert!(WireMode::Orthogonal.allows(Direction::E));
        assert!(!WireMode::Orthogonal.allows(Direction::SE));
        assert!(WireMode::Extended.allows(Direction::SE));
        assert_eq!(WireMode::Orthogonal.directions().len(), 4);
        assert_eq!(WireMode::Extended.directions().len(), 8);
    }
}
