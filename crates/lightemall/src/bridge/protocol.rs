//! Packed cell buffer read directly from wasm memory.
//! Must stay in sync with the TypeScript reader.
//!
//! Layout: one `CellRecord` (2 bytes) per cell, row-major.
//! ```text
//! byte 0: wire mask, bit i = Direction::ALL[i] (N, NE, E, SE, S, SW, W, NW)
//! byte 1: flags (bit 0 = powered, bit 1 = power source)
//! ```

use bytemuck::{Pod, Zeroable};

use crate::board::{Board, Piece};

/// Protocol version, bumped when the record layout changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Bytes per cell record (wire format, never changes).
pub const CELL_RECORD_BYTES: usize = 2;

pub const FLAG_POWERED: u8 = 1 << 0;
pub const FLAG_POWER_SOURCE: u8 = 1 << 1;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct CellRecord {
    pub wires: u8,
    pub flags: u8,
}

impl CellRecord {
    pub fn is_powered(&self) -> bool {
        self.flags & FLAG_POWERED != 0
    }

    pub fn is_power_source(&self) -> bool {
        self.flags & FLAG_POWER_SOURCE != 0
    }
}

impl From<&Piece> for CellRecord {
    fn from(piece: &Piece) -> Self {
        let mut flags = 0;
        if piece.is_powered() {
            flags |= FLAG_POWERED;
        }
        if piece.is_power_source() {
            flags |= FLAG_POWER_SOURCE;
        }
        Self {
            wires: piece.wires(),
            flags,
        }
    }
}

/// Rewrite `out` with one record per board cell.
pub fn pack_cells(board: &Board, out: &mut Vec<CellRecord>) {
    out.clear();
    out.extend(board.pieces().iter().map(CellRecord::from));
}

/// View packed records as raw bytes.
pub fn cell_bytes(records: &[CellRecord]) -> &[u8] {
    bytemuck::cast_slice(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::power::update_power;
    use crate::board::WireMode;

    #[test]
    fn record_size_matches_wire_format() {
        assert_eq!(std::mem::size_of::<CellRecord>(), CELL_RECORD_BYTES);
    }

    #[test]
    fn packs_board_row_major() {
        let mut board = Board::new(3, 2, WireMode::Orthogonal).unwrap();
        board.link(0, 1);
        update_power(&mut board, None);

        let mut records = Vec::new();
        pack_cells(&board, &mut records);
        assert_eq!(records.len(), 6);
        assert!(records[0].is_power_source());
        assert!(records[0].is_powered());
        assert!(records[1].is_powered());
        assert!(!records[1].is_power_source());
        assert!(!records[2].is_powered());

        let bytes = cell_bytes(&records);
        assert_eq!(bytes.len(), 6 * CELL_RECORD_BYTES);
        // (0,0) has only an east wire: bit 2.
        assert_eq!(bytes[0], 0b0000_0100);
        assert_eq!(bytes[1], FLAG_POWERED | FLAG_POWER_SOURCE);
    }
}
