//! Conversion between the packed bitboard form and the 8x8 boolean-matrix
//! form used by host programs.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;

/// One player's disks as an 8x8 boolean matrix, indexed `[y][x]` with
/// `[0][0]` the top-left corner.
pub type PieceMatrix = [[bool; EDGE_LENGTH]; EDGE_LENGTH];

/// Pack a boolean matrix into a bitboard: the 64 cells are read in row-major
/// order as a big-endian integer, so the top-left cell lands in the most
/// significant bit.
pub fn serialize(matrix: &PieceMatrix) -> Bitboard {
    let mut packed: u64 = 0;
    for row in matrix {
        for &occupied in row {
            packed = (packed << 1) | occupied as u64;
        }
    }
    Bitboard(packed)
}

/// Unpack a bitboard into a boolean matrix; the inverse of [`serialize`].
pub fn deserialize(board: Bitboard) -> PieceMatrix {
    let mut matrix = [[false; EDGE_LENGTH]; EDGE_LENGTH];
    let mut squares = board.squares();
    for row in matrix.iter_mut() {
        for cell in row.iter_mut() {
            *cell = squares.next().unwrap();
        }
    }
    matrix
}
