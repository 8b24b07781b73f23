//! Piece masks and the canonical shape catalog.
//!
//! Every piece is a 4x4 occupancy grid in a single canonical orientation.
//! Rotation produces a fresh mask; the catalog entries themselves are
//! constant and never mutated.

use blockfall_types::{PieceKind, MASK_SIZE};

/// A 4x4 binary occupancy grid, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    rows: [[bool; MASK_SIZE]; MASK_SIZE],
}

impl Mask {
    /// Build a mask from 0/1 rows, top to bottom.
    pub const fn from_rows(rows: [[u8; MASK_SIZE]; MASK_SIZE]) -> Self {
        let mut out = [[false; MASK_SIZE]; MASK_SIZE];
        let mut row = 0;
        while row < MASK_SIZE {
            let mut col = 0;
            while col < MASK_SIZE {
                out[row][col] = rows[row][col] != 0;
                col += 1;
            }
            row += 1;
        }
        Self { rows: out }
    }

    /// 90 degrees clockwise: `rotated[col][3 - row] = mask[row][col]`.
    ///
    /// Four applications are the identity. Callers that may reject the
    /// rotation keep the original mask and only commit the returned copy.
    pub fn rotated_cw(self) -> Self {
        let mut out = [[false; MASK_SIZE]; MASK_SIZE];
        for row in 0..MASK_SIZE {
            for col in 0..MASK_SIZE {
                out[col][MASK_SIZE - 1 - row] = self.rows[row][col];
            }
        }
        Self { rows: out }
    }

    pub fn is_occupied(self, col: usize, row: usize) -> bool {
        self.rows[row][col]
    }

    /// Occupied cells as `(col, row)` offsets within the mask.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        let rows = self.rows;
        (0..MASK_SIZE).flat_map(move |row| {
            (0..MASK_SIZE).filter_map(move |col| rows[row][col].then_some((col, row)))
        })
    }
}

// The canonical catalog. The I piece is a vertical bar in mask column 2;
// the others sit in the upper-left 3x4 region of their grids.
const I_MASK: Mask = Mask::from_rows([
    [0, 0, 1, 0],
    [0, 0, 1, 0],
    [0, 0, 1, 0],
    [0, 0, 1, 0],
]);

const O_MASK: Mask = Mask::from_rows([
    [0, 0, 0, 0],
    [0, 1, 1, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
]);

const T_MASK: Mask = Mask::from_rows([
    [0, 0, 0, 0],
    [0, 1, 0, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
]);

const S_MASK: Mask = Mask::from_rows([
    [0, 0, 0, 0],
    [0, 1, 1, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
]);

const Z_MASK: Mask = Mask::from_rows([
    [0, 0, 0, 0],
    [0, 1, 1, 0],
    [0, 0, 1, 1],
    [0, 0, 0, 0],
]);

const J_MASK: Mask = Mask::from_rows([
    [0, 0, 0, 0],
    [0, 1, 0, 0],
    [0, 1, 1, 1],
    [0, 0, 0, 0],
]);

const L_MASK: Mask = Mask::from_rows([
    [0, 0, 0, 0],
    [0, 0, 1, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
]);

/// Canonical mask for a piece kind. Pure, total, constant data.
pub fn mask_of(kind: PieceKind) -> Mask {
    match kind {
        PieceKind::I => I_MASK,
        PieceKind::O => O_MASK,
        PieceKind::T => T_MASK,
        PieceKind::S => S_MASK,
        PieceKind::Z => Z_MASK,
        PieceKind::J => J_MASK,
        PieceKind::L => L_MASK,
    }
}
