//! The game board: a fixed-size grid of permanently occupied cells.
//!
//! Uses flat row-major storage (index `y * width + x`). Coordinates are
//! signed so callers can probe positions outside the grid; out-of-range
//! queries read as not filled and out-of-range writes are ignored.

use blockfall_types::Cell;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board. Zero width or height is a configuration
    /// error.
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; usize::from(width) * usize::from(height)],
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Flat index for in-range coordinates.
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    pub fn in_bounds(&self, x: i16, y: i16) -> bool {
        x >= 0 && x < i16::from(self.width) && y >= 0 && y < i16::from(self.height)
    }

    /// True when the cell is occupied. Out-of-range coordinates read as not
    /// filled; the engine bounds-checks separately.
    pub fn is_filled(&self, x: i16, y: i16) -> bool {
        self.index(x, y)
            .map(|idx| self.cells[idx].is_filled())
            .unwrap_or(false)
    }

    /// Mark a cell occupied. Out-of-range writes are ignored.
    pub fn set_filled(&mut self, x: i16, y: i16) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::Filled;
        }
    }

    #[cfg(test)]
    pub fn set_empty(&mut self, x: i16, y: i16) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::Empty;
        }
    }

    /// True when every cell in row `y` is filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= usize::from(self.height) {
            return false;
        }
        let start = y * usize::from(self.width);
        let end = start + usize::from(self.width);
        self.cells[start..end].iter().all(|cell| cell.is_filled())
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Single top-to-bottom sweep: each full row is compacted immediately
    /// (all rows above shift down one, the top row becomes empty) before the
    /// sweep continues at the next index. This is deliberately not a
    /// collect-then-clear pass; the sequential shifts are what make a single
    /// call handle multi-row clears correctly.
    pub fn clear_full_lines(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..usize::from(self.height) {
            if !self.is_row_full(y) {
                continue;
            }
            self.shift_down_onto(y);
            cleared += 1;
        }
        cleared
    }

    /// Drop every row above `y` down one, overwriting `y`; empty the top row.
    fn shift_down_onto(&mut self, y: usize) {
        let width = usize::from(self.width);
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            let dst = row * width;
            self.cells.copy_within(src..src + width, dst);
        }
        for cell in &mut self.cells[..width] {
            *cell = Cell::Empty;
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::Empty;
        }
    }

    /// Read-only rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(usize::from(self.width))
    }

    /// Copy of the cell grid, for snapshots.
    pub(crate) fn cells(&self) -> Vec<Cell> {
        self.cells.clone()
    }
}
