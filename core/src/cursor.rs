use serde::{Deserialize, Serialize};

use crate::*;

/// Highlighted cell on a wrap-around grid of `len` cells, `side` wide.
///
/// Vertical steps move by `side` cells modulo `len`, so on a grid whose last
/// row is partial the columns drift rather than staying fixed. Horizontal
/// steps wrap within the current row; the last row is only as wide as the
/// cells it actually holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    position: CellIndex,
    len: CellCount,
    side: CellCount,
}

impl Cursor {
    /// Cursor at cell 0. `len` must be non-zero.
    pub(crate) fn new(len: CellCount) -> Self {
        debug_assert!(len > 0);
        Self {
            position: 0,
            len,
            side: grid_side(len),
        }
    }

    pub fn position(&self) -> CellIndex {
        self.position
    }

    pub fn side(&self) -> CellCount {
        self.side
    }

    /// Row-major `(column, row)` of the current position.
    pub fn column_row(&self) -> (CellIndex, CellIndex) {
        (self.position % self.side, self.position / self.side)
    }

    /// Where a step in `direction` lands, without moving.
    pub fn peek(&self, direction: Direction) -> CellIndex {
        use Direction::*;

        let (position, len, side) = (self.position, self.len, self.side);
        let row_start = position - position % side;
        let row_width = side.min(len - row_start);
        let column = position - row_start;

        match direction {
            Down => (position + side) % len,
            Up => (position + len - side % len) % len,
            Right if column == row_width - 1 => row_start,
            Right => position + 1,
            Left if column == 0 => row_start + row_width - 1,
            Left => position - 1,
        }
    }

    pub fn step(&mut self, direction: Direction) -> CellIndex {
        self.position = self.peek(direction);
        self.position
    }

    pub fn jump_to(&mut self, index: CellIndex) -> Result<CellIndex> {
        if index >= self.len {
            return Err(GameError::InvalidIndex);
        }
        self.position = index;
        Ok(index)
    }
}
