use serde::{Deserialize, Serialize};

/// Position of an item in grid reading order (row-major).
pub type CellIndex = usize;

/// Count type used for item totals and the discovered counter.
pub type CellCount = usize;

/// Cardinal direction of a single cursor step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Side length of the near-square layout holding `len` cells, `ceil(sqrt(len))`.
pub const fn grid_side(len: CellCount) -> CellCount {
    let side = len.isqrt();
    if side * side < len { side + 1 } else { side }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_side_rounds_up_to_cover_all_cells() {
        assert_eq!(grid_side(1), 1);
        assert_eq!(grid_side(2), 2);
        assert_eq!(grid_side(4), 2);
        assert_eq!(grid_side(5), 3);
        assert_eq!(grid_side(9), 3);
        assert_eq!(grid_side(10), 4);
        assert_eq!(grid_side(16), 4);
        assert_eq!(grid_side(17), 5);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
