use core::num::NonZeroU32;
use serde::{Deserialize, Serialize};

use crate::Pos;

/// Which pointer button, if any, was pressed this tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickKind {
    #[default]
    None,
    Left,
    Right,
}

/// Maps a screen point to the `(row, col)` under it, given where the board is drawn.
///
/// Uses floor division, so points above or left of the board map to negative
/// indices. Bounds are left to the board.
pub fn screen_to_index(screen: (i32, i32), offset: (i32, i32), tile_size: NonZeroU32) -> Pos {
    let tile = i64::from(tile_size.get());
    let (screen_x, screen_y) = screen;
    let (offset_x, offset_y) = offset;
    let row = (i64::from(screen_y) - i64::from(offset_y)).div_euclid(tile);
    let col = (i64::from(screen_x) - i64::from(offset_x)).div_euclid(tile);
    (row as isize, col as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(size: u32) -> NonZeroU32 {
        NonZeroU32::new(size).unwrap()
    }

    #[test]
    fn maps_points_inside_tiles() {
        assert_eq!(screen_to_index((0, 0), (0, 0), tile(32)), (0, 0));
        assert_eq!(screen_to_index((31, 31), (0, 0), tile(32)), (0, 0));
        assert_eq!(screen_to_index((32, 70), (0, 0), tile(32)), (2, 1));
    }

    #[test]
    fn applies_offset() {
        assert_eq!(screen_to_index((110, 45), (10, 20), tile(25)), (1, 4));
    }

    #[test]
    fn floors_points_before_origin() {
        assert_eq!(screen_to_index((5, 5), (10, 10), tile(32)), (-1, -1));
        assert_eq!(screen_to_index((-33, 0), (0, 0), tile(32)), (0, -2));
    }
}
