use ndarray::Array2;

/// Single coordinate axis used for board width, height, rows and columns.
pub type Coord = usize;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = usize;

/// In-bounds board position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Board position that may fall outside the grid, as produced from a pointer.
pub type Pos = (isize, isize);

/// Converts a signed position into grid coordinates when it lies inside `size`.
pub fn checked_coords((row, col): Pos, (rows, cols): Coord2) -> Option<Coord2> {
    let row = usize::try_from(row).ok()?;
    let col = usize::try_from(col).ok()?;
    (row < rows && col < cols).then_some((row, col))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, self.dim())
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// The 8-neighbourhood of a cell, clipped at the board edges.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}
