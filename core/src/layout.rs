use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The hidden layer of a board: where the mines are and how many touch each safe cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    cells: Array2<HiddenCell>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Builds the layer from a `(rows, cols)` mine mask, counting neighbours once.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let mut mine_count = 0;
        let cells = Array2::from_shape_fn(mine_mask.dim(), |coords| {
            if mine_mask[coords] {
                mine_count += 1;
                HiddenCell::Mine
            } else {
                let adjacent = mine_mask
                    .iter_neighbors(coords)
                    .filter(|&pos| mine_mask[pos])
                    .count();
                // at most 8 neighbours
                HiddenCell::Clear(adjacent as u8)
            }
        });
        Self { cells, mine_count }
    }

    pub fn from_mine_coords(config: BoardConfig, mine_coords: &[Coord2]) -> Result<Self> {
        let invalid = GameError::InvalidConfig {
            width: config.width,
            height: config.height,
            mines: mine_coords.len(),
        };
        if config.width == 0 || config.height == 0 {
            return Err(invalid);
        }
        let mut mine_mask: Array2<bool> = Array2::default(config.size());
        for &coords in mine_coords {
            let slot = mine_mask.get_mut(coords).ok_or(invalid)?;
            *slot = true;
        }

        let layout = Self::from_mine_mask(&mine_mask);
        if layout.mine_count >= layout.total_cells() {
            return Err(invalid);
        }
        Ok(layout)
    }

    pub fn config(&self) -> BoardConfig {
        let (height, width) = self.size();
        BoardConfig::new_unchecked(width, height, self.mine_count)
    }

    /// Shape as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.cells.dim()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub(crate) fn set(&mut self, coords: Coord2, cell: HiddenCell) {
        self.cells[coords] = cell;
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = HiddenCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords]
    }
}
