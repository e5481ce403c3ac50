use serde::{Deserialize, Serialize};

pub use board::*;
pub use controller::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use layout::*;
pub use settings::*;
pub use tile::*;
pub use types::*;

mod board;
mod controller;
mod error;
mod generator;
mod input;
mod layout;
mod settings;
mod tile;
mod types;

/// Board dimensions and mine count, validated on construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Rejects empty boards and boards that would have no safe cell left.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let invalid = GameError::InvalidConfig {
            width,
            height,
            mines,
        };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let total = width.checked_mul(height).ok_or(invalid)?;
        if mines >= total {
            return Err(invalid);
        }
        Ok(Self::new_unchecked(width, height, mines))
    }

    /// Grid shape as `(rows, cols)`, the order used to index both layers.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        self.width.saturating_mul(self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}
