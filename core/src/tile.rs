use serde::{Deserialize, Serialize};

/// Value of a cell in the hidden mine layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiddenCell {
    /// No mine; holds the number of adjacent mines (0 for an empty cell).
    Clear(u8),
    Mine,
    /// The mine that was revealed and ended the game.
    HitMine,
    /// A safe cell that carried a flag when the game was lost.
    WrongFlag,
}

impl HiddenCell {
    /// Whether a mine sits here, including a hit one.
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine | Self::HitMine)
    }
}

impl Default for HiddenCell {
    fn default() -> Self {
        Self::Clear(0)
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

impl Overlay {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// What the presentation layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Hidden,
    Flagged,
    Empty,
    Number(u8),
    Mine,
    HitMine,
    WrongFlag,
}

impl Tile {
    pub const fn new(hidden: HiddenCell, overlay: Overlay) -> Self {
        match (overlay, hidden) {
            (Overlay::Hidden, _) => Self::Hidden,
            (Overlay::Flagged, _) => Self::Flagged,
            (Overlay::Revealed, HiddenCell::Clear(0)) => Self::Empty,
            (Overlay::Revealed, HiddenCell::Clear(count)) => Self::Number(count),
            (Overlay::Revealed, HiddenCell::Mine) => Self::Mine,
            (Overlay::Revealed, HiddenCell::HitMine) => Self::HitMine,
            (Overlay::Revealed, HiddenCell::WrongFlag) => Self::WrongFlag,
        }
    }

    // whether the tile is visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Hidden
    }
}
