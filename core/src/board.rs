use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Solved,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// A minesweeper board: the hidden mine layout plus the player-visible overlay.
///
/// Every mutating call takes signed `(row, col)` indices and silently ignores
/// positions outside the grid, so pointer-derived coordinates can be passed
/// straight through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: MineLayout,
    overlay: Array2<Overlay>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    hit_mine: Option<Coord2>,
}

impl Board {
    /// Creates a board with `mines` mines placed uniformly at random.
    pub fn create(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = BoardConfig::new(width, height, mines)?;
        Ok(Self::with_generator(config, RandomMineGenerator::from_entropy()))
    }

    pub fn with_generator(config: BoardConfig, generator: impl MineGenerator) -> Self {
        let board = Self::with_layout(generator.generate(config));
        log::debug!(
            "New {}x{} board with {} mines",
            config.width,
            config.height,
            board.mine_count()
        );
        board
    }

    pub fn with_layout(layout: MineLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            overlay: Array2::default(size),
            revealed_count: 0,
            flagged_count: 0,
            hit_mine: None,
        }
    }

    /// Replaces both layers with a fresh random layout.
    pub fn reset(&mut self, width: Coord, height: Coord, mines: CellCount) -> Result<()> {
        *self = Self::create(width, height, mines)?;
        Ok(())
    }

    pub fn config(&self) -> BoardConfig {
        self.layout.config()
    }

    /// Shape as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Mines minus placed flags; negative when the player over-flags.
    pub fn mines_remaining(&self) -> isize {
        (self.layout.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn is_exploded(&self) -> bool {
        self.hit_mine.is_some()
    }

    pub fn is_solved(&self) -> bool {
        !self.is_exploded()
            && self.layout.total_cells() - self.revealed_count == self.layout.mine_count()
    }

    pub fn is_finished(&self) -> bool {
        self.is_exploded() || self.is_solved()
    }

    /// The mine whose reveal ended the game.
    pub fn hit_mine(&self) -> Option<Coord2> {
        self.hit_mine
    }

    pub fn hidden_at(&self, coords: Coord2) -> HiddenCell {
        self.layout[coords]
    }

    pub fn overlay_at(&self, coords: Coord2) -> Overlay {
        self.overlay[coords]
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        Tile::new(self.layout[coords], self.overlay[coords])
    }

    /// Every cell in row-major order with what should be drawn for it.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord2, Tile)> + '_ {
        self.overlay
            .indexed_iter()
            .map(|(coords, &overlay)| (coords, Tile::new(self.layout[coords], overlay)))
    }

    pub fn place_flag(&mut self, row: isize, col: isize) -> FlagOutcome {
        let Some(coords) = checked_coords((row, col), self.size()) else {
            return FlagOutcome::NoChange;
        };
        if self.is_finished() {
            return FlagOutcome::NoChange;
        }

        match self.overlay[coords] {
            Overlay::Hidden => {
                self.overlay[coords] = Overlay::Flagged;
                self.flagged_count += 1;
                FlagOutcome::Flagged
            }
            Overlay::Flagged => {
                self.overlay[coords] = Overlay::Hidden;
                self.flagged_count -= 1;
                FlagOutcome::Unflagged
            }
            Overlay::Revealed => FlagOutcome::NoChange,
        }
    }

    pub fn reveal_tile(&mut self, row: isize, col: isize) -> RevealOutcome {
        let Some(coords) = checked_coords((row, col), self.size()) else {
            return RevealOutcome::NoChange;
        };
        if self.is_finished() || self.overlay[coords] != Overlay::Hidden {
            return RevealOutcome::NoChange;
        }

        if self.layout.contains_mine(coords) {
            log::debug!("Mine hit at {:?}", coords);
            self.layout.set(coords, HiddenCell::HitMine);
            self.hit_mine = Some(coords);
            self.open(coords);
            self.reveal_all();
            return RevealOutcome::HitMine;
        }

        self.open(coords);
        if self.layout[coords] == HiddenCell::Clear(0) {
            self.flood_fill(coords);
        }

        if self.is_solved() {
            log::debug!("Board solved with {} cells revealed", self.revealed_count);
            RevealOutcome::Solved
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens the zero region around an already revealed empty cell.
    fn flood_fill(&mut self, start: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self
            .layout
            .iter_neighbors(start)
            .filter(|&pos| self.overlay[pos] == Overlay::Hidden)
            .collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            // queued more than once, or flagged
            if self.overlay[visit_coords] != Overlay::Hidden {
                continue;
            }

            self.open(visit_coords);
            log::trace!("Flood opened {:?}", visit_coords);

            if self.layout[visit_coords] == HiddenCell::Clear(0) {
                to_visit.extend(
                    self.layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| self.overlay[pos] == Overlay::Hidden),
                );
            }
        }
    }

    /// Finalizes visibility after a mine hit. Correct flags stay in place,
    /// wrong flags are exposed, everything else is revealed.
    fn reveal_all(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                match self.overlay[coords] {
                    Overlay::Revealed => {}
                    Overlay::Flagged if self.layout.contains_mine(coords) => {}
                    Overlay::Flagged => {
                        self.layout.set(coords, HiddenCell::WrongFlag);
                        self.open(coords);
                    }
                    Overlay::Hidden => self.open(coords),
                }
            }
        }
    }

    fn open(&mut self, coords: Coord2) {
        if self.overlay[coords] == Overlay::Flagged {
            self.flagged_count -= 1;
        }
        self.overlay[coords] = Overlay::Revealed;
        self.revealed_count += 1;
    }
}
