use ndarray::Array2;

use super::*;

/// Purely random placement: draws cells uniformly and retries on collision until every mine is placed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator with a seed drawn from the thread-local RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        use rand::prelude::*;

        let (rows, cols) = config.size();
        let mut mines: Array2<bool> = Array2::default((rows, cols));

        // a full board would never terminate below
        let target = if config.mines >= config.total_cells() {
            log::warn!(
                "Cannot place {} mines on {} cells, leaving one cell safe",
                config.mines,
                config.total_cells()
            );
            config.total_cells().saturating_sub(1)
        } else {
            config.mines
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed = 0;
        let mut attempts: u64 = 0;
        while placed < target {
            attempts += 1;
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            if !mines[coords] {
                mines[coords] = true;
                placed += 1;
            }
        }
        log::debug!(
            "Placed {} mines on {}x{} with seed {} after {} draws",
            placed,
            cols,
            rows,
            self.seed,
            attempts
        );

        MineLayout::from_mine_mask(&mines)
    }
}
