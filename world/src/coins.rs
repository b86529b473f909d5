use std::collections::BTreeSet;

use maze_chase_core::{CellCoord, Maze};
use rand::Rng;

/// Set of corridor cells currently holding a coin.
///
/// The ledger keeps its cells in a sorted set so snapshots enumerate coins in
/// a deterministic order regardless of pickup history. Cells occupied by the
/// player or the pursuer are never eligible when a coin is placed, both at
/// the initial scatter and at every respawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CoinLedger {
    coins: BTreeSet<CellCoord>,
}

impl CoinLedger {
    /// Scatters `count` coins over distinct free corridor cells.
    ///
    /// Setup validation guarantees enough eligible cells remain after the
    /// two agent cells are excluded.
    pub(crate) fn scatter<R: Rng + ?Sized>(
        maze: &Maze,
        count: u32,
        occupied: [CellCoord; 2],
        rng: &mut R,
    ) -> Self {
        let mut eligible: Vec<CellCoord> = maze
            .corridors()
            .iter()
            .copied()
            .filter(|cell| !occupied.contains(cell))
            .collect();

        // Partial Fisher-Yates: the first `count` slots end up a uniform
        // sample without replacement.
        let mut coins = BTreeSet::new();
        for index in 0..(count as usize) {
            let pick = rng.gen_range(index..eligible.len());
            eligible.swap(index, pick);
            let _ = coins.insert(eligible[index]);
        }

        Self { coins }
    }

    /// Removes the coin at `cell`, reporting whether one was present.
    pub(crate) fn remove(&mut self, cell: CellCoord) -> bool {
        self.coins.remove(&cell)
    }

    /// Places a replacement coin on a uniformly chosen eligible cell.
    ///
    /// Eligible cells are corridor cells holding no coin and occupied by
    /// neither agent. Setup validation keeps this set non-empty for the whole
    /// life of a game.
    pub(crate) fn respawn<R: Rng + ?Sized>(
        &mut self,
        maze: &Maze,
        occupied: [CellCoord; 2],
        rng: &mut R,
    ) {
        let eligible: Vec<CellCoord> = maze
            .corridors()
            .iter()
            .copied()
            .filter(|cell| !self.coins.contains(cell) && !occupied.contains(cell))
            .collect();
        debug_assert!(!eligible.is_empty(), "validated games always have room");

        let pick = eligible[rng.gen_range(0..eligible.len())];
        let _ = self.coins.insert(pick);
    }

    /// Number of coins currently placed.
    pub(crate) fn len(&self) -> usize {
        self.coins.len()
    }

    /// Coin cells in ascending coordinate order.
    pub(crate) fn positions(&self) -> Vec<CellCoord> {
        self.coins.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CoinLedger;
    use maze_chase_core::{Cell, CellCoord, Maze};
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    fn open_maze(width: u32, height: u32) -> Maze {
        let cells = vec![Cell::Corridor; (width * height) as usize];
        Maze::from_cells(width, height, cells).expect("valid maze")
    }

    #[test]
    fn scatter_avoids_occupied_cells_and_duplicates() {
        let maze = open_maze(4, 4);
        let player = CellCoord::new(0, 0);
        let pursuer = CellCoord::new(3, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let ledger = CoinLedger::scatter(&maze, 14, [player, pursuer], &mut rng);
        assert_eq!(ledger.len(), 14);
        let positions = ledger.positions();
        assert!(!positions.contains(&player));
        assert!(!positions.contains(&pursuer));
    }

    #[test]
    fn respawn_picks_the_single_remaining_free_cell() {
        let maze = open_maze(2, 2);
        let player = CellCoord::new(0, 0);
        let pursuer = CellCoord::new(1, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let mut ledger = CoinLedger::scatter(&maze, 1, [player, pursuer], &mut rng);
        let placed = ledger.positions()[0];
        assert!(ledger.remove(placed));

        // Both agents excluded leaves two eligible cells.
        ledger.respawn(&maze, [player, pursuer], &mut rng);
        assert_eq!(ledger.len(), 1);
        let respawned = ledger.positions()[0];
        assert_ne!(respawned, player);
        assert_ne!(respawned, pursuer);
    }
}
