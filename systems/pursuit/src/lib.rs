#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pursuit system implementing the pursuer's movement policy.
//!
//! The policy is local and carries no state beyond the current heading: it
//! never plans a path toward the player. In a straight corridor the pursuer
//! keeps going, at a junction it picks uniformly among the non-reversing
//! exits, and only a dead end forces it to turn around. Difficulty escalates
//! purely through the move cadence the world derives from its speed curve.

use maze_chase_core::{CellCoord, Direction, Maze};
use rand::Rng;

/// Advances the pursuer by exactly one cell.
///
/// Returns the new cell together with the direction taken, which becomes the
/// heading for the next step. The candidate set is pre-filtered to corridor
/// cells, so the returned cell is always legal; a pursuer standing on any
/// corridor cell of a generated maze has at least one exit.
#[must_use]
pub fn step<R: Rng + ?Sized>(
    cell: CellCoord,
    heading: Direction,
    maze: &Maze,
    rng: &mut R,
) -> (CellCoord, Direction) {
    let mut exits = available_exits(cell, maze);

    if let [(only_cell, only_direction)] = exits.as_slice() {
        // Dead end; reversing is the single legal option.
        return (*only_cell, *only_direction);
    }

    exits.retain(|(_, direction)| *direction != heading.reverse());
    debug_assert!(!exits.is_empty(), "corridor cells always have an exit");

    let (next_cell, next_direction) = exits[rng.gen_range(0..exits.len())];
    (next_cell, next_direction)
}

/// Corridor neighbors of `cell` paired with the direction that reaches them,
/// enumerated in canonical up, right, down, left order.
#[must_use]
pub fn available_exits(cell: CellCoord, maze: &Maze) -> Vec<(CellCoord, Direction)> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| Some((cell.stepped(direction)?, direction)))
        .filter(|(neighbor, _)| maze.is_corridor(*neighbor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{available_exits, step};
    use maze_chase_core::{Cell, CellCoord, Direction, Maze};
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    /// Straight 3x1 corridor: dead ends on both sides of the middle cell.
    fn corridor_row() -> Maze {
        Maze::from_cells(3, 1, vec![Cell::Corridor; 3]).expect("valid maze")
    }

    #[test]
    fn exits_enumerate_in_canonical_order() {
        let maze = corridor_row();
        let exits = available_exits(CellCoord::new(1, 0), &maze);
        assert_eq!(
            exits,
            vec![
                (CellCoord::new(2, 0), Direction::Right),
                (CellCoord::new(0, 0), Direction::Left),
            ]
        );
    }

    #[test]
    fn dead_end_forces_a_reversal() {
        let maze = corridor_row();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (cell, direction) = step(CellCoord::new(0, 0), Direction::Left, &maze, &mut rng);
        assert_eq!(cell, CellCoord::new(1, 0));
        assert_eq!(direction, Direction::Right);
    }

    #[test]
    fn straight_corridor_never_reverses() {
        let maze = corridor_row();
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (cell, direction) = step(CellCoord::new(1, 0), Direction::Right, &maze, &mut rng);
            assert_eq!(cell, CellCoord::new(2, 0));
            assert_eq!(direction, Direction::Right);
        }
    }
}
