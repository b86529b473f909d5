#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Maze generation system that carves perfect mazes via randomized
//! depth-first search.
//!
//! Rooms live on the even-parity sublattice anchored at `(0, 0)`. The carver
//! walks two cells at a time so a wall always separates neighboring rooms
//! until the connecting door between them is explicitly opened, which keeps
//! the carved corridor set a spanning tree: every room is carved exactly
//! once, so no second path between two rooms can ever appear.

use maze_chase_core::{Cell, CellCoord, Direction, GenerationError, Maze};
use rand::Rng;

/// Distance between neighboring rooms on the sublattice.
const ROOM_STRIDE: i32 = 2;

/// Carves a maze of the requested dimensions using the injected randomness.
///
/// Fails with [`GenerationError::InvalidDimensions`] when either dimension is
/// zero. Given the same random source state, the produced maze is exactly
/// reproducible: candidate directions are always enumerated in the canonical
/// up, right, down, left order and a single uniform draw selects among them.
pub fn generate<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<Maze, GenerationError> {
    if width == 0 || height == 0 {
        return Err(GenerationError::InvalidDimensions { width, height });
    }

    let mut carver = Carver::all_walls(width, height);
    carver.run(rng);
    Maze::from_cells(width, height, carver.cells)
}

/// Mutable cell buffer the depth-first walk carves into.
struct Carver {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Carver {
    fn all_walls(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; (width as usize) * (height as usize)],
        }
    }

    fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let start = CellCoord::new(0, 0);
        self.carve(start);

        // The trail records every room on the current walk; its top is the
        // carver's position, and popping it backtracks out of dead ends.
        let mut trail = vec![start];
        while let Some(&current) = trail.last() {
            let candidates = self.candidate_rooms(current);
            let Some(&(door, room)) = candidates.get(choose(rng, candidates.len())) else {
                let _ = trail.pop();
                continue;
            };

            self.carve(door);
            self.carve(room);
            trail.push(room);
        }
    }

    /// Uncarved rooms reachable with one two-cell stride from `current`,
    /// paired with the door cell that would connect them.
    fn candidate_rooms(&self, current: CellCoord) -> Vec<(CellCoord, CellCoord)> {
        let mut candidates = Vec::with_capacity(Direction::ALL.len());
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let Some(door) = current.offset(dx, dy) else {
                continue;
            };
            let Some(room) = current.offset(dx * ROOM_STRIDE, dy * ROOM_STRIDE) else {
                continue;
            };
            if self.in_bounds(room) && !self.is_carved(room) {
                candidates.push((door, room));
            }
        }
        candidates
    }

    fn in_bounds(&self, cell: CellCoord) -> bool {
        cell.x() < self.width && cell.y() < self.height
    }

    fn is_carved(&self, cell: CellCoord) -> bool {
        self.cells[self.index(cell)] == Cell::Corridor
    }

    fn carve(&mut self, cell: CellCoord) {
        let index = self.index(cell);
        self.cells[index] = Cell::Corridor;
    }

    fn index(&self, cell: CellCoord) -> usize {
        (cell.x() as usize) * (self.height as usize) + (cell.y() as usize)
    }
}

/// Uniform index draw that tolerates an empty candidate set.
fn choose<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    rng.gen_range(0..len)
}
