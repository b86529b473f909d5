#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Chase crates.
//!
//! This crate defines the vocabulary the rest of the workspace speaks: grid
//! coordinates and directions, the immutable [`Maze`] produced by the
//! generation system, the input events consumed by the simulation, the
//! [`Snapshot`] published to renderers after every tick, and the error
//! taxonomy surfaced during setup. All simulation state itself lives in the
//! world crate; nothing here is mutable once constructed.

use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// Cardinal movement directions available to the player and the pursuer.
///
/// The declaration order doubles as the canonical candidate ordering used by
/// the maze generator and the pursuit policy: up, right, down, left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing y indices.
    Up,
    /// Movement toward increasing x indices.
    Right,
    /// Movement toward increasing y indices.
    Down,
    /// Movement toward decreasing x indices.
    Left,
}

impl Direction {
    /// All four directions in canonical candidate order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit grid delta for the direction as a `(dx, dy)` pair.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Direction pointing exactly opposite to this one.
    #[must_use]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// Zero-based grid cell coordinate, distinct from any pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: u32,
    y: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Cell offset by the provided deltas, or `None` when the offset would
    /// leave the non-negative coordinate range.
    ///
    /// Upper grid bounds are a [`Maze`] concern; this only guards the zero
    /// edge so callers can chain the result into [`Maze::is_corridor`].
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<CellCoord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(CellCoord::new(x, y))
    }

    /// Neighboring cell one step in the provided direction, if representable.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Option<CellCoord> {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// State of a single maze grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Impassable cell; neither agent may enter.
    Wall,
    /// Carved cell open to the player, the pursuer, and coins.
    Corridor,
}

/// Immutable maze grid produced by the generation system.
///
/// The corridor cells form a perfect maze: a spanning tree over the room
/// sublattice (cells whose coordinates are both even) with exactly one simple
/// path between any two corridor cells. The corridor list is cached once at
/// construction so lookups never rescan the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    corridors: Vec<CellCoord>,
}

impl Maze {
    /// Seals a carved cell buffer into an immutable maze.
    ///
    /// The buffer is laid out column-major: the cell at `(x, y)` lives at
    /// index `x * height + y`. Fails with
    /// [`GenerationError::InvalidDimensions`] when either dimension is zero
    /// or the buffer length does not match `width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Result<Self, GenerationError> {
        if width == 0 || height == 0 || cells.len() != (width as usize) * (height as usize) {
            return Err(GenerationError::InvalidDimensions { width, height });
        }

        let mut corridors = Vec::new();
        for x in 0..width {
            for y in 0..height {
                let index = (x as usize) * (height as usize) + (y as usize);
                if cells[index] == Cell::Corridor {
                    corridors.push(CellCoord::new(x, y));
                }
            }
        }

        Ok(Self {
            width,
            height,
            cells,
            corridors,
        })
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether the cell lies inside the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, cell: CellCoord) -> bool {
        cell.x() < self.width && cell.y() < self.height
    }

    /// Reports whether the cell is a carved corridor cell.
    ///
    /// Out-of-bounds cells are walls as far as movement is concerned.
    #[must_use]
    pub fn is_corridor(&self, cell: CellCoord) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }
        let index = (cell.x() as usize) * (self.height as usize) + (cell.y() as usize);
        self.cells[index] == Cell::Corridor
    }

    /// All corridor cells in column-major order.
    #[must_use]
    pub fn corridors(&self) -> &[CellCoord] {
        &self.corridors
    }

    /// Number of carved corridor cells.
    #[must_use]
    pub fn corridor_count(&self) -> usize {
        self.corridors.len()
    }
}

/// Directional key transition reported by an input source.
///
/// The simulation keeps a held-key ledger from these events: the most
/// recently pressed direction governs periodic movement, and releasing it
/// falls back to the previously held key without re-triggering immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A directional key transitioned from released to held.
    Pressed(Direction),
    /// A directional key transitioned from held to released.
    Released(Direction),
}

/// Read-only view of the simulation published after a completed tick.
///
/// Renderers consume this value together with the immutable maze; they never
/// observe the simulation mid-mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cell currently occupied by the player.
    pub player: CellCoord,
    /// Cell currently occupied by the pursuer.
    pub pursuer: CellCoord,
    /// Direction the pursuer is currently heading.
    pub pursuer_heading: Direction,
    /// Cells currently holding a coin, in ascending coordinate order.
    pub coins: Vec<CellCoord>,
    /// Coins collected since the game began.
    pub score: u32,
    /// Difficulty level driving the pursuer's move cadence.
    pub level: u32,
}

/// Errors surfaced while generating a maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationError {
    /// Either dimension was zero, or a cell buffer did not match them.
    InvalidDimensions {
        /// Requested grid width.
        width: u32,
        /// Requested grid height.
        height: u32,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "maze dimensions must be positive (received {width}x{height})"
                )
            }
        }
    }
}

impl Error for GenerationError {}

/// Errors surfaced while constructing a game.
///
/// All of these are detected during setup; a validated game never fails at
/// tick time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// Maze generation rejected the requested dimensions.
    Generation(GenerationError),
    /// The coin count leaves no free corridor cell for a respawn.
    NoAvailableCell {
        /// Coins requested by the configuration.
        coins: u32,
        /// Corridor cells available in the generated maze.
        corridors: u32,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generation(error) => write!(f, "{error}"),
            Self::NoAvailableCell { coins, corridors } => {
                write!(
                    f,
                    "coin count must stay below the corridor count \
                     ({coins} coins requested, {corridors} corridor cells)"
                )
            }
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Generation(error) => Some(error),
            Self::NoAvailableCell { .. } => None,
        }
    }
}

impl From<GenerationError> for GameError {
    fn from(error: GenerationError) -> Self {
        Self::Generation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, CellCoord, Direction, GameError, GenerationError, InputEvent, Maze};
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn reverse_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.reverse().reverse(), direction);
        }
    }

    #[test]
    fn deltas_cancel_against_the_reverse() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let (rx, ry) = direction.reverse().delta();
            assert_eq!((dx + rx, dy + ry), (0, 0));
        }
    }

    #[test]
    fn stepping_off_the_zero_edge_yields_none() {
        assert_eq!(CellCoord::new(0, 0).stepped(Direction::Up), None);
        assert_eq!(CellCoord::new(0, 0).stepped(Direction::Left), None);
        assert_eq!(
            CellCoord::new(0, 0).stepped(Direction::Right),
            Some(CellCoord::new(1, 0))
        );
    }

    fn two_by_one() -> Maze {
        Maze::from_cells(2, 1, vec![Cell::Corridor, Cell::Wall]).expect("valid maze")
    }

    #[test]
    fn corridor_lookup_matches_the_cell_buffer() {
        let maze = two_by_one();
        assert!(maze.is_corridor(CellCoord::new(0, 0)));
        assert!(!maze.is_corridor(CellCoord::new(1, 0)));
        assert!(!maze.is_corridor(CellCoord::new(2, 0)));
        assert_eq!(maze.corridors(), &[CellCoord::new(0, 0)]);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let error = Maze::from_cells(0, 3, Vec::new()).expect_err("zero width must fail");
        assert_eq!(
            error,
            GenerationError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn mismatched_cell_buffers_are_rejected() {
        let error =
            Maze::from_cells(2, 2, vec![Cell::Wall; 3]).expect_err("short buffer must fail");
        assert_eq!(
            error,
            GenerationError::InvalidDimensions {
                width: 2,
                height: 2
            }
        );
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn cell_coord_round_trips_through_bincode() {
        assert_round_trip(&CellCoord::new(11, 7));
    }

    #[test]
    fn input_event_round_trips_through_bincode() {
        assert_round_trip(&InputEvent::Pressed(Direction::Left));
        assert_round_trip(&InputEvent::Released(Direction::Down));
    }

    #[test]
    fn game_error_round_trips_through_bincode() {
        assert_round_trip(&GameError::NoAvailableCell {
            coins: 40,
            corridors: 17,
        });
    }
}
