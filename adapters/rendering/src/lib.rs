#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering and input contracts for Maze Chase adapters.
//!
//! The simulation core never touches pixels: backends receive a composed
//! [`Presentation`] derived from the immutable maze and a published snapshot,
//! and hand directional intents back through [`InputSource`]. Backend
//! internals (windowing, asset loading, audio, frame pacing) stay outside
//! this workspace entirely.

use anyhow::Result as AnyResult;
use glam::Vec2;
use maze_chase_core::{CellCoord, InputEvent, Maze, Snapshot};
use std::{error::Error, fmt};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Visual metrics and palette applied when composing scenes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Fill color for wall cells.
    pub wall_color: Color,
    /// Fill color for coins.
    pub coin_color: Color,
    /// Background color behind corridor cells.
    pub background_color: Color,
    /// Outline color around the playable grid.
    pub border_color: Color,
    /// Side length of a square grid cell in world units.
    pub cell_size: f32,
    /// Margin between the grid and the window edge in world units.
    pub border_size: f32,
    /// Radius of a rendered coin in world units.
    pub coin_radius: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            wall_color: Color::from_rgb_u8(167, 95, 59),
            coin_color: Color::from_rgb_u8(55, 120, 87),
            background_color: Color::from_rgb_u8(230, 223, 204),
            border_color: Color::from_rgb_u8(65, 37, 23),
            cell_size: 44.0,
            border_size: 30.0,
            coin_radius: 7.0,
        }
    }
}

/// World-space marker for a filled square tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Upper-left corner of the tile in world units.
    pub origin: Vec2,
    /// Side length of the tile in world units.
    pub size: f32,
}

/// World-space marker for a circular token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    /// Center of the token in world units.
    pub center: Vec2,
    /// Radius of the token in world units.
    pub radius: f32,
}

/// Declarative scene content composed from a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Wall tiles to fill.
    pub walls: Vec<Tile>,
    /// Coin tokens to draw over the corridors.
    pub coins: Vec<Token>,
    /// Tile highlighting the player's cell.
    pub player: Tile,
    /// Tile highlighting the pursuer's cell.
    pub pursuer: Tile,
    /// Outline around the playable grid: origin and size in world units.
    pub border: (Vec2, Vec2),
}

/// Complete description of one renderable frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Caption text carrying the level and score readout.
    pub window_title: String,
    /// Solid color used to clear the frame.
    pub clear_color: Color,
    /// Palette the backend should draw the scene with.
    pub theme: Theme,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Composes a frame from the immutable maze and a published snapshot.
    ///
    /// Pixel mapping follows the theme metrics: the cell at `(x, y)` spans a
    /// `cell_size` square offset by the border margin. Fails when the theme
    /// carries a non-positive cell size.
    pub fn compose(maze: &Maze, snapshot: &Snapshot, theme: Theme) -> Result<Self, RenderingError> {
        if theme.cell_size <= 0.0 {
            return Err(RenderingError::InvalidCellSize {
                cell_size: theme.cell_size,
            });
        }

        let mut walls = Vec::new();
        for x in 0..maze.width() {
            for y in 0..maze.height() {
                let cell = CellCoord::new(x, y);
                if !maze.is_corridor(cell) {
                    walls.push(Tile {
                        origin: cell_origin(cell, theme),
                        size: theme.cell_size,
                    });
                }
            }
        }

        let coins = snapshot
            .coins
            .iter()
            .map(|&cell| Token {
                center: cell_center(cell, theme),
                radius: theme.coin_radius,
            })
            .collect();

        let grid_size = Vec2::new(
            maze.width() as f32 * theme.cell_size,
            maze.height() as f32 * theme.cell_size,
        );

        Ok(Self {
            window_title: format!("LEVEL: {} - POINTS: {}", snapshot.level, snapshot.score),
            clear_color: theme.background_color,
            theme,
            scene: Scene {
                walls,
                coins,
                player: Tile {
                    origin: cell_origin(snapshot.player, theme),
                    size: theme.cell_size,
                },
                pursuer: Tile {
                    origin: cell_origin(snapshot.pursuer, theme),
                    size: theme.cell_size,
                },
                border: (Vec2::splat(theme.border_size), grid_size),
            },
        })
    }
}

/// Upper-left corner of a cell in world units.
#[must_use]
pub fn cell_origin(cell: CellCoord, theme: Theme) -> Vec2 {
    Vec2::new(
        cell.x() as f32 * theme.cell_size + theme.border_size,
        cell.y() as f32 * theme.cell_size + theme.border_size,
    )
}

/// Center point of a cell in world units.
#[must_use]
pub fn cell_center(cell: CellCoord, theme: Theme) -> Vec2 {
    cell_origin(cell, theme) + Vec2::splat(theme.cell_size / 2.0)
}

/// Menu screen shown before the first game and after a game over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuScreen {
    /// Final score of the finished game, if one just ended.
    pub final_score: Option<u32>,
}

impl MenuScreen {
    /// Instruction line offering the two menu actions.
    pub const INSTRUCTIONS: &'static str = "Press space for a new game - Q to quit";
}

/// Action selected on the menu screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start a fresh game.
    NewGame,
    /// Leave the application.
    Quit,
}

/// Directional intents and menu actions gathered for one host frame.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Key transitions observed since the previous frame, oldest first.
    pub events: Vec<InputEvent>,
    /// Menu action requested this frame, if any.
    pub menu_choice: Option<MenuChoice>,
}

/// Sink that presents published frames and menu screens.
///
/// Implementations must only read snapshots published by a completed tick;
/// the simulation is never shared mid-mutation. Pixel backends typically
/// run the pair through [`Presentation::compose`]; cell-oriented backends
/// read the maze and snapshot directly.
pub trait Renderer {
    /// Presents the state published by one completed tick.
    fn present(&mut self, maze: &Maze, snapshot: &Snapshot) -> AnyResult<()>;

    /// Presents the start or game-over menu.
    fn present_menu(&mut self, menu: &MenuScreen) -> AnyResult<()>;
}

/// Source of directional intents polled once per host frame.
pub trait InputSource {
    /// Collects the input gathered since the previous poll.
    fn poll(&mut self) -> AnyResult<FrameInput>;
}

/// Errors that can occur when composing presentations.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// The theme carried a non-positive cell size.
    InvalidCellSize {
        /// Provided cell size that failed validation.
        cell_size: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { cell_size } => {
                write!(f, "cell_size must be positive (received {cell_size})")
            }
        }
    }
}

impl Error for RenderingError {}
