#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state for Maze Chase.
//!
//! [`Game`] is the sole owner of every mutable entity: the player, the
//! pursuer, the coin ledger, the score, and the [`Scheduler`] counting ticks.
//! Adapters feed it [`InputEvent`] values and call [`Game::tick`] once per
//! host frame; each tick publishes an immutable [`Snapshot`] together with
//! the game-over flag, so renderers never observe state mid-mutation.

mod coins;
mod scheduler;

pub use scheduler::{Scheduler, SpeedCurve};

use coins::CoinLedger;
use maze_chase_core::{CellCoord, Direction, GameError, InputEvent, Maze, Snapshot};
use maze_chase_system_generation as generation;
use maze_chase_system_pursuit as pursuit;
use rand::Rng;

/// Immutable tuning values a game is constructed from.
///
/// Keeping the knobs in an explicit value instead of module-level constants
/// lets tests run many independently tuned simulations side by side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Maze width in grid cells.
    pub width: u32,
    /// Maze height in grid cells.
    pub height: u32,
    /// Coins kept on the board at all times.
    pub coins_in_start: u32,
    /// Host loop frequency the cadence thresholds are expressed against.
    pub frame_rate: u32,
    /// Ticks a held key waits between periodic player moves.
    pub player_moving_rate: u32,
    /// Ticks between difficulty level increments.
    pub ghost_level_rate: u32,
    /// Pursuer speed curve indexed by level.
    pub speed_curve: SpeedCurve,
}

impl Default for Config {
    fn default() -> Self {
        let frame_rate = 60;
        Self {
            width: 27,
            height: 17,
            coins_in_start: 40,
            frame_rate,
            player_moving_rate: frame_rate / 12,
            ghost_level_rate: 25 * frame_rate,
            speed_curve: SpeedCurve::default(),
        }
    }
}

impl Config {
    /// Default tuning applied to a maze of the provided dimensions.
    #[must_use]
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// Outcome of one completed simulation tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Read-only view of the state after the tick finished.
    pub snapshot: Snapshot,
    /// True exactly when the player and the pursuer share a cell.
    pub game_over: bool,
}

/// Authoritative Maze Chase simulation.
#[derive(Clone, Debug)]
pub struct Game {
    config: Config,
    maze: Maze,
    player: CellCoord,
    pursuer: CellCoord,
    pursuer_heading: Direction,
    coins: CoinLedger,
    score: u32,
    scheduler: Scheduler,
    /// Held-key ledger, most recently pressed last.
    held: Vec<Direction>,
}

impl Game {
    /// Generates a maze and places the starting entities.
    ///
    /// The player starts at `(0, 0)` and the pursuer on the bottom-right
    /// room cell heading right; with odd dimensions that is the exact
    /// opposite corner.
    /// Fails with [`GameError::Generation`] for non-positive dimensions and
    /// with [`GameError::NoAvailableCell`] when the configured coin count
    /// could exhaust the free corridor cells, so no tick can ever hit a
    /// fatal respawn path later.
    pub fn new<R: Rng + ?Sized>(config: Config, rng: &mut R) -> Result<Self, GameError> {
        let maze = generation::generate(config.width, config.height, rng)?;

        // Two cells stay reserved for the agents at any placement site.
        // Compared without addition so extreme coin counts cannot overflow.
        let corridors = maze.corridor_count() as u32;
        if config.coins_in_start > corridors.saturating_sub(2) {
            return Err(GameError::NoAvailableCell {
                coins: config.coins_in_start,
                corridors,
            });
        }

        let player = CellCoord::new(0, 0);
        // Room cells sit on even coordinates and are always carved.
        let pursuer = CellCoord::new(
            (config.width - 1) / 2 * 2,
            (config.height - 1) / 2 * 2,
        );
        let coins = CoinLedger::scatter(&maze, config.coins_in_start, [player, pursuer], rng);

        Ok(Self {
            config,
            maze,
            player,
            pursuer,
            pursuer_heading: Direction::Right,
            coins,
            score: 0,
            scheduler: Scheduler::new(),
            held: Vec::new(),
        })
    }

    /// Consumes one directional key transition.
    ///
    /// A key-down pushes the direction on the held ledger, zeroes the player
    /// move timer, and attempts a move immediately; the periodic re-trigger
    /// in [`Game::tick`] then takes over while the key stays held. A key-up
    /// drops the direction from the ledger without granting the next held
    /// key an immediate move.
    pub fn apply_input<R: Rng + ?Sized>(&mut self, event: InputEvent, rng: &mut R) {
        match event {
            InputEvent::Pressed(direction) => {
                self.release(direction);
                self.held.push(direction);
                self.scheduler.reset_player_timer();
                self.step_player(direction, rng);
            }
            InputEvent::Released(direction) => {
                self.release(direction);
            }
        }
    }

    /// Advances the simulation by one frame tick.
    ///
    /// Order per tick: periodic player move, coin pickup, pursuer move,
    /// collision check, timer and level advance.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.scheduler.player_due(self.config.player_moving_rate) {
            if let Some(&direction) = self.held.last() {
                self.scheduler.reset_player_timer();
                self.step_player(direction, rng);
            }
        }

        if self
            .scheduler
            .pursuer_due(&self.config.speed_curve, self.config.frame_rate)
        {
            self.scheduler.reset_pursuer_timer();
            let (cell, heading) = pursuit::step(self.pursuer, self.pursuer_heading, &self.maze, rng);
            self.pursuer = cell;
            self.pursuer_heading = heading;
        }

        let game_over = self.player == self.pursuer;
        self.scheduler.advance(self.config.ghost_level_rate);
        debug_assert_eq!(self.coins.len(), self.config.coins_in_start as usize);

        TickOutcome {
            snapshot: query::snapshot(self),
            game_over,
        }
    }

    /// Moves the player one cell if the target is a corridor, then resolves
    /// a coin pickup on the resulting cell. Illegal moves are silently
    /// rejected, never errors.
    fn step_player<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) {
        let Some(target) = self.player.stepped(direction) else {
            return;
        };
        if !self.maze.is_corridor(target) {
            return;
        }

        self.player = target;
        if self.coins.remove(self.player) {
            self.score += 1;
            self.coins.respawn(&self.maze, [self.player, self.pursuer], rng);
        }
    }

    fn release(&mut self, direction: Direction) {
        if let Some(index) = self.held.iter().position(|held| *held == direction) {
            let _ = self.held.remove(index);
        }
    }
}

/// Query functions that provide read-only access to the game state.
pub mod query {
    use super::{CellCoord, Direction, Game, Maze, Snapshot};

    /// Captures the renderable state published after a completed tick.
    #[must_use]
    pub fn snapshot(game: &Game) -> Snapshot {
        Snapshot {
            player: game.player,
            pursuer: game.pursuer,
            pursuer_heading: game.pursuer_heading,
            coins: game.coins.positions(),
            score: game.score,
            level: game.scheduler.level(),
        }
    }

    /// Immutable maze the game was generated with.
    #[must_use]
    pub fn maze(game: &Game) -> &Maze {
        &game.maze
    }

    /// Cell currently occupied by the player.
    #[must_use]
    pub fn player(game: &Game) -> CellCoord {
        game.player
    }

    /// Cell currently occupied by the pursuer.
    #[must_use]
    pub fn pursuer(game: &Game) -> CellCoord {
        game.pursuer
    }

    /// Direction most recently pressed and still held, if any.
    #[must_use]
    pub fn active_direction(game: &Game) -> Option<Direction> {
        game.held.last().copied()
    }

    /// Coins collected since the game began.
    #[must_use]
    pub fn score(game: &Game) -> u32 {
        game.score
    }

    /// Current difficulty level.
    #[must_use]
    pub fn level(game: &Game) -> u32 {
        game.scheduler.level()
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Game};
    use maze_chase_core::{CellCoord, Direction, GameError, InputEvent};
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    fn small_config() -> Config {
        let mut config = Config::with_dimensions(5, 5);
        config.coins_in_start = 5;
        config
    }

    #[test]
    fn rejects_coin_counts_that_could_exhaust_the_maze() {
        // A 5x5 maze carves 17 corridor cells; two stay reserved for agents.
        let mut config = small_config();
        config.coins_in_start = 16;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let error = Game::new(config, &mut rng).expect_err("too many coins");
        assert_eq!(
            error,
            GameError::NoAvailableCell {
                coins: 16,
                corridors: 17
            }
        );
    }

    #[test]
    fn extreme_coin_counts_report_no_available_cell() {
        // Near-maximal counts must take the error path, not wrap around.
        let mut config = small_config();
        config.coins_in_start = u32::MAX - 1;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let error = Game::new(config, &mut rng).expect_err("oversized coin count");
        assert_eq!(
            error,
            GameError::NoAvailableCell {
                coins: u32::MAX - 1,
                corridors: 17
            }
        );
    }

    #[test]
    fn fifteen_coins_fit_a_five_by_five_maze() {
        let mut config = small_config();
        config.coins_in_start = 15;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let game = Game::new(config, &mut rng).expect("coin count at the bound");
        assert_eq!(super::query::snapshot(&game).coins.len(), 15);
    }

    #[test]
    fn key_down_moves_immediately_and_resets_the_cadence() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut game = Game::new(small_config(), &mut rng).expect("game");

        // (0, 0) always connects to at least one of right or down.
        let direction = if super::query::maze(&game).is_corridor(CellCoord::new(1, 0)) {
            Direction::Right
        } else {
            Direction::Down
        };

        game.apply_input(InputEvent::Pressed(direction), &mut rng);
        assert_ne!(super::query::player(&game), CellCoord::new(0, 0));
    }

    #[test]
    fn walls_silently_reject_player_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut game = Game::new(small_config(), &mut rng).expect("game");

        // Up and left from the corner both leave the grid.
        game.apply_input(InputEvent::Pressed(Direction::Up), &mut rng);
        game.apply_input(InputEvent::Pressed(Direction::Left), &mut rng);
        assert_eq!(super::query::player(&game), CellCoord::new(0, 0));
    }

    #[test]
    fn most_recently_pressed_direction_governs_the_ledger() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut game = Game::new(small_config(), &mut rng).expect("game");

        game.apply_input(InputEvent::Pressed(Direction::Up), &mut rng);
        game.apply_input(InputEvent::Pressed(Direction::Left), &mut rng);
        assert_eq!(super::query::active_direction(&game), Some(Direction::Left));

        game.apply_input(InputEvent::Released(Direction::Left), &mut rng);
        assert_eq!(super::query::active_direction(&game), Some(Direction::Up));

        game.apply_input(InputEvent::Released(Direction::Up), &mut rng);
        assert_eq!(super::query::active_direction(&game), None);
    }
}
