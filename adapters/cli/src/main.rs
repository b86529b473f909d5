#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs scripted Maze Chase sessions.
//!
//! The binary owns everything the simulation core deliberately excludes: it
//! seeds the random source, paces the tick loop, feeds input intents into
//! the game, and presents published snapshots as ASCII frames. Each session
//! runs until the pursuer catches the player or the tick budget runs out,
//! after which the menu offers a fresh game until the requested number of
//! games has been played.

mod text;

use anyhow::Result as AnyResult;
use clap::Parser;
use maze_chase_rendering::{InputSource, MenuChoice, MenuScreen, Renderer};
use maze_chase_world::{query, Config, Game};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use text::{Autopilot, TextRenderer};

/// Scripted Maze Chase session runner.
#[derive(Debug, Parser)]
#[command(name = "maze-chase")]
struct Args {
    /// Maze width in grid cells.
    #[arg(long, default_value_t = 27)]
    width: u32,

    /// Maze height in grid cells.
    #[arg(long, default_value_t = 17)]
    height: u32,

    /// Coins kept on the board at all times.
    #[arg(long, default_value_t = 40)]
    coins: u32,

    /// Seed for the session's random source; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Tick budget per session before it is cut short.
    #[arg(long, default_value_t = 20_000)]
    ticks: u32,

    /// Number of games to play before quitting.
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Ticks between scripted direction changes.
    #[arg(long, default_value_t = 9)]
    turn_period: u32,
}

fn main() -> AnyResult<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut config = Config::with_dimensions(args.width, args.height);
    config.coins_in_start = args.coins;

    let stdout = std::io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    let mut input = Autopilot::new(args.turn_period);

    renderer.present_menu(&MenuScreen { final_score: None })?;

    let mut played = 0;
    loop {
        let choice = if played < args.games {
            MenuChoice::NewGame
        } else {
            MenuChoice::Quit
        };
        match choice {
            MenuChoice::NewGame => {
                let score = run_session(config, &mut rng, &mut renderer, &mut input, args.ticks)?;
                played += 1;
                renderer.present_menu(&MenuScreen { final_score: score })?;
            }
            MenuChoice::Quit => break,
        }
    }

    println!("seed: {seed}");
    Ok(())
}

/// Runs one game to completion or until the tick budget is exhausted.
///
/// Returns the final score when the pursuer caught the player, `None` when
/// the budget ran out first. Only the last frame is presented; streaming a
/// frame per tick would drown the terminal.
fn run_session<R, I>(
    config: Config,
    rng: &mut ChaCha8Rng,
    renderer: &mut R,
    input: &mut I,
    ticks: u32,
) -> AnyResult<Option<u32>>
where
    R: Renderer,
    I: InputSource,
{
    let mut game = Game::new(config, rng)?;

    for _ in 0..ticks {
        let frame = input.poll()?;
        for event in frame.events {
            game.apply_input(event, rng);
        }

        let outcome = game.tick(rng);
        if outcome.game_over {
            renderer.present(query::maze(&game), &outcome.snapshot)?;
            return Ok(Some(outcome.snapshot.score));
        }
    }

    renderer.present(query::maze(&game), &query::snapshot(&game))?;
    Ok(None)
}
