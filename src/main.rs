//! # Warren Main Entry Point
//!
//! A plain-text host: reads commands from stdin, feeds them to the turn controller and
//! prints the board (or a JSON snapshot) after every command.

use clap::Parser;
use log::{error, info, LevelFilter};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use warren::{
    parse_line, Actor, CellKind, GameSnapshot, GenerationConfig, Position, RandomSource,
    TurnController, WarrenError, WarrenResult,
};

/// Command line arguments for Warren.
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(about = "A small turn-based dungeon crawler with procedural maps")]
#[command(version)]
struct Args {
    /// Random seed for map generation and enemy AI
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON generation config; `--seed` overrides its seed
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print a JSON snapshot after each command instead of the board
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("Game failed: {}", e);
        std::process::exit(1);
    }
}

fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn load_config(args: &Args) -> WarrenResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::load_from_file(path)?,
        None => GenerationConfig::new(rand::random()),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn run(args: &Args) -> WarrenResult<()> {
    let config = load_config(args)?;
    info!("Starting Warren v{} with seed {}", warren::VERSION, config.seed);

    let mut game = TurnController::from_config(&config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    play(&mut game, stdin.lock(), &mut stdout, args.json)
}

/// Feeds input lines to the game, presenting the state after every processed command.
///
/// Returns when the input ends, the player quits with `q`, or the game is over.
fn play<R: RandomSource>(
    game: &mut TurnController<R>,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> WarrenResult<()> {
    present(out, &game.snapshot(), json)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("q") {
            info!("Player quit after {} turns", game.turn());
            return Ok(());
        }

        for command in parse_line(&line) {
            let snapshot = game.process(command);
            present(out, &snapshot, json)?;

            if snapshot.game_over {
                let stats = game.state().statistics();
                info!(
                    "Game over after {} turns: {} enemies defeated, {} damage dealt, {} taken",
                    stats.turns_taken, stats.enemies_defeated, stats.damage_dealt, stats.damage_taken
                );
                return Ok(());
            }
        }
    }

    Ok(())
}

fn present(out: &mut impl Write, snapshot: &GameSnapshot, json: bool) -> WarrenResult<()> {
    if json {
        writeln!(out, "{}", snapshot.to_json()?)?;
    } else {
        write!(out, "{}", render(snapshot))?;
        for message in snapshot.messages() {
            writeln!(out, "{}", message)?;
        }
    }
    out.flush().map_err(WarrenError::from)
}

/// Draws the board as ASCII: `#` wall, `.` floor, `@` hero, `E` enemy, `/` sword, `!` potion.
fn render(snapshot: &GameSnapshot) -> String {
    let grid = &snapshot.grid;
    let mut board = String::with_capacity(((grid.width + 1) * grid.height) as usize + 64);

    for y in 0..grid.height as i32 {
        for x in 0..grid.width as i32 {
            let pos = Position::new(x, y);
            let glyph = if snapshot.hero.position() == pos {
                '@'
            } else if snapshot.enemies.iter().any(|enemy| enemy.position() == pos) {
                'E'
            } else if snapshot.swords.iter().any(|item| item.position == pos) {
                '/'
            } else if snapshot.potions.iter().any(|item| item.position == pos) {
                '!'
            } else if grid.kind_at(pos) == CellKind::Floor {
                '.'
            } else {
                '#'
            };
            board.push(glyph);
        }
        board.push('\n');
    }

    board.push_str(&format!(
        "Health: {}  Power: {}  Enemies: {}  Turn: {}\n",
        snapshot.hero.health(),
        snapshot.hero.power(),
        snapshot.enemies.len(),
        snapshot.turn
    ));
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren::{Enemy, GameState, Grid, Hero, SeededRandom};

    /// Hero at (2, 2) facing a wounded enemy at (2, 1); nothing else is floor.
    fn duel(enemy_health: i32) -> TurnController<SeededRandom> {
        let hero_pos = Position::new(2, 2);
        let enemy_pos = Position::new(2, 1);
        let mut grid = Grid::new(5, 5);
        grid.set_kind(hero_pos, CellKind::Floor).unwrap();
        grid.set_kind(enemy_pos, CellKind::Floor).unwrap();
        let state = GameState::from_parts(
            grid,
            Hero::new(hero_pos),
            vec![Enemy::with_health(enemy_pos, enemy_health)],
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        TurnController::new(state, SeededRandom::new(4))
    }

    fn play_to_string(game: &mut TurnController<SeededRandom>, input: &str) -> String {
        let mut out = Vec::new();
        play(game, input.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_every_command_on_a_line_is_presented() {
        let mut game = duel(15);
        let output = play_to_string(&mut game, "  d\n");

        assert!(output.contains("You attacked an enemy!"));
        assert!(output.contains("Enemy defeated!"));
        assert!(output.contains("Victory! All enemies defeated."));
        // Initial board plus one board per attack; the trailing move is never processed.
        assert_eq!(output.matches("Health:").count(), 3);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn test_input_after_game_over_is_ignored() {
        let mut game = duel(5);
        let output = play_to_string(&mut game, " \nattack\n ");

        assert_eq!(output.matches("Victory! All enemies defeated.").count(), 1);
        assert_eq!(output.matches("Health:").count(), 2);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_quit_stops_before_later_lines() {
        let mut game = duel(100);
        let output = play_to_string(&mut game, "q\n \n");

        assert_eq!(output.matches("Health:").count(), 1);
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_json_output_has_one_snapshot_per_command() {
        let mut game = duel(15);
        let mut out = Vec::new();
        play(&mut game, "  \n".as_bytes(), &mut out, true).unwrap();

        let lines: Vec<GameSnapshot> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].game_over);
        assert_eq!(lines[1].messages()[0], "You attacked an enemy!");
    }
}
