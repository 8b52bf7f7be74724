//! End-to-end turn scenarios against hand-built layouts.

use proptest::prelude::*;
use warren::{
    try_move, Actor, CellKind, Command, Direction, Enemy, GameEvent, GameOutcome, GameState,
    GenerationConfig, Grid, Hero, Mover, Position, SeededRandom, TurnController,
};

fn grid_with_floor(width: u32, height: u32, floor: &[Position]) -> Grid {
    let mut grid = Grid::new(width, height);
    for &pos in floor {
        grid.set_kind(pos, CellKind::Floor).unwrap();
    }
    grid
}

fn room_cells(x0: i32, y0: i32, size: i32) -> Vec<Position> {
    let mut cells = Vec::new();
    for y in y0..y0 + size {
        for x in x0..x0 + size {
            cells.push(Position::new(x, y));
        }
    }
    cells
}

#[test]
fn hero_walks_to_the_room_edge_and_stops() {
    let grid = grid_with_floor(5, 5, &room_cells(1, 1, 3));
    assert_eq!(grid.kind_at(Position::new(3, 1)), CellKind::Floor);
    assert_eq!(grid.kind_at(Position::new(4, 1)), CellKind::Wall);

    let mut state = GameState::from_parts(
        grid,
        Hero::new(Position::new(1, 1)),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    )
    .unwrap();

    assert!(try_move(&mut state, Mover::Hero, Direction::East));
    assert!(try_move(&mut state, Mover::Hero, Direction::East));
    assert_eq!(state.hero().position(), Position::new(3, 1));
    assert!(!try_move(&mut state, Mover::Hero, Direction::East));
    assert_eq!(state.hero().position(), Position::new(3, 1));
}

#[test]
fn hero_is_stopped_by_a_wall_during_play() {
    // The 3x3 room on the left; a sealed cell on the right keeps an idle enemy alive.
    let mut floor = room_cells(1, 1, 3);
    floor.push(Position::new(6, 2));
    let state = GameState::from_parts(
        grid_with_floor(8, 5, &floor),
        Hero::new(Position::new(1, 1)),
        vec![Enemy::new(Position::new(6, 2))],
        Vec::new(),
        Vec::new(),
    )
    .unwrap();
    let mut game = TurnController::new(state, SeededRandom::new(3));

    assert_eq!(game.process(Command::MoveRight).turn, 1);
    assert_eq!(game.process(Command::MoveRight).turn, 2);
    let snapshot = game.process(Command::MoveRight);
    assert_eq!(snapshot.turn, 2);
    assert_eq!(snapshot.hero.position(), Position::new(3, 1));
    assert_eq!(
        snapshot.events,
        vec![GameEvent::MoveRejected {
            direction: Direction::East
        }]
    );
    assert_eq!(snapshot.messages(), vec!["You can't move there"]);
}

#[test]
fn two_attacks_kill_a_wounded_enemy_and_win() {
    let hero_pos = Position::new(2, 2);
    let enemy_pos = Position::new(2, 1);
    let state = GameState::from_parts(
        grid_with_floor(5, 5, &[hero_pos, enemy_pos]),
        Hero::new(hero_pos),
        vec![Enemy::with_health(enemy_pos, 15)],
        Vec::new(),
        Vec::new(),
    )
    .unwrap();
    let mut game = TurnController::new(state, SeededRandom::new(8));

    let first = game.process(Command::Attack);
    assert_eq!(
        first.events[0],
        GameEvent::AttackHit {
            target: enemy_pos,
            damage: 10,
            remaining_health: 5
        }
    );
    assert_eq!(first.enemies[0].health(), 5);
    // The enemy cannot step anywhere, so it strikes back from where it stands.
    assert_eq!(first.hero.health(), 95);
    assert!(!first.game_over);

    let second = game.process(Command::Attack);
    assert_eq!(
        second.events,
        vec![
            GameEvent::AttackKill {
                target: enemy_pos,
                damage: 10
            },
            GameEvent::GameOverVictory,
        ]
    );
    assert!(second.enemies.is_empty());
    assert_eq!(second.outcome, Some(GameOutcome::Victory));
    assert_eq!(second.statistics.enemies_defeated, 1);
    assert_eq!(second.statistics.damage_dealt, 20);
}

#[test]
fn contact_damage_kills_and_game_stays_over() {
    let hero_pos = Position::new(1, 1);
    let enemy_pos = Position::new(2, 1);
    let state = GameState::from_parts(
        grid_with_floor(4, 3, &[hero_pos, enemy_pos]),
        Hero::with_stats(hero_pos, 3, 1),
        vec![Enemy::new(enemy_pos)],
        Vec::new(),
        Vec::new(),
    )
    .unwrap();
    let mut game = TurnController::new(state, SeededRandom::new(21));

    let snapshot = game.process(Command::Attack);
    assert_eq!(snapshot.hero.health(), 0);
    assert_eq!(snapshot.outcome, Some(GameOutcome::Defeat));
    assert_eq!(snapshot.events.last(), Some(&GameEvent::GameOverDefeat));
    assert_eq!(snapshot.statistics.damage_taken, 3);

    let after = game.process(Command::MoveLeft);
    assert!(after.events.is_empty());
    assert_eq!(after.hero.health(), 0);
    assert_eq!(after.hero.position(), hero_pos);
    assert_eq!(after.turn, snapshot.turn);
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveUp),
        Just(Command::MoveDown),
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::Attack),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn random_play_keeps_the_state_consistent(
        seed in any::<u64>(),
        commands in prop::collection::vec(any_command(), 1..120),
    ) {
        let mut game = TurnController::from_config(&GenerationConfig::for_testing(seed)).unwrap();
        let mut finished: Option<GameOutcome> = None;
        let mut last_enemy_count = game.state().enemies().len();

        for command in commands {
            let before_turn = game.turn();
            let snapshot = game.process(command);

            prop_assert!(game.state().validate_invariants().is_ok());
            prop_assert!((0..=100).contains(&snapshot.hero.health()));
            prop_assert!(snapshot.enemies.len() <= last_enemy_count);
            prop_assert!(snapshot.turn == before_turn || snapshot.turn == before_turn + 1);
            last_enemy_count = snapshot.enemies.len();

            if let Some(outcome) = finished {
                prop_assert_eq!(snapshot.outcome, Some(outcome));
                prop_assert!(snapshot.events.is_empty());
                prop_assert_eq!(snapshot.turn, before_turn);
            }
            if snapshot.game_over {
                finished = snapshot.outcome;
            }
        }
    }
}
