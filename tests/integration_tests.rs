//! Integration tests for the engine lifecycle, driven through the public API only

use tetris_classic::core::{collides, Engine, EngineEvent, GameSnapshot};
use tetris_classic::types::{GameAction, GamePhase, PieceKind, INITIAL_FALL_DELAY};

fn started(seed: u32, high_score: u32) -> Engine {
    let mut engine = Engine::new(seed, high_score);
    assert!(engine.apply_action(GameAction::Start));
    engine
}

/// First seed whose opening piece is `kind`
fn seed_opening_with(kind: PieceKind) -> u32 {
    (1..10_000)
        .find(|&seed| started(seed, 0).current().map(|p| p.kind) == Some(kind))
        .expect("some seed opens with the requested kind")
}

/// Hard-drop every piece at its spawn column until the stack tops out
fn top_out(engine: &mut Engine) {
    for _ in 0..500 {
        match engine.phase() {
            GamePhase::GameOver => return,
            GamePhase::LineClearAnimation => engine.advance(),
            _ => {
                engine.apply_action(GameAction::HardDrop);
            }
        }
    }
    panic!("stack never reached the top");
}

#[test]
fn test_game_lifecycle() {
    let mut engine = Engine::new(12345, 0);
    assert_eq!(engine.phase(), GamePhase::Menu);

    assert!(engine.apply_action(GameAction::Start));
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert!(engine.current().is_some());

    assert!(engine.apply_action(GameAction::TogglePause));
    assert_eq!(engine.phase(), GamePhase::Paused);
    assert!(engine.apply_action(GameAction::TogglePause));
    assert_eq!(engine.phase(), GamePhase::Playing);

    top_out(&mut engine);
    assert_eq!(engine.phase(), GamePhase::GameOver);

    assert!(engine.apply_action(GameAction::Start));
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_o_piece_soft_drops_to_floor() {
    let mut engine = started(seed_opening_with(PieceKind::O), 0);
    let x = engine.current().unwrap().x;

    let mut drops = 0;
    while engine.current().map(|p| p.kind) == Some(PieceKind::O) && engine.current().unwrap().y < 20 {
        assert!(engine.apply_action(GameAction::SoftDrop));
        drops += 1;
    }
    assert_eq!(drops, 20);
    assert!(!engine.board().is_occupied(x, 21));

    // The next soft drop is blocked and locks the piece.
    assert!(engine.apply_action(GameAction::SoftDrop));
    assert!(engine.board().is_occupied(x, 21));
    assert!(engine.board().is_occupied(x + 1, 21));
    assert!(engine.board().is_occupied(x, 20));
    assert!(engine.board().is_occupied(x + 1, 20));
    assert_eq!(engine.board().occupied_count(), 4);
}

#[test]
fn test_gravity_moves_piece_once_per_delay() {
    let mut engine = started(7, 0);
    let y0 = engine.current().unwrap().y;

    for _ in 0..INITIAL_FALL_DELAY * 3 {
        engine.advance();
    }
    assert_eq!(engine.current().unwrap().y, y0 + 3);
}

#[test]
fn test_top_out_without_beating_high_score() {
    let mut engine = started(99, 500);
    engine.take_events();

    top_out(&mut engine);

    assert_eq!(engine.high_score(), 500);
    let events = engine.take_events();
    assert!(events.contains(&EngineEvent::GameOver { score: 0 }));
    assert!(!events.iter().any(|e| matches!(e, EngineEvent::NewHighScore(_))));
    assert!(events.iter().any(|e| matches!(e, EngineEvent::PieceLocked { .. })));
}

#[test]
fn test_game_over_ignores_everything_but_start() {
    let mut engine = started(5, 0);
    top_out(&mut engine);
    let before = engine.snapshot();

    for action in GameAction::ALL {
        if action != GameAction::Start {
            assert!(!engine.apply_action(action), "{action:?}");
        }
    }
    for _ in 0..200 {
        engine.advance();
    }
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Rotate,
        GameAction::HardDrop,
    ];

    let run = || {
        let mut engine = started(2024, 0);
        for (i, &action) in script.iter().cycle().take(60).enumerate() {
            engine.apply_action(action);
            for _ in 0..(i % 7) {
                engine.advance();
            }
        }
        engine.snapshot()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_current_never_overlaps_stack_while_playing() {
    let mut engine = started(31337, 0);
    let actions = [
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::SoftDrop,
    ];

    for (i, &action) in actions.iter().cycle().take(400).enumerate() {
        if engine.phase() == GamePhase::GameOver {
            break;
        }
        engine.apply_action(action);
        if i % 3 == 0 {
            engine.advance();
        }

        if engine.phase() == GamePhase::Playing {
            let current = engine.current().unwrap();
            assert!(!collides(engine.board(), current));
            assert!(engine.board().full_rows().is_empty());
        }
    }
}

#[test]
fn test_snapshot_into_reuses_buffer() {
    let mut engine = started(11, 0);
    let mut snap = GameSnapshot::default();

    engine.snapshot_into(&mut snap);
    assert_eq!(snap, engine.snapshot());

    engine.apply_action(GameAction::HardDrop);
    engine.snapshot_into(&mut snap);
    assert_eq!(snap, engine.snapshot());
    assert_eq!(snap.board.iter().flatten().filter(|c| c.is_some()).count(), 4);
}
