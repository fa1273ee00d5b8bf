//! Movement primitive tests.
//!
//! These tests drive `move_pawn` / `move_from_start` directly on hand-built
//! positions:
//! - Home-entry boundaries and the lap rule
//! - Home-stretch arrival and underflow
//! - Own-pawn blocking
//! - Bump on landing

use sorry_engine::board::{home_entry_tile, start_tile};
use sorry_engine::{
    home_entry_allowed, move_from_start, move_pawn, EventLog, GameConfig, GameEvent, GameState,
    MoveError, PawnRef, PlayerId, Position,
};

fn state() -> GameState {
    let _ = env_logger::builder().is_test(true).try_init();
    GameState::new(&GameConfig::default().with_seed(2024))
}

/// Move with the entry permission the rules would compute.
fn advance(state: &mut GameState, pawn: PawnRef, delta: i32) -> Result<Position, MoveError> {
    let allow = home_entry_allowed(state, pawn, delta);
    move_pawn(state, pawn, delta, allow, &mut EventLog::new())
}

/// Player 0 from Track(59): +5 is in the stretch, +8 is exactly Home.
#[test]
fn test_home_entry_boundary_player_zero() {
    let red = PawnRef::new(PlayerId::new(0), 0);
    let cases = [
        (1, Position::Track(0)),
        (3, Position::HomeStretch(0)),
        (5, Position::HomeStretch(2)),
        (7, Position::HomeStretch(4)),
        (8, Position::Home),
        (12, Position::Home),
    ];

    for (delta, expected) in cases {
        let mut state = state();
        state.place_pawn(red, Position::Track(59));
        assert_eq!(advance(&mut state, red, delta), Ok(expected), "Track(59) + {}", delta);
    }
}

/// Every player's stretch is entered two tiles past their start tile.
#[test]
fn test_home_entry_for_every_player() {
    for player in PlayerId::all() {
        let mut state = state();
        let pawn = PawnRef::new(player, 1);
        let before_start = sorry_engine::board::ring_add(start_tile(player), -1);
        state.place_pawn(pawn, Position::Track(before_start));

        assert_eq!(home_entry_tile(player), start_tile(player) + 2);
        assert_eq!(advance(&mut state, pawn, 4), Ok(Position::HomeStretch(1)));
    }
}

/// A pawn fresh out of Start goes round the ring before it can go home.
#[test]
fn test_fresh_pawn_passes_home_entry() {
    let mut state = state();
    let red = PlayerId::new(0);
    let mut events = EventLog::new();
    let pawn = move_from_start(&mut state, red, &mut events).unwrap();

    assert_eq!(state.pawn(pawn).position, Position::Track(0));
    assert_eq!(advance(&mut state, pawn, 5), Ok(Position::Track(5)));
    assert!(!state.pawn(pawn).lapped);
}

/// Going round the ring sets the lap flag and opens the stretch.
#[test]
fn test_full_lap_then_home() {
    let mut state = state();
    let pawn = PawnRef::new(PlayerId::new(2), 0);
    // Yellow starts on 30; its stretch opens from 32.
    state.place_pawn(pawn, Position::Track(25));

    assert_eq!(advance(&mut state, pawn, 5), Ok(Position::Track(30)));
    assert!(state.pawn(pawn).lapped);
    assert_eq!(advance(&mut state, pawn, 4), Ok(Position::HomeStretch(2)));
    assert_eq!(advance(&mut state, pawn, 3), Ok(Position::Home));
}

/// Retreating never enters the stretch, and a stretch pawn cannot back out.
#[test]
fn test_retreats() {
    let mut state = state();
    let a = PawnRef::new(PlayerId::new(0), 0);
    let b = PawnRef::new(PlayerId::new(0), 1);
    state.place_pawn(a, Position::Track(5));
    state.place_pawn(b, Position::HomeStretch(0));

    assert_eq!(advance(&mut state, a, -4), Ok(Position::Track(1)));
    assert_eq!(advance(&mut state, b, -1), Err(MoveError::StretchUnderflow));
    assert_eq!(state.pawn(b).position, Position::HomeStretch(0));
}

/// Home holds any number of one player's pawns.
#[test]
fn test_home_is_shared() {
    let mut state = state();
    let a = PawnRef::new(PlayerId::new(3), 0);
    let b = PawnRef::new(PlayerId::new(3), 1);
    state.place_pawn(a, Position::Home);
    state.place_pawn(b, Position::HomeStretch(3));

    assert_eq!(advance(&mut state, b, 2), Ok(Position::Home));
    assert!(state.own_pawns_exclusive());
}

/// A landing on an own pawn is refused outright.
#[test]
fn test_own_pawn_block() {
    let mut state = state();
    let a = PawnRef::new(PlayerId::new(1), 0);
    let b = PawnRef::new(PlayerId::new(1), 1);
    state.place_pawn(a, Position::Track(20));
    state.place_pawn(b, Position::Track(25));

    assert_eq!(
        advance(&mut state, a, 5),
        Err(MoveError::BlockedByOwnPawn(Position::Track(25)))
    );
    assert_eq!(state.pawn(a).position, Position::Track(20));
}

/// Landing on a lone opponent sends it to Start; nobody else moves.
#[test]
fn test_bump_on_landing() {
    let mut state = state();
    let mover = PawnRef::new(PlayerId::new(0), 0);
    let victim = PawnRef::new(PlayerId::new(2), 3);
    let bystander = PawnRef::new(PlayerId::new(3), 0);
    state.place_pawn(mover, Position::Track(20));
    state.place_pawn(victim, Position::Track(27));
    state.place_pawn(bystander, Position::Track(28));
    let mut events = EventLog::new();

    let allow = home_entry_allowed(&state, mover, 7);
    move_pawn(&mut state, mover, 7, allow, &mut events).unwrap();

    assert_eq!(state.pawn(mover).position, Position::Track(27));
    assert_eq!(state.pawn(victim).position, Position::Start);
    assert_eq!(state.pawn(bystander).position, Position::Track(28));
    assert_eq!(
        events.events(),
        &[
            GameEvent::PawnMoved {
                pawn: mover,
                from: Position::Track(20),
                to: Position::Track(27),
            },
            GameEvent::PawnBumped { pawn: victim, tile: 27, by: mover },
        ]
    );
}

/// Landing on an empty tile touches nobody.
#[test]
fn test_empty_landing_changes_nothing_else() {
    let mut state = state();
    let mover = PawnRef::new(PlayerId::new(0), 0);
    state.place_pawn(mover, Position::Track(20));
    state.place_pawn(PawnRef::new(PlayerId::new(1), 0), Position::Track(22));
    let before = state.player(PlayerId::new(1)).clone();

    advance(&mut state, mover, 3).unwrap();

    assert_eq!(state.player(PlayerId::new(1)), &before);
}
