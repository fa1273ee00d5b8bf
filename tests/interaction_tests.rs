//! Interaction tests: slides, switch and Sorry! across every pair of colors.

use sorry_engine::board::{ring_add, slide_start, SLIDE_LENGTH};
use sorry_engine::{
    home_entry_allowed, move_pawn, EventLog, GameConfig, GameEvent, GameState,
    InteractionResolver, MoveError, PawnRef, PlayerId, Position,
};

fn state() -> GameState {
    let _ = env_logger::builder().is_test(true).try_init();
    GameState::new(&GameConfig::default().with_seed(99))
}

/// A pawn landing on another color's slide start ends four tiles on and
/// clears every pawn on the way, the slide's own color included.
#[test]
fn test_slide_determinism_all_pairs() {
    for owner in PlayerId::all() {
        for mover in PlayerId::all().filter(|&p| p != owner) {
            let mut state = state();
            let start = slide_start(owner);
            let pawn = PawnRef::new(mover, 0);
            let owners_pawn = PawnRef::new(owner, 2);
            let third = PlayerId::all().find(|&p| p != owner && p != mover).unwrap();
            let at_end = PawnRef::new(third, 1);
            let end = ring_add(start, i32::from(SLIDE_LENGTH));

            state.place_pawn(pawn, Position::Track(ring_add(start, -3)));
            state.place_pawn(owners_pawn, Position::Track(ring_add(start, 2)));
            state.place_pawn(at_end, Position::Track(end));
            let mut events = EventLog::new();

            let allow = home_entry_allowed(&state, pawn, 3);
            let landed = move_pawn(&mut state, pawn, 3, allow, &mut events).unwrap();

            assert_eq!(landed, Position::Track(end), "{} on {}'s slide", mover, owner);
            assert_eq!(state.pawn(owners_pawn).position, Position::Start);
            assert_eq!(state.pawn(at_end).position, Position::Start);
            assert!(events.events().contains(&GameEvent::SlideTriggered {
                pawn,
                from: start,
                to: end,
                slide_owner: owner,
            }));
        }
    }
}

/// Landing on your own color's slide start does nothing special.
#[test]
fn test_own_slide_is_inert() {
    for player in PlayerId::all() {
        let mut state = state();
        let pawn = PawnRef::new(player, 0);
        let start = slide_start(player);
        state.place_pawn(pawn, Position::Track(ring_add(start, -2)));
        state.place_pawn(PawnRef::new(player.next(), 0), Position::Track(ring_add(start, 2)));

        let allow = home_entry_allowed(&state, pawn, 2);
        let landed = move_pawn(&mut state, pawn, 2, allow, &mut EventLog::new()).unwrap();

        assert_eq!(landed, Position::Track(start));
        assert_eq!(
            state.pawn(PawnRef::new(player.next(), 0)).position,
            Position::Track(ring_add(start, 2))
        );
    }
}

/// A slide's first tile bump is reported before the slide carries the pawn on.
#[test]
fn test_bump_then_slide_order() {
    let mut state = state();
    let mover = PawnRef::new(PlayerId::new(0), 0);
    let on_start = PawnRef::new(PlayerId::new(2), 0);
    let on_path = PawnRef::new(PlayerId::new(3), 0);
    state.place_pawn(mover, Position::Track(12));
    state.place_pawn(on_start, Position::Track(16));
    state.place_pawn(on_path, Position::Track(18));
    let mut events = EventLog::new();

    move_pawn(&mut state, mover, 4, false, &mut events).unwrap();

    let kinds: Vec<&str> = events
        .events()
        .iter()
        .map(|e| match e {
            GameEvent::PawnMoved { .. } => "moved",
            GameEvent::PawnBumped { .. } => "bumped",
            GameEvent::SlideTriggered { .. } => "slide",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["moved", "bumped", "slide", "bumped"]);
    assert_eq!(state.pawn(mover).position, Position::Track(20));
}

/// Switch exchanges tiles and never triggers bump or slide.
#[test]
fn test_switch_onto_slide_start() {
    let mut state = state();
    let mine = PawnRef::new(PlayerId::new(1), 0);
    let theirs = PawnRef::new(PlayerId::new(2), 0);
    let bystander = PawnRef::new(PlayerId::new(3), 0);
    state.place_pawn(mine, Position::Track(40));
    state.place_pawn(theirs, Position::Track(46));
    state.place_pawn(bystander, Position::Track(48));
    let mut events = EventLog::new();

    InteractionResolver::switch(&mut state, mine, theirs, &mut events).unwrap();

    assert_eq!(state.pawn(mine).position, Position::Track(46));
    assert_eq!(state.pawn(theirs).position, Position::Track(40));
    assert_eq!(state.pawn(bystander).position, Position::Track(48));
    assert_eq!(events.len(), 1);
}

/// Sorry! needs both a Start pawn and an opposing track pawn.
#[test]
fn test_sorry_preconditions() {
    let mut state = state();
    let green = PlayerId::new(3);
    let mut events = EventLog::new();

    assert_eq!(
        InteractionResolver::sorry_available(&state, green),
        Err(MoveError::NoOpponentOnTrack)
    );

    // Opponents in their home stretch are out of reach.
    state.place_pawn(PawnRef::new(PlayerId::new(0), 0), Position::HomeStretch(2));
    assert_eq!(
        InteractionResolver::sorry_available(&state, green),
        Err(MoveError::NoOpponentOnTrack)
    );

    let target = PawnRef::new(PlayerId::new(1), 3);
    state.place_pawn(target, Position::Track(7));
    let pawn = InteractionResolver::sorry(&mut state, green, target, &mut events).unwrap();

    assert_eq!(pawn, PawnRef::new(green, 0));
    assert_eq!(state.pawn(pawn).position, Position::Track(7));
    assert_eq!(state.pawn(target).position, Position::Start);
    assert_eq!(
        InteractionResolver::sorry(&mut state, green, pawn, &mut events),
        Err(MoveError::NotAnOpponent)
    );
}
