//! Movement primitives.
//!
//! Every card power bottoms out in two operations:
//!
//! - [`move_pawn`]: advance or retreat an on-board pawn by a signed
//!   number of spaces, diverting into the home stretch when allowed
//! - [`move_from_start`]: put a Start pawn on its start tile
//!
//! Both validate first and change nothing on failure. A move that ends
//! on the track then runs bump and slide resolution, in that order.
//!
//! [`plan_move`] is the validation half of `move_pawn` on its own, used
//! to work out which pawns a card can legally move before asking the
//! player to pick one.

use crate::core::{GameState, PlayerId};
use crate::effects::InteractionResolver;
use crate::error::MoveError;
use crate::events::{EventLog, GameEvent};

use super::position::{PawnRef, Position};
use super::topology::{forward_distance, ring_add, STRETCH_LENGTH};

/// Stretch cell `index`, or Home once the index runs past the last cell.
fn stretch_or_home(index: i32) -> Position {
    if index >= i32::from(STRETCH_LENGTH) {
        Position::Home
    } else {
        Position::HomeStretch(index as u8)
    }
}

/// Whether a forward path of `delta` spaces from `tile` passes over `mark`.
fn passes(tile: u8, delta: i32, mark: u8) -> bool {
    delta > 0 && i32::from(forward_distance(tile, mark)) <= delta
}

/// Whether a move of `delta` spaces may divert `pawn` into its home stretch.
///
/// The home-entry tile sits just past the start tile, so a pawn fresh
/// out of Start must go round the ring first. Diversion is allowed once
/// the pawn has passed its own start tile moving forward, either earlier
/// (`lapped`) or on this very move.
#[must_use]
pub fn home_entry_allowed(state: &GameState, pawn: PawnRef, delta: i32) -> bool {
    let p = state.pawn(pawn);
    let start = state.player(pawn.player).start_tile();
    match p.position {
        Position::Track(tile) => {
            delta > 0 && (p.lapped || passes(tile, delta, start))
        }
        _ => false,
    }
}

/// Where `pawn` would land moving `delta` spaces, before bump or slide.
///
/// Fails without touching the state if the pawn is at Start or Home, if
/// a retreat would leave the stretch through its entrance, or if the
/// landing cell holds another pawn of the same player.
pub fn plan_move(
    state: &GameState,
    pawn: PawnRef,
    delta: i32,
    allow_home_entry: bool,
) -> Result<Position, MoveError> {
    let dest = match state.pawn(pawn).position {
        Position::Start | Position::Home => return Err(MoveError::NotOnBoard),
        Position::HomeStretch(k) => {
            let next = i32::from(k) + delta;
            if next < 0 {
                return Err(MoveError::StretchUnderflow);
            }
            stretch_or_home(next)
        }
        Position::Track(tile) => {
            let entry = state.player(pawn.player).home_entry_tile();
            let distance = i32::from(forward_distance(tile, entry));
            if allow_home_entry && delta > 0 && distance <= delta {
                stretch_or_home(delta - distance)
            } else {
                Position::Track(ring_add(tile, delta))
            }
        }
    };

    if let Some(other) = state.own_pawn_at(pawn.player, dest) {
        if other != pawn.pawn {
            return Err(MoveError::BlockedByOwnPawn(dest));
        }
    }
    Ok(dest)
}

/// Move an on-board pawn `delta` spaces (negative retreats).
///
/// Returns where the pawn finally stands, after any slide.
pub fn move_pawn(
    state: &mut GameState,
    pawn: PawnRef,
    delta: i32,
    allow_home_entry: bool,
    events: &mut EventLog,
) -> Result<Position, MoveError> {
    let dest = plan_move(state, pawn, delta, allow_home_entry)?;
    let from = state.pawn(pawn).position;
    let start = state.player(pawn.player).start_tile();

    let p = state.pawn_mut(pawn);
    if let Position::Track(tile) = from {
        if passes(tile, delta, start) {
            p.lapped = true;
        }
    }
    p.position = dest;
    events.push(GameEvent::PawnMoved { pawn, from, to: dest });

    match dest {
        Position::Home => events.push(GameEvent::ReachedHome { pawn }),
        Position::Track(tile) => land(state, pawn, tile, events),
        Position::Start | Position::HomeStretch(_) => {}
    }
    Ok(state.pawn(pawn).position)
}

/// The pawn `move_from_start` would use, if it can enter.
pub fn plan_from_start(state: &GameState, player: PlayerId) -> Result<usize, MoveError> {
    let index = state
        .first_pawn_in_start(player)
        .ok_or(MoveError::NoPawnInStart)?;
    let entry = Position::Track(state.player(player).start_tile());
    if state.own_pawn_at(player, entry).is_some() {
        return Err(MoveError::BlockedByOwnPawn(entry));
    }
    Ok(index)
}

/// Put `player`'s lowest-indexed Start pawn on its start tile.
pub fn move_from_start(
    state: &mut GameState,
    player: PlayerId,
    events: &mut EventLog,
) -> Result<PawnRef, MoveError> {
    let index = plan_from_start(state, player)?;
    let pawn = PawnRef::new(player, index);
    let tile = state.player(player).start_tile();

    state.pawn_mut(pawn).position = Position::Track(tile);
    events.push(GameEvent::PawnEntered { pawn, tile });
    land(state, pawn, tile, events);
    Ok(pawn)
}

/// Landing rules for a pawn that just arrived on `tile`.
fn land(state: &mut GameState, pawn: PawnRef, tile: u8, events: &mut EventLog) {
    InteractionResolver::bump(state, pawn, tile, events);
    InteractionResolver::slide(state, pawn, tile, events);
}
