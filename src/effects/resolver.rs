//! Interaction resolution - rules that touch more than one player's pawns.
//!
//! Bump and slide fire after a pawn lands on the track. Switch and
//! Sorry! are card powers in their own right and validate their targets
//! before changing anything.

use crate::board::{ring_add, slide_owner, PawnRef, Position, SLIDE_LENGTH};
use crate::core::{GameState, PlayerId};
use crate::error::MoveError;
use crate::events::{EventLog, GameEvent};

/// Resolves pawn-on-pawn interactions on game state.
pub struct InteractionResolver;

impl InteractionResolver {
    /// Send every other player's pawn on `tile` back to Start.
    ///
    /// Returns how many pawns were bumped.
    pub fn bump(state: &mut GameState, mover: PawnRef, tile: u8, events: &mut EventLog) -> usize {
        let victims: Vec<PawnRef> = state
            .pawns_on_tile(tile)
            .into_iter()
            .filter(|p| p.player != mover.player)
            .collect();

        for &victim in &victims {
            state.pawn_mut(victim).send_to_start();
            events.push(GameEvent::PawnBumped { pawn: victim, tile, by: mover });
        }
        victims.len()
    }

    /// Carry `mover` down another color's slide if it landed on its start.
    ///
    /// Every pawn on the four slide tiles, whatever its color, goes back
    /// to Start. Returns the tile the mover ends on, or `None` if `tile`
    /// starts no slide for this mover.
    pub fn slide(
        state: &mut GameState,
        mover: PawnRef,
        tile: u8,
        events: &mut EventLog,
    ) -> Option<u8> {
        let owner = slide_owner(tile)?;
        if owner == mover.player {
            return None;
        }

        let end = ring_add(tile, i32::from(SLIDE_LENGTH));
        events.push(GameEvent::SlideTriggered {
            pawn: mover,
            from: tile,
            to: end,
            slide_owner: owner,
        });

        for step in 1..=SLIDE_LENGTH {
            let on_path = ring_add(tile, i32::from(step));
            for victim in state.pawns_on_tile(on_path) {
                if victim != mover {
                    state.pawn_mut(victim).send_to_start();
                    events.push(GameEvent::PawnBumped { pawn: victim, tile: on_path, by: mover });
                }
            }
        }

        state.pawn_mut(mover).position = Position::Track(end);
        Some(end)
    }

    /// Exchange the tiles of `pawn` and an opposing `target`, both on the track.
    ///
    /// Neither bump nor slide fires.
    pub fn switch(
        state: &mut GameState,
        pawn: PawnRef,
        target: PawnRef,
        events: &mut EventLog,
    ) -> Result<(), MoveError> {
        let own_tile = state.pawn(pawn).position.tile().ok_or(MoveError::NotOnBoard)?;
        if target.player == pawn.player {
            return Err(MoveError::NotAnOpponent);
        }
        let target_tile = state
            .pawn(target)
            .position
            .tile()
            .ok_or(MoveError::NotAnOpponent)?;

        state.pawn_mut(pawn).position = Position::Track(target_tile);
        state.pawn_mut(target).position = Position::Track(own_tile);
        events.push(GameEvent::PawnsSwitched {
            pawn,
            target,
            pawn_tile: target_tile,
            target_tile: own_tile,
        });
        Ok(())
    }

    /// Check that `player` could play a Sorry! card right now.
    ///
    /// Needs an opposing pawn on the track and an own pawn at Start.
    /// Returns the Start pawn that would be used.
    pub fn sorry_available(state: &GameState, player: PlayerId) -> Result<usize, MoveError> {
        if state.opponent_targets(player).is_empty() {
            return Err(MoveError::NoOpponentOnTrack);
        }
        state
            .first_pawn_in_start(player)
            .ok_or(MoveError::NoPawnInStart)
    }

    /// Bump `target` to Start and put one of `player`'s Start pawns on its tile.
    ///
    /// The placement skips own-pawn blocking (the tile was just vacated);
    /// the slide rule still applies. Returns the pawn that came out.
    pub fn sorry(
        state: &mut GameState,
        player: PlayerId,
        target: PawnRef,
        events: &mut EventLog,
    ) -> Result<PawnRef, MoveError> {
        if target.player == player {
            return Err(MoveError::NotAnOpponent);
        }
        let tile = state
            .pawn(target)
            .position
            .tile()
            .ok_or(MoveError::NotAnOpponent)?;
        let index = state
            .first_pawn_in_start(player)
            .ok_or(MoveError::NoPawnInStart)?;
        let pawn = PawnRef::new(player, index);

        events.push(GameEvent::SorryPlayed { pawn, target, tile });
        state.pawn_mut(target).send_to_start();
        events.push(GameEvent::PawnBumped { pawn: target, tile, by: pawn });

        let p = state.pawn_mut(pawn);
        p.position = Position::Track(tile);
        p.lapped = false;
        Self::slide(state, pawn, tile, events);
        Ok(pawn)
    }
}
