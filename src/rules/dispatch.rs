//! Card dispatch.
//!
//! Turns one drawn card into pawn movement for the acting player, asking
//! the decision provider for every choice the card leaves open. Answers
//! are validated here; an invalid answer is asked again up to the
//! configured number of attempts, then the card resolves as a no-op.

use crate::board::{home_entry_allowed, move_from_start, move_pawn, plan_move, PawnRef, Target};
use crate::cards::Card;
use crate::core::{GameState, PlayerId, PAWNS_PER_PLAYER};
use crate::decisions::DecisionProvider;
use crate::effects::InteractionResolver;
use crate::error::{ErrorKind, MoveError};
use crate::events::{EventLog, GameEvent};

/// Spaces of a split 7 shared between the two pawns.
const SPLIT_TOTAL: u8 = 7;

/// Whether asking again could fix this error.
fn retryable(err: &MoveError) -> bool {
    err.kind() == ErrorKind::InvalidSelection && *err != MoveError::NoPawnSelected
}

/// Resolves cards for one player against borrowed engine parts.
pub(crate) struct CardDispatch<'a, D: DecisionProvider> {
    pub state: &'a mut GameState,
    pub decisions: &'a mut D,
    pub events: &'a mut EventLog,
    pub player: PlayerId,
    pub attempts: u8,
}

impl<'a, D: DecisionProvider> CardDispatch<'a, D> {
    /// Resolve `card`. Any error is the reason the card did nothing.
    pub fn resolve(&mut self, card: Card) -> Result<(), MoveError> {
        match card {
            Card::One | Card::Two => match self.branch(card)? {
                1 => self.enter_from_start(),
                _ => self.advance(i32::from(card.value())),
            },
            Card::Three | Card::Five | Card::Eight | Card::Twelve => {
                self.advance(i32::from(card.value()))
            }
            Card::Four => self.advance(-4),
            Card::Seven => match self.branch(card)? {
                1 => self.advance(i32::from(SPLIT_TOTAL)),
                _ => self.split_seven(),
            },
            Card::Ten => match self.branch(card)? {
                1 => self.advance(10),
                _ => self.advance(-1),
            },
            Card::Eleven => match self.branch(card)? {
                1 => self.advance(11),
                _ => self.switch(),
            },
            Card::Sorry => match self.branch(card)? {
                1 => self.play_sorry(),
                _ => {
                    self.save_sorry();
                    Ok(())
                }
            },
        }
    }

    /// Play a Sorry! card: pick an opponent and replace it with a Start pawn.
    pub fn play_sorry(&mut self) -> Result<(), MoveError> {
        InteractionResolver::sorry_available(self.state, self.player)?;
        let target = self.pick_target()?;
        InteractionResolver::sorry(self.state, self.player, target.pawn, self.events)?;
        Ok(())
    }

    fn save_sorry(&mut self) {
        let player = self.state.player_mut(self.player);
        player.banked_sorry += 1;
        let banked = player.banked_sorry;
        self.events.push(GameEvent::CardSaved { player: self.player, banked });
    }

    fn enter_from_start(&mut self) -> Result<(), MoveError> {
        move_from_start(self.state, self.player, self.events).map(|_| ())
    }

    /// Move a chosen pawn `delta` spaces.
    fn advance(&mut self, delta: i32) -> Result<(), MoveError> {
        self.advance_except(delta, None).map(|_| ())
    }

    fn advance_except(&mut self, delta: i32, skip: Option<usize>) -> Result<usize, MoveError> {
        let eligible: Vec<usize> = (0..PAWNS_PER_PLAYER)
            .filter(|&i| Some(i) != skip)
            .filter(|&i| {
                let pawn = PawnRef::new(self.player, i);
                let allow = home_entry_allowed(&*self.state, pawn, delta);
                plan_move(&*self.state, pawn, delta, allow).is_ok()
            })
            .collect();

        let index = self.pick_pawn(delta, &eligible)?;
        let pawn = PawnRef::new(self.player, index);
        let allow = home_entry_allowed(self.state, pawn, delta);
        move_pawn(self.state, pawn, delta, allow, self.events)?;
        Ok(index)
    }

    /// Split 7: the first pawn fully resolves before the second is chosen.
    fn split_seven(&mut self) -> Result<(), MoveError> {
        let player = self.player;
        let first = self.ask(
            |state, d| d.choose_split(state, player),
            |a| {
                if (1..SPLIT_TOTAL).contains(&a) {
                    Ok(a)
                } else {
                    Err(MoveError::InvalidSplit(a))
                }
            },
        )?;

        let moved = self.advance_except(i32::from(first), None)?;
        self.advance_except(i32::from(SPLIT_TOTAL - first), Some(moved))?;
        Ok(())
    }

    /// Card 11 alternative: trade places with an opposing pawn.
    fn switch(&mut self) -> Result<(), MoveError> {
        if self.state.opponent_targets(self.player).is_empty() {
            return Err(MoveError::NoOpponentOnTrack);
        }
        let on_track: Vec<usize> = self
            .state
            .player(self.player)
            .pawns
            .iter()
            .filter(|p| p.position.is_on_track())
            .map(|p| usize::from(p.index))
            .collect();

        let index = self.pick_pawn(0, &on_track)?;
        let target = self.pick_target()?;
        InteractionResolver::switch(
            self.state,
            PawnRef::new(self.player, index),
            target.pawn,
            self.events,
        )
    }

    fn branch(&mut self, card: Card) -> Result<u8, MoveError> {
        let player = self.player;
        self.ask(
            |state, d| d.choose_branch(state, player, card),
            |b| match b {
                1 | 2 => Ok(b),
                _ => Err(MoveError::InvalidBranch(b)),
            },
        )
    }

    fn pick_pawn(&mut self, spaces: i32, eligible: &[usize]) -> Result<usize, MoveError> {
        if eligible.is_empty() {
            return Err(MoveError::NoMovablePawn);
        }
        let player = self.player;
        self.ask(
            |state, d| d.choose_pawn(state, player, spaces, eligible),
            |answer| match answer {
                None => Err(MoveError::NoPawnSelected),
                Some(i) if eligible.contains(&i) => Ok(i),
                Some(i) => Err(MoveError::IneligiblePawn(i)),
            },
        )
    }

    fn pick_target(&mut self) -> Result<Target, MoveError> {
        let candidates = self.state.opponent_targets(self.player);
        if candidates.is_empty() {
            return Err(MoveError::NoOpponentOnTrack);
        }
        let player = self.player;
        self.ask(
            |state, d| d.choose_target(state, player, &candidates),
            |index| {
                candidates.get(index).copied().ok_or(MoveError::InvalidTarget {
                    index,
                    available: candidates.len(),
                })
            },
        )
    }

    /// Ask until the answer validates or the attempts run out.
    fn ask<A, T>(
        &mut self,
        mut question: impl FnMut(&GameState, &mut D) -> A,
        validate: impl Fn(A) -> Result<T, MoveError>,
    ) -> Result<T, MoveError> {
        let mut attempt = 1;
        loop {
            match validate(question(&*self.state, &mut *self.decisions)) {
                Ok(answer) => return Ok(answer),
                Err(err) if retryable(&err) && attempt < self.attempts => {
                    log::warn!(
                        "{}: invalid answer ({}), asking again ({}/{})",
                        self.player,
                        err,
                        attempt,
                        self.attempts
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
