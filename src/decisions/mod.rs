//! Decision providers.
//!
//! The engine never reads input. Whenever a card leaves the player a
//! choice it asks a [`DecisionProvider`]: a console prompt, a network
//! client, a script or a test double all look the same to the rules.
//!
//! Answers are raw values. The engine validates every one of them and
//! treats out-of-range or ineligible answers as invalid selections, so a
//! provider can never put the game into an illegal state.
//!
//! ## Decision points
//!
//! | Method | Asked when | Valid answers |
//! |---|---|---|
//! | `choose_branch` | cards 1, 2, 7, 10, 11, Sorry! | 1 or 2 |
//! | `choose_split` | card 7, split branch | 1..=6 |
//! | `choose_pawn` | any card moving an own pawn | an index from `eligible` |
//! | `choose_target` | switch, Sorry! | index into `candidates` |
//! | `use_banked_sorry` | turn start with a saved Sorry! card | yes / no |

mod scripted;

pub use scripted::{Decision, ScriptedDecisions};

use crate::board::Target;
use crate::cards::Card;
use crate::core::{GameState, PlayerId};

/// Source of player choices.
pub trait DecisionProvider {
    /// Pick branch 1 or 2 of a two-way card.
    ///
    /// | Card | 1 | 2 |
    /// |---|---|---|
    /// | 1, 2 | move a pawn out of Start | move forward |
    /// | 7 | move one pawn 7 | split 7 over two pawns |
    /// | 10 | forward 10 | back 1 |
    /// | 11 | forward 11 | switch with an opponent |
    /// | Sorry! | play now | save for later |
    fn choose_branch(&mut self, state: &GameState, player: PlayerId, card: Card) -> u8;

    /// Spaces (1-6) for the first pawn of a split 7; the second moves the rest.
    fn choose_split(&mut self, state: &GameState, player: PlayerId) -> u8;

    /// Pick one of `eligible` (pawn indices of `player`), or `None` to pass.
    ///
    /// `spaces` is the signed distance the pawn will move, or 0 when the
    /// choice is for a switch.
    fn choose_pawn(
        &mut self,
        state: &GameState,
        player: PlayerId,
        spaces: i32,
        eligible: &[usize],
    ) -> Option<usize>;

    /// Pick an opposing pawn by its index into `candidates`.
    fn choose_target(&mut self, state: &GameState, player: PlayerId, candidates: &[Target]) -> usize;

    /// Spend a saved Sorry! card instead of drawing this turn?
    fn use_banked_sorry(&mut self, state: &GameState, player: PlayerId) -> bool;
}

impl<D: DecisionProvider + ?Sized> DecisionProvider for &mut D {
    fn choose_branch(&mut self, state: &GameState, player: PlayerId, card: Card) -> u8 {
        (**self).choose_branch(state, player, card)
    }

    fn choose_split(&mut self, state: &GameState, player: PlayerId) -> u8 {
        (**self).choose_split(state, player)
    }

    fn choose_pawn(
        &mut self,
        state: &GameState,
        player: PlayerId,
        spaces: i32,
        eligible: &[usize],
    ) -> Option<usize> {
        (**self).choose_pawn(state, player, spaces, eligible)
    }

    fn choose_target(&mut self, state: &GameState, player: PlayerId, candidates: &[Target]) -> usize {
        (**self).choose_target(state, player, candidates)
    }

    fn use_banked_sorry(&mut self, state: &GameState, player: PlayerId) -> bool {
        (**self).use_banked_sorry(state, player)
    }
}
