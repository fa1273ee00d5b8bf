//! Scripted decisions for tests, replays and demos.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::DecisionProvider;
use crate::board::Target;
use crate::cards::Card;
use crate::core::{GameState, PlayerId};

/// One scripted answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Branch(u8),
    Split(u8),
    Pawn(Option<usize>),
    Target(usize),
    UseBanked(bool),
}

/// Answers decisions from a fixed script, in order.
///
/// When the script is empty, or its next answer is for a different kind
/// of decision, the first offered option is used instead (branch 1,
/// split 1, first eligible pawn, first target, keep banked cards) and
/// the mismatched answer stays queued.
///
/// ```
/// use sorry_engine::decisions::{Decision, ScriptedDecisions};
///
/// let script = ScriptedDecisions::new([Decision::Branch(1), Decision::Pawn(Some(0))]);
/// assert_eq!(script.remaining().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    script: VecDeque<Decision>,
    fallbacks: usize,
}

impl ScriptedDecisions {
    pub fn new(script: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallbacks: 0,
        }
    }

    /// Append more answers to the end of the script.
    pub fn extend(&mut self, more: impl IntoIterator<Item = Decision>) {
        self.script.extend(more);
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &VecDeque<Decision> {
        &self.script
    }

    /// How many times a default answer was used instead of the script.
    #[must_use]
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    fn next<T>(&mut self, what: &str, pick: impl Fn(Decision) -> Option<T>, default: T) -> T {
        if let Some(answer) = self.script.front().copied().and_then(&pick) {
            self.script.pop_front();
            return answer;
        }
        self.fallbacks += 1;
        log::warn!(
            "scripted decisions: no {} answer queued (next: {:?}), using default",
            what,
            self.script.front()
        );
        default
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn choose_branch(&mut self, _state: &GameState, _player: PlayerId, _card: Card) -> u8 {
        self.next(
            "branch",
            |d| match d {
                Decision::Branch(b) => Some(b),
                _ => None,
            },
            1,
        )
    }

    fn choose_split(&mut self, _state: &GameState, _player: PlayerId) -> u8 {
        self.next(
            "split",
            |d| match d {
                Decision::Split(s) => Some(s),
                _ => None,
            },
            1,
        )
    }

    fn choose_pawn(
        &mut self,
        _state: &GameState,
        _player: PlayerId,
        _spaces: i32,
        eligible: &[usize],
    ) -> Option<usize> {
        self.next(
            "pawn",
            |d| match d {
                Decision::Pawn(p) => Some(p),
                _ => None,
            },
            eligible.first().copied(),
        )
    }

    fn choose_target(&mut self, _state: &GameState, _player: PlayerId, _candidates: &[Target]) -> usize {
        self.next(
            "target",
            |d| match d {
                Decision::Target(t) => Some(t),
                _ => None,
            },
            0,
        )
    }

    fn use_banked_sorry(&mut self, _state: &GameState, _player: PlayerId) -> bool {
        self.next(
            "banked Sorry!",
            |d| match d {
                Decision::UseBanked(b) => Some(b),
                _ => None,
            },
            false,
        )
    }
}
