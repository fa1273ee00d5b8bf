//! Rules: what each card does and how a turn unfolds.
//!
//! - `dispatch` maps a drawn card onto the movement primitives and
//!   interaction rules, asking the decision provider for every choice
//! - `engine` is the turn state machine that draws cards, checks for a
//!   winner and rotates the seats
//!
//! The engine owns the [`GameState`](crate::core::GameState) for the whole
//! game; nothing else mutates it while a game runs.

mod dispatch;
pub mod engine;

pub use engine::{TurnEngine, TurnOutcome, TurnPhase, TurnReport};
