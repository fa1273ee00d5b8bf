//! # sorry-engine
//!
//! Movement and turn-resolution engine for the four-player Sorry! race game.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: A single [`GameState`] value holds the whole game and
//!    the [`TurnEngine`] owns it. No globals, no shared mutable board.
//!
//! 2. **No I/O**: Every player choice goes through a [`DecisionProvider`];
//!    everything that happens comes back out as a [`GameEvent`]. Console,
//!    network and test front ends plug in from outside.
//!
//! 3. **Explicit Zones**: A pawn's [`Position`] is `Start`, `Track(n)`,
//!    `HomeStretch(k)` or `Home`. Movement rules match on the zone instead
//!    of decoding integer ranges.
//!
//! 4. **Refusals Are Values**: Bad answers and impossible moves come back
//!    as [`MoveError`]s and leave the state untouched. Nothing panics on
//!    external input.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, game state
//! - `board`: Ring topology, pawn positions, movement primitives
//! - `cards`: Card kinds and the deck
//! - `effects`: Bump, slide, switch and Sorry! resolution
//! - `decisions`: The decision provider contract and a scripted provider
//! - `events`: Observable game events
//! - `rules`: Card dispatch and the turn engine
//! - `error`: Error taxonomy
//!
//! ## Example
//!
//! ```
//! use sorry_engine::{GameConfig, ScriptedDecisions, TurnEngine};
//!
//! let config = GameConfig::default().with_seed(7);
//! let mut engine = TurnEngine::new(config, ScriptedDecisions::default());
//! let report = engine.play_turn();
//! assert_eq!(report.player.index(), 0);
//! assert!(engine.state().own_pawns_exclusive());
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod decisions;
pub mod effects;
pub mod error;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Color, GameConfig, GameRng, GameState, Player, PlayerId, PlayerMap, Targets, PAWNS_PER_PLAYER,
    PLAYER_COUNT,
};

pub use crate::board::{
    home_entry_allowed, move_from_start, move_pawn, plan_from_start, plan_move, Pawn, PawnRef,
    Position, Target,
};

pub use crate::cards::{Card, Deck};

pub use crate::effects::InteractionResolver;

pub use crate::decisions::{Decision, DecisionProvider, ScriptedDecisions};

pub use crate::events::{EventLog, GameEvent};

pub use crate::rules::{TurnEngine, TurnOutcome, TurnPhase, TurnReport};

pub use crate::error::{DeckError, ErrorKind, MoveError};
