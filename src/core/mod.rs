//! Core engine types: players, RNG, configuration, state.
//!
//! These are the pieces every other module builds on. The board,
//! cards and rules modules read and write `GameState`; nothing else
//! holds game data.

pub mod player;
pub mod rng;
pub mod config;
pub mod state;

pub use player::{Color, Player, PlayerId, PlayerMap, PAWNS_PER_PLAYER, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::GameConfig;
pub use state::{GameState, Targets};
