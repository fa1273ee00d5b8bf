//! Observations the engine emits.
//!
//! Every state change the rules make is reported as a [`GameEvent`], in
//! the order it happened: the card drawn, each pawn moved, each pawn
//! bumped by a landing or a slide, saved and redeemed Sorry! cards, turn
//! hand-offs and the win. Front ends render these; the engine itself
//! never prints.
//!
//! [`EventLog`] is the sink the rules write into. It also forwards every
//! event to the `log` facade at debug level.

mod event;

pub use event::{EventLog, GameEvent};
