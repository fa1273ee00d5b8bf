//! The board: geometry, positions and movement.
//!
//! ## Zones
//!
//! A pawn is always in exactly one of four zones, see [`Position`]:
//! Start, a tile of the shared 60-cell ring, a cell of its owner's
//! private 5-cell home stretch, or Home.
//!
//! ## Topology
//!
//! Per-player landmarks (start tile, home-entry tile, slide start) are
//! fixed offsets into each player's 15-cell quadrant of the ring.
//!
//! ## Movement
//!
//! [`move_pawn`] and [`move_from_start`] are the primitives every card
//! power is built from.

mod movement;
mod position;
mod topology;

pub use movement::{home_entry_allowed, move_from_start, move_pawn, plan_from_start, plan_move};
pub use position::{Pawn, PawnRef, Position, Target};
pub use topology::{
    forward_distance, home_entry_tile, ring_add, slide_owner, slide_start, start_tile, GRID_SIDE,
    QUADRANT_LENGTH, RING_LENGTH, SLIDE_LENGTH, STRETCH_LENGTH,
};
