//! Static board geometry.
//!
//! The ring is the perimeter of a 16x16 grid, 4 * (16 - 1) = 60 cells,
//! split into four 15-cell quadrants, one per seat. Every per-player
//! landmark sits at a fixed offset inside its owner's quadrant, so the
//! lookups below are pure arithmetic on the seat index.

use crate::core::{PlayerId, PLAYER_COUNT};

/// Cells per side of the square the ring is drawn on.
pub const GRID_SIDE: u8 = 16;

/// Cells on the shared ring.
pub const RING_LENGTH: u8 = 4 * (GRID_SIDE - 1);

/// Cells in each quadrant of the ring.
pub const QUADRANT_LENGTH: u8 = RING_LENGTH / PLAYER_COUNT as u8;

/// Cells in each player's private home stretch.
pub const STRETCH_LENGTH: u8 = 5;

/// Extra tiles a slide carries the sliding pawn.
pub const SLIDE_LENGTH: u8 = 4;

const START_OFFSET: u8 = 0;
const SLIDE_OFFSET: u8 = 1;
const HOME_ENTRY_OFFSET: u8 = 2;

/// Ring index where `player`'s pawns enter the track.
#[must_use]
pub const fn start_tile(player: PlayerId) -> u8 {
    player.0 * QUADRANT_LENGTH + START_OFFSET
}

/// Ring index after which `player`'s forward moves divert into the stretch.
#[must_use]
pub const fn home_entry_tile(player: PlayerId) -> u8 {
    player.0 * QUADRANT_LENGTH + HOME_ENTRY_OFFSET
}

/// Ring index of `player`'s slide start (slides for everyone else).
#[must_use]
pub const fn slide_start(player: PlayerId) -> u8 {
    player.0 * QUADRANT_LENGTH + SLIDE_OFFSET
}

/// The player whose slide starts on `tile`, if any.
#[must_use]
pub fn slide_owner(tile: u8) -> Option<PlayerId> {
    PlayerId::all().find(|&p| slide_start(p) == tile)
}

/// `tile` moved `delta` cells around the ring (negative is backward).
#[must_use]
pub fn ring_add(tile: u8, delta: i32) -> u8 {
    (i32::from(tile) + delta).rem_euclid(i32::from(RING_LENGTH)) as u8
}

/// Forward distance from `from` to `to`, in `1..=RING_LENGTH`.
///
/// Equal tiles are a full lap apart, not zero.
#[must_use]
pub fn forward_distance(from: u8, to: u8) -> u8 {
    let d = (i32::from(to) - i32::from(from)).rem_euclid(i32::from(RING_LENGTH)) as u8;
    if d == 0 {
        RING_LENGTH
    } else {
        d
    }
}
