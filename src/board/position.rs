//! Pawn positions and pawn handles.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where a pawn is. Each zone is its own variant; tile and stretch
/// indices never share a numeric range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet on the board.
    Start,
    /// Absolute index on the shared ring, `0..RING_LENGTH`.
    Track(u8),
    /// Index into the owner's private stretch, `0..STRETCH_LENGTH`.
    HomeStretch(u8),
    /// Finished.
    Home,
}

impl Position {
    /// The ring tile, if on the track.
    #[must_use]
    pub const fn tile(self) -> Option<u8> {
        match self {
            Position::Track(t) => Some(t),
            _ => None,
        }
    }

    /// On the track or in the home stretch (i.e. can be moved by a card).
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        matches!(self, Position::Track(_) | Position::HomeStretch(_))
    }

    #[must_use]
    pub const fn is_on_track(self) -> bool {
        matches!(self, Position::Track(_))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Start => f.write_str("Start"),
            Position::Track(t) => write!(f, "Track {}", t),
            Position::HomeStretch(k) => write!(f, "HomeStretch {}", k),
            Position::Home => f.write_str("Home"),
        }
    }
}

/// A single pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pawn {
    /// Owning player.
    pub owner: PlayerId,

    /// Index 0-3 within the owner's pawns.
    pub index: u8,

    /// Current position.
    pub position: Position,

    /// Has passed its owner's start tile moving forward since leaving
    /// Start. Cleared whenever the pawn is sent back to Start.
    pub lapped: bool,
}

impl Pawn {
    /// A pawn waiting at Start.
    #[must_use]
    pub const fn new(owner: PlayerId, index: u8) -> Self {
        Self {
            owner,
            index,
            position: Position::Start,
            lapped: false,
        }
    }

    /// Handle for this pawn.
    #[must_use]
    pub const fn handle(&self) -> PawnRef {
        PawnRef::new(self.owner, self.index as usize)
    }

    /// Put the pawn back at Start.
    pub fn send_to_start(&mut self) {
        self.position = Position::Start;
        self.lapped = false;
    }
}

/// Names one pawn: its owner and its index within the owner's pawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PawnRef {
    pub player: PlayerId,
    pub pawn: usize,
}

impl PawnRef {
    #[must_use]
    pub const fn new(player: PlayerId, pawn: usize) -> Self {
        Self { player, pawn }
    }
}

impl std::fmt::Display for PawnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.player.color().letter(), self.pawn + 1)
    }
}

/// An opposing pawn on the track that a switch or Sorry! can aim at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub pawn: PawnRef,
    pub tile: u8,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pawn {} at Track {}", self.pawn.player, self.pawn, self.tile)
    }
}
