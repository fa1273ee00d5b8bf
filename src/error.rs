//! Error types.
//!
//! Nothing in the engine is fatal. Every error below describes a move or
//! an answer that was refused; the state is left untouched and the turn
//! reports the refusal as a no-op.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::cards::Card;

/// Coarse classification of a [`MoveError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The decision provider answered out of range or picked something ineligible.
    InvalidSelection,
    /// Nothing exists for the card to act on.
    NoLegalTarget,
    /// A movement primitive refused the move.
    IllegalMove,
}

/// A refused move or decision.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("branch {0} is not offered (expected 1 or 2)")]
    InvalidBranch(u8),
    #[error("split {0} is outside 1..=6")]
    InvalidSplit(u8),
    #[error("pawn {0} is not eligible")]
    IneligiblePawn(usize),
    #[error("no pawn was selected")]
    NoPawnSelected,
    #[error("target {index} is out of range ({available} candidates)")]
    InvalidTarget { index: usize, available: usize },
    #[error("no pawn can make this move")]
    NoMovablePawn,
    #[error("no pawn waiting in Start")]
    NoPawnInStart,
    #[error("no opposing pawn on the track")]
    NoOpponentOnTrack,
    #[error("{0} is occupied by an own pawn")]
    BlockedByOwnPawn(Position),
    #[error("cannot retreat past the home stretch entrance")]
    StretchUnderflow,
    #[error("pawn is not on the board")]
    NotOnBoard,
    #[error("target is not an opposing pawn on the track")]
    NotAnOpponent,
}

impl MoveError {
    /// Which branch of the taxonomy this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoveError::InvalidBranch(_)
            | MoveError::InvalidSplit(_)
            | MoveError::IneligiblePawn(_)
            | MoveError::NoPawnSelected
            | MoveError::InvalidTarget { .. }
            | MoveError::NotAnOpponent => ErrorKind::InvalidSelection,
            MoveError::NoMovablePawn | MoveError::NoPawnInStart | MoveError::NoOpponentOnTrack => {
                ErrorKind::NoLegalTarget
            }
            MoveError::BlockedByOwnPawn(_) | MoveError::StretchUnderflow | MoveError::NotOnBoard => {
                ErrorKind::IllegalMove
            }
        }
    }
}

/// Deck manipulation errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("no {0} card left to stack")]
    CardUnavailable(Card),
}
