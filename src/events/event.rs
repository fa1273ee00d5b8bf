//! Game event types.

use serde::{Deserialize, Serialize};

use crate::board::{PawnRef, Position};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::MoveError;

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card was drawn by the acting player.
    CardDrawn { player: PlayerId, card: Card },

    /// A pawn left Start for its start tile.
    PawnEntered { pawn: PawnRef, tile: u8 },

    /// A pawn moved under a card's power.
    PawnMoved { pawn: PawnRef, from: Position, to: Position },

    /// A pawn finished.
    ReachedHome { pawn: PawnRef },

    /// A pawn was sent back to Start from `tile`.
    PawnBumped { pawn: PawnRef, tile: u8, by: PawnRef },

    /// A pawn landed on another color's slide and was carried along it.
    SlideTriggered { pawn: PawnRef, from: u8, to: u8, slide_owner: PlayerId },

    /// Two pawns exchanged tiles (card 11).
    PawnsSwitched { pawn: PawnRef, target: PawnRef, pawn_tile: u8, target_tile: u8 },

    /// A Start pawn replaced an opponent on the track.
    SorryPlayed { pawn: PawnRef, target: PawnRef, tile: u8 },

    /// A Sorry! card was banked.
    CardSaved { player: PlayerId, banked: u32 },

    /// A banked Sorry! card was spent at the start of a turn.
    BankedSorryRedeemed { player: PlayerId, banked: u32 },

    /// A card or decision produced no movement.
    MoveRejected { player: PlayerId, reason: MoveError },

    /// The acting player draws again (card 2).
    DrawAgain { player: PlayerId },

    /// Play passed to the next seat.
    TurnAdvanced { from: PlayerId, to: PlayerId, turn_number: u32 },

    /// All four of a player's pawns are Home.
    PlayerWon { player: PlayerId },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::CardDrawn { player, card } => write!(f, "{} drew {}", player, card),
            GameEvent::PawnEntered { pawn, tile } => {
                write!(f, "{} moved from Start to Track {}", pawn, tile)
            }
            GameEvent::PawnMoved { pawn, from, to } => write!(f, "{} moved {} -> {}", pawn, from, to),
            GameEvent::ReachedHome { pawn } => write!(f, "{} reached Home", pawn),
            GameEvent::PawnBumped { pawn, tile, by } => {
                write!(f, "{} bumped from Track {} by {}", pawn, tile, by)
            }
            GameEvent::SlideTriggered { pawn, from, to, slide_owner } => {
                write!(f, "{} slid on {}'s slide from {} to {}", pawn, slide_owner, from, to)
            }
            GameEvent::PawnsSwitched { pawn, target, pawn_tile, target_tile } => write!(
                f,
                "{} (now Track {}) switched with {} (now Track {})",
                pawn, pawn_tile, target, target_tile
            ),
            GameEvent::SorryPlayed { pawn, target, tile } => {
                write!(f, "Sorry! {} replaced {} on Track {}", pawn, target, tile)
            }
            GameEvent::CardSaved { player, banked } => {
                write!(f, "{} saved a Sorry! card ({} banked)", player, banked)
            }
            GameEvent::BankedSorryRedeemed { player, banked } => {
                write!(f, "{} redeemed a saved Sorry! card ({} left)", player, banked)
            }
            GameEvent::MoveRejected { player, reason } => write!(f, "{}: no move ({})", player, reason),
            GameEvent::DrawAgain { player } => write!(f, "{} draws again", player),
            GameEvent::TurnAdvanced { from, to, turn_number } => {
                write!(f, "turn {}: {} -> {}", turn_number, from, to)
            }
            GameEvent::PlayerWon { player } => write!(f, "{} wins", player),
        }
    }
}

/// Ordered sink for [`GameEvent`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event.
    pub fn push(&mut self, event: GameEvent) {
        log::debug!("{}", event);
        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
