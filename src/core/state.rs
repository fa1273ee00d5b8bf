//! Game state.
//!
//! ## GameState
//!
//! Everything that changes during a game:
//! - The four players (pawns, banked Sorry! cards)
//! - The deck
//! - Whose turn it is, and a turn counter
//!
//! The state is a plain owned value. The turn engine holds the only
//! mutable handle while a game runs; the movement and interaction
//! functions borrow it for the length of one call.

use smallvec::SmallVec;

use super::config::GameConfig;
use super::player::{Player, PlayerId, PlayerMap, PAWNS_PER_PLAYER};
use super::rng::GameRng;
use crate::board::{Pawn, PawnRef, Position, Target};
use crate::cards::Deck;

/// Opposing pawns on the track, at most 12.
pub type Targets = SmallVec<[Target; 12]>;

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    players: PlayerMap<Player>,
    deck: Deck,
    current: PlayerId,
    turn_number: u32,
}

impl GameState {
    /// Create a fresh game: all pawns at Start, nothing banked, shuffled deck,
    /// Red to play.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::info!("new game, deck seed {}", rng.seed());
        Self::with_deck(Deck::new(rng))
    }

    /// Create a fresh game around an existing deck.
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            players: PlayerMap::new(Player::new),
            deck,
            current: PlayerId::new(0),
            turn_number: 1,
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Turn counter (starts at 1). Diagnostic only.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Seed of the deck RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.deck.seed()
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    /// Iterate over all players in seating order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, p)| p)
    }

    /// Sorry! cards `player` has saved.
    #[must_use]
    pub fn banked_sorry(&self, player: PlayerId) -> u32 {
        self.players[player].banked_sorry
    }

    /// True iff all four of `player`'s pawns are Home.
    #[must_use]
    pub fn has_won(&self, player: PlayerId) -> bool {
        self.players[player].all_home()
    }

    // === Pawns ===

    #[must_use]
    pub fn pawn(&self, pawn: PawnRef) -> &Pawn {
        &self.players[pawn.player].pawns[pawn.pawn]
    }

    pub fn pawn_mut(&mut self, pawn: PawnRef) -> &mut Pawn {
        &mut self.players[pawn.player].pawns[pawn.pawn]
    }

    /// All sixteen pawns, by player then index.
    pub fn pawns(&self) -> impl Iterator<Item = &Pawn> {
        self.players().flat_map(|p| p.pawns.iter())
    }

    /// Put a pawn somewhere directly, without applying any rule.
    ///
    /// For setting up positions (tests, puzzles). Play goes through
    /// `board::move_pawn` and friends.
    pub fn place_pawn(&mut self, pawn: PawnRef, position: Position) {
        let p = self.pawn_mut(pawn);
        p.position = position;
        if position == Position::Start {
            p.lapped = false;
        }
    }

    /// Index of `player`'s pawn on a Track or HomeStretch cell, if any.
    ///
    /// Start and Home hold any number of pawns and always return `None`.
    #[must_use]
    pub fn own_pawn_at(&self, player: PlayerId, position: Position) -> Option<usize> {
        if !position.is_on_board() {
            return None;
        }
        self.players[player]
            .pawns
            .iter()
            .position(|p| p.position == position)
    }

    /// Every pawn (of any player) on ring tile `tile`.
    #[must_use]
    pub fn pawns_on_tile(&self, tile: u8) -> SmallVec<[PawnRef; 4]> {
        self.pawns()
            .filter(|p| p.position == Position::Track(tile))
            .map(Pawn::handle)
            .collect()
    }

    /// Opposing pawns on the track, ordered by player then pawn index.
    #[must_use]
    pub fn opponent_targets(&self, player: PlayerId) -> Targets {
        self.pawns()
            .filter(|p| p.owner != player)
            .filter_map(|p| {
                p.position.tile().map(|tile| Target {
                    pawn: p.handle(),
                    tile,
                })
            })
            .collect()
    }

    /// Lowest-indexed pawn of `player` waiting at Start.
    #[must_use]
    pub fn first_pawn_in_start(&self, player: PlayerId) -> Option<usize> {
        self.players[player]
            .pawns
            .iter()
            .position(|p| p.position == Position::Start)
    }

    // === Deck ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    // === Turn Advancement ===

    /// Pass play to the next seat. Returns the new current player.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.current = self.current.next();
        self.turn_number += 1;
        self.current
    }

    // === Invariants ===

    /// No two pawns of one player share a Track or HomeStretch cell.
    #[must_use]
    pub fn own_pawns_exclusive(&self) -> bool {
        self.players().all(|player| {
            (0..PAWNS_PER_PLAYER).all(|i| {
                let pos = player.pawns[i].position;
                !pos.is_on_board()
                    || player.pawns[i + 1..].iter().all(|other| other.position != pos)
            })
        })
    }
}
