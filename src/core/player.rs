//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier for the four seats (0-3).
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! A seat at the table: its color, its four pawns and its banked
//! Sorry! cards.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::{self, Pawn, Position};

/// Number of players in a game. Always four.
pub const PLAYER_COUNT: usize = 4;

/// Number of pawns each player owns.
pub const PAWNS_PER_PLAYER: usize = 4;

/// Player identifier (0-3).
///
/// Player indices are 0-based: the first player is `PlayerId(0)` (Red).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player id must be 0-3");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player seated after this one, wrapping 3 -> 0.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// The color this seat plays.
    #[must_use]
    pub const fn color(self) -> Color {
        Color::ALL[self.index()]
    }

    /// Iterate over all four player IDs in seating order.
    ///
    /// ```
    /// use sorry_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color())
    }
}

/// Seat colors, in seating order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    /// All colors, indexed by seat.
    pub const ALL: [Color; PLAYER_COUNT] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

    /// Single-letter label used in compact pawn tokens ("R1", "B3").
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Green => 'G',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
        };
        f.write_str(name)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `[T; 4]` with one entry per seat.
/// Use `PlayerMap::new()` to create with a factory function.
///
/// ## Example
///
/// ```
/// use sorry_engine::core::{PlayerId, PlayerMap};
///
/// let mut banked: PlayerMap<u32> = PlayerMap::new(|_| 0);
///
/// banked[PlayerId::new(1)] += 1;
/// assert_eq!(banked[PlayerId::new(1)], 1);
/// assert_eq!(banked[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One seat at the table.
///
/// Start and home-entry tiles are fixed by the seat; see [`board`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat.
    pub id: PlayerId,

    /// Color label (derived from the seat).
    pub color: Color,

    /// The four pawns, indexed 0-3.
    pub pawns: [Pawn; PAWNS_PER_PLAYER],

    /// Sorry! cards saved for a later turn.
    pub banked_sorry: u32,
}

impl Player {
    /// Create a player with all pawns at Start and nothing banked.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            color: id.color(),
            pawns: std::array::from_fn(|i| Pawn::new(id, i as u8)),
            banked_sorry: 0,
        }
    }

    /// Ring index where this player's pawns enter the track.
    #[must_use]
    pub fn start_tile(&self) -> u8 {
        board::start_tile(self.id)
    }

    /// Ring index after which forward movement diverts into the home stretch.
    #[must_use]
    pub fn home_entry_tile(&self) -> u8 {
        board::home_entry_tile(self.id)
    }

    /// True when every pawn has reached Home.
    #[must_use]
    pub fn all_home(&self) -> bool {
        self.pawns.iter().all(|p| p.position == Position::Home)
    }
}
