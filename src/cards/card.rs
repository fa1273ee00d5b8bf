//! Card kinds.
//!
//! Ten ordinary values (no 6 or 9) plus the Sorry! card, which carries
//! the value 13 wherever a number is needed.

use serde::{Deserialize, Serialize};

/// One of the eleven card kinds in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    One,
    Two,
    Three,
    Four,
    Five,
    Seven,
    Eight,
    Ten,
    Eleven,
    Twelve,
    Sorry,
}

impl Card {
    /// Every kind, in ascending value order.
    pub const ALL: [Card; 11] = [
        Card::One,
        Card::Two,
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Seven,
        Card::Eight,
        Card::Ten,
        Card::Eleven,
        Card::Twelve,
        Card::Sorry,
    ];

    /// Copies of each kind in a full deck.
    pub const COPIES: usize = 4;

    /// Numeric value. The Sorry! card is 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Card::One => 1,
            Card::Two => 2,
            Card::Three => 3,
            Card::Four => 4,
            Card::Five => 5,
            Card::Seven => 7,
            Card::Eight => 8,
            Card::Ten => 10,
            Card::Eleven => 11,
            Card::Twelve => 12,
            Card::Sorry => 13,
        }
    }

    /// The card with the given value, if one exists.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Card> {
        Card::ALL.into_iter().find(|c| c.value() == value)
    }

    /// Cards that ask the player to pick between two effects.
    #[must_use]
    pub const fn has_branches(self) -> bool {
        matches!(
            self,
            Card::One | Card::Two | Card::Seven | Card::Ten | Card::Eleven | Card::Sorry
        )
    }

    /// One-line rule text.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Card::One => "Move a pawn from Start OR move forward 1 space.",
            Card::Two => "Move a pawn from Start OR move forward 2 spaces. Draw again!",
            Card::Three => "Move forward 3 spaces.",
            Card::Four => "Move backward 4 spaces.",
            Card::Five => "Move forward 5 spaces.",
            Card::Seven => "Move forward 7 spaces OR split between 2 pawns.",
            Card::Eight => "Move forward 8 spaces.",
            Card::Ten => "Move forward 10 spaces OR move backward 1 space.",
            Card::Eleven => "Move forward 11 spaces OR switch with an opponent.",
            Card::Twelve => "Move forward 12 spaces.",
            Card::Sorry => "Sorry! Bump an opponent now OR save for later.",
        }
    }

    /// The canonical 44-card multiset, in value order.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        Card::ALL
            .iter()
            .flat_map(|&c| std::iter::repeat(c).take(Card::COPIES))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Sorry => f.write_str("Sorry!"),
            other => write!(f, "{}", other.value()),
        }
    }
}
