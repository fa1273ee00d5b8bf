//! Cards and the deck.
//!
//! - [`Card`]: the eleven card kinds (1, 2, 3, 4, 5, 7, 8, 10, 11, 12, Sorry!)
//! - [`Deck`]: the 44-card draw pile with automatic reshuffle
//!
//! What each card *does* lives in `rules::dispatch`; this module only
//! knows what the cards are and how they are drawn.

mod card;
mod deck;

pub use card::Card;
pub use deck::Deck;
