//! The draw pile.
//!
//! The deck always holds the canonical 44 cards split between what is
//! still to be drawn and what has been drawn since the last reshuffle.
//! When the pile runs out it is rebuilt and reshuffled inside `draw`, so
//! callers never see an empty deck.

use crate::core::GameRng;
use crate::error::DeckError;

use super::Card;

/// Exhaustible, self-reshuffling supply of move cards.
///
/// The top of the pile is the end of `remaining`.
#[derive(Clone, Debug)]
pub struct Deck {
    remaining: Vec<Card>,
    drawn: Vec<Card>,
    rng: GameRng,
    reshuffles: u32,
}

impl Deck {
    /// Build and shuffle a full deck.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        let mut deck = Self {
            remaining: Vec::new(),
            drawn: Vec::new(),
            rng,
            reshuffles: 0,
        };
        deck.refill();
        deck
    }

    /// Draw the top card, reshuffling a fresh deck first if the pile is empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.remaining.pop() {
                self.drawn.push(card);
                return card;
            }
            self.refill();
            self.reshuffles += 1;
            log::trace!("deck exhausted, reshuffle #{}", self.reshuffles);
        }
    }

    /// Move the given cards to the top of the pile so they are drawn next,
    /// in order (`cards[0]` first).
    ///
    /// Only cards still in the pile can be stacked; on error the deck is
    /// left unchanged.
    pub fn stack(&mut self, cards: &[Card]) -> Result<(), DeckError> {
        let mut pile = self.remaining.clone();
        let mut top = Vec::with_capacity(cards.len());
        for &card in cards {
            let idx = pile
                .iter()
                .rposition(|&c| c == card)
                .ok_or(DeckError::CardUnavailable(card))?;
            top.push(pile.remove(idx));
        }
        pile.extend(top.into_iter().rev());
        self.remaining = pile;
        Ok(())
    }

    /// Cards still to be drawn, bottom first.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    /// Cards drawn since the last reshuffle, in draw order.
    #[must_use]
    pub fn drawn(&self) -> &[Card] {
        &self.drawn
    }

    /// Number of cards left before the next reshuffle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Times the deck has been rebuilt after running out.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Seed of the shuffling RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn refill(&mut self) {
        self.remaining = Card::full_deck();
        self.drawn.clear();
        self.rng.shuffle(&mut self.remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort();
        cards
    }

    #[test]
    fn test_new_deck_is_full_and_shuffled() {
        let deck = Deck::new(GameRng::new(42));
        assert_eq!(deck.len(), 44);
        assert!(deck.drawn().is_empty());
        assert_ne!(deck.remaining(), Card::full_deck().as_slice());
        assert_eq!(sorted(deck.remaining().to_vec()), Card::full_deck());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = Deck::new(GameRng::new(5));
        let b = Deck::new(GameRng::new(5));
        assert_eq!(a.remaining(), b.remaining());
    }

    #[test]
    fn test_draw_moves_card_to_drawn() {
        let mut deck = Deck::new(GameRng::new(1));
        let top = *deck.remaining().last().unwrap();

        let card = deck.draw();

        assert_eq!(card, top);
        assert_eq!(deck.len(), 43);
        assert_eq!(deck.drawn(), &[card]);
    }

    #[test]
    fn test_reshuffle_is_a_single_draw() {
        let mut deck = Deck::new(GameRng::new(3));
        for _ in 0..44 {
            deck.draw();
        }
        assert!(deck.is_empty());
        assert_eq!(deck.reshuffles(), 0);

        deck.draw();

        assert_eq!(deck.reshuffles(), 1);
        assert_eq!(deck.len(), 43);
        assert_eq!(deck.drawn().len(), 1);
    }

    #[test]
    fn test_stack_forces_draw_order() {
        let mut deck = Deck::new(GameRng::new(11));
        deck.stack(&[Card::One, Card::Five, Card::Sorry]).unwrap();

        assert_eq!(deck.draw(), Card::One);
        assert_eq!(deck.draw(), Card::Five);
        assert_eq!(deck.draw(), Card::Sorry);

        let mut all = deck.remaining().to_vec();
        all.extend_from_slice(deck.drawn());
        assert_eq!(sorted(all), Card::full_deck());
    }

    #[test]
    fn test_stack_unavailable_card_leaves_deck_alone() {
        let mut deck = Deck::new(GameRng::new(11));
        let before = deck.remaining().to_vec();

        let err = deck.stack(&[Card::Two; 5]).unwrap_err();

        assert_eq!(err, DeckError::CardUnavailable(Card::Two));
        assert_eq!(deck.remaining(), before.as_slice());
    }
}
