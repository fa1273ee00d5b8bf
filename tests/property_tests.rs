//! Property tests.
//!
//! Random seeds and random (often invalid) decision streams must never
//! break the deck composition or put two pawns of one player on the same
//! cell.

use proptest::prelude::*;

use sorry_engine::{
    Card, DecisionProvider, Deck, GameConfig, GameRng, GameState, PlayerId, Position, Target,
    TurnEngine,
};

/// Answers every question from a fixed byte stream, in range or not.
struct FuzzDecisions {
    bytes: Vec<u8>,
    cursor: usize,
}

impl FuzzDecisions {
    fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, cursor: 0 }
    }

    fn next(&mut self) -> u8 {
        if self.bytes.is_empty() {
            return 0;
        }
        let b = self.bytes[self.cursor % self.bytes.len()];
        self.cursor += 1;
        b
    }
}

impl DecisionProvider for FuzzDecisions {
    fn choose_branch(&mut self, _: &GameState, _: PlayerId, _: Card) -> u8 {
        self.next() % 4
    }

    fn choose_split(&mut self, _: &GameState, _: PlayerId) -> u8 {
        self.next() % 9
    }

    fn choose_pawn(&mut self, _: &GameState, _: PlayerId, _: i32, eligible: &[usize]) -> Option<usize> {
        match self.next() % 8 {
            0 => None,
            n @ 1..=5 => Some(usize::from(n) - 1),
            n => eligible.get(usize::from(n) % eligible.len().max(1)).copied(),
        }
    }

    fn choose_target(&mut self, _: &GameState, _: PlayerId, candidates: &[Target]) -> usize {
        usize::from(self.next()) % (candidates.len() + 2)
    }

    fn use_banked_sorry(&mut self, _: &GameState, _: PlayerId) -> bool {
        self.next() % 2 == 0
    }
}

fn composition_intact(deck: &Deck) -> bool {
    let mut cards: Vec<Card> = deck.remaining().iter().chain(deck.drawn()).copied().collect();
    cards.sort();
    let mut full = Card::full_deck();
    full.sort();
    cards == full
}

fn positions_valid(state: &GameState) -> bool {
    state.pawns().all(|p| match p.position {
        Position::Track(t) => t < 60,
        Position::HomeStretch(k) => k < 5,
        Position::Start | Position::Home => true,
    })
}

proptest! {
    #[test]
    fn prop_deck_composition(seed in any::<u64>(), draws in 0usize..200) {
        let mut deck = Deck::new(GameRng::new(seed));
        for _ in 0..draws {
            deck.draw();
            prop_assert!(composition_intact(&deck));
        }
        prop_assert_eq!(deck.reshuffles() as usize, draws.saturating_sub(1) / 44);
    }

    #[test]
    fn prop_invariants_under_fuzzed_decisions(
        seed in any::<u64>(),
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        attempts in 1u8..4,
        steps in 1usize..600,
    ) {
        let config = GameConfig::default().with_seed(seed).with_decision_attempts(attempts);
        let mut engine = TurnEngine::new(config, FuzzDecisions::new(bytes));

        for _ in 0..steps {
            let current = engine.state().current_player();
            engine.step();
            let state = engine.state();

            prop_assert!(state.own_pawns_exclusive());
            prop_assert!(positions_valid(state));
            prop_assert!(composition_intact(state.deck()));
            let next = state.current_player();
            prop_assert!(next == current || next == current.next());

            if let Some(winner) = engine.winner() {
                prop_assert!(state.has_won(winner));
                break;
            }
        }
    }

    #[test]
    fn prop_seeded_play_is_deterministic(
        seed in any::<u64>(),
        bytes in prop::collection::vec(any::<u8>(), 1..32),
    ) {
        let run = |bytes: Vec<u8>| {
            let config = GameConfig::default().with_seed(seed);
            let mut engine = TurnEngine::new(config, FuzzDecisions::new(bytes));
            (0..40).map(|_| engine.play_turn()).collect::<Vec<_>>()
        };
        prop_assert_eq!(run(bytes.clone()), run(bytes));
    }
}
