//! Turn engine.
//!
//! ## Phases
//!
//! ```text
//! AwaitSavedCardDecision --(redeem)--------------------+
//!        |                                              v
//!        +--> DrawCard --> ResolveCard(card) --> CheckWin { redraw }
//!                ^                                      |
//!                +---------- card 2 --------------------+
//!                                                       |
//!            AdvanceTurn <------------------------------+--> Finished(winner)
//! ```
//!
//! Each [`TurnEngine::step`] performs exactly one transition. A card that
//! does nothing still ends the turn; only card 2 draws again, and it does
//! so whether or not its move succeeded.

use serde::{Deserialize, Serialize};

use super::dispatch::CardDispatch;
use crate::cards::Card;
use crate::core::{GameConfig, GameState, PlayerId};
use crate::decisions::DecisionProvider;
use crate::error::{ErrorKind, MoveError};
use crate::events::{EventLog, GameEvent};

/// Where the engine is within the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Turn start: offer a saved Sorry! card if the player has one.
    AwaitSavedCardDecision,
    /// Draw the next card.
    DrawCard,
    /// Apply the drawn card.
    ResolveCard(Card),
    /// See whether the acting player has won; `redraw` after a 2.
    CheckWin { redraw: bool },
    /// Pass play to the next seat.
    AdvanceTurn,
    /// Game over.
    Finished(PlayerId),
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Play passed to `next`.
    Continue { next: PlayerId },
    /// The game is over.
    Won(PlayerId),
}

/// Everything that happened during one player's turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: PlayerId,
    /// Cards drawn this turn, in order (more than one after a 2).
    pub cards: Vec<Card>,
    pub events: Vec<GameEvent>,
    pub outcome: TurnOutcome,
}

/// Owns a game and drives it turn by turn.
///
/// The engine holds the only mutable handle on the [`GameState`]. All
/// choices come from the decision provider `D`.
pub struct TurnEngine<D: DecisionProvider> {
    state: GameState,
    decisions: D,
    config: GameConfig,
    phase: TurnPhase,
    events: EventLog,
}

impl<D: DecisionProvider> TurnEngine<D> {
    /// Start a fresh game.
    pub fn new(config: GameConfig, decisions: D) -> Self {
        let state = GameState::new(&config);
        Self::from_state(state, decisions, config)
    }

    /// Take over an existing position at the start of its current player's turn.
    pub fn from_state(state: GameState, decisions: D, config: GameConfig) -> Self {
        let phase = match PlayerId::all().find(|&p| state.has_won(p)) {
            Some(winner) => TurnPhase::Finished(winner),
            None => TurnPhase::AwaitSavedCardDecision,
        };
        Self {
            state,
            decisions,
            config,
            phase,
            events: EventLog::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state, for setting up positions between turns.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn decisions(&self) -> &D {
        &self.decisions
    }

    pub fn decisions_mut(&mut self) -> &mut D {
        &mut self.decisions
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The winner, once there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::Finished(winner) => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Give up the engine and keep the final state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Events recorded since the last `step` or `take_events`.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Driving ===

    /// Perform one phase transition and return the events it produced.
    pub fn step(&mut self) -> Vec<GameEvent> {
        let player = self.state.current_player();
        self.phase = match self.phase {
            TurnPhase::Finished(winner) => TurnPhase::Finished(winner),
            TurnPhase::AwaitSavedCardDecision => {
                if self.state.banked_sorry(player) > 0
                    && self.decisions.use_banked_sorry(&self.state, player)
                {
                    self.redeem_banked_sorry(player);
                    TurnPhase::CheckWin { redraw: false }
                } else {
                    TurnPhase::DrawCard
                }
            }
            TurnPhase::DrawCard => {
                let card = self.state.deck_mut().draw();
                log::info!("turn {}: {} drew {}", self.state.turn_number(), player, card);
                self.events.push(GameEvent::CardDrawn { player, card });
                TurnPhase::ResolveCard(card)
            }
            TurnPhase::ResolveCard(card) => TurnPhase::CheckWin {
                redraw: self.dispatch(player, card),
            },
            TurnPhase::CheckWin { redraw } => match self.check_win() {
                Some(winner) => TurnPhase::Finished(winner),
                None if redraw => {
                    self.events.push(GameEvent::DrawAgain { player });
                    TurnPhase::DrawCard
                }
                None => TurnPhase::AdvanceTurn,
            },
            TurnPhase::AdvanceTurn => {
                let next = self.state.advance_turn();
                let turn_number = self.state.turn_number();
                log::info!("turn {}: {} to play", turn_number, next);
                self.events.push(GameEvent::TurnAdvanced {
                    from: player,
                    to: next,
                    turn_number,
                });
                TurnPhase::AwaitSavedCardDecision
            }
        };
        self.events.drain()
    }

    /// Play until the turn passes to the next player or someone wins.
    pub fn play_turn(&mut self) -> TurnReport {
        let player = self.state.current_player();
        let mut events = self.events.drain();

        while !self.is_finished() {
            let advancing = self.phase == TurnPhase::AdvanceTurn;
            events.extend(self.step());
            if advancing {
                break;
            }
        }

        let cards = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::CardDrawn { card, .. } => Some(*card),
                _ => None,
            })
            .collect();
        let outcome = match self.phase {
            TurnPhase::Finished(winner) => TurnOutcome::Won(winner),
            _ => TurnOutcome::Continue {
                next: self.state.current_player(),
            },
        };
        TurnReport {
            player,
            cards,
            events,
            outcome,
        }
    }

    /// Play whole turns until someone wins or `turn_limit` turns have run.
    pub fn play_game(&mut self, turn_limit: u32) -> Option<PlayerId> {
        for _ in 0..turn_limit {
            if let TurnOutcome::Won(winner) = self.play_turn().outcome {
                return Some(winner);
            }
        }
        self.winner()
    }

    /// Resolve `card` for the current player right now, outside the phase cycle.
    ///
    /// Runs the win check afterwards. Returns whether the player would
    /// draw again. Does nothing once the game is over. Events are
    /// collected for the next `step` or `take_events`.
    pub fn resolve_card(&mut self, card: Card) -> bool {
        if self.is_finished() {
            return false;
        }
        let player = self.state.current_player();
        let redraw = self.dispatch(player, card);
        if let Some(winner) = self.check_win() {
            self.phase = TurnPhase::Finished(winner);
        }
        redraw
    }

    // === Internals ===

    fn dispatch(&mut self, player: PlayerId, card: Card) -> bool {
        let result = CardDispatch {
            state: &mut self.state,
            decisions: &mut self.decisions,
            events: &mut self.events,
            player,
            attempts: self.config.attempts(),
        }
        .resolve(card);
        if let Err(reason) = result {
            self.reject(player, reason);
        }
        card == Card::Two
    }

    fn redeem_banked_sorry(&mut self, player: PlayerId) {
        let p = self.state.player_mut(player);
        p.banked_sorry -= 1;
        let banked = p.banked_sorry;
        self.events.push(GameEvent::BankedSorryRedeemed { player, banked });

        let result = CardDispatch {
            state: &mut self.state,
            decisions: &mut self.decisions,
            events: &mut self.events,
            player,
            attempts: self.config.attempts(),
        }
        .play_sorry();
        if let Err(reason) = result {
            self.reject(player, reason);
        }
    }

    fn reject(&mut self, player: PlayerId, reason: MoveError) {
        match reason.kind() {
            ErrorKind::InvalidSelection => log::warn!("{}: move rejected: {}", player, reason),
            _ => log::info!("{}: no move: {}", player, reason),
        }
        self.events.push(GameEvent::MoveRejected { player, reason });
    }

    fn check_win(&mut self) -> Option<PlayerId> {
        let winner = PlayerId::all().find(|&p| self.state.has_won(p))?;
        log::info!("{} wins on turn {}", winner, self.state.turn_number());
        self.events.push(GameEvent::PlayerWon { player: winner });
        Some(winner)
    }
}
