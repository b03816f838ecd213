//! # axiomind-engine: Poker Game Engine Core
//!
//! A deterministic No-Limit Texas Hold'em engine for 2-10 players. Provides
//! game state management, hand evaluation, side-pot distribution, and
//! comprehensive logging with reproducible RNG, so a hand can be replayed
//! bit-for-bit from a seed or from a recorded action log.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`engine`] - Main game orchestration and hand execution
//! - [`game`] - Table/seat state, button rotation, round bookkeeping
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`player`] - Player state, actions, and stack management
//! - [`pot`] - Pot calculation and side pot handling
//! - [`provider`] - Pluggable source of per-seat decisions
//! - [`replay`] - Decision provider backed by a recorded action log
//! - [`rules`] - Betting validation
//! - [`logger`] - Event logging and HandRecord serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use axiomind_engine::cards::{Card, Rank, Suit};
//! use axiomind_engine::hand::evaluate_hand;
//!
//! // Evaluate a 7-card poker hand
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let strength = evaluate_hand(&cards);
//! println!("Hand strength: {:?}", strength.category);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use axiomind_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will have identical card order
//! ```
//!
//! ## Action Validation
//!
//! Validate player actions against the current round context:
//!
//! ```rust
//! use axiomind_engine::rules::{validate_action, ActionContext};
//! use axiomind_engine::player::PlayerAction;
//!
//! let ctx = ActionContext {
//!     stack: 950,
//!     current_bet: 0,
//!     table_current_bet: 50,
//!     min_raise_to: 100,
//!     reopen_available: true,
//! };
//!
//! match validate_action(&ctx, PlayerAction::Call) {
//!     Ok(validated) => println!("Valid action: {:?}", validated),
//!     Err(e) => println!("Invalid action: {}", e),
//! }
//! ```
//!
//! ## Driving a Hand
//!
//! The engine suspends at every decision point; the caller supplies actions
//! through a [`provider::DecisionProvider`]:
//!
//! ```rust
//! use axiomind_engine::engine::{Engine, EngineConfig, StepStatus};
//! use axiomind_engine::player::PlayerAction;
//! use axiomind_engine::provider::DecisionProvider;
//! use axiomind_engine::engine::Snapshot;
//!
//! struct AlwaysCall;
//! impl DecisionProvider for AlwaysCall {
//!     fn get_decision(&mut self, _p: &str, snap: &Snapshot) -> Option<PlayerAction> {
//!         Some(if snap.table_current_bet == 0 { PlayerAction::Check } else { PlayerAction::Call })
//!     }
//!     fn has_decision_for(&self, _p: &str) -> bool { true }
//!     fn reset_for_new_hand(&mut self) {}
//! }
//!
//! let config = EngineConfig { rng_seed: 7, ..EngineConfig::default() };
//! let mut engine = Engine::new(config, vec!["p1".into(), "p2".into()]).unwrap();
//! engine.begin_hand().unwrap();
//! let mut provider = AlwaysCall;
//! while engine.step(&mut provider).unwrap() != StepStatus::HandComplete {}
//! assert!(engine.result().is_some());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod provider;
pub mod replay;
pub mod rules;
