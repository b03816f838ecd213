use thiserror::Error;

/// Errors produced while driving or validating a hand.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Insufficient chips for action")]
    InsufficientChips,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Player already folded")]
    PlayerAlreadyFolded,
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Invalid blind level {level}, minimum is {minimum}")]
    InvalidLevel { level: u8, minimum: u8 },

    /// A player or decision provider proposed an action that the current
    /// round state does not permit (wrong street, already acted, stale
    /// `to_call`/`min_raise`, raise when `reopen_available` is false, ...).
    #[error("illegal action for player {player_uid}: {reason}")]
    IllegalAction { player_uid: String, reason: String },

    /// A [`crate::provider::DecisionProvider`] failed to produce a legal
    /// action after the engine's retry budget was exhausted.
    #[error("decision provider failed for player {player_uid} after {attempts} attempts")]
    DecisionProviderFault { player_uid: String, attempts: u8 },

    /// The deck did not have enough cards left to satisfy a deal request.
    #[error("deck underflow: requested {requested} cards, {remaining} remaining")]
    DeckUnderflow { requested: usize, remaining: usize },

    /// An internal invariant was violated. Reaching this indicates an
    /// engine bug, not a bad caller input.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A replayed hand log could not be normalized into an unambiguous
    /// action (see [`crate::replay::ReplayAdapter`]).
    #[error("ambiguous replay entry for player {player_uid}: {reason}")]
    ReplayAmbiguous { player_uid: String, reason: String },
}
