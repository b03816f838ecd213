use crate::errors::GameError;
use crate::player::PlayerAction as A;
use serde::Serialize;

/// An action after legality checking and all-in clamping, expressed as the
/// *to-amount* (the player's total bet on this street once the action is
/// applied) for every variant that moves chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

/// Everything [`validate_action`] needs to know about the acting player and
/// the state of the current betting round.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    /// Chips the player has behind, not yet committed this street.
    pub stack: u32,
    /// Chips the player has already committed this street.
    pub current_bet: u32,
    /// The street's current bet that everyone must match to continue.
    pub table_current_bet: u32,
    /// The minimum legal "to" amount for a bet (when `table_current_bet`
    /// is 0) or a full raise (when it isn't): `table_current_bet +
    /// last_full_raise_size`, or the big blind for an opening bet.
    pub min_raise_to: u32,
    /// Whether a raise smaller than an all-in is currently legal. False
    /// once a short (under-the-minimum) all-in raise has come through
    /// without being matched by a full raise since.
    pub reopen_available: bool,
}

impl ActionContext {
    /// The most this player could ever put in on this street: everything
    /// already committed plus everything left in the stack.
    pub fn full_stack_room(&self) -> u32 {
        self.stack + self.current_bet
    }
}

/// Validates a player action against the current round context, returning
/// the [`ValidatedAction`] to actually execute (which may be clamped to an
/// all-in) or the [`GameError`] explaining why it's illegal.
///
/// # Examples
///
/// ```
/// use axiomind_engine::rules::{validate_action, ActionContext, ValidatedAction};
/// use axiomind_engine::player::PlayerAction;
///
/// let ctx = ActionContext {
///     stack: 950,
///     current_bet: 0,
///     table_current_bet: 50,
///     min_raise_to: 100,
///     reopen_available: true,
/// };
///
/// // Calling just matches the table's current bet.
/// let result = validate_action(&ctx, PlayerAction::Call);
/// assert!(matches!(result, Ok(ValidatedAction::Call(50))));
///
/// // Raising to less than the minimum full raise is illegal unless it's an all-in.
/// let result = validate_action(&ctx, PlayerAction::Raise(60));
/// assert!(result.is_err());
/// ```
///
/// ```
/// use axiomind_engine::rules::{validate_action, ActionContext, ValidatedAction};
/// use axiomind_engine::player::PlayerAction;
///
/// // A short stack facing a bigger bet can only call all-in.
/// let ctx = ActionContext {
///     stack: 30,
///     current_bet: 0,
///     table_current_bet: 50,
///     min_raise_to: 100,
///     reopen_available: true,
/// };
/// let result = validate_action(&ctx, PlayerAction::Call);
/// assert!(matches!(result, Ok(ValidatedAction::AllIn(30))));
/// ```
pub fn validate_action(ctx: &ActionContext, action: A) -> Result<ValidatedAction, GameError> {
    let full_stack_room = ctx.full_stack_room();

    match action {
        A::Fold => Ok(ValidatedAction::Fold),

        A::Check => {
            if ctx.current_bet == ctx.table_current_bet {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::InsufficientChips)
            }
        }

        A::Call => {
            if ctx.table_current_bet <= ctx.current_bet {
                Ok(ValidatedAction::Check)
            } else if full_stack_room <= ctx.table_current_bet {
                Ok(ValidatedAction::AllIn(full_stack_room))
            } else {
                Ok(ValidatedAction::Call(ctx.table_current_bet))
            }
        }

        A::Bet(to_amount) => {
            if ctx.table_current_bet != 0 {
                return Err(GameError::InvalidBetAmount {
                    amount: to_amount,
                    minimum: ctx.table_current_bet + 1,
                });
            }
            if to_amount == 0 {
                return Err(GameError::InvalidBetAmount { amount: 0, minimum: 1 });
            }
            if to_amount >= full_stack_room {
                Ok(ValidatedAction::AllIn(full_stack_room))
            } else if to_amount < ctx.min_raise_to {
                Err(GameError::InvalidBetAmount {
                    amount: to_amount,
                    minimum: ctx.min_raise_to,
                })
            } else {
                Ok(ValidatedAction::Bet(to_amount))
            }
        }

        A::Raise(to_amount) => {
            if ctx.table_current_bet == 0 {
                return Err(GameError::InvalidBetAmount {
                    amount: to_amount,
                    minimum: 1,
                });
            }
            if to_amount <= ctx.table_current_bet {
                return Err(GameError::InvalidBetAmount {
                    amount: to_amount,
                    minimum: ctx.table_current_bet + 1,
                });
            }
            if to_amount >= full_stack_room {
                return Ok(ValidatedAction::AllIn(full_stack_room));
            }
            if !ctx.reopen_available {
                // Only an all-in raise is legal until someone makes a full
                // raise again; this one is neither all-in nor full.
                return Err(GameError::InvalidBetAmount {
                    amount: to_amount,
                    minimum: full_stack_room,
                });
            }
            if to_amount < ctx.min_raise_to {
                Err(GameError::InvalidBetAmount {
                    amount: to_amount,
                    minimum: ctx.min_raise_to,
                })
            } else {
                Ok(ValidatedAction::Raise(to_amount))
            }
        }

        A::AllIn => Ok(ValidatedAction::AllIn(full_stack_room)),
    }
}

/// Whether a raise to `to_amount` reopens the betting round, i.e. is a
/// *full* raise rather than a short all-in. Used by the engine to decide
/// whether to update `last_full_raise_size`/`reopen_available` after a
/// raise is applied.
pub fn is_full_raise(min_raise_to: u32, to_amount: u32) -> bool {
    to_amount >= min_raise_to
}
