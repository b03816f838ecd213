use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// A player's table position relative to the dealer button. Heads-up play
/// only ever uses `SmallBlind`/`BigBlind` (the button posts the small
/// blind); three or more players add `UnderTheGun`/`Cutoff`/`Button` and,
/// past six-handed, one or more numbered `Middle` seats between the under-
/// the-gun seat and the cutoff.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Position {
    SmallBlind,
    BigBlind,
    UnderTheGun,
    /// A middle-position seat. `Middle(1)` is the lone "MP" seat at a
    /// six-handed table; tables with more than six players number
    /// additional middle seats `Middle(2)`, `Middle(3)`, ...
    Middle(u8),
    Cutoff,
    Button,
}

/// A player action during a betting round. `Bet`/`Raise` carry the
/// *to-amount* the player wants their total bet on this street to reach,
/// not a delta on top of what they've already put in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand.
    Fold,
    /// Check (only legal if nothing is owed on this street).
    Check,
    /// Call the current bet.
    Call,
    /// Open a bet, taking the street's total to the given amount.
    Bet(u32),
    /// Raise, taking the street's total to the given amount.
    Raise(u32),
    /// Commit the rest of the stack, whatever that amounts to.
    AllIn,
}

/// Default starting stack size for each player in chips.
pub const STARTING_STACK: u32 = 20_000;

/// A seated player: identity, stack, position, hole cards, and this
/// street's betting state.
#[derive(Debug, Clone)]
pub struct Player {
    /// Stable identifier used by [`crate::provider::DecisionProvider`] and
    /// [`crate::replay::ReplayAdapter`] to address this player across hands,
    /// independent of seat number (which rotates with the button).
    player_uid: String,
    seat: usize,
    stack: u32,
    position: Position,
    hole: [Option<Card>; 2],
    /// Amount this player has put in on the *current* street.
    current_bet: u32,
    /// Amount this player has put into the pot across the whole hand.
    total_invested: u32,
    has_folded: bool,
    is_all_in: bool,
    has_acted_this_round: bool,
}

impl Player {
    pub fn new(player_uid: impl Into<String>, seat: usize, stack: u32, position: Position) -> Self {
        Self {
            player_uid: player_uid.into(),
            seat,
            stack,
            position,
            hole: [None, None],
            current_bet: 0,
            total_invested: 0,
            has_folded: false,
            is_all_in: false,
            has_acted_this_round: false,
        }
    }

    pub fn player_uid(&self) -> &str {
        &self.player_uid
    }
    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn set_position(&mut self, pos: Position) {
        self.position = pos;
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn total_invested(&self) -> u32 {
        self.total_invested
    }
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }
    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }
    pub fn has_acted_this_round(&self) -> bool {
        self.has_acted_this_round
    }
    pub fn set_has_acted_this_round(&mut self, v: bool) {
        self.has_acted_this_round = v;
    }

    /// A player who can still act voluntarily: hasn't folded, isn't all-in,
    /// and has chips behind.
    pub fn is_active(&self) -> bool {
        !self.has_folded && !self.is_all_in && self.stack > 0
    }

    /// A player still live for pot eligibility: hasn't folded, regardless of
    /// stack/all-in state.
    pub fn is_in_hand(&self) -> bool {
        !self.has_folded
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err(GameError::InvariantViolation(format!(
                "player {} already has two hole cards",
                self.player_uid
            )))
        }
    }

    pub fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Resets per-street/per-hand betting state. Called between streets
    /// (`current_bet` only) and between hands (everything).
    pub fn reset_for_street(&mut self) {
        self.current_bet = 0;
        self.has_acted_this_round = false;
    }

    pub fn reset_for_hand(&mut self) {
        self.current_bet = 0;
        self.total_invested = 0;
        self.has_folded = false;
        self.is_all_in = false;
        self.has_acted_this_round = false;
        self.hole = [None, None];
    }

    /// Pays the player's `current_bet` up to `to_amount`, clamped to the
    /// player's stack. Returns the amount actually paid. This is the
    /// to-amount primitive every action (blinds, call, bet, raise, all-in)
    /// routes through.
    pub fn pay_to(&mut self, to_amount: u32) -> u32 {
        let owed = to_amount.saturating_sub(self.current_bet);
        let pay = owed.min(self.stack);
        self.stack -= pay;
        self.current_bet += pay;
        self.total_invested += pay;
        if self.stack == 0 {
            self.is_all_in = true;
        }
        pay
    }

    pub fn fold(&mut self) {
        self.has_folded = true;
    }
}
