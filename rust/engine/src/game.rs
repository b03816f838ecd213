use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::player::{Player, Position};

/// The six phases a hand passes through. `Showdown` and `End` are terminal:
/// no further actions are accepted once a hand reaches them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    End,
}

impl Street {
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River => Street::Showdown,
            Street::Showdown => Street::End,
            Street::End => Street::End,
        }
    }
}

/// Betting-round bookkeeping for the current street. Field names match the
/// `RoundState` dataclass this is modeled on: `last_full_raise_size` is the
/// size of the last raise that actually reopened the action,
/// `last_aggressor_seat` is who made it, `reopen_available` is false once a
/// short all-in raise has come through (so only all-in raises remain legal
/// until someone makes a full one), and `need_action_from` is the set of
/// seats still owed a decision before the street can close.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub last_full_raise_size: u32,
    pub last_aggressor_seat: Option<usize>,
    pub reopen_available: bool,
    pub need_action_from: BTreeSet<usize>,
}

impl RoundState {
    /// Seeds the preflop round: every active seat owes an action, including
    /// the big blind. Acting last in position order, the big blind's
    /// "option" falls out naturally — if everyone else only calls, the big
    /// blind is still in `need_action_from` when the action reaches them
    /// and can check (closing the street) or raise (reopening it).
    pub fn seed_preflop(big_blind_amount: u32, big_blind_seat: usize, active: &BTreeSet<usize>) -> Self {
        Self {
            last_full_raise_size: big_blind_amount,
            last_aggressor_seat: Some(big_blind_seat),
            reopen_available: true,
            need_action_from: active.clone(),
        }
    }

    /// Seeds any postflop street: the bet is back to zero and every active
    /// seat owes an action.
    pub fn seed_postflop(active: &BTreeSet<usize>) -> Self {
        Self {
            last_full_raise_size: 0,
            last_aggressor_seat: None,
            reopen_available: true,
            need_action_from: active.clone(),
        }
    }
}

/// Seats a dealer button rotates around, producing the standard position
/// labels for this table size. Only position *labeling* lives here; the
/// betting round itself (board, pot, current bet) is owned by
/// [`crate::engine::Engine`].
#[derive(Debug, Clone)]
pub struct Table {
    players: Vec<Player>,
    dealer_seat: usize,
}

impl Table {
    pub fn new(players: Vec<Player>, dealer_seat: usize) -> Self {
        let mut t = Self {
            players,
            dealer_seat,
        };
        t.assign_positions();
        t
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub fn dealer_seat(&self) -> usize {
        self.dealer_seat
    }
    pub fn len(&self) -> usize {
        self.players.len()
    }
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Moves the button to the next seat with chips still behind it (a
    /// busted player doesn't hold up the button). Matches the teacher's
    /// `rotate_button`, generalized past two seats.
    pub fn rotate_button(&mut self) {
        let n = self.players.len();
        if n == 0 {
            return;
        }
        for step in 1..=n {
            let candidate = (self.dealer_seat + step) % n;
            if self.players[candidate].stack() > 0 {
                self.dealer_seat = candidate;
                break;
            }
        }
        self.assign_positions();
    }

    /// Recomputes every seated player's [`Position`] from `dealer_seat`.
    /// Heads-up is a special case: the dealer *is* the small blind.
    pub fn assign_positions(&mut self) {
        let n = self.players.len();
        if n == 0 {
            return;
        }
        if n == 2 {
            let other = (self.dealer_seat + 1) % 2;
            self.players[self.dealer_seat].set_position(Position::SmallBlind);
            self.players[other].set_position(Position::BigBlind);
            return;
        }
        let labels = standard_positions(n);
        for (i, label) in labels.into_iter().enumerate() {
            let seat = (self.dealer_seat + 1 + i) % n;
            self.players[seat].set_position(label);
        }
    }

    pub fn small_blind_seat(&self) -> usize {
        if self.players.len() == 2 {
            self.dealer_seat
        } else {
            (self.dealer_seat + 1) % self.players.len()
        }
    }

    pub fn big_blind_seat(&self) -> usize {
        let n = self.players.len();
        if n == 2 {
            (self.dealer_seat + 1) % 2
        } else {
            (self.dealer_seat + 2) % n
        }
    }

    /// First seat to act preflop: the small blind itself heads-up, or the
    /// seat after the big blind ("under the gun") at 3-handed and above.
    pub fn preflop_first_to_act(&self) -> usize {
        let n = self.players.len();
        if n == 2 {
            self.dealer_seat
        } else {
            (self.dealer_seat + 3) % n
        }
    }

    /// First seat to act on any postflop street: the first seat clockwise
    /// from the dealer with a live hand. Heads-up, that's the big blind
    /// (since the dealer holds the small blind there).
    pub fn postflop_first_to_act(&self, active: &BTreeSet<usize>) -> Option<usize> {
        self.next_active_seat_from(self.dealer_seat, active)
    }

    /// Scans clockwise starting just after `from`, returning the first seat
    /// present in `active`.
    pub fn next_active_seat_from(&self, from: usize, active: &BTreeSet<usize>) -> Option<usize> {
        let n = self.players.len();
        if n == 0 {
            return None;
        }
        for step in 1..=n {
            let seat = (from + step) % n;
            if active.contains(&seat) {
                return Some(seat);
            }
        }
        None
    }
}

/// Standard position labels in clockwise order *starting just after the
/// button* (i.e. small blind first), for tables of three or more. Heads-up
/// tables are handled separately by [`Table::assign_positions`] because the
/// button itself posts the small blind.
fn standard_positions(n: usize) -> Vec<Position> {
    match n {
        0 | 1 | 2 => Vec::new(),
        3..=6 => {
            // The button is always the dealer's own seat, so it must land
            // last regardless of table size: take the first n-1 labels
            // leading up to it, then append it.
            let pre_button = [
                Position::SmallBlind,
                Position::BigBlind,
                Position::UnderTheGun,
                Position::Middle(1),
                Position::Cutoff,
            ];
            let mut v = pre_button[..n - 1].to_vec();
            v.push(Position::Button);
            v
        }
        _ => {
            let mut v = vec![
                Position::SmallBlind,
                Position::BigBlind,
                Position::UnderTheGun,
            ];
            let middle_seats = n - 5;
            for i in 1..=middle_seats {
                v.push(Position::Middle(i as u8));
            }
            v.push(Position::Cutoff);
            v.push(Position::Button);
            v
        }
    }
}
