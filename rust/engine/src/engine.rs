use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{RoundState, Street, Table};
use crate::hand::{evaluate_hand, HandStrength};
use crate::logger::ActionRecord;
use crate::player::{Player, PlayerAction, Position, STARTING_STACK};
use crate::pot::PotManager;
use crate::provider::DecisionProvider;
use crate::rules::{is_full_raise, validate_action, ActionContext, ValidatedAction};

/// Validated engine configuration. Loading it from a file or environment is
/// an outer-layer concern; the engine only ever sees a value that has
/// already passed [`EngineConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stack: u32,
    pub min_players: usize,
    pub max_players: usize,
    pub rng_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            small_blind: 50,
            big_blind: 100,
            starting_stack: STARTING_STACK,
            min_players: 2,
            max_players: 10,
            rng_seed: 0,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 {
            return Err(GameError::InvalidBetAmount { amount: 0, minimum: 1 });
        }
        if self.big_blind <= self.small_blind {
            return Err(GameError::InvalidBetAmount {
                amount: self.big_blind,
                minimum: self.small_blind + 1,
            });
        }
        if self.starting_stack == 0 {
            return Err(GameError::InsufficientChips);
        }
        if self.min_players < 2 || self.min_players > self.max_players || self.max_players > 10 {
            return Err(GameError::InvariantViolation(
                "min_players/max_players must satisfy 2 <= min_players <= max_players <= 10".into(),
            ));
        }
        Ok(())
    }
}

/// A read-only view of the table handed to a [`DecisionProvider`] so it can
/// decide an action without reaching into engine internals.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub street: Street,
    pub board: Vec<Card>,
    pub pot: u32,
    pub table_current_bet: u32,
    pub min_raise_to: u32,
    pub dealer_seat: usize,
    pub action_seat: Option<usize>,
    pub players: Vec<PlayerView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub player_uid: String,
    pub seat: usize,
    pub position: Position,
    pub stack: u32,
    pub current_bet: u32,
    pub total_invested: u32,
    pub has_folded: bool,
    pub is_all_in: bool,
}

impl Snapshot {
    pub fn player(&self, player_uid: &str) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.player_uid == player_uid)
    }

    pub fn to_call_for(&self, player_uid: &str) -> u32 {
        self.player(player_uid)
            .map(|p| self.table_current_bet.saturating_sub(p.current_bet))
            .unwrap_or(0)
    }

    pub fn full_stack_room_for(&self, player_uid: &str) -> u32 {
        self.player(player_uid).map(|p| p.stack + p.current_bet).unwrap_or(0)
    }
}

/// Observable events the engine emits as a hand is driven forward.
#[derive(Debug, Clone, Serialize)]
pub enum Event {
    ActionApplied {
        player_uid: String,
        action: ValidatedAction,
        street: Street,
    },
    StreetAdvanced {
        from: Street,
        to: Street,
        board: Vec<Card>,
    },
    BetsCommitted {
        street: Street,
        committed_pot: u32,
    },
    ShowdownResolved {
        payouts: Vec<(String, u32)>,
    },
    HandEnded {
        hand_no: u64,
    },
}

/// What a hand resolved to: who won how much, and the final board.
#[derive(Debug, Clone, Serialize)]
pub struct HandResult {
    pub payouts: BTreeMap<String, u32>,
    pub board: Vec<Card>,
}

/// What the caller should do after [`Engine::step`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// `player_uid` is on the clock. Call `step` again once a provider
    /// covering them can produce a decision.
    AwaitingDecision { player_uid: String },
    /// The hand has reached [`Street::End`]; [`Engine::result`] is populated.
    HandComplete,
}

/// Drives one table through hands: deals, posts blinds, validates and
/// applies actions sourced from a [`DecisionProvider`], advances streets,
/// and resolves showdown. Single-threaded and cooperative: callers suspend
/// at `step()` and resume it at their own pace, so it fits equally well
/// behind a CLI prompt loop or a replay driver.
pub struct Engine {
    config: EngineConfig,
    table: Table,
    deck: Deck,
    board: Vec<Card>,
    street: Street,
    round: RoundState,
    committed_pot: u32,
    current_bet: u32,
    action_seat: Option<usize>,
    events: Vec<Event>,
    action_log: Vec<ActionRecord>,
    hand_no: u64,
    result: Option<HandResult>,
    retry_counts: HashMap<usize, u8>,
}

impl Engine {
    pub fn new(config: EngineConfig, player_uids: Vec<String>) -> Result<Self, GameError> {
        config.validate()?;
        if player_uids.len() < config.min_players || player_uids.len() > config.max_players {
            return Err(GameError::InvariantViolation(format!(
                "table requires between {} and {} players, got {}",
                config.min_players,
                config.max_players,
                player_uids.len()
            )));
        }
        let players: Vec<Player> = player_uids
            .into_iter()
            .enumerate()
            .map(|(seat, uid)| Player::new(uid, seat, config.starting_stack, Position::Button))
            .collect();
        let table = Table::new(players, 0);
        let deck = Deck::new_with_seed(config.rng_seed);
        Ok(Self {
            config,
            table,
            deck,
            board: Vec::new(),
            street: Street::Preflop,
            round: RoundState::seed_postflop(&BTreeSet::new()),
            committed_pot: 0,
            current_bet: 0,
            action_seat: None,
            events: Vec::new(),
            action_log: Vec::new(),
            hand_no: 0,
            result: None,
            retry_counts: HashMap::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn action_log(&self) -> &[ActionRecord] {
        &self.action_log
    }

    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    pub fn hand_no(&self) -> u64 {
        self.hand_no
    }

    pub fn is_hand_complete(&self) -> bool {
        matches!(self.street, Street::End)
    }

    /// Starts a new hand: rotates the button (after the first), deals hole
    /// cards, posts blinds, and seeds the preflop round state.
    #[tracing::instrument(skip(self), fields(hand_no = self.hand_no + 1))]
    pub fn begin_hand(&mut self) -> Result<(), GameError> {
        let eligible = self.table.players().iter().filter(|p| p.stack() > 0).count();
        if eligible < self.config.min_players {
            return Err(GameError::InvariantViolation(
                "not enough players with chips to begin a hand".into(),
            ));
        }

        self.hand_no += 1;
        if self.hand_no > 1 {
            self.table.rotate_button();
        }
        for p in self.table.players_mut() {
            p.reset_for_hand();
        }
        self.deck = Deck::new_with_seed(self.config.rng_seed.wrapping_add(self.hand_no));
        self.board.clear();
        self.committed_pot = 0;
        self.current_bet = 0;
        self.events.clear();
        self.action_log.clear();
        self.result = None;
        self.retry_counts.clear();
        self.street = Street::Preflop;

        let active: BTreeSet<usize> = self
            .table
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.stack() > 0)
            .map(|(s, _)| s)
            .collect();

        let order = self.seat_order_from(self.table.small_blind_seat(), &active);
        for _ in 0..2 {
            for &seat in &order {
                let card = self.deck.deal(1)?[0];
                self.table.players_mut()[seat].give_card(card)?;
            }
        }

        let sb_seat = self.table.small_blind_seat();
        let bb_seat = self.table.big_blind_seat();
        self.table.players_mut()[sb_seat].pay_to(self.config.small_blind);
        self.table.players_mut()[bb_seat].pay_to(self.config.big_blind);
        self.current_bet = self.table.players()[bb_seat].current_bet();

        self.round = RoundState::seed_preflop(self.config.big_blind, bb_seat, &active);
        let candidate = self.table.preflop_first_to_act();
        self.action_seat = self.first_in(candidate, &self.round.need_action_from);
        if self.action_seat.is_none() {
            self.close_street_and_advance()?;
        }
        tracing::info!(dealer_seat = self.table.dealer_seat(), "hand started");
        Ok(())
    }

    /// Advances the hand by one decision: asks `provider` what the player on
    /// the clock does, validates and applies it (retrying up to three times
    /// on an illegal proposal before giving up), and reports what the caller
    /// should do next.
    pub fn step(&mut self, provider: &mut dyn DecisionProvider) -> Result<StepStatus, GameError> {
        if matches!(self.street, Street::Showdown | Street::End) {
            return Ok(StepStatus::HandComplete);
        }
        let seat = self
            .action_seat
            .ok_or_else(|| GameError::InvariantViolation("no action_seat set while hand in progress".into()))?;
        let player_uid = self.table.players()[seat].player_uid().to_string();

        if !provider.has_decision_for(&player_uid) {
            return Ok(StepStatus::AwaitingDecision { player_uid });
        }

        let action = {
            let snapshot = self.snapshot();
            provider.get_decision(&player_uid, &snapshot)
        };
        let Some(action) = action else {
            return Ok(StepStatus::AwaitingDecision { player_uid });
        };

        match self.apply_action(seat, action) {
            Ok(()) => {
                self.retry_counts.remove(&seat);
            }
            Err(GameError::IllegalAction { .. }) => {
                let attempts = {
                    let entry = self.retry_counts.entry(seat).or_insert(0);
                    *entry += 1;
                    *entry
                };
                if attempts >= 3 {
                    self.retry_counts.remove(&seat);
                    tracing::warn!(%player_uid, attempts, "decision provider exhausted retry budget");
                    return Err(GameError::DecisionProviderFault { player_uid, attempts });
                }
                return Ok(StepStatus::AwaitingDecision { player_uid });
            }
            Err(e) => return Err(e),
        }

        if matches!(self.street, Street::Showdown | Street::End) {
            Ok(StepStatus::HandComplete)
        } else {
            match self.action_seat {
                Some(s) => Ok(StepStatus::AwaitingDecision {
                    player_uid: self.table.players()[s].player_uid().to_string(),
                }),
                None => Ok(StepStatus::HandComplete),
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            street: self.street,
            board: self.board.clone(),
            pot: self.committed_pot + self.table.players().iter().map(|p| p.current_bet()).sum::<u32>(),
            table_current_bet: self.current_bet,
            min_raise_to: self.min_raise_to(),
            dealer_seat: self.table.dealer_seat(),
            action_seat: self.action_seat,
            players: self
                .table
                .players()
                .iter()
                .map(|p| PlayerView {
                    player_uid: p.player_uid().to_string(),
                    seat: p.seat(),
                    position: p.position(),
                    stack: p.stack(),
                    current_bet: p.current_bet(),
                    total_invested: p.total_invested(),
                    has_folded: p.has_folded(),
                    is_all_in: p.is_all_in(),
                })
                .collect(),
        }
    }

    fn min_raise_to(&self) -> u32 {
        if self.current_bet == 0 {
            self.config.big_blind
        } else {
            self.current_bet + self.round.last_full_raise_size.max(self.config.big_blind)
        }
    }

    fn apply_action(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        let player_uid = self.table.players()[seat].player_uid().to_string();
        {
            let player = &self.table.players()[seat];
            if player.has_folded() || player.is_all_in() {
                return Err(GameError::IllegalAction {
                    player_uid,
                    reason: "player cannot act (already folded or all-in)".into(),
                });
            }
        }

        let ctx = {
            let player = &self.table.players()[seat];
            ActionContext {
                stack: player.stack(),
                current_bet: player.current_bet(),
                table_current_bet: self.current_bet,
                min_raise_to: self.min_raise_to(),
                reopen_available: self.round.reopen_available,
            }
        };

        let validated = validate_action(&ctx, action).map_err(|e| GameError::IllegalAction {
            player_uid: player_uid.clone(),
            reason: e.to_string(),
        })?;

        self.action_log.push(ActionRecord {
            player_uid: player_uid.clone(),
            street: self.street,
            action,
        });

        match validated {
            ValidatedAction::Fold => {
                self.table.players_mut()[seat].fold();
                self.round.need_action_from.remove(&seat);
            }
            ValidatedAction::Check => {
                self.round.need_action_from.remove(&seat);
            }
            ValidatedAction::Call(to_amount) => {
                self.table.players_mut()[seat].pay_to(to_amount);
                self.round.need_action_from.remove(&seat);
            }
            ValidatedAction::Bet(to_amount) => {
                self.table.players_mut()[seat].pay_to(to_amount);
                self.current_bet = to_amount;
                self.round.last_full_raise_size = to_amount;
                self.round.last_aggressor_seat = Some(seat);
                self.round.reopen_available = true;
                self.reopen_need_action(seat);
            }
            ValidatedAction::Raise(to_amount) => {
                let raise_size = to_amount - self.current_bet;
                let full = is_full_raise(ctx.min_raise_to, to_amount);
                self.table.players_mut()[seat].pay_to(to_amount);
                self.current_bet = to_amount;
                if full {
                    self.round.last_full_raise_size = raise_size;
                    self.round.reopen_available = true;
                } else {
                    self.round.reopen_available = false;
                }
                self.round.last_aggressor_seat = Some(seat);
                self.reopen_need_action(seat);
            }
            ValidatedAction::AllIn(to_amount) => {
                self.table.players_mut()[seat].pay_to(to_amount);
                if to_amount > self.current_bet {
                    let raise_size = to_amount - self.current_bet;
                    let full = is_full_raise(ctx.min_raise_to, to_amount);
                    self.current_bet = to_amount;
                    if full {
                        self.round.last_full_raise_size = raise_size;
                        self.round.reopen_available = true;
                    } else {
                        self.round.reopen_available = false;
                    }
                    self.round.last_aggressor_seat = Some(seat);
                    self.reopen_need_action(seat);
                } else {
                    self.round.need_action_from.remove(&seat);
                }
            }
        }

        tracing::debug!(?validated, street = ?self.street, "action applied");
        self.events.push(Event::ActionApplied {
            player_uid,
            action: validated,
            street: self.street,
        });

        if self.folded_down_to_one() {
            return self.resolve_uncontested();
        }

        if self.round.need_action_from.is_empty() {
            self.close_street_and_advance()
        } else {
            self.action_seat = self.table.next_active_seat_from(seat, &self.round.need_action_from);
            Ok(())
        }
    }

    fn reopen_need_action(&mut self, actor_seat: usize) {
        let need: BTreeSet<usize> = self
            .table
            .players()
            .iter()
            .enumerate()
            .filter(|(seat, p)| *seat != actor_seat && !p.has_folded() && !p.is_all_in())
            .map(|(seat, _)| seat)
            .collect();
        self.round.need_action_from = need;
    }

    fn in_hand_seats(&self) -> BTreeSet<usize> {
        self.table
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_in_hand())
            .map(|(s, _)| s)
            .collect()
    }

    fn folded_down_to_one(&self) -> bool {
        self.in_hand_seats().len() <= 1
    }

    fn commit_street(&mut self) {
        let street_total: u32 = self.table.players().iter().map(|p| p.current_bet()).sum();
        self.committed_pot += street_total;
        for p in self.table.players_mut() {
            p.reset_for_street();
        }
        self.current_bet = 0;
    }

    fn resolve_uncontested(&mut self) -> Result<(), GameError> {
        self.commit_street();
        self.events.push(Event::BetsCommitted {
            street: self.street,
            committed_pot: self.committed_pot,
        });
        let winner_seat = *self
            .in_hand_seats()
            .iter()
            .next()
            .ok_or_else(|| GameError::InvariantViolation("no seats remain in hand".into()))?;
        let amount = self.committed_pot;
        self.table.players_mut()[winner_seat].add_chips(amount);
        let uid = self.table.players()[winner_seat].player_uid().to_string();
        let payouts = vec![(uid, amount)];
        self.events.push(Event::ShowdownResolved {
            payouts: payouts.clone(),
        });
        self.result = Some(HandResult {
            payouts: payouts.into_iter().collect(),
            board: self.board.clone(),
        });
        self.committed_pot = 0;
        self.street = Street::End;
        self.events.push(Event::HandEnded { hand_no: self.hand_no });
        Ok(())
    }

    fn close_street_and_advance(&mut self) -> Result<(), GameError> {
        self.commit_street();
        self.events.push(Event::BetsCommitted {
            street: self.street,
            committed_pot: self.committed_pot,
        });

        if self.folded_down_to_one() {
            return self.resolve_uncontested();
        }

        let contenders_with_chips = self.table.players().iter().filter(|p| p.is_active()).count();

        let from = self.street;
        self.street = self.street.next();
        self.deal_board_for_current_street()?;
        tracing::info!(?from, to = ?self.street, board = ?self.board, "street advanced");
        self.events.push(Event::StreetAdvanced {
            from,
            to: self.street,
            board: self.board.clone(),
        });

        if matches!(self.street, Street::Showdown) {
            return self.resolve_showdown();
        }

        if contenders_with_chips <= 1 {
            return self.run_out_remaining_streets();
        }

        let in_hand = self.in_hand_seats();
        self.round = RoundState::seed_postflop(&in_hand);
        self.action_seat = self.table.postflop_first_to_act(&self.round.need_action_from);
        if self.action_seat.is_none() {
            return self.close_street_and_advance();
        }
        Ok(())
    }

    fn deal_board_for_current_street(&mut self) -> Result<(), GameError> {
        match self.street {
            Street::Flop => {
                self.deck.burn_card();
                let cards = self.deck.deal(3)?;
                self.board.extend(cards);
            }
            Street::Turn | Street::River => {
                self.deck.burn_card();
                let cards = self.deck.deal(1)?;
                self.board.extend(cards);
            }
            _ => {}
        }
        Ok(())
    }

    fn run_out_remaining_streets(&mut self) -> Result<(), GameError> {
        while self.street != Street::Showdown {
            let from = self.street;
            self.street = self.street.next();
            self.deal_board_for_current_street()?;
            self.events.push(Event::StreetAdvanced {
                from,
                to: self.street,
                board: self.board.clone(),
            });
        }
        self.resolve_showdown()
    }

    fn resolve_showdown(&mut self) -> Result<(), GameError> {
        if self.folded_down_to_one() {
            return self.resolve_uncontested();
        }

        let folded: BTreeSet<usize> = self
            .table
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_folded())
            .map(|(s, _)| s)
            .collect();
        let contributions: Vec<(usize, u32)> = self
            .table
            .players()
            .iter()
            .enumerate()
            .map(|(s, p)| (s, p.total_invested()))
            .collect();
        let pots = PotManager::build(&contributions, &folded);

        let board = self.board.clone();
        let strengths: HashMap<usize, HandStrength> = self
            .table
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.has_folded())
            .map(|(seat, p)| {
                let hole = p.hole_cards();
                let mut seven: Vec<Card> = Vec::with_capacity(7);
                if let Some(c) = hole[0] {
                    seven.push(c);
                }
                if let Some(c) = hole[1] {
                    seven.push(c);
                }
                seven.extend(board.iter().copied());
                let seven: [Card; 7] = seven.try_into().expect("7 cards assembled at showdown");
                (seat, evaluate_hand(&seven))
            })
            .collect();

        let payouts_by_seat =
            pots.distribute(self.table.dealer_seat(), self.table.len(), |seat| strengths[&seat].clone());
        tracing::info!(pots = pots.pots().len(), "showdown resolved");

        let mut payouts: Vec<(String, u32)> = Vec::new();
        for (seat, amount) in &payouts_by_seat {
            let uid = self.table.players()[*seat].player_uid().to_string();
            self.table.players_mut()[*seat].add_chips(*amount);
            payouts.push((uid, *amount));
        }
        self.events.push(Event::ShowdownResolved {
            payouts: payouts.clone(),
        });
        self.result = Some(HandResult {
            payouts: payouts.into_iter().collect(),
            board: self.board.clone(),
        });
        self.committed_pot = 0;
        self.street = Street::End;
        self.events.push(Event::HandEnded { hand_no: self.hand_no });
        Ok(())
    }

    fn first_in(&self, start: usize, eligible: &BTreeSet<usize>) -> Option<usize> {
        let n = self.table.len();
        if n == 0 {
            return None;
        }
        (0..n).map(|step| (start + step) % n).find(|seat| eligible.contains(seat))
    }

    fn seat_order_from(&self, start: usize, active: &BTreeSet<usize>) -> Vec<usize> {
        let mut order = Vec::with_capacity(active.len());
        if let Some(first) = self.first_in(start, active) {
            order.push(first);
            let mut cur = first;
            while let Some(next) = self.table.next_active_seat_from(cur, active) {
                if next == first {
                    break;
                }
                order.push(next);
                cur = next;
            }
        }
        order
    }
}
