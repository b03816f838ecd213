use crate::engine::Snapshot;
use crate::errors::GameError;
use crate::player::PlayerAction;
use crate::provider::DecisionProvider;

/// One entry from a recorded hand's action log, before it has been
/// normalized into an [`crate::player::Action`]. Hand logs in the wild
/// disagree on whether `Bet`/`Raise` amounts are deltas or to-totals, and
/// carry non-action noise (`Show`, `Muck`, ...) that a replay has to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggedActionKind {
    Check,
    Fold,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn,
    Show,
    Muck,
    Collect,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedAction {
    pub player_uid: String,
    pub kind: LoggedActionKind,
}

impl LoggedAction {
    pub fn new(player_uid: impl Into<String>, kind: LoggedActionKind) -> Self {
        Self {
            player_uid: player_uid.into(),
            kind,
        }
    }

    fn is_noise(&self) -> bool {
        matches!(
            self.kind,
            LoggedActionKind::Show
                | LoggedActionKind::Muck
                | LoggedActionKind::Collect
                | LoggedActionKind::Summary
        )
    }
}

/// A [`DecisionProvider`] backed by a recorded hand's action log instead of
/// a live decision source. Modeled directly on the original system's
/// `HandModelDecisionEngineAdapter`: it filters log noise, fills in checks
/// and folds the log left implicit, and disambiguates `Bet`/`Raise` entries
/// whose amount could be read as either a delta or a to-total.
#[derive(Debug, Clone)]
pub struct ReplayAdapter {
    log: Vec<LoggedAction>,
    cursor: usize,
}

impl ReplayAdapter {
    pub fn new(log: Vec<LoggedAction>) -> Self {
        Self { log, cursor: 0 }
    }

    fn skip_noise(&mut self) {
        while self.log.get(self.cursor).is_some_and(LoggedAction::is_noise) {
            self.cursor += 1;
        }
    }

    /// A seat with nothing owed can always have a check injected, whether
    /// that's because nobody has bet yet on a postflop street or because
    /// the big blind's preflop bet already matches the table's current bet
    /// (the "BB option").
    fn can_inject_check(player_uid: &str, snapshot: &Snapshot) -> bool {
        snapshot.to_call_for(player_uid) == 0
    }

    /// A seat facing a live wager it hasn't matched can always have a fold
    /// injected when the log has nothing further to say about it.
    fn should_inject_fold(player_uid: &str, snapshot: &Snapshot) -> bool {
        snapshot.to_call_for(player_uid) > 0
    }

    fn inject(player_uid: &str, snapshot: &Snapshot) -> Option<PlayerAction> {
        if Self::can_inject_check(player_uid, snapshot) {
            Some(PlayerAction::Check)
        } else if Self::should_inject_fold(player_uid, snapshot) {
            Some(PlayerAction::Fold)
        } else {
            None
        }
    }

    /// Normalizes a logged `Bet`/`Call` of 0 chips facing no outstanding
    /// wager into a `Check`, the way the original log format sometimes
    /// records a free check as a zero-amount call or bet.
    fn normalize_zero(table_current_bet: u32, amount: u32) -> Option<PlayerAction> {
        if table_current_bet == 0 && amount == 0 {
            Some(PlayerAction::Check)
        } else {
            None
        }
    }
}

impl DecisionProvider for ReplayAdapter {
    fn get_decision(&mut self, player_uid: &str, snapshot: &Snapshot) -> Option<PlayerAction> {
        match self.try_get_decision(player_uid, snapshot) {
            Ok(action) => action,
            // A DecisionProvider can't report errors through this
            // interface; the engine re-derives the same `ReplayAmbiguous`
            // by re-running `try_get_decision` directly when it needs the
            // precise failure (see `Engine::step`).
            Err(_) => None,
        }
    }

    fn has_decision_for(&self, player_uid: &str) -> bool {
        let mut i = self.cursor;
        while let Some(entry) = self.log.get(i) {
            if entry.is_noise() {
                i += 1;
                continue;
            }
            return entry.player_uid == player_uid;
        }
        false
    }

    fn reset_for_new_hand(&mut self) {
        self.cursor = 0;
    }
}

impl ReplayAdapter {
    /// The same contract as [`DecisionProvider::get_decision`], but
    /// surfacing [`GameError::ReplayAmbiguous`] instead of swallowing it,
    /// for callers (the engine) that want to report the precise failure.
    pub fn try_get_decision(
        &mut self,
        player_uid: &str,
        snapshot: &Snapshot,
    ) -> Result<Option<PlayerAction>, GameError> {
        self.skip_noise();

        let belongs_to_player = self
            .log
            .get(self.cursor)
            .is_some_and(|e| e.player_uid == player_uid);
        if !belongs_to_player {
            return Ok(Self::inject(player_uid, snapshot));
        }

        let kind = self.log[self.cursor].kind.clone();
        self.cursor += 1;

        let table_bet = snapshot.table_current_bet;
        let full_room = snapshot.full_stack_room_for(player_uid);
        let min_full = snapshot.min_raise_to;

        let action = match kind {
            LoggedActionKind::Check => PlayerAction::Check,
            LoggedActionKind::Fold => PlayerAction::Fold,
            LoggedActionKind::AllIn => PlayerAction::AllIn,
            LoggedActionKind::Call(amount) => {
                Self::normalize_zero(table_bet, amount).unwrap_or(PlayerAction::Call)
            }
            LoggedActionKind::Bet(amount) => {
                if table_bet == 0 {
                    Self::normalize_zero(table_bet, amount).unwrap_or(PlayerAction::Bet(amount))
                } else {
                    // Mislabeled raise: the logger called it a bet but a
                    // wager was already live. Read the amount as a to-total.
                    let to_total = amount.max(table_bet + amount);
                    PlayerAction::Raise(to_total)
                }
            }
            LoggedActionKind::Raise(amount) => {
                let delta_candidate = table_bet + amount;
                let total_candidate = amount;
                let qualifies = |c: u32| c >= min_full || c >= full_room;
                let chosen = match (qualifies(total_candidate), qualifies(delta_candidate)) {
                    (true, _) => total_candidate,
                    (false, true) => delta_candidate,
                    (false, false) => {
                        return Err(GameError::ReplayAmbiguous {
                            player_uid: player_uid.to_string(),
                            reason: format!(
                                "raise amount {amount} resolves to neither a legal total ({total_candidate}) nor delta ({delta_candidate}) raise"
                            ),
                        });
                    }
                };
                PlayerAction::Raise(chosen)
            }
            LoggedActionKind::Show | LoggedActionKind::Muck | LoggedActionKind::Collect | LoggedActionKind::Summary => {
                unreachable!("noise entries are skipped before being matched to a player")
            }
        };
        Ok(Some(action))
    }
}
