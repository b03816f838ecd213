use std::collections::VecDeque;

use axiomind_engine::engine::Snapshot;
use axiomind_engine::player::PlayerAction;
use axiomind_engine::provider::DecisionProvider;

/// A `DecisionProvider` driven by a fixed script of `(player_uid, action)`
/// pairs, consumed strictly in order. Lets a test dictate an exact betting
/// sequence without guessing at engine-internal seat numbering.
pub struct ScriptedProvider {
    script: VecDeque<(String, PlayerAction)>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<(&str, PlayerAction)>) -> Self {
        Self {
            script: script.into_iter().map(|(uid, a)| (uid.to_string(), a)).collect(),
        }
    }
}

impl DecisionProvider for ScriptedProvider {
    fn get_decision(&mut self, player_uid: &str, _snapshot: &Snapshot) -> Option<PlayerAction> {
        match self.script.front() {
            Some((uid, _)) if uid == player_uid => self.script.pop_front().map(|(_, a)| a),
            _ => None,
        }
    }

    fn has_decision_for(&self, player_uid: &str) -> bool {
        matches!(self.script.front(), Some((uid, _)) if uid == player_uid)
    }

    fn reset_for_new_hand(&mut self) {}
}

/// A provider that always checks or calls, never raising. Used to run a
/// hand to showdown with no further betting beyond blinds.
pub struct AlwaysCall;

impl DecisionProvider for AlwaysCall {
    fn get_decision(&mut self, player_uid: &str, snapshot: &Snapshot) -> Option<PlayerAction> {
        let to_call = snapshot.to_call_for(player_uid);
        Some(if to_call == 0 { PlayerAction::Check } else { PlayerAction::Call })
    }
    fn has_decision_for(&self, _player_uid: &str) -> bool {
        true
    }
    fn reset_for_new_hand(&mut self) {}
}
