use crate::engine::Snapshot;
use crate::player::PlayerAction;

/// Supplies the action a seated player takes when it's their turn. The
/// engine is agnostic to where decisions come from: a human at a terminal,
/// a scripted bot, or — via [`crate::replay::ReplayAdapter`] — a recorded
/// hand history being played back. Modeled directly on the
/// `DecisionEngineProtocol` every decision source in the original system
/// implements: the same three operations, the same optionality contract.
pub trait DecisionProvider {
    /// Returns the action `player_uid` takes given the current `snapshot`,
    /// or `None` if this provider has no decision available (the engine
    /// treats that as a stall, not an implicit fold).
    fn get_decision(&mut self, player_uid: &str, snapshot: &Snapshot) -> Option<PlayerAction>;

    /// Whether this provider currently has *something* to say for
    /// `player_uid` — lets the engine distinguish "no decision yet" from
    /// "this provider doesn't cover this player at all".
    fn has_decision_for(&self, player_uid: &str) -> bool;

    /// Called by the engine at the start of every hand so providers that
    /// track per-hand cursors (like [`crate::replay::ReplayAdapter`]) can
    /// rewind.
    fn reset_for_new_hand(&mut self);
}
