mod common;

use axiomind_engine::engine::{Engine, EngineConfig, StepStatus};
use axiomind_engine::player::PlayerAction;
use axiomind_engine::provider::DecisionProvider;

use common::{AlwaysCall, ScriptedProvider};

fn config() -> EngineConfig {
    EngineConfig {
        small_blind: 1,
        big_blind: 2,
        starting_stack: 200,
        min_players: 2,
        max_players: 10,
        rng_seed: 11,
    }
}

/// `has_decision_for` reports false once a scripted provider's queue has
/// moved past the seat being asked about.
#[test]
fn scripted_provider_reports_coverage_accurately() {
    let provider = ScriptedProvider::new(vec![("a", PlayerAction::Call), ("b", PlayerAction::Check)]);
    assert!(provider.has_decision_for("a"));
    assert!(!provider.has_decision_for("b"));
}

/// A provider with no decision available for the player on the move stalls
/// the hand — the engine reports `AwaitingDecision` again rather than
/// treating silence as an implicit fold.
#[test]
fn a_provider_with_no_decision_stalls_rather_than_auto_folding() {
    let mut engine = Engine::new(config(), vec!["a".into(), "b".into()]).unwrap();
    engine.begin_hand().unwrap();

    // Scripted with an entry for the wrong player: "b" has no decision yet
    // since action is on "a" first (heads-up, dealer/SB acts first).
    let mut provider = ScriptedProvider::new(vec![("b", PlayerAction::Check)]);
    let status = engine.step(&mut provider).unwrap();
    assert_eq!(status, StepStatus::AwaitingDecision { player_uid: "a".to_string() });
}

/// A provider that repeatedly offers an illegal action gets capped rather
/// than looping the engine forever.
#[test]
fn illegal_actions_are_capped_then_surfaced_as_a_fault() {
    struct AlwaysIllegalRaise;
    impl DecisionProvider for AlwaysIllegalRaise {
        fn get_decision(&mut self, _player_uid: &str, _snapshot: &axiomind_engine::engine::Snapshot) -> Option<PlayerAction> {
            // Raising to 1 is always below the minimum preflop.
            Some(PlayerAction::Raise(1))
        }
        fn has_decision_for(&self, _player_uid: &str) -> bool {
            true
        }
        fn reset_for_new_hand(&mut self) {}
    }

    let mut engine = Engine::new(config(), vec!["a".into(), "b".into()]).unwrap();
    engine.begin_hand().unwrap();
    let mut provider = AlwaysIllegalRaise;

    let mut last = Ok(StepStatus::HandComplete);
    for _ in 0..10 {
        last = engine.step(&mut provider);
        if last.is_err() {
            break;
        }
    }
    assert!(matches!(
        last,
        Err(axiomind_engine::errors::GameError::DecisionProviderFault { .. })
    ));
}

/// `reset_for_new_hand` is called between hands so a stateful provider
/// (like the replay adapter) can rewind its cursor; `AlwaysCall` is
/// stateless but must still tolerate the call.
#[test]
fn reset_for_new_hand_is_harmless_on_a_stateless_provider() {
    let mut provider = AlwaysCall;
    provider.reset_for_new_hand();
    provider.reset_for_new_hand();
}
