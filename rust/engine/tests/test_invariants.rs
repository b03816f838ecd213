mod common;

use axiomind_engine::engine::{Engine, EngineConfig, StepStatus};
use axiomind_engine::player::PlayerAction;

use common::AlwaysCall;

fn config(starting_stack: u32, n: usize) -> (EngineConfig, Vec<String>) {
    let cfg = EngineConfig {
        small_blind: 5,
        big_blind: 10,
        starting_stack,
        min_players: 2,
        max_players: 10,
        rng_seed: 99,
    };
    let uids = (0..n).map(|i| format!("p{i}")).collect();
    (cfg, uids)
}

/// Total chips across every stack plus whatever was paid out never changes
/// across a hand: nothing is created or destroyed at the table.
#[test]
fn total_chips_are_conserved_across_a_hand() {
    let (cfg, uids) = config(500, 4);
    let total_before = cfg.starting_stack as u64 * uids.len() as u64;

    let mut engine = Engine::new(cfg, uids).unwrap();
    engine.begin_hand().unwrap();
    let mut provider = AlwaysCall;
    while engine.step(&mut provider).unwrap() != StepStatus::HandComplete {}

    let stacks_after: u64 = engine.table().players().iter().map(|p| p.stack() as u64).sum();
    assert_eq!(stacks_after, total_before, "every chip either stayed in a stack or was paid back out");
}

/// A hand always terminates with exactly one winner once every opponent has
/// folded, even if showdown is never reached.
#[test]
fn folding_down_to_one_player_ends_the_hand_immediately() {
    let (cfg, uids) = config(500, 3);
    let mut engine = Engine::new(cfg, uids).unwrap();
    engine.begin_hand().unwrap();

    struct FoldExceptOne;
    impl axiomind_engine::provider::DecisionProvider for FoldExceptOne {
        fn get_decision(
            &mut self,
            player_uid: &str,
            snapshot: &axiomind_engine::engine::Snapshot,
        ) -> Option<PlayerAction> {
            if player_uid != "p0" {
                // Folding is always legal, even facing nothing to call.
                return Some(PlayerAction::Fold);
            }
            Some(if snapshot.to_call_for(player_uid) == 0 {
                PlayerAction::Check
            } else {
                PlayerAction::Call
            })
        }
        fn has_decision_for(&self, _player_uid: &str) -> bool {
            true
        }
        fn reset_for_new_hand(&mut self) {}
    }

    let mut provider = FoldExceptOne;
    let mut guard = 0;
    while engine.step(&mut provider).unwrap() != StepStatus::HandComplete {
        guard += 1;
        assert!(guard < 20, "hand should end well before a full board is dealt");
    }

    let result = engine.result().unwrap();
    assert_eq!(result.payouts.len(), 1, "exactly one player is left to collect the pot");
    assert!(result.board.len() < 5, "the hand ended before a full board was needed");
}

/// What a player ends up having paid into the pot always equals their
/// starting stack minus their ending stack for that hand.
#[test]
fn a_players_chip_delta_matches_what_they_paid_in() {
    let (cfg, uids) = config(300, 2);
    let starting_stack = cfg.starting_stack;
    let mut engine = Engine::new(cfg, uids).unwrap();
    let stacks_before: Vec<u32> = engine.table().players().iter().map(|p| p.stack()).collect();
    assert!(stacks_before.iter().all(|&s| s == starting_stack), "stacks are untouched before a hand begins");

    engine.begin_hand().unwrap();
    let mut provider = AlwaysCall;
    while engine.step(&mut provider).unwrap() != StepStatus::HandComplete {}

    let result = engine.result().unwrap();
    let paid_out: u32 = result.payouts.values().sum();
    let stacks_after: u32 = engine.table().players().iter().map(|p| p.stack()).sum();
    assert_eq!(
        starting_stack as u64 * 2,
        stacks_after as u64,
        "two equal stacks calling to showdown redistribute the same total"
    );
    assert!(paid_out > 0, "the pot was not empty");
}
