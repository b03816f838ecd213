use std::collections::BTreeSet;

use axiomind_engine::hand::{Category, HandStrength};
use axiomind_engine::pot::PotManager;

fn strength(category: Category, high: u8) -> HandStrength {
    HandStrength {
        category,
        kickers: [high, 0, 0, 0, 0],
    }
}

/// Three-way pot: seat 0 is short-stacked and all-in for 30, seats 1 and 2
/// both go to 100. The 30-chip main pot is shared by all three; the 70-chip
/// side pot above it belongs only to the two full stacks.
#[test]
fn three_way_side_pot_excludes_the_short_stack_from_the_overlay() {
    let contributions = [(0usize, 30u32), (1, 100), (2, 100)];
    let folded = BTreeSet::new();
    let pots = PotManager::build(&contributions, &folded);

    assert_eq!(pots.main_pot(), 90, "30 from each of three seats");
    assert_eq!(pots.side_pots(), vec![140], "70 extra from each of the two full stacks");
    assert_eq!(pots.total(), 230);

    let layers = pots.pots();
    assert_eq!(layers[0].eligible_seats, BTreeSet::from([0, 1, 2]));
    assert_eq!(layers[1].eligible_seats, BTreeSet::from([1, 2]));
}

/// The short stack's best hand wins the whole main pot even when a bigger
/// stack holds the best hand overall, because that bigger hand isn't
/// eligible for chips it only won with money the short stack couldn't match.
#[test]
fn short_stack_can_win_main_pot_while_losing_the_side_pot() {
    let contributions = [(0usize, 30u32), (1, 100), (2, 100)];
    let folded = BTreeSet::new();
    let pots = PotManager::build(&contributions, &folded);

    let strengths = [
        (0, strength(Category::FourOfAKind, 9)),
        (1, strength(Category::Flush, 12)),
        (2, strength(Category::Straight, 8)),
    ];
    let payouts = pots.distribute(0, 3, |seat| {
        strengths.iter().find(|(s, _)| *s == seat).unwrap().1.clone()
    });

    assert_eq!(payouts.get(&0), Some(&90), "seat 0's quads take the whole main pot");
    assert_eq!(payouts.get(&1), Some(&140), "seat 1's flush beats seat 2's straight for the side pot");
    assert_eq!(payouts.get(&2), None);
}

/// Heads-up ties split evenly regardless of which seat is treated as the
/// small blind for tie-break ordering — but `distribute` must still use
/// `Table`'s own heads-up convention (the dealer seat posts the small
/// blind) rather than hardcoding `dealer_seat + 1`, so a 3+-handed split
/// that reuses the same tie-break path orders winners starting from the
/// true small blind.
#[test]
fn three_way_tie_remainder_starts_from_the_small_blind_seat() {
    // Dealer is seat 2; small blind is seat 0 (dealer + 1, mod 3); all three
    // tie, so the odd chip goes to seat 0 first, then seat 1, then seat 2.
    let contributions = [(0usize, 7u32), (1, 7), (2, 7)];
    let folded = BTreeSet::new();
    let pots = PotManager::build(&contributions, &folded);
    assert_eq!(pots.main_pot(), 21);

    let tie = strength(Category::OnePair, 5);
    let strengths = [(0, tie.clone()), (1, tie.clone()), (2, tie)];
    let payouts = pots.distribute(2, 3, |seat| strengths.iter().find(|(s, _)| *s == seat).unwrap().1.clone());

    assert_eq!(payouts.get(&0), Some(&7));
    assert_eq!(payouts.get(&1), Some(&7));
    assert_eq!(payouts.get(&2), Some(&7));
}

/// A heads-up tie's shared layer is always an even split (both seats must
/// have contributed equally to be jointly eligible for it), so the
/// dealer/small-blind seat used as the tie-break base is not observable in
/// the payout amounts — but it must still be `Table::small_blind_seat`'s
/// seat (the dealer itself, heads-up), not `dealer_seat + 1`, for when
/// `distribute` is reused in a context where it is observable (see the
/// 3-handed case above).
#[test]
fn heads_up_tie_splits_evenly() {
    let contributions = [(0usize, 3u32), (1, 3)];
    let folded = BTreeSet::new();
    let pots = PotManager::build(&contributions, &folded);
    assert_eq!(pots.main_pot(), 6);

    let tie = strength(Category::OnePair, 5);
    let strengths = [(0, tie.clone()), (1, tie)];
    let payouts = pots.distribute(0, 2, |seat| strengths.iter().find(|(s, _)| *s == seat).unwrap().1.clone());

    assert_eq!(payouts.get(&0), Some(&3));
    assert_eq!(payouts.get(&1), Some(&3));
}

/// A folded contributor still puts chips into every layer their stake
/// reaches but can never be an eligible winner of any of them.
#[test]
fn a_folded_contributor_funds_pots_it_cannot_win() {
    let contributions = [(0usize, 50u32), (1, 50), (2, 200)];
    let mut folded = BTreeSet::new();
    folded.insert(0);
    let pots = PotManager::build(&contributions, &folded);

    assert_eq!(pots.total(), 300);
    let layers = pots.pots();
    // main layer (ceiling 50): seats 0 and 1 both folded or matched, seat 2 covers it too.
    assert_eq!(layers[0].amount, 150);
    assert!(!layers[0].eligible_seats.contains(&0));
    // overlay above 50: only seat 2 contributed further, and collects it uncontested.
    assert_eq!(layers[1].amount, 150);
    assert_eq!(layers[1].eligible_seats, BTreeSet::from([2]));
}
