use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::hand::{compare_hands, HandStrength};

/// One pot layer: an amount of chips and the set of seats still eligible to
/// win it. The main pot is eligible to everyone who didn't fold; each side
/// pot above it is eligible only to the seats that contributed enough to
/// reach that layer's ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    pub amount: u32,
    pub eligible_seats: BTreeSet<usize>,
}

/// Builds and distributes the pot(s) for a hand using the layered-ceiling
/// algorithm: every distinct total-contribution amount becomes a ceiling,
/// and each layer's pot is the sum of what every contributor put in up to
/// that ceiling, minus what was already accounted for by lower layers.
/// Folded players still contribute their chips to every layer their
/// contribution reaches but are never eligible to win any of them.
#[derive(Debug, Clone, Default)]
pub struct PotManager {
    pots: Vec<Pot>,
}

impl PotManager {
    /// Builds pots from each seat's total contribution this hand and the
    /// set of seats that folded.
    pub fn build(seat_contributions: &[(usize, u32)], folded: &BTreeSet<usize>) -> Self {
        let mut ceilings: Vec<u32> = seat_contributions
            .iter()
            .map(|&(_, c)| c)
            .filter(|&c| c > 0)
            .collect();
        ceilings.sort_unstable();
        ceilings.dedup();

        let mut pots: Vec<Pot> = Vec::new();
        let mut prev = 0u32;
        for &ceiling in &ceilings {
            let mut amount = 0u32;
            let mut eligible = BTreeSet::new();
            for &(seat, contrib) in seat_contributions {
                amount += contrib.min(ceiling).saturating_sub(prev);
                if contrib >= ceiling && !folded.contains(&seat) {
                    eligible.insert(seat);
                }
            }
            if amount == 0 {
                prev = ceiling;
                continue;
            }
            if eligible.is_empty() {
                // Every contributor to this layer folded (can only happen
                // if the sole remaining non-folded seat contributed less
                // than this ceiling, which the single-winner short-circuit
                // in the engine handles before reaching here); fold the
                // chips into the previous layer rather than stranding them.
                if let Some(last) = pots.last_mut() {
                    last.amount += amount;
                } else {
                    pots.push(Pot { amount, eligible_seats: eligible });
                }
            } else {
                pots.push(Pot { amount, eligible_seats: eligible });
            }
            prev = ceiling;
        }
        Self { pots }
    }

    /// Convenience constructor for the common heads-up case, matching each
    /// seat's total contribution with no folds recorded (both players are
    /// eligible for whatever layer they reach).
    pub fn from_contributions(contributions: [u32; 2]) -> Self {
        let folded = BTreeSet::new();
        Self::build(&[(0, contributions[0]), (1, contributions[1])], &folded)
    }

    pub fn main_pot(&self) -> u32 {
        self.pots.first().map(|p| p.amount).unwrap_or(0)
    }

    pub fn side_pots(&self) -> Vec<u32> {
        self.pots.iter().skip(1).map(|p| p.amount).collect()
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn total(&self) -> u32 {
        self.pots.iter().map(|p| p.amount).sum()
    }

    /// Awards every pot layer to its best hand(s), splitting ties evenly
    /// and handing any indivisible remainder chip(s) to the tied winners
    /// seated closest, clockwise, to the seat left of the dealer.
    pub fn distribute(
        &self,
        dealer_seat: usize,
        total_seats: usize,
        mut strength_of: impl FnMut(usize) -> HandStrength,
    ) -> BTreeMap<usize, u32> {
        let mut payouts: BTreeMap<usize, u32> = BTreeMap::new();
        if total_seats == 0 {
            return payouts;
        }
        // The small blind seat, same n==2 special case as
        // `Table::small_blind_seat`: heads-up, the dealer itself posts it.
        let order_base = if total_seats == 2 {
            dealer_seat
        } else {
            (dealer_seat + 1) % total_seats
        };

        for pot in &self.pots {
            if pot.amount == 0 || pot.eligible_seats.is_empty() {
                continue;
            }
            if pot.eligible_seats.len() == 1 {
                let seat = *pot.eligible_seats.iter().next().unwrap();
                *payouts.entry(seat).or_insert(0) += pot.amount;
                continue;
            }

            let mut best: Option<HandStrength> = None;
            let mut winners: Vec<usize> = Vec::new();
            for &seat in &pot.eligible_seats {
                let strength = strength_of(seat);
                match &best {
                    None => {
                        best = Some(strength);
                        winners.push(seat);
                    }
                    Some(b) => match compare_hands(&strength, b) {
                        Ordering::Greater => {
                            best = Some(strength);
                            winners.clear();
                            winners.push(seat);
                        }
                        Ordering::Equal => winners.push(seat),
                        Ordering::Less => {}
                    },
                }
            }

            winners.sort_by_key(|&seat| (seat + total_seats - order_base) % total_seats);
            let share = pot.amount / winners.len() as u32;
            let mut remainder = pot.amount % winners.len() as u32;
            for &seat in &winners {
                let mut amt = share;
                if remainder > 0 {
                    amt += 1;
                    remainder -= 1;
                }
                *payouts.entry(seat).or_insert(0) += amt;
            }
        }
        payouts
    }
}
