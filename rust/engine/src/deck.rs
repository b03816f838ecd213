use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A deck of cards, either freshly shuffled from a seed or pinned to a
/// known `prefix` (for deterministic replay) with a shuffled remainder.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// A deck whose full 52-card order is deterministically shuffled from
    /// `seed`. Two decks built from the same seed deal identical cards in
    /// identical order.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self {
            cards,
            position: 0,
            rng,
        }
    }

    /// Same shuffle as [`Deck::new_with_seed`] but as an explicit call,
    /// matching the teacher's `shuffle()`/`new_with_seed()` split: construct
    /// with a seed, then shuffle when the hand actually starts.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Builds a deck whose first `prefix.len()` draws are pinned to the
    /// given cards (in order), followed by every other card in the 52-card
    /// universe shuffled with `seed`. Used to replay a recorded hand: hole
    /// cards and board cards are forced to match the historical record,
    /// while any remaining draws (should the replay run past the logged
    /// actions) are still well-defined and reproducible.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` contains a duplicate card; that is a caller bug,
    /// not a runtime condition the engine should tolerate.
    pub fn prefixed(prefix: &[Card], seed: u64) -> Self {
        let mut seen = std::collections::HashSet::new();
        for c in prefix {
            assert!(seen.insert(*c), "duplicate card {c:?} in replay prefix");
        }
        let mut remainder: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| !seen.contains(c))
            .collect();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        remainder.shuffle(&mut rng);

        let mut cards = Vec::with_capacity(52);
        cards.extend_from_slice(prefix);
        cards.extend(remainder);

        Self {
            cards,
            position: 0,
            rng,
        }
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Deals exactly `n` cards, failing with [`GameError::DeckUnderflow`]
    /// rather than silently returning fewer than requested.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if self.remaining() < n {
            return Err(GameError::DeckUnderflow {
                requested: n,
                remaining: self.remaining(),
            });
        }
        Ok((0..n).filter_map(|_| self.deal_card()).collect())
    }

    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
