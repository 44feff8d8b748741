use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank, Suit};
use crate::error::RoundError;

/// The cards not yet dealt this round. Strictly shrinking; never
/// replenished until the next deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// All 52 rank-suit combinations.
    pub fn fresh() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove one uniformly-chosen card.
    pub fn draw_one<R: Rng>(&mut self, rng: &mut R) -> Result<Card, RoundError> {
        if self.cards.is_empty() {
            return Err(RoundError::DeckExhausted {
                requested: 1,
                remaining: 0,
            });
        }
        let index = rng.gen_range(0..self.cards.len());
        Ok(self.cards.swap_remove(index))
    }

    /// Remove `n` uniformly-chosen cards without replacement. Fails
    /// up front when `n` exceeds the remaining count, leaving the deck
    /// untouched.
    pub fn draw<R: Rng>(&mut self, n: usize, rng: &mut R) -> Result<Vec<Card>, RoundError> {
        if n > self.cards.len() {
            return Err(RoundError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            drawn.push(self.draw_one(rng)?);
        }
        Ok(drawn)
    }
}
