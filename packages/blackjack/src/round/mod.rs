use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::hand_value;

/// The target total.
pub const BLACKJACK: u8 = 21;

/// The dealer draws to any total below this and stands at or above it.
pub const DEALER_STAND_MIN: u8 = 17;

/// Terminal result of a round. Owns the score table: every outcome maps
/// to exactly one delta, applied once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerBlackjack,
    PlayerBust,
    DealerBlackjack,
    DealerBust,
    PlayerWin,
    DealerWin,
    Push,
}

impl Outcome {
    pub fn score_delta(&self) -> i64 {
        match self {
            Outcome::PlayerBlackjack | Outcome::DealerBust | Outcome::PlayerWin => 100,
            Outcome::PlayerBust | Outcome::DealerBlackjack | Outcome::DealerWin => -100,
            Outcome::Push => 0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerBlackjack => "Black Jack! Player wins!",
            Outcome::PlayerBust => "Bust! Player loses!",
            Outcome::DealerBlackjack => "Black Jack! Player loses!",
            Outcome::DealerBust => "Bust! Player wins!",
            Outcome::PlayerWin => "Player wins!",
            Outcome::DealerWin => "Player loses!",
            Outcome::Push => "Draw!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Resolved(Outcome),
}

/// One player-vs-dealer round. Created by `deal`, mutated by `hit` and
/// `stand`, terminal once `Resolved`. Hands only grow, the deck only
/// shrinks; the three together account for all 52 cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<Card>,
    pub deck: Deck,
    pub status: RoundStatus,
}

impl Round {
    /// Start a round: fresh 52-card deck, two cards to the player, two
    /// to the dealer. A 21 on the deal does not settle anything; the
    /// round resolves only through an explicit hit or stand.
    pub fn deal<R: Rng>(rng: &mut R) -> Result<Self, RoundError> {
        let mut deck = Deck::fresh();
        let player_hand = deck.draw(2, rng)?;
        let dealer_hand = deck.draw(2, rng)?;
        Ok(Self {
            player_hand,
            dealer_hand,
            deck,
            status: RoundStatus::InProgress,
        })
    }

    pub fn player_value(&self) -> u8 {
        hand_value(&self.player_hand)
    }

    pub fn dealer_value(&self) -> u8 {
        hand_value(&self.dealer_hand)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            RoundStatus::Resolved(outcome) => Some(outcome),
            RoundStatus::InProgress => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome().is_some()
    }

    /// Player + dealer + deck. 52 for any round produced by `deal`.
    pub fn cards_accounted(&self) -> usize {
        self.player_hand.len() + self.dealer_hand.len() + self.deck.len()
    }

    fn ensure_in_progress(&self) -> Result<(), RoundError> {
        match self.status {
            RoundStatus::InProgress => Ok(()),
            RoundStatus::Resolved(_) => Err(RoundError::RoundOver),
        }
    }

    // Settles at most once; a resolved round keeps its first outcome.
    fn resolve(&mut self, outcome: Outcome) {
        if matches!(self.status, RoundStatus::InProgress) {
            self.status = RoundStatus::Resolved(outcome);
        }
    }

    /// Draw one card to the player. Settles immediately on 21 (win) or
    /// above (bust); otherwise the round stays open for further action.
    pub fn hit<R: Rng>(&mut self, rng: &mut R) -> Result<RoundStatus, RoundError> {
        self.ensure_in_progress()?;
        let card = self.deck.draw_one(rng)?;
        self.player_hand.push(card);

        let value = self.player_value();
        if value == BLACKJACK {
            self.resolve(Outcome::PlayerBlackjack);
        } else if value > BLACKJACK {
            self.resolve(Outcome::PlayerBust);
        }
        Ok(self.status)
    }

    /// End the player's turn: the dealer draws to `DEALER_STAND_MIN`,
    /// then the round settles. A drained deck ends the dealer's draws
    /// early and the comparison proceeds with the cards on the table.
    pub fn stand<R: Rng>(&mut self, rng: &mut R) -> Result<RoundStatus, RoundError> {
        self.ensure_in_progress()?;
        while self.dealer_value() < DEALER_STAND_MIN {
            match self.deck.draw_one(rng) {
                Ok(card) => self.dealer_hand.push(card),
                Err(RoundError::DeckExhausted { .. }) => break,
                Err(err) => return Err(err),
            }
        }

        let dealer = self.dealer_value();
        let outcome = if dealer == BLACKJACK {
            Outcome::DealerBlackjack
        } else if dealer > BLACKJACK {
            Outcome::DealerBust
        } else {
            let player = self.player_value();
            if player > dealer {
                Outcome::PlayerWin
            } else if player < dealer {
                Outcome::DealerWin
            } else {
                Outcome::Push
            }
        };
        self.resolve(outcome);
        Ok(self.status)
    }
}
