use blackjack::{Card, Round, RoundStatus};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

#[cw_serde]
pub struct InstantiateMsg {
    /// Base seed material for draw derivation. Defaults to the
    /// instantiation block time when omitted.
    pub rng_seed: Option<Binary>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Start (or restart) the sender's round: fresh 52-card deck, two
    /// cards each. Also the only way out of a resolved round.
    NewRound {},
    /// Draw one card to the sender's hand.
    Hit {},
    /// End the sender's turn and run the dealer out.
    Stand {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RoundResponse)]
    GetRound { player: String },
    #[returns(ScoreResponse)]
    GetScore { player: String },
}

#[cw_serde]
pub struct CardResponse {
    pub rank: String,
    pub suit: String,
}

impl CardResponse {
    pub fn revealed(card: &Card) -> Self {
        Self {
            rank: card.rank.symbol().to_string(),
            suit: card.suit.symbol().to_string(),
        }
    }

    /// The concealed hole-card placeholder.
    pub fn hidden() -> Self {
        Self {
            rank: "?".to_string(),
            suit: "?".to_string(),
        }
    }
}

#[cw_serde]
pub struct RoundResponse {
    pub player_hand: Vec<CardResponse>,
    /// Upcard plus a placeholder while the round is open; the full hand
    /// once it settles.
    pub dealer_hand: Vec<CardResponse>,
    /// Empty while the round is open, the outcome text once settled.
    pub message: String,
    pub score: i64,
}

impl RoundResponse {
    pub fn project(round: &Round, score: i64) -> Self {
        let player_hand = round.player_hand.iter().map(CardResponse::revealed).collect();
        let (dealer_hand, message) = match round.status {
            RoundStatus::InProgress => {
                let mut shown: Vec<CardResponse> = round
                    .dealer_hand
                    .first()
                    .map(CardResponse::revealed)
                    .into_iter()
                    .collect();
                shown.push(CardResponse::hidden());
                (shown, String::new())
            }
            RoundStatus::Resolved(outcome) => (
                round.dealer_hand.iter().map(CardResponse::revealed).collect(),
                outcome.message().to_string(),
            ),
        };
        Self {
            player_hand,
            dealer_hand,
            message,
            score,
        }
    }
}

#[cw_serde]
pub struct ScoreResponse {
    pub score: i64,
}
