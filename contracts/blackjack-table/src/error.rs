use blackjack::RoundError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("No active round for this player")]
    NoActiveRound {},

    #[error("{0}")]
    Round(#[from] RoundError),
}
