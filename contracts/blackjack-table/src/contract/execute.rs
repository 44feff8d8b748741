#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, Storage};
use rand::rngs::SmallRng;

use blackjack::{Outcome, Round, RoundStatus};

use crate::error::ContractError;
use crate::msg::ExecuteMsg;
use crate::rng::draw_rng;
use crate::state::{CONFIG, DRAW_SEQ, ROUNDS, SCORES};

/// Entry point for contract execution.
/// The sender is the authenticated player; every handler keys its state
/// access by it, so wallets cannot touch each other's rounds.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::NewRound {} => execute_new_round(deps, env, info),
        ExecuteMsg::Hit {} => execute_hit(deps, env, info),
        ExecuteMsg::Stand {} => execute_stand(deps, env, info),
    }
}

/// Advance the draw counter and derive this action's draw stream.
fn next_draw_rng(
    storage: &mut dyn Storage,
    env: &Env,
    player: &Addr,
) -> Result<SmallRng, ContractError> {
    let config = CONFIG.load(storage)?;
    let seq = DRAW_SEQ.load(storage)?;
    DRAW_SEQ.save(storage, &(seq + 1))?;
    Ok(draw_rng(config.rng_seed.as_slice(), player, seq, env))
}

/// Apply the outcome's delta to the durable ledger. Runs exactly once
/// per round, at the transition into `Resolved`; a resolved round
/// rejects further actions before this can be reached again.
fn settle(storage: &mut dyn Storage, player: &Addr, outcome: Outcome) -> Result<i64, ContractError> {
    let score = SCORES.may_load(storage, player)?.unwrap_or(0) + outcome.score_delta();
    SCORES.save(storage, player, &score)?;
    Ok(score)
}

pub fn execute_new_round(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut rng = next_draw_rng(deps.storage, &env, &info.sender)?;
    let round = Round::deal(&mut rng)?;
    ROUNDS.save(deps.storage, &info.sender, &round)?;

    let score = SCORES.may_load(deps.storage, &info.sender)?.unwrap_or(0);

    Ok(Response::new()
        .add_attribute("action", "new_round")
        .add_attribute("player", info.sender)
        .add_attribute("score", score.to_string()))
}

pub fn execute_hit(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let mut round = ROUNDS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NoActiveRound {})?;

    let mut rng = next_draw_rng(deps.storage, &env, &info.sender)?;
    let status = round.hit(&mut rng)?;
    ROUNDS.save(deps.storage, &info.sender, &round)?;

    let mut response = Response::new()
        .add_attribute("action", "hit")
        .add_attribute("player", info.sender.clone())
        .add_attribute("player_value", round.player_value().to_string());

    if let RoundStatus::Resolved(outcome) = status {
        let score = settle(deps.storage, &info.sender, outcome)?;
        response = response
            .add_attribute("outcome", outcome.message())
            .add_attribute("score", score.to_string());
    }
    Ok(response)
}

pub fn execute_stand(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let mut round = ROUNDS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NoActiveRound {})?;

    let mut rng = next_draw_rng(deps.storage, &env, &info.sender)?;
    let status = round.stand(&mut rng)?;
    ROUNDS.save(deps.storage, &info.sender, &round)?;

    let mut response = Response::new()
        .add_attribute("action", "stand")
        .add_attribute("player", info.sender.clone())
        .add_attribute("dealer_value", round.dealer_value().to_string());

    if let RoundStatus::Resolved(outcome) = status {
        let score = settle(deps.storage, &info.sender, outcome)?;
        response = response
            .add_attribute("outcome", outcome.message())
            .add_attribute("score", score.to_string());
    }
    Ok(response)
}
