#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdError, StdResult};

use crate::msg::{QueryMsg, RoundResponse, ScoreResponse};
use crate::state::{ROUNDS, SCORES};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetRound { player } => to_json_binary(&query_round(deps, player)?),
        QueryMsg::GetScore { player } => to_json_binary(&query_score(deps, player)?),
    }
}

fn query_round(deps: Deps, player: String) -> StdResult<RoundResponse> {
    let player = deps.api.addr_validate(&player)?;
    let round = ROUNDS
        .may_load(deps.storage, &player)?
        .ok_or_else(|| StdError::msg("No round on record for this player"))?;
    let score = SCORES.may_load(deps.storage, &player)?.unwrap_or(0);
    Ok(RoundResponse::project(&round, score))
}

fn query_score(deps: Deps, player: String) -> StdResult<ScoreResponse> {
    let player = deps.api.addr_validate(&player)?;
    let score = SCORES.may_load(deps.storage, &player)?.unwrap_or(0);
    Ok(ScoreResponse { score })
}
