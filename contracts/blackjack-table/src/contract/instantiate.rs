#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::InstantiateMsg;
use crate::state::{Config, CONFIG, DRAW_SEQ};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:blackjack-table";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entry point for contract instantiation.
/// Stores the base draw seed and zeroes the draw counter.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let rng_seed = msg
        .rng_seed
        .unwrap_or_else(|| Binary::new(env.block.time.nanos().to_le_bytes().to_vec()));

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &Config { rng_seed })?;
    DRAW_SEQ.save(deps.storage, &0)?;

    Ok(Response::new().add_attribute("method", "instantiate"))
}
