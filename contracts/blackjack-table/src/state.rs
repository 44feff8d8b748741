use blackjack::Round;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Base seed material mixed into every per-action draw seed.
    pub rng_seed: Binary,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Durable score ledger, one running total per wallet. Absent means 0.
pub const SCORES: Map<&Addr, i64> = Map::new("scores");

/// In-flight rounds keyed by the authenticated player. One round per
/// wallet; a new deal overwrites whatever was there.
pub const ROUNDS: Map<&Addr, Round> = Map::new("rounds");

/// Monotone counter folded into seed derivation so every drawing action
/// runs on a distinct stream.
pub const DRAW_SEQ: Item<u64> = Item::new("draw_seq");
