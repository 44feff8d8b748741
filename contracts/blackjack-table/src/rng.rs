use cosmwasm_std::{Addr, Env};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

const SEED_DOMAIN: &[u8] = b"BLACKJACK_TABLE_DRAW_V1";

/// Derive the draw stream for one action: a domain-separated hash of
/// the configured base seed, the player, the global draw counter, and
/// the block time. Uniform per draw, deterministic per block; deck
/// secrecy against a chain-reading adversary is out of scope.
pub fn draw_rng(base_seed: &[u8], player: &Addr, seq: u64, env: &Env) -> SmallRng {
    let mut hasher = Sha256::new();
    hasher.update(SEED_DOMAIN);
    hasher.update(base_seed);
    hasher.update(player.as_bytes());
    hasher.update(seq.to_le_bytes());
    hasher.update(env.block.time.nanos().to_le_bytes());
    hasher.update(env.block.height.to_le_bytes());
    let digest = hasher.finalize();
    // SmallRng's seed width differs between wasm32 and native targets;
    // an u64 seed works for both.
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest[..8]);
    SmallRng::seed_from_u64(u64::from_le_bytes(word))
}
