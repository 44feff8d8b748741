//! Integration tests for the full round flow: deal, act, settle, and
//! the durable ledger behind it.

use cosmwasm_std::{Addr, Binary};
use cw_multi_test::{App, ContractWrapper, Executor};

use blackjack_table::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, RoundResponse, ScoreResponse};

struct TestEnv {
    app: App,
    contract: Addr,
    player: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = app.api().addr_make("owner");
    let player = app.api().addr_make("player");

    let code_id = app.store_code(Box::new(ContractWrapper::new(
        blackjack_table::contract::execute,
        blackjack_table::contract::instantiate,
        blackjack_table::contract::query,
    )));

    let contract = app
        .instantiate_contract(
            code_id,
            owner,
            &InstantiateMsg {
                rng_seed: Some(Binary::from(b"integration seed".as_slice())),
            },
            &[],
            "blackjack-table",
            None,
        )
        .unwrap();

    TestEnv {
        app,
        contract,
        player,
    }
}

impl TestEnv {
    fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<cw_multi_test::AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.contract.clone(), msg, &[])
            .map_err(anyhow::Error::msg)
    }

    fn round(&self, player: &Addr) -> RoundResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.contract.clone(),
                &QueryMsg::GetRound {
                    player: player.to_string(),
                },
            )
            .unwrap()
    }

    fn score(&self, player: &Addr) -> i64 {
        let res: ScoreResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.contract.clone(),
                &QueryMsg::GetScore {
                    player: player.to_string(),
                },
            )
            .unwrap();
        res.score
    }
}

fn expected_delta(message: &str) -> i64 {
    match message {
        "Black Jack! Player wins!" | "Bust! Player wins!" | "Player wins!" => 100,
        "Black Jack! Player loses!" | "Bust! Player loses!" | "Player loses!" => -100,
        "Draw!" => 0,
        other => panic!("unexpected outcome message: {other}"),
    }
}

#[test]
fn test_new_round_then_stand() {
    let mut env = setup();
    let player = env.player.clone();

    env.execute(&player, &ExecuteMsg::NewRound {}).unwrap();

    let open = env.round(&player);
    assert_eq!(open.player_hand.len(), 2);
    assert_eq!(open.dealer_hand.len(), 2);
    assert_eq!(open.dealer_hand[1].rank, "?");
    assert_eq!(open.message, "");
    assert_eq!(open.score, 0);

    env.execute(&player, &ExecuteMsg::Stand {}).unwrap();

    let settled = env.round(&player);
    assert!(!settled.message.is_empty());
    // The player's cards did not move on a stand.
    assert_eq!(settled.player_hand, open.player_hand);
    // Hole card revealed, and the dealer drew to at least 17 or busted.
    assert!(settled.dealer_hand.len() >= 2);
    assert!(settled.dealer_hand.iter().all(|c| c.rank != "?"));
    // The ledger moved exactly as the message says.
    assert_eq!(settled.score, expected_delta(&settled.message));
    assert_eq!(env.score(&player), settled.score);
}

#[test]
fn test_hit_until_resolution() {
    let mut env = setup();
    let player = env.player.clone();

    env.execute(&player, &ExecuteMsg::NewRound {}).unwrap();

    // Hitting must terminate: each card moves the total toward 21.
    for _ in 0..21 {
        if !env.round(&player).message.is_empty() {
            break;
        }
        env.execute(&player, &ExecuteMsg::Hit {}).unwrap();
    }

    let settled = env.round(&player);
    assert!(
        settled.message == "Black Jack! Player wins!" || settled.message == "Bust! Player loses!",
        "hit rounds settle only by 21 or bust, got: {}",
        settled.message
    );
    assert_eq!(settled.score, expected_delta(&settled.message));
}

#[test]
fn test_ledger_persists_across_rounds() {
    let mut env = setup();
    let player = env.player.clone();

    env.execute(&player, &ExecuteMsg::NewRound {}).unwrap();
    env.execute(&player, &ExecuteMsg::Stand {}).unwrap();
    let banked = env.score(&player);

    env.execute(&player, &ExecuteMsg::NewRound {}).unwrap();
    let reopened = env.round(&player);
    assert_eq!(reopened.message, "");
    assert_eq!(reopened.player_hand.len(), 2);
    assert_eq!(reopened.score, banked);
}

#[test]
fn test_players_do_not_interfere() {
    let mut env = setup();
    let alice = env.app.api().addr_make("alice");
    let bob = env.app.api().addr_make("bob");

    env.execute(&alice, &ExecuteMsg::NewRound {}).unwrap();
    env.execute(&bob, &ExecuteMsg::NewRound {}).unwrap();
    let bob_open = env.round(&bob);

    env.execute(&alice, &ExecuteMsg::Stand {}).unwrap();

    // Alice settling her round left Bob's table and ledger alone.
    assert_eq!(env.round(&bob), bob_open);
    assert_eq!(env.score(&bob), 0);
}

#[test]
fn test_actions_require_a_round() {
    let mut env = setup();
    let player = env.player.clone();

    let err = env.execute(&player, &ExecuteMsg::Hit {}).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("No active round"));
}

#[test]
fn test_resolved_round_rejects_actions_until_reset() {
    let mut env = setup();
    let player = env.player.clone();

    env.execute(&player, &ExecuteMsg::NewRound {}).unwrap();
    env.execute(&player, &ExecuteMsg::Stand {}).unwrap();
    let banked = env.score(&player);

    let err = env.execute(&player, &ExecuteMsg::Stand {}).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Round already resolved"));
    // The rejection did not touch the ledger.
    assert_eq!(env.score(&player), banked);

    env.execute(&player, &ExecuteMsg::NewRound {}).unwrap();
    assert_eq!(env.round(&player).message, "");
}
