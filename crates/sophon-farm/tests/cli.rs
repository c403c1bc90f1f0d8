// Copyright 2026 Boundless Foundation, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use alloy::{
    primitives::{address, Address, U256},
    sol_types::{SolCall, SolValue},
};
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use sophon_farm::contracts::ISophonFarm;

const ONE: u128 = 1_000_000_000_000_000_000;
const FARM: Address = address!("0x00000000000000000000000000000000000fa4a1");
const WALLET_A: Address = address!("0x2daabb7d7d8114EE334D5A141A97ef181e565e69");
const WALLET_B: Address = address!("0x686779932A7c12C279940f6987cE408204863465");

fn mock_call(server: &MockServer, selector: [u8; 4], result: Vec<u8>) {
    server.mock(|when, then| {
        when.method(POST).path("/").body_contains(format!("0x{}", hex::encode(selector)));
        then.status(200).header("content-type", "application/json").json_body(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": format!("0x{}", hex::encode(result))
        }));
    });
}

fn pool(amount: u128, total_rewards: u128, description: &str) -> ISophonFarm::PoolInfo {
    ISophonFarm::PoolInfo {
        amount: U256::from(amount),
        depositAmount: U256::from(amount),
        allocPoint: U256::from(1),
        totalRewards: U256::from(total_rewards),
        description: description.to_string(),
        ..Default::default()
    }
}

// Two equally weighted pools at one point per block.
fn mock_farm(server: &MockServer) {
    let pools = vec![pool(100 * ONE, 1_000 * ONE, "wstETH"), pool(50 * ONE, 3_000 * ONE, "sDAI")];
    mock_call(server, ISophonFarm::getPoolInfoCall::SELECTOR, (pools,).abi_encode_params());

    let row = |amounts: [u128; 2]| -> Vec<[U256; 4]> {
        amounts.iter().map(|a| [U256::from(*a), U256::ZERO, U256::from(*a), U256::ZERO]).collect()
    };
    let user_info = vec![row([50 * ONE, 0]), row([25 * ONE, 50 * ONE])];
    mock_call(
        server,
        ISophonFarm::getOptimizedUserInfoCall::SELECTOR,
        (user_info,).abi_encode_params(),
    );

    let pending = vec![
        vec![U256::from(5 * ONE), U256::from(3 * ONE)],
        vec![U256::from(10 * ONE), U256::from(2 * ONE)],
    ];
    mock_call(server, ISophonFarm::getPendingPointsCall::SELECTOR, (pending,).abi_encode_params());

    mock_call(
        server,
        ISophonFarm::pointsPerBlockCall::SELECTOR,
        (U256::from(ONE),).abi_encode_params(),
    );
}

fn report_cmd(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("sophon-farm").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--rpc-url")
        .arg(server.base_url())
        .arg("--farm-address")
        .arg(FARM.to_string())
        .arg("--wallet")
        .arg(format!("{WALLET_A},{WALLET_B}"));
    cmd
}

#[test]
fn prints_wallets_summary_and_forecast() {
    let server = MockServer::start();
    mock_farm(&server);

    report_cmd(&server)
        .arg("--forecast-date")
        .arg("2024-10-01,2025-01-01")
        .assert()
        .success()
        .stdout(contains(format!(
            "{:<42} {:>12} {:>12}",
            WALLET_A.to_checksum(None),
            "8.0",
            "1787.5"
        )))
        .stdout(contains(format!("{:<42} {:>12}", WALLET_B.to_checksum(None), "12.0")))
        .stdout(contains("SP combined (%): 20 SP (0.50%)"))
        .stdout(contains("Total SP Points : 4,000 SP"))
        .stdout(contains("Daily SP combined (%): 6,256 SP (87.50%)"))
        .stdout(contains("Total Daily SP: 7,150 SP"))
        .stdout(contains("2024-10-01"))
        .stdout(contains("2025-01-01"));
}

#[test]
fn show_pools_prints_breakdown() {
    let server = MockServer::start();
    mock_farm(&server);

    report_cmd(&server)
        .arg("--show-pools")
        .assert()
        .success()
        .stdout(contains("Alloc Points"))
        .stdout(contains("wstETH"))
        .stdout(contains("sDAI"))
        .stdout(contains("3,575.0"));
}

#[test]
fn rpc_failure_aborts() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).header("content-type", "application/json").json_body(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32000, "message": "execution reverted" }
        }));
    });

    report_cmd(&server)
        .assert()
        .failure()
        .stdout(contains("Summary").not())
        .stderr(contains("failed to fetch farm snapshot"));
}

#[test]
fn help() {
    Command::cargo_bin("sophon-farm")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage:"))
        .stdout(contains("--forecast-date"))
        .stdout(contains("--blocks-per-day"));
}
