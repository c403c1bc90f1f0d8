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

//! Command-line configuration. Defaults reproduce the mainnet report.

use alloy::primitives::Address;
use chrono::NaiveDate;
use clap::Args;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::rewards::DEFAULT_BLOCKS_PER_DAY;

/// Public Ethereum mainnet RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://eth.llamarpc.com";

/// Sophon farming contract on Ethereum mainnet.
pub const DEFAULT_FARM_ADDRESS: &str = "0xEfF8E65aC06D7FE70842A4d54959e8692d6AE064";

/// Wallets reported on when none are given.
pub const DEFAULT_WALLETS: [&str; 2] =
    ["0x2daabb7d7d8114EE334D5A141A97ef181e565e69", "0x686779932A7c12C279940f6987cE408204863465"];

/// Forecast dates used when none are given.
pub const DEFAULT_FORECAST_DATES: [&str; 4] =
    ["2024-10-01", "2024-11-01", "2024-12-01", "2025-01-01"];

/// Options for the farm rewards report
#[derive(Args, Debug, Clone)]
pub struct FarmConfig {
    /// URL of the Ethereum RPC endpoint.
    #[clap(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: Url,

    /// Address of the Sophon farming contract.
    #[clap(long, env = "SOPHON_FARM_ADDRESS", default_value = DEFAULT_FARM_ADDRESS)]
    pub farm_address: Address,

    /// Wallet to report on. Repeat or separate with commas for several wallets.
    #[clap(
        long = "wallet",
        env = "WALLETS",
        value_delimiter = ',',
        num_args = 1..,
        default_values = DEFAULT_WALLETS
    )]
    pub wallets: Vec<Address>,

    /// Date (YYYY-MM-DD, midnight UTC) to project rewards to. Past dates are retrodicted.
    #[clap(
        long = "forecast-date",
        value_delimiter = ',',
        num_args = 1..,
        default_values = DEFAULT_FORECAST_DATES
    )]
    pub forecast_dates: Vec<NaiveDate>,

    /// Average number of blocks produced per day.
    #[clap(long, default_value_t = DEFAULT_BLOCKS_PER_DAY)]
    pub blocks_per_day: u64,

    /// Also print allocation and emission for each pool.
    #[clap(long)]
    pub show_pools: bool,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: LevelFilter,
}
