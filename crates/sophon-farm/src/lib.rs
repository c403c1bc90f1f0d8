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

//! Rewards report for the Sophon farming contract.
//!
//! Reads pool and wallet state from the farm with a handful of view calls,
//! computes pending and daily rewards for a set of wallets, and projects them
//! to fixed dates. See [run] for the whole pipeline.

#![deny(missing_docs)]

use alloy::providers::ProviderBuilder;
use anyhow::{Context, Result};
use chrono::Utc;

pub mod client;
pub mod config;
pub mod contracts;
pub mod display;
pub mod error;
pub mod forecast;
pub mod rewards;

pub use client::FarmClient;
pub use config::FarmConfig;
pub use error::FarmError;
pub use rewards::{FarmSnapshot, RewardsReport};

/// Fetch a snapshot, compute rewards and render the report.
pub async fn run(config: &FarmConfig) -> Result<String> {
    let provider =
        ProviderBuilder::new().disable_recommended_fillers().connect_http(config.rpc_url.clone());
    let client = FarmClient::new(config.farm_address, provider);

    let snapshot = client
        .snapshot(&config.wallets)
        .await
        .with_context(|| format!("failed to fetch farm snapshot from {}", config.rpc_url))?;

    let report = RewardsReport::compute(&snapshot, config.blocks_per_day);
    let forecast = forecast::forecast(&report.summary, &config.forecast_dates, Utc::now());

    Ok(display::render_report(&report, &forecast, config.show_pools))
}
