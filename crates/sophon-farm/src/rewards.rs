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

//! Reward arithmetic over a snapshot of the farming contract.
//!
//! Every on-chain amount is an integer scaled by 10^18. Amounts are kept as
//! [U256] until they are converted into points for the report.

use alloy::primitives::{Address, U256};

use crate::contracts::ISophonFarm;

/// Ethereum averages roughly this many blocks per day.
pub const DEFAULT_BLOCKS_PER_DAY: u64 = 7150;

/// Scale between on-chain amounts and whole points.
pub const WEI_PER_POINT: f64 = 1e18;

/// A farming pool, as returned by `getPoolInfo`. Pools are identified by their index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    /// Token deposited into the pool
    pub lp_token: Address,
    /// Farm on the L2 the pool bridges to
    pub l2_farm: Address,
    /// Total amount currently deposited, including boosts
    pub amount: U256,
    /// Boosted portion of the deposit
    pub boost_amount: U256,
    /// Raw deposited amount
    pub deposit_amount: U256,
    /// Allocation weight, determines the pool's share of emissions
    pub alloc_point: U256,
    /// Block at which the pool accumulator was last updated
    pub last_reward_block: U256,
    /// Accumulated points per share
    pub acc_points_per_share: U256,
    /// Lifetime points issued by the pool
    pub total_rewards: U256,
    /// Free-text description
    pub description: String,
}

impl From<ISophonFarm::PoolInfo> for Pool {
    fn from(info: ISophonFarm::PoolInfo) -> Self {
        Self {
            lp_token: info.lpToken,
            l2_farm: info.l2Farm,
            amount: info.amount,
            boost_amount: info.boostAmount,
            deposit_amount: info.depositAmount,
            alloc_point: info.allocPoint,
            last_reward_block: info.lastRewardBlock,
            acc_points_per_share: info.accPointsPerShare,
            total_rewards: info.totalRewards,
            description: info.description,
        }
    }
}

/// A wallet's position in one pool. Only `amount` is used for reward shares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserPoolEntry {
    /// Amount credited to the wallet, including boosts
    pub amount: U256,
    /// Boosted portion
    pub boost_amount: U256,
    /// Raw deposited amount
    pub deposit_amount: U256,
    /// Rewards settled at the last update
    pub reward_settled: U256,
}

impl From<[U256; 4]> for UserPoolEntry {
    fn from([amount, boost_amount, deposit_amount, reward_settled]: [U256; 4]) -> Self {
        Self { amount, boost_amount, deposit_amount, reward_settled }
    }
}

/// Everything the contract reports about one wallet, indexed by pool id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletPosition {
    /// The wallet address
    pub address: Address,
    /// Per-pool user info
    pub entries: Vec<UserPoolEntry>,
    /// Per-pool pending points
    pub pending: Vec<U256>,
}

impl WalletPosition {
    /// Sum of pending points across all pools.
    pub fn pending_total(&self) -> U256 {
        self.pending.iter().fold(U256::ZERO, |acc, amount| acc.saturating_add(*amount))
    }
}

/// Contract state captured for a single report.
#[derive(Debug, Clone)]
pub struct FarmSnapshot {
    /// All pools, in pool id order
    pub pools: Vec<Pool>,
    /// Points emitted per block across the whole farm
    pub points_per_block: U256,
    /// Queried wallets, in input order
    pub wallets: Vec<WalletPosition>,
}

/// Convert a wei-scaled amount into points.
pub fn to_points(amount: U256) -> f64 {
    f64::from(amount) / WEI_PER_POINT
}

/// `part` as a percentage of `whole`, or zero when `whole` is not positive.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Daily points emitted by each pool, from its share of the total allocation.
///
/// Returns zero for every pool when the total allocation is zero.
pub fn daily_pool_emissions(
    pools: &[Pool],
    points_per_block: U256,
    blocks_per_day: u64,
) -> Vec<f64> {
    let total_alloc_point =
        pools.iter().fold(U256::ZERO, |acc, pool| acc.saturating_add(pool.alloc_point));
    if total_alloc_point.is_zero() {
        tracing::warn!("Total allocation points are zero; pools emit nothing");
        return vec![0.0; pools.len()];
    }

    let total_alloc_point = f64::from(total_alloc_point);
    let points_per_block = f64::from(points_per_block);
    pools
        .iter()
        .map(|pool| {
            (f64::from(pool.alloc_point) / total_alloc_point) * points_per_block
                * blocks_per_day as f64
                / WEI_PER_POINT
        })
        .collect()
}

/// Points the wallet accrues per day, from its share of each pool's deposit.
///
/// Pools with no deposit contribute nothing.
pub fn wallet_daily_accrual(entries: &[UserPoolEntry], pools: &[Pool], emissions: &[f64]) -> f64 {
    pools
        .iter()
        .zip(emissions)
        .zip(entries)
        .enumerate()
        .filter_map(|(pid, ((pool, emission), entry))| {
            if pool.amount.is_zero() {
                tracing::debug!("Skipping pool {pid} with no deposits");
                return None;
            }
            Some(f64::from(entry.amount) / f64::from(pool.amount) * emission)
        })
        .sum()
}

/// Rewards for a single wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletReward {
    /// The wallet address
    pub address: Address,
    /// Points pending right now
    pub current_rewards: f64,
    /// Points accrued per day at current rates
    pub daily_accrual: f64,
}

/// Per-pool figures, used for the pool breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolEmission {
    /// Pool id
    pub pid: usize,
    /// Pool description
    pub description: String,
    /// Allocation weight
    pub alloc_point: U256,
    /// Total deposit, in points
    pub deposited: f64,
    /// Lifetime points issued
    pub total_rewards: f64,
    /// Points emitted per day
    pub daily_emission: f64,
}

/// Aggregate totals across the queried wallets and all pools.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RewardsSummary {
    /// Current rewards summed over wallets
    pub wallet_rewards: f64,
    /// Lifetime points issued by all pools
    pub lifetime_rewards: f64,
    /// Daily accrual summed over wallets
    pub wallet_daily: f64,
    /// Daily emission summed over pools
    pub daily_emission: f64,
}

impl RewardsSummary {
    /// Wallets' share of all points issued so far.
    pub fn rewards_share(&self) -> f64 {
        percentage(self.wallet_rewards, self.lifetime_rewards)
    }

    /// Wallets' share of the daily emission.
    pub fn daily_share(&self) -> f64 {
        percentage(self.wallet_daily, self.daily_emission)
    }
}

/// Rewards computed from a [FarmSnapshot].
#[derive(Debug, Clone, PartialEq)]
pub struct RewardsReport {
    /// One row per queried wallet
    pub wallets: Vec<WalletReward>,
    /// One row per pool
    pub pools: Vec<PoolEmission>,
    /// Totals
    pub summary: RewardsSummary,
}

impl RewardsReport {
    /// Compute the report for a snapshot.
    pub fn compute(snapshot: &FarmSnapshot, blocks_per_day: u64) -> Self {
        let emissions =
            daily_pool_emissions(&snapshot.pools, snapshot.points_per_block, blocks_per_day);

        let wallets: Vec<WalletReward> = snapshot
            .wallets
            .iter()
            .map(|wallet| WalletReward {
                address: wallet.address,
                current_rewards: to_points(wallet.pending_total()),
                daily_accrual: wallet_daily_accrual(&wallet.entries, &snapshot.pools, &emissions),
            })
            .collect();

        let pools = snapshot
            .pools
            .iter()
            .zip(&emissions)
            .enumerate()
            .map(|(pid, (pool, emission))| PoolEmission {
                pid,
                description: pool.description.clone(),
                alloc_point: pool.alloc_point,
                deposited: to_points(pool.amount),
                total_rewards: to_points(pool.total_rewards),
                daily_emission: *emission,
            })
            .collect();

        let lifetime_rewards = snapshot
            .pools
            .iter()
            .fold(U256::ZERO, |acc, pool| acc.saturating_add(pool.total_rewards));

        let summary = RewardsSummary {
            wallet_rewards: wallets.iter().map(|w| w.current_rewards).sum(),
            lifetime_rewards: to_points(lifetime_rewards),
            wallet_daily: wallets.iter().map(|w| w.daily_accrual).sum(),
            daily_emission: emissions.iter().sum(),
        };

        tracing::debug!(
            "Computed rewards for {} wallets over {} pools: {:.1} pending, {:.1}/day",
            wallets.len(),
            snapshot.pools.len(),
            summary.wallet_rewards,
            summary.wallet_daily
        );

        Self { wallets, pools, summary }
    }
}
