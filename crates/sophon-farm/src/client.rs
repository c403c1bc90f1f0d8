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

//! Read-only client for the farming contract.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};

use crate::{
    contracts::ISophonFarm::{self, ISophonFarmInstance},
    error::FarmError,
    rewards::{FarmSnapshot, Pool, UserPoolEntry, WalletPosition},
};

/// Issues the view calls a rewards report needs, one after another.
pub struct FarmClient<P> {
    contract: ISophonFarmInstance<P>,
}

impl<P: Provider> FarmClient<P> {
    /// Create a client for the farm deployed at `address`.
    pub fn new(address: Address, provider: P) -> Self {
        Self { contract: ISophonFarm::new(address, provider) }
    }

    /// Address of the farm contract.
    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    /// All pools, in pool id order.
    pub async fn pool_info(&self) -> Result<Vec<Pool>, FarmError> {
        let pools =
            self.contract.getPoolInfo().call().await.map_err(FarmError::rpc("getPoolInfo"))?;
        tracing::debug!("Fetched {} pools from {:#x}", pools.len(), self.address());
        Ok(pools.into_iter().map(Pool::from).collect())
    }

    /// Points emitted per block across the whole farm.
    pub async fn points_per_block(&self) -> Result<U256, FarmError> {
        let points =
            self.contract.pointsPerBlock().call().await.map_err(FarmError::rpc("pointsPerBlock"))?;
        tracing::debug!("Points per block: {points}");
        Ok(points)
    }

    /// Per-pool user info for each wallet, indexed `[wallet][pool]`.
    pub async fn user_info(
        &self,
        wallets: &[Address],
        pool_count: usize,
    ) -> Result<Vec<Vec<UserPoolEntry>>, FarmError> {
        let rows = self
            .contract
            .getOptimizedUserInfo(wallets.to_vec())
            .call()
            .await
            .map_err(FarmError::rpc("getOptimizedUserInfo"))?;
        check_shape("getOptimizedUserInfo", &rows, wallets.len(), pool_count)?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().map(UserPoolEntry::from).collect())
            .collect())
    }

    /// Per-pool pending points for each wallet, indexed `[wallet][pool]`.
    pub async fn pending_points(
        &self,
        wallets: &[Address],
        pool_count: usize,
    ) -> Result<Vec<Vec<U256>>, FarmError> {
        let rows = self
            .contract
            .getPendingPoints(wallets.to_vec())
            .call()
            .await
            .map_err(FarmError::rpc("getPendingPoints"))?;
        check_shape("getPendingPoints", &rows, wallets.len(), pool_count)?;
        Ok(rows)
    }

    /// Read everything needed to report on `wallets`.
    pub async fn snapshot(&self, wallets: &[Address]) -> Result<FarmSnapshot, FarmError> {
        let pools = self.pool_info().await?;
        let user_info = self.user_info(wallets, pools.len()).await?;
        let pending = self.pending_points(wallets, pools.len()).await?;
        let points_per_block = self.points_per_block().await?;

        let wallets = wallets
            .iter()
            .zip(user_info)
            .zip(pending)
            .map(|((address, entries), pending)| WalletPosition {
                address: *address,
                entries,
                pending,
            })
            .collect::<Vec<_>>();

        tracing::info!(
            "Loaded farm snapshot: {} pools, {} wallets, {points_per_block} points per block",
            pools.len(),
            wallets.len()
        );

        Ok(FarmSnapshot { pools, points_per_block, wallets })
    }
}

// Responses are indexed [wallet][pool].
fn check_shape<T>(
    call: &str,
    rows: &[Vec<T>],
    wallet_count: usize,
    pool_count: usize,
) -> Result<(), FarmError> {
    if rows.len() != wallet_count {
        return Err(FarmError::MalformedResponse(format!(
            "{call} returned {} rows for {wallet_count} wallets",
            rows.len()
        )));
    }
    if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != pool_count) {
        return Err(FarmError::MalformedResponse(format!(
            "{call} returned {} entries for wallet {idx}, expected {pool_count} pools",
            row.len()
        )));
    }
    Ok(())
}
