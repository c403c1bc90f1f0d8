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

//! Contract interface for the Sophon farming contract.
//!
//! Only the view functions needed to build a rewards report are declared.

#![allow(missing_docs)]

alloy::sol! {
    #[sol(rpc, all_derives)]
    interface ISophonFarm {
        struct PoolInfo {
            address lpToken;
            address l2Farm;
            uint256 amount;
            uint256 boostAmount;
            uint256 depositAmount;
            uint256 allocPoint;
            uint256 lastRewardBlock;
            uint256 accPointsPerShare;
            uint256 totalRewards;
            string description;
        }

        function getPoolInfo() external view returns (PoolInfo[] memory poolInfos);

        /// Returns `[amount, boostAmount, depositAmount, rewardSettled]` per user per pool.
        function getOptimizedUserInfo(address[] memory users)
            external
            view
            returns (uint256[4][][] memory userInfos);

        function getPendingPoints(address[] memory users)
            external
            view
            returns (uint256[][] memory pendings);

        function pointsPerBlock() external view returns (uint256);
    }
}
