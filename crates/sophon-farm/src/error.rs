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

//! Errors raised by the farm client.

use thiserror::Error;

/// Errors returned while reading from the farming contract.
#[derive(Error, Debug)]
pub enum FarmError {
    /// A contract read failed at the transport or RPC level.
    #[error("RPC error calling {call}: {source}")]
    Rpc {
        /// Name of the contract function that failed
        call: &'static str,
        /// Underlying contract error
        #[source]
        source: alloy::contract::Error,
    },

    /// The contract returned data with an unexpected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl FarmError {
    pub(crate) fn rpc(call: &'static str) -> impl FnOnce(alloy::contract::Error) -> Self {
        move |source| Self::Rpc { call, source }
    }
}
