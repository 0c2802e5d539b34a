// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # proto-rpc
//!
//! Host side of the device RPC channel used to fetch task snapshots.
//!
//! # Layers
//! ```text
//! TaskSource::fetch_task_snapshot()
//!       │
//!       ▼
//!   RpcClient::call()        seqn / status checks, per-call timeout
//!       │
//!       ▼
//!   RpcFrame (JSON)          header { seqn, no_reply, status } + callset
//!       │
//!       ▼
//!   COBS framing             0x00 | COBS(payload) | 0x00
//!       │
//!       ▼
//!   TCP stream
//! ```
//!
//! Every failure on this path surfaces as a single [`TransportError`]; the
//! caller reports it and stops. No retries are attempted here.
//!
//! # Connection Ownership
//! An [`RpcClient`] owns its socket. Dropping the client (or calling
//! [`RpcClient::close`]) releases the connection; dropping an in-flight
//! `fetch_task_snapshot` future abandons the call with no other side effects.
//!
//! # Example
//! ```no_run
//! use proto_rpc::{ClientConfig, RpcClient, TaskSource};
//!
//! # async fn demo() -> Result<(), proto_rpc::TransportError> {
//! let config = ClientConfig::default();
//! let mut client = RpcClient::connect(&config).await?;
//! let snapshot = client.fetch_task_snapshot().await?;
//! println!("{} tasks, run time {}", snapshot.task_info.len(), snapshot.run_time);
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod cobs;
mod config;
mod error;
pub mod frame;
mod source;

pub use client::RpcClient;
pub use config::ClientConfig;
pub use error::{ConfigError, FrameError, TransportError};
pub use frame::{Callset, RpcFrame, RpcHeader, RpcStatus, RtosUtilsMsg};
pub use source::{SnapshotFile, TaskSource};
