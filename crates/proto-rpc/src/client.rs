// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! TCP RPC client.

use crate::cobs::{self, Deframer};
use crate::frame::{Callset, RpcFrame, RtosUtilsMsg};
use crate::{ClientConfig, FrameError, TaskSource, TransportError};
use std::time::Duration;
use task_model::{RawTaskSnapshot, TaskSnapshot};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Socket read size.
const READ_CHUNK: usize = 1024;

/// A connection to the device's RPC server.
///
/// Calls are strictly sequential: one request, one reply.
#[derive(Debug)]
pub struct RpcClient {
    stream: TcpStream,
    deframer: Deframer,
    seqn: u32,
    timeout: Duration,
    max_frame_size: usize,
    addr: String,
}

impl RpcClient {
    /// Connects to `config.addr()`, bounded by `config.timeout()`.
    pub async fn connect(config: &ClientConfig) -> Result<Self, TransportError> {
        let addr = config.addr();
        let timeout = config.timeout();

        let stream = match tokio::time::timeout(timeout, TcpStream::connect(&addr)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => return Err(TransportError::Connect { addr, source }),
            Err(_) => {
                return Err(TransportError::Timeout {
                    operation: "connect",
                    timeout_ms: config.timeout_ms,
                })
            }
        };
        stream.set_nodelay(true)?;

        tracing::info!(%addr, "connected to device");

        Ok(Self {
            stream,
            deframer: Deframer::new(config.max_frame_size),
            seqn: 0,
            timeout,
            max_frame_size: config.max_frame_size,
            addr,
        })
    }

    /// Remote address this client is connected to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Performs one call and returns the reply's callset message.
    ///
    /// Fails if the exchange exceeds the configured timeout, the reply
    /// carries a sequence number this client never sent, or the device
    /// reports a non-success status. Late replies to earlier calls that
    /// timed out are discarded, so the connection stays usable.
    pub async fn call(&mut self, callset: Callset) -> Result<Callset, TransportError> {
        let timeout = self.timeout;
        match tokio::time::timeout(timeout, self.exchange(callset)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                operation: "rpc call",
                timeout_ms: timeout.as_millis() as u64,
            }),
        }
    }

    async fn exchange(&mut self, callset: Callset) -> Result<Callset, TransportError> {
        self.seqn = self.seqn.wrapping_add(1);
        let seqn = self.seqn;

        let payload = RpcFrame::call(seqn, callset).encode()?;
        if payload.len() > self.max_frame_size {
            return Err(FrameError::TooLarge {
                max: self.max_frame_size,
            }
            .into());
        }
        let wire = cobs::frame(&payload);

        tracing::debug!(seqn, bytes = wire.len(), "sending rpc call");
        self.stream.write_all(&wire).await?;

        let reply = loop {
            let reply = RpcFrame::decode(&self.read_frame().await?)?;
            tracing::debug!(
                seqn = reply.header.seqn,
                status = %reply.header.status,
                "received rpc reply"
            );

            if reply.header.seqn == seqn {
                break reply;
            }
            if is_stale(reply.header.seqn, seqn) {
                tracing::debug!(
                    seqn = reply.header.seqn,
                    expected = seqn,
                    "discarding late reply to an abandoned call"
                );
                continue;
            }
            return Err(TransportError::SequenceMismatch {
                expected: seqn,
                got: reply.header.seqn,
            });
        };
        if !reply.header.status.is_success() {
            return Err(TransportError::DeviceStatus {
                status: reply.header.status,
            });
        }
        reply
            .callset
            .ok_or_else(|| TransportError::UnexpectedReply("reply carries no callset".into()))
    }

    async fn read_frame(&mut self) -> Result<Vec<u8>, TransportError> {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            if let Some(payload) = self.deframer.next_frame()? {
                return Ok(payload);
            }
            let n = self.stream.read(&mut buf).await?;
            if n == 0 {
                return Err(TransportError::Closed);
            }
            tracing::trace!(bytes = n, "socket read");
            self.deframer.push(&buf[..n]);
        }
    }

    /// Issues `rtosutils.get_system_tasks` and returns the unvalidated reply.
    pub async fn get_system_tasks(&mut self) -> Result<RawTaskSnapshot, TransportError> {
        match self.call(Callset::get_system_tasks()).await? {
            Callset::Rtosutils(RtosUtilsMsg::GetSystemTasksReply(raw)) => Ok(raw),
            other => Err(TransportError::UnexpectedReply(format!(
                "expected get_system_tasks_reply, got {other:?}"
            ))),
        }
    }

    /// Shuts the connection down.
    pub async fn close(mut self) -> Result<(), TransportError> {
        self.stream.shutdown().await?;
        tracing::info!(addr = %self.addr, "closed device connection");
        Ok(())
    }
}

/// Returns `true` if `got` was issued before `expected`, allowing for
/// wrap-around of the sequence counter.
fn is_stale(got: u32, expected: u32) -> bool {
    let behind = expected.wrapping_sub(got);
    behind != 0 && behind <= u32::MAX / 2
}

impl TaskSource for RpcClient {
    async fn fetch_task_snapshot(&mut self) -> Result<TaskSnapshot, TransportError> {
        let raw = self.get_system_tasks().await?;
        Ok(raw.validate()?)
    }
}
