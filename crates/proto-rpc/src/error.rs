// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the RPC client.

use crate::RpcStatus;
use task_model::SnapshotError;

/// Any failure while fetching a snapshot from the device.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The TCP connection could not be established.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// An operation did not complete within the configured timeout.
    #[error("{operation} timed out after {timeout_ms} ms")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
    },

    /// Socket read/write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The device closed the connection before a full reply arrived.
    #[error("connection closed by device")]
    Closed,

    /// The byte stream could not be deframed.
    #[error("framing error: {0}")]
    Framing(#[from] FrameError),

    /// An outgoing frame could not be encoded.
    #[error("failed to encode RPC frame: {0}")]
    Encode(#[source] serde_json::Error),

    /// An incoming frame could not be decoded.
    #[error("failed to decode RPC frame: {0}")]
    Decode(#[source] serde_json::Error),

    /// The device processed the call and reported a failure status.
    #[error("device returned status {status}")]
    DeviceStatus { status: RpcStatus },

    /// The reply does not belong to the outstanding call.
    #[error("reply sequence number {got} does not match request {expected}")]
    SequenceMismatch { expected: u32, got: u32 },

    /// The reply decoded but carried the wrong message.
    #[error("unexpected reply: {0}")]
    UnexpectedReply(String),

    /// The reply lacks required snapshot fields.
    #[error("malformed reply: {0}")]
    MalformedReply(#[from] SnapshotError),

    /// A recorded snapshot could not be read.
    #[error("cannot read snapshot file '{path}': {detail}")]
    Replay { path: String, detail: String },
}

/// COBS framing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// A zero byte appeared where only code or data bytes are allowed.
    #[error("zero byte inside COBS data at offset {offset}")]
    UnexpectedZero { offset: usize },

    /// A code byte points past the end of the frame.
    #[error("COBS block at offset {offset} runs past the end of the frame")]
    Truncated { offset: usize },

    /// The frame (decoded, or still accumulating) exceeds the size limit.
    #[error("frame exceeds maximum size of {max} bytes")]
    TooLarge { max: usize },
}

/// Client configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialise error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
