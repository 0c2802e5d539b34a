// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! RPC frame codec.
//!
//! Each deframed payload is one [`RpcFrame`]: a header carrying the sequence
//! number and status, plus the callset message.
//!
//! # Format
//! ```json
//! {
//!   "header": { "seqn": 7, "no_reply": false, "status": "RPC_SUCCESS" },
//!   "callset": {
//!     "rtosutils": {
//!       "get_system_tasks_reply": {
//!         "run_time": 1000,
//!         "task_info": [
//!           { "number": 1, "name": "main", "state": 0, "core_num": 0,
//!             "prio": 5, "rtc": 100, "stack_remaining": 256 }
//!         ]
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Replies to calls the device cannot dispatch carry only a header with a
//! failure status.
//!
//! # Compatibility
//! The payload is JSON. The stock firmware encodes the same header and
//! callset as protobuf, so this client only talks to a device (or emulator)
//! that serves the JSON encoding. Interoperating with protobuf firmware
//! means replacing [`RpcFrame::encode`] and [`RpcFrame::decode`]; the COBS
//! framing and everything above it stay as they are.

use crate::TransportError;
use std::fmt;
use task_model::RawTaskSnapshot;

/// Status reported by the device in the reply header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcStatus {
    #[default]
    RpcSuccess,
    /// No callset matches the request.
    RpcBadResolverLookup,
    /// The callset has no handler for the call.
    RpcBadHandlerLookup,
    /// The callset payload could not be unpacked.
    RpcBadCallsetUnpack,
    /// The handler ran and failed.
    RpcHandlerError,
    /// A status this client does not know.
    #[serde(other)]
    Unknown,
}

impl RpcStatus {
    pub fn is_success(self) -> bool {
        self == Self::RpcSuccess
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RpcSuccess => "RPC_SUCCESS",
            Self::RpcBadResolverLookup => "RPC_BAD_RESOLVER_LOOKUP",
            Self::RpcBadHandlerLookup => "RPC_BAD_HANDLER_LOOKUP",
            Self::RpcBadCallsetUnpack => "RPC_BAD_CALLSET_UNPACK",
            Self::RpcHandlerError => "RPC_HANDLER_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for RpcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frame header.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RpcHeader {
    /// Sequence number; a reply echoes the number of its call.
    pub seqn: u32,
    /// When set on a call, the device sends no reply.
    #[serde(default)]
    pub no_reply: bool,
    #[serde(default)]
    pub status: RpcStatus,
}

/// Call and reply messages of the `rtosutils` callset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RtosUtilsMsg {
    /// Request the current task list. Takes no parameters.
    GetSystemTasksCall {},
    GetSystemTasksReply(RawTaskSnapshot),
}

/// Callsets understood by this client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Callset {
    Rtosutils(RtosUtilsMsg),
}

impl Callset {
    /// The `get_system_tasks` call.
    pub fn get_system_tasks() -> Self {
        Self::Rtosutils(RtosUtilsMsg::GetSystemTasksCall {})
    }
}

/// One RPC message, call or reply.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RpcFrame {
    pub header: RpcHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callset: Option<Callset>,
}

impl RpcFrame {
    /// Builds a call frame expecting a reply.
    pub fn call(seqn: u32, callset: Callset) -> Self {
        Self {
            header: RpcHeader {
                seqn,
                no_reply: false,
                status: RpcStatus::RpcSuccess,
            },
            callset: Some(callset),
        }
    }

    /// Builds a reply frame for `seqn`.
    pub fn reply(seqn: u32, status: RpcStatus, callset: Option<Callset>) -> Self {
        Self {
            header: RpcHeader {
                seqn,
                no_reply: false,
                status,
            },
            callset,
        }
    }

    /// Serialises the frame into a payload ready for COBS framing.
    pub fn encode(&self) -> Result<Vec<u8>, TransportError> {
        serde_json::to_vec(self).map_err(TransportError::Encode)
    }

    /// Parses a deframed payload.
    pub fn decode(payload: &[u8]) -> Result<Self, TransportError> {
        serde_json::from_slice(payload).map_err(TransportError::Decode)
    }
}
