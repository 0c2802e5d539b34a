// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scheduler task states.

use std::fmt;

/// Label used for any state code outside the canonical mapping.
const UNKNOWN_LABEL: &str = "unknown";

/// Scheduler state of a task as reported by the device.
///
/// The wire carries an integer code. Codes 0–4 map onto the canonical states;
/// anything else is kept verbatim in [`TaskState::Unknown`] so it can still be
/// displayed and round-tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum TaskState {
    Running,
    Ready,
    Blocked,
    Suspended,
    Deleted,
    /// A code this host does not recognise.
    Unknown(i32),
}

impl TaskState {
    /// Maps a raw state code onto a [`TaskState`]. Never fails.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Running,
            1 => Self::Ready,
            2 => Self::Blocked,
            3 => Self::Suspended,
            4 => Self::Deleted,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw wire code for this state.
    pub fn code(self) -> i32 {
        match self {
            Self::Running => 0,
            Self::Ready => 1,
            Self::Blocked => 2,
            Self::Suspended => 3,
            Self::Deleted => 4,
            Self::Unknown(code) => code,
        }
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Ready => "ready",
            Self::Blocked => "blocked",
            Self::Suspended => "suspended",
            Self::Deleted => "deleted",
            Self::Unknown(_) => UNKNOWN_LABEL,
        }
    }

    /// Returns `true` if the code was outside the canonical mapping.
    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<i32> for TaskState {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<TaskState> for i32 {
    fn from(state: TaskState) -> Self {
        state.code()
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
