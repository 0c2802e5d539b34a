// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Point-in-time task snapshots.
//!
//! A [`TaskSnapshot`] is created fresh for every fetch and discarded after
//! rendering. It is never mutated once received.

use crate::{RawTaskRecord, SnapshotError, TaskRecord};

/// The device's reply to a task query.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TaskSnapshot {
    /// Task records in device order. May contain repeated task numbers.
    pub task_info: Vec<TaskRecord>,
    /// Total run time since scheduler start. Denominator for CPU share;
    /// may be zero.
    pub run_time: u64,
}

/// A snapshot as decoded from the wire, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTaskSnapshot {
    #[serde(default)]
    pub task_info: Option<Vec<RawTaskRecord>>,
    #[serde(default)]
    pub run_time: Option<u64>,
}

impl RawTaskSnapshot {
    /// Validates required fields and produces a [`TaskSnapshot`].
    ///
    /// An empty `task_info` list is valid; an absent one is not.
    pub fn validate(self) -> Result<TaskSnapshot, SnapshotError> {
        let entries = self
            .task_info
            .ok_or(SnapshotError::MissingField { field: "task_info" })?;
        let run_time = self
            .run_time
            .ok_or(SnapshotError::MissingField { field: "run_time" })?;

        let task_info = entries
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.validate(i))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(tasks = task_info.len(), run_time, "validated task snapshot");

        Ok(TaskSnapshot {
            task_info,
            run_time,
        })
    }
}

impl TryFrom<RawTaskSnapshot> for TaskSnapshot {
    type Error = SnapshotError;

    fn try_from(raw: RawTaskSnapshot) -> Result<Self, Self::Error> {
        raw.validate()
    }
}
