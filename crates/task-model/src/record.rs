// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-task telemetry records.

use crate::{CorePin, SnapshotError, TaskState};

/// Telemetry for a single RTOS task at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TaskRecord {
    /// Task number assigned by the scheduler. Unique within a normalized
    /// snapshot; used for ordering and deduplication.
    pub number: u32,
    /// Task name. Not guaranteed unique.
    pub name: String,
    /// Scheduler state.
    pub state: TaskState,
    /// Core affinity (`core_num` on the wire).
    #[serde(rename = "core_num")]
    pub core: CorePin,
    /// Current priority, on the device's own scale.
    pub prio: u32,
    /// Accumulated run-time counter, same unit as the snapshot run time.
    pub rtc: u64,
    /// Stack high-water mark, in the device's stack unit.
    pub stack_remaining: u32,
}

/// A task entry as it arrives from the device, before validation.
///
/// Every field is optional so that a reply with gaps still deserializes and
/// can be rejected with a precise [`SnapshotError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTaskRecord {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<i32>,
    #[serde(default)]
    pub core_num: Option<i32>,
    #[serde(default)]
    pub prio: Option<u32>,
    #[serde(default)]
    pub rtc: Option<u64>,
    #[serde(default)]
    pub stack_remaining: Option<u32>,
}

impl RawTaskRecord {
    /// Checks that every field is present. `index` is the entry's position in
    /// the reply and is only used for error reporting.
    pub fn validate(self, index: usize) -> Result<TaskRecord, SnapshotError> {
        let missing = |field| SnapshotError::MissingTaskField { index, field };

        Ok(TaskRecord {
            number: self.number.ok_or_else(|| missing("number"))?,
            name: self.name.ok_or_else(|| missing("name"))?,
            state: TaskState::from_code(self.state.ok_or_else(|| missing("state"))?),
            core: CorePin::from_raw(self.core_num.ok_or_else(|| missing("core_num"))?),
            prio: self.prio.ok_or_else(|| missing("prio"))?,
            rtc: self.rtc.ok_or_else(|| missing("rtc"))?,
            stack_remaining: self
                .stack_remaining
                .ok_or_else(|| missing("stack_remaining"))?,
        })
    }
}
