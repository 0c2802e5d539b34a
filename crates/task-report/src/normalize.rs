// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Snapshot normalization: deduplicate, order, enrich.

use crate::CpuShare;
use std::collections::BTreeMap;
use task_model::{CorePin, TaskRecord, TaskSnapshot, TaskState};

/// One enriched report row.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TaskRow {
    pub number: u32,
    pub name: String,
    /// Decoded scheduler state, kept alongside its label.
    #[serde(skip)]
    pub state: TaskState,
    /// `"running"`, `"ready"`, … or `"unknown"`.
    pub state_label: &'static str,
    #[serde(skip)]
    pub core: CorePin,
    /// `"NO PIN"` or the core number.
    pub core_label: String,
    pub prio: u32,
    /// Raw run-time counter.
    pub rtc: u64,
    pub cpu_share: CpuShare,
    pub stack_remaining: u32,
}

impl TaskRow {
    fn enrich(record: &TaskRecord, run_time: u64) -> Self {
        Self {
            number: record.number,
            name: record.name.clone(),
            state: record.state,
            state_label: record.state.label(),
            core: record.core,
            core_label: record.core.label(),
            prio: record.prio,
            rtc: record.rtc,
            cpu_share: CpuShare::compute(record.rtc, run_time),
            stack_remaining: record.stack_remaining,
        }
    }
}

/// A normalized snapshot, ready for rendering.
///
/// Rows are strictly ascending by task number.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TaskReport {
    pub rows: Vec<TaskRow>,
    /// Total run time from the snapshot, shown in the footer.
    pub run_time: u64,
    /// Number of entries discarded because a later entry had the same number.
    pub duplicates_dropped: usize,
}

impl TaskReport {
    /// Number of distinct tasks.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row with the largest CPU share, if any share is available.
    pub fn busiest(&self) -> Option<&TaskRow> {
        self.rows
            .iter()
            .filter_map(|row| row.cpu_share.percent().map(|p| (row, p)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(row, _)| row)
    }

    /// Returns the row with the least stack remaining.
    pub fn lowest_stack(&self) -> Option<&TaskRow> {
        self.rows.iter().min_by_key(|row| row.stack_remaining)
    }

    /// Returns a one-line summary suitable for logging.
    ///
    /// # Example output
    /// ```text
    /// 7 tasks (2 running), run time 120034, busiest IDLE0 (81.2%), lowest stack ipc1 (412)
    /// ```
    pub fn summary(&self) -> String {
        let running = self
            .rows
            .iter()
            .filter(|row| row.state == TaskState::Running)
            .count();

        let mut out = format!(
            "{} tasks ({running} running), run time {}",
            self.len(),
            self.run_time,
        );
        if let Some(row) = self.busiest() {
            out.push_str(&format!(", busiest {} ({}%)", row.name, row.cpu_share));
        }
        if let Some(row) = self.lowest_stack() {
            out.push_str(&format!(
                ", lowest stack {} ({})",
                row.name, row.stack_remaining
            ));
        }
        out
    }
}

/// Normalizes a snapshot into a [`TaskReport`].
///
/// 1. Deduplicates by task number; the last entry in device order wins.
/// 2. Sorts ascending by task number.
/// 3. Derives state label, core label and CPU share for each row.
///
/// Never fails.
pub fn normalize(snapshot: &TaskSnapshot) -> TaskReport {
    let mut by_number: BTreeMap<u32, &TaskRecord> = BTreeMap::new();
    for record in &snapshot.task_info {
        by_number.insert(record.number, record);
    }

    let duplicates_dropped = snapshot.task_info.len() - by_number.len();
    if duplicates_dropped > 0 {
        tracing::warn!(
            duplicates_dropped,
            "snapshot contained repeated task numbers; keeping the last entry of each"
        );
    }
    if snapshot.run_time == 0 {
        tracing::warn!("snapshot total run time is zero; CPU share unavailable");
    }

    let rows = by_number
        .into_values()
        .map(|record| TaskRow::enrich(record, snapshot.run_time))
        .collect();

    TaskReport {
        rows,
        run_time: snapshot.run_time,
        duplicates_dropped,
    }
}
