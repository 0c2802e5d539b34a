// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests for snapshot normalization.

use proptest::prelude::*;
use std::collections::HashMap;
use task_model::{CorePin, TaskRecord, TaskSnapshot, TaskState};
use task_report::{normalize, CpuShare};

fn arb_record() -> impl Strategy<Value = TaskRecord> {
    (
        0u32..32,
        "[a-z]{1,8}",
        -3i32..10,
        -2i32..4,
        0u32..32,
        0u64..1_000_000,
        0u32..8192,
    )
        .prop_map(|(number, name, state, core, prio, rtc, stack_remaining)| TaskRecord {
            number,
            name,
            state: TaskState::from_code(state),
            core: CorePin::from_raw(core),
            prio,
            rtc,
            stack_remaining,
        })
}

fn arb_snapshot() -> impl Strategy<Value = TaskSnapshot> {
    (prop::collection::vec(arb_record(), 0..40), 0u64..2_000_000)
        .prop_map(|(task_info, run_time)| TaskSnapshot {
            task_info,
            run_time,
        })
}

proptest! {
    #[test]
    fn rows_strictly_ascending(snap in arb_snapshot()) {
        let report = normalize(&snap);
        for pair in report.rows.windows(2) {
            prop_assert!(pair[0].number < pair[1].number);
        }
    }

    #[test]
    fn one_row_per_number_equal_to_last_occurrence(snap in arb_snapshot()) {
        let mut last: HashMap<u32, &TaskRecord> = HashMap::new();
        for rec in &snap.task_info {
            last.insert(rec.number, rec);
        }

        let report = normalize(&snap);
        prop_assert_eq!(report.rows.len(), last.len());
        prop_assert_eq!(report.duplicates_dropped, snap.task_info.len() - last.len());

        for row in &report.rows {
            let rec = last[&row.number];
            prop_assert_eq!(&row.name, &rec.name);
            prop_assert_eq!(row.state, rec.state);
            prop_assert_eq!(row.core, rec.core);
            prop_assert_eq!(row.prio, rec.prio);
            prop_assert_eq!(row.rtc, rec.rtc);
            prop_assert_eq!(row.stack_remaining, rec.stack_remaining);
        }
    }

    #[test]
    fn unmapped_state_labels_are_unknown(
        code in any::<i32>().prop_filter("unmapped", |c| !(0..=4).contains(c))
    ) {
        prop_assert_eq!(TaskState::from_code(code).label(), "unknown");
    }

    #[test]
    fn core_label_is_number_unless_sentinel(core in any::<i32>()) {
        let label = CorePin::from_raw(core).label();
        if core == -1 {
            prop_assert_eq!(label, "NO PIN");
        } else {
            prop_assert_eq!(label, core.to_string());
        }
    }

    #[test]
    fn zero_run_time_never_yields_a_number(rtc in any::<u64>()) {
        prop_assert_eq!(CpuShare::compute(rtc, 0), CpuShare::NotAvailable);
    }

    #[test]
    fn nonzero_run_time_share_is_finite(rtc in any::<u64>(), run_time in 1u64..=u64::MAX) {
        let pct = CpuShare::compute(rtc, run_time).percent().unwrap();
        prop_assert!(pct.is_finite());
        prop_assert!(pct >= 0.0);
    }
}
