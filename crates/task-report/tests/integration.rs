// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: device reply → validated snapshot → report text.

use task_model::{RawTaskSnapshot, SnapshotError};
use task_report::{normalize, render_json, render_table, CpuShare};

// ── Helpers ────────────────────────────────────────────────────

const TWO_TASKS: &str = r#"{
    "run_time": 1000,
    "task_info": [
        {"number": 2, "name": "idle", "state": 1, "core_num": -1,
         "prio": 0, "rtc": 900, "stack_remaining": 128},
        {"number": 1, "name": "main", "state": 0, "core_num": 0,
         "prio": 5, "rtc": 100, "stack_remaining": 256}
    ]
}"#;

fn report_text(json: &str) -> Result<String, SnapshotError> {
    let raw: RawTaskSnapshot = serde_json::from_str(json).expect("valid json");
    let snapshot = raw.validate()?;
    Ok(render_table(&normalize(&snapshot)))
}

// ── End-to-End ─────────────────────────────────────────────────

#[test]
fn test_two_task_scenario() {
    let text = report_text(TWO_TASKS).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "RTOS Tasks");
    assert_eq!(
        lines[3].split_whitespace().collect::<Vec<_>>(),
        ["1", "main", "running", "0", "5", "100", "10.0", "256"]
    );
    assert_eq!(
        lines[4].split_whitespace().collect::<Vec<_>>(),
        ["2", "idle", "ready", "NO", "PIN", "0", "900", "90.0", "128"]
    );
    assert_eq!(lines[5], "total run time: 1000");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_duplicates_and_unknown_state() {
    let json = r#"{
        "run_time": 200,
        "task_info": [
            {"number": 7, "name": "old", "state": 0, "core_num": 1,
             "prio": 3, "rtc": 10, "stack_remaining": 64},
            {"number": 7, "name": "new", "state": 12, "core_num": 1,
             "prio": 3, "rtc": 50, "stack_remaining": 60}
        ]
    }"#;
    let text = report_text(json).unwrap();
    assert!(!text.contains("old"));
    let row: Vec<&str> = text.lines().nth(3).unwrap().split_whitespace().collect();
    assert_eq!(row, ["7", "new", "unknown", "1", "3", "50", "25.0", "60"]);
}

#[test]
fn test_zero_run_time_renders_sentinel() {
    let json = r#"{
        "run_time": 0,
        "task_info": [
            {"number": 1, "name": "boot", "state": 0, "core_num": 0,
             "prio": 1, "rtc": 0, "stack_remaining": 10}
        ]
    }"#;
    let text = report_text(json).unwrap();
    assert!(text.lines().nth(3).unwrap().contains("n/a"));
    assert!(text.ends_with("total run time: 0\n"));
}

#[test]
fn test_absent_task_info_fails_fast() {
    let err = report_text(r#"{"run_time": 5}"#).unwrap_err();
    assert_eq!(err, SnapshotError::MissingField { field: "task_info" });
}

#[test]
fn test_json_matches_table() {
    let raw: RawTaskSnapshot = serde_json::from_str(TWO_TASKS).unwrap();
    let report = normalize(&raw.validate().unwrap());
    assert_eq!(report.rows[0].cpu_share, CpuShare::Percent(10.0));

    let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    let names: Vec<&str> = value["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["main", "idle"]);
}
