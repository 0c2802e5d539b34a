// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # task-report
//!
//! Turns a raw [`TaskSnapshot`](task_model::TaskSnapshot) into an ordered,
//! annotated [`TaskReport`] and renders it for operators.
//!
//! # Pipeline
//! ```text
//! TaskSnapshot ──normalize()──► TaskReport ──render_table()──► String
//!                                    │
//!                                    └──────render_json()────► String
//! ```
//!
//! Normalization is a pure function: duplicate task numbers collapse to the
//! last occurrence, rows are sorted by task number, and each row gains its
//! state label, core label and CPU share. Field-level anomalies (unknown
//! state codes, unpinned cores, a zero run-time denominator) degrade the
//! affected cell and never fail.
//!
//! # Example
//! ```
//! use task_model::{CorePin, TaskRecord, TaskSnapshot, TaskState};
//!
//! let snap = TaskSnapshot {
//!     run_time: 200,
//!     task_info: vec![TaskRecord {
//!         number: 1,
//!         name: "main".into(),
//!         state: TaskState::Running,
//!         core: CorePin::Core(0),
//!         prio: 5,
//!         rtc: 50,
//!         stack_remaining: 256,
//!     }],
//! };
//!
//! let report = task_report::normalize(&snap);
//! assert_eq!(report.rows[0].cpu_share.to_string(), "25.0");
//!
//! let text = task_report::render_table(&report);
//! assert!(text.starts_with("RTOS Tasks"));
//! ```

mod error;
mod normalize;
mod render;
mod share;

pub use error::ReportError;
pub use normalize::{normalize, TaskReport, TaskRow};
pub use render::{render_json, render_table, COLUMNS, TITLE};
pub use share::CpuShare;
