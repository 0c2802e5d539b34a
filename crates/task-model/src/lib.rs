// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # task-model
//!
//! Strongly typed view of the task telemetry an RTOS device reports over RPC.
//!
//! # Key Types
//! - [`TaskRecord`] — one scheduler task at snapshot time.
//! - [`TaskState`] — closed set of scheduler states with an `Unknown` arm for
//!   codes this host does not recognise.
//! - [`CorePin`] — core affinity, distinguishing "not pinned" from a core id.
//! - [`TaskSnapshot`] — the full device reply: records plus total run time.
//!
//! # Validation Boundary
//! Replies arrive as [`RawTaskSnapshot`], where every field is optional.
//! Converting to [`TaskSnapshot`] checks required fields exactly once; after
//! that, every consumer works with fully populated values.
//!
//! ```text
//! RawTaskSnapshot ──validate()──► TaskSnapshot ──► normalizer / renderer
//!        │
//!        └── missing field ──► SnapshotError
//! ```
//!
//! # Example
//! ```
//! use task_model::{CorePin, RawTaskRecord, RawTaskSnapshot, TaskState};
//!
//! let raw = RawTaskSnapshot {
//!     run_time: Some(1000),
//!     task_info: Some(vec![RawTaskRecord {
//!         number: Some(1),
//!         name: Some("main".into()),
//!         state: Some(0),
//!         core_num: Some(-1),
//!         prio: Some(5),
//!         rtc: Some(100),
//!         stack_remaining: Some(256),
//!     }]),
//! };
//!
//! let snap = raw.validate().unwrap();
//! assert_eq!(snap.task_info[0].state, TaskState::Running);
//! assert_eq!(snap.task_info[0].core, CorePin::Unpinned);
//! ```

mod core_pin;
mod error;
mod record;
mod snapshot;
mod state;

pub use core_pin::CorePin;
pub use error::SnapshotError;
pub use record::{RawTaskRecord, TaskRecord};
pub use snapshot::{RawTaskSnapshot, TaskSnapshot};
pub use state::TaskState;
