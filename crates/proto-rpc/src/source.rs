// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Snapshot sources.

use crate::TransportError;
use std::future::Future;
use std::path::{Path, PathBuf};
use task_model::{RawTaskSnapshot, TaskSnapshot};

/// Anything that can produce a validated [`TaskSnapshot`].
///
/// Each call is an independent point-in-time read. Implementations do not
/// retry; the first failure is returned as-is.
pub trait TaskSource {
    fn fetch_task_snapshot(
        &mut self,
    ) -> impl Future<Output = Result<TaskSnapshot, TransportError>> + Send;
}

/// Replays a recorded `get_system_tasks` reply from a JSON file.
///
/// The file holds the reply body:
/// `{"run_time": ..., "task_info": [...]}`. It is re-read on every fetch.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskSource for SnapshotFile {
    async fn fetch_task_snapshot(&mut self) -> Result<TaskSnapshot, TransportError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| TransportError::Replay {
                path: self.path.display().to_string(),
                detail: e.to_string(),
            })?;
        let raw: RawTaskSnapshot =
            serde_json::from_str(&content).map_err(TransportError::Decode)?;
        tracing::debug!(path = %self.path.display(), "replaying recorded snapshot");
        Ok(raw.validate()?)
    }
}
