// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for snapshot validation.

/// Structural problems with a device reply.
///
/// Degraded field values (unknown state codes, unpinned cores, zero run time)
/// are never errors; only absent data is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// A top-level field of the snapshot is absent.
    #[error("snapshot is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A task entry lacks one of its required fields.
    #[error("task entry {index} is missing required field '{field}'")]
    MissingTaskField { index: usize, field: &'static str },
}
