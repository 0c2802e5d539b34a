// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for report output.

/// Errors that can occur when emitting a report in a structured format.
///
/// The text table itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// JSON serialisation of the report failed.
    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}
