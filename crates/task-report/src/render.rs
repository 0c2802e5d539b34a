// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Report rendering.
//!
//! The text layout is operator-facing: column order and presence are fixed,
//! widths adapt to content.
//!
//! ```text
//! RTOS Tasks
//!  #  Name  State    CorePin  Prio  Run Time  Run %  Stack Rem.
//! --------------------------------------------------------------
//!  1  main  running  0           5       100   10.0         256
//!  2  idle  ready    NO PIN      0       900   90.0         128
//! total run time: 1000
//! ```

use crate::{ReportError, TaskReport, TaskRow};

/// Report title line.
pub const TITLE: &str = "RTOS Tasks";

/// Column headers, in display order.
pub const COLUMNS: [&str; 8] = [
    "#",
    "Name",
    "State",
    "CorePin",
    "Prio",
    "Run Time",
    "Run %",
    "Stack Rem.",
];

/// Gap between adjacent columns.
const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Alignment per column; numeric columns are right-aligned.
const ALIGN: [Align; 8] = [
    Align::Right,
    Align::Left,
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Right,
];

fn cells(row: &TaskRow) -> [String; 8] {
    [
        row.number.to_string(),
        row.name.clone(),
        row.state_label.to_string(),
        row.core_label.clone(),
        row.prio.to_string(),
        row.rtc.to_string(),
        row.cpu_share.to_string(),
        row.stack_remaining.to_string(),
    ]
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.chars().count());
    match align {
        Align::Left => format!("{text}{}", " ".repeat(fill)),
        Align::Right => format!("{}{text}", " ".repeat(fill)),
    }
}

fn format_line<S: AsRef<str>>(values: &[S], widths: &[usize; 8]) -> String {
    let line = values
        .iter()
        .zip(widths.iter().zip(ALIGN.iter()))
        .map(|(v, (&w, &a))| pad(v.as_ref(), w, a))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

/// Renders the report as a text table with title and run-time footer.
///
/// Never fails; degraded fields already carry their fallback labels.
pub fn render_table(report: &TaskReport) -> String {
    let body: Vec<[String; 8]> = report.rows.iter().map(cells).collect();

    let mut widths = COLUMNS.map(|h| h.chars().count());
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header = format_line(&COLUMNS, &widths);
    let rule_len = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);

    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &body {
        out.push_str(&format_line(row, &widths));
        out.push('\n');
    }
    out.push_str(&format!("total run time: {}\n", report.run_time));
    out
}

/// Renders the report as pretty-printed JSON, newline-terminated like the
/// table.
pub fn render_json(report: &TaskReport) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
