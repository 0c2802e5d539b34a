// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU share of a task relative to total scheduler run time.

use std::fmt;

/// Rendered text when the share cannot be computed.
const NOT_AVAILABLE: &str = "n/a";

/// A task's share of total run time, in percent.
///
/// Serialises as a number, or `null` when not available.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum CpuShare {
    /// `rtc / run_time * 100`.
    Percent(f64),
    /// Total run time was zero, so there is no meaningful share.
    NotAvailable,
}

impl CpuShare {
    /// Computes `rtc / run_time * 100`.
    ///
    /// A zero `run_time` yields [`CpuShare::NotAvailable`] instead of a
    /// division by zero. Shares above 100 % are kept as-is: they occur when a
    /// task counter wraps after the total and are worth seeing.
    pub fn compute(rtc: u64, run_time: u64) -> Self {
        if run_time == 0 {
            return Self::NotAvailable;
        }
        Self::Percent(rtc as f64 / run_time as f64 * 100.0)
    }

    /// Returns the percentage, if available.
    pub fn percent(self) -> Option<f64> {
        match self {
            Self::Percent(p) => Some(p),
            Self::NotAvailable => None,
        }
    }
}

impl fmt::Display for CpuShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p:.1}"),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter() {
        let share = CpuShare::compute(50, 200);
        assert_eq!(share.to_string(), "25.0");
        assert!((share.percent().unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_run_time() {
        let share = CpuShare::compute(50, 0);
        assert_eq!(share, CpuShare::NotAvailable);
        assert_eq!(share.to_string(), "n/a");
        assert_eq!(share.percent(), None);
    }

    #[test]
    fn test_zero_rtc() {
        assert_eq!(CpuShare::compute(0, 1000).to_string(), "0.0");
    }

    #[test]
    fn test_one_decimal_rounding() {
        // 1/3 → 33.333…
        assert_eq!(CpuShare::compute(1, 3).to_string(), "33.3");
        // 2/3 → 66.666…
        assert_eq!(CpuShare::compute(2, 3).to_string(), "66.7");
    }

    #[test]
    fn test_large_counters_stay_finite() {
        let share = CpuShare::compute(u64::MAX, 1);
        assert!(share.percent().unwrap().is_finite());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&CpuShare::Percent(12.5)).unwrap(),
            "12.5"
        );
        assert_eq!(
            serde_json::to_string(&CpuShare::NotAvailable).unwrap(),
            "null"
        );
    }
}
