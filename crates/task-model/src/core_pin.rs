// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Task core affinity.

use std::fmt;

/// Wire sentinel for a task created without core affinity.
pub(crate) const NO_AFFINITY: i32 = -1;

/// Core affinity of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum CorePin {
    /// Not pinned; the scheduler may run the task on any core.
    Unpinned,
    /// Pinned to the given core. Any value other than the `-1` sentinel is
    /// carried as-is.
    Core(i32),
}

impl CorePin {
    /// Interprets a raw `core_num` value.
    pub fn from_raw(core_num: i32) -> Self {
        if core_num == NO_AFFINITY {
            Self::Unpinned
        } else {
            Self::Core(core_num)
        }
    }

    /// Returns the raw `core_num` value.
    pub fn raw(self) -> i32 {
        match self {
            Self::Unpinned => NO_AFFINITY,
            Self::Core(n) => n,
        }
    }

    /// Report label: `"NO PIN"` or the core number.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl From<i32> for CorePin {
    fn from(core_num: i32) -> Self {
        Self::from_raw(core_num)
    }
}

impl From<CorePin> for i32 {
    fn from(pin: CorePin) -> Self {
        pin.raw()
    }
}

impl fmt::Display for CorePin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unpinned => f.write_str("NO PIN"),
            Self::Core(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_unpinned() {
        assert_eq!(CorePin::from_raw(-1), CorePin::Unpinned);
        assert_eq!(CorePin::from_raw(-1).label(), "NO PIN");
    }

    #[test]
    fn test_core_label_is_number() {
        for n in [0, 1, 7, -2, i32::MAX] {
            assert_eq!(CorePin::from_raw(n).label(), n.to_string());
        }
    }

    #[test]
    fn test_raw_roundtrip() {
        assert_eq!(CorePin::Unpinned.raw(), -1);
        assert_eq!(CorePin::Core(1).raw(), 1);
    }
}
