// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

/// Page structure that the behaviors cannot work with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Section and indicator lists are both non-empty but differ in length.
    IndicatorMismatch {
        /// Number of sections found.
        sections: usize,
        /// Number of indicators found.
        indicators: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndicatorMismatch {
                sections,
                indicators,
            } => write!(
                f,
                "{sections} sections but {indicators} indicators; each section needs exactly one indicator"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Failures reported by a [`KeyValueStore`](crate::widgets::tags::KeyValueStore).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage cannot be reached (disabled, private mode, ...).
    Unavailable,
    /// A stored record could not be parsed.
    Corrupt,
    /// The storage refused a write (quota exceeded, ...).
    Rejected,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("storage unavailable"),
            Self::Corrupt => f.write_str("stored record is corrupt"),
            Self::Rejected => f.write_str("storage rejected the write"),
        }
    }
}

impl core::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn mismatch_message_names_both_counts() {
        let msg = ConfigError::IndicatorMismatch {
            sections: 4,
            indicators: 3,
        }
        .to_string();
        assert!(msg.starts_with("4 sections but 3 indicators"), "{msg}");
    }
}
