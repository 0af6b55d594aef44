// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Formatter configuration.
//!
//! Settings are loaded from YAML or JSON by [`crate::io::config`]. Keys that
//! are missing from a file take their default values; unknown keys are an
//! error.

use crate::error::{ClipmarkError, Result};
use crate::util::timecode::{Timecode, FRAME_RATE};
use serde::{Deserialize, Serialize};

/// Settings that control how seconds are rendered as timecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Frames per second used for the frame field.
    pub frame_rate: u32,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
        }
    }
}

impl FormatterConfig {
    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(ClipmarkError::InvalidFrameRate(self.frame_rate));
        }
        Ok(())
    }

    /// Return a copy using `frame_rate` frames per second.
    pub fn with_frame_rate(self, frame_rate: u32) -> Self {
        Self { frame_rate }
    }

    /// Decompose `time` using these settings.
    pub fn timecode(&self, time: f64) -> Result<Timecode> {
        Timecode::from_seconds_at(time, self.frame_rate)
    }

    /// Format `time` using these settings.
    pub fn format(&self, time: f64) -> Result<String> {
        Ok(self.timecode(time)?.to_string())
    }
}
