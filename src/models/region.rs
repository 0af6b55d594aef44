// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Region data structures.
//!
//! A region is a named interval on the media timeline, such as a clip
//! marker. Bounds are stored in seconds.

use crate::error::{ClipmarkError, Result};
use crate::util::timecode::{format_timecode, validate_time};
use serde::{Deserialize, Serialize};

/// A named `[start, end]` interval in seconds.
///
/// Fields are only reachable through [`Region::new`], and deserialized
/// values go through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRegion")]
pub struct Region {
    name: String,
    start: f64,
    end: f64,
}

/// Unchecked wire shape of a [`Region`].
#[derive(Deserialize)]
struct RawRegion {
    name: String,
    start: f64,
    end: f64,
}

impl TryFrom<RawRegion> for Region {
    type Error = ClipmarkError;

    fn try_from(raw: RawRegion) -> Result<Self> {
        Region::new(raw.name, raw.start, raw.end)
    }
}

impl Region {
    /// Create a region, checking that both bounds are valid times and
    /// `start <= end`.
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Result<Self> {
        validate_time(start)?;
        validate_time(end)?;
        if start > end {
            return Err(ClipmarkError::InvalidRegion { start, end });
        }
        Ok(Self {
            name: name.into(),
            start,
            end,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length of the region in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Check whether `time` falls inside the region (both ends inclusive).
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }

    /// Render as `[start-end] name` using timecodes.
    pub fn label(&self) -> Result<String> {
        Ok(format!(
            "[{}-{}] {}",
            format_timecode(self.start)?,
            format_timecode(self.end)?,
            self.name
        ))
    }
}
