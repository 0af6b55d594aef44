// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Timecode formatting.
//!
//! Converts a playback position in seconds into an `HH:MM:SS:FF`,
//! `MM:SS:FF` or `SS:FF` display string. Leading fields are dropped while
//! they are zero, but once a field is shown every smaller field is shown too.

use crate::error::{ClipmarkError, Result};
use serde::Serialize;
use std::fmt;

/// Frames per second used by [`format_timecode`].
pub const FRAME_RATE: u32 = 30;

/// Which fields a rendered timecode contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    HoursMinutesSecondsFrames,
    MinutesSecondsFrames,
    SecondsFrames,
}

/// A time value split into whole hours, minutes, seconds and frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timecode {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub frames: u64,
}

impl Timecode {
    /// Decompose `time` at the default frame rate.
    pub fn from_seconds(time: f64) -> Result<Self> {
        Self::from_seconds_at(time, FRAME_RATE)
    }

    /// Decompose `time` at an explicit frame rate.
    ///
    /// Every field is floored, never rounded. The frame field is computed
    /// from `time % 1.0`, so binary representation error carries through
    /// (`2.3` seconds yields 8 frames at 30 fps, not 9).
    pub fn from_seconds_at(time: f64, frame_rate: u32) -> Result<Self> {
        validate_time(time)?;
        if frame_rate == 0 {
            return Err(ClipmarkError::InvalidFrameRate(frame_rate));
        }

        // `as u64` saturates for values beyond u64::MAX hours.
        Ok(Self {
            hours: (time / 3600.0).floor() as u64,
            minutes: ((time % 3600.0) / 60.0).floor() as u64,
            seconds: (time % 60.0).floor() as u64,
            frames: ((time % 1.0) * f64::from(frame_rate)).floor() as u64,
        })
    }

    /// Pick the layout. Guards run top-down: hours forces minutes on.
    pub fn layout(&self) -> Layout {
        if self.hours > 0 {
            Layout::HoursMinutesSecondsFrames
        } else if self.minutes > 0 {
            Layout::MinutesSecondsFrames
        } else {
            Layout::SecondsFrames
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layout() {
            Layout::HoursMinutesSecondsFrames => write!(
                f,
                "{:02}:{:02}:{:02}:{:02}",
                self.hours, self.minutes, self.seconds, self.frames
            ),
            Layout::MinutesSecondsFrames => write!(
                f,
                "{:02}:{:02}:{:02}",
                self.minutes, self.seconds, self.frames
            ),
            Layout::SecondsFrames => write!(f, "{:02}:{:02}", self.seconds, self.frames),
        }
    }
}

/// Reject negative, NaN and infinite seconds values.
pub fn validate_time(time: f64) -> Result<()> {
    let reason = if time.is_nan() {
        "not a number"
    } else if time.is_infinite() {
        "not finite"
    } else if time < 0.0 {
        "negative"
    } else {
        return Ok(());
    };
    log::warn!("Rejected time value {}: {}", time, reason);
    Err(ClipmarkError::InvalidTimeValue {
        value: time,
        reason,
    })
}

/// Format seconds as a timecode string at 30 frames per second.
pub fn format_timecode(time: f64) -> Result<String> {
    Ok(Timecode::from_seconds(time)?.to_string())
}
