// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Player state.
//!
//! A flat record of playback position, loaded media, timeline regions and
//! pointer flags. There is no shared instance: whoever drives playback owns
//! a `PlayerState` and hands references to the code that reads it.

use super::region::Region;
use crate::error::{ClipmarkError, Result};
use crate::util::timecode::format_timecode;
use std::path::{Path, PathBuf};

/// Playback and timeline state for one loaded video.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    /// Playback position in seconds
    current_time: f64,

    /// Media duration in seconds
    duration: f64,

    is_playing: bool,

    /// Selected media file (if any)
    selected_file: Option<PathBuf>,

    /// URL the media is served from
    video_url: String,

    /// Regions in insertion order
    regions: Vec<Region>,

    is_dragging: bool,
    is_hovering: bool,

    /// Timeline position under the pointer, in seconds
    hover_time: f64,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    pub fn hover_time(&self) -> f64 {
        self.hover_time
    }

    pub fn set_current_time(&mut self, time: f64) {
        log::trace!("current_time = {}", time);
        self.current_time = time;
    }

    pub fn set_duration(&mut self, duration: f64) {
        log::trace!("duration = {}", duration);
        self.duration = duration;
    }

    pub fn set_playing(&mut self, is_playing: bool) {
        log::trace!("is_playing = {}", is_playing);
        self.is_playing = is_playing;
    }

    /// Select a media file together with the URL it plays from.
    pub fn set_video_file(&mut self, file: impl Into<PathBuf>, url: impl Into<String>) {
        self.selected_file = Some(file.into());
        self.video_url = url.into();
        log::debug!("Selected video {}", self.video_url);
    }

    /// Append a region and return its index.
    pub fn add_region(&mut self, region: Region) -> usize {
        self.regions.push(region);
        log::debug!("Added region, total: {}", self.regions.len());
        self.regions.len() - 1
    }

    /// Replace the region at `index`.
    pub fn update_region(&mut self, index: usize, region: Region) -> Result<()> {
        let len = self.regions.len();
        let slot = self
            .regions
            .get_mut(index)
            .ok_or(ClipmarkError::RegionIndexOutOfRange { index, len })?;
        *slot = region;
        log::debug!("Updated region {}", index);
        Ok(())
    }

    /// Remove the region at `index`, shifting later regions down.
    pub fn remove_region(&mut self, index: usize) -> Result<Region> {
        if index >= self.regions.len() {
            return Err(ClipmarkError::RegionIndexOutOfRange {
                index,
                len: self.regions.len(),
            });
        }
        let removed = self.regions.remove(index);
        log::debug!("Removed region {}, total: {}", index, self.regions.len());
        Ok(removed)
    }

    pub fn set_is_dragging(&mut self, is_dragging: bool) {
        log::trace!("is_dragging = {}", is_dragging);
        self.is_dragging = is_dragging;
    }

    pub fn set_hover_time(&mut self, time: f64) {
        log::trace!("hover_time = {}", time);
        self.hover_time = time;
    }

    pub fn set_is_hovering(&mut self, is_hovering: bool) {
        log::trace!("is_hovering = {}", is_hovering);
        self.is_hovering = is_hovering;
    }

    /// Playback tick entry point.
    pub fn update_current_time(&mut self, time: f64) {
        self.set_current_time(time);
    }

    /// Flip play/pause and return the new state.
    pub fn toggle_playback(&mut self) -> bool {
        self.set_playing(!self.is_playing);
        self.is_playing
    }

    pub fn current_timecode(&self) -> Result<String> {
        format_timecode(self.current_time)
    }

    pub fn hover_timecode(&self) -> Result<String> {
        format_timecode(self.hover_time)
    }

    pub fn duration_timecode(&self) -> Result<String> {
        format_timecode(self.duration)
    }

    /// Regions containing `time`, in insertion order.
    pub fn regions_at(&self, time: f64) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(move |r| r.contains(time))
    }
}
