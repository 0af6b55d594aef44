// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! clipmark - timecode formatting and region state for video scrubbing
//!
//! Renders playback positions as `HH:MM:SS:FF` style timecodes and keeps
//! the playback and region state an annotation front end works against.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod util;

pub use config::FormatterConfig;
pub use error::{ClipmarkError, Result};
pub use models::{player::PlayerState, region::Region};
pub use util::timecode::{format_timecode, Layout, Timecode, FRAME_RATE};
