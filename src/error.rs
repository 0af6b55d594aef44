// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for the clipmark library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipmarkError {
    #[error("Invalid time value {value}: {reason}")]
    InvalidTimeValue { value: f64, reason: &'static str },

    #[error("Invalid frame rate {0}: must be at least 1")]
    InvalidFrameRate(u32),

    #[error("Invalid region: start {start} is after end {end}")]
    InvalidRegion { start: f64, end: f64 },

    #[error("Region index {index} out of range ({len} regions)")]
    RegionIndexOutOfRange { index: usize, len: usize },

    #[error("Unsupported config format: {0}")]
    UnsupportedConfigFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClipmarkError>;
