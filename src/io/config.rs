// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration file loading and rendering.
//!
//! This module reads [`FormatterConfig`] from YAML or JSON files and renders
//! it back to either format.

use crate::config::FormatterConfig;
use crate::error::{ClipmarkError, Result};
use std::path::Path;

/// Load and validate a config file, choosing the parser from the file
/// extension.
pub fn load(path: &Path) -> Result<FormatterConfig> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let config = match extension.as_deref() {
        Some("yaml") | Some("yml") => load_yaml(path)?,
        Some("json") => load_json(path)?,
        _ => {
            log::error!("Unsupported config extension: {:?}", extension);
            return Err(ClipmarkError::UnsupportedConfigFormat(path.to_path_buf()));
        }
    };

    config.validate()?;
    log::info!(
        "Loaded config from {} (frame rate {})",
        path.display(),
        config.frame_rate
    );
    Ok(config)
}

fn load_yaml(path: &Path) -> Result<FormatterConfig> {
    let yaml = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&yaml)?;
    Ok(config)
}

fn load_json(path: &Path) -> Result<FormatterConfig> {
    let json = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&json)?;
    Ok(config)
}

/// Render config as YAML.
pub fn to_yaml(config: &FormatterConfig) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}

/// Render config as pretty-printed JSON.
pub fn to_json(config: &FormatterConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
