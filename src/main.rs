// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! clipmark command line tool
//!
//! Formats seconds values as timecodes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clipmark::{io::config, FormatterConfig, Layout, Timecode};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "clipmark")]
#[command(about = "Format video positions as HH:MM:SS:FF timecodes")]
struct Cli {
    /// Config file (.yaml, .yml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format one or more seconds values
    Format {
        /// Positions in seconds
        #[arg(required = true, allow_negative_numbers = true)]
        seconds: Vec<f64>,

        /// Frames per second (overrides the config file)
        #[arg(long)]
        fps: Option<u32>,

        /// Print one JSON object per value
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config {
        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
}

/// One line of `format --json` output.
#[derive(Serialize)]
struct FormattedValue {
    seconds: f64,
    timecode: String,
    layout: Layout,
    fields: Timecode,
}

/// Resolve formatter settings: `--fps` beats the config file, which beats
/// the defaults.
fn resolve_settings(config_path: Option<&Path>, fps: Option<u32>) -> Result<FormatterConfig> {
    let settings = match config_path {
        Some(path) => config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FormatterConfig::default(),
    };
    let settings = match fps {
        Some(fps) => settings.with_frame_rate(fps),
        None => settings,
    };
    settings.validate()?;
    Ok(settings)
}

/// Render one `format` output line.
fn format_value(settings: &FormatterConfig, value: f64, json: bool) -> Result<String> {
    let fields = settings
        .timecode(value)
        .with_context(|| format!("Cannot format {}", value))?;
    if json {
        let line = FormattedValue {
            seconds: value,
            timecode: fields.to_string(),
            layout: fields.layout(),
            fields,
        };
        Ok(serde_json::to_string(&line)?)
    } else {
        Ok(fields.to_string())
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Format { seconds, fps, json } => {
            let settings = resolve_settings(cli.config.as_deref(), fps)?;
            log::debug!(
                "Formatting {} values at {} fps",
                seconds.len(),
                settings.frame_rate
            );

            // Stops at the first invalid value.
            for value in seconds {
                println!("{}", format_value(&settings, value, json)?);
            }
        }
        Command::Config { json } => {
            let settings = resolve_settings(cli.config.as_deref(), None)?;
            let rendered = if json {
                config::to_json(&settings)?
            } else {
                config::to_yaml(&settings)?
            };
            println!("{}", rendered.trim_end());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse_format(args: &[&str]) -> (Option<PathBuf>, Vec<f64>, Option<u32>, bool) {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Format { seconds, fps, json } => (cli.config, seconds, fps, json),
            Command::Config { .. } => panic!("expected format command"),
        }
    }

    #[test]
    fn test_fps_overrides_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("c.yaml");
        fs::write(&path, "frame_rate: 25\n").unwrap();
        let path_str = path.to_str().unwrap();

        let (config, seconds, fps, _) =
            parse_format(&["clipmark", "-c", path_str, "format", "0.5", "--fps", "60"]);
        assert_eq!(seconds, vec![0.5]);
        let settings = resolve_settings(config.as_deref(), fps).unwrap();
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(format_value(&settings, 0.5, false).unwrap(), "00:30");

        // Global flag after the subcommand, no --fps
        let (config, _, fps, _) = parse_format(&["clipmark", "format", "0.5", "-c", path_str]);
        let settings = resolve_settings(config.as_deref(), fps).unwrap();
        assert_eq!(settings.frame_rate, 25);
        assert_eq!(format_value(&settings, 0.5, false).unwrap(), "00:12");
    }

    #[test]
    fn test_default_settings() {
        let (config, _, fps, json) = parse_format(&["clipmark", "format", "3725.5"]);
        assert!(!json);
        let settings = resolve_settings(config.as_deref(), fps).unwrap();
        assert_eq!(settings, FormatterConfig::default());
        assert_eq!(format_value(&settings, 3725.5, false).unwrap(), "01:02:05:15");
    }

    #[test]
    fn test_zero_fps_rejected() {
        assert!(resolve_settings(None, Some(0)).is_err());
    }

    #[test]
    fn test_negative_value_parses_then_fails() {
        let (config, seconds, fps, _) = parse_format(&["clipmark", "format", "1", "-1"]);
        assert_eq!(seconds, vec![1.0, -1.0]);

        let settings = resolve_settings(config.as_deref(), fps).unwrap();
        assert_eq!(format_value(&settings, seconds[0], false).unwrap(), "01:00");
        assert!(format_value(&settings, seconds[1], false).is_err());
    }

    #[test]
    fn test_json_line_shape() {
        let (config, seconds, fps, json) =
            parse_format(&["clipmark", "format", "65", "--json"]);
        assert!(json);
        let settings = resolve_settings(config.as_deref(), fps).unwrap();
        let line = format_value(&settings, seconds[0], json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["fields", "layout", "seconds", "timecode"]);
        assert_eq!(value["seconds"], 65.0);
        assert_eq!(value["timecode"], "01:05:00");
        assert_eq!(value["layout"], "minutes_seconds_frames");
        assert_eq!(value["fields"]["minutes"], 1);
        assert_eq!(value["fields"]["frames"], 0);
    }

    #[test]
    fn test_format_requires_a_value() {
        assert!(Cli::try_parse_from(["clipmark", "format"]).is_err());
    }
}
