// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Switchyard CLI entrypoint.
//!
//! Reads a diagram config (or the built-in demo), computes box layout and connector routes, and
//! prints the resulting scene as JSON on stdout. Set `SWITCHYARD_LOG` (e.g. `debug`) to see
//! skipped connections and other diagnostics on stderr.

use std::error::Error;
use std::io::{self, Write};

use serde::Serialize;
use switchyard::config::{demo_config, diagram_config_schema, load_diagram_config};
use switchyard::layout::{LaneBand, RoutePalette};
use switchyard::scene::{DiagramScene, SceneOptions, DEFAULT_CANVAS_WIDTH};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SWITCHYARD_LOG";
const DEFAULT_COLUMN_LANE_FRACTION: f64 = 0.25;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <config.json> [--width <px>] [--lane-band <band>] [--connection-colors] [--compact]\n  {program} --config <config.json> [...]\n  {program} --demo [...]\n  {program} --schema [--compact]\n\nPrints the computed scene (boxes + routes) as JSON.\n--width sets the canvas width (default {DEFAULT_CANVAS_WIDTH}).\n--lane-band selects lane scaling: `line-spacing` (default) or `column[:<fraction>]` (default fraction {DEFAULT_COLUMN_LANE_FRACTION}).\n--connection-colors paints healthy routes with their configured colour.\n--schema prints the JSON schema of the config format.\n--compact prints single-line JSON."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    config_path: Option<String>,
    demo: bool,
    schema: bool,
    width: Option<f64>,
    lane_band: Option<LaneBand>,
    connection_colors: bool,
    compact: bool,
}

fn parse_lane_band(raw: &str) -> Result<LaneBand, ()> {
    match raw {
        "line-spacing" => Ok(LaneBand::LineSpacing),
        "column" => Ok(LaneBand::ColumnFraction(DEFAULT_COLUMN_LANE_FRACTION)),
        _ => {
            let fraction = raw.strip_prefix("column:").ok_or(())?;
            let fraction: f64 = fraction.parse().map_err(|_| ())?;
            if !fraction.is_finite() || fraction <= 0.0 {
                return Err(());
            }
            Ok(LaneBand::ColumnFraction(fraction))
        }
    }
}

fn set_flag(flag: &mut bool) -> Result<(), ()> {
    if *flag {
        return Err(());
    }
    *flag = true;
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => set_flag(&mut options.demo)?,
            "--schema" => set_flag(&mut options.schema)?,
            "--connection-colors" => set_flag(&mut options.connection_colors)?,
            "--compact" => set_flag(&mut options.compact)?,
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let width: f64 = raw.parse().map_err(|_| ())?;
                if !width.is_finite() || width <= 0.0 {
                    return Err(());
                }
                options.width = Some(width);
            }
            "--lane-band" => {
                if options.lane_band.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.lane_band = Some(parse_lane_band(&raw)?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(arg);
            }
        }
    }

    if options.schema {
        let scene_flags = options.config_path.is_some()
            || options.demo
            || options.width.is_some()
            || options.lane_band.is_some()
            || options.connection_colors;
        return if scene_flags { Err(()) } else { Ok(options) };
    }

    if options.demo == options.config_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, compact: bool) -> io::Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "switchyard".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        let mut stdout = std::io::stdout().lock();
        if options.schema {
            write_json(&mut stdout, &diagram_config_schema(), options.compact)?;
            return Ok(());
        }

        let config = match options.config_path.as_deref() {
            Some(path) => load_diagram_config(path)?,
            None => demo_config(),
        };

        let scene_options = SceneOptions {
            canvas_width: options.width.unwrap_or(DEFAULT_CANVAS_WIDTH),
            lane_band: options.lane_band.unwrap_or_default(),
            palette: RoutePalette {
                prefer_connection_color: options.connection_colors,
                ..RoutePalette::default()
            },
        };
        let scene = DiagramScene::compute(&config, &scene_options);
        let dropped = config.connections.len() - scene.routes().len();
        if dropped > 0 {
            tracing::warn!(dropped, "some connections reference unknown boxes and were not routed");
        }

        write_json(&mut stdout, &scene.to_json(&config), options.compact)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("switchyard: {err}");
        std::process::exit(1);
    }
}
