// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram config files.
//!
//! Configs are JSON (see [`json`] for the exact shape). Loading validates IDs, sizing parameters
//! and box ID uniqueness, then hands back a [`DiagramConfig`] ready for layout. Connections that
//! point at unknown boxes are accepted here; routing skips them.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub mod json;


pub use json::{
    BoxJson, ColumnJson, ConnectionJson, DeviceJson, DiagramConfigJson, LayoutVariantJson,
    StatusEntryJson, StatusInfoJson, StatusJson,
};

use crate::model::{
    columns_from_devices, BoxId, BoxMeta, BoxSpec, Column, Connection, Device, DiagramConfig,
    DiagramParams, IdError, StatusEntry, StatusInfo,
};

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    InvalidId {
        location: String,
        value: String,
        source: IdError,
    },
    InvalidParameter {
        name: &'static str,
        value: f64,
    },
    DuplicateBoxId {
        id: BoxId,
        first: String,
        second: String,
    },
    AmbiguousBoxSource,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path: Some(path), source } => {
                write!(f, "json error at {path:?}: {source}")
            }
            Self::Json { path: None, source } => write!(f, "json error: {source}"),
            Self::InvalidId { location, value, source } => {
                write!(f, "invalid id at {location}: {value:?}: {source}")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid {name}: {value} (must be a finite number >= 0)")
            }
            Self::DuplicateBoxId { id, first, second } => {
                write!(f, "duplicate box id {id:?} at {first} and {second}")
            }
            Self::AmbiguousBoxSource => {
                f.write_str("config must declare boxes via either `columns` or `devices`, not both")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::DuplicateBoxId { .. } | Self::AmbiguousBoxSource => {
                None
            }
        }
    }
}

pub fn load_diagram_config(path: impl AsRef<Path>) -> Result<DiagramConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let json: DiagramConfigJson = serde_json::from_str(&raw)
        .map_err(|source| ConfigError::Json { path: Some(path.to_path_buf()), source })?;
    let config = diagram_config_from_json(json)?;
    tracing::debug!(
        path = %path.display(),
        columns = config.columns.len(),
        boxes = config.box_count(),
        connections = config.connections.len(),
        "config: loaded"
    );
    Ok(config)
}

pub fn parse_diagram_config(raw: &str) -> Result<DiagramConfig, ConfigError> {
    let json: DiagramConfigJson =
        serde_json::from_str(raw).map_err(|source| ConfigError::Json { path: None, source })?;
    diagram_config_from_json(json)
}

/// JSON schema of the config file format.
pub fn diagram_config_schema() -> schemars::Schema {
    schemars::schema_for!(DiagramConfigJson)
}

/// Built-in three-column network topology: config servers feeding message nodes feeding
/// clients, with four message nodes down.
pub fn demo_config() -> DiagramConfig {
    crate::model::fixtures::network_topology()
}

pub fn diagram_config_from_json(json: DiagramConfigJson) -> Result<DiagramConfig, ConfigError> {
    let params = DiagramParams {
        box_margin: check_param("boxMargin", json.box_margin)?,
        base_box_height: check_param("baseBoxHeight", json.base_box_height)?,
        line_spacing: check_param("lineSpacing", json.line_spacing)?,
    };

    let columns = match (json.columns, json.devices) {
        (Some(_), Some(_)) => return Err(ConfigError::AmbiguousBoxSource),
        (Some(columns), None) => columns
            .into_iter()
            .enumerate()
            .map(|(column_idx, column)| {
                let boxes = column
                    .boxes
                    .into_iter()
                    .enumerate()
                    .map(|(box_idx, spec)| {
                        box_spec_from_json(spec, || format!("columns[{column_idx}].boxes[{box_idx}].id"))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Column { color: column.color, boxes })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?,
        (None, Some(devices)) => {
            let devices = devices
                .into_iter()
                .enumerate()
                .map(|(device_idx, device)| {
                    let spec = box_spec_from_json(device.spec, || format!("devices[{device_idx}].id"))?;
                    Ok(Device { spec, column: device.column })
                })
                .collect::<Result<Vec<_>, ConfigError>>()?;
            columns_from_devices(devices)
        }
        (None, None) => Vec::new(),
    };

    check_unique_box_ids(&columns)?;

    let connections = json
        .connections
        .into_iter()
        .enumerate()
        .map(|(idx, connection)| {
            let from = parse_box_id(&connection.from, || format!("connections[{idx}].from"))?;
            let to = parse_box_id(&connection.to, || format!("connections[{idx}].to"))?;
            Ok(match connection.color {
                Some(color) => Connection::new(from, to).with_color(color),
                None => Connection::new(from, to),
            })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    Ok(DiagramConfig { columns, connections, params })
}

/// Converts a config back into its JSON shape, always using the `columns` form.
pub fn diagram_config_to_json(config: &DiagramConfig) -> DiagramConfigJson {
    let columns = config
        .columns
        .iter()
        .map(|column| ColumnJson {
            color: column.color.clone(),
            boxes: column.boxes.iter().map(box_spec_to_json).collect(),
        })
        .collect();
    let connections = config
        .connections
        .iter()
        .map(|connection| ConnectionJson {
            from: connection.from_box_id().to_string(),
            to: connection.to_box_id().to_string(),
            color: connection.color().map(str::to_owned),
        })
        .collect();

    DiagramConfigJson {
        box_margin: config.params.box_margin,
        base_box_height: config.params.base_box_height,
        line_spacing: config.params.line_spacing,
        columns: Some(columns),
        devices: None,
        connections,
    }
}

fn check_param(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

fn parse_box_id(value: &str, location: impl FnOnce() -> String) -> Result<BoxId, ConfigError> {
    BoxId::new(value).map_err(|source| ConfigError::InvalidId {
        location: location(),
        value: value.to_owned(),
        source,
    })
}

fn box_spec_from_json(
    json: BoxJson,
    location: impl FnOnce() -> String,
) -> Result<BoxSpec, ConfigError> {
    let id = parse_box_id(&json.id, location)?;
    let status_info = match json.status_info {
        Some(StatusInfoJson::Text(text)) if text.trim().is_empty() => None,
        Some(StatusInfoJson::Text(text)) => Some(StatusInfo::Text(text)),
        Some(StatusInfoJson::Entries(entries)) => Some(StatusInfo::Entries(
            entries
                .into_iter()
                .map(|entry| StatusEntry { key: entry.key, value: entry.value })
                .collect(),
        )),
        None => None,
    };
    let meta = BoxMeta {
        name: json.name,
        address: json.address,
        device_type: json.device_type.filter(|device_type| !device_type.is_empty()),
        layout_variant: json.layout_variant.map(Into::into),
        chart_values: json.chart_values,
        status_info,
    };
    Ok(BoxSpec::new(id, json.status.into()).with_meta(meta))
}

fn box_spec_to_json(spec: &BoxSpec) -> BoxJson {
    let meta = spec.meta();
    let status_info = meta.status_info.as_ref().map(StatusInfoJson::from);
    BoxJson {
        id: spec.id().to_string(),
        status: spec.status().into(),
        name: meta.name.clone(),
        address: meta.address.clone(),
        device_type: meta.device_type.clone(),
        layout_variant: meta.layout_variant.map(Into::into),
        chart_values: meta.chart_values.clone(),
        status_info,
    }
}

fn check_unique_box_ids(columns: &[Column]) -> Result<(), ConfigError> {
    let mut seen = BTreeMap::<&BoxId, (usize, usize)>::new();
    for (column_idx, column) in columns.iter().enumerate() {
        for (box_idx, spec) in column.boxes.iter().enumerate() {
            if let Some((first_column, first_box)) = seen.insert(spec.id(), (column_idx, box_idx)) {
                return Err(ConfigError::DuplicateBoxId {
                    id: spec.id().clone(),
                    first: format!("column {first_column} box {first_box}"),
                    second: format!("column {column_idx} box {box_idx}"),
                });
            }
        }
    }
    Ok(())
}
