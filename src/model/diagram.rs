// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::BoxId;
use super::status::Status;

pub const DEFAULT_BOX_MARGIN: f64 = 12.0;
pub const DEFAULT_BASE_BOX_HEIGHT: f64 = 150.0;
pub const DEFAULT_LINE_SPACING: f64 = 40.0;

/// Inner arrangement a renderer uses for a box's body. Layout and routing never read it; the
/// config file spells these `1x1`, `2col-25-right`, `4col-2row-special`, `2x2-right-25` and
/// `2x2-right-33`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutVariant {
    Single,
    TwoColRight25,
    FourColTwoRow,
    TwoByTwoRight25,
    TwoByTwoRight33,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub key: String,
    pub value: String,
}

/// Free-form status detail shown inside a box: either a single line or key/value rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusInfo {
    Text(String),
    Entries(Vec<StatusEntry>),
}

/// Display metadata carried alongside a box for the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxMeta {
    pub name: Option<String>,
    pub address: Option<String>,
    pub device_type: Option<String>,
    pub layout_variant: Option<LayoutVariant>,
    pub chart_values: Vec<f64>,
    pub status_info: Option<StatusInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpec {
    id: BoxId,
    status: Status,
    meta: BoxMeta,
}

impl BoxSpec {
    pub fn new(id: BoxId, status: Status) -> Self {
        Self { id, status, meta: BoxMeta::default() }
    }

    pub fn with_meta(mut self, meta: BoxMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn id(&self) -> &BoxId {
        &self.id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn meta(&self) -> &BoxMeta {
        &self.meta
    }
}

/// A vertical band of boxes. Box order is the declared top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub color: Option<String>,
    pub boxes: Vec<BoxSpec>,
}

impl Column {
    pub fn new(boxes: Vec<BoxSpec>) -> Self {
        Self { color: None, boxes }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A directed edge between two boxes.
///
/// Endpoints are not required to exist; routing drops connections whose endpoints are unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    from: BoxId,
    to: BoxId,
    color: Option<String>,
}

impl Connection {
    pub fn new(from: BoxId, to: BoxId) -> Self {
        Self { from, to, color: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn from_box_id(&self) -> &BoxId {
        &self.from
    }

    pub fn to_box_id(&self) -> &BoxId {
        &self.to
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// Global sizing parameters, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramParams {
    pub box_margin: f64,
    pub base_box_height: f64,
    pub line_spacing: f64,
}

impl Default for DiagramParams {
    fn default() -> Self {
        Self {
            box_margin: DEFAULT_BOX_MARGIN,
            base_box_height: DEFAULT_BASE_BOX_HEIGHT,
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiagramConfig {
    pub columns: Vec<Column>,
    pub connections: Vec<Connection>,
    pub params: DiagramParams,
}

impl DiagramConfig {
    pub fn box_count(&self) -> usize {
        self.columns.iter().map(|column| column.boxes.len()).sum()
    }
}

/// A box declared in the flat device-list format, naming its own column.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub spec: BoxSpec,
    pub column: usize,
}

/// Groups a flat device list into columns.
///
/// The result has `max(column) + 1` columns; columns no device names stay empty. Within a column
/// devices keep their input order.
pub fn columns_from_devices(devices: impl IntoIterator<Item = Device>) -> Vec<Column> {
    let mut columns = Vec::<Column>::new();
    for device in devices {
        if columns.len() <= device.column {
            columns.resize_with(device.column + 1, Column::default);
        }
        columns[device.column].boxes.push(device.spec);
    }
    columns
}
