// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! On-disk JSON shape of a diagram config (camelCase keys).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    LayoutVariant, Status, StatusInfo, DEFAULT_BASE_BOX_HEIGHT, DEFAULT_BOX_MARGIN,
    DEFAULT_LINE_SPACING,
};

fn default_box_margin() -> f64 {
    DEFAULT_BOX_MARGIN
}

fn default_base_box_height() -> f64 {
    DEFAULT_BASE_BOX_HEIGHT
}

fn default_line_spacing() -> f64 {
    DEFAULT_LINE_SPACING
}

/// A diagram: sizing parameters, boxes (as `columns` or as a flat `devices` list) and
/// connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConfigJson {
    #[serde(default = "default_box_margin")]
    pub box_margin: f64,
    #[serde(default = "default_base_box_height")]
    pub base_box_height: f64,
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnJson>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<DeviceJson>>,
    #[serde(default)]
    pub connections: Vec<ConnectionJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub boxes: Vec<BoxJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoxJson {
    pub id: String,
    pub status: StatusJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_variant: Option<LayoutVariantJson>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chart_values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_info: Option<StatusInfoJson>,
}

/// A box in the flat device-list format; `column` picks the column it lands in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceJson {
    #[serde(flatten)]
    pub spec: BoxJson,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionJson {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusJson {
    Up,
    Down,
}

impl From<StatusJson> for Status {
    fn from(value: StatusJson) -> Self {
        match value {
            StatusJson::Up => Self::Up,
            StatusJson::Down => Self::Down,
        }
    }
}

impl From<Status> for StatusJson {
    fn from(value: Status) -> Self {
        match value {
            Status::Up => Self::Up,
            Status::Down => Self::Down,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LayoutVariantJson {
    #[serde(rename = "1x1")]
    Single,
    #[serde(rename = "2col-25-right")]
    TwoColRight25,
    #[serde(rename = "4col-2row-special")]
    FourColTwoRow,
    #[serde(rename = "2x2-right-25")]
    TwoByTwoRight25,
    #[serde(rename = "2x2-right-33")]
    TwoByTwoRight33,
}

impl From<LayoutVariantJson> for LayoutVariant {
    fn from(value: LayoutVariantJson) -> Self {
        match value {
            LayoutVariantJson::Single => Self::Single,
            LayoutVariantJson::TwoColRight25 => Self::TwoColRight25,
            LayoutVariantJson::FourColTwoRow => Self::FourColTwoRow,
            LayoutVariantJson::TwoByTwoRight25 => Self::TwoByTwoRight25,
            LayoutVariantJson::TwoByTwoRight33 => Self::TwoByTwoRight33,
        }
    }
}

impl From<LayoutVariant> for LayoutVariantJson {
    fn from(value: LayoutVariant) -> Self {
        match value {
            LayoutVariant::Single => Self::Single,
            LayoutVariant::TwoColRight25 => Self::TwoColRight25,
            LayoutVariant::FourColTwoRow => Self::FourColTwoRow,
            LayoutVariant::TwoByTwoRight25 => Self::TwoByTwoRight25,
            LayoutVariant::TwoByTwoRight33 => Self::TwoByTwoRight33,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StatusInfoJson {
    Text(String),
    Entries(Vec<StatusEntryJson>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusEntryJson {
    pub key: String,
    pub value: String,
}

impl From<&StatusInfo> for StatusInfoJson {
    fn from(info: &StatusInfo) -> Self {
        match info {
            StatusInfo::Text(text) => Self::Text(text.clone()),
            StatusInfo::Entries(entries) => Self::Entries(
                entries
                    .iter()
                    .map(|entry| StatusEntryJson { key: entry.key.clone(), value: entry.value.clone() })
                    .collect(),
            ),
        }
    }
}
