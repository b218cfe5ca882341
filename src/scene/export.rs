// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{LayoutVariantJson, StatusInfoJson, StatusJson};
use crate::layout::{PlacedBox, Route};
use crate::model::{BoxSpec, Point};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PointJson {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PointJson {
    fn from(point: Point) -> Self {
        Self { x: point.x, y: point.y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SceneJson {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub column_width: f64,
    pub columns: Vec<SceneColumnJson>,
    pub boxes: Vec<SceneBoxJson>,
    pub routes: Vec<SceneRouteJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SceneColumnJson {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SceneBoxJson {
    pub id: String,
    pub status: StatusJson,
    pub column: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
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

impl SceneBoxJson {
    pub(crate) fn new(placed: &PlacedBox, spec: Option<&BoxSpec>) -> Self {
        let rect = placed.rect();
        let meta = spec.map(BoxSpec::meta);
        Self {
            id: placed.id().to_string(),
            status: placed.status().into(),
            column: placed.column(),
            index: placed.index_in_column(),
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            name: meta.and_then(|meta| meta.name.clone()),
            address: meta.and_then(|meta| meta.address.clone()),
            device_type: meta.and_then(|meta| meta.device_type.clone()),
            layout_variant: meta.and_then(|meta| meta.layout_variant).map(Into::into),
            chart_values: meta.map(|meta| meta.chart_values.clone()).unwrap_or_default(),
            status_info: meta.and_then(|meta| meta.status_info.as_ref()).map(StatusInfoJson::from),
        }
    }
}

/// One connector: a four-point orthogonal polyline plus its paint and warning markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SceneRouteJson {
    pub connection_index: usize,
    pub from: String,
    pub to: String,
    pub points: Vec<PointJson>,
    pub elbow_x: f64,
    pub mid_y: f64,
    pub color: String,
    pub degraded: bool,
    pub elbow_icons: Vec<PointJson>,
}

impl From<&Route> for SceneRouteJson {
    fn from(route: &Route) -> Self {
        Self {
            connection_index: route.connection_index(),
            from: route.from_box_id().to_string(),
            to: route.to_box_id().to_string(),
            points: route.points().into_iter().map(PointJson::from).collect(),
            elbow_x: route.elbow_x(),
            mid_y: route.mid_y(),
            color: route.color().to_owned(),
            degraded: route.is_degraded(),
            elbow_icons: route.elbow_icons().iter().copied().map(PointJson::from).collect(),
        }
    }
}
