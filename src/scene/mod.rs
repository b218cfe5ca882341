// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Config → layout → routes in one call, plus a JSON export for renderers.

use std::collections::BTreeMap;

use crate::layout::{
    compute_layout, compute_routes, ColumnLayout, LaneBand, LayoutParams, Route, RouteOptions,
    RoutePalette,
};
use crate::model::{BoxSpec, DiagramConfig};

pub mod export;

pub use export::{PointJson, SceneBoxJson, SceneColumnJson, SceneJson, SceneRouteJson};

pub const DEFAULT_CANVAS_WIDTH: f64 = 1400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    pub canvas_width: f64,
    pub lane_band: LaneBand,
    pub palette: RoutePalette,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            lane_band: LaneBand::default(),
            palette: RoutePalette::default(),
        }
    }
}

/// Geometry for one diagram: placed boxes and the routes between them.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramScene {
    layout: ColumnLayout,
    routes: Vec<Route>,
}

impl DiagramScene {
    pub fn compute(config: &DiagramConfig, options: &SceneOptions) -> Self {
        let layout =
            compute_layout(&config.columns, options.canvas_width, &LayoutParams::from(&config.params));
        let route_options = RouteOptions {
            line_spacing: config.params.line_spacing,
            lane_band: options.lane_band,
            palette: options.palette.clone(),
        };
        let routes = compute_routes(&config.connections, &layout, &route_options);
        Self { layout, routes }
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn degraded_routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|route| route.is_degraded())
    }

    /// Exports the scene, joining each placed box with the display metadata from `config`.
    ///
    /// `config` should be the one the scene was computed from; boxes it does not know are
    /// exported without metadata.
    pub fn to_json(&self, config: &DiagramConfig) -> SceneJson {
        let specs = config
            .columns
            .iter()
            .flat_map(|column| column.boxes.iter())
            .map(|spec| (spec.id().as_str(), spec))
            .collect::<BTreeMap<&str, &BoxSpec>>();

        let column_width = self.layout.column_width();
        let columns = config
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| SceneColumnJson {
                index,
                color: column.color.clone(),
                x: column_width * index as f64,
                width: column_width,
            })
            .collect();

        let boxes = self
            .layout
            .boxes()
            .iter()
            .map(|placed| SceneBoxJson::new(placed, specs.get(placed.id().as_str()).copied()))
            .collect();

        let routes = self.routes.iter().map(SceneRouteJson::from).collect();

        SceneJson {
            canvas_width: self.layout.canvas_width(),
            canvas_height: self.layout.canvas_height(),
            column_width,
            columns,
            boxes,
            routes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagramScene, SceneOptions};
    use crate::config::{demo_config, parse_diagram_config};
    use crate::model::fixtures;

    #[test]
    fn demo_scene_routes_every_connection() {
        let config = demo_config();
        let scene = DiagramScene::compute(&config, &SceneOptions::default());

        assert_eq!(scene.layout().boxes().len(), 11);
        assert_eq!(scene.layout().canvas_height(), 6.0 * 174.0);
        assert_eq!(scene.routes().len(), 9);
        // Only server02 -> server15 joins two healthy boxes.
        assert_eq!(scene.degraded_routes().count(), 8);
    }

    #[test]
    fn json_export_carries_metadata_and_icons() {
        let config = demo_config();
        let scene = DiagramScene::compute(&config, &SceneOptions::default());
        let json = scene.to_json(&config);

        assert_eq!(json.columns.len(), 3);
        assert_eq!(json.columns[1].color.as_deref(), Some("#29282e"));
        assert_eq!(json.boxes.len(), 11);
        assert_eq!(json.boxes[0].id, "server01");
        assert_eq!(json.boxes[0].name.as_deref(), Some("Server 01"));

        for route in &json.routes {
            assert_eq!(route.points.len(), 4);
            assert_eq!(route.elbow_icons.len(), usize::from(route.degraded));
        }

        let value = serde_json::to_value(&json).expect("serialize scene");
        assert!(value["canvasHeight"].is_number());
        assert!(value["routes"][0]["elbowIcons"].is_array());
        assert_eq!(value["boxes"][3]["status"], "down");
    }

    #[test]
    fn end_to_end_three_column_scenario() {
        let raw = r#"{
          "boxMargin": 12, "baseBoxHeight": 150, "lineSpacing": 40,
          "columns": [
            { "boxes": [{ "id": "A", "status": "up" }] },
            { "boxes": [{ "id": "B", "status": "up" }, { "id": "C", "status": "up" }] },
            { "boxes": [{ "id": "D", "status": "up" }] }
          ],
          "connections": [{ "from": "A", "to": "B" }, { "from": "A", "to": "C" }]
        }"#;
        let config = parse_diagram_config(raw).expect("config");
        let options = SceneOptions { canvas_width: 1400.0, ..SceneOptions::default() };
        let scene = DiagramScene::compute(&config, &options);

        assert_eq!(scene.layout().canvas_height(), 348.0);
        let [ab, ac] = scene.routes() else {
            panic!("expected two routes, got {}", scene.routes().len());
        };
        assert!(ab.start().y < ac.start().y);
        assert!(ab.elbow_x() > ab.start().x);
        assert!(ac.elbow_x() > ac.start().x);
    }

    #[test]
    fn scene_computation_is_idempotent() {
        let config = fixtures::network_topology();
        let options = SceneOptions::default();
        let first = DiagramScene::compute(&config, &options);
        let second = DiagramScene::compute(&config, &options);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.to_json(&config)).expect("json"),
            serde_json::to_string(&second.to_json(&config)).expect("json"),
        );
    }

    #[test]
    fn unknown_boxes_export_without_metadata() {
        let config = fixtures::fan_out_small();
        let scene = DiagramScene::compute(&config, &SceneOptions::default());
        let json = scene.to_json(&crate::model::DiagramConfig::default());
        assert_eq!(json.boxes.len(), 4);
        assert!(json.boxes.iter().all(|b| b.name.is_none()));
        assert!(json.columns.is_empty());
    }
}
