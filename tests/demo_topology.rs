// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use switchyard::config::{demo_config, diagram_config_to_json, parse_diagram_config};
use switchyard::model::{LayoutVariant, Status};
use switchyard::scene::{DiagramScene, SceneOptions};

#[test]
fn demo_config_is_the_three_column_topology() {
    let config = demo_config();

    let sizes = config.columns.iter().map(|column| column.boxes.len()).collect::<Vec<_>>();
    assert_eq!(sizes, vec![3, 6, 2]);
    assert_eq!(config.connections.len(), 9);

    let down = config
        .columns
        .iter()
        .flat_map(|column| column.boxes.iter())
        .filter(|spec| spec.status() == Status::Down)
        .map(|spec| spec.id().as_str())
        .collect::<Vec<_>>();
    assert_eq!(down, vec!["server11", "server12", "server13", "server14"]);

    for spec in config.columns.iter().flat_map(|column| column.boxes.iter()) {
        assert!(spec.meta().name.is_some(), "{} has no name", spec.id());
        assert!(spec.meta().layout_variant.is_some(), "{} has no layout variant", spec.id());
    }
    assert_eq!(config.columns[0].boxes[0].meta().layout_variant, Some(LayoutVariant::TwoColRight25));
}

#[test]
fn demo_scene_routes_every_connection() {
    let config = demo_config();
    let scene = DiagramScene::compute(&config, &SceneOptions::default());

    assert_eq!(scene.layout().boxes().len(), 11);
    assert_eq!(scene.layout().canvas_height(), 6.0 * (150.0 + 24.0));
    assert_eq!(scene.routes().len(), config.connections.len());
    assert_eq!(scene.degraded_routes().count(), 8);

    for route in scene.routes() {
        let source = scene.layout().get(route.from_box_id().as_str()).expect("source box").rect();
        let target = scene.layout().get(route.to_box_id().as_str()).expect("target box").rect();
        assert_eq!(route.start().x, source.right());
        assert_eq!(route.end().x, target.x);
        assert!(source.contains_y_strictly(route.start().y));
        assert!(target.contains_y_strictly(route.end().y));
    }
}

#[test]
fn demo_config_survives_a_json_round_trip() {
    let config = demo_config();
    let raw = serde_json::to_string(&diagram_config_to_json(&config)).expect("serialize config");
    let parsed = parse_diagram_config(&raw).expect("parse exported config");
    assert_eq!(parsed, config);
}
