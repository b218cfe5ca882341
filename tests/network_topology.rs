// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

use switchyard::config::load_diagram_config;
use switchyard::layout::{compute_layout, compute_routes, LayoutParams, RouteOptions};
use switchyard::model::DiagramConfig;
use switchyard::scene::{DiagramScene, SceneOptions};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn load_topology() -> DiagramConfig {
    let path = fixture_path("network_topology.json");
    load_diagram_config(&path).unwrap_or_else(|err| panic!("failed to load {path:?}: {err}"))
}

#[test]
fn device_list_fixture_lays_out_three_columns() {
    let config = load_topology();
    let sizes = config.columns.iter().map(|column| column.boxes.len()).collect::<Vec<_>>();
    assert_eq!(sizes, vec![3, 6, 2]);

    let layout = compute_layout(&config.columns, 1400.0, &LayoutParams::from(&config.params));
    assert_eq!(layout.canvas_height(), 6.0 * (150.0 + 24.0));

    // Column 0: first box on top, the other two against the bottom of the canvas.
    let pitch = layout.row_pitch();
    let server01 = layout.get("server01").expect("server01").rect();
    let server02 = layout.get("server02").expect("server02").rect();
    let server03 = layout.get("server03").expect("server03").rect();
    assert_eq!(server01.y, 12.0);
    assert!((server02.y - (4.0 * pitch + 12.0)).abs() < 1e-9);
    assert!((server03.bottom() - (layout.canvas_height() - 12.0)).abs() < 1e-9);

    // Column 2: plain top-down stacking.
    let server22 = layout.get("server22").expect("server22").rect();
    assert!((server22.y - (pitch + 12.0)).abs() < 1e-9);
}

#[test]
fn routes_skip_dangling_connection_and_flag_down_nodes() {
    let config = load_topology();
    let layout = compute_layout(&config.columns, 1400.0, &LayoutParams::from(&config.params));
    let routes = compute_routes(&config.connections, &layout, &RouteOptions::from(&config.params));

    assert_eq!(routes.len(), 9);
    assert!(routes.iter().all(|route| route.to_box_id().as_str() != "server99"));

    let healthy = routes
        .iter()
        .filter(|route| !route.is_degraded())
        .map(|route| (route.from_box_id().as_str(), route.to_box_id().as_str()))
        .collect::<Vec<_>>();
    assert_eq!(healthy, vec![("server02", "server15")]);
    assert!(routes.iter().all(|route| route.elbow_icons().len() == usize::from(route.is_degraded())));
}

#[test]
fn four_way_fan_out_spreads_along_source_edge() {
    let config = load_topology();
    let scene = DiagramScene::compute(&config, &SceneOptions::default());
    let source = scene.layout().get("server01").expect("server01").rect();

    let fan = scene
        .routes()
        .iter()
        .filter(|route| route.from_box_id().as_str() == "server01")
        .collect::<Vec<_>>();
    assert_eq!(fan.len(), 4);
    for pair in fan.windows(2) {
        assert!(pair[0].start().y < pair[1].start().y);
        // Earlier ranks take wider lanes, so their elbows sit further right.
        assert!(pair[0].elbow_x() > pair[1].elbow_x());
    }
    for route in &fan {
        assert!(source.contains_y_strictly(route.start().y));
        assert!(route.elbow_x() > route.start().x);
    }
}

#[test]
fn scene_json_is_stable_across_runs() {
    let config = load_topology();
    let render = || {
        let scene = DiagramScene::compute(&config, &SceneOptions::default());
        serde_json::to_string(&scene.to_json(&config)).expect("serialize scene")
    };
    assert_eq!(render(), render());
}
